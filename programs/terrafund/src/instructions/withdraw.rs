use anchor_lang::prelude::*;

use crate::error::TerrafundError;
use crate::events::WithdrawalProcessed;
use crate::state::{Campaign, ProgramState, Transaction};

/// Withdraws escrowed funds from a campaign
///
/// Only the campaign creator can withdraw. The platform fee is paid to the
/// fee recipient and the rest to the creator. The campaign account must keep
/// at least its rent-exempt minimum after the withdrawal.
///
/// # Security
/// `platform_fee_recipient` is validated against `program_state` so the fee
/// cannot be redirected to an arbitrary wallet.
pub fn withdraw(ctx: Context<Withdraw>, campaign_id: u64, amount: u64) -> Result<()> {
    let clock = Clock::get()?;
    let creator = ctx.accounts.creator.key();

    let campaign_info = ctx.accounts.campaign.to_account_info();
    let rent_floor = Rent::get()?.minimum_balance(campaign_info.data_len());
    let escrow_lamports = campaign_info.lamports();

    let split = ctx.accounts.campaign.record_withdrawal(
        &creator,
        amount,
        &ctx.accounts.program_state,
        escrow_lamports,
        rent_floor,
    )?;

    // The campaign account is program-owned, so lamports move directly
    **campaign_info.try_borrow_mut_lamports()? -= amount;
    **ctx
        .accounts
        .creator
        .to_account_info()
        .try_borrow_mut_lamports()? += split.payout;
    **ctx
        .accounts
        .platform_fee_recipient
        .to_account_info()
        .try_borrow_mut_lamports()? += split.fee;

    ctx.accounts.transaction.set_inner(Transaction::withdrawal(
        campaign_id,
        creator,
        amount,
        split.sequence,
        clock.unix_timestamp,
        ctx.bumps.transaction,
    ));

    msg!(
        "Withdrawal #{} of {} lamports from campaign {} (fee {}, payout {})",
        split.sequence,
        amount,
        campaign_id,
        split.fee,
        split.payout
    );

    emit!(WithdrawalProcessed {
        campaign_id,
        creator,
        receipt: ctx.accounts.transaction.key(),
        amount,
        fee: split.fee,
        payout: split.payout,
        sequence: split.sequence,
        remaining_balance: ctx.accounts.campaign.balance,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(campaign_id: u64)]
pub struct Withdraw<'info> {
    /// Checked against `campaign.creator` by the handler; pays the receipt rent
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        seeds = [ProgramState::SEED_PREFIX],
        bump = program_state.bump,
    )]
    pub program_state: Account<'info, ProgramState>,

    #[account(
        mut,
        seeds = [Campaign::SEED_PREFIX, &campaign_id.to_le_bytes()],
        bump = campaign.bump,
    )]
    pub campaign: Account<'info, Campaign>,

    /// Withdrawal receipt
    #[account(
        init,
        payer = creator,
        space = 8 + Transaction::INIT_SPACE,
        seeds = [
            Transaction::WITHDRAWAL_SEED_PREFIX,
            creator.key().as_ref(),
            &campaign_id.to_le_bytes(),
            &campaign.next_withdrawal_sequence().to_le_bytes()
        ],
        bump,
    )]
    pub transaction: Account<'info, Transaction>,

    /// Receives the platform fee
    /// SECURITY: must match program_state.platform_fee_recipient
    #[account(
        mut,
        address = program_state.platform_fee_recipient @ TerrafundError::InvalidFeeRecipient
    )]
    pub platform_fee_recipient: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}
