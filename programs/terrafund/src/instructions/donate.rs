use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::events::DonationReceived;
use crate::state::{Campaign, Transaction};

/// Donates lamports to a campaign
///
/// The amount is escrowed in the campaign account and a receipt is written
/// at the address derived from the post-increment donor count. Two
/// donations racing on the same count derive the same receipt address, so
/// the second one fails instead of reusing a sequence number.
pub fn donate(ctx: Context<Donate>, campaign_id: u64, amount: u64) -> Result<()> {
    let clock = Clock::get()?;

    let sequence = ctx.accounts.campaign.record_donation(amount)?;

    // Move the donation from donor into the campaign escrow
    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.donor.to_account_info(),
                to: ctx.accounts.campaign.to_account_info(),
            },
        ),
        amount,
    )?;

    let donor = ctx.accounts.donor.key();
    ctx.accounts.transaction.set_inner(Transaction::donation(
        campaign_id,
        donor,
        amount,
        sequence,
        clock.unix_timestamp,
        ctx.bumps.transaction,
    ));

    msg!(
        "Donation #{} of {} lamports to campaign {}",
        sequence,
        amount,
        campaign_id
    );

    emit!(DonationReceived {
        campaign_id,
        donor,
        receipt: ctx.accounts.transaction.key(),
        amount,
        sequence,
        amount_raised: ctx.accounts.campaign.amount_raised,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(campaign_id: u64)]
pub struct Donate<'info> {
    /// The donor, pays the donation and the receipt rent
    #[account(mut)]
    pub donor: Signer<'info>,

    #[account(
        mut,
        seeds = [Campaign::SEED_PREFIX, &campaign_id.to_le_bytes()],
        bump = campaign.bump,
    )]
    pub campaign: Account<'info, Campaign>,

    /// Donation receipt
    #[account(
        init,
        payer = donor,
        space = 8 + Transaction::INIT_SPACE,
        seeds = [
            Transaction::DONATION_SEED_PREFIX,
            donor.key().as_ref(),
            &campaign_id.to_le_bytes(),
            &campaign.next_donation_sequence().to_le_bytes()
        ],
        bump,
    )]
    pub transaction: Account<'info, Transaction>,

    pub system_program: Program<'info, System>,
}
