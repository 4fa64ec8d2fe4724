use anchor_lang::prelude::*;

use crate::events::CampaignDeleted;
use crate::state::Campaign;

/// Marks a campaign as deleted
///
/// The campaign must have an empty escrow: the creator withdraws whatever is
/// left (paying the platform fee) before deleting. The account is kept so
/// that its receipts and final figures stay readable.
pub fn delete_campaign(ctx: Context<DeleteCampaign>, campaign_id: u64) -> Result<()> {
    let creator = ctx.accounts.creator.key();
    Campaign::close(&mut ctx.accounts.campaign, &creator)?;

    msg!("Campaign {} deleted", campaign_id);

    emit!(CampaignDeleted {
        campaign_id,
        creator,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(campaign_id: u64)]
pub struct DeleteCampaign<'info> {
    /// Checked against `campaign.creator` by the handler
    pub creator: Signer<'info>,

    #[account(
        mut,
        seeds = [Campaign::SEED_PREFIX, &campaign_id.to_le_bytes()],
        bump = campaign.bump,
    )]
    pub campaign: Account<'info, Campaign>,
}
