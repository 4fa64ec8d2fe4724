use anchor_lang::prelude::*;

use crate::events::CampaignUpdated;
use crate::state::{Campaign, CampaignDetails};

/// Overwrites a campaign's title, description, image and goal
///
/// Only the creator of an active campaign may edit it. Raised amount,
/// balance and counters are never touched.
pub fn update_campaign(
    ctx: Context<UpdateCampaign>,
    campaign_id: u64,
    title: String,
    description: String,
    image_url: String,
    goal: u64,
) -> Result<()> {
    let creator = ctx.accounts.creator.key();
    let campaign = &mut ctx.accounts.campaign;

    campaign.edit(
        &creator,
        CampaignDetails {
            title,
            description,
            image_url,
            goal,
        },
    )?;

    msg!("Campaign {} updated", campaign_id);

    emit!(CampaignUpdated {
        campaign_id,
        creator,
        goal,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(campaign_id: u64)]
pub struct UpdateCampaign<'info> {
    /// Checked against `campaign.creator` by the handler
    pub creator: Signer<'info>,

    #[account(
        mut,
        seeds = [Campaign::SEED_PREFIX, &campaign_id.to_le_bytes()],
        bump = campaign.bump,
    )]
    pub campaign: Account<'info, Campaign>,
}
