use anchor_lang::prelude::*;

use crate::events::CampaignCreated;
use crate::state::{Campaign, CampaignDetails, ProgramState};

/// Opens a new campaign
///
/// The campaign id is `campaign_count + 1`. The counter increment and the
/// new campaign account are committed in the same transaction, so a failed
/// creation never consumes an id.
pub fn create_campaign(
    ctx: Context<CreateCampaign>,
    title: String,
    description: String,
    image_url: String,
    goal: u64,
) -> Result<()> {
    let clock = Clock::get()?;
    let creator = ctx.accounts.creator.key();

    let campaign = &mut ctx.accounts.campaign;
    let campaign_id = campaign.open(
        &mut ctx.accounts.program_state,
        creator,
        CampaignDetails {
            title,
            description,
            image_url,
            goal,
        },
        clock.unix_timestamp,
        ctx.bumps.campaign,
    )?;

    msg!("Campaign {} created by {}", campaign_id, creator);

    emit!(CampaignCreated {
        campaign_id,
        creator,
        goal,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct CreateCampaign<'info> {
    /// The campaign creator, pays rent for the campaign account
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        mut,
        seeds = [ProgramState::SEED_PREFIX],
        bump = program_state.bump,
    )]
    pub program_state: Account<'info, ProgramState>,

    /// New campaign, keyed by the id it is about to receive
    #[account(
        init,
        payer = creator,
        space = 8 + Campaign::INIT_SPACE,
        seeds = [
            Campaign::SEED_PREFIX,
            &program_state.next_campaign_id().to_le_bytes()
        ],
        bump,
    )]
    pub campaign: Account<'info, Campaign>,

    pub system_program: Program<'info, System>,
}
