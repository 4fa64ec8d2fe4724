use anchor_lang::prelude::*;

use crate::events::PlatformSettingsUpdated;
use crate::state::ProgramState;

/// Changes the platform fee percentage
///
/// Only the current fee recipient may call this; the new value must lie in
/// `ProgramState::MIN_FEE_PERCENT..=ProgramState::MAX_FEE_PERCENT`.
pub fn update_platform_settings(
    ctx: Context<UpdatePlatformSettings>,
    new_fee_percent: u64,
) -> Result<()> {
    let updater = ctx.accounts.updater.key();
    let program_state = &mut ctx.accounts.program_state;
    let old_fee_percent = program_state.platform_fee_percent;

    program_state.set_platform_fee(&updater, new_fee_percent)?;

    msg!(
        "Platform fee changed from {}% to {}%",
        old_fee_percent,
        new_fee_percent
    );

    emit!(PlatformSettingsUpdated {
        updater,
        old_fee_percent,
        new_fee_percent,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct UpdatePlatformSettings<'info> {
    /// Must be the current platform fee recipient
    pub updater: Signer<'info>,

    #[account(
        mut,
        seeds = [ProgramState::SEED_PREFIX],
        bump = program_state.bump,
    )]
    pub program_state: Account<'info, ProgramState>,
}
