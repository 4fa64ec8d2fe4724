use anchor_lang::prelude::*;

use crate::events::ProgramInitialized;
use crate::state::ProgramState;

/// Creates the program state singleton
///
/// The deployer becomes the platform fee recipient and the fee starts at
/// `ProgramState::DEFAULT_FEE_PERCENT`. A second call fails with
/// `AlreadyInitialized` and leaves the existing state untouched.
pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
    let deployer = ctx.accounts.deployer.key();
    let program_state = &mut ctx.accounts.program_state;
    program_state.initialize(deployer, ctx.bumps.program_state)?;

    msg!(
        "Program initialized, fee recipient {} at {}%",
        deployer,
        program_state.platform_fee_percent
    );

    emit!(ProgramInitialized {
        fee_recipient: deployer,
        platform_fee_percent: program_state.platform_fee_percent,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Pays for the state account and becomes the fee recipient
    #[account(mut)]
    pub deployer: Signer<'info>,

    /// The program state singleton. `init_if_needed` lets a repeated call reach
    /// the handler so it can report `AlreadyInitialized`.
    #[account(
        init_if_needed,
        payer = deployer,
        space = 8 + ProgramState::INIT_SPACE,
        seeds = [ProgramState::SEED_PREFIX],
        bump,
    )]
    pub program_state: Account<'info, ProgramState>,

    pub system_program: Program<'info, System>,
}
