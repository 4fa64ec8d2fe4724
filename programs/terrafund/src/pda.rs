//! Program-derived addresses for every record the program owns.
//!
//! Seeds mirror the `seeds = [...]` constraints in `instructions/`. Numeric
//! components are always encoded as 8-byte little-endian integers.

use anchor_lang::prelude::*;

use crate::error::TerrafundError;
use crate::state::{Campaign, ProgramState, Transaction};

pub fn program_state_address(program_id: &Pubkey) -> Result<(Pubkey, u8)> {
    derive(&[ProgramState::SEED_PREFIX], program_id)
}

pub fn campaign_address(program_id: &Pubkey, campaign_id: u64) -> Result<(Pubkey, u8)> {
    derive(
        &[Campaign::SEED_PREFIX, &campaign_id.to_le_bytes()],
        program_id,
    )
}

/// Receipt address for the `sequence`-th donation to a campaign.
pub fn donation_address(
    program_id: &Pubkey,
    donor: &Pubkey,
    campaign_id: u64,
    sequence: u64,
) -> Result<(Pubkey, u8)> {
    derive(
        &[
            Transaction::DONATION_SEED_PREFIX,
            donor.as_ref(),
            &campaign_id.to_le_bytes(),
            &sequence.to_le_bytes(),
        ],
        program_id,
    )
}

/// Receipt address for the `sequence`-th withdrawal from a campaign.
pub fn withdrawal_address(
    program_id: &Pubkey,
    creator: &Pubkey,
    campaign_id: u64,
    sequence: u64,
) -> Result<(Pubkey, u8)> {
    derive(
        &[
            Transaction::WITHDRAWAL_SEED_PREFIX,
            creator.as_ref(),
            &campaign_id.to_le_bytes(),
            &sequence.to_le_bytes(),
        ],
        program_id,
    )
}

fn derive(seeds: &[&[u8]], program_id: &Pubkey) -> Result<(Pubkey, u8)> {
    Pubkey::try_find_program_address(seeds, program_id)
        .ok_or_else(|| error!(TerrafundError::AddressDerivationFailed))
}
