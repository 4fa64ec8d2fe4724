use anchor_lang::prelude::*;

pub mod error;
pub mod events;
pub mod instructions;
pub mod pda;
pub mod query;
pub mod state;

use instructions::*;

declare_id!("Fa1aJvu2yjsA2vk8xuhgNsvzdFqQjS5CbdgwHpquaRNq");

/// TerraFund Crowdfunding Program
///
/// Ledger for on-chain fundraising campaigns:
/// - Program state singleton holding the campaign counter and platform fee
/// - Campaign creation, editing and deletion by their creators
/// - Donations escrowed in the campaign account
/// - Creator withdrawals, minus the platform fee
///
/// Every donation and withdrawal leaves a write-once `Transaction` receipt
/// keyed by a per-campaign sequence number.
///
/// # Invariants
///
/// - `balance <= amount_raised <= goal` for every campaign
/// - `amount_raised`, `donor_count`, `withdrawal_count` and `campaign_count`
///   never decrease
/// - `fee + payout == amount` for every withdrawal
///
/// All checks run before any field is written, and the runtime rolls back
/// the whole transaction on error.
#[program]
pub mod terrafund {
    use super::*;

    /// Initialize the program state
    ///
    /// The caller becomes the platform fee recipient. Fails with
    /// `AlreadyInitialized` when called a second time.
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize::initialize(ctx)
    }

    /// Create a new campaign with id `campaign_count + 1`
    pub fn create_campaign(
        ctx: Context<CreateCampaign>,
        title: String,
        description: String,
        image_url: String,
        goal: u64,
    ) -> Result<()> {
        instructions::create_campaign::create_campaign(ctx, title, description, image_url, goal)
    }

    /// Edit an active campaign's details
    ///
    /// Only the campaign creator may call this.
    pub fn update_campaign(
        ctx: Context<UpdateCampaign>,
        campaign_id: u64,
        title: String,
        description: String,
        image_url: String,
        goal: u64,
    ) -> Result<()> {
        instructions::update_campaign::update_campaign(
            ctx,
            campaign_id,
            title,
            description,
            image_url,
            goal,
        )
    }

    /// Delete a campaign
    ///
    /// Terminal: a deleted campaign accepts no further edits, donations or
    /// withdrawals. Requires an empty escrow balance.
    pub fn delete_campaign(ctx: Context<DeleteCampaign>, campaign_id: u64) -> Result<()> {
        instructions::delete_campaign::delete_campaign(ctx, campaign_id)
    }

    /// Donate lamports to a campaign
    ///
    /// Rejected with `ExceedsGoal` if it would raise more than the goal.
    pub fn donate(ctx: Context<Donate>, campaign_id: u64, amount: u64) -> Result<()> {
        instructions::donate::donate(ctx, campaign_id, amount)
    }

    /// Withdraw escrowed funds from a campaign
    ///
    /// # Security
    /// Only the campaign creator can withdraw, and the fee recipient account
    /// is validated against the program state.
    pub fn withdraw(ctx: Context<Withdraw>, campaign_id: u64, amount: u64) -> Result<()> {
        instructions::withdraw::withdraw(ctx, campaign_id, amount)
    }

    /// Change the platform fee percentage (1-15)
    ///
    /// Only the current fee recipient can call this.
    pub fn update_platform_settings(
        ctx: Context<UpdatePlatformSettings>,
        new_fee_percent: u64,
    ) -> Result<()> {
        instructions::update_platform_settings::update_platform_settings(ctx, new_fee_percent)
    }
}
