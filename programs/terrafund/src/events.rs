use anchor_lang::prelude::*;

#[event]
pub struct ProgramInitialized {
    pub fee_recipient: Pubkey,
    pub platform_fee_percent: u64,
    pub timestamp: i64,
}

#[event]
pub struct PlatformSettingsUpdated {
    pub updater: Pubkey,
    pub old_fee_percent: u64,
    pub new_fee_percent: u64,
    pub timestamp: i64,
}

#[event]
pub struct CampaignCreated {
    pub campaign_id: u64,
    pub creator: Pubkey,
    pub goal: u64,
    pub timestamp: i64,
}

#[event]
pub struct CampaignUpdated {
    pub campaign_id: u64,
    pub creator: Pubkey,
    pub goal: u64,
    pub timestamp: i64,
}

#[event]
pub struct CampaignDeleted {
    pub campaign_id: u64,
    pub creator: Pubkey,
    pub timestamp: i64,
}

/// Emitted once a donation has been escrowed and its receipt written.
/// Receipt-NFT minting keys off this event.
#[event]
pub struct DonationReceived {
    pub campaign_id: u64,
    pub donor: Pubkey,
    pub receipt: Pubkey,
    pub amount: u64,
    pub sequence: u64,
    pub amount_raised: u64,
    pub timestamp: i64,
}

#[event]
pub struct WithdrawalProcessed {
    pub campaign_id: u64,
    pub creator: Pubkey,
    pub receipt: Pubkey,
    pub amount: u64,
    pub fee: u64,
    pub payout: u64,
    pub sequence: u64,
    pub remaining_balance: u64,
    pub timestamp: i64,
}
