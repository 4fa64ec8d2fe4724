use anchor_lang::prelude::*;

use crate::error::TerrafundError;

/// Singleton deployment record: campaign counter and platform fee settings
#[account]
#[derive(InitSpace, Default, Debug, PartialEq)]
pub struct ProgramState {
    /// Set once by `initialize`, never cleared
    pub initialized: bool,
    /// Number of campaigns ever created; the next campaign id is `campaign_count + 1`
    pub campaign_count: u64,
    /// Platform fee taken from every withdrawal, in whole percent (1-15)
    pub platform_fee_percent: u64,
    /// Wallet receiving platform fees; also the only wallet allowed to change them
    pub platform_fee_recipient: Pubkey,
    /// PDA bump seed
    pub bump: u8,
}

/// A fundraising campaign and its escrowed balance
#[account]
#[derive(InitSpace, Default, Debug, PartialEq)]
pub struct Campaign {
    /// Campaign id, assigned from the program state counter
    pub id: u64,
    /// Wallet that created the campaign and may edit, withdraw and delete it
    pub creator: Pubkey,
    /// Campaign title, 1-64 bytes
    #[max_len(64)]
    pub title: String,
    /// Free-form description, up to 512 bytes
    #[max_len(512)]
    pub description: String,
    /// Cover image url, up to 256 bytes
    #[max_len(256)]
    pub image_url: String,
    /// Fundraising target in lamports
    pub goal: u64,
    /// Lifetime donations in lamports, never decreases
    pub amount_raised: u64,
    /// Lamports currently escrowed and available for withdrawal
    pub balance: u64,
    /// Number of donations received; sequence number of the latest donation receipt
    pub donor_count: u64,
    /// Number of withdrawals made; sequence number of the latest withdrawal receipt
    pub withdrawal_count: u64,
    /// Cleared on deletion, after which the campaign is terminal
    pub active: bool,
    /// Unix timestamp of creation
    pub created_at: i64,
    /// PDA bump seed
    pub bump: u8,
}

/// Write-once ledger receipt for a donation (`credited`) or withdrawal
#[account]
#[derive(InitSpace, Default, Debug, PartialEq)]
pub struct Transaction {
    /// Campaign the funds entered or left
    pub campaign_id: u64,
    /// Donor for donations, creator for withdrawals
    pub owner: Pubkey,
    /// Gross amount in lamports
    pub amount: u64,
    /// Per-campaign sequence number this receipt was keyed by
    pub sequence: u64,
    /// True when funds entered escrow, false when they left it
    pub credited: bool,
    /// Unix timestamp of the donation or withdrawal
    pub timestamp: i64,
    /// PDA bump seed
    pub bump: u8,
}

/// Editable campaign fields, as submitted by the creator
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CampaignDetails {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub goal: u64,
}

/// How a gross withdrawal is split between the platform and the creator
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WithdrawalSplit {
    pub fee: u64,
    pub payout: u64,
    /// Post-increment withdrawal count, used to key the receipt
    pub sequence: u64,
}

impl ProgramState {
    pub const SEED_PREFIX: &'static [u8] = b"program_state";

    pub const DEFAULT_FEE_PERCENT: u64 = 5;
    pub const MIN_FEE_PERCENT: u64 = 1;
    pub const MAX_FEE_PERCENT: u64 = 15;

    const PERCENT_DENOMINATOR: u128 = 100;

    pub fn initialize(&mut self, fee_recipient: Pubkey, bump: u8) -> Result<()> {
        require!(!self.initialized, TerrafundError::AlreadyInitialized);

        self.initialized = true;
        self.campaign_count = 0;
        self.platform_fee_percent = Self::DEFAULT_FEE_PERCENT;
        self.platform_fee_recipient = fee_recipient;
        self.bump = bump;
        Ok(())
    }

    /// Id the next created campaign will receive. Only used for PDA derivation;
    /// `Campaign::open` performs the checked increment.
    pub fn next_campaign_id(&self) -> u64 {
        self.campaign_count.saturating_add(1)
    }

    pub fn set_platform_fee(&mut self, caller: &Pubkey, new_fee_percent: u64) -> Result<()> {
        require!(self.initialized, TerrafundError::NotInitialized);
        require_keys_eq!(
            *caller,
            self.platform_fee_recipient,
            TerrafundError::Unauthorized
        );
        require!(
            (Self::MIN_FEE_PERCENT..=Self::MAX_FEE_PERCENT).contains(&new_fee_percent),
            TerrafundError::InvalidFeePercent
        );

        self.platform_fee_percent = new_fee_percent;
        Ok(())
    }

    /// Splits a gross amount into `(fee, payout)` with `fee = floor(amount * percent / 100)`.
    /// The two parts always sum back to `amount`.
    pub fn fee_split(&self, amount: u64) -> Result<(u64, u64)> {
        let fee = u128::from(amount)
            .checked_mul(u128::from(self.platform_fee_percent))
            .ok_or(TerrafundError::ArithmeticOverflow)?
            / Self::PERCENT_DENOMINATOR;
        let fee = u64::try_from(fee).map_err(|_| error!(TerrafundError::ArithmeticOverflow))?;
        let payout = amount
            .checked_sub(fee)
            .ok_or(TerrafundError::ArithmeticOverflow)?;
        Ok((fee, payout))
    }
}

impl CampaignDetails {
    pub const MAX_TITLE_LEN: usize = 64;
    pub const MAX_DESCRIPTION_LEN: usize = 512;
    pub const MAX_IMAGE_URL_LEN: usize = 256;

    pub fn validate(&self) -> Result<()> {
        require!(
            !self.title.is_empty() && self.title.len() <= Self::MAX_TITLE_LEN,
            TerrafundError::InvalidFieldLength
        );
        require!(
            self.description.len() <= Self::MAX_DESCRIPTION_LEN,
            TerrafundError::InvalidFieldLength
        );
        require!(
            self.image_url.len() <= Self::MAX_IMAGE_URL_LEN,
            TerrafundError::InvalidFieldLength
        );
        require!(self.goal > 0, TerrafundError::InvalidGoal);
        Ok(())
    }
}

impl Campaign {
    pub const SEED_PREFIX: &'static [u8] = b"campaign";

    /// Registers a new campaign against the program state counter and fills
    /// this record. Nothing is written unless every check passes.
    pub fn open(
        &mut self,
        program_state: &mut ProgramState,
        creator: Pubkey,
        details: CampaignDetails,
        now: i64,
        bump: u8,
    ) -> Result<u64> {
        require!(program_state.initialized, TerrafundError::NotInitialized);
        details.validate()?;
        let id = program_state
            .campaign_count
            .checked_add(1)
            .ok_or(TerrafundError::ArithmeticOverflow)?;

        program_state.campaign_count = id;

        self.id = id;
        self.creator = creator;
        self.title = details.title;
        self.description = details.description;
        self.image_url = details.image_url;
        self.goal = details.goal;
        self.amount_raised = 0;
        self.balance = 0;
        self.donor_count = 0;
        self.withdrawal_count = 0;
        self.active = true;
        self.created_at = now;
        self.bump = bump;
        Ok(id)
    }

    pub fn edit(&mut self, caller: &Pubkey, details: CampaignDetails) -> Result<()> {
        self.require_creator_of_active(caller)?;
        details.validate()?;
        // Lowering the goal below what was already raised would break the goal ceiling
        require!(
            details.goal >= self.amount_raised,
            TerrafundError::ExceedsGoal
        );

        self.title = details.title;
        self.description = details.description;
        self.image_url = details.image_url;
        self.goal = details.goal;
        Ok(())
    }

    /// Marks the campaign deleted. Escrow must be drained first.
    pub fn close(&mut self, caller: &Pubkey) -> Result<()> {
        self.require_creator_of_active(caller)?;
        require!(self.balance == 0, TerrafundError::OutstandingBalance);

        self.active = false;
        Ok(())
    }

    /// Books a donation and returns its receipt sequence number.
    pub fn record_donation(&mut self, amount: u64) -> Result<u64> {
        require!(self.active, TerrafundError::CampaignNotActive);
        require!(amount > 0, TerrafundError::InvalidAmount);

        let amount_raised = self
            .amount_raised
            .checked_add(amount)
            .ok_or(TerrafundError::ArithmeticOverflow)?;
        require!(amount_raised <= self.goal, TerrafundError::ExceedsGoal);
        let balance = self
            .balance
            .checked_add(amount)
            .ok_or(TerrafundError::ArithmeticOverflow)?;
        let sequence = self
            .donor_count
            .checked_add(1)
            .ok_or(TerrafundError::ArithmeticOverflow)?;

        self.amount_raised = amount_raised;
        self.balance = balance;
        self.donor_count = sequence;
        Ok(sequence)
    }

    /// Books a withdrawal of `amount` gross lamports.
    ///
    /// `escrow_lamports` is the campaign account's current lamport balance and
    /// `rent_floor` the minimum it must keep to stay rent exempt.
    pub fn record_withdrawal(
        &mut self,
        caller: &Pubkey,
        amount: u64,
        program_state: &ProgramState,
        escrow_lamports: u64,
        rent_floor: u64,
    ) -> Result<WithdrawalSplit> {
        self.require_creator_of_active(caller)?;
        require!(amount > 0, TerrafundError::InvalidAmount);
        require!(amount <= self.balance, TerrafundError::InsufficientFunds);

        let retained = escrow_lamports
            .checked_sub(amount)
            .ok_or(TerrafundError::BelowMinimumWithdrawal)?;
        require!(
            retained >= rent_floor,
            TerrafundError::BelowMinimumWithdrawal
        );

        let (fee, payout) = program_state.fee_split(amount)?;
        let balance = self
            .balance
            .checked_sub(amount)
            .ok_or(TerrafundError::ArithmeticOverflow)?;
        let sequence = self
            .withdrawal_count
            .checked_add(1)
            .ok_or(TerrafundError::ArithmeticOverflow)?;

        self.balance = balance;
        self.withdrawal_count = sequence;
        Ok(WithdrawalSplit {
            fee,
            payout,
            sequence,
        })
    }

    /// Sequence the next donation receipt will be keyed by
    pub fn next_donation_sequence(&self) -> u64 {
        self.donor_count.saturating_add(1)
    }

    /// Sequence the next withdrawal receipt will be keyed by
    pub fn next_withdrawal_sequence(&self) -> u64 {
        self.withdrawal_count.saturating_add(1)
    }

    fn require_creator_of_active(&self, caller: &Pubkey) -> Result<()> {
        require!(self.active, TerrafundError::CampaignNotActive);
        require_keys_eq!(*caller, self.creator, TerrafundError::Unauthorized);
        Ok(())
    }
}

impl Transaction {
    pub const DONATION_SEED_PREFIX: &'static [u8] = b"donor";
    pub const WITHDRAWAL_SEED_PREFIX: &'static [u8] = b"withdraw";

    pub fn donation(
        campaign_id: u64,
        donor: Pubkey,
        amount: u64,
        sequence: u64,
        timestamp: i64,
        bump: u8,
    ) -> Self {
        Self {
            campaign_id,
            owner: donor,
            amount,
            sequence,
            credited: true,
            timestamp,
            bump,
        }
    }

    pub fn withdrawal(
        campaign_id: u64,
        creator: Pubkey,
        amount: u64,
        sequence: u64,
        timestamp: i64,
        bump: u8,
    ) -> Self {
        Self {
            campaign_id,
            owner: creator,
            amount,
            sequence,
            credited: false,
            timestamp,
            bump,
        }
    }
}
