use anchor_lang::prelude::*;

#[error_code]
pub enum TerrafundError {
    #[msg("Program state is already initialized")]
    AlreadyInitialized,

    // A missing state account is rejected earlier, by Anchor's AccountNotInitialized
    #[msg("Program state has not been initialized")]
    NotInitialized,

    #[msg("Unauthorized - caller does not hold the required role")]
    Unauthorized,

    #[msg("Campaign is not active")]
    CampaignNotActive,

    #[msg("Donation would push the amount raised above the campaign goal")]
    ExceedsGoal,

    #[msg("Platform fee must be between 1 and 15 percent")]
    InvalidFeePercent,

    #[msg("Withdrawal amount exceeds the campaign balance")]
    InsufficientFunds,

    #[msg("Withdrawal would leave the campaign below its rent-exempt minimum")]
    BelowMinimumWithdrawal,

    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,

    #[msg("Title, description or image url length is out of bounds")]
    InvalidFieldLength,

    #[msg("No record exists at the derived address")]
    NotFound,

    #[msg("Amount must be greater than zero")]
    InvalidAmount,

    #[msg("Campaign goal must be greater than zero")]
    InvalidGoal,

    #[msg("Campaign still holds a balance - withdraw it before deleting")]
    OutstandingBalance,

    #[msg("Invalid fee recipient account - does not match program state")]
    InvalidFeeRecipient,

    #[msg("Unable to derive a program address for the given seeds")]
    AddressDerivationFailed,
}
