use anchor_lang::prelude::*;
use invest_core::{ConfigError, PoolError};

// Errors
#[error_code]
pub enum InvestPoolError {
    // Configuration
    #[msg("Fee exceeds the 50% limit")]
    FeeTooHigh,
    #[msg("Minimum investment must be greater than zero")]
    ZeroMinInvest,
    #[msg("Distribution weights must sum to 100")]
    DistributionMismatch,
    #[msg("Tokens, fee tiers and distributions differ in length")]
    LengthMismatch,
    #[msg("Native entry requires the native mint as wrapped token")]
    NativeWrapMismatch,
    #[msg("Target token list is empty")]
    EmptyTokenList,
    #[msg("Too many target tokens")]
    TooManyTokens,
    #[msg("Pool name too long")]
    PoolNameTooLong,
    #[msg("Invalid pool parameters")]
    InvalidParams,

    // Caller
    #[msg("Pool is paused")]
    PoolPaused,
    #[msg("Amount is below the minimum investment")]
    AmountTooSmall,
    #[msg("Attached value does not match the invested amount")]
    ValueMismatch,
    #[msg("Investment index out of range")]
    IndexOutOfRange,
    #[msg("Pool is already paused")]
    AlreadyPaused,
    #[msg("Pool is not paused")]
    NotPaused,
    #[msg("Caller is not the pool authority")]
    Unauthorized,

    // External
    #[msg("Fee transfer failed")]
    TransferFailed,
    #[msg("Swap failed")]
    SwapFailed,

    // Internal
    #[msg("Math operation resulted in overflow")]
    MathOverflow,

    // Accounts
    #[msg("Entry mint does not match the pool entry asset")]
    EntryMintMismatch,
    #[msg("Mint is not part of the pool basket")]
    TokenNotInBasket,
    #[msg("Unexpected number of remaining accounts")]
    InvalidRemainingAccounts,
    #[msg("Token vault does not belong to this pool leg")]
    InvalidTokenVault,
    #[msg("Fee recipient does not match the pool fee address")]
    InvalidFeeRecipient,
    #[msg("Token pools require the investor and fee token accounts")]
    MissingTokenAccount,
    #[msg("Investor token account does not hold the entry asset")]
    InvalidEntryAccount,
    #[msg("Investment record does not match the requested investor")]
    InvalidInvestmentRecord,
    #[msg("Swap router does not match the pool configuration")]
    InvalidSwapRouter,
    #[msg("Exchange debited the entry vault by other than the swap input")]
    RouterDebitMismatch,
}

impl From<ConfigError> for InvestPoolError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::FeeTooHigh { .. } => InvestPoolError::FeeTooHigh,
            ConfigError::ZeroMinInvest => InvestPoolError::ZeroMinInvest,
            ConfigError::DistributionMismatch(_) => InvestPoolError::DistributionMismatch,
            ConfigError::LengthMismatch { .. } => InvestPoolError::LengthMismatch,
            ConfigError::NativeWrapMismatch => InvestPoolError::NativeWrapMismatch,
            ConfigError::EmptyTokenList => InvestPoolError::EmptyTokenList,
            ConfigError::TooManyTokens(..) => InvestPoolError::TooManyTokens,
            ConfigError::PoolNameTooLong(..) => InvestPoolError::PoolNameTooLong,
            ConfigError::Parse(_) => InvestPoolError::InvalidParams,
        }
    }
}

impl From<PoolError> for InvestPoolError {
    fn from(err: PoolError) -> Self {
        msg!("{}", err);
        match err {
            PoolError::Config(config) => config.into(),
            PoolError::PoolPaused => InvestPoolError::PoolPaused,
            PoolError::AmountTooSmall { .. } => InvestPoolError::AmountTooSmall,
            PoolError::ValueMismatch { .. } => InvestPoolError::ValueMismatch,
            PoolError::IndexOutOfRange { .. } => InvestPoolError::IndexOutOfRange,
            PoolError::AlreadyPaused => InvestPoolError::AlreadyPaused,
            PoolError::NotPaused => InvestPoolError::NotPaused,
            PoolError::Unauthorized(_) => InvestPoolError::Unauthorized,
            PoolError::Transfer(_) => InvestPoolError::TransferFailed,
            PoolError::SwapFailure(_) => InvestPoolError::SwapFailed,
            PoolError::MathOverflow => InvestPoolError::MathOverflow,
        }
    }
}
