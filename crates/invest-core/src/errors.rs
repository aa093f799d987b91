//! # Core Error Types
//!
//! Error types shared between on-chain and off-chain code. Every failure keeps
//! a distinct variant so callers (and tests) can assert on the exact reason.

use solana_program::pubkey::Pubkey;
use thiserror::Error;

/// Construction-time configuration errors. Fatal: the pool cannot be created.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Fee too high: {fee} exceeds the {max}% limit")]
    FeeTooHigh { fee: u16, max: u16 },

    #[error("Minimum investment must be greater than zero")]
    ZeroMinInvest,

    #[error("Distribution weights sum to {0}, expected 100")]
    DistributionMismatch(u32),

    #[error("Length mismatch: {tokens} tokens, {fee_tiers} fee tiers, {distributions} distributions")]
    LengthMismatch {
        tokens: usize,
        fee_tiers: usize,
        distributions: usize,
    },

    #[error("Native entry asset requires a wrapped native token address")]
    NativeWrapMismatch,

    #[error("Target token list is empty")]
    EmptyTokenList,

    #[error("Too many target tokens: {0} (max {1})")]
    TooManyTokens(usize, usize),

    #[error("Pool name too long: {0} bytes (max {1})")]
    PoolNameTooLong(usize, usize),

    #[error("Failed to parse pool parameters: {0}")]
    Parse(String),
}

/// Failure moving the entry currency to the fee recipient
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransferError {
    #[error("Insufficient balance: need {needed}, have {available}")]
    InsufficientBalance { needed: u64, available: u64 },

    #[error("Recipient {0} rejected the transfer")]
    RecipientRejected(Pubkey),

    #[error("Transfer failed: {0}")]
    Failed(String),
}

/// Failure reported by the external exchange
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SwapError {
    #[error("Swap into {token_out} reverted: {reason}")]
    Reverted { token_out: Pubkey, reason: String },

    #[error("No route for {token_out} at fee tier {fee_tier}")]
    NoRoute { token_out: Pubkey, fee_tier: u32 },
}

/// Errors raised by pool operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PoolError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Pool is paused")]
    PoolPaused,

    #[error("Amount {amount} is below the minimum investment {min_invest}")]
    AmountTooSmall { amount: u64, min_invest: u64 },

    #[error("Attached value {attached} does not match expected {expected}")]
    ValueMismatch { expected: u64, attached: u64 },

    #[error("Investment index {index} out of range ({len} recorded)")]
    IndexOutOfRange { index: u64, len: u64 },

    #[error("Pool is already paused")]
    AlreadyPaused,

    #[error("Pool is not paused")]
    NotPaused,

    #[error("Caller {0} is not the pool controller")]
    Unauthorized(Pubkey),

    #[error("Fee transfer failed: {0}")]
    Transfer(#[from] TransferError),

    #[error("Swap failure: {0}")]
    SwapFailure(#[from] SwapError),

    #[error("Math overflow")]
    MathOverflow,
}

/// Coarse classification of a [`PoolError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Invalid construction parameters
    Config,
    /// Recoverable, fixable by the caller
    Caller,
    /// Environment failure (transfer, exchange); aborts without being a fault
    External,
    /// Arithmetic bounds exceeded
    Internal,
}

impl PoolError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PoolError::Config(_) => ErrorCategory::Config,
            PoolError::PoolPaused
            | PoolError::AmountTooSmall { .. }
            | PoolError::ValueMismatch { .. }
            | PoolError::IndexOutOfRange { .. }
            | PoolError::AlreadyPaused
            | PoolError::NotPaused
            | PoolError::Unauthorized(_) => ErrorCategory::Caller,
            PoolError::Transfer(_) | PoolError::SwapFailure(_) => ErrorCategory::External,
            PoolError::MathOverflow => ErrorCategory::Internal,
        }
    }
}

/// Result type using core errors
pub type CoreResult<T> = Result<T, PoolError>;
