//! # Pool Constants
//!
//! Bounds shared by the core engine and the on-chain program.

/// Upper bound for the invest and success fee, in percentage points
pub const MAX_FEE_PERCENT: u16 = 50;

/// Denominator for fee and share math (values are whole percentages)
pub const PERCENT_DENOMINATOR: u128 = 100;

/// Required sum of the distribution weight table
pub const DISTRIBUTION_TOTAL: u32 = 100;

/// Maximum number of target tokens in one basket
pub const MAX_POOL_TOKENS: usize = 8;

/// Maximum pool name length in bytes (fits a single PDA seed)
pub const MAX_POOL_NAME_LEN: usize = 32;
