//! # Invest Core - Basket Pool Engine
//!
//! Rules of a basket investment pool, shared between the on-chain program and
//! off-chain tooling. It provides:
//!
//! - Validated, immutable pool configuration (loadable from TOML)
//! - Invest and success fee math
//! - Weighted distribution of a net amount across the basket
//! - The per-investor ledger and pool-wide aggregates
//! - The pause gate
//!
//! External effects go through two capability traits, [`SwapRouter`] and
//! [`FeeTransfer`]. [`FixedRateRouter`] and [`InMemoryTreasury`] implement
//! them deterministically for simulations and tests.
//!
//! ## Feature Flags
//!
//! - `toml-config` (default): `PoolParams` TOML loading; disable on-chain

pub mod config;
pub mod constants;
pub mod distribution;
pub mod errors;
pub mod events;
pub mod fees;
pub mod gate;
pub mod invest;
pub mod ledger;
pub mod pool;
pub mod swap;

// Re-export commonly used items
pub use config::{PoolConfig, PoolParams};
pub use constants::*;
pub use distribution::{distribute, Distribution};
pub use errors::{ConfigError, CoreResult, ErrorCategory, PoolError, SwapError, TransferError};
pub use events::{InvestedEvent, PoolEvent};
pub use fees::{FeeBreakdown, FeeTransfer, InMemoryTreasury};
pub use gate::{PauseGate, PoolStatus};
pub use invest::{execute_invest, InvestOutcome, InvestRequest, Payment};
pub use ledger::{InvestReceipt, Investment, InvestmentLedger, PoolAggregates};
pub use pool::{InvestPool, PoolData};
pub use swap::{FixedRateRouter, Rate, SwapRequest, SwapRouter};
