/// CPI adapters binding the core engine's capabilities to on-chain accounts
pub mod custody;
pub mod router;

pub use custody::*;
pub use router::*;
