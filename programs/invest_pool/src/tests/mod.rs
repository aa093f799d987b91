pub mod exchange;
pub mod instructions;

pub use instructions::*;
