pub mod investment;
pub mod pool;

pub use investment::*;
pub use pool::*;
