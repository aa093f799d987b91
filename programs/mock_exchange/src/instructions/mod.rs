pub mod initialize_market;
pub mod swap_exact_input;

pub use initialize_market::*;
pub use swap_exact_input::*;
