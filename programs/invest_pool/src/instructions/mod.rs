pub mod create_token_vault;
pub mod initialize_pool;
pub mod invest;
pub mod pause;
pub mod views;

pub use create_token_vault::*;
pub use initialize_pool::*;
pub use invest::*;
pub use pause::*;
pub use views::*;
