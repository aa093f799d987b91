#![allow(deprecated)]
#![allow(unexpected_cfgs)]
use anchor_lang::prelude::*;

pub mod error;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("Bxe8urTuFy59ficCizE3zE5A9Njhn5rX9d4Cc8seYPEz");

/// Single-hop fixed-rate markets speaking the `swap_exact_input` interface
/// the invest pool routes through
#[program]
pub mod mock_exchange {
    use super::*;

    pub fn initialize_market(ctx: Context<InitializeMarket>, params: MarketParams) -> Result<()> {
        instructions::initialize_market(ctx, params)
    }

    pub fn swap_exact_input(
        ctx: Context<SwapExactInput>,
        amount_in: u64,
        fee_tier: u32,
        minimum_amount_out: u64,
    ) -> Result<()> {
        instructions::swap_exact_input(ctx, amount_in, fee_tier, minimum_amount_out)
    }
}
