#![allow(deprecated)]
#![allow(unexpected_cfgs)]
use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;
#[cfg(test)]
mod tests;

use instructions::*;
use state::{InvestmentData, PoolData};

declare_id!("75XTmkWCfqy9MSYcbffjFTLWQKnwgx1VQjmFVueUc1Ye");

#[program]
pub mod invest_pool {
    use super::*;

    /// Create a pool with a fixed basket and its entry vault
    pub fn initialize_pool(ctx: Context<InitializePool>, params: InitializePoolParams) -> Result<()> {
        instructions::initialize_pool(ctx, params)
    }

    /// Create the pool-owned vault of one basket token
    pub fn create_token_vault(ctx: Context<CreateTokenVault>) -> Result<()> {
        instructions::create_token_vault(ctx)
    }

    /// Invest `amount` of the entry currency
    pub fn invest<'info>(
        ctx: Context<'_, '_, 'info, 'info, Invest<'info>>,
        amount: u64,
    ) -> Result<()> {
        instructions::invest(ctx, amount)
    }

    /// Invest everything attached through the investor's inbox
    pub fn receive<'info>(ctx: Context<'_, '_, 'info, 'info, Invest<'info>>) -> Result<()> {
        instructions::receive(ctx)
    }

    pub fn pause(ctx: Context<SetPaused>) -> Result<()> {
        instructions::pause(ctx)
    }

    pub fn unpause(ctx: Context<SetPaused>) -> Result<()> {
        instructions::unpause(ctx)
    }

    pub fn pool_data(ctx: Context<PoolView>) -> Result<PoolData> {
        instructions::pool_data(ctx)
    }

    pub fn investment_by_user(ctx: Context<InvestmentView>, index: u64) -> Result<InvestmentData> {
        instructions::investment_by_user(ctx, index)
    }

    pub fn investments_by_user<'info>(
        ctx: Context<'_, '_, 'info, 'info, InvestorView<'info>>,
    ) -> Result<Vec<InvestmentData>> {
        instructions::investments_by_user(ctx)
    }
}
