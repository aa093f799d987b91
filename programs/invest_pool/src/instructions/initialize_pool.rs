use anchor_lang::prelude::*;
use anchor_spl::token::{spl_token::native_mint, Mint, Token, TokenAccount};
use invest_core::{PoolConfig, PoolParams};

use crate::{
    constants::{ENTRY_VAULT_SEED, POOL_SEED},
    error::InvestPoolError,
    events::PoolInitialized,
    state::Pool,
};

/// Construction parameters, in deployment order
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct InitializePoolParams {
    /// `Pubkey::default()` for a native SOL pool
    pub entry_asset: Pubkey,
    pub fee_address: Pubkey,
    pub invest_fee_percent: u16,
    pub success_fee_percent: u16,
    pub swap_router: Pubkey,
    pub wrap_of_native_token: Pubkey,
    pub min_invest: u64,
    pub pool_name: String,
    pub fee_tiers: Vec<u32>,
    pub tokens: Vec<Pubkey>,
    pub distributions: Vec<u8>,
}

impl From<InitializePoolParams> for PoolParams {
    fn from(params: InitializePoolParams) -> Self {
        PoolParams {
            entry_asset: params.entry_asset,
            fee_address: params.fee_address,
            invest_fee_percent: params.invest_fee_percent,
            success_fee_percent: params.success_fee_percent,
            swap_router: params.swap_router,
            wrap_of_native_token: params.wrap_of_native_token,
            min_invest: params.min_invest,
            pool_name: params.pool_name,
            fee_tiers: params.fee_tiers,
            tokens: params.tokens,
            distributions: params.distributions,
        }
    }
}

#[derive(Accounts)]
#[instruction(params: InitializePoolParams)]
pub struct InitializePool<'info> {
    #[account(
        init,
        payer = authority,
        space = 8 + Pool::INIT_SPACE,
        seeds = [POOL_SEED, authority.key().as_ref(), params.pool_name.as_bytes()],
        bump
    )]
    pub pool: Box<Account<'info, Pool>>,

    /// Entry mint; the native mint for SOL pools
    pub entry_mint: Box<Account<'info, Mint>>,

    #[account(
        init,
        payer = authority,
        seeds = [ENTRY_VAULT_SEED, pool.key().as_ref()],
        bump,
        token::mint = entry_mint,
        token::authority = pool,
    )]
    pub entry_vault: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

pub fn initialize_pool(ctx: Context<InitializePool>, params: InitializePoolParams) -> Result<()> {
    let config = PoolConfig::with_canonical_wrap(params.into(), &native_mint::ID)
        .map_err(InvestPoolError::from)?;
    require_keys_eq!(
        ctx.accounts.entry_mint.key(),
        config.swap_input_asset(),
        InvestPoolError::EntryMintMismatch
    );

    let pool = &mut ctx.accounts.pool;
    pool.init(
        ctx.accounts.authority.key(),
        &config,
        ctx.bumps.pool,
        ctx.bumps.entry_vault,
    );

    msg!(
        "Pool '{}' initialized with {} tokens",
        pool.pool_name,
        pool.tokens.len()
    );

    emit!(PoolInitialized {
        pool: pool.key(),
        authority: pool.authority,
        entry_asset: pool.entry_asset,
        pool_name: pool.pool_name.clone(),
        tokens: pool.tokens.clone(),
        distributions: pool.distributions.clone(),
    });

    Ok(())
}
