use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{
    error::ExchangeError,
    state::{Market, MARKET_SEED, MARKET_VAULT_SEED},
};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct MarketParams {
    pub fee_tier: u32,
    pub rate_numerator: u64,
    pub rate_denominator: u64,
    pub extra_input: u64,
}

#[derive(Accounts)]
#[instruction(params: MarketParams)]
pub struct InitializeMarket<'info> {
    #[account(
        init,
        payer = payer,
        space = 8 + Market::INIT_SPACE,
        seeds = [
            MARKET_SEED,
            input_mint.key().as_ref(),
            output_mint.key().as_ref(),
            &params.fee_tier.to_le_bytes()
        ],
        bump
    )]
    pub market: Box<Account<'info, Market>>,

    pub input_mint: Box<Account<'info, Mint>>,

    pub output_mint: Box<Account<'info, Mint>>,

    #[account(
        init,
        payer = payer,
        token::mint = input_mint,
        token::authority = market,
        seeds = [MARKET_VAULT_SEED, market.key().as_ref(), input_mint.key().as_ref()],
        bump
    )]
    pub input_vault: Box<Account<'info, TokenAccount>>,

    /// Liquidity paid out by swaps; funded by whoever runs the market
    #[account(
        init,
        payer = payer,
        token::mint = output_mint,
        token::authority = market,
        seeds = [MARKET_VAULT_SEED, market.key().as_ref(), output_mint.key().as_ref()],
        bump
    )]
    pub output_vault: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

pub fn initialize_market(ctx: Context<InitializeMarket>, params: MarketParams) -> Result<()> {
    require!(params.rate_denominator > 0, ExchangeError::InvalidRate);

    let market = &mut ctx.accounts.market;
    market.input_mint = ctx.accounts.input_mint.key();
    market.output_mint = ctx.accounts.output_mint.key();
    market.input_vault = ctx.accounts.input_vault.key();
    market.output_vault = ctx.accounts.output_vault.key();
    market.fee_tier = params.fee_tier;
    market.rate_numerator = params.rate_numerator;
    market.rate_denominator = params.rate_denominator;
    market.extra_input = params.extra_input;
    market.bump = ctx.bumps.market;

    Ok(())
}
