use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{
    constants::{POOL_SEED, TOKEN_VAULT_SEED},
    error::InvestPoolError,
    events::TokenVaultCreated,
    state::Pool,
};

/// Permissionless: creates the pool-owned vault of one basket token
#[derive(Accounts)]
pub struct CreateTokenVault<'info> {
    #[account(
        seeds = [POOL_SEED, pool.authority.as_ref(), pool.pool_name.as_bytes()],
        bump = pool.bump,
        constraint = pool.tokens.contains(&mint.key()) @ InvestPoolError::TokenNotInBasket
    )]
    pub pool: Box<Account<'info, Pool>>,

    pub mint: Box<Account<'info, Mint>>,

    #[account(
        init,
        payer = payer,
        seeds = [TOKEN_VAULT_SEED, pool.key().as_ref(), mint.key().as_ref()],
        bump,
        token::mint = mint,
        token::authority = pool,
    )]
    pub token_vault: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

pub fn create_token_vault(ctx: Context<CreateTokenVault>) -> Result<()> {
    emit!(TokenVaultCreated {
        pool: ctx.accounts.pool.key(),
        mint: ctx.accounts.mint.key(),
        vault: ctx.accounts.token_vault.key(),
    });
    Ok(())
}
