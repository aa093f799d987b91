use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::{
    error::ExchangeError,
    state::{Market, MARKET_SEED},
};

#[derive(Accounts)]
pub struct SwapExactInput<'info> {
    /// Owner of `source`
    pub authority: Signer<'info>,

    #[account(mut)]
    pub source: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub destination: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,

    #[account(
        seeds = [
            MARKET_SEED,
            market.input_mint.as_ref(),
            market.output_mint.as_ref(),
            &market.fee_tier.to_le_bytes()
        ],
        bump = market.bump
    )]
    pub market: Box<Account<'info, Market>>,

    #[account(mut, address = market.input_vault)]
    pub market_input_vault: Box<Account<'info, TokenAccount>>,

    #[account(mut, address = market.output_vault)]
    pub market_output_vault: Box<Account<'info, TokenAccount>>,

    /// CHECK: price feed slot of the interface; a fixed-rate market ignores it
    pub oracle: UncheckedAccount<'info>,
}

pub fn swap_exact_input(
    ctx: Context<SwapExactInput>,
    amount_in: u64,
    fee_tier: u32,
    minimum_amount_out: u64,
) -> Result<()> {
    let market = &ctx.accounts.market;
    require!(fee_tier == market.fee_tier, ExchangeError::FeeTierMismatch);
    require_keys_eq!(
        ctx.accounts.source.mint,
        market.input_mint,
        ExchangeError::MintMismatch
    );
    require_keys_eq!(
        ctx.accounts.destination.mint,
        market.output_mint,
        ExchangeError::MintMismatch
    );

    let amount_out = market.quote(amount_in)?;
    require!(
        amount_out >= minimum_amount_out,
        ExchangeError::SlippageExceeded
    );
    let taken = amount_in
        .checked_add(market.extra_input)
        .ok_or(ExchangeError::MathOverflow)?;

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.source.to_account_info(),
                to: ctx.accounts.market_input_vault.to_account_info(),
                authority: ctx.accounts.authority.to_account_info(),
            },
        ),
        taken,
    )?;

    let fee_tier_bytes = market.fee_tier.to_le_bytes();
    let bump = [market.bump];
    let seeds: [&[u8]; 5] = [
        MARKET_SEED,
        market.input_mint.as_ref(),
        market.output_mint.as_ref(),
        &fee_tier_bytes,
        &bump,
    ];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.market_output_vault.to_account_info(),
                to: ctx.accounts.destination.to_account_info(),
                authority: market.to_account_info(),
            },
            &[&seeds[..]],
        ),
        amount_out,
    )?;

    msg!("Swapped {} (took {}) for {}", amount_in, taken, amount_out);
    Ok(())
}
