use anchor_lang::prelude::*;

use crate::{
    constants::POOL_SEED,
    error::InvestPoolError,
    events::{PoolPaused, PoolUnpaused},
    state::Pool,
};

/// Accounts shared by `pause` and `unpause`. The authority is checked by the
/// pause gate so that a wrong signer reports `Unauthorized`.
#[derive(Accounts)]
pub struct SetPaused<'info> {
    #[account(
        mut,
        seeds = [POOL_SEED, pool.authority.as_ref(), pool.pool_name.as_bytes()],
        bump = pool.bump
    )]
    pub pool: Box<Account<'info, Pool>>,

    pub authority: Signer<'info>,
}

pub fn pause(ctx: Context<SetPaused>) -> Result<()> {
    let pool = &mut ctx.accounts.pool;
    let authority = ctx.accounts.authority.key();

    let mut gate = pool.gate();
    gate.pause(&authority).map_err(InvestPoolError::from)?;
    pool.paused = gate.is_paused();

    msg!("Pool '{}' paused", pool.pool_name);
    emit!(PoolPaused {
        pool: pool.key(),
        authority,
    });
    Ok(())
}

pub fn unpause(ctx: Context<SetPaused>) -> Result<()> {
    let pool = &mut ctx.accounts.pool;
    let authority = ctx.accounts.authority.key();

    let mut gate = pool.gate();
    gate.unpause(&authority).map_err(InvestPoolError::from)?;
    pool.paused = gate.is_paused();

    msg!("Pool '{}' unpaused", pool.pool_name);
    emit!(PoolUnpaused {
        pool: pool.key(),
        authority,
    });
    Ok(())
}
