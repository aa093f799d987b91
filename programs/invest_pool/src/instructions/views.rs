use anchor_lang::prelude::*;
use invest_core::ledger::check_index;

use crate::{
    constants::{INVESTMENT_SEED, INVESTOR_SEED, POOL_SEED},
    error::InvestPoolError,
    state::{InvestmentAccount, InvestmentData, InvestorAccount, Pool, PoolData},
};

#[derive(Accounts)]
pub struct PoolView<'info> {
    #[account(
        seeds = [POOL_SEED, pool.authority.as_ref(), pool.pool_name.as_bytes()],
        bump = pool.bump
    )]
    pub pool: Box<Account<'info, Pool>>,
}

#[derive(Accounts)]
pub struct InvestorView<'info> {
    #[account(
        seeds = [POOL_SEED, pool.authority.as_ref(), pool.pool_name.as_bytes()],
        bump = pool.bump
    )]
    pub pool: Box<Account<'info, Pool>>,

    /// CHECK: any wallet; only used as a seed
    pub user: UncheckedAccount<'info>,

    /// CHECK: absent until the user's first investment
    #[account(
        seeds = [INVESTOR_SEED, pool.key().as_ref(), user.key().as_ref()],
        bump
    )]
    pub investor_account: UncheckedAccount<'info>,
}

#[derive(Accounts)]
#[instruction(index: u64)]
pub struct InvestmentView<'info> {
    #[account(
        seeds = [POOL_SEED, pool.authority.as_ref(), pool.pool_name.as_bytes()],
        bump = pool.bump
    )]
    pub pool: Box<Account<'info, Pool>>,

    /// CHECK: any wallet; only used as a seed
    pub user: UncheckedAccount<'info>,

    /// CHECK: absent until the user's first investment
    #[account(
        seeds = [INVESTOR_SEED, pool.key().as_ref(), user.key().as_ref()],
        bump
    )]
    pub investor_account: UncheckedAccount<'info>,

    /// CHECK: loaded only after the index is known to be in range
    #[account(
        seeds = [
            INVESTMENT_SEED,
            pool.key().as_ref(),
            user.key().as_ref(),
            &index.to_le_bytes()
        ],
        bump
    )]
    pub investment: UncheckedAccount<'info>,
}

/// Deserialize a program-owned account
fn load<T: AccountDeserialize>(info: &AccountInfo) -> Result<T> {
    require_keys_eq!(
        *info.owner,
        crate::ID,
        anchor_lang::error::ErrorCode::AccountOwnedByWrongProgram
    );
    let data = info.try_borrow_data()?;
    T::try_deserialize(&mut &data[..])
}

/// Number of investments recorded for the investor; 0 if they never invested
fn investment_count(investor_account: &AccountInfo) -> Result<u64> {
    if investor_account.data_is_empty() {
        return Ok(0);
    }
    Ok(load::<InvestorAccount>(investor_account)?.investment_count)
}

pub fn pool_data(ctx: Context<PoolView>) -> Result<PoolData> {
    Ok(PoolData::from(&**ctx.accounts.pool))
}

pub fn investment_by_user(ctx: Context<InvestmentView>, index: u64) -> Result<InvestmentData> {
    let count = investment_count(&ctx.accounts.investor_account.to_account_info())?;
    check_index(index, count).map_err(InvestPoolError::from)?;

    let record: InvestmentAccount = load(&ctx.accounts.investment.to_account_info())?;
    Ok(InvestmentData::from(&record))
}

/// Full history, oldest first. Every record must be passed as a remaining
/// account, in index order.
pub fn investments_by_user<'info>(
    ctx: Context<'_, '_, 'info, 'info, InvestorView<'info>>,
) -> Result<Vec<InvestmentData>> {
    let pool = ctx.accounts.pool.key();
    let user = ctx.accounts.user.key();
    let count = investment_count(&ctx.accounts.investor_account.to_account_info())?;
    require!(
        ctx.remaining_accounts.len() as u64 == count,
        InvestPoolError::InvalidRemainingAccounts
    );

    ctx.remaining_accounts
        .iter()
        .enumerate()
        .map(|(index, info)| {
            let index = index as u64;
            let record: InvestmentAccount = load(info)?;
            require!(
                record.pool == pool && record.investor == user && record.index == index,
                InvestPoolError::InvalidInvestmentRecord
            );
            let expected = Pubkey::create_program_address(
                &[
                    INVESTMENT_SEED,
                    pool.as_ref(),
                    user.as_ref(),
                    &index.to_le_bytes(),
                    &[record.bump],
                ],
                &crate::ID,
            )
            .map_err(|_| InvestPoolError::InvalidInvestmentRecord)?;
            require_keys_eq!(
                info.key(),
                expected,
                InvestPoolError::InvalidInvestmentRecord
            );
            Ok(InvestmentData::from(&record))
        })
        .collect()
}
