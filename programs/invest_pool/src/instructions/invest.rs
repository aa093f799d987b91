use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};
use invest_core::{
    distribution::distribute,
    fees::collect_invest_fee,
    invest::validate_request,
    InvestReceipt, InvestRequest, Payment,
};

use crate::{
    constants::{ENTRY_VAULT_SEED, INBOX_SEED, INVESTMENT_SEED, INVESTOR_SEED, POOL_SEED},
    error::InvestPoolError,
    events::Invested,
    state::{InvestmentAccount, InvestorAccount, Pool},
    utils::{split_legs, CpiSwapRouter, InboxSigner, PaymentCustody, PaymentSource},
};

/// Accounts shared by `invest` and `receive`.
///
/// Remaining accounts: per basket leg, in basket order, the leg's token vault
/// followed by `ROUTER_ACCOUNTS_PER_LEG` exchange accounts.
#[derive(Accounts)]
pub struct Invest<'info> {
    #[account(
        mut,
        seeds = [POOL_SEED, pool.authority.as_ref(), pool.pool_name.as_bytes()],
        bump = pool.bump
    )]
    pub pool: Box<Account<'info, Pool>>,

    #[account(
        init_if_needed,
        payer = investor,
        space = 8 + InvestorAccount::INIT_SPACE,
        seeds = [INVESTOR_SEED, pool.key().as_ref(), investor.key().as_ref()],
        bump
    )]
    pub investor_account: Box<Account<'info, InvestorAccount>>,

    #[account(
        init,
        payer = investor,
        space = 8 + InvestmentAccount::INIT_SPACE,
        seeds = [
            INVESTMENT_SEED,
            pool.key().as_ref(),
            investor.key().as_ref(),
            &investor_account.investment_count.to_le_bytes()
        ],
        bump
    )]
    pub investment: Box<Account<'info, InvestmentAccount>>,

    /// Lamports attached to this call; a successful native invest drains it
    #[account(
        mut,
        seeds = [INBOX_SEED, pool.key().as_ref(), investor.key().as_ref()],
        bump
    )]
    pub inbox: SystemAccount<'info>,

    #[account(
        mut,
        seeds = [ENTRY_VAULT_SEED, pool.key().as_ref()],
        bump = pool.entry_vault_bump
    )]
    pub entry_vault: Box<Account<'info, TokenAccount>>,

    /// CHECK: address checked against the pool; receives native fees
    #[account(
        mut,
        address = pool.fee_address @ InvestPoolError::InvalidFeeRecipient
    )]
    pub fee_recipient: UncheckedAccount<'info>,

    /// Investor's entry token account, token pools only
    #[account(mut)]
    pub investor_token_account: Option<Box<Account<'info, TokenAccount>>>,

    /// Fee recipient's entry token account, token pools only
    #[account(mut)]
    pub fee_token_account: Option<Box<Account<'info, TokenAccount>>>,

    /// CHECK: external exchange program, address checked against the pool
    #[account(address = pool.swap_router @ InvestPoolError::InvalidSwapRouter)]
    pub swap_router: UncheckedAccount<'info>,

    #[account(mut)]
    pub investor: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> Invest<'info> {
    /// How the investor paid: lamports in the inbox for native pools, entry
    /// tokens otherwise. A token pool never reads the inbox, so lamports sent
    /// there by anyone else cannot block the investor.
    fn payment(&self) -> Payment {
        if self.pool.is_native_entry() {
            Payment::Native {
                attached: self.inbox.lamports(),
            }
        } else {
            Payment::Token
        }
    }

    fn custody(&self, inbox_bump: u8) -> Result<PaymentCustody<'info>> {
        let source = if self.pool.is_native_entry() {
            PaymentSource::Inbox {
                inbox: self.inbox.to_account_info(),
                signer: InboxSigner {
                    pool: self.pool.key(),
                    investor: self.investor.key(),
                    bump: inbox_bump,
                },
                fee_recipient: self.fee_recipient.to_account_info(),
                system_program: self.system_program.to_account_info(),
            }
        } else {
            let source = self
                .investor_token_account
                .as_ref()
                .ok_or(InvestPoolError::MissingTokenAccount)?;
            let fee_account = self
                .fee_token_account
                .as_ref()
                .ok_or(InvestPoolError::MissingTokenAccount)?;
            require_keys_eq!(
                source.mint,
                self.pool.entry_asset,
                InvestPoolError::InvalidEntryAccount
            );
            require_keys_eq!(
                fee_account.mint,
                self.pool.entry_asset,
                InvestPoolError::InvalidFeeRecipient
            );
            PaymentSource::Token {
                source: source.to_account_info(),
                authority: self.investor.to_account_info(),
                fee_account: fee_account.to_account_info(),
            }
        };

        Ok(PaymentCustody {
            source,
            entry_vault: self.entry_vault.to_account_info(),
            token_program: self.token_program.to_account_info(),
        })
    }
}

/// Explicit amount; native pools must attach exactly `amount` lamports
pub fn invest<'info>(
    ctx: Context<'_, '_, 'info, 'info, Invest<'info>>,
    amount: u64,
) -> Result<()> {
    let request = InvestRequest {
        investor: ctx.accounts.investor.key(),
        amount,
        payment: ctx.accounts.payment(),
    };
    process_invest(ctx, request)
}

/// Bare payment: everything attached through the inbox is invested
pub fn receive<'info>(ctx: Context<'_, '_, 'info, 'info, Invest<'info>>) -> Result<()> {
    let request =
        InvestRequest::bare_payment(ctx.accounts.investor.key(), ctx.accounts.inbox.lamports());
    process_invest(ctx, request)
}

fn process_invest<'info>(
    ctx: Context<'_, '_, 'info, 'info, Invest<'info>>,
    request: InvestRequest,
) -> Result<()> {
    let config = ctx.accounts.pool.config()?;
    validate_request(&config, &ctx.accounts.pool.gate(), &request)
        .map_err(InvestPoolError::from)?;

    // Fee first, then the net amount into the entry vault
    let mut custody = ctx.accounts.custody(ctx.bumps.inbox)?;
    let fees = collect_invest_fee(
        request.amount,
        config.invest_fee_percent(),
        &config.entry_asset(),
        &config.fee_address(),
        &mut custody,
    )
    .map_err(InvestPoolError::from)?;
    custody.fund_entry_vault(fees.net_amount)?;

    let mut router = CpiSwapRouter {
        router_program: ctx.accounts.swap_router.to_account_info(),
        pool: ctx.accounts.pool.to_account_info(),
        entry_vault: ctx.accounts.entry_vault.to_account_info(),
        token_program: ctx.accounts.token_program.to_account_info(),
        legs: split_legs(ctx.remaining_accounts, config.token_count())?,
        signer: ctx.accounts.pool.signer(),
    };
    let distribution =
        distribute(&config, fees.net_amount, &mut router).map_err(InvestPoolError::from)?;

    let receipt = InvestReceipt::new(&request, &fees, distribution);
    let aggregates = ctx
        .accounts
        .pool
        .aggregates()
        .apply(&receipt)
        .map_err(InvestPoolError::from)?;

    // Commit
    let pool_key = ctx.accounts.pool.key();
    let investor_account = &mut ctx.accounts.investor_account;
    let investment_id = investor_account.investment_count;
    investor_account.pool = pool_key;
    investor_account.investor = request.investor;
    investor_account.bump = ctx.bumps.investor_account;
    investor_account.investment_count = investment_id
        .checked_add(1)
        .ok_or(InvestPoolError::MathOverflow)?;

    let investment = &mut ctx.accounts.investment;
    investment.pool = pool_key;
    investment.investor = request.investor;
    investment.index = investment_id;
    investment.bump = ctx.bumps.investment;
    investment.record(receipt.to_investment());

    ctx.accounts.pool.set_aggregates(aggregates);

    msg!(
        "Invested {} (fee {}, net {}), investment #{}",
        receipt.gross_amount,
        receipt.invest_fee,
        receipt.net_amount,
        investment_id
    );

    emit!(Invested {
        pool: pool_key,
        investor: receipt.investor,
        investment_id,
        net_amount: receipt.net_amount,
        gross_amount: receipt.gross_amount,
        invest_fee: receipt.invest_fee,
        token_balances: receipt.token_balances,
        input_is_native_token: receipt.input_is_native_token,
        dust: receipt.dust,
    });

    Ok(())
}
