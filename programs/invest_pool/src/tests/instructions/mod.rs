use anchor_lang::{
    prelude::*, solana_program::instruction::Instruction, system_program, InstructionData,
};
use anchor_spl::token::spl_token;

use crate::{
    constants::{
        ENTRY_VAULT_SEED, INBOX_SEED, INVESTMENT_SEED, INVESTOR_SEED, POOL_SEED, TOKEN_VAULT_SEED,
    },
    instructions::InitializePoolParams,
};

pub struct InstructionBuilder;

pub fn pool_pda(authority: &Pubkey, pool_name: &str) -> Pubkey {
    Pubkey::find_program_address(
        &[POOL_SEED, authority.as_ref(), pool_name.as_bytes()],
        &crate::id(),
    )
    .0
}

pub fn entry_vault_pda(pool: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[ENTRY_VAULT_SEED, pool.as_ref()], &crate::id()).0
}

pub fn token_vault_pda(pool: &Pubkey, mint: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(
        &[TOKEN_VAULT_SEED, pool.as_ref(), mint.as_ref()],
        &crate::id(),
    )
    .0
}

pub fn investor_pda(pool: &Pubkey, user: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[INVESTOR_SEED, pool.as_ref(), user.as_ref()], &crate::id()).0
}

pub fn investment_pda(pool: &Pubkey, user: &Pubkey, index: u64) -> Pubkey {
    Pubkey::find_program_address(
        &[
            INVESTMENT_SEED,
            pool.as_ref(),
            user.as_ref(),
            &index.to_le_bytes(),
        ],
        &crate::id(),
    )
    .0
}

pub fn inbox_pda(pool: &Pubkey, user: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[INBOX_SEED, pool.as_ref(), user.as_ref()], &crate::id()).0
}

/// Accounts of an invest call beyond the ones derived from the pool
pub struct InvestAccounts {
    pub pool: Pubkey,
    pub investor: Pubkey,
    pub investment_index: u64,
    pub fee_recipient: Pubkey,
    pub swap_router: Pubkey,
    pub investor_token_account: Option<Pubkey>,
    pub fee_token_account: Option<Pubkey>,
    /// Per leg: token vault followed by the router accounts
    pub remaining: Vec<AccountMeta>,
}

impl InstructionBuilder {
    pub fn initialize_pool(
        authority: &Pubkey,
        entry_mint: &Pubkey,
        params: InitializePoolParams,
    ) -> (Instruction, Pubkey, Pubkey) {
        let program_id = crate::id();
        let pool = pool_pda(authority, &params.pool_name);
        let entry_vault = entry_vault_pda(&pool);

        let accounts = crate::accounts::InitializePool {
            pool,
            entry_mint: *entry_mint,
            entry_vault,
            authority: *authority,
            token_program: spl_token::ID,
            system_program: system_program::ID,
            rent: anchor_lang::solana_program::sysvar::rent::ID,
        };

        let instruction = Instruction {
            program_id,
            accounts: accounts.to_account_metas(None),
            data: crate::instruction::InitializePool { params }.data(),
        };

        (instruction, pool, entry_vault)
    }

    pub fn create_token_vault(
        payer: &Pubkey,
        pool: &Pubkey,
        mint: &Pubkey,
    ) -> (Instruction, Pubkey) {
        let token_vault = token_vault_pda(pool, mint);
        let accounts = crate::accounts::CreateTokenVault {
            pool: *pool,
            mint: *mint,
            token_vault,
            payer: *payer,
            token_program: spl_token::ID,
            system_program: system_program::ID,
            rent: anchor_lang::solana_program::sysvar::rent::ID,
        };

        let instruction = Instruction {
            program_id: crate::id(),
            accounts: accounts.to_account_metas(None),
            data: crate::instruction::CreateTokenVault {}.data(),
        };

        (instruction, token_vault)
    }

    fn invest_metas(accounts: &InvestAccounts) -> Vec<AccountMeta> {
        let pool = accounts.pool;
        let investor = accounts.investor;
        let mut metas = crate::accounts::Invest {
            pool,
            investor_account: investor_pda(&pool, &investor),
            investment: investment_pda(&pool, &investor, accounts.investment_index),
            inbox: inbox_pda(&pool, &investor),
            entry_vault: entry_vault_pda(&pool),
            fee_recipient: accounts.fee_recipient,
            investor_token_account: accounts.investor_token_account,
            fee_token_account: accounts.fee_token_account,
            swap_router: accounts.swap_router,
            investor,
            token_program: spl_token::ID,
            system_program: system_program::ID,
        }
        .to_account_metas(None);
        metas.extend(accounts.remaining.iter().cloned());
        metas
    }

    pub fn invest(accounts: &InvestAccounts, amount: u64) -> Instruction {
        Instruction {
            program_id: crate::id(),
            accounts: Self::invest_metas(accounts),
            data: crate::instruction::Invest { amount }.data(),
        }
    }

    pub fn receive(accounts: &InvestAccounts) -> Instruction {
        Instruction {
            program_id: crate::id(),
            accounts: Self::invest_metas(accounts),
            data: crate::instruction::Receive {}.data(),
        }
    }

    pub fn pause(pool: &Pubkey, authority: &Pubkey) -> Instruction {
        let accounts = crate::accounts::SetPaused {
            pool: *pool,
            authority: *authority,
        };
        Instruction {
            program_id: crate::id(),
            accounts: accounts.to_account_metas(None),
            data: crate::instruction::Pause {}.data(),
        }
    }

    pub fn unpause(pool: &Pubkey, authority: &Pubkey) -> Instruction {
        let accounts = crate::accounts::SetPaused {
            pool: *pool,
            authority: *authority,
        };
        Instruction {
            program_id: crate::id(),
            accounts: accounts.to_account_metas(None),
            data: crate::instruction::Unpause {}.data(),
        }
    }

    pub fn investment_by_user(pool: &Pubkey, user: &Pubkey, index: u64) -> Instruction {
        let accounts = crate::accounts::InvestmentView {
            pool: *pool,
            user: *user,
            investor_account: investor_pda(pool, user),
            investment: investment_pda(pool, user, index),
        };
        Instruction {
            program_id: crate::id(),
            accounts: accounts.to_account_metas(None),
            data: crate::instruction::InvestmentByUser { index }.data(),
        }
    }

    pub fn investments_by_user(pool: &Pubkey, user: &Pubkey, count: u64) -> Instruction {
        let mut metas = crate::accounts::InvestorView {
            pool: *pool,
            user: *user,
            investor_account: investor_pda(pool, user),
        }
        .to_account_metas(None);
        metas.extend(
            (0..count).map(|index| AccountMeta::new_readonly(investment_pda(pool, user, index), false)),
        );
        Instruction {
            program_id: crate::id(),
            accounts: metas,
            data: crate::instruction::InvestmentsByUser {}.data(),
        }
    }
}
