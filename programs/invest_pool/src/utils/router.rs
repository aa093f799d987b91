//! Swap router CPI adapter
//!
//! Implements the core `SwapRouter` against an external exchange program.
//! Each leg swaps out of the entry vault into the leg's token vault, signed
//! by the pool PDA. The amount received is measured as the balance change of
//! the token vault, never taken from the exchange's return data, and the
//! entry vault must have been debited by exactly the leg's input.

use anchor_lang::{
    prelude::*,
    solana_program::{
        instruction::{AccountMeta, Instruction},
        program::invoke_signed,
    },
};
use anchor_spl::token::accessor;
use invest_core::{SwapError, SwapRequest, SwapRouter};

use crate::{
    constants::{ACCOUNTS_PER_LEG, SWAP_EXACT_INPUT_DISCRIMINATOR, TOKEN_VAULT_SEED},
    error::InvestPoolError,
    state::PoolSigner,
};

/// Arguments of the exchange's `swap_exact_input` instruction
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SwapExactInputArgs {
    pub amount_in: u64,
    pub fee_tier: u32,
    pub minimum_amount_out: u64,
}

impl SwapExactInputArgs {
    pub fn data(&self) -> Result<Vec<u8>> {
        let mut data = SWAP_EXACT_INPUT_DISCRIMINATOR.to_vec();
        self.serialize(&mut data)
            .map_err(|_| anchor_lang::error::ErrorCode::InstructionDidNotSerialize)?;
        Ok(data)
    }
}

/// Accounts of a single basket leg
#[derive(Clone)]
pub struct LegAccounts<'info> {
    pub token_vault: AccountInfo<'info>,
    pub router_accounts: Vec<AccountInfo<'info>>,
}

/// Group remaining accounts into one `LegAccounts` per basket token
pub fn split_legs<'info>(
    remaining: &[AccountInfo<'info>],
    token_count: usize,
) -> Result<Vec<LegAccounts<'info>>> {
    require!(
        remaining.len() == token_count * ACCOUNTS_PER_LEG,
        InvestPoolError::InvalidRemainingAccounts
    );
    Ok(remaining
        .chunks(ACCOUNTS_PER_LEG)
        .map(|chunk| LegAccounts {
            token_vault: chunk[0].clone(),
            router_accounts: chunk[1..].to_vec(),
        })
        .collect())
}

pub struct CpiSwapRouter<'info> {
    pub router_program: AccountInfo<'info>,
    pub pool: AccountInfo<'info>,
    pub entry_vault: AccountInfo<'info>,
    pub token_program: AccountInfo<'info>,
    pub legs: Vec<LegAccounts<'info>>,
    pub signer: PoolSigner,
}

impl<'info> CpiSwapRouter<'info> {
    /// Token vault of `request.leg`, checked to be the pool's vault PDA for
    /// the requested mint
    fn leg(&self, request: &SwapRequest) -> Result<&LegAccounts<'info>> {
        let leg = self
            .legs
            .get(request.leg)
            .ok_or(InvestPoolError::InvalidRemainingAccounts)?;
        let (expected_vault, _) = Pubkey::find_program_address(
            &[
                TOKEN_VAULT_SEED,
                self.pool.key().as_ref(),
                request.token_out.as_ref(),
            ],
            &crate::ID,
        );
        require_keys_eq!(
            leg.token_vault.key(),
            expected_vault,
            InvestPoolError::InvalidTokenVault
        );
        require_keys_eq!(
            accessor::mint(&leg.token_vault)?,
            request.token_out,
            InvestPoolError::InvalidTokenVault
        );
        require_keys_eq!(
            accessor::authority(&leg.token_vault)?,
            self.pool.key(),
            InvestPoolError::InvalidTokenVault
        );
        Ok(leg)
    }

    fn execute(&self, request: &SwapRequest) -> Result<u64> {
        let leg = self.leg(request)?;
        let entry_before = accessor::amount(&self.entry_vault)?;
        let balance_before = accessor::amount(&leg.token_vault)?;

        let args = SwapExactInputArgs {
            amount_in: request.amount_in,
            fee_tier: request.fee_tier,
            minimum_amount_out: 0,
        };

        let mut accounts = vec![
            AccountMeta::new_readonly(self.pool.key(), true),
            AccountMeta::new(self.entry_vault.key(), false),
            AccountMeta::new(leg.token_vault.key(), false),
            AccountMeta::new_readonly(self.token_program.key(), false),
        ];
        let mut infos = vec![
            self.pool.clone(),
            self.entry_vault.clone(),
            leg.token_vault.clone(),
            self.token_program.clone(),
        ];
        for info in &leg.router_accounts {
            accounts.push(AccountMeta {
                pubkey: info.key(),
                is_signer: info.is_signer,
                is_writable: info.is_writable,
            });
            infos.push(info.clone());
        }
        infos.push(self.router_program.clone());

        let instruction = Instruction {
            program_id: self.router_program.key(),
            accounts,
            data: args.data()?,
        };
        let seeds = self.signer.seeds();
        invoke_signed(&instruction, &infos, &[&seeds[..]])?;

        // The exchange may take exactly the leg's share from the entry vault
        let entry_after = accessor::amount(&self.entry_vault)?;
        require!(
            entry_before.checked_sub(entry_after) == Some(request.amount_in),
            InvestPoolError::RouterDebitMismatch
        );

        let balance_after = accessor::amount(&leg.token_vault)?;
        Ok(balance_after
            .checked_sub(balance_before)
            .ok_or(InvestPoolError::InvalidTokenVault)?)
    }
}

impl SwapRouter for CpiSwapRouter<'_> {
    fn swap(&mut self, request: &SwapRequest) -> std::result::Result<u64, SwapError> {
        self.execute(request).map_err(|err| SwapError::Reverted {
            token_out: request.token_out,
            reason: err.to_string(),
        })
    }
}
