//! Payment custody
//!
//! Moves an investor's payment into pool custody. Native pools pay from the
//! investor's inbox PDA, token pools from the investor's entry token account.
//! The fee leg implements the core `FeeTransfer`; the net amount is moved
//! into the entry vault afterwards with [`PaymentCustody::fund_entry_vault`].

use anchor_lang::{
    prelude::*,
    system_program::{self, Transfer as SystemTransfer},
};
use anchor_spl::token::{self, accessor, SyncNative, Transfer};
use invest_core::{FeeTransfer, TransferError};

use crate::constants::INBOX_SEED;

/// Seeds of an investor's inbox PDA
#[derive(Clone, Debug)]
pub struct InboxSigner {
    pub pool: Pubkey,
    pub investor: Pubkey,
    pub bump: u8,
}

impl InboxSigner {
    pub fn seeds(&self) -> [&[u8]; 4] {
        [
            INBOX_SEED,
            self.pool.as_ref(),
            self.investor.as_ref(),
            std::slice::from_ref(&self.bump),
        ]
    }
}

pub enum PaymentSource<'info> {
    /// Lamports attached through the inbox; the fee is paid in lamports
    Inbox {
        inbox: AccountInfo<'info>,
        signer: InboxSigner,
        fee_recipient: AccountInfo<'info>,
        system_program: AccountInfo<'info>,
    },
    /// Entry tokens pulled from the investor, who signs the transfers
    Token {
        source: AccountInfo<'info>,
        authority: AccountInfo<'info>,
        fee_account: AccountInfo<'info>,
    },
}

pub struct PaymentCustody<'info> {
    pub source: PaymentSource<'info>,
    pub entry_vault: AccountInfo<'info>,
    pub token_program: AccountInfo<'info>,
}

impl<'info> PaymentCustody<'info> {
    fn available(&self) -> Result<u64> {
        match &self.source {
            PaymentSource::Inbox { inbox, .. } => Ok(inbox.lamports()),
            PaymentSource::Token { source, .. } => accessor::amount(source),
        }
    }

    /// Owner of the account the fee is paid into
    fn fee_owner(&self) -> Result<Pubkey> {
        match &self.source {
            PaymentSource::Inbox { fee_recipient, .. } => Ok(fee_recipient.key()),
            PaymentSource::Token { fee_account, .. } => accessor::authority(fee_account),
        }
    }

    fn pay(&self, to: &AccountInfo<'info>, amount: u64) -> Result<()> {
        match &self.source {
            PaymentSource::Inbox {
                inbox,
                signer,
                system_program,
                ..
            } => {
                let seeds = signer.seeds();
                system_program::transfer(
                    CpiContext::new_with_signer(
                        system_program.clone(),
                        SystemTransfer {
                            from: inbox.clone(),
                            to: to.clone(),
                        },
                        &[&seeds[..]],
                    ),
                    amount,
                )
            }
            PaymentSource::Token {
                source, authority, ..
            } => token::transfer(
                CpiContext::new(
                    self.token_program.clone(),
                    Transfer {
                        from: source.clone(),
                        to: to.clone(),
                        authority: authority.clone(),
                    },
                ),
                amount,
            ),
        }
    }

    /// Move the net amount into the entry vault. Lamports are wrapped in
    /// place with `sync_native`.
    pub fn fund_entry_vault(&self, amount: u64) -> Result<()> {
        if amount == 0 {
            return Ok(());
        }
        self.pay(&self.entry_vault, amount)?;
        if let PaymentSource::Inbox { .. } = self.source {
            token::sync_native(CpiContext::new(
                self.token_program.clone(),
                SyncNative {
                    account: self.entry_vault.clone(),
                },
            ))?;
        }
        Ok(())
    }
}

impl FeeTransfer for PaymentCustody<'_> {
    fn transfer_fee(
        &mut self,
        _asset: &Pubkey,
        recipient: &Pubkey,
        amount: u64,
    ) -> std::result::Result<(), TransferError> {
        let owner = self
            .fee_owner()
            .map_err(|e| TransferError::Failed(e.to_string()))?;
        if owner != *recipient {
            return Err(TransferError::RecipientRejected(owner));
        }

        let available = self
            .available()
            .map_err(|e| TransferError::Failed(e.to_string()))?;
        if amount > available {
            return Err(TransferError::InsufficientBalance {
                needed: amount,
                available,
            });
        }

        let to = match &self.source {
            PaymentSource::Inbox { fee_recipient, .. } => fee_recipient.clone(),
            PaymentSource::Token { fee_account, .. } => fee_account.clone(),
        };
        self.pay(&to, amount)
            .map_err(|e| TransferError::Failed(e.to_string()))
    }
}
