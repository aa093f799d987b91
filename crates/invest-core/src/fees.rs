//! # Fee Engine
//!
//! Invest and success fee math. Both fees are whole percentages of the gross
//! amount, rounded down, so the investor keeps any rounding remainder.

use crate::constants::PERCENT_DENOMINATOR;
use crate::errors::{CoreResult, PoolError, TransferError};
use solana_program::pubkey::Pubkey;
use std::collections::HashMap;

/// Split of a gross amount into the distributed part and the fee
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FeeBreakdown {
    pub gross_amount: u64,
    pub net_amount: u64,
    pub fee_amount: u64,
}

/// `amount * percent / 100`, truncating
pub fn percent_of(amount: u64, percent: u16) -> CoreResult<u64> {
    let value = (amount as u128)
        .checked_mul(percent as u128)
        .ok_or(PoolError::MathOverflow)?
        / PERCENT_DENOMINATOR;
    u64::try_from(value).map_err(|_| PoolError::MathOverflow)
}

/// Deduct the invest fee from a gross amount
pub fn deduct_invest_fee(gross_amount: u64, invest_fee_percent: u16) -> CoreResult<FeeBreakdown> {
    let fee_amount = percent_of(gross_amount, invest_fee_percent)?;
    let net_amount = gross_amount
        .checked_sub(fee_amount)
        .ok_or(PoolError::MathOverflow)?;
    Ok(FeeBreakdown {
        gross_amount,
        net_amount,
        fee_amount,
    })
}

/// Success fee owed on a realized amount. Not charged by the invest flow.
pub fn success_fee(gross_amount: u64, success_fee_percent: u16) -> CoreResult<u64> {
    percent_of(gross_amount, success_fee_percent)
}

/// Moves entry currency to the fee recipient
pub trait FeeTransfer {
    fn transfer_fee(
        &mut self,
        asset: &Pubkey,
        recipient: &Pubkey,
        amount: u64,
    ) -> Result<(), TransferError>;
}

/// Deduct the invest fee and pay it out. A zero fee moves nothing.
pub fn collect_invest_fee<T: FeeTransfer + ?Sized>(
    gross_amount: u64,
    invest_fee_percent: u16,
    asset: &Pubkey,
    recipient: &Pubkey,
    treasury: &mut T,
) -> CoreResult<FeeBreakdown> {
    let breakdown = deduct_invest_fee(gross_amount, invest_fee_percent)?;
    if breakdown.fee_amount > 0 {
        treasury.transfer_fee(asset, recipient, breakdown.fee_amount)?;
    }
    Ok(breakdown)
}

/// In-memory fee recipient ledger for simulations and tests.
///
/// Pays out of a funding balance and credits recipients; recipients listed
/// as rejecting make every transfer to them fail.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTreasury {
    funding: u64,
    balances: HashMap<Pubkey, u64>,
    rejecting: Vec<Pubkey>,
}

impl InMemoryTreasury {
    /// Treasury with an unlimited funding balance
    pub fn unlimited() -> Self {
        Self::with_funding(u64::MAX)
    }

    pub fn with_funding(funding: u64) -> Self {
        Self {
            funding,
            ..Self::default()
        }
    }

    pub fn reject_transfers_to(&mut self, recipient: Pubkey) {
        self.rejecting.push(recipient);
    }

    pub fn balance_of(&self, recipient: &Pubkey) -> u64 {
        self.balances.get(recipient).copied().unwrap_or_default()
    }

    pub fn remaining_funding(&self) -> u64 {
        self.funding
    }
}

impl FeeTransfer for InMemoryTreasury {
    fn transfer_fee(
        &mut self,
        _asset: &Pubkey,
        recipient: &Pubkey,
        amount: u64,
    ) -> Result<(), TransferError> {
        if self.rejecting.contains(recipient) {
            return Err(TransferError::RecipientRejected(*recipient));
        }
        if amount > self.funding {
            return Err(TransferError::InsufficientBalance {
                needed: amount,
                available: self.funding,
            });
        }
        let balance = self.balances.entry(*recipient).or_default();
        *balance = balance
            .checked_add(amount)
            .ok_or_else(|| TransferError::Failed("recipient balance overflow".to_string()))?;
        self.funding -= amount;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invest_fee_truncates() {
        let breakdown = deduct_invest_fee(1_000_000_000, 10).unwrap();
        assert_eq!(breakdown.fee_amount, 100_000_000);
        assert_eq!(breakdown.net_amount, 900_000_000);

        // 10% of 15 is 1.5, rounded down
        let breakdown = deduct_invest_fee(15, 10).unwrap();
        assert_eq!(breakdown.fee_amount, 1);
        assert_eq!(breakdown.net_amount, 14);
    }

    #[test]
    fn test_zero_fee() {
        let breakdown = deduct_invest_fee(12_345, 0).unwrap();
        assert_eq!(breakdown.fee_amount, 0);
        assert_eq!(breakdown.net_amount, 12_345);
    }

    #[test]
    fn test_no_overflow_at_max_amount() {
        let breakdown = deduct_invest_fee(u64::MAX, 50).unwrap();
        assert_eq!(breakdown.fee_amount, u64::MAX / 2);
        assert_eq!(breakdown.net_amount, u64::MAX - u64::MAX / 2);
    }

    #[test]
    fn test_success_fee() {
        assert_eq!(success_fee(200, 20).unwrap(), 40);
        assert_eq!(success_fee(9, 20).unwrap(), 1);
        assert_eq!(success_fee(9, 0).unwrap(), 0);
    }

    #[test]
    fn test_collect_pays_recipient() {
        let asset = Pubkey::new_unique();
        let recipient = Pubkey::new_unique();
        let mut treasury = InMemoryTreasury::unlimited();

        let breakdown = collect_invest_fee(1_000, 10, &asset, &recipient, &mut treasury).unwrap();
        assert_eq!(breakdown.net_amount, 900);
        assert_eq!(treasury.balance_of(&recipient), 100);
    }

    #[test]
    fn test_collect_skips_zero_fee() {
        let asset = Pubkey::new_unique();
        let recipient = Pubkey::new_unique();
        let mut treasury = InMemoryTreasury::with_funding(0);
        treasury.reject_transfers_to(recipient);

        // Nothing to pay, so a rejecting recipient is never contacted
        let breakdown = collect_invest_fee(5, 10, &asset, &recipient, &mut treasury).unwrap();
        assert_eq!(breakdown.fee_amount, 0);
        assert_eq!(breakdown.net_amount, 5);
    }

    #[test]
    fn test_collect_propagates_transfer_error() {
        let asset = Pubkey::new_unique();
        let recipient = Pubkey::new_unique();
        let mut treasury = InMemoryTreasury::with_funding(50);

        let err = collect_invest_fee(1_000, 10, &asset, &recipient, &mut treasury).unwrap_err();
        assert_eq!(
            err,
            PoolError::Transfer(TransferError::InsufficientBalance {
                needed: 100,
                available: 50
            })
        );
        assert_eq!(treasury.balance_of(&recipient), 0);
        assert_eq!(treasury.remaining_funding(), 50);
    }
}
