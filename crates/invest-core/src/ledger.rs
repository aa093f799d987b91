//! # Investment Ledger
//!
//! Per-investor append-only history plus pool-wide totals. Totals are never
//! mutated in place: [`PoolAggregates::apply`] returns the next value, and the
//! ledger swaps it in only together with the new record.

use crate::distribution::Distribution;
use crate::errors::{CoreResult, PoolError};
use crate::fees::FeeBreakdown;
use crate::invest::InvestRequest;
use solana_program::pubkey::Pubkey;
use std::collections::HashMap;

/// One investment as recorded for its investor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Investment {
    pub active: bool,
    pub input_is_native_token: bool,
    /// Net amount distributed into the basket
    pub received_currency: u64,
    /// Amount of each target token acquired, in basket order
    pub token_balances: Vec<u64>,
}

/// Everything a completed invest produced, before it is recorded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvestReceipt {
    pub investor: Pubkey,
    pub input_is_native_token: bool,
    pub gross_amount: u64,
    pub invest_fee: u64,
    pub net_amount: u64,
    pub token_balances: Vec<u64>,
    /// Entry currency kept by the pool after share truncation
    pub dust: u64,
}

impl InvestReceipt {
    pub fn new(request: &InvestRequest, fees: &FeeBreakdown, distribution: Distribution) -> Self {
        Self {
            investor: request.investor,
            input_is_native_token: request.payment.is_native(),
            gross_amount: fees.gross_amount,
            invest_fee: fees.fee_amount,
            net_amount: fees.net_amount,
            token_balances: distribution.token_balances,
            dust: distribution.dust,
        }
    }

    pub fn to_investment(&self) -> Investment {
        Investment {
            active: true,
            input_is_native_token: self.input_is_native_token,
            received_currency: self.net_amount,
            token_balances: self.token_balances.clone(),
        }
    }
}

/// Pool-wide totals
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PoolAggregates {
    pub total_received_currency: u64,
    pub total_invest_fee: u64,
    /// Pool holding of each target token, in basket order
    pub pool_tokens_balances: Vec<u64>,
}

impl PoolAggregates {
    pub fn new(token_count: usize) -> Self {
        Self {
            total_received_currency: 0,
            total_invest_fee: 0,
            pool_tokens_balances: vec![0; token_count],
        }
    }

    /// Totals after recording `receipt`
    pub fn apply(&self, receipt: &InvestReceipt) -> CoreResult<PoolAggregates> {
        if receipt.token_balances.len() != self.pool_tokens_balances.len() {
            return Err(PoolError::MathOverflow);
        }

        let pool_tokens_balances = self
            .pool_tokens_balances
            .iter()
            .zip(&receipt.token_balances)
            .map(|(total, added)| total.checked_add(*added).ok_or(PoolError::MathOverflow))
            .collect::<CoreResult<Vec<u64>>>()?;

        Ok(PoolAggregates {
            total_received_currency: self
                .total_received_currency
                .checked_add(receipt.net_amount)
                .ok_or(PoolError::MathOverflow)?,
            total_invest_fee: self
                .total_invest_fee
                .checked_add(receipt.invest_fee)
                .ok_or(PoolError::MathOverflow)?,
            pool_tokens_balances,
        })
    }
}

/// Fails with `IndexOutOfRange` unless `index < len`
pub fn check_index(index: u64, len: u64) -> CoreResult<()> {
    if index >= len {
        return Err(PoolError::IndexOutOfRange { index, len });
    }
    Ok(())
}

/// In-memory ledger keyed by investor
#[derive(Debug, Clone, Default)]
pub struct InvestmentLedger {
    investments: HashMap<Pubkey, Vec<Investment>>,
    aggregates: PoolAggregates,
}

impl InvestmentLedger {
    pub fn new(token_count: usize) -> Self {
        Self {
            investments: HashMap::new(),
            aggregates: PoolAggregates::new(token_count),
        }
    }

    pub fn aggregates(&self) -> &PoolAggregates {
        &self.aggregates
    }

    /// Record a receipt and return its per-investor index.
    ///
    /// Totals are computed first, so an overflow leaves the ledger untouched.
    pub fn record(&mut self, receipt: &InvestReceipt) -> CoreResult<u64> {
        let aggregates = self.aggregates.apply(receipt)?;
        let history = self.investments.entry(receipt.investor).or_default();
        history.push(receipt.to_investment());
        self.aggregates = aggregates;
        Ok((history.len() - 1) as u64)
    }

    /// Full history of `user`, oldest first; empty if they never invested
    pub fn investments_by_user(&self, user: &Pubkey) -> &[Investment] {
        self.investments
            .get(user)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn investment_by_user(&self, user: &Pubkey, index: u64) -> CoreResult<&Investment> {
        let history = self.investments_by_user(user);
        check_index(index, history.len() as u64)?;
        usize::try_from(index)
            .ok()
            .and_then(|i| history.get(i))
            .ok_or(PoolError::MathOverflow)
    }

    pub fn investment_count(&self, user: &Pubkey) -> u64 {
        self.investments_by_user(user).len() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn receipt(investor: Pubkey, net: u64, fee: u64, balances: Vec<u64>) -> InvestReceipt {
        InvestReceipt {
            investor,
            input_is_native_token: true,
            gross_amount: net + fee,
            invest_fee: fee,
            net_amount: net,
            token_balances: balances,
            dust: 0,
        }
    }

    #[test]
    fn test_apply_is_pure() {
        let before = PoolAggregates::new(2);
        let after = before
            .apply(&receipt(Pubkey::new_unique(), 90, 10, vec![45, 45]))
            .unwrap();
        assert_eq!(before, PoolAggregates::new(2));
        assert_eq!(after.total_received_currency, 90);
        assert_eq!(after.total_invest_fee, 10);
        assert_eq!(after.pool_tokens_balances, vec![45, 45]);
    }

    #[test]
    fn test_apply_overflow() {
        let mut aggregates = PoolAggregates::new(1);
        aggregates.pool_tokens_balances[0] = u64::MAX;
        let err = aggregates
            .apply(&receipt(Pubkey::new_unique(), 1, 0, vec![1]))
            .unwrap_err();
        assert_eq!(err, PoolError::MathOverflow);
    }

    #[test]
    fn test_record_indexes_per_user() {
        let alice = Pubkey::new_unique();
        let bob = Pubkey::new_unique();
        let mut ledger = InvestmentLedger::new(2);

        assert_eq!(ledger.record(&receipt(alice, 90, 10, vec![40, 50])).unwrap(), 0);
        assert_eq!(ledger.record(&receipt(bob, 9, 1, vec![4, 5])).unwrap(), 0);
        assert_eq!(ledger.record(&receipt(alice, 18, 2, vec![8, 10])).unwrap(), 1);

        assert_eq!(ledger.investment_count(&alice), 2);
        assert_eq!(ledger.investment_count(&bob), 1);
        assert_eq!(ledger.aggregates().total_received_currency, 117);
        assert_eq!(ledger.aggregates().total_invest_fee, 13);
        assert_eq!(ledger.aggregates().pool_tokens_balances, vec![52, 65]);

        let second = ledger.investment_by_user(&alice, 1).unwrap();
        assert!(second.active);
        assert_eq!(second.received_currency, 18);
    }

    #[test]
    fn test_unknown_user_has_empty_history() {
        let ledger = InvestmentLedger::new(1);
        assert!(ledger.investments_by_user(&Pubkey::new_unique()).is_empty());
    }

    #[test]
    fn test_index_out_of_range() {
        let alice = Pubkey::new_unique();
        let mut ledger = InvestmentLedger::new(1);
        ledger.record(&receipt(alice, 10, 0, vec![10])).unwrap();

        assert_eq!(
            ledger.investment_by_user(&alice, 1),
            Err(PoolError::IndexOutOfRange { index: 1, len: 1 })
        );
        assert_eq!(
            ledger.investment_by_user(&Pubkey::new_unique(), 0),
            Err(PoolError::IndexOutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn test_failed_record_leaves_ledger_untouched() {
        let alice = Pubkey::new_unique();
        let mut ledger = InvestmentLedger::new(1);
        ledger.record(&receipt(alice, 10, 0, vec![u64::MAX])).unwrap();

        assert!(ledger.record(&receipt(alice, 10, 0, vec![1])).is_err());
        assert_eq!(ledger.investment_count(&alice), 1);
        assert_eq!(ledger.aggregates().total_received_currency, 10);
    }
}
