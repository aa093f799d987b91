//! # In-Memory Pool
//!
//! Owns configuration, pause gate and ledger, and wires them to a router and
//! a fee treasury. An invest runs against copies of the router and treasury
//! that replace the live ones only on success, so a failed swap also undoes
//! the fee payment. Used by simulations and tests; the on-chain program keeps
//! the same pieces in accounts and runs the steps of [`execute_invest`] around
//! its own token custody.

use crate::config::{PoolConfig, PoolParams};
use crate::errors::CoreResult;
use crate::events::{InvestedEvent, PoolEvent};
use crate::fees::FeeTransfer;
use crate::gate::PauseGate;
use crate::invest::{execute_invest, InvestRequest, Payment};
use crate::ledger::{Investment, InvestmentLedger, PoolAggregates};
use crate::swap::SwapRouter;
use log::info;
use solana_program::pubkey::Pubkey;

/// Read-only view of the whole pool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolData {
    pub params: PoolParams,
    pub paused: bool,
    pub aggregates: PoolAggregates,
}

pub struct InvestPool<R, T> {
    config: PoolConfig,
    gate: PauseGate,
    ledger: InvestmentLedger,
    router: R,
    treasury: T,
    events: Vec<PoolEvent>,
}

impl<R: SwapRouter + Clone, T: FeeTransfer + Clone> InvestPool<R, T> {
    /// Validate `params` and open an Active pool controlled by `controller`
    pub fn new(
        params: PoolParams,
        controller: Pubkey,
        router: R,
        treasury: T,
    ) -> CoreResult<Self> {
        let config = PoolConfig::new(params)?;
        info!(
            "pool '{}' created with {} tokens",
            config.pool_name(),
            config.token_count()
        );
        Ok(Self {
            ledger: InvestmentLedger::new(config.token_count()),
            config,
            gate: PauseGate::new(controller),
            router,
            treasury,
            events: Vec::new(),
        })
    }

    /// Invest `amount`; returns the investor's 0-based investment index
    pub fn invest(&mut self, investor: Pubkey, amount: u64, payment: Payment) -> CoreResult<u64> {
        self.run(InvestRequest {
            investor,
            amount,
            payment,
        })
    }

    /// Bare native payment: the attached value is invested as-is
    pub fn receive(&mut self, investor: Pubkey, attached: u64) -> CoreResult<u64> {
        self.run(InvestRequest::bare_payment(investor, attached))
    }

    fn run(&mut self, request: InvestRequest) -> CoreResult<u64> {
        // Staged copies; swapped in only once the investment is recorded
        let mut router = self.router.clone();
        let mut treasury = self.treasury.clone();
        let outcome = execute_invest(
            &self.config,
            &self.gate,
            self.ledger.aggregates(),
            &request,
            &mut router,
            &mut treasury,
        )?;

        let investment_id = self.ledger.record(&outcome.receipt)?;
        self.router = router;
        self.treasury = treasury;
        info!(
            "{} invested {} (net {}), investment #{}",
            request.investor, outcome.receipt.gross_amount, outcome.receipt.net_amount, investment_id
        );
        self.events.push(PoolEvent::Invested(InvestedEvent::from_receipt(
            &outcome.receipt,
            investment_id,
        )));
        Ok(investment_id)
    }

    pub fn pause(&mut self, caller: &Pubkey) -> CoreResult<()> {
        self.gate.pause(caller)?;
        info!("pool '{}' paused", self.config.pool_name());
        self.events.push(PoolEvent::Paused {
            controller: *caller,
        });
        Ok(())
    }

    pub fn unpause(&mut self, caller: &Pubkey) -> CoreResult<()> {
        self.gate.unpause(caller)?;
        info!("pool '{}' unpaused", self.config.pool_name());
        self.events.push(PoolEvent::Unpaused {
            controller: *caller,
        });
        Ok(())
    }

    pub fn pool_data(&self) -> PoolData {
        PoolData {
            params: self.config.params().clone(),
            paused: self.gate.is_paused(),
            aggregates: self.ledger.aggregates().clone(),
        }
    }

    pub fn investments_by_user(&self, user: &Pubkey) -> &[Investment] {
        self.ledger.investments_by_user(user)
    }

    pub fn investment_by_user(&self, user: &Pubkey, index: u64) -> CoreResult<&Investment> {
        self.ledger.investment_by_user(user, index)
    }

    pub fn is_paused(&self) -> bool {
        self.gate.is_paused()
    }

    pub fn config(&self) -> &PoolConfig {
        &self.config
    }

    pub fn router(&self) -> &R {
        &self.router
    }

    pub fn treasury(&self) -> &T {
        &self.treasury
    }

    /// Take all events published since the last drain
    pub fn drain_events(&mut self) -> Vec<PoolEvent> {
        std::mem::take(&mut self.events)
    }
}
