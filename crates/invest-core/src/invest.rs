//! # Invest Flow
//!
//! The single mutating operation of a pool, as one function over borrowed
//! state. Checks run in a fixed order:
//!
//! 1. pause gate (`PoolPaused`)
//! 2. minimum amount (`AmountTooSmall`)
//! 3. attached native value (`ValueMismatch`)
//!
//! then the fee is paid, the net amount is distributed, and the next
//! aggregates are computed. Nothing here writes to pool state: the caller
//! commits [`InvestOutcome`] only when this returns `Ok`, which is what makes
//! a failed swap or fee transfer leave the ledger exactly as it was.

use crate::config::PoolConfig;
use crate::distribution::distribute;
use crate::errors::{CoreResult, PoolError};
use crate::fees::{collect_invest_fee, FeeTransfer};
use crate::gate::PauseGate;
use crate::ledger::{InvestReceipt, PoolAggregates};
use crate::swap::SwapRouter;
use log::{debug, warn};
use solana_program::pubkey::Pubkey;

/// How the investor paid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Payment {
    /// Native currency attached to the call
    Native { attached: u64 },
    /// Entry-asset tokens pulled from the investor
    Token,
}

impl Payment {
    pub fn is_native(&self) -> bool {
        matches!(self, Payment::Native { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvestRequest {
    pub investor: Pubkey,
    pub amount: u64,
    pub payment: Payment,
}

impl InvestRequest {
    /// Bare native payment: the attached value is also the amount
    pub fn bare_payment(investor: Pubkey, attached: u64) -> Self {
        Self {
            investor,
            amount: attached,
            payment: Payment::Native { attached },
        }
    }
}

/// Receipt plus the aggregates to commit alongside it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvestOutcome {
    pub receipt: InvestReceipt,
    pub aggregates: PoolAggregates,
}

/// Gate, amount and payment checks, without side effects
pub fn validate_request(
    config: &PoolConfig,
    gate: &PauseGate,
    request: &InvestRequest,
) -> CoreResult<()> {
    gate.ensure_active()?;

    if request.amount < config.min_invest() {
        return Err(PoolError::AmountTooSmall {
            amount: request.amount,
            min_invest: config.min_invest(),
        });
    }

    match (config.is_native_entry(), request.payment) {
        (true, Payment::Native { attached }) if attached != request.amount => {
            Err(PoolError::ValueMismatch {
                expected: request.amount,
                attached,
            })
        }
        (true, Payment::Token) => Err(PoolError::ValueMismatch {
            expected: request.amount,
            attached: 0,
        }),
        // Token-entry pools take no native value
        (false, Payment::Native { attached }) => Err(PoolError::ValueMismatch {
            expected: 0,
            attached,
        }),
        _ => Ok(()),
    }
}

/// Run one investment against external capabilities.
///
/// Returns the receipt and the next aggregates; the caller records them.
pub fn execute_invest<R, T>(
    config: &PoolConfig,
    gate: &PauseGate,
    aggregates: &PoolAggregates,
    request: &InvestRequest,
    router: &mut R,
    treasury: &mut T,
) -> CoreResult<InvestOutcome>
where
    R: SwapRouter + ?Sized,
    T: FeeTransfer + ?Sized,
{
    if let Err(err) = validate_request(config, gate, request) {
        warn!("invest by {} rejected: {}", request.investor, err);
        return Err(err);
    }

    let fees = collect_invest_fee(
        request.amount,
        config.invest_fee_percent(),
        &config.entry_asset(),
        &config.fee_address(),
        treasury,
    )?;
    debug!(
        "invest fee {} of {} paid to {}",
        fees.fee_amount,
        request.amount,
        config.fee_address()
    );

    let distribution = distribute(config, fees.net_amount, router)?;

    let receipt = InvestReceipt::new(request, &fees, distribution);
    let aggregates = aggregates.apply(&receipt)?;

    Ok(InvestOutcome {
        receipt,
        aggregates,
    })
}
