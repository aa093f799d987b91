//! # Swap Router
//!
//! Capability interface to the external exchange. The engine never prices a
//! swap itself: it hands over an input amount and records whatever comes back.
//! On-chain the router is a CPI adapter; [`FixedRateRouter`] is the
//! deterministic stand-in used by simulations and tests.

use crate::errors::SwapError;
use solana_program::pubkey::Pubkey;
use std::collections::{HashMap, HashSet};

/// One conversion of entry currency into a target token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapRequest {
    /// Position of the target token in the basket
    pub leg: usize,
    pub token_in: Pubkey,
    pub token_out: Pubkey,
    pub amount_in: u64,
    pub fee_tier: u32,
}

pub trait SwapRouter {
    /// Execute the swap and return the amount of `token_out` received
    fn swap(&mut self, request: &SwapRequest) -> Result<u64, SwapError>;
}

/// Output rate as a fraction of the input amount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rate {
    pub numerator: u64,
    pub denominator: u64,
}

impl Rate {
    pub const ONE: Rate = Rate {
        numerator: 1,
        denominator: 1,
    };

    pub fn new(numerator: u64, denominator: u64) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    fn apply(&self, amount: u64) -> Option<u64> {
        if self.denominator == 0 {
            return None;
        }
        let out = (amount as u128).checked_mul(self.numerator as u128)? / self.denominator as u128;
        u64::try_from(out).ok()
    }
}

/// Deterministic exchange: converts at a fixed per-token rate.
///
/// Tokens without an explicit rate convert 1:1. Every executed request is
/// recorded in order.
#[derive(Debug, Clone, Default)]
pub struct FixedRateRouter {
    rates: HashMap<Pubkey, Rate>,
    failing: HashSet<Pubkey>,
    executed: Vec<SwapRequest>,
}

impl FixedRateRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rate(mut self, token_out: Pubkey, rate: Rate) -> Self {
        self.rates.insert(token_out, rate);
        self
    }

    /// Make every swap into `token_out` revert
    pub fn fail_on(&mut self, token_out: Pubkey) {
        self.failing.insert(token_out);
    }

    pub fn executed(&self) -> &[SwapRequest] {
        &self.executed
    }

    /// Quote without executing
    pub fn quote(&self, token_out: &Pubkey, amount_in: u64) -> Option<u64> {
        self.rates.get(token_out).unwrap_or(&Rate::ONE).apply(amount_in)
    }
}

impl SwapRouter for FixedRateRouter {
    fn swap(&mut self, request: &SwapRequest) -> Result<u64, SwapError> {
        if self.failing.contains(&request.token_out) {
            return Err(SwapError::Reverted {
                token_out: request.token_out,
                reason: "pool rejected swap".to_string(),
            });
        }
        let amount_out =
            self.quote(&request.token_out, request.amount_in)
                .ok_or(SwapError::NoRoute {
                    token_out: request.token_out,
                    fee_tier: request.fee_tier,
                })?;
        self.executed.push(*request);
        Ok(amount_out)
    }
}
