//! # Distribution Engine
//!
//! Splits a net investment across the basket by weight and swaps each share
//! into its target token. Shares are `net * weight / 100`, rounded down; the
//! remainder (dust) stays in entry currency and is reported, not swapped.

use crate::config::PoolConfig;
use crate::constants::PERCENT_DENOMINATOR;
use crate::errors::{CoreResult, PoolError};
use crate::swap::{SwapRequest, SwapRouter};
use log::debug;

/// Result of distributing one net amount
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Distribution {
    /// Amount of each target token acquired, in basket order
    pub token_balances: Vec<u64>,
    /// Entry currency actually sent to the exchange
    pub distributed: u64,
    /// Entry currency left over after truncation
    pub dust: u64,
}

/// Share of `net_amount` for a single weight
pub fn share_of(net_amount: u64, weight: u8) -> CoreResult<u64> {
    let share = (net_amount as u128)
        .checked_mul(weight as u128)
        .ok_or(PoolError::MathOverflow)?
        / PERCENT_DENOMINATOR;
    u64::try_from(share).map_err(|_| PoolError::MathOverflow)
}

/// Swap requests for every basket leg, zero shares included
pub fn plan(config: &PoolConfig, net_amount: u64) -> CoreResult<Vec<SwapRequest>> {
    let token_in = config.swap_input_asset();
    config
        .tokens()
        .iter()
        .zip(config.fee_tiers())
        .zip(config.distributions())
        .enumerate()
        .map(|(leg, ((token_out, fee_tier), weight))| {
            Ok(SwapRequest {
                leg,
                token_in,
                token_out: *token_out,
                amount_in: share_of(net_amount, *weight)?,
                fee_tier: *fee_tier,
            })
        })
        .collect()
}

/// Swap every share through `router`.
///
/// The first failing leg aborts the whole distribution; the caller must not
/// record anything for this investment. Zero shares are not sent to the
/// exchange and yield a zero balance.
pub fn distribute<R: SwapRouter + ?Sized>(
    config: &PoolConfig,
    net_amount: u64,
    router: &mut R,
) -> CoreResult<Distribution> {
    let legs = plan(config, net_amount)?;
    let mut token_balances = Vec::with_capacity(legs.len());
    let mut distributed: u64 = 0;

    for request in &legs {
        if request.amount_in == 0 {
            token_balances.push(0);
            continue;
        }
        let amount_out = router.swap(request)?;
        debug!(
            "leg {}: {} -> {} of {} (tier {})",
            request.leg, request.amount_in, amount_out, request.token_out, request.fee_tier
        );
        token_balances.push(amount_out);
        distributed = distributed
            .checked_add(request.amount_in)
            .ok_or(PoolError::MathOverflow)?;
    }

    let dust = net_amount
        .checked_sub(distributed)
        .ok_or(PoolError::MathOverflow)?;

    Ok(Distribution {
        token_balances,
        distributed,
        dust,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PoolParams;
    use crate::errors::SwapError;
    use crate::swap::{FixedRateRouter, Rate};
    use solana_program::pubkey::Pubkey;

    fn config(distributions: Vec<u8>) -> PoolConfig {
        let n = distributions.len();
        PoolConfig::new(PoolParams {
            entry_asset: Pubkey::new_unique(),
            fee_address: Pubkey::new_unique(),
            invest_fee_percent: 10,
            success_fee_percent: 10,
            swap_router: Pubkey::new_unique(),
            wrap_of_native_token: Pubkey::new_unique(),
            min_invest: 1,
            pool_name: "test".to_string(),
            fee_tiers: vec![3000; n],
            tokens: (0..n).map(|_| Pubkey::new_unique()).collect(),
            distributions,
        })
        .unwrap()
    }

    #[test]
    fn test_share_of() {
        assert_eq!(share_of(900, 50).unwrap(), 450);
        assert_eq!(share_of(900, 25).unwrap(), 225);
        assert_eq!(share_of(7, 33).unwrap(), 2);
        assert_eq!(share_of(u64::MAX, 100).unwrap(), u64::MAX);
    }

    #[test]
    fn test_plan_follows_basket_order() {
        let config = config(vec![50, 25, 25]);
        let legs = plan(&config, 900).unwrap();
        assert_eq!(legs.len(), 3);
        assert_eq!(
            legs.iter().map(|l| l.amount_in).collect::<Vec<_>>(),
            vec![450, 225, 225]
        );
        for (i, leg) in legs.iter().enumerate() {
            assert_eq!(leg.leg, i);
            assert_eq!(leg.token_out, config.tokens()[i]);
            assert_eq!(leg.token_in, config.entry_asset());
        }
    }

    #[test]
    fn test_distribute_reports_dust() {
        let config = config(vec![34, 33, 33]);
        let mut router = FixedRateRouter::new();
        let result = distribute(&config, 10, &mut router).unwrap();

        // 3 + 3 + 3 swapped, 1 left behind
        assert_eq!(result.token_balances, vec![3, 3, 3]);
        assert_eq!(result.distributed, 9);
        assert_eq!(result.dust, 1);
    }

    #[test]
    fn test_distribute_applies_router_rates() {
        let config = config(vec![50, 50]);
        let tokens = config.tokens().to_vec();
        let mut router = FixedRateRouter::new()
            .with_rate(tokens[0], Rate::new(2, 1))
            .with_rate(tokens[1], Rate::new(1, 4));
        let result = distribute(&config, 1_000, &mut router).unwrap();
        assert_eq!(result.token_balances, vec![1_000, 125]);
        assert_eq!(result.dust, 0);
    }

    #[test]
    fn test_zero_weight_leg_is_not_swapped() {
        let config = config(vec![100, 0]);
        let mut router = FixedRateRouter::new();
        let result = distribute(&config, 500, &mut router).unwrap();
        assert_eq!(result.token_balances, vec![500, 0]);
        assert_eq!(router.executed().len(), 1);
    }

    #[test]
    fn test_failing_leg_aborts() {
        let config = config(vec![50, 25, 25]);
        let mut router = FixedRateRouter::new();
        router.fail_on(config.tokens()[2]);
        let err = distribute(&config, 900, &mut router).unwrap_err();
        assert!(matches!(
            err,
            PoolError::SwapFailure(SwapError::Reverted { .. })
        ));
    }
}
