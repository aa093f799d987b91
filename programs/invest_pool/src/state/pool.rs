use anchor_lang::prelude::*;
use invest_core::{PauseGate, PoolAggregates, PoolConfig, PoolParams};

use crate::{constants::POOL_SEED, error::InvestPoolError};

// Pool account: immutable configuration, pause flag and aggregates.
// Length bounds match MAX_POOL_NAME_LEN and MAX_POOL_TOKENS.
#[account]
#[derive(InitSpace)]
pub struct Pool {
    pub authority: Pubkey,
    pub entry_asset: Pubkey,
    pub fee_address: Pubkey,
    pub invest_fee_percent: u16,
    pub success_fee_percent: u16,
    pub swap_router: Pubkey,
    pub wrap_of_native_token: Pubkey,
    pub min_invest: u64,
    #[max_len(32)]
    pub pool_name: String,
    #[max_len(8)]
    pub fee_tiers: Vec<u32>,
    #[max_len(8)]
    pub tokens: Vec<Pubkey>,
    #[max_len(8)]
    pub distributions: Vec<u8>,

    pub paused: bool,

    pub total_received_currency: u64,
    pub total_invest_fee: u64,
    #[max_len(8)]
    pub pool_tokens_balances: Vec<u64>,

    pub bump: u8,
    pub entry_vault_bump: u8,
}

impl Pool {
    /// Store a validated configuration and open the pool
    pub fn init(
        &mut self,
        authority: Pubkey,
        config: &PoolConfig,
        bump: u8,
        entry_vault_bump: u8,
    ) {
        let params = config.params();
        self.authority = authority;
        self.entry_asset = params.entry_asset;
        self.fee_address = params.fee_address;
        self.invest_fee_percent = params.invest_fee_percent;
        self.success_fee_percent = params.success_fee_percent;
        self.swap_router = params.swap_router;
        self.wrap_of_native_token = params.wrap_of_native_token;
        self.min_invest = params.min_invest;
        self.pool_name = params.pool_name.clone();
        self.fee_tiers = params.fee_tiers.clone();
        self.tokens = params.tokens.clone();
        self.distributions = params.distributions.clone();
        self.paused = false;
        self.set_aggregates(PoolAggregates::new(config.token_count()));
        self.bump = bump;
        self.entry_vault_bump = entry_vault_bump;
    }

    pub fn params(&self) -> PoolParams {
        PoolParams {
            entry_asset: self.entry_asset,
            fee_address: self.fee_address,
            invest_fee_percent: self.invest_fee_percent,
            success_fee_percent: self.success_fee_percent,
            swap_router: self.swap_router,
            wrap_of_native_token: self.wrap_of_native_token,
            min_invest: self.min_invest,
            pool_name: self.pool_name.clone(),
            fee_tiers: self.fee_tiers.clone(),
            tokens: self.tokens.clone(),
            distributions: self.distributions.clone(),
        }
    }

    /// Rebuild the validated configuration
    pub fn config(&self) -> Result<PoolConfig> {
        PoolConfig::new(self.params()).map_err(|e| InvestPoolError::from(e).into())
    }

    pub fn gate(&self) -> PauseGate {
        PauseGate::from_parts(self.authority, self.paused)
    }

    pub fn aggregates(&self) -> PoolAggregates {
        PoolAggregates {
            total_received_currency: self.total_received_currency,
            total_invest_fee: self.total_invest_fee,
            pool_tokens_balances: self.pool_tokens_balances.clone(),
        }
    }

    pub fn set_aggregates(&mut self, aggregates: PoolAggregates) {
        self.total_received_currency = aggregates.total_received_currency;
        self.total_invest_fee = aggregates.total_invest_fee;
        self.pool_tokens_balances = aggregates.pool_tokens_balances;
    }

    pub fn is_native_entry(&self) -> bool {
        self.entry_asset == Pubkey::default()
    }

    /// Mint held by the entry vault
    pub fn entry_mint(&self) -> Pubkey {
        if self.is_native_entry() {
            self.wrap_of_native_token
        } else {
            self.entry_asset
        }
    }

    pub fn signer(&self) -> PoolSigner {
        PoolSigner {
            authority: self.authority,
            pool_name: self.pool_name.clone(),
            bump: self.bump,
        }
    }
}

/// Owned copy of the pool PDA seeds, for CPIs made while the pool account is
/// borrowed
#[derive(Clone, Debug)]
pub struct PoolSigner {
    pub authority: Pubkey,
    pub pool_name: String,
    pub bump: u8,
}

impl PoolSigner {
    pub fn seeds(&self) -> [&[u8]; 4] {
        [
            POOL_SEED,
            self.authority.as_ref(),
            self.pool_name.as_bytes(),
            std::slice::from_ref(&self.bump),
        ]
    }
}

/// Read-only snapshot returned by `pool_data`
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct PoolData {
    pub authority: Pubkey,
    pub entry_asset: Pubkey,
    pub fee_address: Pubkey,
    pub invest_fee_percent: u16,
    pub success_fee_percent: u16,
    pub swap_router: Pubkey,
    pub wrap_of_native_token: Pubkey,
    pub min_invest: u64,
    pub pool_name: String,
    pub fee_tiers: Vec<u32>,
    pub tokens: Vec<Pubkey>,
    pub distributions: Vec<u8>,
    pub paused: bool,
    pub total_received_currency: u64,
    pub total_invest_fee: u64,
    pub pool_tokens_balances: Vec<u64>,
}

impl From<&Pool> for PoolData {
    fn from(pool: &Pool) -> Self {
        Self {
            authority: pool.authority,
            entry_asset: pool.entry_asset,
            fee_address: pool.fee_address,
            invest_fee_percent: pool.invest_fee_percent,
            success_fee_percent: pool.success_fee_percent,
            swap_router: pool.swap_router,
            wrap_of_native_token: pool.wrap_of_native_token,
            min_invest: pool.min_invest,
            pool_name: pool.pool_name.clone(),
            fee_tiers: pool.fee_tiers.clone(),
            tokens: pool.tokens.clone(),
            distributions: pool.distributions.clone(),
            paused: pool.paused,
            total_received_currency: pool.total_received_currency,
            total_invest_fee: pool.total_invest_fee,
            pool_tokens_balances: pool.pool_tokens_balances.clone(),
        }
    }
}
