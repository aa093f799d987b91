//! # Pool Configuration
//!
//! Construction parameters for a basket pool and their one-time validation.
//! A [`PoolConfig`] can only be obtained through [`PoolConfig::new`], so holding
//! one means every invariant below has been checked:
//!
//! - invest and success fees are at most [`MAX_FEE_PERCENT`]
//! - the minimum investment is non-zero
//! - tokens, fee tiers and distributions have equal, non-zero length
//! - distribution weights sum to [`DISTRIBUTION_TOTAL`]
//! - a native entry asset comes with a wrapped-native address
//!
//! Parameter files are TOML with pubkeys written as base58 strings (feature
//! `toml-config`, on by default).

use crate::constants::{DISTRIBUTION_TOTAL, MAX_FEE_PERCENT, MAX_POOL_NAME_LEN, MAX_POOL_TOKENS};
use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use solana_program::pubkey::Pubkey;

/// Raw construction parameters, in deployment order
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PoolParams {
    /// Entry currency mint; `Pubkey::default()` means native SOL
    #[serde(with = "pubkey_serde", default)]
    pub entry_asset: Pubkey,

    /// Recipient of invest and success fees
    #[serde(with = "pubkey_serde")]
    pub fee_address: Pubkey,

    /// Invest fee in percentage points
    pub invest_fee_percent: u16,

    /// Success fee in percentage points
    pub success_fee_percent: u16,

    /// Program id of the external exchange
    #[serde(with = "pubkey_serde")]
    pub swap_router: Pubkey,

    /// Mint representing native currency inside swaps
    #[serde(with = "pubkey_serde", default)]
    pub wrap_of_native_token: Pubkey,

    /// Smallest accepted gross investment
    pub min_invest: u64,

    /// Display name, also used as a PDA seed on-chain
    pub pool_name: String,

    /// Swap fee tier per target token
    pub fee_tiers: Vec<u32>,

    /// Target token mints
    #[serde(with = "pubkey_vec_serde")]
    pub tokens: Vec<Pubkey>,

    /// Weight per target token, in percent
    pub distributions: Vec<u8>,
}

#[cfg(feature = "toml-config")]
impl PoolParams {
    /// Parse parameters from a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Render parameters as a TOML document
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

/// Validated, immutable pool configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolConfig {
    params: PoolParams,
}

impl PoolConfig {
    /// Validate construction parameters
    pub fn new(params: PoolParams) -> Result<Self, ConfigError> {
        for fee in [params.invest_fee_percent, params.success_fee_percent] {
            if fee > MAX_FEE_PERCENT {
                return Err(ConfigError::FeeTooHigh {
                    fee,
                    max: MAX_FEE_PERCENT,
                });
            }
        }

        if params.min_invest == 0 {
            return Err(ConfigError::ZeroMinInvest);
        }

        let tokens = params.tokens.len();
        if tokens != params.fee_tiers.len() || tokens != params.distributions.len() {
            return Err(ConfigError::LengthMismatch {
                tokens,
                fee_tiers: params.fee_tiers.len(),
                distributions: params.distributions.len(),
            });
        }
        if tokens == 0 {
            return Err(ConfigError::EmptyTokenList);
        }
        if tokens > MAX_POOL_TOKENS {
            return Err(ConfigError::TooManyTokens(tokens, MAX_POOL_TOKENS));
        }

        let weight_sum: u32 = params.distributions.iter().map(|w| u32::from(*w)).sum();
        if weight_sum != DISTRIBUTION_TOTAL {
            return Err(ConfigError::DistributionMismatch(weight_sum));
        }

        if params.entry_asset == Pubkey::default() && params.wrap_of_native_token == Pubkey::default()
        {
            return Err(ConfigError::NativeWrapMismatch);
        }

        if params.pool_name.len() > MAX_POOL_NAME_LEN {
            return Err(ConfigError::PoolNameTooLong(
                params.pool_name.len(),
                MAX_POOL_NAME_LEN,
            ));
        }

        Ok(Self { params })
    }

    /// Validate and additionally require the canonical wrapped-native mint
    /// for native-entry pools
    pub fn with_canonical_wrap(
        params: PoolParams,
        canonical_wrapped_native: &Pubkey,
    ) -> Result<Self, ConfigError> {
        let config = Self::new(params)?;
        if config.is_native_entry() && config.params.wrap_of_native_token != *canonical_wrapped_native
        {
            return Err(ConfigError::NativeWrapMismatch);
        }
        Ok(config)
    }

    pub fn params(&self) -> &PoolParams {
        &self.params
    }

    pub fn entry_asset(&self) -> Pubkey {
        self.params.entry_asset
    }

    pub fn is_native_entry(&self) -> bool {
        self.params.entry_asset == Pubkey::default()
    }

    /// Asset handed to the exchange as swap input
    pub fn swap_input_asset(&self) -> Pubkey {
        if self.is_native_entry() {
            self.params.wrap_of_native_token
        } else {
            self.params.entry_asset
        }
    }

    pub fn fee_address(&self) -> Pubkey {
        self.params.fee_address
    }

    pub fn invest_fee_percent(&self) -> u16 {
        self.params.invest_fee_percent
    }

    pub fn success_fee_percent(&self) -> u16 {
        self.params.success_fee_percent
    }

    pub fn swap_router(&self) -> Pubkey {
        self.params.swap_router
    }

    pub fn wrap_of_native_token(&self) -> Pubkey {
        self.params.wrap_of_native_token
    }

    pub fn min_invest(&self) -> u64 {
        self.params.min_invest
    }

    pub fn pool_name(&self) -> &str {
        &self.params.pool_name
    }

    pub fn tokens(&self) -> &[Pubkey] {
        &self.params.tokens
    }

    pub fn fee_tiers(&self) -> &[u32] {
        &self.params.fee_tiers
    }

    pub fn distributions(&self) -> &[u8] {
        &self.params.distributions
    }

    pub fn token_count(&self) -> usize {
        self.params.tokens.len()
    }
}

/// Base58 string (de)serialization for a single pubkey
pub mod pubkey_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use solana_program::pubkey::Pubkey;
    use std::str::FromStr;

    pub fn serialize<S>(pubkey: &Pubkey, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&pubkey.to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Pubkey, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Pubkey::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// Base58 string (de)serialization for a list of pubkeys
pub mod pubkey_vec_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use solana_program::pubkey::Pubkey;
    use std::str::FromStr;

    pub fn serialize<S>(pubkeys: &[Pubkey], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(pubkeys.iter().map(|p| p.to_string()))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<Pubkey>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Vec::<String>::deserialize(deserializer)?;
        raw.iter()
            .map(|s| Pubkey::from_str(s).map_err(serde::de::Error::custom))
            .collect()
    }
}
