use anchor_lang::prelude::*;

use crate::error::ExchangeError;

pub const MARKET_SEED: &[u8] = b"market";
pub const MARKET_VAULT_SEED: &[u8] = b"market_vault";

#[account]
#[derive(InitSpace)]
pub struct Market {
    pub input_mint: Pubkey,
    pub output_mint: Pubkey,
    pub input_vault: Pubkey,
    pub output_vault: Pubkey,
    pub fee_tier: u32,
    /// Output per unit of input is `rate_numerator / rate_denominator`
    pub rate_numerator: u64,
    pub rate_denominator: u64,
    /// Taken from the source on top of `amount_in`
    pub extra_input: u64,
    pub bump: u8,
}

impl Market {
    pub fn quote(&self, amount_in: u64) -> Result<u64> {
        let amount_out = (amount_in as u128)
            .checked_mul(self.rate_numerator as u128)
            .and_then(|scaled| scaled.checked_div(self.rate_denominator as u128))
            .ok_or(ExchangeError::MathOverflow)?;
        u64::try_from(amount_out).map_err(|_| error!(ExchangeError::MathOverflow))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn market(rate_numerator: u64, rate_denominator: u64) -> Market {
        Market {
            input_mint: Pubkey::new_unique(),
            output_mint: Pubkey::new_unique(),
            input_vault: Pubkey::new_unique(),
            output_vault: Pubkey::new_unique(),
            fee_tier: 3000,
            rate_numerator,
            rate_denominator,
            extra_input: 0,
            bump: 255,
        }
    }

    #[test]
    fn test_quote_truncates() {
        assert_eq!(market(3, 2).quote(540_001).unwrap(), 810_001);
        assert_eq!(market(1, 1).quote(360_001).unwrap(), 360_001);
        assert_eq!(market(1, 3).quote(2).unwrap(), 0);
    }

    #[test]
    fn test_quote_overflow() {
        assert!(market(u64::MAX, 1).quote(2).is_err());
        assert!(market(1, 0).quote(1).is_err());
    }
}
