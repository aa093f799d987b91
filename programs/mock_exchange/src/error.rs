use anchor_lang::prelude::*;

#[error_code]
pub enum ExchangeError {
    #[msg("Rate denominator must be positive")]
    InvalidRate,
    #[msg("Fee tier does not match the market")]
    FeeTierMismatch,
    #[msg("Token account mint does not match the market")]
    MintMismatch,
    #[msg("Output below the requested minimum")]
    SlippageExceeded,
    #[msg("Math overflow")]
    MathOverflow,
}
