use anchor_lang::prelude::*;

#[event]
pub struct PoolInitialized {
    pub pool: Pubkey,
    pub authority: Pubkey,
    pub entry_asset: Pubkey,
    pub pool_name: String,
    pub tokens: Vec<Pubkey>,
    pub distributions: Vec<u8>,
}

#[event]
pub struct TokenVaultCreated {
    pub pool: Pubkey,
    pub mint: Pubkey,
    pub vault: Pubkey,
}

#[event]
pub struct Invested {
    pub pool: Pubkey,
    pub investor: Pubkey,
    pub investment_id: u64,
    pub net_amount: u64,
    pub gross_amount: u64,
    pub invest_fee: u64,
    pub token_balances: Vec<u64>,
    pub input_is_native_token: bool,
    /// Entry currency left in the entry vault after share truncation
    pub dust: u64,
}

#[event]
pub struct PoolPaused {
    pub pool: Pubkey,
    pub authority: Pubkey,
}

#[event]
pub struct PoolUnpaused {
    pub pool: Pubkey,
    pub authority: Pubkey,
}
