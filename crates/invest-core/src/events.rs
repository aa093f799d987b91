//! Events published by the in-memory pool for external consumers

use crate::ledger::InvestReceipt;
use solana_program::pubkey::Pubkey;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvestedEvent {
    pub investor: Pubkey,
    pub investment_id: u64,
    pub net_amount: u64,
    pub gross_amount: u64,
    pub invest_fee: u64,
    pub token_balances: Vec<u64>,
    pub input_is_native_token: bool,
}

impl InvestedEvent {
    pub fn from_receipt(receipt: &InvestReceipt, investment_id: u64) -> Self {
        Self {
            investor: receipt.investor,
            investment_id,
            net_amount: receipt.net_amount,
            gross_amount: receipt.gross_amount,
            invest_fee: receipt.invest_fee,
            token_balances: receipt.token_balances.clone(),
            input_is_native_token: receipt.input_is_native_token,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoolEvent {
    Invested(InvestedEvent),
    Paused { controller: Pubkey },
    Unpaused { controller: Pubkey },
}
