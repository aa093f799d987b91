use anchor_lang::prelude::*;
use invest_core::Investment;

/// Per-(pool, investor) counter; the next investment index
#[account]
#[derive(InitSpace)]
pub struct InvestorAccount {
    pub pool: Pubkey,
    pub investor: Pubkey,
    pub investment_count: u64,
    pub bump: u8,
}

/// One append-only investment record
#[account]
#[derive(InitSpace)]
pub struct InvestmentAccount {
    pub pool: Pubkey,
    pub investor: Pubkey,
    pub index: u64,
    pub active: bool,
    pub input_is_native_token: bool,
    pub received_currency: u64,
    #[max_len(8)]
    pub token_balances: Vec<u64>,
    pub bump: u8,
}

impl InvestmentAccount {
    pub fn record(&mut self, investment: Investment) {
        self.active = investment.active;
        self.input_is_native_token = investment.input_is_native_token;
        self.received_currency = investment.received_currency;
        self.token_balances = investment.token_balances;
    }
}

/// Investment as returned by the view instructions
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct InvestmentData {
    pub index: u64,
    pub active: bool,
    pub input_is_native_token: bool,
    pub received_currency: u64,
    pub token_balances: Vec<u64>,
}

impl From<&InvestmentAccount> for InvestmentData {
    fn from(account: &InvestmentAccount) -> Self {
        Self {
            index: account.index,
            active: account.active,
            input_is_native_token: account.input_is_native_token,
            received_currency: account.received_currency,
            token_balances: account.token_balances.clone(),
        }
    }
}
