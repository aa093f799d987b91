pub const POOL_PDA_SEED: &[u8] = b"pool";
pub const ENTRY_VAULT_PDA_SEED: &[u8] = b"entry_vault";
pub const TOKEN_VAULT_PDA_SEED: &[u8] = b"token_vault";
pub const INVESTOR_PDA_SEED: &[u8] = b"investor";
pub const INVESTMENT_PDA_SEED: &[u8] = b"investment";
pub const INBOX_PDA_SEED: &[u8] = b"inbox";

pub const INVEST_POOL_PROGRAM_PATH: &str = "../../target/deploy/invest_pool.so";
pub const MOCK_EXCHANGE_PROGRAM_PATH: &str = "../../target/deploy/mock_exchange.so";

pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;
