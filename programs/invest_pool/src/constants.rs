/// PDA seeds
pub const POOL_SEED: &[u8] = b"pool";
pub const ENTRY_VAULT_SEED: &[u8] = b"entry_vault";
pub const TOKEN_VAULT_SEED: &[u8] = b"token_vault";
pub const INVESTOR_SEED: &[u8] = b"investor";
pub const INVESTMENT_SEED: &[u8] = b"investment";
pub const INBOX_SEED: &[u8] = b"inbox";

/// Router-specific accounts following each leg's token vault in the
/// remaining accounts of `invest` (market, market input vault, market output
/// vault, market oracle)
pub const ROUTER_ACCOUNTS_PER_LEG: usize = 4;

/// Remaining accounts consumed per basket leg
pub const ACCOUNTS_PER_LEG: usize = 1 + ROUTER_ACCOUNTS_PER_LEG;

/// sha256("global:swap_exact_input")[..8]
pub const SWAP_EXACT_INPUT_DISCRIMINATOR: [u8; 8] = [194, 203, 142, 150, 137, 110, 81, 94];
