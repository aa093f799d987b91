//! Pools wired to the fixed-rate test exchange

use anchor_lang::{
    prelude::*, solana_program::instruction::Instruction, system_program, InstructionData,
};
use anchor_spl::token::spl_token::{self, native_mint};
use invest_test_utils::{
    constants::{INVEST_POOL_PROGRAM_PATH, MOCK_EXCHANGE_PROGRAM_PATH},
    helpers::{create_mint, mint_to},
    TestContext,
};
use mock_exchange::{
    instructions::MarketParams,
    state::{MARKET_SEED, MARKET_VAULT_SEED},
};

use crate::tests::{
    initialize::{pool_params, TestPool},
    token_vault_pda, InstructionBuilder,
};

/// Output liquidity minted into every market
pub const MARKET_LIQUIDITY: u64 = 1_000_000_000_000;

/// Exchange rate of each basket leg, as (numerator, denominator)
pub const LEG_RATES: [(u64, u64); 2] = [(3, 2), (1, 1)];

pub async fn exchange_context() -> TestContext {
    TestContext::new_with_programs(vec![
        (crate::id(), INVEST_POOL_PROGRAM_PATH),
        (mock_exchange::id(), MOCK_EXCHANGE_PROGRAM_PATH),
    ])
    .await
}

pub struct TestMarket {
    pub market: Pubkey,
    pub input_vault: Pubkey,
    pub output_vault: Pubkey,
}

pub fn market_pda(input_mint: &Pubkey, output_mint: &Pubkey, fee_tier: u32) -> Pubkey {
    Pubkey::find_program_address(
        &[
            MARKET_SEED,
            input_mint.as_ref(),
            output_mint.as_ref(),
            &fee_tier.to_le_bytes(),
        ],
        &mock_exchange::id(),
    )
    .0
}

pub fn market_vault_pda(market: &Pubkey, mint: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(
        &[MARKET_VAULT_SEED, market.as_ref(), mint.as_ref()],
        &mock_exchange::id(),
    )
    .0
}

pub fn initialize_market(
    payer: &Pubkey,
    input_mint: &Pubkey,
    output_mint: &Pubkey,
    params: MarketParams,
) -> (Instruction, TestMarket) {
    let market = market_pda(input_mint, output_mint, params.fee_tier);
    let input_vault = market_vault_pda(&market, input_mint);
    let output_vault = market_vault_pda(&market, output_mint);

    let accounts = mock_exchange::accounts::InitializeMarket {
        market,
        input_mint: *input_mint,
        output_mint: *output_mint,
        input_vault,
        output_vault,
        payer: *payer,
        token_program: spl_token::ID,
        system_program: system_program::ID,
        rent: anchor_lang::solana_program::sysvar::rent::ID,
    };
    let instruction = Instruction {
        program_id: mock_exchange::id(),
        accounts: accounts.to_account_metas(None),
        data: mock_exchange::instruction::InitializeMarket { params }.data(),
    };

    (
        instruction,
        TestMarket {
            market,
            input_vault,
            output_vault,
        },
    )
}

/// A pool routing through the test exchange, with one funded market per leg
pub struct ExchangePool {
    pub setup: TestPool,
    pub markets: Vec<TestMarket>,
}

impl ExchangePool {
    /// Remaining accounts of `invest`: per leg the token vault, then the
    /// market accounts
    pub fn leg_metas(&self) -> Vec<AccountMeta> {
        self.setup
            .tokens
            .iter()
            .zip(&self.markets)
            .flat_map(|(mint, market)| {
                vec![
                    AccountMeta::new(token_vault_pda(&self.setup.pool, mint), false),
                    AccountMeta::new_readonly(market.market, false),
                    AccountMeta::new(market.input_vault, false),
                    AccountMeta::new(market.output_vault, false),
                    // Oracle slot; a fixed-rate market quotes itself
                    AccountMeta::new_readonly(market.market, false),
                ]
            })
            .collect()
    }
}

/// Token-entry pool; `extra_inputs[i]` is what leg `i`'s market takes on top
/// of the swap input
pub async fn setup_exchange_token_pool(
    ctx: &mut TestContext,
    extra_inputs: [u64; 2],
) -> ExchangePool {
    let entry_mint = create_mint(ctx, 6).await;
    setup_exchange_pool(ctx, entry_mint, entry_mint, extra_inputs).await
}

/// Native SOL pool; the entry vault and market inputs hold wrapped SOL
pub async fn setup_exchange_native_pool(ctx: &mut TestContext) -> ExchangePool {
    setup_exchange_pool(ctx, Pubkey::default(), native_mint::ID, [0, 0]).await
}

async fn setup_exchange_pool(
    ctx: &mut TestContext,
    entry_asset: Pubkey,
    entry_mint: Pubkey,
    extra_inputs: [u64; 2],
) -> ExchangePool {
    let tokens = vec![create_mint(ctx, 9).await, create_mint(ctx, 6).await];
    let mut params = pool_params(entry_asset, &tokens);
    params.swap_router = mock_exchange::id();
    let fee_address = params.fee_address;
    let min_invest = params.min_invest;
    let fee_tiers = params.fee_tiers.clone();

    let payer = ctx.payer_pubkey();
    let (instruction, pool, entry_vault) =
        InstructionBuilder::initialize_pool(&payer, &entry_mint, params);
    ctx.process_instruction(instruction).await.unwrap();

    let mut markets = Vec::with_capacity(tokens.len());
    for (i, mint) in tokens.iter().enumerate() {
        let (instruction, _) = InstructionBuilder::create_token_vault(&payer, &pool, mint);
        ctx.process_instruction(instruction).await.unwrap();

        let (rate_numerator, rate_denominator) = LEG_RATES[i];
        let (instruction, market) = initialize_market(
            &payer,
            &entry_mint,
            mint,
            MarketParams {
                fee_tier: fee_tiers[i],
                rate_numerator,
                rate_denominator,
                extra_input: extra_inputs[i],
            },
        );
        ctx.process_instruction(instruction).await.unwrap();
        mint_to(ctx, mint, &market.output_vault, MARKET_LIQUIDITY).await;
        markets.push(market);
    }

    ExchangePool {
        setup: TestPool {
            pool,
            entry_vault,
            entry_mint,
            tokens,
            fee_address,
            swap_router: mock_exchange::id(),
            min_invest,
        },
        markets,
    }
}
