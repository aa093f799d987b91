use anchor_lang::{prelude::*, solana_program::program_pack::Pack};
use anchor_spl::token::spl_token;
use solana_sdk::{signature::Keypair, signer::Signer, system_instruction, transaction::Transaction};

use crate::TestContext;

/// Create an SPL mint whose mint authority is the payer
pub async fn create_mint(ctx: &mut TestContext, decimals: u8) -> Pubkey {
    let mint = Keypair::new();
    let rent = ctx.banks_client.get_rent().await.unwrap();
    let payer = ctx.payer.pubkey();

    let instructions = vec![
        system_instruction::create_account(
            &payer,
            &mint.pubkey(),
            rent.minimum_balance(spl_token::state::Mint::LEN),
            spl_token::state::Mint::LEN as u64,
            &spl_token::ID,
        ),
        spl_token::instruction::initialize_mint(&spl_token::ID, &mint.pubkey(), &payer, None, decimals)
            .unwrap(),
    ];
    let transaction = Transaction::new_signed_with_payer(
        &instructions,
        Some(&payer),
        &[&ctx.payer, &mint],
        ctx.recent_blockhash,
    );
    ctx.banks_client.process_transaction(transaction).await.unwrap();
    mint.pubkey()
}

/// Create a token account of `mint` owned by `owner`
pub async fn create_token_account(ctx: &mut TestContext, mint: &Pubkey, owner: &Pubkey) -> Pubkey {
    let account = Keypair::new();
    let rent = ctx.banks_client.get_rent().await.unwrap();
    let payer = ctx.payer.pubkey();

    let instructions = vec![
        system_instruction::create_account(
            &payer,
            &account.pubkey(),
            rent.minimum_balance(spl_token::state::Account::LEN),
            spl_token::state::Account::LEN as u64,
            &spl_token::ID,
        ),
        spl_token::instruction::initialize_account3(&spl_token::ID, &account.pubkey(), mint, owner)
            .unwrap(),
    ];
    let transaction = Transaction::new_signed_with_payer(
        &instructions,
        Some(&payer),
        &[&ctx.payer, &account],
        ctx.recent_blockhash,
    );
    ctx.banks_client.process_transaction(transaction).await.unwrap();
    account.pubkey()
}

/// Mint `amount` into `account`; the payer must be the mint authority
pub async fn mint_to(ctx: &mut TestContext, mint: &Pubkey, account: &Pubkey, amount: u64) {
    let payer = ctx.payer.pubkey();
    let instruction =
        spl_token::instruction::mint_to(&spl_token::ID, mint, account, &payer, &[], amount)
            .unwrap();
    ctx.process_instruction(instruction).await.unwrap();
}

/// Token balance of `account`, 0 if it does not exist or is not a token account
pub async fn get_token_balance(ctx: &mut TestContext, account: &Pubkey) -> u64 {
    match ctx.get_account(*account).await {
        Some(account) => spl_token::state::Account::unpack(&account.data)
            .map(|token_account| token_account.amount)
            .unwrap_or_default(),
        None => 0,
    }
}
