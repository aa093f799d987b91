use anchor_lang::{prelude::*, solana_program::program_pack::Pack};
use anchor_spl::token::spl_token;
use solana_program_test::*;
use solana_sdk::{
    hash::Hash, instruction::Instruction, signature::Keypair, signer::Signer,
    system_instruction, transaction::Transaction,
};
use std::fs;

pub mod constants;
pub mod helpers;

pub struct TestContext {
    pub banks_client: BanksClient,
    pub payer: Keypair,
    pub recent_blockhash: Hash,
}

impl TestContext {
    /// Create a new test context with a program loaded from the specified path
    pub async fn new_with_program(program_id: Pubkey, program_path: &str) -> Self {
        Self::new_with_programs(vec![(program_id, program_path)]).await
    }

    /// Create a new test context with multiple programs
    pub async fn new_with_programs(programs: Vec<(Pubkey, &str)>) -> Self {
        let mut program_test = ProgramTest::default();

        for (program_id, program_path) in programs {
            let program_data = fs::read(program_path).unwrap_or_else(|_| {
                panic!("Failed to read program file: {program_path}. Run 'anchor build' first")
            });

            program_test.add_account(
                program_id,
                solana_sdk::account::Account {
                    lamports: 1_000_000,
                    data: program_data,
                    owner: solana_sdk::bpf_loader::id(),
                    executable: true,
                    rent_epoch: 0,
                },
            );
        }

        // Native pools and their markets hold wrapped SOL
        program_test.add_account(spl_token::native_mint::ID, native_mint_account());

        let (banks_client, payer, recent_blockhash) = program_test.start().await;
        Self {
            banks_client,
            payer,
            recent_blockhash,
        }
    }

    pub fn payer_pubkey(&self) -> Pubkey {
        self.payer.pubkey()
    }

    /// Move to a fresh blockhash so a repeated instruction is not deduplicated
    pub async fn refresh_blockhash(&mut self) {
        self.recent_blockhash = self
            .banks_client
            .get_new_latest_blockhash(&self.recent_blockhash)
            .await
            .expect("Failed to get a new blockhash");
    }

    pub async fn process_instruction(
        &mut self,
        instruction: Instruction,
    ) -> std::result::Result<(), BanksClientError> {
        self.process_instructions(vec![instruction]).await
    }

    pub async fn process_instructions(
        &mut self,
        instructions: Vec<Instruction>,
    ) -> std::result::Result<(), BanksClientError> {
        let transaction = Transaction::new_signed_with_payer(
            &instructions,
            Some(&self.payer.pubkey()),
            &[&self.payer],
            self.recent_blockhash,
        );

        self.banks_client.process_transaction(transaction).await
    }

    /// Process instructions with `signer` as fee payer and only signer
    pub async fn process_instructions_as_signer(
        &mut self,
        instructions: Vec<Instruction>,
        signer: &Keypair,
    ) -> std::result::Result<(), BanksClientError> {
        let transaction = Transaction::new_signed_with_payer(
            &instructions,
            Some(&signer.pubkey()),
            &[signer],
            self.recent_blockhash,
        );

        self.banks_client.process_transaction(transaction).await
    }

    pub async fn process_instruction_as_signer(
        &mut self,
        instruction: Instruction,
        signer: &Keypair,
    ) -> std::result::Result<(), BanksClientError> {
        self.process_instructions_as_signer(vec![instruction], signer)
            .await
    }

    /// Transfer lamports from the payer
    pub async fn fund(
        &mut self,
        recipient: &Pubkey,
        lamports: u64,
    ) -> std::result::Result<(), BanksClientError> {
        let instruction = system_instruction::transfer(&self.payer.pubkey(), recipient, lamports);
        self.process_instruction(instruction).await
    }

    /// New keypair funded with `lamports`
    pub async fn funded_keypair(&mut self, lamports: u64) -> Keypair {
        let keypair = Keypair::new();
        self.fund(&keypair.pubkey(), lamports)
            .await
            .expect("Failed to fund keypair");
        keypair
    }

    pub async fn get_account_data<T: anchor_lang::AccountDeserialize>(
        &mut self,
        address: Pubkey,
    ) -> Result<T> {
        let account = self
            .banks_client
            .get_account(address)
            .await
            .unwrap()
            .unwrap();
        T::try_deserialize(&mut account.data.as_slice())
    }

    pub async fn get_account(&mut self, address: Pubkey) -> Option<solana_sdk::account::Account> {
        self.banks_client.get_account(address).await.unwrap()
    }

    pub async fn lamports(&mut self, address: Pubkey) -> u64 {
        self.get_account(address)
            .await
            .map(|account| account.lamports)
            .unwrap_or_default()
    }
}

fn native_mint_account() -> solana_sdk::account::Account {
    let mint = spl_token::state::Mint {
        decimals: spl_token::native_mint::DECIMALS,
        is_initialized: true,
        ..Default::default()
    };
    let mut data = vec![0; spl_token::state::Mint::LEN];
    spl_token::state::Mint::pack(mint, &mut data).expect("Failed to pack native mint");
    solana_sdk::account::Account {
        lamports: anchor_lang::solana_program::rent::Rent::default().minimum_balance(data.len()),
        data,
        owner: spl_token::ID,
        executable: false,
        rent_epoch: 0,
    }
}

/// Assert that a failed transaction carries the given Anchor error code
pub fn assert_anchor_error(result: std::result::Result<(), BanksClientError>, code: u32) {
    let err = result.expect_err("transaction should have failed");
    let hex_code = format!("{:x}", code);
    assert!(
        err.to_string().contains(&hex_code),
        "expected error code 0x{hex_code}, got: {err}"
    );
}
