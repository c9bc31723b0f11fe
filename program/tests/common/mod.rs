#![allow(dead_code)]

use solana_program_test::{ProgramTest, ProgramTestBanksClientExt};
use std::{env, path::Path};

pub use solana_program_test::{BanksClient, BanksClientError, ProgramTestContext};
pub use solana_sdk::{
    instruction::{AccountMeta, Instruction, InstructionError},
    pubkey::Pubkey,
    signature::{Keypair, Signature, Signer},
    system_instruction, system_program,
    transaction::{Transaction, TransactionError},
};

use pinocchio_data_store::{error::DataError, helpers::DATA_SEED, state::DataAccount};

pub fn program_id() -> Pubkey {
    Pubkey::new_from_array(pinocchio_data_store::ID)
}

/// Test cluster with the SBF build of the program loaded.
///
/// The artifact is looked up in `$BPF_OUT_DIR`, falling back to `target/deploy`.
pub fn program_test() -> ProgramTest {
    let deploy_dir = env::var("BPF_OUT_DIR")
        .unwrap_or_else(|_| format!("{}/../target/deploy", env!("CARGO_MANIFEST_DIR")));
    env::set_var("BPF_OUT_DIR", &deploy_dir);
    let so_path = Path::new(&deploy_dir).join("pinocchio_data_store.so");
    assert!(
        so_path.exists(),
        "SBF artifact not found at {}.\nBuild first: `cargo-build-sbf --no-default-features --features sbf --manifest-path program/Cargo.toml`",
        so_path.display()
    );

    let mut pt = ProgramTest::default();
    pt.prefer_bpf(true);
    pt.add_upgradeable_program_to_genesis("pinocchio_data_store", &program_id());
    pt
}

/// Same artifact, additionally deployed at `alias`.
pub fn program_test_with_alias(alias: &Pubkey) -> ProgramTest {
    let mut pt = program_test();
    pt.add_upgradeable_program_to_genesis("pinocchio_data_store", alias);
    pt
}

pub async fn refresh_blockhash(ctx: &mut ProgramTestContext) {
    ctx.last_blockhash = ctx
        .banks_client
        .get_new_latest_blockhash(&ctx.last_blockhash)
        .await
        .unwrap();
}

pub async fn transfer(ctx: &mut ProgramTestContext, recipient: &Pubkey, amount: u64) {
    let tx = Transaction::new_signed_with_payer(
        &[system_instruction::transfer(&ctx.payer.pubkey(), recipient, amount)],
        Some(&ctx.payer.pubkey()),
        &[&ctx.payer],
        ctx.last_blockhash,
    );
    ctx.banks_client.process_transaction(tx).await.unwrap();
}

/// A fresh keypair funded with 1 SOL.
pub async fn funded_user(ctx: &mut ProgramTestContext) -> Keypair {
    let user = Keypair::new();
    transfer(ctx, &user.pubkey(), 1_000_000_000).await;
    user
}

pub fn data_account_pda(user: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[DATA_SEED, user.as_ref()], &program_id())
}

/// Sign with the payer plus `signers` and submit; returns the transaction
/// signature on success.
pub async fn send(
    ctx: &mut ProgramTestContext,
    ixs: &[Instruction],
    signers: &[&Keypair],
) -> Result<Signature, BanksClientError> {
    let mut all: Vec<&Keypair> = Vec::with_capacity(signers.len() + 1);
    all.push(&ctx.payer);
    all.extend_from_slice(signers);
    let tx = Transaction::new_signed_with_payer(
        ixs,
        Some(&ctx.payer.pubkey()),
        &all,
        ctx.last_blockhash,
    );
    let signature = tx.signatures[0];
    ctx.banks_client.process_transaction(tx).await?;
    Ok(signature)
}

pub async fn get_data_account(ctx: &mut ProgramTestContext, address: &Pubkey) -> Option<DataAccount> {
    let account = ctx.banks_client.get_account(*address).await.unwrap()?;
    assert_eq!(account.owner, program_id());
    DataAccount::from_bytes(&account.data).ok().cloned()
}

pub fn assert_custom_error(result: Result<Signature, BanksClientError>, expected: DataError) {
    let err = result.expect_err("transaction should fail");
    assert_eq!(
        err.unwrap(),
        TransactionError::InstructionError(0, InstructionError::Custom(expected.error_code())),
        "expected {:?} ({})",
        expected,
        expected.error_msg()
    );
}

pub fn assert_instruction_error(
    result: Result<Signature, BanksClientError>,
    expected: InstructionError,
) {
    let err = result.expect_err("transaction should fail");
    assert_eq!(err.unwrap(), TransactionError::InstructionError(0, expected));
}

// Instruction builders matching the program's [disc][payload] layout
pub mod ixn {
    use super::*;

    fn with_string(disc: u8, s: &str) -> Vec<u8> {
        let mut data = Vec::with_capacity(1 + 4 + s.len());
        data.push(disc);
        data.extend_from_slice(&(s.len() as u32).to_le_bytes());
        data.extend_from_slice(s.as_bytes());
        data
    }

    pub fn initialize() -> Instruction {
        Instruction {
            program_id: program_id(),
            accounts: vec![],
            data: vec![0],
        }
    }

    pub fn store_data(user: &Pubkey, data: &str) -> Instruction {
        store_data_at(user, &data_account_pda(user).0, data)
    }

    pub fn store_data_at(user: &Pubkey, data_account: &Pubkey, data: &str) -> Instruction {
        Instruction {
            program_id: program_id(),
            accounts: vec![
                AccountMeta::new(*user, true),
                AccountMeta::new(*data_account, false),
                AccountMeta::new_readonly(system_program::id(), false),
            ],
            data: with_string(1, data),
        }
    }

    pub fn update_data(user: &Pubkey, data_account: &Pubkey, new_data: &str) -> Instruction {
        Instruction {
            program_id: program_id(),
            accounts: vec![
                AccountMeta::new_readonly(*user, true),
                AccountMeta::new(*data_account, false),
            ],
            data: with_string(2, new_data),
        }
    }

    pub fn delete_data(user: &Pubkey, data_account: &Pubkey) -> Instruction {
        Instruction {
            program_id: program_id(),
            accounts: vec![
                AccountMeta::new(*user, true),
                AccountMeta::new(*data_account, false),
            ],
            data: vec![3],
        }
    }
}
