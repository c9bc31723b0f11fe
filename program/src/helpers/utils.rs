use pinocchio::{
    account_info::AccountInfo,
    instruction::{Seed, Signer},
    program_error::ProgramError,
    pubkey::{self, Pubkey},
    sysvars::{clock::Clock, rent::Rent, Sysvar},
    ProgramResult,
};
use pinocchio_log::log;
use pinocchio_system::instructions::{Allocate, Assign, CreateAccount, Transfer};

use crate::error::{to_program_error, DataError};
use crate::helpers::constant::*;

pub fn next_account_info<'a, I: Iterator<Item = &'a AccountInfo>>(
    iter: &mut I,
) -> Result<&'a AccountInfo, ProgramError> {
    iter.next().ok_or(ProgramError::NotEnoughAccountKeys)
}

/// Rejects empty payloads and payloads longer than [`MAX_DATA_LENGTH`] bytes.
pub fn validate_data_length(data: &str) -> Result<(), ProgramError> {
    if data.is_empty() {
        return Err(to_program_error(DataError::DataEmpty));
    }
    if data.len() > MAX_DATA_LENGTH {
        return Err(to_program_error(DataError::DataTooLong));
    }
    Ok(())
}

/// Current cluster time from the clock sysvar; must be strictly positive.
pub fn get_current_timestamp() -> Result<i64, ProgramError> {
    let clock = Clock::get()?;
    check_timestamp(clock.unix_timestamp)
}

#[inline]
pub fn check_timestamp(timestamp: i64) -> Result<i64, ProgramError> {
    if timestamp <= 0 {
        return Err(to_program_error(DataError::InvalidTimestamp));
    }
    Ok(timestamp)
}

/// Canonical data account address and bump for `user_key`.
///
/// Only available on-chain (the derivation is a syscall).
pub fn find_data_account_pda(user_key: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    pubkey::find_program_address(&[DATA_SEED, user_key.as_slice()], program_id)
}

/// Re-derive the PDA from the stored bump and compare with `expected_pda`.
pub fn validate_pda(
    expected_pda: &Pubkey,
    user_key: &Pubkey,
    bump: u8,
    program_id: &Pubkey,
) -> Result<(), ProgramError> {
    let bump_seed = [bump];
    let actual_pda =
        pubkey::create_program_address(&[DATA_SEED, user_key.as_slice(), &bump_seed], program_id)
            .map_err(|_| to_program_error(DataError::Unauthorized))?;
    if actual_pda != *expected_pda {
        return Err(to_program_error(DataError::Unauthorized));
    }
    Ok(())
}

/// Account must be owned by this program and writable.
pub fn check_program_account(account: &AccountInfo, program_id: &Pubkey) -> ProgramResult {
    if account.owner() != program_id {
        return Err(ProgramError::InvalidAccountOwner);
    }
    if !account.is_writable() {
        return Err(ProgramError::Immutable);
    }
    Ok(())
}

pub fn log_operation(operation: &str, user_key: &Pubkey, data_length: usize, timestamp: i64) {
    log!("=== {} ===", operation);
    pubkey::log(user_key);
    log!("data length: {} bytes", data_length);
    log!("timestamp: {}", timestamp);
}

/// Logs word/line counts and a short preview of `data`.
pub fn log_data_preview(data: &str) {
    let stats = calculate_data_stats(data);
    log!("words: {}, lines: {}", stats.word_count, stats.line_count);
    let (preview, truncated) = truncate_preview(data, LOG_PREVIEW_LENGTH);
    if truncated {
        log!("preview: {}...", preview);
    } else {
        log!("preview: {}", preview);
    }
}

/// Longest prefix of `data` that fits in `max_length` bytes without splitting a
/// character. The flag is set when something was cut off.
pub fn truncate_preview(data: &str, max_length: usize) -> (&str, bool) {
    if data.len() <= max_length {
        return (data, false);
    }
    let mut end = max_length;
    while !data.is_char_boundary(end) {
        end -= 1;
    }
    (&data[..end], true)
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DataStats {
    pub length: usize,
    pub word_count: usize,
    pub line_count: usize,
}

pub fn calculate_data_stats(data: &str) -> DataStats {
    DataStats {
        length: data.len(),
        word_count: data.split_whitespace().count(),
        line_count: data.lines().count(),
    }
}

// Move lamports between two accounts (checked)
pub fn relocate_lamports(
    source_account_info: &AccountInfo,
    destination_account_info: &AccountInfo,
    lamports: u64,
) -> ProgramResult {
    {
        let mut source_lamports = source_account_info.try_borrow_mut_lamports()?;
        *source_lamports = source_lamports
            .checked_sub(lamports)
            .ok_or(ProgramError::InsufficientFunds)?;
    }
    {
        let mut destination_lamports = destination_account_info.try_borrow_mut_lamports()?;
        *destination_lamports = destination_lamports
            .checked_add(lamports)
            .ok_or_else(|| to_program_error(DataError::MathOverflow))?;
    }
    Ok(())
}

/// Create a program-owned PDA of `space` bytes, rent paid by `payer`.
///
/// A plain `CreateAccount` fails when somebody already sent lamports to the
/// address, so in that case the balance is topped up and the account is
/// allocated and assigned in separate steps.
pub fn create_pda_account(
    payer: &AccountInfo,
    pda: &AccountInfo,
    space: usize,
    owner: &Pubkey,
    seeds: &[Seed],
) -> ProgramResult {
    let required_lamports = Rent::get()?.minimum_balance(space);
    let current_lamports = pda.lamports();

    if current_lamports == 0 {
        return CreateAccount {
            from: payer,
            to: pda,
            lamports: required_lamports,
            space: space as u64,
            owner,
        }
        .invoke_signed(&[Signer::from(seeds)]);
    }

    let top_up = required_lamports.saturating_sub(current_lamports);
    if top_up > 0 {
        Transfer {
            from: payer,
            to: pda,
            lamports: top_up,
        }
        .invoke()?;
    }
    Allocate {
        account: pda,
        space: space as u64,
    }
    .invoke_signed(&[Signer::from(seeds)])?;
    Assign {
        account: pda,
        owner,
    }
    .invoke_signed(&[Signer::from(seeds)])
}

/// Drain `account` into `destination`, wipe its data and hand it back to the
/// runtime for garbage collection.
pub fn close_account(account: &AccountInfo, destination: &AccountInfo) -> ProgramResult {
    relocate_lamports(account, destination, account.lamports())?;
    account.try_borrow_mut_data()?.fill(0);
    account.close()
}
