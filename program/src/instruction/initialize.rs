use pinocchio::{
    account_info::AccountInfo,
    msg,
    pubkey::{self, Pubkey},
    sysvars::{clock::Clock, Sysvar},
    ProgramResult,
};
use pinocchio_log::log;

/// No accounts, no arguments: announces the program and the cluster time.
pub fn process_initialize(program_id: &Pubkey, _accounts: &[AccountInfo]) -> ProgramResult {
    let clock = Clock::get()?;

    msg!("Data store program initialized");
    pubkey::log(program_id);
    log!("current time: {}", clock.unix_timestamp);

    Ok(())
}
