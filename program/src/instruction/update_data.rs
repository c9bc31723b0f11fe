use pinocchio::{
    account_info::AccountInfo,
    program_error::ProgramError,
    pubkey::Pubkey,
    ProgramResult,
};
use pinocchio_log::log;

use crate::{
    error::{to_program_error, DataError},
    helpers::*,
    state::DataAccount,
};

pub fn process_update_data(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    new_data: &str,
) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();
    let user = next_account_info(account_info_iter)?;
    let data_account = next_account_info(account_info_iter)?;

    validate_data_length(new_data)?;

    if !user.is_signer() {
        return Err(ProgramError::MissingRequiredSignature);
    }
    check_program_account(data_account, program_id)?;

    let now = get_current_timestamp()?;

    let mut raw = data_account.try_borrow_mut_data()?;
    let state = DataAccount::from_bytes_mut(&mut raw)?;

    // only the owner, and only through its own PDA
    if !state.is_owner(user.key()) {
        return Err(to_program_error(DataError::Unauthorized));
    }
    validate_pda(data_account.key(), user.key(), state.bump(), program_id)?;

    let old_data_length = state.data_length();
    state.set_data(new_data)?;
    state.set_updated_at(now);

    log_operation("update data", user.key(), new_data.len(), now);
    log!("previous length: {} bytes", old_data_length);
    log_data_preview(new_data);

    Ok(())
}
