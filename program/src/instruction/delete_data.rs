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

/// Close the caller's data account; the rent goes back to the caller.
pub fn process_delete_data(program_id: &Pubkey, accounts: &[AccountInfo]) -> ProgramResult {
    let [user, data_account, _rest @ ..] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    if !user.is_signer() {
        return Err(ProgramError::MissingRequiredSignature);
    }
    if !user.is_writable() {
        return Err(ProgramError::Immutable);
    }
    check_program_account(data_account, program_id)?;

    let (data_length, created_at) = {
        let raw = data_account.try_borrow_data()?;
        let state = DataAccount::from_bytes(&raw)?;
        if !state.is_owner(user.key()) {
            return Err(to_program_error(DataError::Unauthorized));
        }
        validate_pda(data_account.key(), user.key(), state.bump(), program_id)?;
        (state.data_length(), state.created_at())
    };

    let now = get_current_timestamp()?;
    log_operation("delete data", user.key(), data_length, now);
    log!("originally created: {}", created_at);

    close_account(data_account, user)
}
