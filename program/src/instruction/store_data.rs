use pinocchio::{
    account_info::AccountInfo,
    instruction::Seed,
    program_error::ProgramError,
    pubkey::Pubkey,
    ProgramResult,
};

use crate::{
    error::{to_program_error, DataError},
    helpers::*,
    state::DataAccount,
};

pub fn process_store_data(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    data: &str,
) -> ProgramResult {
    // accounts: user (signer, writable), data_account (writable), system_program
    let [user, data_account, system_program, _rest @ ..] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    validate_data_length(data)?;

    if !user.is_signer() {
        return Err(ProgramError::MissingRequiredSignature);
    }
    if system_program.key() != &pinocchio_system::ID {
        return Err(ProgramError::IncorrectProgramId);
    }

    let (expected_pda, bump) = find_data_account_pda(user.key(), program_id);
    if data_account.key() != &expected_pda {
        return Err(ProgramError::InvalidSeeds);
    }
    // one account per user
    if data_account.owner() == program_id {
        return Err(to_program_error(DataError::AccountAlreadyExists));
    }

    let now = get_current_timestamp()?;

    let bump_seed = [bump];
    let seeds = [
        Seed::from(DATA_SEED),
        Seed::from(user.key().as_slice()),
        Seed::from(&bump_seed[..]),
    ];
    create_pda_account(user, data_account, DataAccount::LEN, program_id, &seeds)?;

    {
        let mut raw = data_account.try_borrow_mut_data()?;
        let state = DataAccount::from_bytes_uninit_mut(&mut raw)?;
        state.initialize(user.key(), data, now, bump)?;
    }

    log_operation("store data", user.key(), data.len(), now);
    log_data_preview(data);

    Ok(())
}
