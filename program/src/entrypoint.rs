use pinocchio::{
    account_info::AccountInfo, msg, program_entrypoint, program_error::ProgramError,
    pubkey::Pubkey, ProgramResult,
};

use crate::instruction::{self, DataInstructionData};

// Entrypoint macro
program_entrypoint!(process_instruction);

#[inline(always)]
fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    if program_id != &crate::ID {
        return Err(ProgramError::IncorrectProgramId);
    }

    decode_and_dispatch(program_id, accounts, instruction_data)
}

// Host builds also accept bincode-encoded instructions, after the raw layout
#[cfg(feature = "std")]
fn decode_and_dispatch(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    use instruction::wire::{decode_instruction, DecodedInstruction};

    match decode_instruction(instruction_data)? {
        DecodedInstruction::Raw(ix) => dispatch(program_id, accounts, ix),
        DecodedInstruction::Wire(wire_ix) => {
            dispatch(program_id, accounts, DataInstructionData::from(&wire_ix))
        }
    }
}

// [disc][payload]
#[cfg(not(feature = "std"))]
fn decode_and_dispatch(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    let ix = DataInstructionData::unpack(instruction_data)?;
    dispatch(program_id, accounts, ix)
}

fn dispatch(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    ix: DataInstructionData,
) -> ProgramResult {
    match ix {
        DataInstructionData::Initialize => {
            msg!("Instruction: Initialize");
            instruction::initialize::process_initialize(program_id, accounts)
        }
        DataInstructionData::StoreData { data } => {
            msg!("Instruction: StoreData");
            instruction::store_data::process_store_data(program_id, accounts, data)
        }
        DataInstructionData::UpdateData { new_data } => {
            msg!("Instruction: UpdateData");
            instruction::update_data::process_update_data(program_id, accounts, new_data)
        }
        DataInstructionData::DeleteData => {
            msg!("Instruction: DeleteData");
            instruction::delete_data::process_delete_data(program_id, accounts)
        }
    }
}
