use pinocchio::program_error::ProgramError;
use shank::ShankInstruction;

pub mod initialize;
pub use initialize::*;

pub mod store_data;
pub use store_data::*;

pub mod update_data;
pub use update_data::*;

pub mod delete_data;
pub use delete_data::*;

#[cfg(feature = "std")]
pub mod wire;

/// Instruction discriminators (first byte of instruction data).
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, ShankInstruction)]
pub enum DataInstruction {
    /// One-off setup call; takes no accounts and no arguments
    Initialize,

    /// Create the caller's data account and store a string in it
    #[account(0, writable, signer, name = "user", desc = "Owner of the data; pays rent")]
    #[account(1, writable, name = "data_account", desc = "PDA [\"data\", user]")]
    #[account(2, name = "system_program", desc = "System program")]
    StoreData,

    /// Replace the stored string
    #[account(0, signer, name = "user", desc = "Owner of the data")]
    #[account(1, writable, name = "data_account", desc = "PDA [\"data\", user]")]
    UpdateData,

    /// Close the data account and refund its rent
    #[account(0, writable, signer, name = "user", desc = "Owner of the data; receives the rent")]
    #[account(1, writable, name = "data_account", desc = "PDA [\"data\", user]")]
    DeleteData,
}

impl TryFrom<&u8> for DataInstruction {
    type Error = ProgramError;

    fn try_from(value: &u8) -> Result<Self, Self::Error> {
        match *value {
            0 => Ok(DataInstruction::Initialize),
            1 => Ok(DataInstruction::StoreData),
            2 => Ok(DataInstruction::UpdateData),
            3 => Ok(DataInstruction::DeleteData),
            _ => Err(ProgramError::InvalidInstructionData),
        }
    }
}

/// Decoded instruction; string arguments borrow from the instruction data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataInstructionData<'a> {
    Initialize,
    StoreData { data: &'a str },
    UpdateData { new_data: &'a str },
    DeleteData,
}

impl<'a> DataInstructionData<'a> {
    // [0] Initialize | [1][len u32 LE][utf8] StoreData | [2][len u32 LE][utf8] UpdateData | [3] DeleteData
    pub fn unpack(instruction_data: &'a [u8]) -> Result<Self, ProgramError> {
        let (disc, payload) = instruction_data
            .split_first()
            .ok_or(ProgramError::InvalidInstructionData)?;

        match DataInstruction::try_from(disc)? {
            DataInstruction::Initialize => {
                expect_empty(payload)?;
                Ok(Self::Initialize)
            }
            DataInstruction::StoreData => Ok(Self::StoreData {
                data: parse_string(payload)?,
            }),
            DataInstruction::UpdateData => Ok(Self::UpdateData {
                new_data: parse_string(payload)?,
            }),
            DataInstruction::DeleteData => {
                expect_empty(payload)?;
                Ok(Self::DeleteData)
            }
        }
    }
}

fn expect_empty(payload: &[u8]) -> Result<(), ProgramError> {
    if !payload.is_empty() {
        return Err(ProgramError::InvalidInstructionData);
    }
    Ok(())
}

// Borsh string: u32 LE length, then exactly that many UTF-8 bytes.
fn parse_string(payload: &[u8]) -> Result<&str, ProgramError> {
    if payload.len() < 4 {
        return Err(ProgramError::InvalidInstructionData);
    }
    let (len_bytes, rest) = payload.split_at(4);
    let mut buf = [0u8; 4];
    buf.copy_from_slice(len_bytes);
    let len = u32::from_le_bytes(buf) as usize;
    if rest.len() != len {
        return Err(ProgramError::InvalidInstructionData);
    }
    core::str::from_utf8(rest).map_err(|_| ProgramError::InvalidInstructionData)
}
