// Wire decoding for DataInstruction (bincode) for std builds
use bincode::Options;
use pinocchio::program_error::ProgramError;
use serde::{Deserialize, Serialize};

use super::DataInstructionData;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WireInstruction {
    Initialize,
    StoreData(String),
    UpdateData(String),
    DeleteData,
}

fn options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .reject_trailing_bytes()
}

impl WireInstruction {
    /// `None` when `data` is not a complete bincode `WireInstruction`.
    ///
    /// Some byte strings the raw layout rejects are valid bincode (`[3, 0, 0, 0]`
    /// is `DeleteData`), so use [`decode_instruction`] to get raw-first ordering.
    pub fn decode(data: &[u8]) -> Option<Self> {
        options().deserialize(data).ok()
    }

    pub fn encode(&self) -> Result<Vec<u8>, bincode::Error> {
        options().serialize(self)
    }
}

/// Either layout, as accepted by host builds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedInstruction<'a> {
    Raw(DataInstructionData<'a>),
    Wire(WireInstruction),
}

/// Raw `[disc][payload]` wins whenever it parses; bincode is only tried for
/// input the raw decoder rejects, and the raw error is kept if both fail.
pub fn decode_instruction(data: &[u8]) -> Result<DecodedInstruction<'_>, ProgramError> {
    match DataInstructionData::unpack(data) {
        Ok(ix) => Ok(DecodedInstruction::Raw(ix)),
        Err(raw_err) => WireInstruction::decode(data)
            .map(DecodedInstruction::Wire)
            .ok_or(raw_err),
    }
}

impl<'a> From<&'a WireInstruction> for DataInstructionData<'a> {
    fn from(ix: &'a WireInstruction) -> Self {
        match ix {
            WireInstruction::Initialize => DataInstructionData::Initialize,
            WireInstruction::StoreData(data) => DataInstructionData::StoreData {
                data: data.as_str(),
            },
            WireInstruction::UpdateData(new_data) => DataInstructionData::UpdateData {
                new_data: new_data.as_str(),
            },
            WireInstruction::DeleteData => DataInstructionData::DeleteData,
        }
    }
}
