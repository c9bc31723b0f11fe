use pinocchio::program_error::ProgramError;

/// Custom codes start here so clients see the same numbers an Anchor
/// `#[error_code]` enum would produce.
pub const ERROR_CODE_OFFSET: u32 = 6000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum DataError {
    /// Signer is not the owner of the data account
    Unauthorized,
    /// Empty data payload
    DataEmpty,
    /// Payload longer than the 1000 byte limit
    DataTooLong,
    /// The user already has a data account
    AccountAlreadyExists,
    /// Program-owned account that was never initialized
    AccountNotFound,
    /// Lamport arithmetic overflowed
    MathOverflow,
    /// Clock sysvar reported a non-positive timestamp
    InvalidTimestamp,
}

impl DataError {
    /// Numeric code as seen in `ProgramError::Custom`.
    pub const fn error_code(&self) -> u32 {
        ERROR_CODE_OFFSET + *self as u32
    }

    pub const fn error_msg(&self) -> &'static str {
        match self {
            DataError::Unauthorized => "Not authorized to access this data",
            DataError::DataEmpty => "Data must not be empty",
            DataError::DataTooLong => "Data exceeds the 1000 byte limit",
            DataError::AccountAlreadyExists => "Data account already exists",
            DataError::AccountNotFound => "Data account does not exist",
            DataError::MathOverflow => "Arithmetic overflow",
            DataError::InvalidTimestamp => "Invalid timestamp",
        }
    }
}

// map internal errors to standard program error
pub fn to_program_error(err: DataError) -> ProgramError {
    ProgramError::Custom(err.error_code())
}

impl From<DataError> for ProgramError {
    fn from(err: DataError) -> Self {
        to_program_error(err)
    }
}

impl TryFrom<u32> for DataError {
    type Error = ProgramError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        match code.checked_sub(ERROR_CODE_OFFSET) {
            Some(0) => Ok(DataError::Unauthorized),
            Some(1) => Ok(DataError::DataEmpty),
            Some(2) => Ok(DataError::DataTooLong),
            Some(3) => Ok(DataError::AccountAlreadyExists),
            Some(4) => Ok(DataError::AccountNotFound),
            Some(5) => Ok(DataError::MathOverflow),
            Some(6) => Ok(DataError::InvalidTimestamp),
            _ => Err(ProgramError::InvalidArgument),
        }
    }
}
