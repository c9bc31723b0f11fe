/// Upper bound on stored data, in bytes.
pub const MAX_DATA_LENGTH: usize = 1000;

/// PDA seed prefix; the full seeds are `[DATA_SEED, user]`.
pub const DATA_SEED: &[u8] = b"data";

pub const DATA_ACCOUNT_DISCRIMINATOR: u8 = 1;

// Preview length used when logging stored data.
pub const LOG_PREVIEW_LENGTH: usize = 32;
