use pinocchio::{program_error::ProgramError, pubkey::Pubkey};
use shank::ShankAccount;

use crate::{
    error::{to_program_error, DataError},
    helpers::{validate_data_length, DATA_ACCOUNT_DISCRIMINATOR, MAX_DATA_LENGTH},
};

pub type UnixTimestamp = [u8; 8]; // i64, little-endian

/// Per-user data account, stored at the PDA `["data", owner]`.
///
/// Every field is a byte or byte array, so the struct has alignment 1 and can
/// be cast straight over account data.
#[repr(C)]
#[derive(Debug, Clone, PartialEq, Eq, ShankAccount)]
pub struct DataAccount {
    /// [`DATA_ACCOUNT_DISCRIMINATOR`] once initialized, zero before
    pub discriminator: u8,
    /// User that stored the data; the only signer allowed to change it
    pub owner: Pubkey,
    pub created_at: UnixTimestamp,
    /// Zero until the first update
    pub updated_at: UnixTimestamp,
    pub bump: u8,
    /// Length of the valid prefix of `data` (u16, little-endian)
    pub data_len: [u8; 2],
    /// UTF-8 payload, zero padded
    pub data: [u8; 1000],
}

// shank needs a literal array length; keep it in step with the limit
const _: () = assert!(MAX_DATA_LENGTH == 1000);

impl DataAccount {
    pub const LEN: usize = core::mem::size_of::<DataAccount>();

    /// View over an initialized account.
    pub fn from_bytes(bytes: &[u8]) -> Result<&Self, ProgramError> {
        if bytes.len() != Self::LEN {
            return Err(ProgramError::InvalidAccountData);
        }
        // SAFETY: length checked above and the layout has alignment 1.
        let account = unsafe { &*(bytes.as_ptr() as *const Self) };
        if !account.is_initialized() {
            return Err(to_program_error(DataError::AccountNotFound));
        }
        Ok(account)
    }

    /// Mutable view over an initialized account.
    pub fn from_bytes_mut(bytes: &mut [u8]) -> Result<&mut Self, ProgramError> {
        if bytes.len() != Self::LEN {
            return Err(ProgramError::InvalidAccountData);
        }
        // SAFETY: as in `from_bytes`.
        let account = unsafe { &mut *(bytes.as_mut_ptr() as *mut Self) };
        if !account.is_initialized() {
            return Err(to_program_error(DataError::AccountNotFound));
        }
        Ok(account)
    }

    /// Mutable view over freshly allocated (all zero) account data.
    pub fn from_bytes_uninit_mut(bytes: &mut [u8]) -> Result<&mut Self, ProgramError> {
        if bytes.len() != Self::LEN {
            return Err(ProgramError::InvalidAccountData);
        }
        // SAFETY: as in `from_bytes`.
        let account = unsafe { &mut *(bytes.as_mut_ptr() as *mut Self) };
        if account.is_initialized() {
            return Err(to_program_error(DataError::AccountAlreadyExists));
        }
        Ok(account)
    }

    pub fn initialize(
        &mut self,
        owner: &Pubkey,
        data: &str,
        created_at: i64,
        bump: u8,
    ) -> Result<(), ProgramError> {
        self.set_data(data)?;
        self.discriminator = DATA_ACCOUNT_DISCRIMINATOR;
        self.owner = *owner;
        self.created_at = created_at.to_le_bytes();
        self.updated_at = 0i64.to_le_bytes();
        self.bump = bump;
        Ok(())
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.discriminator == DATA_ACCOUNT_DISCRIMINATOR
    }

    #[inline]
    pub fn is_owner(&self, user_key: &Pubkey) -> bool {
        self.owner == *user_key
    }

    #[inline]
    pub fn data_length(&self) -> usize {
        u16::from_le_bytes(self.data_len) as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data_length() == 0
    }

    pub fn data(&self) -> &[u8] {
        &self.data[..self.data_length().min(MAX_DATA_LENGTH)]
    }

    pub fn data_str(&self) -> Result<&str, ProgramError> {
        core::str::from_utf8(self.data()).map_err(|_| ProgramError::InvalidAccountData)
    }

    /// Replace the stored data; the stale tail of a longer previous value is zeroed.
    pub fn set_data(&mut self, data: &str) -> Result<(), ProgramError> {
        validate_data_length(data)?;
        let len = data.len();
        self.data[..len].copy_from_slice(data.as_bytes());
        self.data[len..].fill(0);
        // MAX_DATA_LENGTH fits in u16
        self.data_len = (len as u16).to_le_bytes();
        Ok(())
    }

    #[inline]
    pub fn created_at(&self) -> i64 {
        i64::from_le_bytes(self.created_at)
    }

    #[inline]
    pub fn updated_at(&self) -> i64 {
        i64::from_le_bytes(self.updated_at)
    }

    #[inline]
    pub fn set_updated_at(&mut self, timestamp: i64) {
        self.updated_at = timestamp.to_le_bytes();
    }

    #[inline]
    pub fn bump(&self) -> u8 {
        self.bump
    }
}
