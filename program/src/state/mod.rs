pub mod data_account; // DataAccount (per-user PDA)

pub use data_account::DataAccount;
