use thiserror::Error;

/// Terminal failure reasons for a transfer request.
///
/// None of these leave any persisted state behind; a failed transfer can be
/// resubmitted as-is.
#[derive(Error, Debug)]
pub enum TransferError {
    #[error("Transfer amount must be a positive value")]
    InvalidAmount,

    #[error("Customers should not be the same to create a transaction")]
    SameAccount,

    #[error("Invalid identifier(s), customer(s) not found")]
    AccountNotFound,

    #[error("Database error: {0}")]
    Persistence(#[from] sqlx::Error),
}
