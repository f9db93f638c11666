use thiserror::Error;

#[derive(Error, Debug)]
pub enum CustomerError {
    #[error("Customer already exists")]
    DuplicateName,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
