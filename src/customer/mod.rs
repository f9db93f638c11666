//! Customer accounts: durable balance state and lookups.
//!
//! The repository is the single writer of balance values; balances change
//! only inside a transfer commit driven by [`crate::transfer::TransferService`].

pub mod db;
pub mod error;
pub mod models;
pub mod repository;

pub use db::Database;
pub use error::CustomerError;
pub use models::{Customer, CustomerFilter, PAGE_SIZE};
pub use repository::CustomerRepository;
