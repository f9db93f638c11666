//! Transfer engine: turns a transfer request into a consistent, durably
//! committed state change, or rejects it with no side effects.
//!
//! Validation and balance computation live here; the customer store owns the
//! durable balance state. The commit is a single database transaction that
//! locks both customer rows, writes both balances, and inserts the
//! transaction record.

pub mod error;
pub mod models;
pub mod service;

pub use error::TransferError;
pub use models::{TransactionFilter, TransactionRecord, TransferRequest};
pub use service::TransferService;
