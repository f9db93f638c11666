//! payflow - A minimal financial record-keeping API
//!
//! Customers hold a decimal balance; transactions move a positive amount
//! between two customers, committing the transfer record and both balance
//! updates as one atomic unit.
//!
//! # Modules
//!
//! - [`config`] - Environment configuration (YAML per env)
//! - [`logging`] - Tracing setup (rolling file + stdout)
//! - [`customer`] - Account store: customers, balances, lookups
//! - [`transfer`] - Transfer engine: validation, computation, atomic commit
//! - [`gateway`] - HTTP surface (axum) and OpenAPI docs

pub mod config;
pub mod customer;
pub mod gateway;
pub mod logging;
pub mod transfer;

// Convenient re-exports at crate root
pub use config::AppConfig;
pub use customer::{Customer, CustomerError, CustomerFilter, CustomerRepository, Database};
pub use transfer::{
    TransactionFilter, TransactionRecord, TransferError, TransferRequest, TransferService,
};
