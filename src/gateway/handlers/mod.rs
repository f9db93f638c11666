//! Gateway request handlers

pub mod customer;
pub mod health;
pub mod transaction;

// Glob re-exports so utoipa path items resolve at this module path
pub use customer::*;
pub use health::*;
pub use transaction::*;
