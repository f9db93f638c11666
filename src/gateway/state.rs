use std::sync::Arc;

use crate::customer::Database;

/// Shared gateway state.
///
/// Holds the connection pool wrapper; handlers acquire connections per
/// request through it and release them on every exit path.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
}

impl AppState {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}
