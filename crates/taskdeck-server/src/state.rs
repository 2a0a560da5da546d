//! Application state shared across handlers.

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::config::ServerConfig;

/// State handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Database handle. rusqlite connections are not `Sync`, so access is
    /// serialized behind a mutex.
    pub db: Arc<Mutex<Connection>>,
}

impl AppState {
    /// Creates the shared state from a config and an opened connection.
    pub fn new(config: ServerConfig, db: Connection) -> Self {
        Self {
            config: Arc::new(config),
            db: Arc::new(Mutex::new(db)),
        }
    }
}
