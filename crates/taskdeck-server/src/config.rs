//! Server configuration.

use std::path::PathBuf;
use std::time::Instant;

/// Environment variable names.
const HOST_ENV: &str = "TASKDECK_HOST";
const PORT_ENV: &str = "TASKDECK_PORT";
const DB_ENV: &str = "TASKDECK_DB";

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host to bind to.
    pub host: String,
    /// Port to bind to.
    pub port: u16,
    /// Path to the SQLite database file.
    pub db_path: PathBuf,
    /// Server start time for uptime reporting.
    pub start_time: Instant,
}

impl ServerConfig {
    /// Creates a configuration with the given host and port.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            db_path: PathBuf::from("taskdeck.db"),
            start_time: Instant::now(),
        }
    }

    /// Sets the database path.
    pub fn with_db_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.db_path = path.into();
        self
    }

    /// Reads configuration from the environment, falling back to defaults
    /// for anything unset. A malformed port falls back to the default.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let host = std::env::var(HOST_ENV).unwrap_or(defaults.host);
        let port = std::env::var(PORT_ENV)
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.port);
        let db_path = std::env::var(DB_ENV)
            .map(PathBuf::from)
            .unwrap_or(defaults.db_path);

        Self {
            host,
            port,
            db_path,
            start_time: Instant::now(),
        }
    }

    /// Returns the bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the uptime in seconds.
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            db_path: PathBuf::from("taskdeck.db"),
            start_time: Instant::now(),
        }
    }
}
