//! Backend bootstrap for Taskdeck.
//!
//! Thin wiring only: env-driven config, a SQLite connect gate, and an axum
//! router with permissive CORS, a health route, and a JSON 404 fallback.
//! The workspace REST resources themselves live elsewhere.

pub mod config;
pub mod db;
pub mod error;
pub mod router;
pub mod state;

pub use config::ServerConfig;
pub use error::{ApiError, BootstrapError};
pub use router::{create_router, serve};
pub use state::AppState;
