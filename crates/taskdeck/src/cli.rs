//! Command-line interface definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "taskdeck", version, about = "Taskdeck workspace tools")]
pub struct Cli {
    /// Log filter used when RUST_LOG is unset.
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the backend server.
    Serve {
        /// Host to bind to (overrides TASKDECK_HOST).
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides TASKDECK_PORT).
        #[arg(long)]
        port: Option<u16>,

        /// Database file (overrides TASKDECK_DB).
        #[arg(long)]
        db: Option<PathBuf>,
    },

    /// Fetch the given spaces into a fresh store and print the snapshot.
    Fetch {
        /// Base URL of the Taskdeck API.
        #[arg(long, default_value = "http://localhost:5000")]
        base_url: String,

        /// Space id to fetch; repeat for multiple spaces.
        #[arg(long = "space", required = true)]
        spaces: Vec<String>,

        /// Workspace id.
        #[arg(long)]
        workspace: String,

        /// Acting user id.
        #[arg(long)]
        user: String,

        /// Bearer token.
        #[arg(long, env = "TASKDECK_TOKEN")]
        token: String,
    },
}
