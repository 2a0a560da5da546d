//! Taskdeck CLI entry point.

mod cli;

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use taskdeck_client::HttpWorkspaceApi;
use taskdeck_models::{EntityId, UserId, WorkspaceId};
use taskdeck_ops::{FetchWorkspaceParams, Phase, Pipeline};
use taskdeck_server::ServerConfig;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    // Load .env if it exists (TASKDECK_* vars).
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level.clone()));
    fmt().with_env_filter(filter).with_target(false).init();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Serve { host, port, db } => {
            let mut config = ServerConfig::from_env();
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(db) = db {
                config.db_path = db;
            }
            taskdeck_server::serve(config).await?;
        }

        Commands::Fetch {
            base_url,
            spaces,
            workspace,
            user,
            token,
        } => {
            let api = Arc::new(HttpWorkspaceApi::new(base_url));
            let pipeline = Pipeline::new(api);

            let params = FetchWorkspaceParams {
                spaces: spaces.iter().map(|s| EntityId::from(s.as_str())).collect(),
                workspace_id: WorkspaceId::from(workspace),
                user_id: UserId::from(user),
                token,
            };

            match pipeline.fetch_workspace(params).await {
                Phase::Fulfilled(()) => {
                    let snapshot = pipeline.snapshot().await;
                    println!("{}", serde_json::to_string_pretty(&snapshot)?);
                }
                Phase::Rejected(message) => return Err(message.into()),
                // A driven operation always completes.
                Phase::Pending => return Err("fetch did not complete".into()),
            }
        }
    }

    Ok(())
}
