use anyhow::Context;
use clap::Parser;
use dotenvy::dotenv;
use pizzeria_store::{Database, seed::seed};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod handlers;
mod models;
mod serializer;

use config::{Cli, Commands};
use handlers::{AppState, app};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();
    let db = Database::new(cli.store.database_url);

    let applied = db
        .run_pending_migrations()
        .with_context(|| format!("Failed to migrate {}", db.url()))?;
    info!(applied, database_url = db.url(), "store ready");

    match cli.command {
        Commands::Serve(serve) => {
            let app = app(AppState::new(db));

            let listener = tokio::net::TcpListener::bind(serve.listen_addr).await?;
            info!("Pizzeria API listening on {}", listener.local_addr()?);

            axum::serve(listener, app).await?;
        }
        Commands::Migrate => {}
        Commands::Seed => {
            let summary = seed(&db).context("Failed to seed store")?;
            info!(?summary, "seed complete");
        }
    }

    Ok(())
}
