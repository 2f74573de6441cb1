use std::net::SocketAddr;

use clap::{Args, Parser, Subcommand};
use pizzeria_store::DEFAULT_DATABASE_URL;

#[derive(Parser)]
#[command(version, about = "Restaurants, pizzas and their prices over HTTP")]
pub struct Cli {
    #[command(flatten)]
    pub store: StoreConfig,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Apply pending migrations and serve the HTTP API
    Serve(ServeConfig),
    /// Apply pending migrations and exit
    Migrate,
    /// Replace the store content with sample data
    Seed,
}

#[derive(Args)]
pub struct StoreConfig {
    /// Path of the sqlite database file
    #[arg(long, global = true, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,
}

#[derive(Args)]
pub struct ServeConfig {
    #[arg(long, env = "LISTEN_ADDR", default_value = "0.0.0.0:5555")]
    pub listen_addr: SocketAddr,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_serve_flags() {
        let cli = Cli::try_parse_from([
            "pizzeria-api",
            "serve",
            "--listen-addr",
            "127.0.0.1:8080",
            "--database-url",
            "test.db",
        ])
        .unwrap();

        assert_eq!(cli.store.database_url, "test.db");
        match cli.command {
            Commands::Serve(serve) => {
                assert_eq!(serve.listen_addr, "127.0.0.1:8080".parse().unwrap())
            }
            _ => panic!("expected serve"),
        }
    }
}
