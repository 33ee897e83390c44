// src/main.rs

use anyhow::Result;
use clap::{Parser, Subcommand};
use larder::persist::CookbookFile;
use larder::server::{run_server, ServerConfig};
use larder::store::CookbookStore;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "larder")]
#[command(author, version, about = "Cookbook service with recursive recipe resolution", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the cookbook HTTP server
    Serve {
        /// Address to bind to
        #[arg(short, long, default_value = "127.0.0.1:8080")]
        bind: SocketAddr,

        /// Path to the cookbook JSON file
        #[arg(short, long, default_value = "database.json")]
        data_path: PathBuf,
    },

    /// Resolve a recipe from the cookbook file and print its summary
    Summary {
        /// Name of the recipe to resolve
        name: String,

        /// Path to the cookbook JSON file
        #[arg(short, long, default_value = "database.json")]
        data_path: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { bind, data_path } => {
            run_server(ServerConfig {
                bind_addr: bind,
                data_path,
            })
            .await
        }
        Commands::Summary { name, data_path } => {
            let store = CookbookStore::with_persistence(CookbookFile::new(data_path))?;
            info!("Loaded {} cookbook entries", store.len());

            let summary = larder::resolve(&store.snapshot(), &name)?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
            Ok(())
        }
    }
}
