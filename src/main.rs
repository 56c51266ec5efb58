use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pitchside::api::state::AppState;
use pitchside::api::build_router;
use pitchside::club::Club;
use pitchside::config::AppConfig;
use pitchside::models::MatchId;
use pitchside::seed::seed_store;
use pitchside::storage::{load_store, save_store, EntityType, StorageConfig};

#[derive(Parser)]
#[command(name = "pitchside")]
#[command(about = "Grassroots football club manager with peer ratings and team balancing")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: String,

    /// Data directory path (overrides config file)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the API server
    Serve {
        /// Bind address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Port number (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Write the demo dataset to the data directory
    Seed {
        /// Overwrite existing data files
        #[arg(long)]
        force: bool,
    },

    /// Balance teams for a match and print the split
    Balance {
        /// Match to balance
        match_id: u64,
    },
}

fn load_config(cli: &Cli) -> Result<AppConfig> {
    let path = PathBuf::from(&cli.config);
    let mut config = if path.exists() {
        AppConfig::from_file(&path)?
    } else {
        AppConfig::default()
    };
    if let Some(dir) = &cli.data_dir {
        config.data_dir = dir.clone();
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    if cli.json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!("Starting pitchside v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config(&cli)?;
    let storage = StorageConfig::new(config.data_dir.clone());

    match cli.command {
        Commands::Serve { host, port } => {
            let store = load_store(&storage)?;
            let club = Club::new(store).with_baseline_rating(config.club.baseline_rating);
            let state = AppState::new(club);
            let app = build_router(state.clone());

            let host = host.unwrap_or(config.server.host);
            let port = port.unwrap_or(config.server.port);
            let addr = format!("{}:{}", host, port);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!("Listening on http://{}", addr);

            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = tokio::signal::ctrl_c().await;
                    tracing::info!("Shutting down");
                })
                .await?;

            // Snapshot on the way out so restarts pick up where we left off
            let club = state.club.read().await;
            save_store(&storage, club.store())?;
        }
        Commands::Seed { force } => {
            let players_file = storage.entity_path(EntityType::Player);
            if players_file.exists() && !force {
                anyhow::bail!(
                    "Data directory {:?} already contains player data; pass --force to overwrite",
                    storage.data_dir
                );
            }
            save_store(&storage, &seed_store())?;
            tracing::info!("Demo dataset written to {:?}", storage.data_dir);
        }
        Commands::Balance { match_id } => {
            let store = load_store(&storage)?;
            let mut club = Club::new(store).with_baseline_rating(config.club.baseline_rating);
            let teams = club.balance_teams(MatchId::new(match_id))?;

            println!("Team A:");
            for p in &teams.team_a {
                println!("  {} ({:.1})", p.full_name(), p.average_rating);
            }
            println!("Team B:");
            for p in &teams.team_b {
                println!("  {} ({:.1})", p.full_name(), p.average_rating);
            }

            save_store(&storage, club.store())?;
        }
    }

    Ok(())
}
