/// Roster Server - in-memory user registry over HTTP
use clap::{Parser, Subcommand};
use roster_core::UserStore;
use roster_server::{api, config::ServerConfig, state::AppState};
use std::{net::IpAddr, path::PathBuf, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "roster-server")]
#[command(about = "In-memory user registry HTTP service", long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server (default)
    Serve {
        /// Configuration file path
        #[arg(short, long, env = "ROSTER_CONFIG")]
        config: Option<PathBuf>,

        /// Override the bind address
        #[arg(long)]
        host: Option<IpAddr>,

        /// Override the listen port
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Print the resolved configuration as TOML
    PrintConfig {
        /// Configuration file path
        #[arg(short, long, env = "ROSTER_CONFIG")]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Serve {
        config: None,
        host: None,
        port: None,
    }) {
        Commands::Serve { config, host, port } => {
            serve(config, host, port).await?;
        }
        Commands::PrintConfig { config } => {
            let config = ServerConfig::load_from(config.as_deref())?;
            print!("{}", toml::to_string_pretty(&config)?);
        }
    }

    Ok(())
}

fn init_tracing(config: &ServerConfig) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn serve(
    config_path: Option<PathBuf>,
    host: Option<IpAddr>,
    port: Option<u16>,
) -> anyhow::Result<()> {
    // Load configuration
    let mut config = ServerConfig::load_from(config_path.as_deref())?;
    if let Some(host) = host {
        config.server.host = host.to_string();
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    config.validate()?;

    init_tracing(&config);

    tracing::info!("Starting Roster Server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    // Build application state
    let app_state = AppState::new(Arc::new(UserStore::new()));

    // Build router
    let app = api::router(app_state);

    let addr = config.socket_addr()?;
    tracing::info!("Server listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Roster Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => {
            tracing::info!("Received shutdown signal");
        }
        Err(err) => {
            tracing::error!("Unable to listen for shutdown signal: {}", err);
            std::future::pending::<()>().await;
        }
    }
}
