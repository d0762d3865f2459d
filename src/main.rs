use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dirbrowse::{AppState, Config};

#[derive(Parser, Debug)]
#[command(name = "dirbrowse")]
#[command(about = "Minimal HTTP directory browser")]
#[command(version)]
struct Cli {
    /// Port to listen on
    #[arg(short, long, env = "DIRBROWSE_PORT", default_value = "8080")]
    port: u16,

    /// Address to bind to
    #[arg(short, long, env = "DIRBROWSE_ADDR", default_value = "0.0.0.0")]
    addr: String,

    /// Directory to serve
    #[arg(short, long, env = "DIRBROWSE_DIR", default_value = ".")]
    dir: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, env = "DIRBROWSE_VERBOSE")]
    verbose: bool,

    /// Config file path (optional)
    #[arg(short, long, env = "DIRBROWSE_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "dirbrowse=debug,tower_http=debug"
    } else {
        "dirbrowse=info,tower_http=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match &cli.config {
        Some(config_path) => Config::from_file(config_path)?,
        None => Config::default(),
    };

    let root_dir = cli
        .dir
        .canonicalize()
        .with_context(|| format!("Directory to serve does not exist: {}", cli.dir.display()))?;

    if !root_dir.is_dir() {
        bail!("Path to serve is not a directory: {}", root_dir.display());
    }

    info!("Serving files from: {}", root_dir.display());

    let state = AppState::with_config(root_dir, config).context("compiling page template")?;
    let app = dirbrowse::app(state);

    let addr: SocketAddr = format!("{}:{}", cli.addr, cli.port)
        .parse()
        .with_context(|| format!("Invalid listen address {}:{}", cli.addr, cli.port))?;
    info!("Server started at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
