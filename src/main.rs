use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use albedo::apod::{Fetcher, HttpFetcher, StaticFetcher};
use albedo::config::Settings;
use albedo::handlers::pages::PLACEHOLDER_ID;
use albedo::render::Document;
use albedo::{create_app, site, AppState};

#[derive(Parser)]
#[command(
    name = "albedo",
    about = "Fetches and renders NASA's Astronomy Picture of the Day",
    version
)]
struct Cli {
    /// Skip the network entirely and render the canned placeholder record
    #[arg(long, global = true)]
    offline: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the page (the default when no subcommand is given)
    Serve,
    /// Render the page once and write a self-contained site to disk
    Build {
        /// Output directory
        #[arg(long, default_value = "build")]
        out_dir: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "albedo=info,tower_http=debug".into()),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    let cli = Cli::parse();

    // Load configuration
    let settings = Settings::load().context("Failed to load application settings")?;

    let fetcher: Arc<dyn Fetcher> = if cli.offline {
        info!("running offline, the placeholder record will be rendered");
        Arc::new(StaticFetcher)
    } else {
        Arc::new(
            HttpFetcher::new(&settings.apod).context("Failed to build the APOD fetcher")?,
        )
    };

    let shell_path = settings.server.assets_dir.join("index.html");
    let shell = Document::from_file(&shell_path)?;
    anyhow::ensure!(
        shell.has_container(PLACEHOLDER_ID),
        "page shell {} has no element with id \"{}\"",
        shell_path.display(),
        PLACEHOLDER_ID
    );

    let state = AppState {
        config: settings,
        fetcher,
        shell: Arc::new(shell),
    };

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(state).await,
        Command::Build { out_dir } => site::build_site(&state, &out_dir).await,
    }
}

async fn serve(state: AppState) -> Result<()> {
    let addr = state.config.server.bind()?;
    let app = create_app(state);

    info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind the listen address")?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
