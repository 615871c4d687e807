//! Verdant - Nature-Inspired Healthcare Showcase
//!
//! HTTP service for biomimicry healthcare content, community insights,
//! and AI-generated nature-inspired answers.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use verdant::{
    advisor::{AdvisorState, GeminiClient, InsightGateway},
    api::{build_app, HomeState},
    catalog::ContentCatalog,
    config::VerdantConfig,
    insights::InsightStore,
};

#[derive(Parser)]
#[command(name = "verdant")]
#[command(version)]
#[command(about = "Nature-inspired healthcare showcase")]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "VERDANT_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Host to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides config)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Ask for a nature-inspired insight once and print it
    Ask {
        /// Health challenge to ask about
        query: String,
    },

    /// Show configuration
    Config {
        /// Show default configuration
        #[arg(long)]
        default: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.log_json);

    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!("Failed to load .env: {}", e),
    }

    let config = VerdantConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve { host, port } => {
            run_server(config, host, port).await?;
        }
        Commands::Ask { query } => {
            ask(&config, &query).await?;
        }
        Commands::Config { default } => {
            show_config(if default { None } else { Some(&config) })?;
        }
    }

    Ok(())
}

fn init_logging(verbose: bool, json: bool) {
    let log_level = if verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("verdant={},tower_http={}", log_level, log_level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

fn build_gateway(config: &VerdantConfig) -> Result<InsightGateway> {
    let client = GeminiClient::from_config(&config.generator)?;
    Ok(InsightGateway::new(Arc::new(client)))
}

async fn run_server(mut config: VerdantConfig, host: Option<String>, port: Option<u16>) -> Result<()> {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    // Fail at startup rather than on the first query
    let gateway = build_gateway(&config)?;

    let home_state = HomeState {
        catalog: Arc::new(ContentCatalog::builtin()),
        insights: Arc::new(InsightStore::new()),
    };
    let app = build_app(
        home_state,
        AdvisorState { gateway },
        &config.server.cors_origins,
    );

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(
        addr = %addr,
        model = %config.generator.model,
        "Verdant is listening. Press Ctrl+C to stop."
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down...");
}

async fn ask(config: &VerdantConfig, query: &str) -> Result<()> {
    let gateway = build_gateway(config)?;
    let answer = gateway.get_insight(query).await?;
    println!("{}", answer);
    Ok(())
}

fn show_config(config: Option<&VerdantConfig>) -> Result<()> {
    let config = config.cloned().unwrap_or_default();
    let toml = toml::to_string_pretty(&config)?;
    println!("{}", toml);
    Ok(())
}
