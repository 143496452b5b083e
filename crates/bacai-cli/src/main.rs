//! BACAI CLI
//!
//! Main entry point for serving the BACAI gateway, plus an offline `detect`
//! command for checking how a text would be routed.

use std::net::SocketAddr;
use std::path::Path;
use std::process::ExitCode;

use bacai_gateway::{create_router, AppState, Config};
use bacai_lang::{classify_with_code, detect, score, Language};
use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

/// Default port for the HTTP API server.
const DEFAULT_PORT: u16 = 8787;

/// Default bind address for the HTTP API server.
const DEFAULT_HOST: &str = "127.0.0.1";

/// BACAI - Trilingual educational API gateway
///
/// Detects the language and subject of solve, explain and converse requests
/// and relays them to the BACAI model service.
#[derive(Parser, Debug)]
#[command(name = "bacai")]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Path to configuration file (default: bacai.json in current directory)
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// Enable verbose output (sets log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Address to bind the HTTP API server to
    #[arg(long, default_value = DEFAULT_HOST)]
    host: String,

    /// Port for the HTTP API server
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Model service base URL (overrides config and MODEL_SERVICE_URL)
    #[arg(long, value_name = "URL")]
    model_url: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the detected language, subject scores and chosen subject for a text
    Detect {
        /// Text to analyze
        text: String,

        /// Language code to classify with instead of detecting it
        #[arg(short, long, value_name = "CODE")]
        language: Option<String>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let mut args = Args::parse();

    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if args.verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match args.command.take() {
        Some(Command::Detect { text, language }) => {
            run_detect(&text, language.as_deref());
            Ok(())
        }
        None => serve(args).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}

/// Loads configuration, builds the router and serves until Ctrl+C.
async fn serve(args: Args) -> anyhow::Result<()> {
    tracing::info!("BACAI gateway starting");
    tracing::debug!(config = ?args.config, "Config file");

    let mut config = load_config(args.config.as_deref())?;

    if let Some(url) = args.model_url {
        config.model_service_url = url;
    }

    // Re-validate after overrides
    config.validate()?;

    print_config(&config);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse().map_err(|e| {
        anyhow::anyhow!(
            "Invalid bind address '{}:{}': {e}\n\nSuggestion: Use an IP address with --host",
            args.host,
            args.port
        )
    })?;

    let state = AppState::new(config)?;
    let router = create_router(state);

    let listener = TcpListener::bind(addr).await.map_err(|e| {
        anyhow::anyhow!(
            "Failed to bind to {addr}: {e}\n\nSuggestion: Try a different port with --port"
        )
    })?;

    println!("HTTP API server running on http://{addr}");
    println!("Press Ctrl+C to stop");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("BACAI gateway stopped");
    Ok(())
}

/// Resolves when Ctrl+C is received.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Received Ctrl+C, shutting down");
}

/// Loads configuration from the specified path or default location.
fn load_config(config_path: Option<&str>) -> anyhow::Result<Config> {
    match config_path {
        Some(path_str) => {
            let path = Path::new(path_str);
            if !path.exists() {
                anyhow::bail!(
                    "Config file not found: '{}'\n\nSuggestion: Check the path or remove the --config flag to use defaults",
                    path.display()
                );
            }
            Config::load_from_file(path).map_err(|e| anyhow::anyhow!("{e}"))
        }
        None => Config::load().map_err(|e| anyhow::anyhow!("{e}")),
    }
}

/// Prints the loaded configuration. The token is never printed.
fn print_config(config: &Config) {
    println!("Configuration loaded:");
    println!("  Model service: {}", config.base_url());
    println!("  Request timeout: {}s", config.request_timeout_secs);
    println!("  Health timeout: {}s", config.health_timeout_secs);
    println!("  Environment: {}", config.environment);
    if config.allowed_origins.is_empty() {
        println!("  Allowed origins: any");
    } else {
        println!("  Allowed origins: {}", config.allowed_origins.join(", "));
    }
}

/// Prints how `text` would be routed.
fn run_detect(text: &str, language_code: Option<&str>) {
    let language = match language_code {
        Some(code) => Language::from_code(code).unwrap_or_else(|| {
            tracing::warn!(code, "Unknown language code, using the English keyword table");
            Language::English
        }),
        None => detect(text),
    };
    let subject = classify_with_code(text, language_code.unwrap_or(language.code()));

    println!("Language: {language}");
    println!("Scores:");
    for entry in score(text, language) {
        println!("  {:<16} {}", entry.subject.as_str(), entry.score);
    }
    println!("Subject: {subject}");
}
