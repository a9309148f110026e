//! VibeCheck CLI - Task Analyzer backend
//!
//! Starts the analyzer HTTP server backed by the Gemini API.

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vibecheck_core::Config;
use vibecheck_gemini::GeminiClient;
use vibecheck_web::state::AppState;

#[derive(Parser)]
#[command(name = "vibecheck", version, about = "VibeCheck task analyzer server")]
struct Cli {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value = "8000")]
    port: u16,

    /// Host to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "vibecheck=info,vibecheck_web=debug,vibecheck_gemini=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = Config::from_env()?;
    let client = GeminiClient::new(&config);

    println!();
    println!("  {} {}", "VibeCheck".cyan().bold(), "Task Analyzer".bold());
    println!();
    println!("  {}    http://{}:{}", "API".green(), cli.host, cli.port);
    println!("  {}  {}", "Model".green(), config.model_id);
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    let state = AppState::new(Arc::new(config), Arc::new(client));
    vibecheck_web::run_server(state, &cli.host, cli.port).await
}
