use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use eyre::Result;
use log::{info, warn};

mod cli;

use cli::Cli;
use ytsum::config::Config;
use ytsum::limit::RateLimiter;
use ytsum::server::{AppState, router};
use ytsum::summarize::GeminiSummarizer;
use ytsum::youtube::InnerTubeProvider;

fn setup_logging(verbose: bool) {
    let debug_env = std::env::var("DEBUG")
        .map(|v| v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    let mut builder = env_logger::Builder::from_default_env();
    if verbose || debug_env {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    // Load config file (non-fatal if missing/invalid)
    let config = Config::load().unwrap_or_default();
    let port = cli.port.unwrap_or(config.port);

    // Credential is read once at startup; its absence only degrades summarization
    let api_key = std::env::var("GEMINI_API_KEY").ok();
    if api_key.is_none() {
        warn!("GEMINI_API_KEY not found in environment variables; summarization disabled");
    }

    let client = reqwest::Client::new();
    let model = config.model.clone();

    let state = AppState {
        config: Arc::new(config),
        provider: Arc::new(InnerTubeProvider::new(client.clone())),
        summarizer: Arc::new(GeminiSummarizer::new(client, api_key, model)),
        limiter: Arc::new(RateLimiter::per_minute(!cli.no_rate_limit)),
    };

    let app = router(state);

    let addr = format!("{}:{port}", cli.bind);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{addr}");

    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>()).await?;

    Ok(())
}
