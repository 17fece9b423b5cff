use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use sift::{create_router, AppState, FilterRules};

#[derive(Parser, Debug)]
#[command(name = "sift", about = "Content-filtering RSS proxy")]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:8080")]
    listen: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing for debug logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let client = reqwest::Client::builder()
        .build()
        .context("Failed to build HTTP client")?;
    let state = AppState::new(client, FilterRules::default());
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(args.listen)
        .await
        .with_context(|| format!("Failed to bind {}", args.listen))?;
    tracing::info!(addr = %args.listen, "Serving filtered feeds");

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
