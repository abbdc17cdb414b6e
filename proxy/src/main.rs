//! Proxy entrypoint.
//!
//! Binds the pass-through handler and reads the upstream credential from
//! the environment, keeping it out of every client-side artifact.

use anyhow::{Context, Result, bail};
use clap::Parser;
use shelfie_proxy::{ProxyState, router};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Key-shielding proxy for the shelfie completion endpoint
#[derive(Parser, Debug)]
#[command(name = "shelfie-proxy", version, about)]
struct ProxyCli {
    /// Address to listen on
    #[arg(short, long, default_value = "127.0.0.1:8787")]
    listen: SocketAddr,

    /// Upstream completion endpoint
    #[arg(
        long,
        default_value = "https://api.openai.com/v1/chat/completions"
    )]
    upstream: String,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = ProxyCli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("info"),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    // The secret lives in the server process only
    let api_key = match std::env::var("OPENAI_API_KEY") {
        Ok(key) if !key.is_empty() => key,
        _ => bail!("OPENAI_API_KEY must be set in the environment"),
    };

    let state = Arc::new(ProxyState::new(cli.upstream.clone(), api_key));
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(cli.listen)
        .await
        .with_context(|| format!("could not bind {}", cli.listen))?;

    info!("Proxying {} -> {}", cli.listen, cli.upstream);
    axum::serve(listener, app).await.context("server failed")?;

    Ok(())
}
