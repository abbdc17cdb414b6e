//! CLI entrypoint for Shelfie
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use shelfie_application::{ConversationLogger, NoConversationLogger};
use shelfie_infrastructure::{
    ConfigLoader, FileSelectionStore, JsonCatalogSource, JsonlConversationLogger,
    OpenAiCompletionGateway,
};
use shelfie_presentation::{Cli, TuiApp};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to a file; the terminal belongs to the TUI
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let file_appender = tracing_appender::rolling::never(std::env::temp_dir(), "shelfie.log");
    let (writer, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .init();

    info!("Starting Shelfie");

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        match ConfigLoader::load(cli.config.as_ref()) {
            Ok(config) => config,
            Err(e) => bail!("could not load configuration: {}", e),
        }
    };

    // CLI flags override config values
    let catalog_path = cli.catalog.unwrap_or(config.catalog.path);
    let endpoint = cli.endpoint.unwrap_or(config.api.endpoint);

    // === Dependency Injection ===
    let gateway = Arc::new(OpenAiCompletionGateway::new(
        endpoint,
        config.api.model,
        config.api.max_tokens,
    ));
    let catalog_source = Arc::new(JsonCatalogSource::new(catalog_path));
    let selection_store = Arc::new(FileSelectionStore::new(
        config.storage.resolved_selection_path(),
    ));

    let conversation_logger: Arc<dyn ConversationLogger> = match config
        .log
        .conversation_log
        .as_ref()
        .and_then(JsonlConversationLogger::new)
    {
        Some(logger) => Arc::new(logger),
        None => Arc::new(NoConversationLogger),
    };

    let mut app = TuiApp::new(gateway, catalog_source, selection_store, conversation_logger);
    app.run().await.context("terminal UI failed")?;

    Ok(())
}
