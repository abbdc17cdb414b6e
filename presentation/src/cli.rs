//! Command-line interface definition

use clap::Parser;
use std::path::PathBuf;

/// Shelfie - browse a product catalog and chat your way to a routine
#[derive(Parser, Debug)]
#[command(name = "shelfie", version, about)]
pub struct Cli {
    /// Path to a config file (overrides discovered configs)
    #[arg(short = 'C', long)]
    pub config: Option<PathBuf>,

    /// Skip config discovery and use built-in defaults
    #[arg(long)]
    pub no_config: bool,

    /// Path to the products JSON document (overrides config)
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Completion endpoint URL (overrides config)
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["shelfie"]);
        assert!(cli.config.is_none());
        assert!(!cli.no_config);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_overrides_parse() {
        let cli = Cli::parse_from([
            "shelfie",
            "--catalog",
            "demo/products.json",
            "--endpoint",
            "http://localhost:8787/api/chat",
            "-vv",
        ]);
        assert_eq!(cli.catalog, Some(PathBuf::from("demo/products.json")));
        assert_eq!(
            cli.endpoint.as_deref(),
            Some("http://localhost:8787/api/chat")
        );
        assert_eq!(cli.verbose, 2);
    }
}
