//! Presentation layer for shelfie
//!
//! The ratatui terminal front end and the clap CLI definition. Rendering is
//! a pure function of [`tui::TuiState`]; all business logic lives in the
//! domain and application layers.

pub mod cli;
pub mod tui;

pub use cli::Cli;
pub use tui::TuiApp;
