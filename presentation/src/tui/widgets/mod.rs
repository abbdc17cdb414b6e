//! TUI widgets for the main view and overlays

pub mod catalog;
pub mod chat;
pub mod detail;
pub mod header;
pub mod input;
pub mod selection;
pub mod status_bar;

pub use catalog::CatalogWidget;
pub use chat::ChatWidget;
pub use detail::DetailWidget;
pub use header::HeaderWidget;
pub use input::InputWidget;
pub use selection::SelectionWidget;
pub use status_bar::StatusBarWidget;
