//! Terminal user interface
//!
//! The main view is a catalog pane, a selection pane, and a chat pane; the
//! detail overlay and help render as centered modals. All display state
//! lives in [`state::TuiState`]; the chat controller runs in a background
//! task and narrates transcript changes back as `UiEvent`s.

pub mod app;
pub mod event;
pub mod layout;
pub mod mode;
pub mod presenter;
pub mod state;
pub mod widgets;

pub use app::TuiApp;
pub use event::TuiCommand;
pub use layout::MainLayout;
pub use mode::{Action, KeyHandler, Mode};
pub use presenter::TuiPresenter;
pub use state::{DisplayMessage, MessageRole, PaneFocus, TuiState};
