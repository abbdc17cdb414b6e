//! TUI mode system
//!
//! Defines the mode-based interaction model:
//! - Browse mode: navigate the catalog and selection panes
//! - Search mode: live product search input
//! - Chat mode: chat input for follow-up questions

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Browse mode - pane navigation and selection
    #[default]
    Browse,
    /// Search mode - text input filters the catalog live
    Search,
    /// Chat mode - text input feeds the chat form
    Chat,
}

impl Mode {
    /// Mode indicator string for the status line
    pub fn indicator(&self) -> &'static str {
        match self {
            Self::Browse => "BROWSE",
            Self::Search => "SEARCH",
            Self::Chat => "CHAT",
        }
    }

    /// Mode color for the status line
    pub fn color(&self) -> ratatui::style::Color {
        use ratatui::style::Color;
        match self {
            Self::Browse => Color::Blue,
            Self::Search => Color::Yellow,
            Self::Chat => Color::Green,
        }
    }
}

/// User action derived from key events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Enter search mode
    EnterSearch,
    /// Enter chat mode
    EnterChat,
    /// Exit current mode back to browse
    ExitToBrowse,
    /// Submit current input (Enter in Search/Chat mode)
    Submit,
    /// Quit application
    Quit,
    /// Insert character into the active input
    InsertChar(char),
    /// Delete character before the cursor (Backspace)
    DeleteChar,
    /// Move cursor left
    CursorLeft,
    /// Move cursor right
    CursorRight,
    /// Move to start of input
    CursorStart,
    /// Move to end of input
    CursorEnd,
    /// Move pane cursor up
    MoveUp,
    /// Move pane cursor down
    MoveDown,
    /// Switch focus between catalog and selection panes
    SwitchPane,
    /// Toggle selection of the highlighted product
    ToggleSelected,
    /// Open the detail overlay for the highlighted product
    OpenDetail,
    /// Remove the highlighted product from the selection
    RemoveSelected,
    /// Clear the whole selection
    ClearSelection,
    /// Cycle the category filter
    CycleCategory,
    /// Generate a routine from the current selection
    GenerateRoutine,
    /// Toggle the help overlay
    ShowHelp,
    /// No action
    None,
}

/// Key event handler - maps key events to actions based on current mode
pub struct KeyHandler;

impl KeyHandler {
    /// Handle key event in the given mode
    pub fn handle(mode: Mode, key: KeyEvent) -> Action {
        match mode {
            Mode::Browse => Self::handle_browse(key),
            Mode::Search | Mode::Chat => Self::handle_input(key),
        }
    }

    fn handle_browse(key: KeyEvent) -> Action {
        match (key.code, key.modifiers) {
            // Mode switches
            (KeyCode::Char('/'), KeyModifiers::NONE) => Action::EnterSearch,
            (KeyCode::Char('i'), KeyModifiers::NONE) => Action::EnterChat,

            // Quit
            (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

            // Navigation
            (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) => Action::MoveUp,
            (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) => Action::MoveDown,
            (KeyCode::Tab, _) => Action::SwitchPane,

            // Selection
            (KeyCode::Char(' '), KeyModifiers::NONE) => Action::ToggleSelected,
            (KeyCode::Enter, _) => Action::OpenDetail,
            (KeyCode::Char('x'), KeyModifiers::NONE) => Action::RemoveSelected,
            (KeyCode::Char('X'), KeyModifiers::SHIFT) => Action::ClearSelection,

            // Filtering
            (KeyCode::Char('c'), KeyModifiers::NONE) => Action::CycleCategory,

            // Chat
            (KeyCode::Char('g'), KeyModifiers::NONE) => Action::GenerateRoutine,

            // Help
            (KeyCode::Char('?'), KeyModifiers::NONE | KeyModifiers::SHIFT) => Action::ShowHelp,

            _ => Action::None,
        }
    }

    fn handle_input(key: KeyEvent) -> Action {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
            (KeyCode::Esc, _) => Action::ExitToBrowse,
            (KeyCode::Enter, _) => Action::Submit,
            (KeyCode::Char(c), _) => Action::InsertChar(c),
            (KeyCode::Backspace, _) => Action::DeleteChar,
            (KeyCode::Left, _) => Action::CursorLeft,
            (KeyCode::Right, _) => Action::CursorRight,
            (KeyCode::Home, _) => Action::CursorStart,
            (KeyCode::End, _) => Action::CursorEnd,
            _ => Action::None,
        }
    }
}
