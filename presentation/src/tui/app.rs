//! TUI application — main loop with a background controller task.
//!
//! Architecture:
//! ```text
//! TuiApp (select! loop)                 controller_task (tokio::spawn)
//!   ├─ crossterm EventStream              └─ cmd_rx.recv()
//!   ├─ ui_rx (UiEvent from controller)         └─ ChatController
//!   └─ tick_interval
//!        └── cmd_tx ──────────────────>──┘
//! ```
//!
//! The command channel is consumed by a single task, so chat invocations
//! are serialized per conversation; the `is_generating` flag additionally
//! rejects new submissions while a request is in flight.

use super::event::TuiCommand;
use super::layout::MainLayout;
use super::mode::{Action, KeyHandler, Mode};
use super::presenter::TuiPresenter;
use super::state::{PaneFocus, TuiState};
use super::widgets::{
    CatalogWidget, ChatWidget, DetailWidget, HeaderWidget, InputWidget, SelectionWidget,
    StatusBarWidget, catalog,
};
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, EventStream, KeyCode, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::stream::StreamExt;
use ratatui::layout::Rect;
use ratatui::{Terminal, backend::CrosstermBackend};
use shelfie_application::{
    CatalogSource, ChatController, CompletionGateway, ConversationLogger, SelectionStore, UiEvent,
};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Flash shown when a submission arrives while a request is in flight.
const BUSY_MESSAGE: &str = "Still working on the previous request";

/// Main TUI application
pub struct TuiApp {
    cmd_tx: mpsc::UnboundedSender<TuiCommand>,
    ui_rx: mpsc::UnboundedReceiver<UiEvent>,
    catalog_source: Arc<dyn CatalogSource>,
    selection_store: Arc<dyn SelectionStore>,

    // Last rendered layout, kept for mouse hit-testing
    last_layout: Option<MainLayout>,
    last_overlay: Option<Rect>,

    _controller_handle: tokio::task::JoinHandle<()>,
}

impl TuiApp {
    /// Create a new TUI application wired to the controller task.
    pub fn new(
        gateway: Arc<dyn CompletionGateway>,
        catalog_source: Arc<dyn CatalogSource>,
        selection_store: Arc<dyn SelectionStore>,
        conversation_logger: Arc<dyn ConversationLogger>,
    ) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel::<TuiCommand>();
        let (ui_tx, ui_rx) = mpsc::unbounded_channel();

        let controller =
            ChatController::new(gateway, ui_tx).with_conversation_logger(conversation_logger);
        let controller_handle = tokio::spawn(controller_task(controller, cmd_rx));

        Self {
            cmd_tx,
            ui_rx,
            catalog_source,
            selection_store,
            last_layout: None,
            last_overlay: None,
            _controller_handle: controller_handle,
        }
    }

    /// Run the TUI main loop
    pub async fn run(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Restore the terminal even when rendering panics
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
            original_hook(info);
        }));

        let mut state = TuiState::new();

        // One catalog read per session; failures already degraded to empty.
        // The persisted selection is restored before the first render.
        state.products = self.catalog_source.load().await;
        state.selection = self.selection_store.load();

        let mut event_stream = EventStream::new();
        let mut tick = tokio::time::interval(Duration::from_millis(250));

        loop {
            terminal.draw(|frame| {
                self.render(frame, &state);
            })?;

            if state.should_quit {
                break;
            }

            tokio::select! {
                Some(Ok(term_event)) = event_stream.next() => {
                    self.handle_terminal_event(&mut state, term_event);
                }

                Some(ui_event) = self.ui_rx.recv() => {
                    TuiPresenter::apply(&mut state, &ui_event);
                }

                _ = tick.tick() => {
                    state.expire_flash(Duration::from_secs(5));
                }
            }
        }

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        Ok(())
    }

    /// Render all widgets
    fn render(&mut self, frame: &mut ratatui::Frame, state: &TuiState) {
        let layout = MainLayout::compute(frame.area());
        self.last_layout = Some(layout);

        frame.render_widget(HeaderWidget::new(state), layout.header);
        frame.render_widget(CatalogWidget::new(state), layout.catalog);
        frame.render_widget(SelectionWidget::new(state), layout.selection);
        frame.render_widget(ChatWidget::new(state), layout.chat);
        frame.render_widget(InputWidget::new(state), layout.input);
        frame.render_widget(StatusBarWidget::new(state), layout.status_bar);

        // Detail overlay
        self.last_overlay = None;
        if let Some(product) = &state.overlay {
            let overlay_area = MainLayout::centered_overlay(60, 60, frame.area());
            self.last_overlay = Some(overlay_area);
            frame.render_widget(ratatui::widgets::Clear, overlay_area);
            frame.render_widget(DetailWidget::new(product), overlay_area);
        }

        if state.show_help {
            let help_area = MainLayout::centered_overlay(60, 70, frame.area());
            frame.render_widget(ratatui::widgets::Clear, help_area);
            self.render_help(frame, help_area);
        }
    }

    fn render_help(&self, frame: &mut ratatui::Frame, area: Rect) {
        use ratatui::style::{Color, Modifier, Style};
        use ratatui::text::{Line, Span};
        use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

        let lines = vec![
            Line::from(Span::styled(
                "Keyboard Shortcuts",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("Browse Mode:"),
            Line::from("  j/k    Move in the focused pane"),
            Line::from("  Tab    Switch catalog/selection pane"),
            Line::from("  Space  Toggle the highlighted product"),
            Line::from("  Enter  Open product details"),
            Line::from("  x      Remove from selection"),
            Line::from("  X      Clear the selection"),
            Line::from("  c      Cycle the category filter"),
            Line::from("  /      Search products"),
            Line::from("  i      Ask a follow-up question"),
            Line::from("  g      Generate a routine"),
            Line::from("  q      Quit"),
            Line::from(""),
            Line::from("Search/Chat Mode:"),
            Line::from("  Enter  Submit"),
            Line::from("  Esc    Back to Browse"),
            Line::from(""),
            Line::from("Mouse: click a checkbox to select, a card for"),
            Line::from("details, a selected card to remove it."),
            Line::from(""),
            Line::from(Span::styled(
                "Press ? or Esc to close",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Help ")
            .style(Style::default().fg(Color::Cyan));

        frame.render_widget(
            Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
            area,
        );
    }

    /// Handle a terminal (crossterm) event
    fn handle_terminal_event(&mut self, state: &mut TuiState, event: crossterm::event::Event) {
        match event {
            crossterm::event::Event::Key(key) => {
                // Focus is inside the overlay while it is open
                if state.overlay.is_some() {
                    if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                        state.close_detail();
                    }
                    return;
                }

                if state.show_help {
                    if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
                        state.show_help = false;
                        return;
                    }
                }

                let action = KeyHandler::handle(state.mode, key);
                self.handle_action(state, action);
            }
            crossterm::event::Event::Mouse(mouse) => {
                self.handle_mouse(state, mouse);
            }
            crossterm::event::Event::Resize(_, _) => {
                // Terminal auto-resizes on next draw
            }
            _ => {}
        }
    }

    /// Handle a semantic key action
    fn handle_action(&mut self, state: &mut TuiState, action: Action) {
        match action {
            Action::None => {}

            // Mode transitions
            Action::EnterSearch => state.mode = Mode::Search,
            Action::EnterChat => state.mode = Mode::Chat,
            Action::ExitToBrowse => state.mode = Mode::Browse,

            // Text editing
            Action::InsertChar(c) => state.insert_char(c),
            Action::DeleteChar => state.delete_char(),
            Action::CursorLeft => state.cursor_left(),
            Action::CursorRight => state.cursor_right(),
            Action::CursorStart => state.cursor_home(),
            Action::CursorEnd => state.cursor_end(),

            // Submit
            Action::Submit => match state.mode {
                Mode::Search => state.mode = Mode::Browse,
                Mode::Chat => self.submit_chat(state),
                Mode::Browse => {}
            },

            // Navigation
            Action::MoveUp => state.move_up(),
            Action::MoveDown => state.move_down(),
            Action::SwitchPane => state.switch_pane(),

            // Selection
            Action::ToggleSelected => match state.focus {
                PaneFocus::Catalog => {
                    if state.toggle_highlighted() {
                        self.persist_selection(state);
                    }
                }
                PaneFocus::Selection => {
                    if state.remove_highlighted() {
                        self.persist_selection(state);
                    }
                }
            },
            Action::RemoveSelected => {
                let removed = match state.focus {
                    PaneFocus::Selection => state.remove_highlighted(),
                    PaneFocus::Catalog => {
                        match state.highlighted_catalog_product().map(|p| p.id) {
                            Some(id) if state.selection.contains(id) => {
                                state.selection.remove(id);
                                true
                            }
                            _ => false,
                        }
                    }
                };
                if removed {
                    self.persist_selection(state);
                }
            }
            Action::ClearSelection => {
                if state.clear_selection() {
                    self.persist_selection(state);
                    state.set_flash("Selection cleared");
                }
            }

            // Detail overlay
            Action::OpenDetail => {
                let product = match state.focus {
                    PaneFocus::Catalog => state.highlighted_catalog_product().cloned(),
                    PaneFocus::Selection => state.highlighted_selection_product().cloned(),
                };
                if let Some(product) = product {
                    state.open_detail(product);
                }
            }

            // Filtering
            Action::CycleCategory => state.cycle_category(),

            // Chat
            Action::GenerateRoutine => self.submit_generate(state),

            // Application
            Action::Quit => state.should_quit = true,
            Action::ShowHelp => state.show_help = !state.show_help,
        }
    }

    /// Handle a mouse event using the last rendered layout
    fn handle_mouse(&mut self, state: &mut TuiState, mouse: MouseEvent) {
        let Some(layout) = self.last_layout else {
            return;
        };
        let (x, y) = (mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(crossterm::event::MouseButton::Left) => {
                // A click whose target is the backdrop (not the overlay
                // content) closes the overlay
                if let Some(overlay) = self.last_overlay {
                    if !rect_contains(overlay, x, y) {
                        state.close_detail();
                    }
                    return;
                }
                if state.show_help {
                    state.show_help = false;
                    return;
                }

                if rect_contains(layout.catalog, x, y) {
                    self.click_catalog(state, layout.catalog, x, y);
                } else if rect_contains(layout.selection, x, y) {
                    self.click_selection(state, layout.selection, y);
                }
            }
            MouseEventKind::ScrollUp if rect_contains(layout.chat, x, y) => {
                state.scroll_up();
            }
            MouseEventKind::ScrollDown if rect_contains(layout.chat, x, y) => {
                state.scroll_down();
            }
            _ => {}
        }
    }

    /// Checkbox clicks toggle; clicks elsewhere on the card open details.
    fn click_catalog(&mut self, state: &mut TuiState, area: Rect, x: u16, y: u16) {
        let visible_rows = area.height.saturating_sub(2) as usize;
        let offset = catalog::scroll_offset(state.catalog_cursor, visible_rows);
        let Some(index) = row_index(area, offset, y) else {
            return;
        };

        let Some(product) = state.visible_products().get(index).copied().cloned() else {
            return;
        };

        state.focus = PaneFocus::Catalog;
        state.catalog_cursor = index;

        if x < area.x + 1 + catalog::CHECKBOX_WIDTH {
            if state.toggle_id(product.id) {
                self.persist_selection(state);
            }
        } else {
            state.open_detail(product);
        }
    }

    /// Selection cards are removable: a click removes the card.
    fn click_selection(&mut self, state: &mut TuiState, area: Rect, y: u16) {
        let visible_rows = area.height.saturating_sub(3) as usize;
        let offset = catalog::scroll_offset(state.selection_cursor, visible_rows);
        let Some(index) = row_index(area, offset, y) else {
            return;
        };

        state.focus = PaneFocus::Selection;
        if index < state.selection_resolved().len() {
            state.selection_cursor = index;
            if state.remove_highlighted() {
                self.persist_selection(state);
            }
        }
    }

    /// Submit the chat form. The input control is cleared on every
    /// submission regardless of outcome.
    fn submit_chat(&mut self, state: &mut TuiState) {
        if state.is_generating {
            state.set_flash(BUSY_MESSAGE);
            return;
        }

        let input = state.take_chat_input();
        if input.trim().is_empty() {
            return;
        }
        let _ = self.cmd_tx.send(TuiCommand::Ask(input));
    }

    /// Request a routine for the resolved selection.
    fn submit_generate(&mut self, state: &mut TuiState) {
        if state.is_generating {
            state.set_flash(BUSY_MESSAGE);
            return;
        }

        let selected: Vec<_> = state
            .selection_resolved()
            .into_iter()
            .cloned()
            .collect();
        let _ = self.cmd_tx.send(TuiCommand::GenerateRoutine(selected));
    }

    /// Persist the full selection after a mutation (last-write-wins).
    fn persist_selection(&self, state: &TuiState) {
        self.selection_store.save(&state.selection);
    }
}

/// Background controller task.
///
/// Owns the [`ChatController`] and processes commands sequentially, which
/// serializes transcript mutations.
async fn controller_task(
    mut controller: ChatController,
    mut cmd_rx: mpsc::UnboundedReceiver<TuiCommand>,
) {
    while let Some(cmd) = cmd_rx.recv().await {
        match cmd {
            TuiCommand::GenerateRoutine(products) => {
                controller.generate_routine(&products).await;
            }
            TuiCommand::Ask(input) => {
                controller.ask(&input).await;
            }
        }
    }
}

fn rect_contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}

/// Map a click row inside a bordered pane to a content index.
fn row_index(area: Rect, offset: usize, y: u16) -> Option<usize> {
    let top = area.y + 1;
    let bottom = area.y + area.height.saturating_sub(1);
    if y < top || y >= bottom {
        return None;
    }
    Some(offset + (y - top) as usize)
}
