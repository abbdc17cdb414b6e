//! TUI application state
//!
//! Single source of truth for everything the TUI renders. Both the catalog
//! and selection panes derive from the same [`SelectionSet`], so a toggle in
//! one pane is immediately consistent in the other.

use super::mode::Mode;
use shelfie_domain::{
    Category, EmptyReason, FilterState, Product, ProductId, SelectionSet, filter,
};

/// Which pane receives browse-mode navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaneFocus {
    #[default]
    Catalog,
    Selection,
}

/// Central TUI state — owned by the TuiApp select! loop
pub struct TuiState {
    // -- Mode --
    pub mode: Mode,
    pub focus: PaneFocus,

    // -- Catalog --
    pub products: Vec<Product>,
    pub filter: FilterState,
    pub catalog_cursor: usize,

    // -- Selection --
    pub selection: SelectionSet,
    pub selection_cursor: usize,

    // -- Detail overlay (None = hidden, content cleared) --
    pub overlay: Option<Product>,

    // -- Inputs --
    pub search_cursor: usize,
    pub chat_input: String,
    pub chat_cursor: usize,

    // -- Chat panel --
    pub messages: Vec<DisplayMessage>,
    pub chat_scroll: usize,
    pub auto_scroll: bool,
    pub is_generating: bool,

    // -- Overlays & notices --
    pub show_help: bool,
    pub flash_message: Option<(String, std::time::Instant)>,

    // -- Lifecycle --
    pub should_quit: bool,
}

impl Default for TuiState {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            focus: PaneFocus::default(),
            products: Vec::new(),
            filter: FilterState::new(),
            catalog_cursor: 0,
            selection: SelectionSet::new(),
            selection_cursor: 0,
            overlay: None,
            search_cursor: 0,
            chat_input: String::new(),
            chat_cursor: 0,
            messages: Vec::new(),
            chat_scroll: 0,
            auto_scroll: true,
            is_generating: false,
            show_help: false,
            flash_message: None,
            should_quit: false,
        }
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }

    // -- Derived views --

    /// Products visible under the current filter, in catalog order.
    pub fn visible_products(&self) -> Vec<&Product> {
        filter(&self.products, &self.filter)
    }

    /// Why the catalog pane is empty, when it is.
    pub fn empty_reason(&self) -> EmptyReason {
        EmptyReason::for_state(&self.filter)
    }

    /// Selected products resolved against the catalog; stale ids are
    /// silently dropped.
    pub fn selection_resolved(&self) -> Vec<&Product> {
        self.selection.resolve(&self.products)
    }

    /// Whether the bulk clear-all affordance exists. Derived from the
    /// resolved list, so it appears and disappears exactly with its
    /// triggering condition.
    pub fn show_clear_all(&self) -> bool {
        !self.selection_resolved().is_empty()
    }

    pub fn highlighted_catalog_product(&self) -> Option<&Product> {
        self.visible_products().get(self.catalog_cursor).copied()
    }

    pub fn highlighted_selection_product(&self) -> Option<&Product> {
        self.selection_resolved().get(self.selection_cursor).copied()
    }

    // -- Navigation --

    pub fn move_up(&mut self) {
        match self.focus {
            PaneFocus::Catalog => self.catalog_cursor = self.catalog_cursor.saturating_sub(1),
            PaneFocus::Selection => self.selection_cursor = self.selection_cursor.saturating_sub(1),
        }
    }

    pub fn move_down(&mut self) {
        match self.focus {
            PaneFocus::Catalog => {
                let max = self.visible_products().len().saturating_sub(1);
                self.catalog_cursor = (self.catalog_cursor + 1).min(max);
            }
            PaneFocus::Selection => {
                let max = self.selection_resolved().len().saturating_sub(1);
                self.selection_cursor = (self.selection_cursor + 1).min(max);
            }
        }
    }

    pub fn switch_pane(&mut self) {
        self.focus = match self.focus {
            PaneFocus::Catalog => PaneFocus::Selection,
            PaneFocus::Selection => PaneFocus::Catalog,
        };
        self.clamp_cursors();
    }

    fn clamp_cursors(&mut self) {
        let catalog_max = self.visible_products().len().saturating_sub(1);
        self.catalog_cursor = self.catalog_cursor.min(catalog_max);
        let selection_max = self.selection_resolved().len().saturating_sub(1);
        self.selection_cursor = self.selection_cursor.min(selection_max);
    }

    // -- Selection mutations (caller persists afterwards) --

    /// Toggle the highlighted catalog product. Returns `true` when the
    /// selection changed.
    pub fn toggle_highlighted(&mut self) -> bool {
        let Some(id) = self.highlighted_catalog_product().map(|p| p.id) else {
            return false;
        };
        self.selection.toggle(id);
        self.clamp_cursors();
        true
    }

    /// Toggle a product by id (mouse path). Returns `true` when the
    /// selection changed.
    pub fn toggle_id(&mut self, id: ProductId) -> bool {
        if !self.products.iter().any(|p| p.id == id) {
            return false;
        }
        self.selection.toggle(id);
        self.clamp_cursors();
        true
    }

    /// Remove the highlighted entry from the selection pane.
    pub fn remove_highlighted(&mut self) -> bool {
        let Some(id) = self.highlighted_selection_product().map(|p| p.id) else {
            return false;
        };
        self.selection.remove(id);
        self.clamp_cursors();
        true
    }

    /// Clear the whole selection. Returns `true` when it was non-empty.
    pub fn clear_selection(&mut self) -> bool {
        if self.selection.is_empty() {
            return false;
        }
        self.selection.clear();
        self.clamp_cursors();
        true
    }

    // -- Filtering --

    /// Cycle the category filter: none, then each category, then none.
    pub fn cycle_category(&mut self) {
        self.filter.category = match self.filter.category {
            None => Some(Category::ALL[0]),
            Some(current) => {
                let position = Category::ALL.iter().position(|c| *c == current);
                match position {
                    Some(i) if i + 1 < Category::ALL.len() => Some(Category::ALL[i + 1]),
                    _ => None,
                }
            }
        };
        self.catalog_cursor = 0;
    }

    // -- Detail overlay --

    /// Show the overlay for one product and move focus into it.
    pub fn open_detail(&mut self, product: Product) {
        self.overlay = Some(product);
    }

    /// Hide the overlay and clear its content so the next open never shows
    /// stale data.
    pub fn close_detail(&mut self) {
        self.overlay = None;
    }

    // -- Input editing (routes to search or chat buffer by mode) --

    pub fn insert_char(&mut self, c: char) {
        let cursor = self.active_cursor();
        self.active_input_mut().insert(cursor, c);
        *self.active_cursor_mut() += c.len_utf8();
        if self.mode == Mode::Search {
            self.catalog_cursor = 0;
        }
    }

    pub fn delete_char(&mut self) {
        let cursor = self.active_cursor();
        if cursor > 0 {
            let input = self.active_input_mut();
            let prev_char_len = input[..cursor]
                .chars()
                .next_back()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            input.remove(cursor - prev_char_len);
            *self.active_cursor_mut() -= prev_char_len;
            if self.mode == Mode::Search {
                self.catalog_cursor = 0;
            }
        }
    }

    pub fn cursor_left(&mut self) {
        let cursor = self.active_cursor();
        if cursor > 0 {
            let input = self.active_input();
            let prev_char_len = input[..cursor]
                .chars()
                .next_back()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            *self.active_cursor_mut() -= prev_char_len;
        }
    }

    pub fn cursor_right(&mut self) {
        let cursor = self.active_cursor();
        let len = self.active_input().len();
        if cursor < len {
            let input = self.active_input();
            let next_char_len = input[cursor..]
                .chars()
                .next()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            *self.active_cursor_mut() += next_char_len;
        }
    }

    pub fn cursor_home(&mut self) {
        *self.active_cursor_mut() = 0;
    }

    pub fn cursor_end(&mut self) {
        let len = self.active_input().len();
        *self.active_cursor_mut() = len;
    }

    /// Take the chat input contents and clear the control. Called on every
    /// submission regardless of outcome.
    pub fn take_chat_input(&mut self) -> String {
        self.chat_cursor = 0;
        std::mem::take(&mut self.chat_input)
    }

    fn active_input(&self) -> &str {
        match self.mode {
            Mode::Search => &self.filter.search,
            _ => &self.chat_input,
        }
    }

    fn active_input_mut(&mut self) -> &mut String {
        match self.mode {
            Mode::Search => &mut self.filter.search,
            _ => &mut self.chat_input,
        }
    }

    fn active_cursor(&self) -> usize {
        match self.mode {
            Mode::Search => self.search_cursor,
            _ => self.chat_cursor,
        }
    }

    fn active_cursor_mut(&mut self) -> &mut usize {
        match self.mode {
            Mode::Search => &mut self.search_cursor,
            _ => &mut self.chat_cursor,
        }
    }

    // -- Chat panel --

    pub fn push_message(&mut self, msg: DisplayMessage) {
        self.messages.push(msg);
        if self.auto_scroll {
            self.chat_scroll = 0;
        }
    }

    pub fn scroll_up(&mut self) {
        self.auto_scroll = false;
        self.chat_scroll = self.chat_scroll.saturating_add(1);
    }

    pub fn scroll_down(&mut self) {
        if self.chat_scroll > 0 {
            self.chat_scroll -= 1;
        } else {
            self.auto_scroll = true;
        }
    }

    // -- Flash messages --

    pub fn set_flash(&mut self, msg: impl Into<String>) {
        self.flash_message = Some((msg.into(), std::time::Instant::now()));
    }

    /// Clear flash if older than the given duration
    pub fn expire_flash(&mut self, max_age: std::time::Duration) {
        if let Some((_, created)) = &self.flash_message
            && created.elapsed() > max_age
        {
            self.flash_message = None;
        }
    }
}

/// A single entry in the chat panel
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayMessage {
    pub role: MessageRole,
    pub content: String,
}

impl DisplayMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }

    pub fn notice(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Notice,
            content: content.into(),
        }
    }

    /// Inline error shown in the chat panel without becoming part of the
    /// conversation transcript.
    pub fn error(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    User,
    Assistant,
    Notice,
    Error,
}

impl MessageRole {
    pub fn label(&self) -> &'static str {
        match self {
            Self::User => "You",
            Self::Assistant => "Advisor",
            Self::Notice => "Info",
            Self::Error => "Error",
        }
    }

    pub fn color(&self) -> ratatui::style::Color {
        use ratatui::style::Color;
        match self {
            Self::User => Color::Cyan,
            Self::Assistant => Color::Green,
            Self::Notice => Color::Yellow,
            Self::Error => Color::Red,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelfie_domain::Category;

    fn state_with_products() -> TuiState {
        let mut state = TuiState::new();
        state.products = vec![
            Product::new(1, "Micellar Water", "Pure Form", Category::Cleanser, "a.jpg", "gentle"),
            Product::new(2, "Hydra Genius", "Glow Labs", Category::Moisturizer, "b.jpg", "aloe"),
            Product::new(3, "Elnett Spray", "Satin Works", Category::Haircare, "c.jpg", "hold"),
        ];
        state
    }

    #[test]
    fn test_visible_products_follow_filter() {
        let mut state = state_with_products();
        assert_eq!(state.visible_products().len(), 3);

        state.filter.category = Some(Category::Haircare);
        let visible = state.visible_products();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Elnett Spray");
    }

    #[test]
    fn test_toggle_highlighted_updates_both_views() {
        let mut state = state_with_products();
        state.catalog_cursor = 1;

        assert!(state.toggle_highlighted());
        assert!(state.selection.contains(ProductId(2)));
        assert_eq!(state.selection_resolved()[0].name, "Hydra Genius");

        // Toggling again removes it from the selection pane too
        assert!(state.toggle_highlighted());
        assert!(state.selection_resolved().is_empty());
    }

    #[test]
    fn test_clear_all_affordance_tracks_selection() {
        let mut state = state_with_products();
        assert!(!state.show_clear_all());

        state.toggle_id(ProductId(1));
        assert!(state.show_clear_all());

        state.clear_selection();
        assert!(!state.show_clear_all());
    }

    #[test]
    fn test_clear_selection_on_empty_reports_no_change() {
        let mut state = state_with_products();
        assert!(!state.clear_selection());
    }

    #[test]
    fn test_toggle_id_rejects_unknown_products() {
        let mut state = state_with_products();
        assert!(!state.toggle_id(ProductId(99)));
        assert!(state.selection.is_empty());
    }

    #[test]
    fn test_stale_selection_ids_are_dropped_from_view() {
        let mut state = state_with_products();
        state.selection = SelectionSet::from_ids([ProductId(2), ProductId(42)]);

        let resolved = state.selection_resolved();
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].id, ProductId(2));
    }

    #[test]
    fn test_cursor_clamps_to_filtered_list() {
        let mut state = state_with_products();
        state.catalog_cursor = 2;

        state.filter.category = Some(Category::Cleanser);
        state.clamp_cursors();
        assert_eq!(state.catalog_cursor, 0);
    }

    #[test]
    fn test_move_down_stops_at_last_row() {
        let mut state = state_with_products();
        state.move_down();
        state.move_down();
        state.move_down();
        state.move_down();
        assert_eq!(state.catalog_cursor, 2);
    }

    #[test]
    fn test_remove_highlighted_from_selection_pane() {
        let mut state = state_with_products();
        state.toggle_id(ProductId(1));
        state.toggle_id(ProductId(3));
        state.focus = PaneFocus::Selection;
        state.selection_cursor = 1;

        assert!(state.remove_highlighted());
        assert_eq!(state.selection.all(), &[ProductId(1)]);
        assert_eq!(state.selection_cursor, 0);
    }

    #[test]
    fn test_cycle_category_wraps_back_to_none() {
        let mut state = state_with_products();
        assert!(state.filter.category.is_none());

        for expected in Category::ALL {
            state.cycle_category();
            assert_eq!(state.filter.category, Some(expected));
        }
        state.cycle_category();
        assert!(state.filter.category.is_none());
    }

    #[test]
    fn test_search_editing_mutates_filter_live() {
        let mut state = state_with_products();
        state.mode = Mode::Search;
        state.catalog_cursor = 2;

        for c in "aloe".chars() {
            state.insert_char(c);
        }
        assert_eq!(state.filter.search, "aloe");
        // Editing the search resets the cursor to the top of the results
        assert_eq!(state.catalog_cursor, 0);
        assert_eq!(state.visible_products().len(), 1);

        state.delete_char();
        assert_eq!(state.filter.search, "alo");
    }

    #[test]
    fn test_chat_input_is_separate_from_search() {
        let mut state = state_with_products();
        state.mode = Mode::Search;
        state.insert_char('s');

        state.mode = Mode::Chat;
        state.insert_char('q');

        assert_eq!(state.filter.search, "s");
        assert_eq!(state.chat_input, "q");
    }

    #[test]
    fn test_take_chat_input_clears_control() {
        let mut state = TuiState::new();
        state.mode = Mode::Chat;
        state.chat_input = "how often should I use this serum".into();
        state.chat_cursor = state.chat_input.len();

        let taken = state.take_chat_input();
        assert_eq!(taken, "how often should I use this serum");
        assert!(state.chat_input.is_empty());
        assert_eq!(state.chat_cursor, 0);
    }

    #[test]
    fn test_detail_overlay_clears_on_close() {
        let mut state = state_with_products();
        let product = state.products[0].clone();
        state.open_detail(product);
        assert!(state.overlay.is_some());

        state.close_detail();
        assert!(state.overlay.is_none());
    }

    #[test]
    fn test_empty_reason_distinguishes_three_states() {
        let mut state = TuiState::new();
        assert_eq!(state.empty_reason(), EmptyReason::NoFilter);

        state.filter.category = Some(Category::Suncare);
        assert_eq!(state.empty_reason(), EmptyReason::NoCategoryMatches);

        state.filter.search = "zinc".into();
        assert_eq!(state.empty_reason(), EmptyReason::NoSearchMatches);
    }

    #[test]
    fn test_scroll_behavior() {
        let mut state = TuiState::new();
        assert!(state.auto_scroll);

        state.scroll_up();
        assert!(!state.auto_scroll);
        assert_eq!(state.chat_scroll, 1);

        state.scroll_down();
        assert_eq!(state.chat_scroll, 0);
        state.scroll_down();
        assert!(state.auto_scroll);
    }

    #[test]
    fn test_push_message_keeps_bottom_when_auto_scrolling() {
        let mut state = TuiState::new();
        state.chat_scroll = 3;
        state.auto_scroll = true;
        state.push_message(DisplayMessage::assistant("hello"));
        assert_eq!(state.chat_scroll, 0);
    }

    #[test]
    fn test_flash_message() {
        let mut state = TuiState::new();
        state.set_flash("saved");
        assert!(state.flash_message.is_some());

        state.expire_flash(std::time::Duration::from_secs(5));
        assert!(state.flash_message.is_some());
    }
}
