//! Input widget — the shared bottom input line.
//!
//! Shows the live search buffer in Search mode, the chat form in Chat mode,
//! and a key hint in Browse mode.

use crate::tui::mode::Mode;
use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct InputWidget<'a> {
    state: &'a TuiState,
}

impl<'a> InputWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for InputWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (title, line) = match self.state.mode {
            Mode::Search => (
                " Search ",
                cursor_line(&self.state.filter.search, self.state.search_cursor),
            ),
            Mode::Chat => (
                " Ask the advisor ",
                cursor_line(&self.state.chat_input, self.state.chat_cursor),
            ),
            Mode::Browse => (
                " Input ",
                Line::from(Span::styled(
                    "/ search · i chat · Space select · g generate routine · ? help",
                    Style::default().fg(Color::DarkGray),
                )),
            ),
        };

        let border_color = if self.state.mode == Mode::Browse {
            Color::DarkGray
        } else {
            self.state.mode.color()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(border_color));

        Paragraph::new(line).block(block).render(area, buf);
    }
}

/// Build the input line with a visible cursor cell.
fn cursor_line(input: &str, cursor: usize) -> Line<'static> {
    let (before, after) = input.split_at(cursor.min(input.len()));
    let mut chars = after.chars();
    let at_cursor = chars.next().map(|c| c.to_string()).unwrap_or(" ".into());
    let rest: String = chars.collect();

    Line::from(vec![
        Span::raw(before.to_string()),
        Span::styled(at_cursor, Style::default().add_modifier(Modifier::REVERSED)),
        Span::raw(rest),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_line_marks_position() {
        let line = cursor_line("abc", 1);
        assert_eq!(line.spans.len(), 3);
        assert_eq!(line.spans[0].content, "a");
        assert_eq!(line.spans[1].content, "b");
        assert_eq!(line.spans[2].content, "c");
    }

    #[test]
    fn test_cursor_line_at_end_shows_block() {
        let line = cursor_line("ab", 2);
        assert_eq!(line.spans[0].content, "ab");
        assert_eq!(line.spans[1].content, " ");
        assert_eq!(line.spans[2].content, "");
    }
}
