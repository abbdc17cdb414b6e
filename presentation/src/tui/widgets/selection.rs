//! Selection widget — the chosen products as removable cards.

use super::catalog::scroll_offset;
use crate::tui::state::{PaneFocus, TuiState};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct SelectionWidget<'a> {
    state: &'a TuiState,
}

impl<'a> SelectionWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for SelectionWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = self.state.focus == PaneFocus::Selection;
        let border_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let resolved = self.state.selection_resolved();
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Selected ({}) ", resolved.len()))
            .border_style(border_style);

        if resolved.is_empty() {
            Paragraph::new(Line::from(Span::styled(
                "No products selected yet",
                Style::default().fg(Color::DarkGray),
            )))
            .block(block)
            .render(area, buf);
            return;
        }

        // One row per card plus the clear-all affordance at the bottom
        let visible_rows = area.height.saturating_sub(3) as usize;
        let offset = scroll_offset(self.state.selection_cursor, visible_rows);

        let mut lines: Vec<Line> = Vec::new();
        for (index, product) in resolved.iter().enumerate().skip(offset).take(visible_rows) {
            let mut row_style = Style::default();
            if focused && index == self.state.selection_cursor {
                row_style = row_style.bg(Color::DarkGray).add_modifier(Modifier::BOLD);
            }
            lines.push(
                Line::from(vec![
                    Span::styled("✕ ", Style::default().fg(Color::Red)),
                    Span::raw(product.name.clone()),
                    Span::styled(
                        format!("  {}", product.brand),
                        Style::default().fg(Color::Gray),
                    ),
                ])
                .style(row_style),
            );
        }

        // The bulk-clear affordance exists only while the list is non-empty
        if self.state.show_clear_all() {
            lines.push(Line::from(Span::styled(
                "Shift+X clears all",
                Style::default().fg(Color::Red).add_modifier(Modifier::DIM),
            )));
        }

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
