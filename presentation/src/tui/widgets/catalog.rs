//! Catalog widget — the filtered product list with selection checkboxes.

use crate::tui::state::{PaneFocus, TuiState};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use shelfie_domain::EmptyReason;

/// Width of the checkbox cell at the start of each card row. Mouse clicks
/// inside this cell toggle; clicks elsewhere on the row open the detail
/// overlay.
pub const CHECKBOX_WIDTH: u16 = 4;

/// First visible row index so the cursor stays in view.
pub fn scroll_offset(cursor: usize, visible_rows: usize) -> usize {
    if visible_rows == 0 {
        return cursor;
    }
    cursor.saturating_sub(visible_rows - 1)
}

pub struct CatalogWidget<'a> {
    state: &'a TuiState,
}

impl<'a> CatalogWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }

    fn placeholder(&self) -> &'static str {
        match self.state.empty_reason() {
            EmptyReason::NoFilter => "Select a category to view products",
            EmptyReason::NoSearchMatches => "No products match your search",
            EmptyReason::NoCategoryMatches => "No products in this category",
        }
    }
}

impl<'a> Widget for CatalogWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = self.state.focus == PaneFocus::Catalog;
        let border_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let category_label = match self.state.filter.category {
            Some(category) => category.label(),
            None => "All categories",
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Products · {} ", category_label))
            .border_style(border_style);

        let visible = self.state.visible_products();
        if visible.is_empty() {
            let placeholder = Paragraph::new(Line::from(Span::styled(
                self.placeholder(),
                Style::default().fg(Color::DarkGray),
            )))
            .block(block);
            placeholder.render(area, buf);
            return;
        }

        let visible_rows = area.height.saturating_sub(2) as usize;
        let offset = scroll_offset(self.state.catalog_cursor, visible_rows);

        let mut lines: Vec<Line> = Vec::new();
        for (index, product) in visible.iter().enumerate().skip(offset).take(visible_rows) {
            let checked = self.state.selection.contains(product.id);
            let marker = if checked { "[x]" } else { "[ ]" };
            let marker_style = if checked {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::DarkGray)
            };

            let mut row_style = Style::default();
            if focused && index == self.state.catalog_cursor {
                row_style = row_style.bg(Color::DarkGray).add_modifier(Modifier::BOLD);
            }

            lines.push(
                Line::from(vec![
                    Span::styled(format!("{} ", marker), marker_style),
                    Span::raw(product.name.clone()),
                    Span::styled(
                        format!("  {}", product.brand),
                        Style::default().fg(Color::Gray),
                    ),
                ])
                .style(row_style),
            );
        }

        Paragraph::new(lines).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_offset_keeps_cursor_visible() {
        assert_eq!(scroll_offset(0, 10), 0);
        assert_eq!(scroll_offset(9, 10), 0);
        assert_eq!(scroll_offset(10, 10), 1);
        assert_eq!(scroll_offset(25, 10), 16);
    }

    #[test]
    fn test_scroll_offset_with_degenerate_height() {
        assert_eq!(scroll_offset(5, 0), 5);
        assert_eq!(scroll_offset(5, 1), 5);
    }
}
