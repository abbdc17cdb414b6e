//! Status bar widget — mode indicator, busy state, and flash messages.

use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct StatusBarWidget<'a> {
    state: &'a TuiState,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mode = self.state.mode;
        let mut spans = vec![
            Span::styled(
                format!(" {} ", mode.indicator()),
                Style::default()
                    .fg(Color::Black)
                    .bg(mode.color())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
        ];

        if self.state.is_generating {
            spans.push(Span::styled(
                "Generating… ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ));
        }

        if let Some((flash, _)) = &self.state.flash_message {
            spans.push(Span::styled(
                flash.clone(),
                Style::default().fg(Color::Yellow),
            ));
        } else if !self.state.is_generating {
            spans.push(Span::styled(
                "Tab panes · j/k move · Enter details · q quit",
                Style::default().fg(Color::DarkGray),
            ));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
