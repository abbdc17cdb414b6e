//! Chat widget — conversation history and inline errors.

use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct ChatWidget<'a> {
    state: &'a TuiState,
}

impl<'a> ChatWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }

    fn format_messages(&self) -> Text<'_> {
        let mut lines: Vec<Line> = Vec::new();

        if self.state.messages.is_empty() && !self.state.is_generating {
            lines.push(Line::from(Span::styled(
                "Select products and press g to generate a routine.",
                Style::default().fg(Color::DarkGray),
            )));
            return Text::from(lines);
        }

        for msg in &self.state.messages {
            let role_style = Style::default()
                .fg(msg.role.color())
                .add_modifier(Modifier::BOLD);

            lines.push(Line::from(Span::styled(
                format!("{}: ", msg.role.label()),
                role_style,
            )));

            for content_line in msg.content.lines() {
                lines.push(Line::from(format!("  {}", content_line)));
            }
            lines.push(Line::from(""));
        }

        // Waiting indicator while a request is in flight
        if self.state.is_generating {
            lines.push(Line::from(Span::styled(
                "Advisor: ▌",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )));
        }

        Text::from(lines)
    }
}

impl<'a> Widget for ChatWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = self.format_messages();
        let visible_height = area.height.saturating_sub(2); // borders
        let content_width = area.width.saturating_sub(2);

        // Paragraph's own line_count() matches the wrapping used during
        // rendering, so the scroll math lines up exactly.
        let paragraph = Paragraph::new(text).wrap(Wrap { trim: false });
        let total_lines = paragraph.line_count(content_width) as u16;

        // scroll_offset=0 means "show bottom"
        let scroll = if total_lines > visible_height {
            let max_scroll = total_lines - visible_height;
            let offset = (self.state.chat_scroll as u16).min(max_scroll);
            max_scroll - offset
        } else {
            0
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Routine Chat ")
            .border_style(Style::default().fg(Color::DarkGray));

        paragraph.block(block).scroll((scroll, 0)).render(area, buf);
    }
}
