//! Detail overlay widget — full attributes of one product.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};
use shelfie_domain::Product;

pub struct DetailWidget<'a> {
    product: &'a Product,
}

impl<'a> DetailWidget<'a> {
    pub fn new(product: &'a Product) -> Self {
        Self { product }
    }
}

impl<'a> Widget for DetailWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.product;

        let mut lines = vec![
            Line::from(Span::styled(
                p.name.clone(),
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Brand:    ", Style::default().fg(Color::Gray)),
                Span::raw(p.brand.clone()),
            ]),
            Line::from(vec![
                Span::styled("Category: ", Style::default().fg(Color::Gray)),
                Span::raw(p.category.label()),
            ]),
            Line::from(vec![
                Span::styled("Image:    ", Style::default().fg(Color::Gray)),
                Span::raw(p.image.clone()),
            ]),
            Line::from(""),
        ];

        for description_line in p.description.lines() {
            lines.push(Line::from(description_line.to_string()));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Esc or click outside to close",
            Style::default().fg(Color::DarkGray),
        )));

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Product Details ")
            .border_style(Style::default().fg(Color::Magenta));

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
