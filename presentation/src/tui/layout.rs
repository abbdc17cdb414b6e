//! Screen layout for the main view.
//!
//! ```text
//! +--------------------------------------------------+
//! | header                                           |
//! +---------------------------+----------------------+
//! |                           | selection            |
//! | catalog                   +----------------------+
//! |                           | chat                 |
//! +---------------------------+----------------------+
//! | input                                            |
//! +--------------------------------------------------+
//! | status bar                                       |
//! +--------------------------------------------------+
//! ```

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Computed rects for every pane of the main view.
#[derive(Debug, Clone, Copy)]
pub struct MainLayout {
    pub header: Rect,
    pub catalog: Rect,
    pub selection: Rect,
    pub chat: Rect,
    pub input: Rect,
    pub status_bar: Rect,
}

impl MainLayout {
    /// Split the full frame into the main view panes.
    pub fn compute(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(rows[1]);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(columns[1]);

        Self {
            header: rows[0],
            catalog: columns[0],
            selection: right[0],
            chat: right[1],
            input: rows[2],
            status_bar: rows[3],
        }
    }

    /// Centered overlay rect covering the given percentages of the frame.
    pub fn centered_overlay(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(area);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(vertical[1])[1]
    }
}
