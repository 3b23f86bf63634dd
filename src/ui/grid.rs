//! Card grid over the current page. A moveable selection highlight
//! marks the card whose details Enter opens.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::api::ImageRecord;
use crate::ui::app::GRID_COLUMNS;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT};

pub fn draw_grid(frame: &mut Frame<'_>, area: Rect, records: &[ImageRecord], selected: usize) {
    if records.is_empty() || area.height == 0 {
        return;
    }

    let rows = records.len().div_ceil(GRID_COLUMNS);
    let row_areas =
        Layout::vertical(vec![Constraint::Ratio(1, rows as u32); rows]).split(area);

    for (row_idx, row_area) in row_areas.iter().enumerate() {
        let col_areas = Layout::horizontal(vec![
            Constraint::Ratio(1, GRID_COLUMNS as u32);
            GRID_COLUMNS
        ])
        .split(*row_area);

        for (col_idx, col_area) in col_areas.iter().enumerate() {
            let idx = row_idx * GRID_COLUMNS + col_idx;
            let Some(record) = records.get(idx) else {
                continue;
            };
            draw_card(frame, *col_area, record, idx == selected);
        }
    }
}

fn draw_card(frame: &mut Frame<'_>, area: Rect, record: &ImageRecord, selected: bool) {
    let border_style = if selected {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(GLOBAL_BORDER)
    };
    let text_style = Style::default().fg(HEADER_TEXT);

    let mut lines = Vec::new();
    lines.push(Line::from(Span::styled(
        record.tags.clone().unwrap_or_default(),
        text_style,
    )));
    if let Some(user) = &record.user {
        lines.push(Line::from(Span::styled(format!("by {user}"), text_style)));
    }
    lines.push(Line::from(Span::styled(
        format!(
            "{} views  ♥ {}  ⇣ {}",
            record.views.unwrap_or(0),
            record.likes.unwrap_or(0),
            record.downloads.unwrap_or(0),
        ),
        text_style,
    )));
    if selected {
        // Only the selected card shows the hint.
        lines.push(Line::from(Span::styled(
            " Enter: details ",
            Style::default().fg(HEADER_TEXT).bg(ACTIVE_HIGHLIGHT),
        )));
    }

    let card = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!("#{}", record.id)),
    );
    frame.render_widget(card, area);
}
