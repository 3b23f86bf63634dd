//! Detail view popup for a single record, rendered over the grid.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::api::ImageRecord;
use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{ACCENT, HEADER_TEXT, POPUP_BORDER};

pub fn draw_modal(frame: &mut Frame<'_>, body: Rect, record: &ImageRecord) {
    let text_style = Style::default().fg(HEADER_TEXT);
    let count = |value: Option<i64>| {
        value
            .map(|n| n.to_string())
            .unwrap_or_else(|| "N/A".to_string())
    };

    let mut lines = Vec::new();
    if let Some(url) = &record.preview_url {
        lines.push(Line::from(vec![
            Span::styled("Preview: ", text_style),
            Span::styled(url.clone(), Style::default().fg(ACCENT)),
        ]));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        format!("Views: {}", count(record.views)),
        text_style,
    )));
    lines.push(Line::from(Span::styled(
        format!("Downloads: {}", count(record.downloads)),
        text_style,
    )));
    lines.push(Line::from(Span::styled(
        format!("Collections: {}", count(record.collections)),
        text_style,
    )));
    lines.push(Line::from(Span::styled(
        format!("Likes: {}", count(record.likes)),
        text_style,
    )));
    if let Some(user) = &record.user {
        lines.push(Line::from(Span::styled(format!("User: {user}"), text_style)));
    }
    if let Some(tags) = &record.tags {
        lines.push(Line::from(Span::styled(format!("Tags: {tags}"), text_style)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Esc: Close", text_style)));

    let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let popup_width = content_width.saturating_add(4).max(36);
    let popup_height = lines.len().saturating_add(2) as u16;
    let area = centered_rect_by_size(body, popup_width, popup_height);

    frame.render_widget(Clear, area);
    let popup = Block::default()
        .title(Span::styled(
            format!("Image #{}", record.id),
            Style::default().fg(ACCENT),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(lines).block(popup), area);
}
