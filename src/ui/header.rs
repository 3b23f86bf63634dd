use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_OK};

const SPINNER: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠇"];

/// Title bar: status glyph, app name, current category and page.
pub fn header_widget(category: &str, page: u32, loading: bool, tick: u64) -> Paragraph<'static> {
    let text = Style::default().fg(HEADER_TEXT);
    let separator = Style::default().fg(HEADER_SEPARATOR);

    let status = if loading {
        SPINNER[(tick as usize) % SPINNER.len()]
    } else {
        "●"
    };

    let line = Line::from(vec![
        Span::raw("  "),
        Span::styled(status, Style::default().fg(STATUS_OK)),
        Span::raw("  "),
        Span::styled("pixgrid", text),
        Span::styled("  │  ", separator),
        Span::styled(category.to_string(), text),
        Span::styled("  │  ", separator),
        Span::styled(format!("page {page}"), text),
    ]);

    Paragraph::new(line).block(
        Block::default()
            .borders(Borders::TOP | Borders::BOTTOM)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}
