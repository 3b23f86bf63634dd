use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};

const HINTS: &str = " ←/→: Page │ /: Search │ s: Sort │ Enter: Open │ Esc: Back │ q: Quit";

/// Key hints on the left, crate version on the right.
pub fn footer_widget(area: Rect) -> Paragraph<'static> {
    let version = concat!("v", env!("CARGO_PKG_VERSION"), " ");
    // Pad by char count, not byte count; the hints contain box-drawing
    // characters.
    let inner_width = area.width.saturating_sub(2) as usize;
    let gap = inner_width
        .saturating_sub(HINTS.chars().count())
        .saturating_sub(version.chars().count());

    Paragraph::new(Line::from(vec![
        Span::raw(HINTS),
        Span::raw(" ".repeat(gap)),
        Span::raw(version),
    ]))
    .style(Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}
