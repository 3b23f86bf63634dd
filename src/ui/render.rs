use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::ui::app::{App, Focus};
use crate::ui::footer::footer_widget;
use crate::ui::grid::draw_grid;
use crate::ui::header::header_widget;
use crate::ui::layout::layout_regions;
use crate::ui::modal::draw_modal;
use crate::ui::sort::SortField;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR,
};

const SORT_PANEL_WIDTH: u16 = 28;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header_area, body, footer_area) = layout_regions(area);

    frame.render_widget(
        header_widget(&app.category(), app.page(), app.loading(), app.tick()),
        header_area,
    );
    frame.render_widget(footer_widget(footer_area), footer_area);

    frame.render_widget(Clear, body);
    let [search_area, content] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(body);
    draw_search(frame, search_area, app);

    let [panel_area, grid_area] =
        Layout::horizontal([Constraint::Length(SORT_PANEL_WIDTH), Constraint::Min(0)])
            .areas(content);
    draw_sort_panel(frame, panel_area, app);

    let records = app.sorted_records();
    if app.loading() {
        draw_status_line(frame, grid_area, "Loading…", HEADER_TEXT);
    } else if records.is_empty() && app.exhausted() {
        draw_status_line(frame, grid_area, "No more images", STATUS_ERROR);
    } else {
        draw_grid(frame, grid_area, &records, app.selected_card());
    }

    if let Some(record) = app.modal() {
        draw_modal(frame, body, record);
    }
}

fn draw_search(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let focused = app.focus() == Focus::Search;
    let border = if focused { ACCENT } else { GLOBAL_BORDER };
    let input = Paragraph::new(Line::from(Span::styled(
        app.search_input().to_string(),
        Style::default().fg(HEADER_TEXT),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title("Category"),
    );
    frame.render_widget(input, area);

    if focused && area.width > 2 && area.height > 2 {
        let cursor_x = area.x + 1 + app.search_input().chars().count().min(usize::from(area.width) - 2) as u16;
        frame.set_cursor_position((cursor_x, area.y + 1));
    }
}

fn draw_sort_panel(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let focused = app.focus() == Focus::SortPanel;
    let border = if focused { ACCENT } else { GLOBAL_BORDER };

    let mut lines = Vec::new();
    for (idx, field) in SortField::all().iter().enumerate() {
        let marker = if *field == app.sort_field() {
            "(●) "
        } else {
            "( ) "
        };
        let mut line = Line::from(vec![
            Span::styled(marker, Style::default().fg(ACCENT)),
            Span::styled(field.label(), Style::default().fg(HEADER_TEXT)),
        ]);
        if focused && idx == app.sort_cursor() {
            line = line.style(Style::default().bg(ACTIVE_HIGHLIGHT));
        }
        lines.push(line);
    }

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title("Sort"),
    );
    frame.render_widget(panel, area);
}

fn draw_status_line(frame: &mut Frame<'_>, area: Rect, text: &str, color: ratatui::style::Color) {
    let message = Paragraph::new(Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(color),
    )))
    .alignment(Alignment::Center);
    let centered = Rect {
        x: area.x,
        y: area.y + area.height / 2,
        width: area.width,
        height: 1.min(area.height),
    };
    frame.render_widget(message, centered);
}
