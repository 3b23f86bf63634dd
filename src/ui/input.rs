use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::{App, Focus};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    // The modal traps every key until it is closed.
    if app.modal().is_some() {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('x') | KeyCode::Char('q')) {
            app.close_modal();
        }
        return;
    }

    match app.focus() {
        Focus::Search => handle_search_key(app, key),
        Focus::SortPanel => handle_sort_key(app, key),
        Focus::Grid => handle_grid_key(app, key),
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.set_focus(Focus::Grid),
        KeyCode::Enter => {
            app.commit_search_now();
            app.set_focus(Focus::Grid);
        }
        KeyCode::Backspace => app.on_search_backspace(),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.on_search_char(ch);
        }
        _ => {}
    }
}

fn handle_sort_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('s') => app.set_focus(Focus::Grid),
        KeyCode::Up | KeyCode::Char('k') => app.move_sort_cursor(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_sort_cursor(1),
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.apply_sort_selection();
            app.set_focus(Focus::Grid);
        }
        _ => {}
    }
}

fn handle_grid_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Char('/') => app.set_focus(Focus::Search),
        KeyCode::Char('s') => app.open_sort_panel(),
        KeyCode::Left | KeyCode::Char('p') => app.prev_page(),
        KeyCode::Right | KeyCode::Char('n') => app.next_page(),
        KeyCode::Char('h') => app.move_selection(-1, 0),
        KeyCode::Char('l') => app.move_selection(1, 0),
        KeyCode::Up => app.move_selection(0, -1),
        KeyCode::Down => app.move_selection(0, 1),
        KeyCode::Char('k') => app.move_selection(0, -1),
        KeyCode::Char('j') => app.move_selection(0, 1),
        KeyCode::Enter => app.open_modal(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(ch)
}
