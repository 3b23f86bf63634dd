use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

pub fn run(mut app: App, events: EventHandler, tick_rate: Duration) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    app.start();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Input(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            // Redraw happens every loop pass; nothing to track.
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::Fetch(completion)) => app.on_fetch_complete(completion),
            Ok(AppEvent::CategoryCommitted(category)) => app.on_category_committed(category),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
