use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::App;
use crate::sort::Algorithm;

/// File written by the export key.
pub const EXPORT_PATH: &str = "sortscope_export.json";

/// Poll for events with a timeout
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // Only react to presses (some terminals also report releases)
    if key.kind == KeyEventKind::Release {
        return;
    }

    // If help is shown, any key closes it
    if app.show_help {
        app.show_help = false;
        return;
    }

    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),

        // Algorithm selection
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.prev_algorithm();
            } else {
                app.next_algorithm();
            }
        }
        KeyCode::BackTab => app.prev_algorithm(),
        KeyCode::Left | KeyCode::Char('h') => app.prev_algorithm(),
        KeyCode::Right | KeyCode::Char('l') => app.next_algorithm(),
        KeyCode::Char(c @ '1'..='4') => {
            let index = c as usize - '1' as usize;
            app.select_algorithm(Algorithm::ALL[index]);
        }

        // Step delay
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up => app.adjust_speed(1),
        KeyCode::Char('-') | KeyCode::Char('_') | KeyCode::Down => app.adjust_speed(-1),

        // Data and playback
        KeyCode::Char('g') => app.generate_data(),
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.start_sorting();
        }
        KeyCode::Char('x') => app.cancel_sorting(),

        // Help
        KeyCode::Char('?') => app.toggle_help(),

        // Export
        KeyCode::Char('e') => {
            let export_path = PathBuf::from(EXPORT_PATH);
            match app.export_state(&export_path) {
                Ok(()) => {
                    app.set_status_message(format!("Exported to {}", export_path.display()));
                }
                Err(e) => {
                    app.set_error_message(format!("Export failed: {}", e));
                }
            }
        }

        _ => {}
    }
}
