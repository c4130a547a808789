use crate::app::state::App;
use crossterm::event::KeyCode;

pub fn handle_help_toggle(app: &mut App, key: KeyCode) -> bool {
    if matches!(key, KeyCode::F(1) | KeyCode::Char('?')) {
        app.show_help = !app.show_help;
        return true;
    }

    if app.show_help {
        match key {
            KeyCode::Esc => app.show_help = false,
            KeyCode::Char('q') => app.running = false,
            _ => {}
        }
        return true;
    }

    false
}

pub fn handle_animation_toggle(app: &mut App, key: KeyCode) -> bool {
    if key == KeyCode::Char('p') {
        app.toggle_animation_pause();
        return true;
    }

    false
}
