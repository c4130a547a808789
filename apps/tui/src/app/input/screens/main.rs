use crate::app::actions::ExportFormat;
use crate::app::input::helpers::{wrap_decrement, wrap_increment};
use crate::app::state::App;
use crossterm::event::KeyCode;

pub fn handle_main_input(app: &mut App, key: KeyCode) {
    let categories = app.board.catalog().len();
    let current = app.board.category_index();

    match key {
        KeyCode::Left | KeyCode::BackTab => {
            app.select_category(wrap_decrement(current, categories));
        }
        KeyCode::Right | KeyCode::Tab => {
            app.select_category(wrap_increment(current, categories));
        }
        KeyCode::Char(digit @ '1'..='9') => {
            if let Some(index) = digit.to_digit(10).and_then(|d| usize::try_from(d).ok()) {
                if index <= categories {
                    app.select_category(index - 1);
                }
            }
        }
        KeyCode::Up => app.select_previous_row(),
        KeyCode::Down => app.select_next_row(),
        KeyCode::PageUp => app.page_up(),
        KeyCode::PageDown => app.page_down(),
        KeyCode::Home => app.select_first_row(),
        KeyCode::End => app.select_last_row(),
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_selected(),
        KeyCode::Char('a') => app.toggle_all(),
        KeyCode::Char('l') => app.toggle_locale(),
        KeyCode::Char('d') => app.toggle_dark_mode(),
        KeyCode::Char('c') => {
            app.toggle_chart_style();
        }
        KeyCode::Char('s') => app.request_export(ExportFormat::Svg),
        KeyCode::Char('e') => app.request_export(ExportFormat::Json),
        KeyCode::Char('q') => app.running = false,
        _ => {}
    }
}
