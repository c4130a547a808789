// Rendering for the single checklist screen and its help popup

pub mod screens;
pub mod theme;
pub mod widgets;

use crate::app::App;
use ratatui::Frame;

pub fn ui(app: &App, f: &mut Frame<'_>) {
    screens::main::render_main(app, f);

    if app.show_help {
        screens::help::render_help_popup(app, f);
    }
}

#[cfg(test)]
mod tests {
    use super::ui;
    use crate::app::{App, ExportActions};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use skillchart_core::{Catalog, ChartStyle, Locale, SkillBoard, SwitchPolicy, ViewSettings};

    fn app() -> App {
        let board = SkillBoard::new(Catalog::builtin().unwrap(), SwitchPolicy::Reset);
        App::new(board, ViewSettings::default(), ExportActions::new("./exports"))
    }

    fn screen_text(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| ui(app, f)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn renders_tabs_score_and_table() {
        let mut app = app();
        app.select_category(2);
        let text = screen_text(&app, 140, 44);
        assert!(text.contains("Python"));
        assert!(text.contains("3 / 7"));
        assert!(text.contains("Beginner"));
    }

    #[test]
    fn table_header_names_every_column() {
        let app = app();
        let text = screen_text(&app, 140, 44);
        for header in ["Active", "Level", "Weight", "Description"] {
            assert!(text.contains(header), "missing header {header}");
        }
    }

    #[test]
    fn renders_flower_dark_korean_and_help() {
        let mut app = app();
        app.settings.locale = Locale::Ko;
        app.settings.dark_mode = true;
        app.settings.chart_style = ChartStyle::Flower;
        app.show_help = true;
        let text = screen_text(&app, 140, 44);
        assert!(text.contains("Help"));
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let app = app();
        let _ = screen_text(&app, 20, 6);
    }
}
