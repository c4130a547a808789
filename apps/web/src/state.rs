use ratzilla::event::KeyCode;
use skillchart_core::{Catalog, SkillBoard, SwitchPolicy, ViewSettings};

use crate::animation::{advance_animation_counter, AnimationMode, RevealClock};

const PAGE_SIZE: usize = 10;

pub struct WebState {
    pub board: SkillBoard,
    pub settings: ViewSettings,
    pub selected_row: usize,
    pub show_help: bool,
    pub animation_mode: AnimationMode,
    pub animation_counter: f64,
    pub last_tick: Option<f64>,
    pub reveal: RevealClock,
    /// Set once `catalog.json` replaced the built-in list.
    pub fetched_catalog: bool,
}

impl WebState {
    pub fn new(catalog: Catalog) -> Self {
        let board = SkillBoard::new(catalog, SwitchPolicy::Reset);
        let reveal = RevealClock::new(board.revision());
        Self {
            board,
            settings: ViewSettings::default(),
            selected_row: 0,
            show_help: false,
            animation_mode: AnimationMode::Running,
            animation_counter: 0.0,
            last_tick: None,
            reveal,
            fetched_catalog: false,
        }
    }

    /// Swaps in a fetched catalog, keeping the view settings.
    pub fn replace_catalog(&mut self, catalog: Catalog) {
        self.board = SkillBoard::new(catalog, self.board.policy());
        self.reveal = RevealClock::new(self.board.revision());
        self.selected_row = 0;
        self.fetched_catalog = true;
    }

    pub fn tick(&mut self, now_seconds: f64) {
        self.reveal.advance(
            self.board.revision(),
            self.last_tick,
            now_seconds,
            self.animation_mode,
        );
        let (counter, last_tick) = advance_animation_counter(
            self.animation_counter,
            self.last_tick,
            now_seconds,
            self.animation_mode,
        );
        self.animation_counter = counter;
        self.last_tick = last_tick;
    }

    fn last_row(&self) -> usize {
        self.board.skills().len().saturating_sub(1)
    }

    fn select_category(&mut self, index: usize) {
        if index == self.board.category_index() {
            return;
        }
        if self.board.select_category(index).is_ok() {
            self.selected_row = 0;
        }
    }

    pub fn handle_key(&mut self, code: KeyCode) {
        if self.show_help {
            if matches!(code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::F(1)) {
                self.show_help = false;
            }
            return;
        }

        let categories = self.board.catalog().len();
        let current = self.board.category_index();

        match code {
            KeyCode::Char('?') | KeyCode::F(1) => self.show_help = true,
            KeyCode::Left if categories > 0 => {
                self.select_category(if current == 0 { categories - 1 } else { current - 1 });
            }
            KeyCode::Right | KeyCode::Tab if categories > 0 => {
                self.select_category((current + 1) % categories);
            }
            KeyCode::Char(digit @ '1'..='9') => {
                if let Some(index) = digit.to_digit(10).and_then(|d| usize::try_from(d).ok()) {
                    if index <= categories {
                        self.select_category(index - 1);
                    }
                }
            }
            KeyCode::Up => self.selected_row = self.selected_row.saturating_sub(1),
            KeyCode::Down => self.selected_row = (self.selected_row + 1).min(self.last_row()),
            KeyCode::PageUp => self.selected_row = self.selected_row.saturating_sub(PAGE_SIZE),
            KeyCode::PageDown => {
                self.selected_row = (self.selected_row + PAGE_SIZE).min(self.last_row());
            }
            KeyCode::Home => self.selected_row = 0,
            KeyCode::End => self.selected_row = self.last_row(),
            KeyCode::Char(' ') | KeyCode::Enter => {
                if let Err(error) = self.board.toggle(self.selected_row) {
                    web_sys::console::warn_1(&error.to_string().into());
                }
            }
            KeyCode::Char('a') => {
                self.board.batch_toggle();
            }
            KeyCode::Char('l') => {
                self.settings.toggle_locale();
            }
            KeyCode::Char('d') => {
                self.settings.toggle_dark_mode();
            }
            KeyCode::Char('c') => {
                self.settings.toggle_chart_style();
            }
            KeyCode::Char('p') => self.animation_mode = self.animation_mode.toggle(),
            _ => {}
        }
    }
}

/// First row to draw so `selected` stays inside `visible` rows.
pub const fn window_start(total: usize, visible: usize, selected: usize) -> usize {
    if total <= visible || selected < visible {
        return 0;
    }
    selected + 1 - visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillchart_core::{ChartStyle, Locale};

    fn state() -> WebState {
        WebState::new(Catalog::builtin().unwrap())
    }

    #[test]
    fn arrows_switch_category_and_reset_selection() {
        let mut state = state();
        state.handle_key(KeyCode::Down);
        assert_eq!(state.selected_row, 1);

        state.handle_key(KeyCode::Left);
        assert_eq!(state.board.category_index(), state.board.catalog().len() - 1);
        assert_eq!(state.selected_row, 0);

        state.handle_key(KeyCode::Right);
        assert_eq!(state.board.category_index(), 0);
    }

    #[test]
    fn digits_jump_to_categories() {
        let mut state = state();
        state.handle_key(KeyCode::Char('3'));
        assert_eq!(state.board.category_id(), "python");
        state.handle_key(KeyCode::Char('9'));
        assert_eq!(state.board.category_id(), "python");
    }

    #[test]
    fn space_toggles_and_a_toggles_everything() {
        let mut state = state();
        state.handle_key(KeyCode::Char('3'));
        assert_eq!(state.board.summary().total, 3);

        state.handle_key(KeyCode::Char(' '));
        assert_eq!(state.board.summary().total, 2);

        state.handle_key(KeyCode::Char('a'));
        assert!(state.board.all_active());
    }

    #[test]
    fn view_keys_flip_settings() {
        let mut state = state();
        state.handle_key(KeyCode::Char('l'));
        state.handle_key(KeyCode::Char('d'));
        state.handle_key(KeyCode::Char('c'));
        assert_eq!(state.settings.locale, Locale::Ko);
        assert!(state.settings.dark_mode);
        assert_eq!(state.settings.chart_style, ChartStyle::Flower);

        state.handle_key(KeyCode::Char('p'));
        assert_eq!(state.animation_mode, AnimationMode::Paused);
    }

    #[test]
    fn help_swallows_other_keys() {
        let mut state = state();
        state.handle_key(KeyCode::Char('?'));
        assert!(state.show_help);

        state.handle_key(KeyCode::Char('a'));
        assert!(!state.board.all_active());

        state.handle_key(KeyCode::Esc);
        assert!(!state.show_help);
    }

    #[test]
    fn tick_starts_reveal_after_a_change() {
        let mut state = state();
        state.tick(1.0);
        assert_eq!(state.reveal.elapsed_ms(), u64::MAX);

        state.handle_key(KeyCode::Char('a'));
        state.tick(1.1);
        assert_eq!(state.reveal.elapsed_ms(), 100);
    }

    #[test]
    fn window_keeps_selection_visible() {
        assert_eq!(window_start(5, 10, 4), 0);
        assert_eq!(window_start(35, 10, 9), 0);
        assert_eq!(window_start(35, 10, 10), 1);
        assert_eq!(window_start(35, 10, 34), 25);
    }
}
