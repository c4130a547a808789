use std::time::{Duration, Instant};

use skillchart_core::chart::Reveal;
use skillchart_core::{text, BatchOutcome, ChartStyle, Locale, SkillBoard, UiText, ViewSettings};
use tracing::{debug, warn};

use crate::app::actions::{ExportActions, ExportFormat};

pub const PAGE_SIZE: usize = 10;

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub board: SkillBoard,
    pub settings: ViewSettings,
    pub selected_row: usize,
    pub show_help: bool,
    pub status_message: String,
    pub status_is_error: bool,
    pub animation_counter: f64,
    pub animation_paused: bool,
    pub last_frame: Instant,
    /// Time since the board last changed, frozen while paused.
    pub reveal_elapsed_ms: u64,
    seen_revision: u64,
    pub pending_export: Option<ExportFormat>,
    pub exports: ExportActions,
}

impl App {
    pub fn new(board: SkillBoard, settings: ViewSettings, exports: ExportActions) -> Self {
        let seen_revision = board.revision();
        Self {
            running: true,
            board,
            settings,
            selected_row: 0,
            show_help: false,
            status_message: String::new(),
            status_is_error: false,
            animation_counter: 0.0,
            animation_paused: false,
            last_frame: Instant::now(),
            reveal_elapsed_ms: u64::MAX,
            seen_revision,
            pending_export: None,
            exports,
        }
    }

    pub const fn locale(&self) -> Locale {
        self.settings.locale
    }

    pub fn update(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.advance(delta);
    }

    pub fn advance(&mut self, delta: Duration) {
        if self.board.revision() != self.seen_revision {
            self.seen_revision = self.board.revision();
            self.reveal_elapsed_ms = 0;
        }

        if self.animation_paused {
            return;
        }

        // Cycles between 0 and 2*PI
        self.animation_counter += delta.as_secs_f64() * 2.0;
        if self.animation_counter > 2.0 * std::f64::consts::PI {
            self.animation_counter -= 2.0 * std::f64::consts::PI;
        }

        let step = u64::try_from(delta.as_millis()).unwrap_or(u64::MAX);
        self.reveal_elapsed_ms = self.reveal_elapsed_ms.saturating_add(step);
    }

    pub fn reveal(&self) -> Reveal<'_> {
        Reveal::new(self.board.last_change())
    }

    pub fn skill_count(&self) -> usize {
        self.board.skills().len()
    }

    pub fn toggle_selected(&mut self) {
        match self.board.toggle(self.selected_row) {
            Ok(outcome) => {
                debug!(row = self.selected_row, delta = outcome.delta, "toggled from table");
                self.status_message.clear();
            }
            Err(error) => self.set_error(error.to_string()),
        }
    }

    pub fn toggle_all(&mut self) {
        let outcome = self.board.batch_toggle();
        let key = match outcome {
            BatchOutcome::Activated => UiText::ActivateAll,
            BatchOutcome::Deactivated => UiText::DeactivateAll,
        };
        self.set_status(text(key, self.locale()));
    }

    pub fn select_category(&mut self, index: usize) {
        if index == self.board.category_index() {
            return;
        }
        match self.board.select_category(index) {
            Ok(()) => self.after_category_switch(),
            Err(error) => warn!(%error, "category selection ignored"),
        }
    }

    fn after_category_switch(&mut self) {
        self.selected_row = 0;
        self.status_message.clear();
        self.status_is_error = false;
    }

    pub fn select_next_row(&mut self) {
        self.selected_row = (self.selected_row + 1).min(self.last_row());
    }

    pub fn select_previous_row(&mut self) {
        self.selected_row = self.selected_row.saturating_sub(1);
    }

    pub fn page_down(&mut self) {
        self.selected_row = (self.selected_row + PAGE_SIZE).min(self.last_row());
    }

    pub fn page_up(&mut self) {
        self.selected_row = self.selected_row.saturating_sub(PAGE_SIZE);
    }

    pub fn select_first_row(&mut self) {
        self.selected_row = 0;
    }

    pub fn select_last_row(&mut self) {
        self.selected_row = self.last_row();
    }

    fn last_row(&self) -> usize {
        self.skill_count().saturating_sub(1)
    }

    pub fn toggle_locale(&mut self) {
        let locale = self.settings.toggle_locale();
        self.set_status(locale.label());
    }

    pub fn toggle_dark_mode(&mut self) {
        self.settings.toggle_dark_mode();
        self.set_status(self.settings.dark_mode_text());
    }

    pub fn toggle_chart_style(&mut self) -> ChartStyle {
        let style = self.settings.toggle_chart_style();
        self.set_status(style.label(self.locale()));
        style
    }

    pub fn toggle_animation_pause(&mut self) {
        self.animation_paused = !self.animation_paused;
    }

    pub fn request_export(&mut self, format: ExportFormat) {
        if self.pending_export.is_none() {
            self.pending_export = Some(format);
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_is_error = false;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_is_error = true;
    }
}
