use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use skillchart_core::locale::level_label;
use skillchart_core::{chart_svg, text, ExportSnapshot, UiText};
use std::convert::TryFrom;
use std::fmt;
use std::io::Stdout;
use std::path::{Path, PathBuf};
use tracing::{error, info};

use crate::app::actions::{today, write_file, ExportFormat};
use crate::app::{handle_input, App};
use crate::ui;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ExportState {
    Idle,
    Exporting,
    Success,
    Error,
}

impl fmt::Display for ExportState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Exporting => write!(f, "Exporting"),
            Self::Success => write!(f, "Success"),
            Self::Error => write!(f, "Error"),
        }
    }
}

#[derive(Clone, Debug)]
pub enum ExportEvent {
    Start(ExportFormat),
    Success(PathBuf),
    Error(String),
    Reset,
}

impl fmt::Display for ExportEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start(format) => write!(f, "Start({format})"),
            Self::Success(path) => write!(f, "Success({path})", path = path.display()),
            Self::Error(msg) => write!(f, "Error({msg})"),
            Self::Reset => write!(f, "Reset"),
        }
    }
}

#[derive(Debug)]
pub struct StateTransitionError {
    from: ExportState,
    event: ExportEvent,
}

impl fmt::Display for StateTransitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid transition from {} with event {}",
            self.from, self.event
        )
    }
}

impl std::error::Error for StateTransitionError {}

/// One export at a time: Idle -> Exporting -> Success | Error -> Idle.
pub struct ExportMachine {
    state: ExportState,
}

impl ExportMachine {
    pub const fn new(initial_state: ExportState) -> Self {
        Self {
            state: initial_state,
        }
    }

    pub const fn state(&self) -> ExportState {
        self.state
    }

    pub fn process_event(
        &mut self,
        event: &ExportEvent,
        app: &mut App,
    ) -> std::result::Result<(), StateTransitionError> {
        let next_state = NextState::try_from((self.state, event, app))?;
        self.state = next_state.0;
        Ok(())
    }
}

struct NextState(ExportState);

impl NextState {
    const fn new(state: ExportState) -> Self {
        Self(state)
    }
}

impl ExportState {
    const fn next_state(self) -> NextState {
        NextState::new(self)
    }
}

impl TryFrom<(ExportState, &ExportEvent, &mut App)> for NextState {
    type Error = StateTransitionError;

    fn try_from(
        value: (ExportState, &ExportEvent, &mut App),
    ) -> std::result::Result<Self, Self::Error> {
        let (current_state, event, app) = value;

        match (current_state, event) {
            (ExportState::Idle, ExportEvent::Start(format)) => {
                app.set_status(format!("Exporting {format}..."));
                Ok(ExportState::Exporting.next_state())
            }
            (ExportState::Exporting, ExportEvent::Success(path)) => {
                let filename = path
                    .file_name()
                    .and_then(|name| name.to_str())
                    .unwrap_or("unknown");
                let saved = text(UiText::ExportSaved, app.locale());
                app.set_status(format!("{saved}: {filename}"));
                Ok(ExportState::Success.next_state())
            }
            (ExportState::Exporting, ExportEvent::Error(message)) => {
                let failed = text(UiText::ExportFailed, app.locale());
                app.set_error(format!("{failed}: {message}"));
                Ok(ExportState::Error.next_state())
            }
            (ExportState::Success | ExportState::Error, ExportEvent::Reset) => {
                Ok(ExportState::Idle.next_state())
            }
            _ => Err(StateTransitionError {
                from: current_state,
                event: event.clone(),
            }),
        }
    }
}

/// Drives a queued export through the machine. Skill state is never touched.
pub async fn process_pending_export(machine: &mut ExportMachine, app: &mut App) {
    if machine.state() != ExportState::Idle {
        return;
    }
    let Some(format) = app.pending_export.take() else {
        return;
    };

    if let Err(e) = machine.process_event(&ExportEvent::Start(format), app) {
        error!(%e, "export not started");
        return;
    }

    let date = today();
    let outcome = match app
        .exports
        .export(format, &app.board, &app.settings, &date)
        .await
    {
        Ok(path) => ExportEvent::Success(path),
        Err(e) => {
            error!(%e, %format, "export failed");
            ExportEvent::Error(e.to_string())
        }
    };

    if let Err(e) = machine.process_event(&outcome, app) {
        error!(%e, "export state transition rejected");
    }
    if let Err(e) = machine.process_event(&ExportEvent::Reset, app) {
        error!(%e, "export state reset rejected");
    }
}

#[derive(Debug, Clone, Default)]
pub struct HeadlessOptions {
    pub json: bool,
    pub svg_path: Option<PathBuf>,
}

/// Run the application in headless mode (no UI)
pub async fn run_headless(app: &App, options: &HeadlessOptions) -> Result<()> {
    let snapshot = ExportSnapshot::capture(&app.board, &app.settings, today());

    if options.json {
        render_headless_json(&snapshot)?;
    } else {
        render_headless_stats(app, &snapshot);
    }

    if let Some(path) = &options.svg_path {
        write_headless_svg(app, path).await?;
    }

    Ok(())
}

fn render_headless_stats(app: &App, snapshot: &ExportSnapshot) {
    let stats = HeadlessStats::from_snapshot(app, snapshot);

    println!("\nSkillChart");
    println!("==========");
    println!("Category: {} ({})", stats.category, snapshot.category_id);
    println!(
        "Score: {} / {} ({}%)",
        snapshot.summary.total, snapshot.summary.max, snapshot.summary.percentage
    );

    println!("\nBy level:");
    for level in &stats.levels {
        println!(
            "- {}: {} / {} ({} of {} active)",
            level.label, level.achieved, level.possible, level.active, level.total
        );
    }

    println!("\nCategories:");
    for name in &stats.categories {
        println!("- {name}");
    }
}

fn render_headless_json(snapshot: &ExportSnapshot) -> Result<()> {
    let json = snapshot.to_json()?;
    println!("{json}");
    Ok(())
}

async fn write_headless_svg(app: &App, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        crate::app::actions::create_dir(parent).await?;
    }
    write_file(path, chart_svg(&app.board, &app.settings)).await?;
    info!(path = %path.display(), "chart written");
    eprintln!("Chart written to {}", path.display());
    Ok(())
}

struct HeadlessStats {
    category: String,
    levels: Vec<HeadlessLevel>,
    categories: Vec<String>,
}

struct HeadlessLevel {
    label: &'static str,
    achieved: u64,
    possible: u64,
    active: usize,
    total: usize,
}

impl HeadlessStats {
    fn from_snapshot(app: &App, snapshot: &ExportSnapshot) -> Self {
        let locale = app.locale();
        let levels = snapshot
            .breakdown
            .iter()
            .filter(|score| score.total_count > 0)
            .map(|score| HeadlessLevel {
                label: level_label(score.level, locale),
                achieved: score.achieved,
                possible: score.possible,
                active: score.active_count,
                total: score.total_count,
            })
            .collect();

        let categories = app
            .board
            .catalog()
            .categories()
            .iter()
            .map(|category| format!("{} ({})", category.label(locale), category.id))
            .collect();

        Self {
            category: snapshot.category_label.clone(),
            levels,
            categories,
        }
    }
}

/// Run the main application event loop
pub async fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    // Configure event poll timeout (ms)
    const EVENT_POLL_TIMEOUT: u64 = 33;

    let mut export_machine = ExportMachine::new(ExportState::Idle);
    info!(category = app.board.category_id(), "event loop started");

    loop {
        app.update();

        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        if matches!(
            event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            match event::read() {
                Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => {
                    handle_input(app, key.code);
                    if !app.running {
                        break;
                    }
                }
                Ok(Event::Resize(_, _)) => {
                    // Force a redraw after resize
                    if terminal.draw(|f| ui::ui(app, f)).is_err() {
                        // Non-fatal redraw error
                    }
                }
                _ => {}
            }
        }

        if app.pending_export.is_some() {
            process_pending_export(&mut export_machine, app).await;
            if terminal.draw(|f| ui::ui(app, f)).is_err() {
                // Non-fatal redraw error
            }
        }
    }

    info!("event loop finished");
    Ok(())
}
