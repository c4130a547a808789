use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use skillchart::app::{App, ExportActions};
use skillchart::cli::CliArgs;
use skillchart::config::AppConfig;
use skillchart::event::{self, HeadlessOptions};
use skillchart::logging::{self, LogTarget};
use skillchart::terminal;
use skillchart_core::{SkillBoard, ViewSettings};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();
    let config = AppConfig::from_env()?;

    // The TUI owns the screen, so logs only go to stderr when there is none
    let interactive = !args.headless && is_terminal();
    let target = if interactive {
        LogTarget::File
    } else {
        LogTarget::Stderr
    };
    logging::init(target, &config.log_dir, config.debug)?;

    let catalog = config.load_catalog()?;
    let mut board = SkillBoard::new(catalog, config.switch_policy);
    if let Some(category) = &config.category {
        board
            .select_category_by_id(category)
            .wrap_err_with(|| format!("Cannot open category {category}"))?;
    }
    info!(category = board.category_id(), locale = config.locale.code(), "starting skillchart");

    let settings = ViewSettings::new(config.locale);
    let mut app = App::new(board, settings, ExportActions::new(config.export_dir.clone()));

    if !interactive {
        let options = HeadlessOptions {
            json: args.json,
            svg_path: args.svg.as_ref().map(PathBuf::from),
        };
        return event::run_headless(&app, &options).await;
    }

    // Setup terminal
    let mut terminal = terminal::setup()?;

    // Run the application
    let result = event::run(&mut terminal, &mut app).await;

    // Restore terminal
    terminal::cleanup(true, true);

    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
