use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE: &str = "skillchart.log";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// The terminal UI owns stdout, so logs go to a file.
    File,
    Stderr,
}

/// Scoped to our own crates so dependency chatter stays out of the log.
pub const fn default_directive(debug: bool) -> &'static str {
    if debug {
        "skillchart=debug,skillchart_core=debug"
    } else {
        "skillchart=info,skillchart_core=info"
    }
}

/// `RUST_LOG` wins over the `--debug`/`DEBUG` default.
pub fn init(target: LogTarget, log_dir: &Path, debug: bool) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(debug)));

    let writer = match target {
        LogTarget::Stderr => BoxMakeWriter::new(std::io::stderr),
        LogTarget::File => {
            std::fs::create_dir_all(log_dir)
                .wrap_err_with(|| format!("Failed to create log dir {}", log_dir.display()))?;
            let path = log_dir.join(LOG_FILE);
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .wrap_err_with(|| format!("Failed to open log file {}", path.display()))?;
            BoxMakeWriter::new(Mutex::new(file))
        }
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(writer)
        .with_ansi(target == LogTarget::Stderr)
        .try_init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_directive_is_scoped_to_our_crates() {
        assert_eq!(
            default_directive(false),
            "skillchart=info,skillchart_core=info"
        );
        assert_eq!(
            default_directive(true),
            "skillchart=debug,skillchart_core=debug"
        );
    }

    #[test]
    fn default_directive_parses_as_a_filter() {
        for debug in [false, true] {
            let filter = EnvFilter::try_new(default_directive(debug));
            assert!(filter.is_ok());
        }
    }
}
