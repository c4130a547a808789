use std::fmt;
use std::path::{Path, PathBuf};

use skillchart_core::{chart_svg, export_file_name, ExportSnapshot, SkillBoard, ViewSettings};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Svg,
    Json,
}

impl ExportFormat {
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Svg => write!(f, "SVG"),
            Self::Json => write!(f, "JSON"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to create export directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Writes the current view to disk. Never touches skill state.
#[derive(Debug, Clone)]
pub struct ExportActions {
    pub export_dir: PathBuf,
}

impl ExportActions {
    pub fn new(export_dir: impl Into<PathBuf>) -> Self {
        Self {
            export_dir: export_dir.into(),
        }
    }

    pub fn render(
        format: ExportFormat,
        board: &SkillBoard,
        settings: &ViewSettings,
        date: &str,
    ) -> Result<String, ExportError> {
        match format {
            ExportFormat::Svg => Ok(chart_svg(board, settings)),
            ExportFormat::Json => Ok(ExportSnapshot::capture(board, settings, date).to_json()?),
        }
    }

    pub fn target_path(
        &self,
        format: ExportFormat,
        board: &SkillBoard,
        settings: &ViewSettings,
        date: &str,
    ) -> PathBuf {
        let label = board
            .category()
            .map_or("", |category| category.label(settings.locale));
        self.export_dir
            .join(export_file_name(label, date, format.extension()))
    }

    pub async fn export(
        &self,
        format: ExportFormat,
        board: &SkillBoard,
        settings: &ViewSettings,
        date: &str,
    ) -> Result<PathBuf, ExportError> {
        let content = Self::render(format, board, settings, date)?;
        let path = self.target_path(format, board, settings, date);
        create_dir(&self.export_dir).await?;
        write_file(&path, content).await?;
        info!(path = %path.display(), %format, "export written");
        Ok(path)
    }
}

pub async fn create_dir(path: &Path) -> Result<(), ExportError> {
    tokio::fs::create_dir_all(path)
        .await
        .map_err(|source| ExportError::CreateDir {
            path: path.to_path_buf(),
            source,
        })
}

pub async fn write_file(path: &Path, content: String) -> Result<(), ExportError> {
    tokio::fs::write(path, content)
        .await
        .map_err(|source| ExportError::Write {
            path: path.to_path_buf(),
            source,
        })
}

pub fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}
