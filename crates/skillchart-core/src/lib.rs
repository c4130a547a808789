// Core model shared by the terminal and web front ends
pub mod board;
pub mod catalog;
pub mod chart;
pub mod domain;
pub mod export;
pub mod locale;
pub mod score;
pub mod settings;

pub use board::{BatchOutcome, BoardError, Change, SkillBoard, SwitchPolicy, ToggleOutcome};
pub use catalog::{Catalog, CatalogError, Category, SkillRecord};
pub use domain::Level;
pub use export::{chart_svg, export_file_name, ExportSnapshot};
pub use locale::{describe, text, Locale, Localized, UiText};
pub use score::{LevelBreakdown, LevelScore, ScoreSummary};
pub use settings::{ChartStyle, ViewSettings};
