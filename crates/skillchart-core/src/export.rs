//! What gets written when the user exports the current view.

use serde::Serialize;

use crate::board::SkillBoard;
use crate::chart::{render_flower_svg, render_rose_svg, FlowerChart, Reveal, RoseChart};
use crate::locale::{describe, Locale};
use crate::score::{LevelBreakdown, ScoreSummary};
use crate::settings::{ChartStyle, ViewSettings};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRow {
    pub position: usize,
    pub level: Option<&'static str>,
    pub description: String,
    pub weight: u32,
    pub active: bool,
}

/// Serializable copy of the selected category, resolved in the current
/// locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportSnapshot {
    pub category_id: String,
    pub category_label: String,
    pub locale: Locale,
    pub chart_style: ChartStyle,
    pub date: String,
    pub summary: ScoreSummary,
    pub breakdown: LevelBreakdown,
    pub skills: Vec<ExportRow>,
}

impl ExportSnapshot {
    pub fn capture(board: &SkillBoard, settings: &ViewSettings, date: impl Into<String>) -> Self {
        let locale = settings.locale;
        let skills = board
            .skills()
            .iter()
            .enumerate()
            .map(|(position, skill)| ExportRow {
                position,
                level: skill.level.map(|level| level.as_str()),
                description: describe(skill, locale).to_string(),
                weight: skill.weight,
                active: skill.active,
            })
            .collect();

        Self {
            category_id: board.category_id().to_string(),
            category_label: board
                .category()
                .map(|category| category.label(locale).to_string())
                .unwrap_or_default(),
            locale,
            chart_style: settings.chart_style,
            date: date.into(),
            summary: board.summary(),
            breakdown: board.breakdown(),
            skills,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// `skillchart-<label>-<date>.<ext>`, with the label lowercased and
/// whitespace or path separators collapsed to `-`.
pub fn export_file_name(category_label: &str, date: &str, extension: &str) -> String {
    let mut slug = String::with_capacity(category_label.len());
    for ch in category_label.trim().chars() {
        if ch.is_whitespace() || matches!(ch, '/' | '\\' | ':' | '.') {
            if !slug.ends_with('-') {
                slug.push('-');
            }
        } else {
            slug.extend(ch.to_lowercase());
        }
    }
    let slug = slug.trim_matches('-');
    let slug = if slug.is_empty() { "category" } else { slug };
    format!("skillchart-{slug}-{date}.{extension}")
}

/// Markup of the chart as it is currently shown.
pub fn chart_svg(board: &SkillBoard, settings: &ViewSettings) -> String {
    let summary = board.summary();
    let timing = Reveal::new(board.last_change()).timing();
    let options = settings.svg_options(timing);
    match settings.chart_style {
        ChartStyle::Rose => render_rose_svg(
            &RoseChart::layout(board.skills()),
            &summary,
            board.next_batch_outcome(),
            &options,
        ),
        ChartStyle::Flower => render_flower_svg(&FlowerChart::layout(&summary), &options),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BatchOutcome, SwitchPolicy};
    use crate::catalog::Catalog;

    fn python_board() -> SkillBoard {
        let mut board = SkillBoard::new(Catalog::builtin().unwrap(), SwitchPolicy::Reset);
        board.select_category_by_id("python").unwrap();
        board
    }

    #[test]
    fn file_names_are_slugged() {
        assert_eq!(
            export_file_name("Data Science", "2024-05-01", "svg"),
            "skillchart-data-science-2024-05-01.svg"
        );
        assert_eq!(export_file_name("  ", "d", "json"), "skillchart-category-d.json");
        assert_eq!(export_file_name("C/C++", "d", "json"), "skillchart-c-c++-d.json");
    }

    #[test]
    fn snapshot_resolves_current_locale() {
        let board = python_board();
        let settings = ViewSettings::new(Locale::Ko);
        let snapshot = ExportSnapshot::capture(&board, &settings, "2024-05-01");

        assert_eq!(snapshot.category_id, "python");
        assert_eq!(snapshot.summary.max, 7);
        assert_eq!(snapshot.skills.len(), board.skills().len());
        assert!(snapshot.skills.iter().all(|row| !row.description.is_empty()));

        let json = snapshot.to_json().unwrap();
        assert!(json.contains("\"locale\": \"ko\""));
        assert!(json.contains("\"date\": \"2024-05-01\""));
    }

    #[test]
    fn chart_svg_follows_chart_style() {
        let board = python_board();
        let mut settings = ViewSettings::default();
        assert!(chart_svg(&board, &settings).contains("toggle-all"));
        settings.toggle_chart_style();
        assert!(chart_svg(&board, &settings).contains("flower-center"));
    }

    #[test]
    fn center_control_names_the_toggle_that_will_happen() {
        let source = r#"{"categories": [{"id": "free", "label": "Free", "skills": [
            {"level": "Beginner", "description": "scored", "weight": 1, "active": true},
            {"level": "Beginner", "description": "unscored", "weight": 0, "active": false}
        ]}]}"#;
        let mut board = SkillBoard::new(Catalog::from_json(source).unwrap(), SwitchPolicy::Reset);
        let settings = ViewSettings::default();

        let summary = board.summary();
        assert_eq!(summary.total, summary.max);
        assert_eq!(board.next_batch_outcome(), BatchOutcome::Activated);
        let svg = chart_svg(&board, &settings);
        assert!(svg.contains("<title>Activate all</title>"));

        assert_eq!(board.batch_toggle(), BatchOutcome::Activated);
        assert!(chart_svg(&board, &settings).contains("<title>Deactivate all</title>"));
    }
}
