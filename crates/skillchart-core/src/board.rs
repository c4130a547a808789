use std::collections::HashMap;

use thiserror::Error;
use tracing::debug;

use crate::catalog::{Catalog, Category, SkillRecord};
use crate::score::{LevelBreakdown, ScoreSummary};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("unknown category: {0}")]
    UnknownCategory(String),
    #[error("no skill at position {position} (category has {len})")]
    NoSuchSkill { position: usize, len: usize },
}

/// What happens to a category's toggles when the user switches away from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SwitchPolicy {
    /// Reload the static defaults every time the category is selected.
    #[default]
    Reset,
    /// Keep the flags for the rest of the session.
    Remember,
}

impl SwitchPolicy {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "reset" => Some(Self::Reset),
            "remember" | "keep" => Some(Self::Remember),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Reset => "reset",
            Self::Remember => "remember",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleOutcome {
    pub active: bool,
    /// Signed change applied to the total score.
    pub delta: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchOutcome {
    Activated,
    Deactivated,
}

/// The most recent mutation, kept so front ends can pick the reveal timing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Change {
    #[default]
    None,
    Single {
        position: usize,
    },
    Batch {
        outcome: BatchOutcome,
        previous: Vec<bool>,
    },
    CategorySwitch,
}

/// The working list for the selected category.
#[derive(Debug, Clone)]
pub struct SkillBoard {
    catalog: Catalog,
    policy: SwitchPolicy,
    category_index: usize,
    skills: Vec<SkillRecord>,
    remembered: HashMap<usize, Vec<bool>>,
    last_change: Change,
    revision: u64,
}

impl SkillBoard {
    pub fn new(catalog: Catalog, policy: SwitchPolicy) -> Self {
        let skills = catalog
            .get(0)
            .map(|category| category.skills.clone())
            .unwrap_or_default();

        Self {
            catalog,
            policy,
            category_index: 0,
            skills,
            remembered: HashMap::new(),
            last_change: Change::None,
            revision: 0,
        }
    }

    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub const fn policy(&self) -> SwitchPolicy {
        self.policy
    }

    pub const fn category_index(&self) -> usize {
        self.category_index
    }

    pub fn category(&self) -> Option<&Category> {
        self.catalog.get(self.category_index)
    }

    pub fn category_id(&self) -> &str {
        self.category().map_or("", |category| category.id.as_str())
    }

    pub fn skills(&self) -> &[SkillRecord] {
        &self.skills
    }

    pub const fn last_change(&self) -> &Change {
        &self.last_change
    }

    /// Bumped on every mutation; front ends restart reveal timers on change.
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    pub fn summary(&self) -> ScoreSummary {
        ScoreSummary::from_skills(&self.skills)
    }

    pub fn breakdown(&self) -> LevelBreakdown {
        LevelBreakdown::from_skills(&self.skills)
    }

    pub fn all_active(&self) -> bool {
        self.skills.iter().all(|skill| skill.active)
    }

    pub fn toggle(&mut self, position: usize) -> Result<ToggleOutcome, BoardError> {
        let len = self.skills.len();
        let skill = self
            .skills
            .get_mut(position)
            .ok_or(BoardError::NoSuchSkill { position, len })?;

        skill.active = !skill.active;
        let weight = i64::from(skill.weight);
        let outcome = ToggleOutcome {
            active: skill.active,
            delta: if skill.active { weight } else { -weight },
        };

        self.record(Change::Single { position });
        debug!(position, active = outcome.active, "skill toggled");
        Ok(outcome)
    }

    /// What `batch_toggle` would do right now.
    pub fn next_batch_outcome(&self) -> BatchOutcome {
        if self.all_active() {
            BatchOutcome::Deactivated
        } else {
            BatchOutcome::Activated
        }
    }

    /// Activates everything unless everything is already active.
    pub fn batch_toggle(&mut self) -> BatchOutcome {
        let previous: Vec<bool> = self.skills.iter().map(|skill| skill.active).collect();
        let outcome = self.next_batch_outcome();
        let target = outcome == BatchOutcome::Activated;

        for skill in &mut self.skills {
            skill.active = target;
        }

        self.record(Change::Batch { outcome, previous });
        debug!(?outcome, count = self.skills.len(), "batch toggle");
        outcome
    }

    pub fn select_category(&mut self, index: usize) -> Result<(), BoardError> {
        let category = self
            .catalog
            .get(index)
            .ok_or_else(|| BoardError::UnknownCategory(index.to_string()))?;

        if index == self.category_index {
            return Ok(());
        }

        let mut skills = category.skills.clone();
        if self.policy == SwitchPolicy::Remember {
            let leaving = self.skills.iter().map(|skill| skill.active).collect();
            self.remembered.insert(self.category_index, leaving);

            if let Some(flags) = self.remembered.get(&index) {
                for (skill, active) in skills.iter_mut().zip(flags) {
                    skill.active = *active;
                }
            }
        }

        debug!(from = self.category_index, to = index, "category selected");
        self.category_index = index;
        self.skills = skills;
        self.record(Change::CategorySwitch);
        Ok(())
    }

    pub fn select_category_by_id(&mut self, id: &str) -> Result<(), BoardError> {
        let index = self
            .catalog
            .position(id)
            .ok_or_else(|| BoardError::UnknownCategory(id.to_string()))?;
        self.select_category(index)
    }

    pub fn next_category(&mut self) {
        let len = self.catalog.len();
        if len > 0 {
            let index = (self.category_index + 1) % len;
            let _ = self.select_category(index);
        }
    }

    pub fn previous_category(&mut self) {
        let len = self.catalog.len();
        if len > 0 {
            let index = (self.category_index + len - 1) % len;
            let _ = self.select_category(index);
        }
    }

    fn record(&mut self, change: Change) {
        self.last_change = change;
        self.revision = self.revision.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(policy: SwitchPolicy) -> SkillBoard {
        SkillBoard::new(Catalog::builtin().unwrap(), policy)
    }

    fn flags(board: &SkillBoard) -> Vec<bool> {
        board.skills().iter().map(|skill| skill.active).collect()
    }

    #[test]
    fn toggle_changes_total_by_weight_only() {
        let mut board = board(SwitchPolicy::Reset);
        let before = board.summary();
        let before_flags = flags(&board);

        let expert = board
            .skills()
            .iter()
            .position(|skill| !skill.active && skill.weight == 8)
            .unwrap();
        let outcome = board.toggle(expert).unwrap();

        assert!(outcome.active);
        assert_eq!(outcome.delta, 8);
        assert_eq!(board.summary().total, before.total + 8);
        assert_eq!(board.summary().max, before.max);

        let after_flags = flags(&board);
        for (index, (a, b)) in before_flags.iter().zip(&after_flags).enumerate() {
            if index == expert {
                assert_ne!(a, b);
            } else {
                assert_eq!(a, b);
            }
        }
        assert_eq!(board.last_change(), &Change::Single { position: expert });
    }

    #[test]
    fn toggle_out_of_range_is_an_error() {
        let mut board = board(SwitchPolicy::Reset);
        let len = board.skills().len();
        assert_eq!(
            board.toggle(len),
            Err(BoardError::NoSuchSkill { position: len, len })
        );
    }

    #[test]
    fn batch_toggle_is_a_majority_flip() {
        let mut board = board(SwitchPolicy::Reset);
        let original = flags(&board);
        assert!(original.iter().any(|active| !active));

        assert_eq!(board.batch_toggle(), BatchOutcome::Activated);
        assert!(board.all_active());
        assert_eq!(board.summary().total, board.summary().max);

        assert_eq!(board.batch_toggle(), BatchOutcome::Deactivated);
        assert!(board.skills().iter().all(|skill| !skill.active));
        assert_ne!(flags(&board), original);
    }

    #[test]
    fn batch_toggle_records_previous_flags() {
        let mut board = board(SwitchPolicy::Reset);
        let original = flags(&board);
        board.batch_toggle();
        match board.last_change() {
            Change::Batch { outcome, previous } => {
                assert_eq!(*outcome, BatchOutcome::Activated);
                assert_eq!(previous, &original);
            }
            other => panic!("unexpected change {other:?}"),
        }
    }

    #[test]
    fn switching_away_and_back_resets_toggles() {
        let mut board = board(SwitchPolicy::Reset);
        let defaults = flags(&board);
        board.batch_toggle();

        board.select_category_by_id("python").unwrap();
        board.select_category_by_id("backend").unwrap();

        assert_eq!(flags(&board), defaults);
    }

    #[test]
    fn remember_policy_keeps_toggles_across_switches() {
        let mut board = board(SwitchPolicy::Remember);
        board.batch_toggle();

        board.select_category(2).unwrap();
        assert_eq!(board.category_id(), "python");
        board.select_category(0).unwrap();

        assert!(board.all_active());
    }

    #[test]
    fn reselecting_current_category_keeps_toggles() {
        let mut board = board(SwitchPolicy::Reset);
        board.batch_toggle();
        board.select_category(0).unwrap();
        assert!(board.all_active());
    }

    #[test]
    fn unknown_category_is_rejected() {
        let mut board = board(SwitchPolicy::Reset);
        assert_eq!(
            board.select_category_by_id("rust"),
            Err(BoardError::UnknownCategory("rust".to_string()))
        );
        assert!(board.select_category(99).is_err());
        assert_eq!(board.category_index(), 0);
    }

    #[test]
    fn category_cycling_wraps() {
        let mut board = board(SwitchPolicy::Reset);
        board.previous_category();
        assert_eq!(board.category_id(), "llm");
        board.next_category();
        assert_eq!(board.category_id(), "backend");
    }

    #[test]
    fn python_defaults_score_three_of_seven() {
        let mut board = board(SwitchPolicy::Reset);
        board.select_category_by_id("python").unwrap();
        let summary = board.summary();
        assert_eq!((summary.total, summary.max, summary.percentage), (3, 7, 43));
    }
}
