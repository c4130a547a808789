use serde::Serialize;

use crate::catalog::SkillRecord;
use crate::domain::Level;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ScoreSummary {
    pub total: u64,
    pub max: u64,
    pub percentage: u32,
}

impl ScoreSummary {
    pub fn from_skills(skills: &[SkillRecord]) -> Self {
        // u64 sums of u32 weights cannot overflow
        let (total, max) = skills.iter().fold((0_u64, 0_u64), |(total, max), skill| {
            let weight = u64::from(skill.weight);
            let achieved = if skill.active { weight } else { 0 };
            (total + achieved, max + weight)
        });

        Self {
            total,
            max,
            percentage: percentage(total, max),
        }
    }

    /// Unrounded share in `0.0..=1.0`.
    pub fn ratio(&self) -> f64 {
        if self.max == 0 {
            0.0
        } else {
            self.total as f64 / self.max as f64
        }
    }
}

/// `round(100 * total / max)`, 0 for an empty category.
pub fn percentage(total: u64, max: u64) -> u32 {
    if max == 0 {
        return 0;
    }
    let value = (total as f64 * 100.0 / max as f64).round();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let value = value as u32;
    value
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelScore {
    #[serde(serialize_with = "serialize_level_label")]
    pub level: Level,
    pub achieved: u64,
    pub possible: u64,
    pub active_count: usize,
    pub total_count: usize,
}

fn serialize_level_label<S>(level: &Level, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(level.label())
}

impl LevelScore {
    const fn empty(level: Level) -> Self {
        Self {
            level,
            achieved: 0,
            possible: 0,
            active_count: 0,
            total_count: 0,
        }
    }

    pub fn percentage(&self) -> u32 {
        percentage(self.achieved, self.possible)
    }
}

/// Per-level rollup in ring order. Records without a level are skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelBreakdown {
    pub levels: [LevelScore; 4],
}

impl LevelBreakdown {
    pub fn from_skills(skills: &[SkillRecord]) -> Self {
        let mut levels = Level::ALL.map(LevelScore::empty);

        for skill in skills {
            let Some(level) = skill.level else {
                continue;
            };
            let entry = &mut levels[level.index()];
            entry.possible += u64::from(skill.weight);
            entry.total_count += 1;
            if skill.active {
                entry.achieved += u64::from(skill.weight);
                entry.active_count += 1;
            }
        }

        Self { levels }
    }

    pub fn get(&self, level: Level) -> &LevelScore {
        &self.levels[level.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &LevelScore> {
        self.levels.iter()
    }
}
