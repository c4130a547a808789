use proptest::prelude::*;
use skillchart_core::chart::{seeded_random, RoseChart};
use skillchart_core::{Catalog, Level, ScoreSummary, SkillBoard, SkillRecord, SwitchPolicy};

fn level() -> impl Strategy<Value = Level> {
    (0_usize..4).prop_map(|index| Level::from_index(index).unwrap_or(Level::Beginner))
}

fn skill() -> impl Strategy<Value = SkillRecord> {
    (level(), 0_u32..20, any::<bool>()).prop_map(|(level, weight, active)| {
        let mut record = SkillRecord::new(level, "skill", active);
        record.weight = weight;
        record
    })
}

fn board_with(skills: Vec<SkillRecord>) -> SkillBoard {
    let json = serde_json::json!({
        "categories": [{ "id": "generated", "label": "Generated", "skills": skills }]
    });
    let catalog = Catalog::from_json(&json.to_string()).unwrap();
    SkillBoard::new(catalog, SwitchPolicy::Reset)
}

proptest! {
    #[test]
    fn total_never_exceeds_max(skills in prop::collection::vec(skill(), 0..40)) {
        let summary = ScoreSummary::from_skills(&skills);
        prop_assert!(summary.total <= summary.max);
        prop_assert!(summary.percentage <= 100);
        if summary.max == 0 {
            prop_assert_eq!(summary.percentage, 0);
        } else {
            let expected = (summary.total as f64 * 100.0 / summary.max as f64).round();
            prop_assert!((f64::from(summary.percentage) - expected).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn toggle_moves_total_by_exactly_one_weight(
        skills in prop::collection::vec(skill(), 1..30),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut board = board_with(skills);
        let position = pick.index(board.skills().len());
        let before_flags: Vec<bool> = board.skills().iter().map(|skill| skill.active).collect();
        let before = i128::from(board.summary().total);

        let outcome = board.toggle(position).unwrap();
        let after = i128::from(board.summary().total);
        let weight = i64::from(board.skills()[position].weight);

        prop_assert_eq!(outcome.delta.abs(), weight);
        prop_assert_eq!(after - before, i128::from(outcome.delta));
        for (index, skill) in board.skills().iter().enumerate() {
            if index == position {
                prop_assert_eq!(skill.active, !before_flags[index]);
            } else {
                prop_assert_eq!(skill.active, before_flags[index]);
            }
        }
    }

    #[test]
    fn batch_toggle_activates_unless_all_active(skills in prop::collection::vec(skill(), 1..30)) {
        let mut board = board_with(skills);
        let was_all_active = board.all_active();
        board.batch_toggle();
        let expected = !was_all_active;
        prop_assert!(board.skills().iter().all(|skill| skill.active == expected));
    }

    #[test]
    fn ring_spans_cover_the_circle(skills in prop::collection::vec(skill(), 1..40)) {
        let chart = RoseChart::layout(&skills);
        for level in Level::ALL {
            if chart.ring_wedges(level).is_empty() {
                continue;
            }
            prop_assert!((chart.span_total(level) - 360.0).abs() < 1e-6);
        }
    }

    #[test]
    fn seeded_random_stays_in_unit_interval(seed in any::<u64>()) {
        let value = seeded_random(seed);
        prop_assert!((0.0..1.0).contains(&value));
        prop_assert_eq!(value.to_bits(), seeded_random(seed).to_bits());
    }
}
