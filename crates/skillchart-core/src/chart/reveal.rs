use crate::board::Change;
use crate::chart::rose::Wedge;

/// Delay between consecutive petals when everything is toggled at once.
pub const BATCH_STEP_MS: u64 = 45;
/// Length of a single petal's enter/exit transition.
pub const TRANSITION_MS: u64 = 420;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealTiming {
    Instant,
    Staggered { step_ms: u64 },
}

impl RevealTiming {
    pub const fn delay_ms(self, order: usize) -> u64 {
        match self {
            Self::Instant => 0,
            Self::Staggered { step_ms } => step_ms * order as u64,
        }
    }
}

/// Answers how a petal should look `elapsed_ms` after the last change.
#[derive(Debug, Clone, Copy)]
pub struct Reveal<'a> {
    change: &'a Change,
}

impl<'a> Reveal<'a> {
    pub const fn new(change: &'a Change) -> Self {
        Self { change }
    }

    pub const fn timing(&self) -> RevealTiming {
        match self.change {
            Change::Batch { .. } => RevealTiming::Staggered {
                step_ms: BATCH_STEP_MS,
            },
            _ => RevealTiming::Instant,
        }
    }

    pub const fn delay_ms(&self, wedge: &Wedge) -> u64 {
        self.timing().delay_ms(wedge.order)
    }

    /// Until its delay has passed a petal keeps the state it had before the
    /// batch toggle.
    pub fn display_active(&self, wedge: &Wedge, elapsed_ms: u64) -> bool {
        match self.change {
            Change::Batch { previous, .. } if elapsed_ms < self.delay_ms(wedge) => previous
                .get(wedge.position)
                .copied()
                .unwrap_or(wedge.active),
            _ => wedge.active,
        }
    }

    /// Time after which every petal shows its final state.
    pub const fn settled_after_ms(&self, wedge_count: usize) -> u64 {
        match self.timing() {
            RevealTiming::Instant => 0,
            timing => timing.delay_ms(wedge_count.saturating_sub(1)) + TRANSITION_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BatchOutcome;
    use crate::catalog::SkillRecord;
    use crate::chart::rose::RoseChart;
    use crate::domain::Level;

    fn chart(active: bool) -> RoseChart {
        let skills: Vec<SkillRecord> = (0..4)
            .map(|index| SkillRecord::new(Level::Beginner, format!("skill {index}"), active))
            .collect();
        RoseChart::layout(&skills)
    }

    #[test]
    fn individual_toggle_has_no_delay() {
        let change = Change::Single { position: 2 };
        let reveal = Reveal::new(&change);
        let chart = chart(true);

        assert_eq!(reveal.timing(), RevealTiming::Instant);
        assert!(chart.wedges.iter().all(|wedge| reveal.delay_ms(wedge) == 0));
        assert!(reveal.display_active(&chart.wedges[3], 0));
        assert_eq!(reveal.settled_after_ms(4), 0);
    }

    #[test]
    fn batch_toggle_staggers_by_rendering_order() {
        let change = Change::Batch {
            outcome: BatchOutcome::Activated,
            previous: vec![false; 4],
        };
        let reveal = Reveal::new(&change);
        let chart = chart(true);

        let delays: Vec<u64> = chart.wedges.iter().map(|wedge| reveal.delay_ms(wedge)).collect();
        assert_eq!(delays, vec![0, 45, 90, 135]);

        let shown: Vec<bool> = chart
            .wedges
            .iter()
            .map(|wedge| reveal.display_active(wedge, 60))
            .collect();
        assert_eq!(shown, vec![true, true, false, false]);
        assert!(chart.wedges.iter().all(|wedge| reveal.display_active(wedge, 1_000)));
        assert_eq!(reveal.settled_after_ms(4), 135 + TRANSITION_MS);
    }

    #[test]
    fn already_active_petals_stay_active_during_batch() {
        let change = Change::Batch {
            outcome: BatchOutcome::Activated,
            previous: vec![true, false, true, false],
        };
        let reveal = Reveal::new(&change);
        let chart = chart(true);
        assert!(reveal.display_active(&chart.wedges[2], 0));
        assert!(!reveal.display_active(&chart.wedges[3], 0));
    }
}
