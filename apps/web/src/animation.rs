#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationMode {
    Running,
    Paused,
}

impl AnimationMode {
    pub const fn toggle(self) -> Self {
        match self {
            Self::Running => Self::Paused,
            Self::Paused => Self::Running,
        }
    }
}

const ANIMATION_SWEEP_SPEED: f64 = 1.4;
const ANIMATION_MAX_FRAME_DELTA: f64 = 0.25;
const ANIMATION_FULL_ROTATION: f64 = 2.0 * std::f64::consts::PI;

pub fn advance_animation_counter(
    counter: f64,
    last_tick: Option<f64>,
    now_seconds: f64,
    mode: AnimationMode,
) -> (f64, Option<f64>) {
    let delta = last_tick
        .map(|last| (now_seconds - last).max(0.0).min(ANIMATION_MAX_FRAME_DELTA))
        .unwrap_or(0.0);

    let next_counter = match mode {
        AnimationMode::Running => {
            (counter + delta * ANIMATION_SWEEP_SPEED).rem_euclid(ANIMATION_FULL_ROTATION)
        }
        AnimationMode::Paused => counter.rem_euclid(ANIMATION_FULL_ROTATION),
    };

    (next_counter, Some(now_seconds))
}

/// Milliseconds since the board last changed, frozen while paused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealClock {
    seen_revision: u64,
    elapsed_ms: u64,
}

impl RevealClock {
    /// Starts settled so the first frame shows the final state.
    pub const fn new(revision: u64) -> Self {
        Self {
            seen_revision: revision,
            elapsed_ms: u64::MAX,
        }
    }

    pub const fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    pub fn advance(
        &mut self,
        revision: u64,
        last_tick: Option<f64>,
        now_seconds: f64,
        mode: AnimationMode,
    ) {
        if revision != self.seen_revision {
            self.seen_revision = revision;
            self.elapsed_ms = 0;
        }

        if mode == AnimationMode::Paused {
            return;
        }

        let delta = last_tick.map_or(0.0, |last| (now_seconds - last).max(0.0));
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let step = (delta * 1000.0).round() as u64;
        self.elapsed_ms = self.elapsed_ms.saturating_add(step);
    }
}
