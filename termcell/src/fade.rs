//! Timed opacity fades for elements that animate out before unmounting.

use std::time::{Duration, Instant};

/// Easing function for fades.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Apply easing to progress (0.0 to 1.0).
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

/// A fade from fully opaque to fully transparent.
///
/// Time is passed in explicitly so callers (and tests) own the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fade {
    start: Instant,
    duration: Duration,
    easing: Easing,
}

impl Fade {
    pub fn out(start: Instant, duration: Duration, easing: Easing) -> Self {
        Self {
            start,
            duration,
            easing,
        }
    }

    /// Linear progress in 0.0..=1.0.
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Opacity at `now`: 1.0 when the fade starts, 0.0 once it is done.
    pub fn opacity(&self, now: Instant) -> f32 {
        1.0 - self.easing.apply(self.progress(now))
    }

    pub fn is_done(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.start) >= self.duration
    }

    /// When the fade completes.
    pub fn deadline(&self) -> Instant {
        self.start + self.duration
    }
}
