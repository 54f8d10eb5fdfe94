//! Eased selection transitions
//!
//! A [`Transition`] records that the selection moved from one segment to
//! another at a point in time. Renderers ask it how strongly each segment
//! should currently look selected; there is no timer, the host's frame
//! loop supplies `now`.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// Timing curve applied to transition progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    /// Constant speed
    Linear,
    /// Slow start (cubic)
    EaseIn,
    /// Slow finish (cubic)
    EaseOut,
    /// Slow start and finish (cubic)
    #[default]
    EaseInOut,
}

impl Easing {
    /// Maps linear progress `t` to eased progress, both in `[0, 1]`.
    ///
    /// ```
    /// use switchbar_core::Easing;
    ///
    /// assert_eq!(Easing::EaseInOut.apply(0.0), 0.0);
    /// assert_eq!(Easing::EaseInOut.apply(0.5), 0.5);
    /// assert_eq!(Easing::EaseInOut.apply(1.0), 1.0);
    /// assert!(Easing::EaseIn.apply(0.25) < 0.25);
    /// ```
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t * t,
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// A selection change in flight
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    from: usize,
    to: usize,
    started: Instant,
    duration: Duration,
    easing: Easing,
}

impl Transition {
    /// Starts a transition from segment `from` to segment `to` at `started`.
    pub fn new(
        from: usize,
        to: usize,
        started: Instant,
        duration: Duration,
        easing: Easing,
    ) -> Self {
        Transition {
            from,
            to,
            started,
            duration,
            easing,
        }
    }

    /// Segment losing the selection
    pub fn from(&self) -> usize {
        self.from
    }

    /// Segment gaining the selection
    pub fn to(&self) -> usize {
        self.to
    }

    /// Total length of the transition
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Un-eased progress in `[0, 1]`. A zero duration is complete at once.
    pub fn linear_progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Eased progress in `[0, 1]`
    pub fn progress(&self, now: Instant) -> f32 {
        self.easing.apply(self.linear_progress(now))
    }

    /// Whether the full duration has elapsed
    pub fn is_finished(&self, now: Instant) -> bool {
        self.linear_progress(now) >= 1.0
    }

    /// How selected segment `index` looks at `now`, from 0.0 to 1.0.
    ///
    /// The incoming segment rises with progress, the outgoing one falls,
    /// every other segment stays at zero.
    pub fn emphasis(&self, index: usize, now: Instant) -> f32 {
        let progress = self.progress(now);
        if index == self.to {
            progress
        } else if index == self.from {
            1.0 - progress
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn transition(ms: u64) -> (Transition, Instant) {
        let start = Instant::now();
        (
            Transition::new(0, 1, start, Duration::from_millis(ms), Easing::EaseInOut),
            start,
        )
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let (t, start) = transition(0);
        assert!(t.is_finished(start));
        assert_eq!(t.emphasis(1, start), 1.0);
        assert_eq!(t.emphasis(0, start), 0.0);
    }

    #[test]
    fn test_progress_is_bounded_by_duration() {
        let (t, start) = transition(200);
        assert_eq!(t.progress(start), 0.0);
        assert!(!t.is_finished(start + Duration::from_millis(199)));
        assert!(t.is_finished(start + Duration::from_millis(200)));
        assert_eq!(t.progress(start + Duration::from_secs(5)), 1.0);
    }

    #[test]
    fn test_midpoint_splits_emphasis_evenly() {
        let (t, start) = transition(200);
        let mid = start + Duration::from_millis(100);
        assert!((t.emphasis(1, mid) - 0.5).abs() < 1e-4);
        assert!((t.emphasis(0, mid) - 0.5).abs() < 1e-4);
        assert_eq!(t.emphasis(5, mid), 0.0);
    }

    #[test]
    fn test_now_before_start_reads_as_not_started() {
        let (t, start) = transition(200);
        let earlier = start
            .checked_sub(Duration::from_millis(50))
            .unwrap_or(start);
        assert_eq!(t.linear_progress(earlier), 0.0);
    }

    #[test]
    fn test_ease_out_leads_linear() {
        assert!(Easing::EaseOut.apply(0.25) > 0.25);
        assert_eq!(Easing::Linear.apply(0.25), 0.25);
    }

    proptest! {
        #[test]
        fn prop_easing_is_monotone(a in 0.0f32..=1.0, b in 0.0f32..=1.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            for easing in [Easing::Linear, Easing::EaseIn, Easing::EaseOut, Easing::EaseInOut] {
                prop_assert!(easing.apply(lo) <= easing.apply(hi) + 1e-6);
            }
        }

        #[test]
        fn prop_progress_stays_in_unit_range(ms in 0u64..2_000, elapsed in 0u64..5_000) {
            let (t, start) = transition(ms);
            let p = t.progress(start + Duration::from_millis(elapsed));
            prop_assert!((0.0..=1.0).contains(&p));
        }
    }
}
