//! Per-instance render state of a switch bar
//!
//! [`SwitchTabsState`] remembers the selection seen on the previous frame so
//! that any change, whether from a click on the bar or from another writer
//! of the [`switchbar_core::Selection`], starts an eased transition. It also
//! keeps the last rendered area so hosts can route mouse events without
//! redoing their own layout.

use std::time::Instant;

use ratatui::layout::Rect;
use switchbar_core::{StyleConfig, Transition};

/// Mutable companion of [`crate::SwitchTabsBar`] across frames
#[derive(Debug, Clone, Default)]
pub struct SwitchTabsState {
    observed: Option<usize>,
    transition: Option<Transition>,
    /// Emphasis of each lit segment when the running transition started
    origin: Vec<(usize, f32)>,
    area: Rect,
}

impl SwitchTabsState {
    /// State for a bar that has not been rendered yet
    pub fn new() -> Self {
        SwitchTabsState::default()
    }

    /// Selection seen by the most recent render
    pub fn observed_selection(&self) -> Option<usize> {
        self.observed
    }

    /// Transition started by the most recent selection change, if still held
    pub fn transition(&self) -> Option<&Transition> {
        self.transition.as_ref()
    }

    /// Whether frames at `now` still differ from the settled look
    ///
    /// Hosts use this to render at a higher rate while animating.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.transition.is_some_and(|t| !t.is_finished(now))
    }

    /// Area the bar was last rendered into
    pub fn last_area(&self) -> Rect {
        self.area
    }

    /// Records the selection read at the start of a frame.
    ///
    /// A value different from the previous frame's starts a transition,
    /// replacing any one still running. Segments keep the emphasis they had
    /// at that moment and ease from there. The first frame never animates.
    pub(crate) fn observe(&mut self, selected: usize, now: Instant, style: &StyleConfig) {
        if let Some(previous) = self.observed.filter(|previous| *previous != selected) {
            tracing::debug!(
                from = previous,
                to = selected,
                "selection transition started"
            );
            self.origin = self.snapshot(previous, now);
            self.transition = Some(Transition::new(
                previous,
                selected,
                now,
                style.transition_duration(),
                style.easing,
            ));
        }
        self.observed = Some(selected);

        if self.transition.is_some_and(|t| t.is_finished(now)) {
            self.transition = None;
            self.origin.clear();
        }
    }

    pub(crate) fn set_area(&mut self, area: Rect) {
        self.area = area;
    }

    /// How selected segment `index` should look at `now`, from 0.0 to 1.0
    pub(crate) fn emphasis(&self, index: usize, selected: usize, now: Instant) -> f32 {
        match self.transition {
            Some(transition) => {
                let start = self.origin_of(index);
                let target = if index == transition.to() { 1.0 } else { 0.0 };
                start + (target - start) * transition.progress(now)
            }
            None if index == selected => 1.0,
            None => 0.0,
        }
    }

    /// Lit segments at `now`; only `previous` when nothing is running
    fn snapshot(&self, previous: usize, now: Instant) -> Vec<(usize, f32)> {
        let Some(transition) = self.transition else {
            return vec![(previous, 1.0)];
        };
        let mut indices: Vec<usize> = self.origin.iter().map(|(index, _)| *index).collect();
        if !indices.contains(&transition.to()) {
            indices.push(transition.to());
        }
        indices
            .into_iter()
            .map(|index| (index, self.emphasis(index, previous, now)))
            .filter(|(_, emphasis)| *emphasis > 0.0)
            .collect()
    }

    fn origin_of(&self, index: usize) -> f32 {
        self.origin
            .iter()
            .find(|(i, _)| *i == index)
            .map_or(0.0, |(_, emphasis)| *emphasis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_first_observation_does_not_animate() {
        let mut state = SwitchTabsState::new();
        let now = Instant::now();
        state.observe(1, now, &StyleConfig::default());
        assert_eq!(state.observed_selection(), Some(1));
        assert!(state.transition().is_none());
        assert_eq!(state.emphasis(1, 1, now), 1.0);
        assert_eq!(state.emphasis(0, 1, now), 0.0);
    }

    #[test]
    fn test_change_starts_transition() {
        let mut state = SwitchTabsState::new();
        let style = StyleConfig::default();
        let start = Instant::now();
        state.observe(0, start, &style);
        state.observe(1, start, &style);

        let t = state.transition().copied().expect("transition");
        assert_eq!((t.from(), t.to()), (0, 1));
        assert!(state.is_animating(start));
        assert_eq!(state.emphasis(0, 1, start), 1.0);
        assert_eq!(state.emphasis(1, 1, start), 0.0);
    }

    #[test]
    fn test_transition_clears_after_duration() {
        let mut state = SwitchTabsState::new();
        let style = StyleConfig::default();
        let start = Instant::now();
        state.observe(0, start, &style);
        state.observe(1, start, &style);

        let later = start + Duration::from_millis(250);
        assert!(!state.is_animating(later));
        state.observe(1, later, &style);
        assert!(state.transition().is_none());
    }

    #[test]
    fn test_new_change_supersedes_running_transition() {
        let mut state = SwitchTabsState::new();
        let style = StyleConfig::default();
        let start = Instant::now();
        state.observe(0, start, &style);
        state.observe(1, start, &style);
        let mid = start + Duration::from_millis(50);
        state.observe(2, mid, &style);

        let t = state.transition().copied().expect("transition");
        assert_eq!((t.from(), t.to()), (1, 2));

        // segment 0 was still mostly lit and fades out from there
        let faded = state.emphasis(0, 2, mid);
        assert!(faded > 0.9 && faded < 1.0);
        assert_eq!(state.emphasis(2, 2, mid), 0.0);

        let later = mid + Duration::from_millis(100);
        let fading = state.emphasis(0, 2, later);
        assert!(fading > 0.0 && fading < faded);

        let end = mid + Duration::from_millis(200);
        assert_eq!(state.emphasis(0, 2, end), 0.0);
        assert_eq!(state.emphasis(1, 2, end), 0.0);
        assert_eq!(state.emphasis(2, 2, end), 1.0);
    }

    #[test]
    fn test_returning_mid_transition_continues_from_current_look() {
        let mut state = SwitchTabsState::new();
        let style = StyleConfig {
            easing: switchbar_core::Easing::Linear,
            ..StyleConfig::default()
        };
        let start = Instant::now();
        state.observe(0, start, &style);
        state.observe(1, start, &style);
        let mid = start + Duration::from_millis(100);
        state.observe(0, mid, &style);

        assert!((state.emphasis(0, 0, mid) - 0.5).abs() < 1e-4);
        assert!((state.emphasis(1, 0, mid) - 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_zero_duration_never_holds_transition() {
        let mut state = SwitchTabsState::new();
        let style = StyleConfig {
            transition_ms: 0,
            ..StyleConfig::default()
        };
        let now = Instant::now();
        state.observe(0, now, &style);
        state.observe(1, now, &style);
        assert!(state.transition().is_none());
        assert_eq!(state.emphasis(1, 1, now), 1.0);
    }
}
