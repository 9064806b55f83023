use egui::TouchId;
use instant::{Duration, Instant};

/// How long the trash zone must be held pressed before the whole graph is
/// cleared. Releasing earlier cancels the arming with no effect.
pub const HOLD_CLEAR_DURATION: Duration = Duration::from_millis(800);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TrashState {
    Idle,
    Armed { touch: TouchId, since: Instant },
}

/// The trash control: a single cancellable deadline, armed by pressing the
/// trash zone and fired at most once when the deadline elapses.
#[derive(Clone, Copy, Debug)]
pub struct TrashControl {
    state: TrashState,
}

impl Default for TrashControl {
    fn default() -> Self {
        Self {
            state: TrashState::Idle,
        }
    }
}

impl TrashControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the clear countdown. A second press while armed is ignored;
    /// there is one outstanding deadline at a time.
    pub fn press(&mut self, touch: TouchId, now: Instant) {
        if matches!(self.state, TrashState::Idle) {
            self.state = TrashState::Armed { touch, since: now };
        }
    }

    /// Cancels the countdown if `touch` is the one holding the trash.
    /// Returns whether the arming was cancelled.
    pub fn release(&mut self, touch: TouchId) -> bool {
        match self.state {
            TrashState::Armed { touch: t, .. } if t == touch => {
                self.state = TrashState::Idle;
                true
            }
            _ => false,
        }
    }

    /// Returns `true` exactly once, when the armed deadline has elapsed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.state {
            TrashState::Armed { since, .. } if now.duration_since(since) >= HOLD_CLEAR_DURATION => {
                self.state = TrashState::Idle;
                true
            }
            _ => false,
        }
    }

    pub fn armed(&self) -> bool {
        matches!(self.state, TrashState::Armed { .. })
    }

    /// Countdown progress in `0.0..=1.0`, for the arming visual.
    pub fn progress(&self, now: Instant) -> f32 {
        match self.state {
            TrashState::Armed { since, .. } => (now.duration_since(since).as_secs_f32()
                / HOLD_CLEAR_DURATION.as_secs_f32())
            .min(1.),
            TrashState::Idle => 0.,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOUCH: TouchId = TouchId(1);
    const OTHER: TouchId = TouchId(2);

    #[test]
    fn fires_once_after_deadline() {
        let now = Instant::now();
        let mut trash = TrashControl::new();

        trash.press(TOUCH, now);
        assert!(trash.armed());

        assert!(!trash.poll(now + Duration::from_millis(799)));
        assert!(trash.poll(now + Duration::from_millis(801)));
        // fired once, then disarmed
        assert!(!trash.poll(now + Duration::from_millis(900)));
        assert!(!trash.armed());
    }

    #[test]
    fn release_before_deadline_cancels() {
        let now = Instant::now();
        let mut trash = TrashControl::new();

        trash.press(TOUCH, now);
        assert!(trash.release(TOUCH));

        assert!(!trash.poll(now + Duration::from_millis(900)));
    }

    #[test]
    fn release_by_other_touch_keeps_arming() {
        let now = Instant::now();
        let mut trash = TrashControl::new();

        trash.press(TOUCH, now);
        assert!(!trash.release(OTHER));
        assert!(trash.armed());

        assert!(trash.poll(now + HOLD_CLEAR_DURATION));
    }

    #[test]
    fn progress_ramps_to_one() {
        let now = Instant::now();
        let mut trash = TrashControl::new();

        assert_eq!(trash.progress(now), 0.);

        trash.press(TOUCH, now);
        let half = trash.progress(now + Duration::from_millis(400));
        assert!((half - 0.5).abs() < 1e-3);
        assert_eq!(trash.progress(now + Duration::from_secs(2)), 1.);
    }
}
