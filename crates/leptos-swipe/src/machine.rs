//! Swipe gesture state machine.
//!
//! Pure and clocked by explicit `tick(dt)` calls, so tests can fast-forward
//! virtual time instead of waiting on real timers.

/// Minimum horizontal movement in px before a drag is claimed
pub const ACTIVATION_DISTANCE: f64 = 10.0;

/// Horizontal displacement at release beyond which a swipe commits
pub const COMMIT_THRESHOLD: f64 = 100.0;

/// Off-screen offset the row animates to on commit
pub const OFFSCREEN_OFFSET: f64 = 400.0;

/// Commit animation duration in ms
pub const COMMIT_DURATION_MS: f64 = 200.0;

/// Time constant for the snap-back decay in ms
const CANCEL_DECAY_MS: f64 = 60.0;

/// Offset below which a snap-back is considered settled
const SETTLE_EPSILON: f64 = 0.5;

/// Resolved swipe direction
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    Right,
    Left,
}

/// Gesture phase
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SwipePhase {
    /// No gesture in progress
    Idle,
    /// Pointer is down but the drag has not been claimed as horizontal yet
    Pending,
    /// Claimed horizontal drag; offset tracks dx 1:1
    Dragging,
    /// Animating off-screen, action fires when the animation completes
    Committing(SwipeDirection),
    /// Animating back to rest, no action fires
    Cancelling,
}

/// Per-row swipe gesture tracker.
///
/// A direction with no registered action is untakeable: releasing past the
/// threshold in that direction snaps back like a cancel.
#[derive(Debug)]
pub struct SwipeMachine {
    phase: SwipePhase,
    offset: f64,
    commit_from: f64,
    commit_elapsed: f64,
    has_right_action: bool,
    has_left_action: bool,
}

impl SwipeMachine {
    pub fn new(has_right_action: bool, has_left_action: bool) -> Self {
        Self {
            phase: SwipePhase::Idle,
            offset: 0.0,
            commit_from: 0.0,
            commit_elapsed: 0.0,
            has_right_action,
            has_left_action,
        }
    }

    pub fn phase(&self) -> SwipePhase {
        self.phase
    }

    /// Current horizontal offset of the row content in px
    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn is_idle(&self) -> bool {
        self.phase == SwipePhase::Idle
    }

    /// True while a commit or cancel animation needs ticking
    pub fn is_animating(&self) -> bool {
        matches!(self.phase, SwipePhase::Committing(_) | SwipePhase::Cancelling)
    }

    /// Pointer down. Returns false (and ignores the gesture) unless Idle,
    /// so only one gesture is tracked at a time.
    pub fn begin(&mut self) -> bool {
        if self.phase != SwipePhase::Idle {
            return false;
        }
        self.phase = SwipePhase::Pending;
        true
    }

    /// Pointer moved; `dx`/`dy` are deltas from the gesture start.
    ///
    /// While Pending the claim condition is re-evaluated on every move:
    /// the drag is claimed as horizontal only once |dx| exceeds the
    /// activation distance and dominates |dy|. A mostly-vertical movement
    /// (a scroll) is never claimed. Once Dragging, vertical motion is
    /// ignored and the offset tracks dx.
    pub fn drag(&mut self, dx: f64, dy: f64) {
        match self.phase {
            SwipePhase::Pending => {
                if dx.abs() > ACTIVATION_DISTANCE && dx.abs() > dy.abs() {
                    self.phase = SwipePhase::Dragging;
                    self.offset = dx;
                }
            }
            SwipePhase::Dragging => {
                self.offset = dx;
            }
            _ => {}
        }
    }

    /// Pointer released; resolves the gesture.
    pub fn release(&mut self) {
        match self.phase {
            SwipePhase::Pending => {
                // Never claimed: a tap or a vertical scroll
                self.phase = SwipePhase::Idle;
                self.offset = 0.0;
            }
            SwipePhase::Dragging => {
                let dx = self.offset;
                if dx > COMMIT_THRESHOLD && self.has_right_action {
                    self.start_commit(SwipeDirection::Right);
                } else if dx < -COMMIT_THRESHOLD && self.has_left_action {
                    self.start_commit(SwipeDirection::Left);
                } else {
                    self.phase = SwipePhase::Cancelling;
                }
            }
            _ => {}
        }
    }

    fn start_commit(&mut self, direction: SwipeDirection) {
        self.commit_from = self.offset;
        self.commit_elapsed = 0.0;
        self.phase = SwipePhase::Committing(direction);
    }

    /// Advance animations by `dt` ms.
    ///
    /// Returns the direction whose action should fire, exactly once per
    /// completed gesture, on the tick where the commit animation finishes.
    /// The offset is reset to 0 on that same tick.
    pub fn tick(&mut self, dt: f64) -> Option<SwipeDirection> {
        match self.phase {
            SwipePhase::Committing(direction) => {
                self.commit_elapsed += dt;
                if self.commit_elapsed >= COMMIT_DURATION_MS {
                    self.offset = 0.0;
                    self.phase = SwipePhase::Idle;
                    return Some(direction);
                }
                let target = match direction {
                    SwipeDirection::Right => OFFSCREEN_OFFSET,
                    SwipeDirection::Left => -OFFSCREEN_OFFSET,
                };
                let t = self.commit_elapsed / COMMIT_DURATION_MS;
                self.offset = self.commit_from + (target - self.commit_from) * t;
                None
            }
            SwipePhase::Cancelling => {
                self.offset -= self.offset * (dt / CANCEL_DECAY_MS).min(1.0);
                if self.offset.abs() < SETTLE_EPSILON {
                    self.offset = 0.0;
                    self.phase = SwipePhase::Idle;
                }
                None
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 16.0;

    /// Drives ticks until the machine goes idle; returns every action fired.
    fn run_to_idle(machine: &mut SwipeMachine) -> Vec<SwipeDirection> {
        let mut fired = Vec::new();
        let mut guard = 0;
        while !machine.is_idle() {
            if let Some(dir) = machine.tick(FRAME) {
                fired.push(dir);
            }
            guard += 1;
            assert!(guard < 1000, "animation never settled");
        }
        fired
    }

    fn swipe(machine: &mut SwipeMachine, dx: f64) {
        assert!(machine.begin());
        // A few intermediate moves so the claim path is exercised
        machine.drag(dx / 2.0, 2.0);
        machine.drag(dx, 3.0);
        machine.release();
    }

    #[test]
    fn swipe_right_past_threshold_commits_once() {
        let mut m = SwipeMachine::new(true, true);
        swipe(&mut m, 150.0);
        assert_eq!(m.phase(), SwipePhase::Committing(SwipeDirection::Right));

        let fired = run_to_idle(&mut m);
        assert_eq!(fired, vec![SwipeDirection::Right]);
        assert_eq!(m.offset(), 0.0);
    }

    #[test]
    fn swipe_left_past_threshold_commits_left() {
        let mut m = SwipeMachine::new(true, true);
        swipe(&mut m, -150.0);
        assert_eq!(m.phase(), SwipePhase::Committing(SwipeDirection::Left));
        assert_eq!(run_to_idle(&mut m), vec![SwipeDirection::Left]);
    }

    #[test]
    fn action_fires_only_after_commit_duration_elapses() {
        let mut m = SwipeMachine::new(true, false);
        swipe(&mut m, 200.0);

        let mut elapsed = 0.0;
        loop {
            let fired = m.tick(FRAME);
            elapsed += FRAME;
            if let Some(dir) = fired {
                assert_eq!(dir, SwipeDirection::Right);
                assert!(elapsed >= COMMIT_DURATION_MS);
                break;
            }
            // Until the animation finishes the row is moving off-screen
            assert!(m.offset() > 0.0);
        }
        assert!(m.is_idle());
    }

    #[test]
    fn release_within_threshold_cancels_without_firing() {
        for dx in [100.0, 60.0, 0.0, -40.0, -100.0] {
            let mut m = SwipeMachine::new(true, true);
            swipe(&mut m, dx);
            if dx.abs() > ACTIVATION_DISTANCE {
                assert_eq!(m.phase(), SwipePhase::Cancelling, "dx={dx}");
            }
            assert!(run_to_idle(&mut m).is_empty(), "dx={dx}");
            assert_eq!(m.offset(), 0.0);
        }
    }

    #[test]
    fn vertical_movement_is_never_claimed() {
        let mut m = SwipeMachine::new(true, true);
        assert!(m.begin());
        // |dy| dominates |dx| throughout, regardless of magnitude
        m.drag(30.0, 80.0);
        m.drag(120.0, 300.0);
        assert_eq!(m.phase(), SwipePhase::Pending);
        assert_eq!(m.offset(), 0.0);
        m.release();
        assert!(m.is_idle());
    }

    #[test]
    fn small_horizontal_movement_stays_pending() {
        let mut m = SwipeMachine::new(true, true);
        assert!(m.begin());
        m.drag(8.0, 1.0);
        assert_eq!(m.phase(), SwipePhase::Pending);
        m.drag(11.0, 1.0);
        assert_eq!(m.phase(), SwipePhase::Dragging);
    }

    #[test]
    fn unregistered_direction_behaves_as_cancel() {
        let mut m = SwipeMachine::new(false, true);
        swipe(&mut m, 250.0);
        assert_eq!(m.phase(), SwipePhase::Cancelling);
        assert!(run_to_idle(&mut m).is_empty());
    }

    #[test]
    fn new_gesture_refused_until_idle_again() {
        let mut m = SwipeMachine::new(true, true);
        swipe(&mut m, 150.0);
        assert!(!m.begin());
        m.tick(FRAME);
        assert!(!m.begin());

        run_to_idle(&mut m);
        assert!(m.begin());
    }

    #[test]
    fn drag_tracks_dx_one_to_one_once_claimed() {
        let mut m = SwipeMachine::new(true, true);
        assert!(m.begin());
        m.drag(40.0, 5.0);
        assert_eq!(m.offset(), 40.0);
        // Vertical component is ignored after the claim
        m.drag(-70.0, 500.0);
        assert_eq!(m.offset(), -70.0);
    }

    #[test]
    fn cancel_decays_monotonically_to_rest() {
        let mut m = SwipeMachine::new(true, true);
        swipe(&mut m, 90.0);
        let mut prev = m.offset().abs();
        while !m.is_idle() {
            m.tick(FRAME);
            assert!(m.offset().abs() <= prev);
            prev = m.offset().abs();
        }
        assert_eq!(m.offset(), 0.0);
    }
}
