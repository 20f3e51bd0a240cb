//! The swipe gesture state machine.
//!
//! A gesture is tracked between pointer-down and pointer-up, carrying the
//! origin point needed to compute total displacement. Crossing the
//! horizontal threshold fires a single directional event; the `Fired`
//! state latches so the rest of the drag is swallowed.

#[cfg(test)]
#[path = "swipe_test.rs"]
mod swipe_test;

use crate::consts::SWIPE_THRESHOLD;

/// Horizontal direction of a recognized swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Displacement toward negative x.
    Left,
    /// Displacement toward positive x.
    Right,
}

/// Internal state for the swipe state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SwipeState {
    /// No gesture in progress; waiting for the next pointer-down.
    Idle,
    /// A drag is in progress and has not yet crossed the threshold.
    Tracking {
        /// Position of the pointer-down that started the gesture.
        origin_x: f64,
        /// Vertical position of the pointer-down.
        origin_y: f64,
        /// Position of the most recent pointer event.
        last_x: f64,
        /// Vertical position of the most recent pointer event.
        last_y: f64,
    },
    /// The threshold was crossed and the event emitted; the remainder of
    /// the drag is ignored until pointer-up.
    Fired,
}

impl Default for SwipeState {
    fn default() -> Self {
        Self::Idle
    }
}

/// Drag-displacement tracker producing directional threshold-crossing
/// events.
///
/// One tracker instance serves one gesture surface. Feed it every pointer
/// event the surface sees; it emits at most one [`SwipeDirection`] per
/// pointer-down/pointer-up cycle.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    state: SwipeState,
    threshold: f64,
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self { state: SwipeState::Idle, threshold: SWIPE_THRESHOLD }
    }
}

impl SwipeTracker {
    /// A tracker using the default [`SWIPE_THRESHOLD`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A tracker firing at a custom displacement threshold.
    #[must_use]
    pub fn with_threshold(threshold: f64) -> Self {
        Self { state: SwipeState::Idle, threshold }
    }

    /// The displacement at which this tracker fires.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Current machine state.
    #[must_use]
    pub fn state(&self) -> SwipeState {
        self.state
    }

    /// Whether a gesture is in progress (tracking or already fired).
    ///
    /// Hosts use this to suppress default scroll behavior while a swipe is
    /// underway.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self.state, SwipeState::Idle)
    }

    /// Begin tracking a gesture from `(x, y)`.
    ///
    /// A pointer-down during an active gesture restarts tracking from the
    /// new origin.
    pub fn pointer_down(&mut self, x: f64, y: f64) {
        self.state = SwipeState::Tracking { origin_x: x, origin_y: y, last_x: x, last_y: y };
    }

    /// Advance the gesture to `(x, y)`.
    ///
    /// Returns a direction the first time horizontal displacement from the
    /// origin reaches the threshold while dominating the vertical axis.
    /// Movement without a preceding pointer-down, or after the gesture has
    /// fired, returns `None`.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> Option<SwipeDirection> {
        let SwipeState::Tracking { origin_x, origin_y, .. } = self.state else {
            return None;
        };

        let dx = x - origin_x;
        let dy = y - origin_y;
        if dx.abs() >= self.threshold() && dx.abs() > dy.abs() {
            self.state = SwipeState::Fired;
            return Some(if dx < 0.0 { SwipeDirection::Left } else { SwipeDirection::Right });
        }

        self.state = SwipeState::Tracking { origin_x, origin_y, last_x: x, last_y: y };
        None
    }

    /// End the gesture and return to idle.
    pub fn pointer_up(&mut self) {
        self.state = SwipeState::Idle;
    }

    /// Abort the gesture (pointer capture lost, touch cancelled).
    pub fn pointer_cancel(&mut self) {
        self.state = SwipeState::Idle;
    }

    /// Total displacement of the drag in progress, if any.
    #[must_use]
    pub fn displacement(&self) -> Option<(f64, f64)> {
        match self.state {
            SwipeState::Tracking { origin_x, origin_y, last_x, last_y } => {
                Some((last_x - origin_x, last_y - origin_y))
            }
            SwipeState::Idle | SwipeState::Fired => None,
        }
    }
}
