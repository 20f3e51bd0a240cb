//! Shared numeric constants for the gesture crate.

// ── Swipe recognition ───────────────────────────────────────────

/// Minimum horizontal displacement, in input units (CSS pixels in a
/// browser host), before a drag qualifies as a swipe.
pub const SWIPE_THRESHOLD: f64 = 50.0;
