//! Back-to-top scroll animation math.

/// Scroll offset beyond which the back-to-top button is shown, in pixels.
pub const SHOW_THRESHOLD_PX: f64 = 300.0;

/// Duration of the animated scroll back to the top, in milliseconds.
pub const SCROLL_DURATION_MS: f64 = 800.0;

/// Slow-fast-slow easing: `4t³` below the midpoint, a mirrored cubic above.
#[must_use]
pub fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        (t - 1.0) * (2.0 * t - 2.0) * (2.0 * t - 2.0) + 1.0
    }
}

/// Vertical position at `elapsed_ms` into an animated scroll from `start_y`
/// to the top. Elapsed time past the duration clamps to the destination.
#[must_use]
pub fn position_at(start_y: f64, elapsed_ms: f64, duration_ms: f64) -> f64 {
    let progress = (elapsed_ms / duration_ms).clamp(0.0, 1.0);
    start_y * (1.0 - ease_in_out_cubic(progress))
}

/// Whether the animation has run its full duration.
#[must_use]
pub fn is_finished(elapsed_ms: f64, duration_ms: f64) -> bool {
    elapsed_ms >= duration_ms
}
