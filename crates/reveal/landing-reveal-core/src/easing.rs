//! Timing helpers for counter animation.

/// Normalized progress of an animation: `elapsed / duration` clamped to `[0, 1]`.
///
/// Negative elapsed time (a host clock stepping backwards) reads as 0, and a
/// non-positive duration is treated as already finished.
#[inline]
pub fn progress(elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return 1.0;
    }
    (elapsed_ms / duration_ms).clamp(0.0, 1.0)
}

/// Exponential ease-out: `1 - 2^(-10p)`, pinned to exactly 1 at `p == 1`.
#[inline]
pub fn ease_out_expo(p: f64) -> f64 {
    if p >= 1.0 {
        1.0
    } else {
        1.0 - 2f64.powf(-10.0 * p)
    }
}
