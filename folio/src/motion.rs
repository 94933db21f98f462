//! Animation timing constants and motion curves for the card carousel.
//!
//! Tuning lives here so every animated surface updates consistently.

use std::time::Duration;

/// Redraw tick interval while a transition is in flight (aim ~120 FPS).
pub(crate) const TICK_MS: u64 = 8;

/// Duration of the springy center-card settle.
pub(crate) const CENTER_SPRING_MS: u64 = 420;

/// Duration of the fixed fade/shrink for a card leaving the center.
pub(crate) const EXIT_MS: u64 = 180;

const DAMPING_RATIO: f32 = 0.7;
const ANGULAR_FREQUENCY: f32 = 14.0;

/// Total wall-clock span of a transition before it is considered settled.
pub(crate) fn transition_duration() -> Duration {
    Duration::from_millis(CENTER_SPRING_MS)
}

/// Underdamped spring response normalized over `progress` in `[0, 1]`.
///
/// Starts at 0 with zero initial velocity, overshoots 1 slightly once and
/// settles at 1 by the end of the span. Velocity-continuous throughout.
pub(crate) fn spring(progress: f32) -> f32 {
    if progress <= 0.0 {
        return 0.0;
    }
    if progress >= 1.0 {
        return 1.0;
    }

    let zeta = DAMPING_RATIO;
    let omega = ANGULAR_FREQUENCY;
    let omega_d = omega * (1.0 - zeta * zeta).sqrt();
    let decay = (-zeta * omega * progress).exp();

    1.0 - decay
        * ((omega_d * progress).cos()
            + (zeta * omega / omega_d) * (omega_d * progress).sin())
}

/// Cubic ease-out over `progress` in `[0, 1]`.
pub(crate) fn ease_out(progress: f32) -> f32 {
    let clamped = progress.clamp(0.0, 1.0);
    let inverse = 1.0 - clamped;

    1.0 - inverse * inverse * inverse
}

/// Linear interpolation between two values.
pub(crate) fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::{ease_out, lerp, spring};

    #[test]
    fn given_span_endpoints_when_sampling_spring_then_rest_values_hold() {
        assert_eq!(spring(0.0), 0.0);
        assert_eq!(spring(1.0), 1.0);
        assert!((spring(0.999) - 1.0).abs() < 1e-2);
    }

    #[test]
    fn given_mid_span_when_sampling_spring_then_curve_overshoots_once() {
        let peak = (1..100)
            .map(|i| spring(i as f32 / 100.0))
            .fold(f32::MIN, f32::max);

        assert!(peak > 1.0, "spring never overshot: peak {peak}");
        assert!(peak < 1.1, "overshoot too violent: peak {peak}");
    }

    #[test]
    fn given_ease_out_when_sampling_then_curve_is_clamped_and_monotone() {
        assert_eq!(ease_out(-1.0), 0.0);
        assert_eq!(ease_out(2.0), 1.0);
        assert!(ease_out(0.25) < ease_out(0.5));
        assert!(ease_out(0.5) < ease_out(0.75));
    }

    #[test]
    fn given_lerp_when_sampling_then_endpoints_and_midpoint_match() {
        assert_eq!(lerp(-180.0, 0.0, 0.0), -180.0);
        assert_eq!(lerp(-180.0, 0.0, 1.0), 0.0);
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
    }
}
