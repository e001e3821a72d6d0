//! Easing functions for scroll animation

/// Easing curve applied to normalized animation progress
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    Linear,
    EaseInQuad,
    EaseOutQuad,
    /// Two-segment quadratic: accelerate to the midpoint, decelerate out
    #[default]
    EaseInOutQuad,
}

impl Easing {
    /// Apply the easing function to a progress value (0.0 to 1.0)
    pub fn apply(&self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseInQuad => t * t,
            Easing::EaseOutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_exact() {
        for easing in [
            Easing::Linear,
            Easing::EaseInQuad,
            Easing::EaseOutQuad,
            Easing::EaseInOutQuad,
        ] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
        }
    }

    #[test]
    fn test_ease_in_out_quad_segments() {
        // First half is 2t², second half mirrors it
        assert!((Easing::EaseInOutQuad.apply(0.25) - 0.125).abs() < 1e-6);
        assert!((Easing::EaseInOutQuad.apply(0.5) - 0.5).abs() < 1e-6);
        assert!((Easing::EaseInOutQuad.apply(0.75) - 0.875).abs() < 1e-6);
    }

    #[test]
    fn test_monotonic() {
        for easing in [Easing::EaseInQuad, Easing::EaseOutQuad, Easing::EaseInOutQuad] {
            let mut last = 0.0;
            for step in 1..=100 {
                let value = easing.apply(step as f32 / 100.0);
                assert!(value >= last, "{easing:?} not monotonic at step {step}");
                last = value;
            }
        }
    }
}
