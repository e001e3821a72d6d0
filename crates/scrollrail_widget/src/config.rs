//! Scrollbar configuration

use scrollrail_motion::{DEFAULT_CONTINUOUS_STEP, DEFAULT_SMOOTH_DURATION};

/// Layout and timing knobs for the scrollbar.
///
/// Lengths are in the host's scroll units (pixels for most hosts),
/// durations in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollbarConfig {
    /// Minimum thumb length, so the thumb stays grabbable on tall content
    pub min_thumb_height: f32,
    /// Height of each step button; the track's usable span excludes both
    pub button_height: f32,
    /// Fraction of pointer travel translated into scroll travel while dragging
    pub drag_speed_factor: f32,
    /// Offset change for a discrete step-button click
    pub button_step: f32,
    /// Per-frame offset change while a step button is held
    pub continuous_step: f32,
    /// Duration of the glide triggered by a track click
    pub track_click_duration: f32,
    /// Duration of programmatic and button-click glides
    pub smooth_scroll_duration: f32,
    /// How long click suppression holds after a drag release
    pub release_cooldown: f32,
}

impl Default for ScrollbarConfig {
    fn default() -> Self {
        Self {
            min_thumb_height: 30.0,
            button_height: 20.0,
            drag_speed_factor: 0.3,
            button_step: 70.0,
            continuous_step: DEFAULT_CONTINUOUS_STEP,
            track_click_duration: 0.5,
            smooth_scroll_duration: DEFAULT_SMOOTH_DURATION,
            release_cooldown: 0.1,
        }
    }
}

impl ScrollbarConfig {
    /// Config with halved glide durations, for hosts that want a
    /// tighter feel
    pub fn snappy() -> Self {
        Self {
            track_click_duration: 0.25,
            smooth_scroll_duration: 0.4,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ScrollbarConfig::default();
        assert_eq!(config.min_thumb_height, 30.0);
        assert_eq!(config.button_height, 20.0);
        assert_eq!(config.drag_speed_factor, 0.3);
        assert_eq!(config.button_step, 70.0);
        assert_eq!(config.continuous_step, 5.0);
        assert_eq!(config.release_cooldown, 0.1);
    }

    #[test]
    fn test_snappy_preset() {
        let config = ScrollbarConfig::snappy();
        assert!(config.smooth_scroll_duration < ScrollbarConfig::default().smooth_scroll_duration);
        assert_eq!(config.button_height, 20.0);
    }
}
