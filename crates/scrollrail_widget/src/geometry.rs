//! Thumb geometry engine
//!
//! Pure mapping from content metrics to thumb size and position.
//! Recomputed from fresh metrics on every scroll, resize, and mount;
//! nothing here is cached, so stale geometry can never be displayed.

use scrollrail_core::ContentMetrics;

use crate::config::ScrollbarConfig;

/// Derived thumb size and position.
///
/// `top` is measured from the track's origin (the top of the viewport)
/// and already includes the upper button's height.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ThumbGeometry {
    pub height: f32,
    pub top: f32,
}

/// Geometry plus the overflow flag gating thumb visibility and
/// step-button enablement
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ThumbState {
    pub geometry: ThumbGeometry,
    pub overflowing: bool,
}

/// Derive thumb geometry from content metrics.
///
/// The thumb's length is the viewport's share of the content, floored
/// at the configured minimum; its position maps the scroll progress
/// onto the track span left between the two buttons.
pub fn compute_thumb(metrics: ContentMetrics, config: &ScrollbarConfig) -> ThumbState {
    let visible = metrics.client_height;
    let content = metrics.scroll_height;

    let scroll_ratio = if content <= 0.0 { 1.0 } else { visible / content };
    let thumb_height = (visible * scroll_ratio).max(config.min_thumb_height);

    let track_usable = visible - 2.0 * config.button_height;

    let scrollable = content - visible;
    let position_ratio = if scrollable <= 0.0 {
        0.0
    } else {
        (metrics.scroll_top / scrollable).clamp(0.0, 1.0)
    };

    // Degenerate tracks shorter than the thumb pin it to the button edge
    let travel = (track_usable - thumb_height).max(0.0);
    let top = (position_ratio * travel).clamp(0.0, travel) + config.button_height;

    ThumbState {
        geometry: ThumbGeometry {
            height: thumb_height,
            top,
        },
        overflowing: content > visible,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(scroll_height: f32, client_height: f32, scroll_top: f32) -> ContentMetrics {
        ContentMetrics {
            scroll_height,
            client_height,
            scroll_top,
            ..Default::default()
        }
    }

    #[test]
    fn test_thumb_at_top() {
        let state = compute_thumb(metrics(1000.0, 200.0, 0.0), &ScrollbarConfig::default());
        // 200 * (200/1000) = 40, above the 30 minimum
        assert_eq!(state.geometry.height, 40.0);
        assert_eq!(state.geometry.top, 20.0);
        assert!(state.overflowing);
    }

    #[test]
    fn test_thumb_at_bottom() {
        let config = ScrollbarConfig::default();
        let state = compute_thumb(metrics(1000.0, 200.0, 800.0), &config);

        // track usable = 200 - 40 = 160; travel = 160 - 40 = 120
        let track_usable = 200.0 - 2.0 * config.button_height;
        assert_eq!(
            state.geometry.top,
            track_usable - state.geometry.height + config.button_height
        );
    }

    #[test]
    fn test_minimum_thumb_height() {
        // 200 * (200/20000) = 2, floored at 30
        let state = compute_thumb(metrics(20000.0, 200.0, 0.0), &ScrollbarConfig::default());
        assert_eq!(state.geometry.height, 30.0);
    }

    #[test]
    fn test_overflow_flag_exact() {
        let config = ScrollbarConfig::default();
        assert!(!compute_thumb(metrics(200.0, 200.0, 0.0), &config).overflowing);
        assert!(!compute_thumb(metrics(150.0, 200.0, 0.0), &config).overflowing);
        assert!(compute_thumb(metrics(200.5, 200.0, 0.0), &config).overflowing);
    }

    #[test]
    fn test_zero_content_height_guard() {
        let state = compute_thumb(metrics(0.0, 200.0, 0.0), &ScrollbarConfig::default());
        // ratio treated as 1: thumb spans the viewport share, no NaN
        assert!(state.geometry.height.is_finite());
        assert_eq!(state.geometry.height, 200.0);
        assert!(!state.overflowing);
    }

    #[test]
    fn test_equal_heights_guard() {
        let state = compute_thumb(metrics(200.0, 200.0, 0.0), &ScrollbarConfig::default());
        assert!(state.geometry.top.is_finite());
        assert_eq!(state.geometry.top, 20.0);
    }

    #[test]
    fn test_idempotent() {
        let config = ScrollbarConfig::default();
        let m = metrics(1234.0, 256.0, 321.0);
        assert_eq!(compute_thumb(m, &config), compute_thumb(m, &config));
    }

    #[test]
    fn test_bounds_hold_across_offsets() {
        let config = ScrollbarConfig::default();
        for step in 0..=100 {
            let scroll_top = 800.0 * step as f32 / 100.0;
            let state = compute_thumb(metrics(1000.0, 200.0, scroll_top), &config);

            let track_usable = 200.0 - 2.0 * config.button_height;
            assert!(state.geometry.height >= config.min_thumb_height);
            assert!(state.geometry.top >= config.button_height);
            assert!(
                state.geometry.top
                    <= track_usable + config.button_height - state.geometry.height + 1e-3
            );
        }
    }

    #[test]
    fn test_out_of_range_offset_clamps() {
        let config = ScrollbarConfig::default();
        let low = compute_thumb(metrics(1000.0, 200.0, -50.0), &config);
        assert_eq!(low.geometry.top, config.button_height);

        let high = compute_thumb(metrics(1000.0, 200.0, 9000.0), &config);
        let track_usable = 200.0 - 2.0 * config.button_height;
        assert_eq!(
            high.geometry.top,
            track_usable - high.geometry.height + config.button_height
        );
    }
}
