//! Scrollable content region abstraction
//!
//! The widget never owns the content it scrolls. It talks to an opaque
//! region through [`ContentRegion`]: sample metrics, read the offset,
//! write the offset. Anything that can outlive the widget (frame
//! callbacks, detached handles) holds a [`WeakContent`] and silently
//! stops once the region is gone.

use std::sync::{Arc, Mutex, Weak};

/// Metrics sampled from a scrollable content region.
///
/// Sampled fresh at every recompute; never cached across an offset
/// write.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContentMetrics {
    /// Full height of the content, including the part outside the viewport
    pub scroll_height: f32,
    /// Height of the visible viewport (includes content padding)
    pub client_height: f32,
    /// Current vertical scroll offset
    pub scroll_top: f32,
    /// Top padding of the container
    pub padding_top: f32,
    /// Bottom padding of the container
    pub padding_bottom: f32,
}

impl ContentMetrics {
    /// Largest valid scroll offset
    pub fn max_scroll_top(&self) -> f32 {
        (self.scroll_height - self.client_height).max(0.0)
    }

    /// True when the content is taller than the viewport
    pub fn is_overflowing(&self) -> bool {
        self.scroll_height > self.client_height
    }
}

/// An opaque scrollable region.
///
/// Implementations clamp offset writes to `[0, max_scroll_top]`, the
/// way a host viewport does; callers may rely on out-of-range writes
/// landing on the nearest edge.
pub trait ContentRegion: Send {
    /// Sample the current metrics
    fn metrics(&self) -> ContentMetrics;

    /// Current vertical scroll offset
    fn scroll_top(&self) -> f32 {
        self.metrics().scroll_top
    }

    /// Write the vertical scroll offset (clamped to the valid range)
    fn set_scroll_top(&mut self, top: f32);
}

/// Shared handle to a content region
pub type SharedContent = Arc<Mutex<dyn ContentRegion>>;

/// Weak handle used by frame callbacks that may outlive the widget
pub type WeakContent = Weak<Mutex<dyn ContentRegion>>;

/// Content region with externally measured heights.
///
/// Covers hosts that measure their content out of band and only need
/// the offset bookkeeping, and doubles as the test double for the
/// whole workspace.
#[derive(Debug, Clone, PartialEq)]
pub struct SizedContent {
    scroll_height: f32,
    client_height: f32,
    scroll_top: f32,
    padding_top: f32,
    padding_bottom: f32,
}

impl SizedContent {
    /// Create a region with the given content and viewport heights
    pub fn new(scroll_height: f32, client_height: f32) -> Self {
        Self {
            scroll_height,
            client_height,
            scroll_top: 0.0,
            padding_top: 0.0,
            padding_bottom: 0.0,
        }
    }

    /// Set container padding
    pub fn with_padding(mut self, top: f32, bottom: f32) -> Self {
        self.padding_top = top;
        self.padding_bottom = bottom;
        self
    }

    /// Update measured heights, keeping the offset in range
    pub fn set_heights(&mut self, scroll_height: f32, client_height: f32) {
        self.scroll_height = scroll_height;
        self.client_height = client_height;
        let max = (scroll_height - client_height).max(0.0);
        self.scroll_top = self.scroll_top.clamp(0.0, max);
    }

    /// Wrap into a shared handle
    pub fn shared(self) -> SharedContent {
        Arc::new(Mutex::new(self))
    }
}

impl ContentRegion for SizedContent {
    fn metrics(&self) -> ContentMetrics {
        ContentMetrics {
            scroll_height: self.scroll_height,
            client_height: self.client_height,
            scroll_top: self.scroll_top,
            padding_top: self.padding_top,
            padding_bottom: self.padding_bottom,
        }
    }

    fn set_scroll_top(&mut self, top: f32) {
        let max = (self.scroll_height - self.client_height).max(0.0);
        self.scroll_top = top.clamp(0.0, max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_max_scroll_top() {
        let metrics = ContentMetrics {
            scroll_height: 1000.0,
            client_height: 200.0,
            ..Default::default()
        };
        assert_eq!(metrics.max_scroll_top(), 800.0);

        let fits = ContentMetrics {
            scroll_height: 150.0,
            client_height: 200.0,
            ..Default::default()
        };
        assert_eq!(fits.max_scroll_top(), 0.0);
    }

    #[test]
    fn test_metrics_overflow() {
        let metrics = ContentMetrics {
            scroll_height: 201.0,
            client_height: 200.0,
            ..Default::default()
        };
        assert!(metrics.is_overflowing());

        let exact = ContentMetrics {
            scroll_height: 200.0,
            client_height: 200.0,
            ..Default::default()
        };
        assert!(!exact.is_overflowing());
    }

    #[test]
    fn test_sized_content_clamps_writes() {
        let mut content = SizedContent::new(1000.0, 200.0);

        content.set_scroll_top(500.0);
        assert_eq!(content.scroll_top(), 500.0);

        content.set_scroll_top(-50.0);
        assert_eq!(content.scroll_top(), 0.0);

        content.set_scroll_top(5000.0);
        assert_eq!(content.scroll_top(), 800.0);
    }

    #[test]
    fn test_sized_content_no_overflow_pins_to_zero() {
        let mut content = SizedContent::new(100.0, 200.0);
        content.set_scroll_top(50.0);
        assert_eq!(content.scroll_top(), 0.0);
    }

    #[test]
    fn test_sized_content_resize_reclamps_offset() {
        let mut content = SizedContent::new(1000.0, 200.0);
        content.set_scroll_top(800.0);

        // Content shrinks; offset follows the new bottom edge
        content.set_heights(400.0, 200.0);
        assert_eq!(content.scroll_top(), 200.0);
    }

    #[test]
    fn test_sized_content_padding() {
        let content = SizedContent::new(1000.0, 200.0).with_padding(8.0, 12.0);
        let metrics = content.metrics();
        assert_eq!(metrics.padding_top, 8.0);
        assert_eq!(metrics.padding_bottom, 12.0);
    }
}
