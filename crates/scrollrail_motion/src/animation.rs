//! Frame-driven scroll animations
//!
//! Two kinds, matching the widget's two continuous inputs: a
//! time-bounded eased glide to a target offset, and a fixed step per
//! frame while a button is held. Both write through a weak content
//! handle and retire silently once the region is gone, so a frame
//! callback can never fault against an unmounted widget.

use scrollrail_core::{ContentRegion, WeakContent};

use crate::easing::Easing;

/// Direction for stepped scrolling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Up,
    Down,
}

impl StepDirection {
    /// Signed unit factor: -1 for up, +1 for down
    pub fn factor(&self) -> f32 {
        match self {
            StepDirection::Up => -1.0,
            StepDirection::Down => 1.0,
        }
    }
}

/// Time-bounded eased glide toward a target offset.
///
/// Writes the interpolated offset every frame; the final frame writes
/// exactly the target, so a completed glide lands on it up to the
/// region's own clamping.
pub struct SmoothScroll {
    content: WeakContent,
    start: f32,
    distance: f32,
    duration: f32,
    elapsed: f32,
    easing: Easing,
}

impl SmoothScroll {
    /// Glide from `start` to `target` over `duration` seconds
    pub fn toward(
        content: WeakContent,
        start: f32,
        target: f32,
        duration: f32,
        easing: Easing,
    ) -> Self {
        Self {
            content,
            start,
            distance: target - start,
            duration,
            elapsed: 0.0,
            easing,
        }
    }

    /// Target offset this glide lands on
    pub fn target(&self) -> f32 {
        self.start + self.distance
    }

    /// Advance by `dt` seconds. Returns false when finished.
    pub fn step(&mut self, dt: f32) -> bool {
        let Some(content) = self.content.upgrade() else {
            tracing::trace!("smooth scroll retired, content detached");
            return false;
        };

        self.elapsed += dt;
        let t = if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).min(1.0)
        };
        let offset = self.start + self.distance * self.easing.apply(t);
        content.lock().unwrap().set_scroll_top(offset);

        self.elapsed < self.duration
    }
}

/// Fixed per-frame step while a button is held.
///
/// Runs until cancelled; the offset is clamped to the scrollable range
/// so holding a button at an edge is a no-op.
pub struct ContinuousScroll {
    content: WeakContent,
    direction: StepDirection,
    step: f32,
}

impl ContinuousScroll {
    pub fn new(content: WeakContent, direction: StepDirection, step: f32) -> Self {
        Self {
            content,
            direction,
            step,
        }
    }

    /// Advance one frame. Returns false once the content is gone.
    pub fn step(&mut self) -> bool {
        let Some(content) = self.content.upgrade() else {
            tracing::trace!("continuous scroll retired, content detached");
            return false;
        };

        let mut content = content.lock().unwrap();
        let metrics = content.metrics();
        let next = metrics.scroll_top + self.step * self.direction.factor();
        content.set_scroll_top(next.clamp(0.0, metrics.max_scroll_top()));
        true
    }
}

/// An animation owned by the frame scheduler
pub enum ScrollAnimation {
    Smooth(SmoothScroll),
    Continuous(ContinuousScroll),
}

impl ScrollAnimation {
    /// Advance by `dt` seconds. Returns false when the animation is
    /// finished and should be retired.
    pub fn step(&mut self, dt: f32) -> bool {
        match self {
            ScrollAnimation::Smooth(animation) => animation.step(dt),
            ScrollAnimation::Continuous(animation) => animation.step(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrollrail_core::{ContentRegion, SizedContent};
    use std::sync::Arc;

    #[test]
    fn test_smooth_scroll_lands_on_target() {
        let content = SizedContent::new(1000.0, 200.0).shared();
        let mut animation = SmoothScroll::toward(
            Arc::downgrade(&content),
            0.0,
            300.0,
            0.8,
            Easing::EaseInOutQuad,
        );

        // 60fps frames until done
        while animation.step(1.0 / 60.0) {}

        assert!((content.lock().unwrap().scroll_top() - 300.0).abs() < 1e-3);
    }

    #[test]
    fn test_smooth_scroll_lands_on_target_from_any_start() {
        let content = SizedContent::new(1000.0, 200.0).shared();
        content.lock().unwrap().set_scroll_top(750.0);

        let mut animation = SmoothScroll::toward(
            Arc::downgrade(&content),
            750.0,
            120.0,
            0.5,
            Easing::EaseInOutQuad,
        );
        while animation.step(1.0 / 120.0) {}

        assert!((content.lock().unwrap().scroll_top() - 120.0).abs() < 1e-3);
    }

    #[test]
    fn test_smooth_scroll_midpoint_is_halfway() {
        let content = SizedContent::new(1000.0, 200.0).shared();
        let mut animation = SmoothScroll::toward(
            Arc::downgrade(&content),
            0.0,
            400.0,
            0.8,
            Easing::EaseInOutQuad,
        );

        animation.step(0.4);
        assert!((content.lock().unwrap().scroll_top() - 200.0).abs() < 1e-3);
    }

    #[test]
    fn test_smooth_scroll_retires_when_content_detached() {
        let content = SizedContent::new(1000.0, 200.0).shared();
        let mut animation = SmoothScroll::toward(
            Arc::downgrade(&content),
            0.0,
            300.0,
            0.8,
            Easing::EaseInOutQuad,
        );

        animation.step(1.0 / 60.0);
        drop(content);
        assert!(!animation.step(1.0 / 60.0));
    }

    #[test]
    fn test_continuous_scroll_steps_and_clamps_bottom() {
        let content = SizedContent::new(300.0, 200.0).shared();
        let mut animation = ContinuousScroll::new(Arc::downgrade(&content), StepDirection::Down, 5.0);

        for _ in 0..50 {
            assert!(animation.step());
        }
        // 50 frames * 5 units would be 250; the range caps at 100
        assert_eq!(content.lock().unwrap().scroll_top(), 100.0);
    }

    #[test]
    fn test_continuous_scroll_clamps_top() {
        let content = SizedContent::new(300.0, 200.0).shared();
        content.lock().unwrap().set_scroll_top(12.0);
        let mut animation = ContinuousScroll::new(Arc::downgrade(&content), StepDirection::Up, 5.0);

        for _ in 0..10 {
            animation.step();
        }
        assert_eq!(content.lock().unwrap().scroll_top(), 0.0);
    }

    #[test]
    fn test_continuous_scroll_retires_when_content_detached() {
        let content = SizedContent::new(300.0, 200.0).shared();
        let mut animation = ContinuousScroll::new(Arc::downgrade(&content), StepDirection::Down, 5.0);

        assert!(animation.step());
        drop(content);
        assert!(!animation.step());
    }
}
