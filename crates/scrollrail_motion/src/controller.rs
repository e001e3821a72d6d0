//! Per-widget motion controller
//!
//! Owns the widget's animation handles: at most one smooth scroll and
//! one continuous scroll at a time. Starting either kind cancels the
//! other, so a discrete glide and held-button scrolling never fight
//! over the offset. Handles are slotmap keys, so cancelling an id the
//! scheduler already retired is a harmless no-op.

use std::sync::{Arc, Mutex, Weak};

use scrollrail_core::{ContentRegion, WeakContent};

use crate::animation::{ContinuousScroll, ScrollAnimation, SmoothScroll, StepDirection};
use crate::easing::Easing;
use crate::scheduler::{AnimationId, FrameScheduler, SharedScheduler};

/// Default smooth scroll duration in seconds
pub const DEFAULT_SMOOTH_DURATION: f32 = 0.8;
/// Default per-frame continuous step in scroll units
pub const DEFAULT_CONTINUOUS_STEP: f32 = 5.0;

pub struct MotionController {
    scheduler: Weak<Mutex<FrameScheduler>>,
    content: Option<WeakContent>,
    smooth: Option<AnimationId>,
    continuous: Option<AnimationId>,
    continuous_step: f32,
}

impl MotionController {
    pub fn new(scheduler: &SharedScheduler) -> Self {
        Self {
            scheduler: Arc::downgrade(scheduler),
            content: None,
            smooth: None,
            continuous: None,
            continuous_step: DEFAULT_CONTINUOUS_STEP,
        }
    }

    /// Bind the content region animations write to
    pub fn set_content(&mut self, content: WeakContent) {
        self.content = Some(content);
    }

    /// Drop the content binding; in-flight animations retire on their
    /// next frame
    pub fn detach_content(&mut self) {
        self.content = None;
    }

    /// Override the per-frame continuous step
    pub fn set_continuous_step(&mut self, step: f32) {
        self.continuous_step = step;
    }

    /// Glide to `target` over `duration` seconds.
    ///
    /// Supersedes an in-flight glide (last writer wins, no queueing)
    /// and stops continuous scrolling.
    pub fn smooth_scroll_to(&mut self, target: f32, duration: f32) {
        let Some(scheduler) = self.scheduler.upgrade() else {
            return;
        };
        let Some(weak) = self.content.clone() else {
            tracing::trace!("smooth scroll to {target} dropped, content detached");
            return;
        };
        let Some(content) = weak.upgrade() else {
            tracing::trace!("smooth scroll to {target} dropped, content detached");
            return;
        };
        let start = content.lock().unwrap().scroll_top();

        let mut scheduler = scheduler.lock().unwrap();
        if let Some(id) = self.smooth.take() {
            scheduler.cancel(id);
        }
        if let Some(id) = self.continuous.take() {
            scheduler.cancel(id);
        }
        let animation = SmoothScroll::toward(weak, start, target, duration, Easing::EaseInOutQuad);
        self.smooth = Some(scheduler.add(ScrollAnimation::Smooth(animation)));
    }

    /// Start per-frame stepping in `direction`.
    ///
    /// A running continuous scroll is cancelled and replaced, never
    /// doubled; an in-flight glide is cancelled.
    pub fn start_continuous(&mut self, direction: StepDirection) {
        let Some(scheduler) = self.scheduler.upgrade() else {
            return;
        };
        let Some(content) = self.live_content() else {
            tracing::trace!("continuous scroll dropped, content detached");
            return;
        };

        let mut scheduler = scheduler.lock().unwrap();
        if let Some(id) = self.continuous.take() {
            scheduler.cancel(id);
        }
        if let Some(id) = self.smooth.take() {
            scheduler.cancel(id);
        }
        let animation = ContinuousScroll::new(content, direction, self.continuous_step);
        self.continuous = Some(scheduler.add(ScrollAnimation::Continuous(animation)));
    }

    /// Stop held scrolling. No-op when nothing is running.
    pub fn stop_continuous(&mut self) {
        let Some(id) = self.continuous.take() else {
            return;
        };
        if let Some(scheduler) = self.scheduler.upgrade() {
            scheduler.lock().unwrap().cancel(id);
        }
    }

    /// Cancel both animation kinds (teardown path)
    pub fn stop_all(&mut self) {
        let scheduler = self.scheduler.upgrade();
        for id in [self.smooth.take(), self.continuous.take()]
            .into_iter()
            .flatten()
        {
            if let Some(scheduler) = &scheduler {
                scheduler.lock().unwrap().cancel(id);
            }
        }
    }

    /// True while the scheduler still holds one of this widget's
    /// animations
    pub fn is_animating(&self) -> bool {
        let Some(scheduler) = self.scheduler.upgrade() else {
            return false;
        };
        let scheduler = scheduler.lock().unwrap();
        [self.smooth, self.continuous]
            .into_iter()
            .flatten()
            .any(|id| scheduler.contains(id))
    }

    fn live_content(&self) -> Option<WeakContent> {
        let content = self.content.clone()?;
        content.upgrade().is_some().then_some(content)
    }
}
