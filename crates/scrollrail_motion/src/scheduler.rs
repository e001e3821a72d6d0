//! Frame scheduler
//!
//! Owns every in-flight scroll animation and steps them once per
//! frame. The host's frame-pacing loop calls [`FrameScheduler::tick`];
//! tests drive [`FrameScheduler::step`] with explicit deltas.

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use std::sync::{Arc, Mutex};
use std::time::Instant;

use crate::animation::ScrollAnimation;

new_key_type! {
    /// Handle to a scheduled animation
    pub struct AnimationId;
}

/// The scheduler that ticks all active scroll animations
pub struct FrameScheduler {
    animations: SlotMap<AnimationId, ScrollAnimation>,
    last_frame: Instant,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self {
            animations: SlotMap::with_key(),
            last_frame: Instant::now(),
        }
    }

    /// Schedule an animation
    pub fn add(&mut self, animation: ScrollAnimation) -> AnimationId {
        self.animations.insert(animation)
    }

    /// Cancel an animation. Stale ids are a no-op.
    pub fn cancel(&mut self, id: AnimationId) -> bool {
        self.animations.remove(id).is_some()
    }

    /// True while `id` refers to a scheduled animation
    pub fn contains(&self, id: AnimationId) -> bool {
        self.animations.contains_key(id)
    }

    /// Number of scheduled animations
    pub fn animation_count(&self) -> usize {
        self.animations.len()
    }

    /// Check if any animations are still active
    pub fn has_active_animations(&self) -> bool {
        !self.animations.is_empty()
    }

    /// Tick from wall time
    pub fn tick(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.step(dt);
    }

    /// Advance all animations by `dt` seconds, retiring finished ones
    pub fn step(&mut self, dt: f32) {
        let finished: SmallVec<[AnimationId; 4]> = self
            .animations
            .iter_mut()
            .filter_map(|(id, animation)| (!animation.step(dt)).then_some(id))
            .collect();
        for id in finished {
            self.animations.remove(id);
        }
    }
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared scheduler handle, one per UI loop
pub type SharedScheduler = Arc<Mutex<FrameScheduler>>;
