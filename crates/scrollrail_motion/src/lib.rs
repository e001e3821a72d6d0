//! scrollrail motion system
//!
//! Frame-driven scroll animation: easing curves, the two animation
//! kinds the widget needs (eased glide to a target, fixed step per
//! frame while a button is held), the scheduler that steps them, and
//! the per-widget controller that enforces cancel-and-replace.

pub mod animation;
pub mod controller;
pub mod easing;
pub mod scheduler;

pub use animation::{ContinuousScroll, ScrollAnimation, SmoothScroll, StepDirection};
pub use controller::{MotionController, DEFAULT_CONTINUOUS_STEP, DEFAULT_SMOOTH_DURATION};
pub use easing::Easing;
pub use scheduler::{AnimationId, FrameScheduler, SharedScheduler};
