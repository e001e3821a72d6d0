//! scrollrail scrollbar widget
//!
//! A synthetic vertical scrollbar for a scrollable viewport: draggable
//! thumb, clickable track, and two auto-repeating step buttons, kept
//! in sync with an opaque content region.
//!
//! # Example
//!
//! ```rust
//! use std::sync::{Arc, Mutex};
//! use scrollrail_core::{InputSurface, SizedContent};
//! use scrollrail_motion::FrameScheduler;
//! use scrollrail_widget::ScrollView;
//!
//! let scheduler = Arc::new(Mutex::new(FrameScheduler::new()));
//! let surface = Arc::new(Mutex::new(InputSurface::new()));
//!
//! let mut view = ScrollView::new(&scheduler, &surface);
//! view.mount(SizedContent::new(1000.0, 200.0).shared());
//!
//! view.scroll_to_bottom();
//! assert_eq!(view.metrics().unwrap().scroll_top, 800.0);
//! ```

pub mod config;
pub mod geometry;
pub mod interaction;
pub mod scrollbar;

pub use config::ScrollbarConfig;
pub use geometry::{compute_thumb, ThumbGeometry, ThumbState};
pub use interaction::{DragPhase, DragSession, InteractionState};
pub use scrollbar::{ScrollMetrics, ScrollView};

// Re-exported so hosts wiring button handlers do not need a direct
// scrollrail_motion dependency.
pub use scrollrail_motion::StepDirection;

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::{Mutex, MutexGuard, PoisonError};

    // Selection suppression is process-global; tests that start drags
    // run serialized so their assertions do not race.
    static SELECTION_GATE: Mutex<()> = Mutex::new(());

    pub fn selection_gate() -> MutexGuard<'static, ()> {
        SELECTION_GATE.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
