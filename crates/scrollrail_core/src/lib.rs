//! scrollrail core primitives
//!
//! Foundation for the synthetic scrollbar crates:
//!
//! - **Content region**: the opaque scrollable area the widget reads
//!   metrics from and writes offsets to
//! - **Input surface**: process-level pointer event dispatch with
//!   capture, so drags keep tracking outside the widget's bounds
//! - **Selection suppression**: the process-wide "no text selection"
//!   flag held by an active drag session

pub mod content;
pub mod error;
pub mod events;
pub mod selection;

pub use content::{ContentMetrics, ContentRegion, SharedContent, SizedContent, WeakContent};
pub use error::ContentError;
pub use events::{
    event_types, CaptureAction, CaptureId, EventType, InputSurface, ListenerId, PointerEvent,
    SharedInputSurface,
};
pub use selection::{selection_enabled, suppress_selection, SelectionLock};
