//! Pointer events and the global input surface
//!
//! A thumb drag must keep tracking after the pointer leaves the
//! thumb's bounds, so move/up handling registers on a process-level
//! surface rather than on the widget node itself. The surface offers
//! two registration modes:
//!
//! - **Listeners**: persistent per-event-type subscriptions (content
//!   scroll, viewport resize)
//! - **Capture**: a single exclusive handler that receives every
//!   pointer move/up until it releases, mirroring pointer capture in
//!   host UI layers
//!
//! Handlers never get access to the surface itself; registration and
//! removal happen from outside a dispatch pass.

use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

/// Event type identifier
pub type EventType = u32;

/// Event types the surface dispatches
pub mod event_types {
    use super::EventType;

    pub const POINTER_DOWN: EventType = 1;
    pub const POINTER_UP: EventType = 2;
    pub const POINTER_MOVE: EventType = 3;
    pub const POINTER_ENTER: EventType = 4;
    pub const POINTER_LEAVE: EventType = 5;
    pub const CLICK: EventType = 6;
    /// Content region reported a scroll
    pub const SCROLL: EventType = 30;
    /// Host viewport resized
    pub const RESIZE: EventType = 40;
}

/// A pointer event in surface coordinates
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerEvent {
    pub x: f32,
    pub y: f32,
    pub button: u8,
}

impl PointerEvent {
    /// Event at the given surface position, primary button
    pub fn at(x: f32, y: f32) -> Self {
        Self { x, y, button: 0 }
    }
}

new_key_type! {
    /// Identifier for a registered surface listener
    pub struct ListenerId;
}

/// Identifier for an active pointer capture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureId(u64);

/// What a capture handler wants done with the capture after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureAction {
    /// Keep routing move/up events to this handler
    Hold,
    /// Drop the capture; subsequent events reach ordinary listeners
    Release,
}

/// Persistent listener callback
pub type PointerHandler = Box<dyn FnMut(&PointerEvent) + Send>;

/// Capture callback; receives the event type alongside the event
pub type CaptureHandler = Box<dyn FnMut(EventType, &PointerEvent) -> CaptureAction + Send>;

struct ActiveCapture {
    id: CaptureId,
    handler: CaptureHandler,
}

/// Process-level pointer event dispatch.
///
/// One surface per UI loop, shared as [`SharedInputSurface`].
#[derive(Default)]
pub struct InputSurface {
    listeners: SlotMap<ListenerId, PointerHandler>,
    by_type: FxHashMap<EventType, SmallVec<[ListenerId; 2]>>,
    capture: Option<ActiveCapture>,
    next_capture: u64,
}

impl InputSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a persistent listener for one event type
    pub fn add_listener<F>(&mut self, event_type: EventType, handler: F) -> ListenerId
    where
        F: FnMut(&PointerEvent) + Send + 'static,
    {
        let id = self.listeners.insert(Box::new(handler));
        self.by_type.entry(event_type).or_default().push(id);
        id
    }

    /// Remove a listener. Returns false when the id is already gone.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        if self.listeners.remove(id).is_none() {
            return false;
        }
        for ids in self.by_type.values_mut() {
            ids.retain(|candidate| *candidate != id);
        }
        true
    }

    /// Number of registered persistent listeners
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Route every pointer move/up to `handler` until it returns
    /// [`CaptureAction::Release`] or the capture is ended explicitly.
    /// An existing capture is replaced.
    pub fn begin_capture<F>(&mut self, handler: F) -> CaptureId
    where
        F: FnMut(EventType, &PointerEvent) -> CaptureAction + Send + 'static,
    {
        if self.capture.is_some() {
            tracing::warn!("replacing an active pointer capture");
        }
        self.next_capture += 1;
        let id = CaptureId(self.next_capture);
        self.capture = Some(ActiveCapture {
            id,
            handler: Box::new(handler),
        });
        id
    }

    /// End a capture without waiting for pointer-up. No-op when `id`
    /// is not the active capture.
    pub fn end_capture(&mut self, id: CaptureId) {
        if self.capture.as_ref().is_some_and(|active| active.id == id) {
            self.capture = None;
        }
    }

    /// True while a capture is routing pointer events
    pub fn has_capture(&self) -> bool {
        self.capture.is_some()
    }

    /// Dispatch an event.
    ///
    /// Pointer move/up go to the active capture when one exists and do
    /// not reach ordinary listeners; everything else fans out to the
    /// listeners registered for the event type.
    pub fn dispatch(&mut self, event_type: EventType, event: &PointerEvent) {
        if matches!(
            event_type,
            event_types::POINTER_MOVE | event_types::POINTER_UP
        ) {
            if let Some(active) = self.capture.as_mut() {
                let action = (active.handler)(event_type, event);
                if action == CaptureAction::Release {
                    self.capture = None;
                }
                return;
            }
        }

        // Snapshot the id list; handlers need the listener map mutably
        let ids: SmallVec<[ListenerId; 2]> = match self.by_type.get(&event_type) {
            Some(ids) => ids.clone(),
            None => return,
        };
        for id in ids {
            if let Some(handler) = self.listeners.get_mut(id) {
                handler(event);
            }
        }
    }
}

/// Shared handle to the input surface, one per UI loop
pub type SharedInputSurface = std::sync::Arc<std::sync::Mutex<InputSurface>>;
