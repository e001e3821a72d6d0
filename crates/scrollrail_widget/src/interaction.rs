//! Drag and click interaction state
//!
//! One authoritative phase machine covers the thumb drag lifecycle:
//! `Idle → Dragging → ReleaseCooldown → Idle`. The cooldown keeps
//! click suppression up through the synthetic click the host fires
//! right after a drag release, and a new drag cancels a pending
//! cooldown, so there is no separate flag and timer to race each
//! other.

use scrollrail_core::{selection, SelectionLock};

/// Phase of the thumb drag lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging,
    ReleaseCooldown,
}

/// Live drag bookkeeping, present only while `Dragging`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Pointer Y at the pointer-down that started the drag
    pub start_pointer_y: f32,
    /// Content offset at the pointer-down that started the drag
    pub start_scroll_top: f32,
}

/// Interaction state owned by one widget instance
pub struct InteractionState {
    phase: DragPhase,
    session: Option<DragSession>,
    selection_lock: Option<SelectionLock>,
    cooldown_remaining: f32,
    release_cooldown: f32,
}

impl InteractionState {
    pub fn new(release_cooldown: f32) -> Self {
        Self {
            phase: DragPhase::Idle,
            session: None,
            selection_lock: None,
            cooldown_remaining: 0.0,
            release_cooldown,
        }
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn session(&self) -> Option<DragSession> {
        self.session
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == DragPhase::Dragging
    }

    /// True while track clicks must be ignored (active drag or the
    /// cooldown right after one)
    pub fn is_click_suppressed(&self) -> bool {
        self.phase != DragPhase::Idle
    }

    /// Start a drag session. A pending release cooldown is cancelled
    /// and text selection is suppressed for the session's lifetime.
    pub fn begin_drag(&mut self, pointer_y: f32, scroll_top: f32) {
        if self.phase == DragPhase::Dragging {
            tracing::warn!("drag started while a drag session was active");
        }
        self.cooldown_remaining = 0.0;
        self.session = Some(DragSession {
            start_pointer_y: pointer_y,
            start_scroll_top: scroll_top,
        });
        if self.selection_lock.is_none() {
            self.selection_lock = selection::suppress_selection();
            if self.selection_lock.is_none() {
                tracing::warn!("selection suppression already held by another session");
            }
        }
        self.phase = DragPhase::Dragging;
    }

    /// Offset the content should move to for the current pointer
    /// position, or None when no drag is active.
    ///
    /// Pointer travel scales by the thumb-to-viewport ratio and the
    /// drag speed factor, so a full-thumb-length drag moves the
    /// content by `client_height * factor`.
    pub fn drag_target(
        &self,
        pointer_y: f32,
        thumb_height: f32,
        client_height: f32,
        speed_factor: f32,
    ) -> Option<f32> {
        if self.phase != DragPhase::Dragging {
            return None;
        }
        let session = self.session?;
        if thumb_height <= 0.0 {
            return Some(session.start_scroll_top);
        }
        let delta_y = pointer_y - session.start_pointer_y;
        Some(session.start_scroll_top + (delta_y / thumb_height) * client_height * speed_factor)
    }

    /// End the drag session: restore text selection and start the
    /// click-suppression cooldown.
    pub fn end_drag(&mut self) {
        if self.phase != DragPhase::Dragging {
            return;
        }
        self.selection_lock = None;
        self.session = None;
        if self.release_cooldown > 0.0 {
            self.phase = DragPhase::ReleaseCooldown;
            self.cooldown_remaining = self.release_cooldown;
        } else {
            self.phase = DragPhase::Idle;
        }
    }

    /// Advance the cooldown countdown
    pub fn tick(&mut self, dt: f32) {
        if self.phase == DragPhase::ReleaseCooldown {
            self.cooldown_remaining -= dt;
            if self.cooldown_remaining <= 0.0 {
                self.cooldown_remaining = 0.0;
                self.phase = DragPhase::Idle;
            }
        }
    }

    /// Forced teardown: drop the selection lock and return to Idle
    /// regardless of phase
    pub fn reset(&mut self) {
        self.selection_lock = None;
        self.session = None;
        self.cooldown_remaining = 0.0;
        self.phase = DragPhase::Idle;
    }
}
