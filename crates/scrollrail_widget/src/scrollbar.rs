//! Synthetic scrollbar widget
//!
//! Wires the geometry engine, the drag state machine, and the motion
//! controller into one imperative control surface. State lives in a
//! shared nucleus (`Arc<Mutex<ScrollViewState>>`) so the pointer
//! capture registered during a drag can keep driving the widget after
//! the pointer leaves its bounds, and can outlive the facade without
//! faulting.
//!
//! Event flow: the host calls the named entry points for widget-local
//! events (pointer-down on the thumb, track clicks, button presses)
//! and dispatches global pointer traffic plus content scroll/resize
//! notifications through the shared [`InputSurface`].

use std::sync::{Arc, Mutex};

use scrollrail_core::{
    event_types, CaptureAction, CaptureId, ContentError, ContentRegion, ListenerId, PointerEvent,
    SharedContent, SharedInputSurface,
};
use scrollrail_motion::{MotionController, SharedScheduler, StepDirection};

use crate::config::ScrollbarConfig;
use crate::geometry::{compute_thumb, ThumbGeometry, ThumbState};
use crate::interaction::{DragPhase, InteractionState};

// ============================================================================
// Public Types
// ============================================================================

/// Metrics reported by [`ScrollView::metrics`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_height: f32,
    pub scroll_top: f32,
    pub client_height: f32,
}

/// Callback invoked with the current offset on every geometry recompute
pub type ScrollCallback = Arc<dyn Fn(f32) + Send + Sync>;

// ============================================================================
// Widget State Nucleus
// ============================================================================

/// Per-instance widget state, shared with event closures
pub struct ScrollViewState {
    config: ScrollbarConfig,
    thumb: ThumbState,
    interaction: InteractionState,
    motion: MotionController,
    content: Option<SharedContent>,
    on_scroll: Option<ScrollCallback>,
    capture: Option<CaptureId>,
    externally_positioned: bool,
    mounted: bool,
    last_scroll_top: f32,
}

impl ScrollViewState {
    fn new(config: ScrollbarConfig, scheduler: &SharedScheduler) -> Self {
        let mut motion = MotionController::new(scheduler);
        motion.set_continuous_step(config.continuous_step);
        Self {
            interaction: InteractionState::new(config.release_cooldown),
            config,
            thumb: ThumbState::default(),
            motion,
            content: None,
            on_scroll: None,
            capture: None,
            externally_positioned: false,
            mounted: false,
            last_scroll_top: 0.0,
        }
    }
}

// ============================================================================
// ScrollView Facade
// ============================================================================

/// The scrollbar widget facade
pub struct ScrollView {
    state: Arc<Mutex<ScrollViewState>>,
    surface: SharedInputSurface,
    scroll_listener: Option<ListenerId>,
    resize_listener: Option<ListenerId>,
}

impl ScrollView {
    /// Create an unmounted widget with default configuration
    pub fn new(scheduler: &SharedScheduler, surface: &SharedInputSurface) -> Self {
        Self::with_config(ScrollbarConfig::default(), scheduler, surface)
    }

    /// Create an unmounted widget with custom configuration
    pub fn with_config(
        config: ScrollbarConfig,
        scheduler: &SharedScheduler,
        surface: &SharedInputSurface,
    ) -> Self {
        Self {
            state: Arc::new(Mutex::new(ScrollViewState::new(config, scheduler))),
            surface: Arc::clone(surface),
            scroll_listener: None,
            resize_listener: None,
        }
    }

    /// Register the scroll callback, invoked with the current offset on
    /// every geometry recompute
    pub fn on_scroll<F>(self, callback: F) -> Self
    where
        F: Fn(f32) + Send + Sync + 'static,
    {
        self.state.lock().unwrap().on_scroll = Some(Arc::new(callback));
        self
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Attach the content region and subscribe to its scroll/resize
    /// notifications on the input surface.
    ///
    /// The initial geometry pass is skipped when [`ScrollView::scroll_to`]
    /// positioned the content beforehand.
    pub fn mount(&mut self, content: SharedContent) {
        let skip_initial = {
            let mut st = self.state.lock().unwrap();
            st.motion.set_content(Arc::downgrade(&content));
            st.content = Some(content);
            st.mounted = true;
            st.externally_positioned
        };

        let mut surface = self.surface.lock().unwrap();
        let weak = Arc::downgrade(&self.state);
        self.scroll_listener = Some(surface.add_listener(event_types::SCROLL, move |_| {
            if let Some(state) = weak.upgrade() {
                ScrollView::recompute(&state);
            }
        }));
        let weak = Arc::downgrade(&self.state);
        self.resize_listener = Some(surface.add_listener(event_types::RESIZE, move |_| {
            if let Some(state) = weak.upgrade() {
                ScrollView::recompute(&state);
            }
        }));
        drop(surface);

        if skip_initial {
            tracing::debug!("scroll view mounted, initial recompute suppressed");
        } else {
            Self::recompute(&self.state);
            tracing::debug!("scroll view mounted");
        }
    }

    /// Detach from the content region and tear down everything that
    /// could fire later: animations, the pointer capture, surface
    /// listeners, and a selection lock held by an active drag.
    pub fn unmount(&mut self) {
        let capture = {
            let mut st = self.state.lock().unwrap();
            st.motion.stop_all();
            st.motion.detach_content();
            st.interaction.reset();
            st.content = None;
            st.mounted = false;
            st.capture.take()
        };

        let mut surface = self.surface.lock().unwrap();
        if let Some(id) = capture {
            surface.end_capture(id);
        }
        if let Some(id) = self.scroll_listener.take() {
            surface.remove_listener(id);
        }
        if let Some(id) = self.resize_listener.take() {
            surface.remove_listener(id);
        }
        tracing::debug!("scroll view unmounted");
    }

    /// True while a content region is attached
    pub fn is_mounted(&self) -> bool {
        self.state.lock().unwrap().mounted
    }

    // =========================================================================
    // Imperative Scroll API
    // =========================================================================

    /// Jump to the top edge
    pub fn scroll_to_top(&self) {
        self.write_scroll_top(0.0);
    }

    /// Jump to the bottom edge
    pub fn scroll_to_bottom(&self) {
        match self.content() {
            Ok(content) => {
                {
                    let mut content = content.lock().unwrap();
                    let bottom = content.metrics().scroll_height;
                    content.set_scroll_top(bottom);
                }
                Self::recompute(&self.state);
            }
            Err(error) => tracing::trace!("scroll to bottom dropped: {error}"),
        }
    }

    /// Jump to `position`, suppressing the mount-time initial recompute
    pub fn scroll_to(&self, position: f32) {
        self.state.lock().unwrap().externally_positioned = true;
        self.write_scroll_top(position);
    }

    /// Glide to `position` over the configured smooth-scroll duration
    pub fn smooth_scroll_to(&self, position: f32) {
        let mut st = self.state.lock().unwrap();
        let duration = st.config.smooth_scroll_duration;
        st.motion.smooth_scroll_to(position, duration);
    }

    /// Current content metrics, or None once the content is detached
    pub fn metrics(&self) -> Option<ScrollMetrics> {
        match self.content() {
            Ok(content) => {
                let metrics = content.lock().unwrap().metrics();
                Some(ScrollMetrics {
                    scroll_height: metrics.scroll_height,
                    scroll_top: metrics.scroll_top,
                    client_height: metrics.client_height,
                })
            }
            Err(error) => {
                tracing::trace!("metrics query dropped: {error}");
                None
            }
        }
    }

    // =========================================================================
    // Pointer Entry Points
    // =========================================================================

    /// Pointer-down on the thumb: start a drag session and capture the
    /// pointer so the drag tracks outside the widget's bounds
    pub fn on_thumb_pointer_down(&self, event: &PointerEvent) {
        {
            let mut st = self.state.lock().unwrap();
            if !st.thumb.overflowing {
                return;
            }
            let Some(content) = st.content.clone() else {
                tracing::trace!("thumb drag dropped: {}", ContentError::Detached);
                return;
            };
            let scroll_top = content.lock().unwrap().scroll_top();
            st.interaction.begin_drag(event.y, scroll_top);
        }

        let weak = Arc::downgrade(&self.state);
        let capture = self
            .surface
            .lock()
            .unwrap()
            .begin_capture(move |event_type, event| {
                let Some(state) = weak.upgrade() else {
                    return CaptureAction::Release;
                };
                match event_type {
                    event_types::POINTER_MOVE => {
                        ScrollView::drag_move(&state, event.y);
                        CaptureAction::Hold
                    }
                    event_types::POINTER_UP => {
                        let mut st = state.lock().unwrap();
                        st.interaction.end_drag();
                        st.capture = None;
                        CaptureAction::Release
                    }
                    _ => CaptureAction::Hold,
                }
            });
        self.state.lock().unwrap().capture = Some(capture);
    }

    /// Click on the track (outside the thumb): glide so the thumb
    /// centers on the click.
    ///
    /// `track_top` is the track's top edge in the same coordinate space
    /// as `event.y`. Clicks during a drag or its release cooldown are
    /// ignored; that is what swallows the synthetic click hosts fire
    /// right after a drag release.
    pub fn on_track_click(&self, event: &PointerEvent, track_top: f32) {
        let mut st = self.state.lock().unwrap();
        if st.interaction.is_click_suppressed() {
            tracing::trace!("track click suppressed during {:?}", st.interaction.phase());
            return;
        }
        let Some(content) = st.content.clone() else {
            return;
        };
        let current = content.lock().unwrap().scroll_top();

        let click_offset = event.y - track_top;
        let amount = click_offset - st.thumb.geometry.top - st.thumb.geometry.height / 2.0;
        let duration = st.config.track_click_duration;
        st.motion.smooth_scroll_to(current + amount, duration);
    }

    /// Pointer-down on a step button: start continuous scrolling.
    /// Inert while the content does not overflow.
    pub fn on_button_press(&self, direction: StepDirection) {
        let mut st = self.state.lock().unwrap();
        if !st.thumb.overflowing {
            return;
        }
        st.motion.start_continuous(direction);
    }

    /// Pointer-up on, or pointer leaving, a step button: stop
    /// continuous scrolling. No-op when nothing is running.
    pub fn on_button_release(&self) {
        self.state.lock().unwrap().motion.stop_continuous();
    }

    /// Click on a step button: one discrete glide of `button_step`.
    /// Inert while the content does not overflow.
    pub fn on_button_click(&self, direction: StepDirection) {
        let mut st = self.state.lock().unwrap();
        if !st.thumb.overflowing {
            return;
        }
        let Some(content) = st.content.clone() else {
            return;
        };
        let current = content.lock().unwrap().scroll_top();
        let target = current + st.config.button_step * direction.factor();
        let duration = st.config.smooth_scroll_duration;
        st.motion.smooth_scroll_to(target, duration);
    }

    // =========================================================================
    // Sync Entry Points
    // =========================================================================

    /// The content region reported a scroll; refresh geometry
    pub fn on_content_scroll(&self) {
        Self::recompute(&self.state);
    }

    /// The host viewport resized; refresh geometry
    pub fn notify_resize(&self) {
        Self::recompute(&self.state);
    }

    /// Advance time-based interaction state and pick up offset changes
    /// made by frame animations since the last recompute
    pub fn tick(&self, dt: f32) {
        let (content, last) = {
            let mut st = self.state.lock().unwrap();
            st.interaction.tick(dt);
            (st.content.clone(), st.last_scroll_top)
        };
        let Some(content) = content else {
            return;
        };
        let scroll_top = content.lock().unwrap().scroll_top();
        if (scroll_top - last).abs() > f32::EPSILON {
            Self::recompute(&self.state);
        }
    }

    // =========================================================================
    // Visual State Queries
    // =========================================================================

    /// Current thumb geometry
    pub fn thumb(&self) -> ThumbGeometry {
        self.state.lock().unwrap().thumb.geometry
    }

    /// True when the content is taller than the viewport; gates thumb
    /// visibility and button enablement
    pub fn is_overflowing(&self) -> bool {
        self.state.lock().unwrap().thumb.overflowing
    }

    /// Current drag phase
    pub fn drag_phase(&self) -> DragPhase {
        self.state.lock().unwrap().interaction.phase()
    }

    /// True while a thumb drag is active
    pub fn is_dragging(&self) -> bool {
        self.state.lock().unwrap().interaction.is_dragging()
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn content(&self) -> Result<SharedContent, ContentError> {
        self.state
            .lock()
            .unwrap()
            .content
            .clone()
            .ok_or(ContentError::Detached)
    }

    fn write_scroll_top(&self, top: f32) {
        match self.content() {
            Ok(content) => {
                content.lock().unwrap().set_scroll_top(top);
                Self::recompute(&self.state);
            }
            Err(error) => tracing::trace!("scroll write dropped: {error}"),
        }
    }

    /// Apply a captured pointer move to the active drag session
    fn drag_move(state: &Mutex<ScrollViewState>, pointer_y: f32) {
        let (content, target) = {
            let st = state.lock().unwrap();
            let Some(content) = st.content.clone() else {
                return;
            };
            let client_height = content.lock().unwrap().metrics().client_height;
            let Some(target) = st.interaction.drag_target(
                pointer_y,
                st.thumb.geometry.height,
                client_height,
                st.config.drag_speed_factor,
            ) else {
                return;
            };
            (content, target)
        };
        content.lock().unwrap().set_scroll_top(target);
        Self::recompute(state);
    }

    /// Recompute thumb geometry from fresh metrics and notify the
    /// scroll callback. The callback runs after the state lock is
    /// released.
    fn recompute(state: &Mutex<ScrollViewState>) {
        let (callback, scroll_top) = {
            let mut st = state.lock().unwrap();
            let Some(content) = st.content.clone() else {
                return;
            };
            let metrics = content.lock().unwrap().metrics();
            st.thumb = compute_thumb(metrics, &st.config);
            st.last_scroll_top = metrics.scroll_top;
            tracing::trace!(
                "thumb recompute: height={:.1} top={:.1} offset={:.1}",
                st.thumb.geometry.height,
                st.thumb.geometry.top,
                metrics.scroll_top
            );
            (st.on_scroll.clone(), metrics.scroll_top)
        };
        if let Some(callback) = callback {
            callback(scroll_top);
        }
    }
}

impl Drop for ScrollView {
    fn drop(&mut self) {
        // Guaranteed teardown: a dropped facade must not leave a
        // capture, listeners, or a held selection lock behind
        self.unmount();
    }
}
