// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canvas drag controller: pan a surface by dragging, yielding to page scroll.
//!
//! ## State machine
//!
//! ```text
//! Idle       --pointer_down on the surface--> Dragging
//! Dragging   --pointer_up | wheel | drop----> Idle
//! Idle       --scroll-----------------------> Scrolling
//! Dragging   --scroll-----------------------> Scrolling
//! Scrolling  --scroll-----------------------> Scrolling (quiet timer restarts)
//! Scrolling  --quiet timer fires------------> Idle
//! ```
//!
//! [`DragPhase::Scrolling`] means a scroll happened within the quiet period;
//! pointer-down is refused until it elapses.
//!
//! While dragging, admitted pointer moves are coalesced into one pending frame.
//! When the frame runs, the movement since the last applied pointer position,
//! scaled by [`CanvasDragConfig::damping`], is added to the canvas offset.

use folio_host::{
    FrameHost, FrameId, ListenerHost, ListenerId, ListenerKinds, TimerHost, TimerId,
    UiOverrideHost, UiOverrides,
};
use kurbo::{Affine, Point, Vec2};

use crate::drag::PointerTrack;
use crate::{
    DEFAULT_MOVE_THROTTLE_MS, DEFAULT_SCROLL_QUIET_MS, FrameSlot, MoveThrottle, OverrideGuard,
    ScrollGuard,
};

/// Default multiplier applied to pointer movement.
pub const DEFAULT_DAMPING: f64 = 0.15;

/// Tunables of a [`CanvasDragController`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasDragConfig {
    /// Multiplier applied to pointer movement before it moves the canvas.
    pub damping: f64,
    /// Minimum time between two admitted pointer moves.
    pub move_throttle_ms: u64,
    /// Time without scroll events before scrolling counts as finished.
    pub scroll_quiet_ms: u64,
}

impl Default for CanvasDragConfig {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            move_throttle_ms: DEFAULT_MOVE_THROTTLE_MS,
            scroll_quiet_ms: DEFAULT_SCROLL_QUIET_MS,
        }
    }
}

impl CanvasDragConfig {
    /// Sets the damping factor.
    #[must_use]
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Sets the pointer-move throttle window.
    #[must_use]
    pub fn with_move_throttle_ms(mut self, ms: u64) -> Self {
        self.move_throttle_ms = ms;
        self
    }

    /// Sets the scroll quiet period.
    #[must_use]
    pub fn with_scroll_quiet_ms(mut self, ms: u64) -> Self {
        self.scroll_quiet_ms = ms;
        self
    }
}

/// A pointer event as delivered by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent<K> {
    /// Pointer position in viewport coordinates.
    pub position: Point,
    /// The innermost element under the pointer.
    pub target: K,
    /// Event timestamp in milliseconds.
    pub time_ms: u64,
}

/// Phase of the drag controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DragPhase {
    /// Ready to start a drag.
    Idle,
    /// A scroll is in flight; drags cannot start.
    Scrolling,
    /// A drag is in progress.
    Dragging,
}

/// Cursor the surface should show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DragCursor {
    /// Open hand: the surface can be dragged.
    Grab,
    /// Closed hand: the surface is being dragged.
    Grabbing,
}

/// Snapshot of the drag state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasDragState {
    /// Whether a drag is in progress.
    pub is_dragging: bool,
    /// Where the current (or last) drag started.
    pub drag_start: Point,
    /// Accumulated canvas translation across every drag.
    pub canvas_offset: Vec2,
}

/// Drag-to-pan controller for one surface element.
///
/// The controller owns every registration it makes on its host: a scroll
/// listener for its whole lifetime, pointer listeners and UI overrides for the
/// duration of a drag, the scroll guard's quiet timer, and at most one pending
/// frame. Dropping it releases all of them.
///
/// ```
/// use folio_event_state::{CanvasDragController, CanvasDragConfig, PointerEvent};
/// use folio_sim::SimHost;
/// use kurbo::{Point, Size, Vec2};
///
/// const SURFACE: u32 = 1;
/// let host = SimHost::new(Size::new(800.0, 600.0));
/// let mut canvas = CanvasDragController::new(&host, SURFACE, CanvasDragConfig::default());
///
/// let at = |x, y, time_ms| PointerEvent { position: Point::new(x, y), target: SURFACE, time_ms };
/// assert!(canvas.pointer_down(&at(0.0, 0.0, 0)));
/// canvas.pointer_move(&at(100.0, 50.0, 20));
/// for frame in host.take_frames() {
///     canvas.handle_frame(frame);
/// }
/// canvas.pointer_up();
/// assert_eq!(canvas.canvas_offset(), Vec2::new(15.0, 7.5));
/// ```
#[derive(Debug)]
pub struct CanvasDragController<K, H>
where
    H: TimerHost + FrameHost + ListenerHost + UiOverrideHost<K>,
{
    host: H,
    surface: K,
    config: CanvasDragConfig,
    track: PointerTrack,
    drag_start: Point,
    offset: Vec2,
    scroll: ScrollGuard,
    throttle: MoveThrottle,
    frame: FrameSlot<Point>,
    scroll_listener: Option<ListenerId>,
    drag_listener: Option<ListenerId>,
    overrides: Option<OverrideGuard<K, H>>,
}

impl<K, H> CanvasDragController<K, H>
where
    K: Clone + PartialEq,
    H: Clone + TimerHost + FrameHost + ListenerHost + UiOverrideHost<K>,
{
    /// Creates a controller for `surface` and starts listening for scrolls.
    pub fn new(host: H, surface: K, config: CanvasDragConfig) -> Self {
        let scroll_listener = host.listen(ListenerKinds::SCROLL | ListenerKinds::WHEEL);
        Self {
            host,
            surface,
            config,
            track: PointerTrack::default(),
            drag_start: Point::ZERO,
            offset: Vec2::ZERO,
            scroll: ScrollGuard::default(),
            throttle: MoveThrottle::new(config.move_throttle_ms),
            frame: FrameSlot::default(),
            scroll_listener: Some(scroll_listener),
            drag_listener: None,
            overrides: None,
        }
    }

    /// Starts a drag if `event` targets the surface itself and no scroll is in
    /// flight. Returns `true` if a drag started.
    ///
    /// Presses on descendants of the surface (buttons, links, cards) never
    /// start a drag.
    pub fn pointer_down(&mut self, event: &PointerEvent<K>) -> bool {
        if self.scroll.is_scrolling() || event.target != self.surface {
            return false;
        }
        self.end_drag();
        self.track.begin(event.position);
        self.drag_start = event.position;
        self.throttle.reset();
        self.drag_listener = Some(
            self.host
                .listen(ListenerKinds::POINTER_MOVE | ListenerKinds::POINTER_UP),
        );
        self.overrides = Some(OverrideGuard::acquire(
            self.host.clone(),
            self.surface.clone(),
            UiOverrides::SUPPRESS_TEXT_SELECTION | UiOverrides::EXCLUSIVE_POINTER_ROUTING,
        ));
        #[cfg(feature = "tracing")]
        tracing::debug!(x = event.position.x, y = event.position.y, "canvas drag started");
        true
    }
}

impl<K, H> CanvasDragController<K, H>
where
    H: TimerHost + FrameHost + ListenerHost + UiOverrideHost<K>,
{
    /// Queues a pointer move for the next frame.
    ///
    /// Ignored unless dragging and not scrolling, and throttled to one move
    /// per [`CanvasDragConfig::move_throttle_ms`].
    pub fn pointer_move(&mut self, event: &PointerEvent<K>) {
        if !self.track.is_active() || self.scroll.is_scrolling() {
            return;
        }
        if !self.throttle.admit(event.time_ms) {
            return;
        }
        self.frame.request(&self.host, event.position);
    }

    /// Applies the queued move for `frame`. Returns `true` if the offset
    /// changed.
    pub fn handle_frame(&mut self, frame: FrameId) -> bool {
        let Some(position) = self.frame.take(frame) else {
            return false;
        };
        let Some(delta) = self.track.advance(position) else {
            return false;
        };
        let before = self.offset;
        self.offset += delta * self.config.damping;
        self.offset != before
    }

    /// Ends the drag on pointer release.
    pub fn pointer_up(&mut self) {
        self.end_drag();
    }

    /// Ends the drag so the wheel scrolls the page instead.
    pub fn wheel(&mut self) {
        self.end_drag();
    }

    /// Records a document scroll: ends any drag and restarts the scroll
    /// guard's quiet period.
    pub fn scroll(&mut self) {
        self.end_drag();
        self.scroll.on_scroll(&self.host, self.config.scroll_quiet_ms);
    }

    /// Clears the scroll guard when its quiet timer fires. Returns `true` if
    /// `timer` belonged to this controller.
    pub fn handle_timer(&mut self, timer: TimerId) -> bool {
        self.scroll.handle_timer(timer)
    }

    /// Accumulated canvas translation.
    #[must_use]
    pub fn canvas_offset(&self) -> Vec2 {
        self.offset
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.track.is_active()
    }

    /// Whether a scroll happened within the quiet period.
    #[must_use]
    pub fn is_scrolling(&self) -> bool {
        self.scroll.is_scrolling()
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> DragPhase {
        if self.track.is_active() {
            DragPhase::Dragging
        } else if self.scroll.is_scrolling() {
            DragPhase::Scrolling
        } else {
            DragPhase::Idle
        }
    }

    /// Snapshot of the drag state.
    #[must_use]
    pub fn state(&self) -> CanvasDragState {
        CanvasDragState {
            is_dragging: self.is_dragging(),
            drag_start: self.drag_start,
            canvas_offset: self.offset,
        }
    }

    /// Cursor the surface should show.
    #[must_use]
    pub fn cursor(&self) -> DragCursor {
        if self.is_dragging() {
            DragCursor::Grabbing
        } else {
            DragCursor::Grab
        }
    }

    /// Translation to apply to the surface.
    #[must_use]
    pub fn transform(&self) -> Affine {
        Affine::translate(self.offset)
    }

    /// The controller's configuration.
    #[must_use]
    pub fn config(&self) -> &CanvasDragConfig {
        &self.config
    }

    /// The dragged surface.
    #[must_use]
    pub fn surface(&self) -> &K {
        &self.surface
    }

    fn end_drag(&mut self) {
        self.frame.cancel(&self.host);
        if let Some(listener) = self.drag_listener.take() {
            self.host.unlisten(listener);
        }
        self.overrides = None;
        if self.track.is_active() {
            self.track.end();
            #[cfg(feature = "tracing")]
            tracing::debug!(
                x = self.offset.x,
                y = self.offset.y,
                "canvas drag ended"
            );
        }
    }
}

impl<K, H> Drop for CanvasDragController<K, H>
where
    H: TimerHost + FrameHost + ListenerHost + UiOverrideHost<K>,
{
    fn drop(&mut self) {
        self.end_drag();
        self.scroll.cancel(&self.host);
        if let Some(listener) = self.scroll_listener.take() {
            self.host.unlisten(listener);
        }
    }
}
