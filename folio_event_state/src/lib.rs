// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Folio Event State: state for dragging a canvas that lives inside a
//! scrolling page.
//!
//! This crate provides small, focused state machines that cooperate to pan a
//! surface with the pointer without fighting page scroll:
//!
//! - [`drag`]: [`PointerTrack`](drag::PointerTrack) keeps the start and last
//!   applied pointer positions of a gesture and yields incremental deltas.
//! - [`ScrollGuard`]: "a scroll is in flight" with a quiet period after the
//!   last scroll event.
//! - [`MoveThrottle`]: admits at most one pointer move per window.
//! - [`FrameSlot`]: coalesces moves into one pending frame callback.
//! - [`OverrideGuard`]: global UI overrides held for exactly one scope.
//! - [`CanvasDragController`]: composes the pieces above for one surface.
//!
//! ## Design
//!
//! Each piece tracks just enough state to compute its transitions and accepts
//! host handles and timestamps from the caller. Nothing here reads a clock or
//! talks to a platform directly; the `folio_host` capability traits are the
//! only way out.
//!
//! ## Drag yields to scroll
//!
//! ```rust
//! use folio_event_state::{CanvasDragController, CanvasDragConfig, DragPhase, PointerEvent};
//! use folio_sim::SimHost;
//! use kurbo::{Point, Size};
//!
//! let host = SimHost::new(Size::new(800.0, 600.0));
//! let mut canvas = CanvasDragController::new(&host, 1_u32, CanvasDragConfig::default());
//! let press = PointerEvent { position: Point::new(10.0, 10.0), target: 1, time_ms: 0 };
//!
//! canvas.scroll();
//! assert_eq!(canvas.phase(), DragPhase::Scrolling);
//! assert!(!canvas.pointer_down(&press));
//!
//! for timer in host.advance(150) {
//!     canvas.handle_timer(timer);
//! }
//! assert!(canvas.pointer_down(&press));
//! assert_eq!(canvas.phase(), DragPhase::Dragging);
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events when drags start and end.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod canvas;
pub mod drag;
mod frame;
mod overrides;
mod scroll_guard;
mod throttle;

pub use canvas::{
    CanvasDragConfig, CanvasDragController, CanvasDragState, DEFAULT_DAMPING, DragCursor,
    DragPhase, PointerEvent,
};
pub use frame::FrameSlot;
pub use overrides::OverrideGuard;
pub use scroll_guard::{DEFAULT_SCROLL_QUIET_MS, ScrollGuard};
pub use throttle::{DEFAULT_MOVE_THROTTLE_MS, MoveThrottle};
