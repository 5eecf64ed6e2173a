// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Folio Host: the platform capabilities Folio's interaction primitives consume.
//!
//! Components in the `folio_*` crates never talk to a platform directly. They
//! are generic over small capability traits and hold a host handle:
//!
//! - [`IntersectionHost`]: observe elements against the viewport.
//! - [`TimerHost`] and [`FrameHost`]: cancelable timeouts and frame callbacks.
//! - [`ListenerHost`]: document-wide pointer and scroll listeners.
//! - [`MotionHost`]: the reduced-motion preference.
//! - [`ElementHost`]: element lookup by identifier and measurement.
//! - [`ScrollHost`]: document scroll offset and scroll commands.
//! - [`UiOverrideHost`]: temporary global overrides such as suppressed text
//!   selection.
//!
//! Hosts deliver callbacks (intersection batches, timer expiries, frames) by
//! calling the owning component with the handle id that was issued. Components
//! ignore ids they no longer hold, so late callbacks are harmless.
//!
//! ## Implementing a host
//!
//! ```rust
//! use core::cell::Cell;
//! use folio_host::{TimerHost, TimerId};
//!
//! #[derive(Default)]
//! struct Timers {
//!     next: Cell<u64>,
//!     pending: Cell<usize>,
//! }
//!
//! impl TimerHost for Timers {
//!     fn set_timeout(&self, _delay_ms: u64) -> TimerId {
//!         self.next.set(self.next.get() + 1);
//!         self.pending.set(self.pending.get() + 1);
//!         TimerId::new(self.next.get())
//!     }
//!
//!     fn clear_timeout(&self, _timer: TimerId) {
//!         self.pending.set(self.pending.get().saturating_sub(1));
//!     }
//! }
//!
//! let timers = Timers::default();
//! // Components can hold `&Timers` or `Rc<Timers>`.
//! let handle: &Timers = &timers;
//! let id = handle.set_timeout(150);
//! handle.clear_timeout(id);
//! assert_eq!(timers.pending.get(), 0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod capability;
mod types;

pub use capability::{
    ElementHost, FrameHost, IntersectionHost, ListenerHost, MotionHost, ScrollHost, TimerHost,
    UiOverrideHost,
};
pub use types::{
    Capability, CapabilityError, FrameId, ListenerId, ListenerKinds, ObserverId, ObserverInit,
    ScrollBehavior, ScrollCommand, TimerId, UiOverrides,
};

pub use folio_intersection::IntersectionEntry;
