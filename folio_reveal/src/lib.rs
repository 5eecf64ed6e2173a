// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Folio Reveal: reveal-on-scroll visibility for individual elements.
//!
//! A [`VisibilityTracker`] watches one element through an
//! [`IntersectionHost`](folio_host::IntersectionHost) and reports whether it
//! should render as revealed:
//!
//! - It becomes visible once at least
//!   [`TrackerConfig::visibility_threshold`] of the element intersects the
//!   viewport shrunk by [`TrackerConfig::root_margin`].
//! - With a delay, the reveal is scheduled on a [`TimerHost`](folio_host::TimerHost)
//!   and canceled if the element leaves first.
//! - With `trigger_once` (the default) the first reveal latches and the
//!   observation is released.
//! - Users who prefer reduced motion, and hosts without intersection support,
//!   see content immediately.
//!
//! [`RevealPlan`] mounts trackers for a list of element ids in one go,
//! including staggered delays for sequences of cards.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use folio_reveal::{TrackerConfig, VisibilityTracker};
//! use folio_sim::SimHost;
//!
//! let host = SimHost::new(Size::new(800.0, 600.0));
//! host.insert_element("services", 7_u32, Rect::new(0.0, 900.0, 800.0, 1300.0));
//!
//! let mut tracker = VisibilityTracker::with_element(&host, TrackerConfig::default(), 7);
//! for (observer, entries) in host.flush_intersections() {
//!     tracker.handle_intersections(observer, &entries);
//! }
//! assert!(!tracker.is_visible());
//!
//! host.set_scroll_y(500.0);
//! for (observer, entries) in host.flush_intersections() {
//!     tracker.handle_intersections(observer, &entries);
//! }
//! assert!(tracker.is_visible());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod plan;
mod tracker;

pub use config::{
    DEFAULT_ROOT_MARGIN, DEFAULT_VISIBILITY_THRESHOLD, RevealPreset, TrackerConfig,
};
pub use plan::{RevealPlan, RevealSet};
pub use tracker::{TrackerMode, VisibilityState, VisibilityTracker};
