// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Folio Intersection: viewport intersection geometry.
//!
//! This crate models the part of "is this element on screen?" that does not
//! depend on any platform:
//!
//! - [`RootMargin`]: CSS-style margin shorthand (`"0px 0px -5% 0px"`) that grows
//!   or shrinks the viewport before intersection is computed.
//! - [`Thresholds`]: the ratios at which an observer reports changes.
//! - [`Measurement`]: the intersection ratio of one target against a
//!   margin-adjusted root.
//! - [`IntersectionEntry`]: the record delivered to observers, mirroring what
//!   platform observers report.
//! - [`SoftwareObserver`]: a threshold-crossing detector for hosts that have no
//!   native intersection capability.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use folio_intersection::{Measurement, RootMargin, Thresholds};
//!
//! let viewport = Rect::new(0.0, 0.0, 800.0, 600.0);
//! let margin: RootMargin = "0px 0px -5% 0px".parse().unwrap();
//!
//! // A card whose top half sits above the bottom edge of the viewport.
//! let card = Rect::new(0.0, 500.0, 200.0, 700.0);
//! let m = Measurement::new(card, viewport, &margin);
//!
//! assert!(m.ratio > 0.15);
//! assert!(m.is_intersecting(&Thresholds::single(0.15)));
//! ```
//!
//! Rects are expected in viewport coordinates (origin at the top-left of the
//! visible area), which is what platform bounding-rect queries return.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod entry;
mod margin;
mod observer;
mod thresholds;

pub use entry::{IntersectionEntry, Measurement};
pub use margin::{MarginLength, RootMargin, RootMarginError};
pub use observer::SoftwareObserver;
pub use thresholds::Thresholds;
