// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Folio Sections: which page section is "current" while scrolling.
//!
//! Single-page sites highlight the navigation entry of the section the reader
//! is looking at. [`ActiveSectionResolver`] derives that from intersection
//! batches:
//!
//! - Every section in the [`SectionRegistry`] is observed by one observer at
//!   thresholds `[0.1, 0.3, 0.5]`, with the top and bottom 10% of the viewport
//!   excluded.
//! - Of the intersecting entries in a batch above a 10% ratio, the one whose
//!   center is closest to the viewport center wins.
//! - Without a candidate the previous section stays current.
//!
//! The [`nav`] module turns the current section into link highlighting and
//! click behavior.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use folio_sections::{ActiveSectionResolver, ResolverConfig};
//! use folio_sim::SimHost;
//!
//! let host = SimHost::new(Size::new(800.0, 1000.0));
//! host.insert_element("hero", 1_u32, Rect::new(0.0, 0.0, 800.0, 1000.0));
//! host.insert_element("about", 2, Rect::new(0.0, 1000.0, 800.0, 2000.0));
//!
//! let mut resolver = ActiveSectionResolver::new(&host, ResolverConfig::default());
//! resolver.set_section_ids(["hero", "about"]);
//! assert_eq!(resolver.current(), "");
//!
//! for (observer, entries) in host.flush_intersections() {
//!     resolver.handle_intersections(observer, &entries);
//! }
//! assert_eq!(resolver.current(), "hero");
//!
//! host.set_scroll_y(900.0);
//! for (observer, entries) in host.flush_intersections() {
//!     resolver.handle_intersections(observer, &entries);
//! }
//! assert_eq!(resolver.current(), "about");
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod nav;
mod registry;
mod resolver;

pub use nav::{NavAction, NavItem};
pub use registry::{Section, SectionRegistry};
pub use resolver::{
    ActiveSectionResolver, DEFAULT_MIN_RATIO, DEFAULT_SECTION_ROOT_MARGIN,
    DEFAULT_SECTION_THRESHOLDS, ResolverConfig,
};
