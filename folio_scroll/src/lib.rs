// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Folio Scroll: scroll the document to in-page anchors.
//!
//! - [`scroll_to_anchor`] scrolls an element into view with an optional top
//!   offset (for fixed headers). Missing ids are ignored. Users who prefer
//!   reduced motion get an instant jump instead of a smooth scroll.
//! - [`scroll_to_top`] returns to the top of the page.
//! - [`ScrollAnimator`] eases toward a target frame by frame, for hosts whose
//!   scroll commands only support instant jumps.
//!
//! This crate is `no_std`.

#![no_std]

mod anchor;
mod animator;

pub use anchor::{
    anchor_command, behavior_for, scroll_target, scroll_to_anchor, scroll_to_top,
};
pub use animator::{DEFAULT_EASE, SETTLE_DISTANCE, ScrollAnimator};
