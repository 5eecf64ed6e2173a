// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Folio Search: the state behind a "search projects" dialog.
//!
//! [`SearchSession`] owns a list of [`Searchable`] items and tracks the dialog's
//! open state, the query, the matching results and a keyboard selection:
//!
//! - Typing replaces the query and selects the first result.
//! - Arrow keys move the selection and wrap at both ends.
//! - Enter (or a click through [`SearchSession::choose`]) reports the chosen
//!   item and resets the session.
//!
//! ```rust
//! use folio_search::{ProjectEntry, SearchKey, SearchOutcome, SearchSession};
//!
//! let mut search = SearchSession::new([
//!     ProjectEntry::new("hajir-ma", "Hajir.ma", "Job portal with analytics.", "SEO"),
//!     ProjectEntry::new("urabuy", "Urabuy", "E-commerce platform.", "E-Commerce"),
//! ]);
//! search.open();
//! search.set_query("COMMERCE");
//! assert_eq!(search.results().count(), 1);
//!
//! let Some(SearchOutcome::Chosen(index)) = search.handle_key(SearchKey::Enter) else {
//!     panic!("a result was selected");
//! };
//! assert_eq!(search.items()[index].slug, "urabuy");
//! assert!(!search.is_open());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod item;
mod session;

pub use item::{ProjectEntry, Searchable, find_by_slug};
pub use session::{SearchKey, SearchOutcome, SearchSession};
