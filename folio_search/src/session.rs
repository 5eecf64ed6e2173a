// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use smallvec::SmallVec;

use crate::{Searchable, find_by_slug};

/// Keys a search dialog forwards to its session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SearchKey {
    /// Move the selection down, wrapping to the first result.
    ArrowDown,
    /// Move the selection up, wrapping to the last result.
    ArrowUp,
    /// Choose the selected result.
    Enter,
    /// Dismiss the dialog.
    Escape,
}

/// Result of a key press or click that ends the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SearchOutcome {
    /// The item at this index of the session's item list was chosen.
    Chosen(usize),
    /// The dialog was dismissed without a choice.
    Dismissed,
}

/// Search dialog state: query, matching results and a keyboard selection.
///
/// Matching is a case-insensitive substring test against every
/// [`Searchable::search_fields`] entry. An empty query has no results.
///
/// The revision counter bumps whenever something a view would render changes
/// (open state, query, results or selection), and stays put for no-op calls.
#[derive(Clone, Debug)]
pub struct SearchSession<T> {
    items: Vec<T>,
    haystacks: Vec<SmallVec<[String; 4]>>,
    open: bool,
    query: String,
    matches: Vec<usize>,
    selected: usize,
    revision: u64,
}

impl<T: Searchable> SearchSession<T> {
    /// Creates a closed session over `items`.
    pub fn new<I: IntoIterator<Item = T>>(items: I) -> Self {
        let items: Vec<T> = items.into_iter().collect();
        let haystacks = items
            .iter()
            .map(|item| {
                item.search_fields()
                    .into_iter()
                    .map(str::to_lowercase)
                    .collect()
            })
            .collect();
        Self {
            items,
            haystacks,
            open: false,
            query: String::new(),
            matches: Vec::new(),
            selected: 0,
            revision: 0,
        }
    }

    /// Opens the dialog.
    pub fn open(&mut self) {
        if !self.open {
            self.open = true;
            self.bump_revision();
        }
    }

    /// Closes the dialog and clears the query and selection.
    pub fn close(&mut self) {
        if !self.open && self.query.is_empty() {
            return;
        }
        self.open = false;
        self.query.clear();
        self.matches.clear();
        self.selected = 0;
        self.bump_revision();
    }

    /// Replaces the query, recomputes the results and selects the first one.
    pub fn set_query(&mut self, query: &str) {
        if self.query == query {
            return;
        }
        self.query.clear();
        self.query.push_str(query);
        self.matches.clear();
        if !query.is_empty() {
            let needle = query.to_lowercase();
            self.matches.extend(
                self.haystacks
                    .iter()
                    .enumerate()
                    .filter(|(_, fields)| fields.iter().any(|f| f.contains(&*needle)))
                    .map(|(i, _)| i),
            );
        }
        self.selected = 0;
        self.bump_revision();
    }

    /// Handles a key press. Returns an outcome when the key ends the session.
    pub fn handle_key(&mut self, key: SearchKey) -> Option<SearchOutcome> {
        match key {
            SearchKey::ArrowDown => {
                self.select_next();
                None
            }
            SearchKey::ArrowUp => {
                self.select_previous();
                None
            }
            SearchKey::Enter => self.choose(self.selected),
            SearchKey::Escape => {
                self.close();
                Some(SearchOutcome::Dismissed)
            }
        }
    }

    /// Chooses the result at `result_index` (for example on click). The
    /// session closes. Returns `None` if there is no such result.
    pub fn choose(&mut self, result_index: usize) -> Option<SearchOutcome> {
        let item = *self.matches.get(result_index)?;
        self.close();
        Some(SearchOutcome::Chosen(item))
    }

    /// Moves the selection to the next result, wrapping around.
    pub fn select_next(&mut self) {
        let len = self.matches.len();
        if len == 0 {
            return;
        }
        self.set_selected((self.selected + 1) % len);
    }

    /// Moves the selection to the previous result, wrapping around.
    pub fn select_previous(&mut self) {
        let len = self.matches.len();
        if len == 0 {
            return;
        }
        self.set_selected((self.selected + len - 1) % len);
    }

    /// Selects the result under the pointer. Out-of-range indices are ignored.
    pub fn hover(&mut self, result_index: usize) {
        if result_index < self.matches.len() {
            self.set_selected(result_index);
        }
    }

    /// Whether the dialog is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The current query.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Matching items, in item order.
    pub fn results(&self) -> impl ExactSizeIterator<Item = &T> + '_ {
        self.matches.iter().map(|&i| &self.items[i])
    }

    /// Item indices of the matching items.
    #[must_use]
    pub fn matches(&self) -> &[usize] {
        &self.matches
    }

    /// Index of the selected result, if there are results.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        (self.selected < self.matches.len()).then_some(self.selected)
    }

    /// The selected item, if there are results.
    #[must_use]
    pub fn selected_item(&self) -> Option<&T> {
        self.matches.get(self.selected).map(|&i| &self.items[i])
    }

    /// Every searchable item.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// The item at `index` of the item list.
    #[must_use]
    pub fn item(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Looks an item up by slug, for example to render its detail page.
    #[must_use]
    pub fn find_by_slug(&self, slug: &str) -> Option<&T> {
        find_by_slug(&self.items, slug)
    }

    /// Returns the current revision counter.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn set_selected(&mut self, index: usize) {
        if self.selected != index {
            self.selected = index;
            self.bump_revision();
        }
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ProjectEntry;

    fn session() -> SearchSession<ProjectEntry> {
        SearchSession::new([
            ProjectEntry::new("shop", "Beauty Shop", "CMS-based shop", "E-Commerce"),
            ProjectEntry::new("jobs", "Jobs Portal", "Job portal with SEO", "SEO"),
            ProjectEntry::new("market", "Market", "E-commerce platform", "E-Commerce"),
        ])
    }

    #[test]
    fn empty_query_has_no_results() {
        let mut s = session();
        s.open();
        assert_eq!(s.results().len(), 0);
        assert_eq!(s.selected(), None);
        assert_eq!(s.handle_key(SearchKey::Enter), None);
        assert!(s.is_open());
    }

    #[test]
    fn matching_is_case_insensitive_over_every_field() {
        let mut s = session();
        s.set_query("e-COMMERCE");
        assert_eq!(s.matches(), &[0, 2]);
        s.set_query("portal");
        assert_eq!(s.matches(), &[1]);
        s.set_query("nothing like this");
        assert!(s.matches().is_empty());
    }

    #[test]
    fn query_change_resets_the_selection() {
        let mut s = session();
        s.set_query("e");
        s.select_next();
        assert_eq!(s.selected(), Some(1));
        s.set_query("shop");
        assert_eq!(s.selected(), Some(0));
    }

    #[test]
    fn arrows_wrap() {
        let mut s = session();
        s.set_query("commerce");
        s.handle_key(SearchKey::ArrowUp);
        assert_eq!(s.selected(), Some(1));
        s.handle_key(SearchKey::ArrowDown);
        assert_eq!(s.selected(), Some(0));
    }

    #[test]
    fn arrows_on_empty_results_are_noops() {
        let mut s = session();
        s.set_query("zzz");
        let revision = s.revision();
        s.select_next();
        s.select_previous();
        assert_eq!(s.revision(), revision);
        assert_eq!(s.selected(), None);
    }

    #[test]
    fn enter_chooses_and_resets() {
        let mut s = session();
        s.open();
        s.set_query("commerce");
        s.handle_key(SearchKey::ArrowDown);
        assert_eq!(s.handle_key(SearchKey::Enter), Some(SearchOutcome::Chosen(2)));
        assert!(!s.is_open());
        assert_eq!(s.query(), "");
        assert_eq!(s.selected(), None);
    }

    #[test]
    fn hover_selects_in_range_only() {
        let mut s = session();
        s.set_query("commerce");
        s.hover(1);
        assert_eq!(s.selected_item().map(|p| p.slug.as_str()), Some("market"));
        s.hover(5);
        assert_eq!(s.selected(), Some(1));
    }

    #[test]
    fn revision_tracks_observable_changes_only() {
        let mut s = session();
        let r0 = s.revision();
        s.close();
        assert_eq!(s.revision(), r0);
        s.open();
        s.open();
        assert_eq!(s.revision(), r0 + 1);
        s.set_query("a");
        s.set_query("a");
        assert_eq!(s.revision(), r0 + 2);
    }
}
