// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use smallvec::{SmallVec, smallvec};

/// An item that can be found by text search.
pub trait Searchable {
    /// Stable identifier used in detail-page routes.
    fn slug(&self) -> &str;

    /// Text fields matched against the query.
    fn search_fields(&self) -> SmallVec<[&str; 4]>;
}

impl<T: Searchable + ?Sized> Searchable for &T {
    fn slug(&self) -> &str {
        (**self).slug()
    }

    fn search_fields(&self) -> SmallVec<[&str; 4]> {
        (**self).search_fields()
    }
}

/// A showcase entry: title, one-line description and a category tag.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ProjectEntry {
    /// Route identifier, for example `"beauty-secrets"`.
    pub slug: String,
    /// Display title.
    pub title: String,
    /// One-line summary.
    pub description: String,
    /// Category tag such as `"SEO"`.
    pub tag: String,
}

impl ProjectEntry {
    /// Creates an entry.
    pub fn new(
        slug: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        tag: impl Into<String>,
    ) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            description: description.into(),
            tag: tag.into(),
        }
    }
}

impl Searchable for ProjectEntry {
    fn slug(&self) -> &str {
        &self.slug
    }

    fn search_fields(&self) -> SmallVec<[&str; 4]> {
        smallvec![&*self.title, &*self.description, &*self.tag]
    }
}

/// Finds the item whose slug is `slug`.
pub fn find_by_slug<'a, T: Searchable>(items: &'a [T], slug: &str) -> Option<&'a T> {
    items.iter().find(|item| item.slug() == slug)
}
