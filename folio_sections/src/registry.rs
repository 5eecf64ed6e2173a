// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashMap;

/// One registered page section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section<K> {
    /// Document identifier of the section, as used in `#anchor` links.
    pub id: String,
    /// The resolved element.
    pub element: K,
}

/// Ordered sections with a reverse index from element to section.
///
/// Ids are unique: a repeated id, or a second id resolving to an element that
/// is already registered, keeps the first occurrence. Ids that do not resolve
/// are skipped.
#[derive(Clone, Debug)]
pub struct SectionRegistry<K> {
    sections: Vec<Section<K>>,
    by_element: HashMap<K, usize>,
}

impl<K> Default for SectionRegistry<K> {
    fn default() -> Self {
        Self {
            sections: Vec::new(),
            by_element: HashMap::new(),
        }
    }
}

impl<K: Clone + Eq + Hash> SectionRegistry<K> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry by resolving each id through `lookup`.
    pub fn resolve<I, S>(ids: I, mut lookup: impl FnMut(&str) -> Option<K>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut registry = Self::new();
        for id in ids {
            let id = id.as_ref();
            if registry.contains_id(id) {
                continue;
            }
            let Some(element) = lookup(id) else {
                #[cfg(feature = "tracing")]
                tracing::debug!(id, "section not in document");
                continue;
            };
            registry.insert(String::from(id), element);
        }
        registry
    }

    /// Appends a section. Returns `false` if the id or the element is already
    /// registered.
    pub fn insert(&mut self, id: String, element: K) -> bool {
        if self.contains_id(&id) || self.by_element.contains_key(&element) {
            return false;
        }
        self.by_element.insert(element.clone(), self.sections.len());
        self.sections.push(Section { id, element });
        true
    }

    /// Returns `true` if a section with `id` is registered.
    #[must_use]
    pub fn contains_id(&self, id: &str) -> bool {
        self.sections.iter().any(|s| s.id == id)
    }

    /// The section id registered for `element`.
    #[must_use]
    pub fn id_of(&self, element: &K) -> Option<&str> {
        self.by_element
            .get(element)
            .map(|&i| self.sections[i].id.as_str())
    }

    /// The element registered under `id`.
    #[must_use]
    pub fn element_of(&self, id: &str) -> Option<&K> {
        self.sections
            .iter()
            .find(|s| s.id == id)
            .map(|s| &s.element)
    }

    /// Registered elements in order.
    #[must_use]
    pub fn elements(&self) -> Vec<K> {
        self.sections.iter().map(|s| s.element.clone()).collect()
    }

    /// Registered sections in order.
    pub fn iter(&self) -> core::slice::Iter<'_, Section<K>> {
        self.sections.iter()
    }

    /// Number of registered sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Returns `true` if no section is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl<'a, K> IntoIterator for &'a SectionRegistry<K> {
    type Item = &'a Section<K>;
    type IntoIter = core::slice::Iter<'a, Section<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.iter()
    }
}
