// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;
use core::hash::Hash;

use folio_host::{ElementHost, IntersectionEntry, IntersectionHost, ObserverId, ObserverInit};
use folio_intersection::{MarginLength, RootMargin, Thresholds};

use crate::SectionRegistry;

/// Thresholds the resolver observes at.
pub const DEFAULT_SECTION_THRESHOLDS: [f64; 3] = [0.1, 0.3, 0.5];

/// Root margin that ignores the top and bottom 10% of the viewport.
pub const DEFAULT_SECTION_ROOT_MARGIN: RootMargin =
    RootMargin::vertical(MarginLength::Percent(-10.0), MarginLength::Percent(-10.0));

/// Minimum intersection ratio (exclusive) for a section to be a candidate.
pub const DEFAULT_MIN_RATIO: f64 = 0.1;

/// Configuration of an [`ActiveSectionResolver`].
#[derive(Clone, Debug, PartialEq)]
pub struct ResolverConfig {
    thresholds: Thresholds,
    root_margin: RootMargin,
    min_ratio: f64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            thresholds: Thresholds::new(&DEFAULT_SECTION_THRESHOLDS),
            root_margin: DEFAULT_SECTION_ROOT_MARGIN,
            min_ratio: DEFAULT_MIN_RATIO,
        }
    }
}

impl ResolverConfig {
    /// Sets the observer thresholds.
    #[must_use]
    pub fn with_thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Sets the observer root margin.
    #[must_use]
    pub fn with_root_margin(mut self, root_margin: RootMargin) -> Self {
        self.root_margin = root_margin;
        self
    }

    /// Sets the ratio a section must exceed to become a candidate.
    #[must_use]
    pub fn with_min_ratio(mut self, min_ratio: f64) -> Self {
        self.min_ratio = min_ratio;
        self
    }

    /// Observer thresholds.
    #[must_use]
    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Observer root margin.
    #[must_use]
    pub fn root_margin(&self) -> RootMargin {
        self.root_margin
    }

    /// Ratio a section must exceed to become a candidate.
    #[must_use]
    pub fn min_ratio(&self) -> f64 {
        self.min_ratio
    }

    fn observer_init(&self) -> ObserverInit {
        ObserverInit {
            thresholds: self.thresholds.clone(),
            root_margin: self.root_margin,
        }
    }
}

/// Tracks which page section is currently "in view".
///
/// All registered sections share one observation. Each batch of entries is
/// filtered to intersecting sections above [`ResolverConfig::min_ratio`], and
/// the one whose vertical center is closest to the viewport's vertical center
/// becomes current. Ties go to the earliest entry in the batch. A batch with
/// no candidate leaves the current id unchanged, so the highlight never
/// flickers off between sections.
///
/// Only the entries of the delivered batch are considered; sections whose
/// state did not change in that batch do not compete.
#[derive(Debug)]
pub struct ActiveSectionResolver<K, H>
where
    H: IntersectionHost<K>,
{
    host: H,
    config: ResolverConfig,
    ids: Vec<String>,
    registry: SectionRegistry<K>,
    observer: Option<ObserverId>,
    current: String,
}

impl<K, H> ActiveSectionResolver<K, H>
where
    K: Clone + Eq + Hash,
    H: IntersectionHost<K> + ElementHost<K>,
{
    /// Creates a resolver with no sections and an empty current id.
    pub fn new(host: H, config: ResolverConfig) -> Self {
        Self {
            host,
            config,
            ids: Vec::new(),
            registry: SectionRegistry::new(),
            observer: None,
            current: String::new(),
        }
    }

    /// Registers the sections to track, in document order.
    ///
    /// The observation is only rebuilt when the list differs from the
    /// previous call. The current id is kept.
    pub fn set_section_ids<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ids: Vec<String> = ids.into_iter().map(Into::into).collect();
        if ids == self.ids && (self.observer.is_some() || self.registry.is_empty()) {
            return;
        }
        self.disconnect();
        let host = &self.host;
        self.registry = SectionRegistry::resolve(&ids, |id| host.element_by_id(id));
        self.ids = ids;
        if self.registry.is_empty() {
            return;
        }
        match self
            .host
            .observe(&self.registry.elements(), &self.config.observer_init())
        {
            Ok(id) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    observer = id.get(),
                    sections = self.registry.len(),
                    "observing sections"
                );
                self.observer = Some(id);
            }
            Err(_err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(error = %_err, "section tracking unavailable");
            }
        }
    }

    /// Consumes a batch of entries delivered for `observer`.
    ///
    /// Returns `true` if the current id changed.
    pub fn handle_intersections(
        &mut self,
        observer: ObserverId,
        entries: &[IntersectionEntry<K>],
    ) -> bool {
        if self.observer != Some(observer) {
            return false;
        }
        let mut best: Option<(&str, f64)> = None;
        for entry in entries {
            if !entry.is_intersecting || entry.intersection_ratio <= self.config.min_ratio {
                continue;
            }
            let Some(id) = self.registry.id_of(&entry.target) else {
                continue;
            };
            let distance = entry.center_distance_y();
            if best.is_none_or(|(_, d)| distance < d) {
                best = Some((id, distance));
            }
        }
        let Some((id, _)) = best else {
            return false;
        };
        if id == self.current {
            return false;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(from = %self.current, to = id, "active section changed");
        self.current = String::from(id);
        true
    }

    /// The id of the current section; empty until a section qualifies.
    #[must_use]
    pub fn current(&self) -> &str {
        &self.current
    }

    /// The registered sections.
    #[must_use]
    pub fn registry(&self) -> &SectionRegistry<K> {
        &self.registry
    }

    /// The resolver's configuration.
    #[must_use]
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// The active observation, if any.
    #[must_use]
    pub fn observer(&self) -> Option<ObserverId> {
        self.observer
    }
}

impl<K, H> ActiveSectionResolver<K, H>
where
    H: IntersectionHost<K>,
{
    fn disconnect(&mut self) {
        if let Some(observer) = self.observer.take() {
            self.host.disconnect(observer);
        }
    }
}

impl<K, H> Drop for ActiveSectionResolver<K, H>
where
    H: IntersectionHost<K>,
{
    fn drop(&mut self) {
        self.disconnect();
    }
}
