// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Software intersection observer.
//!
//! Hosts without a native intersection capability (headless renderers, tests,
//! native shells) can keep one [`SoftwareObserver`] per registered observer and
//! call [`SoftwareObserver::update`] after every scroll or layout change.

use alloc::vec::Vec;

use kurbo::Rect;

use crate::{IntersectionEntry, Measurement, RootMargin, Thresholds};

#[derive(Clone, Debug)]
struct Tracked<K> {
    target: K,
    last: Option<(usize, bool)>,
}

/// Detects threshold crossings for a set of targets.
///
/// Every target gets an initial entry on the first update after it is
/// observed. Afterwards an entry is only produced when the target's threshold
/// index or intersecting state changes. Entries come out in observation order.
///
/// ```
/// use kurbo::Rect;
/// use folio_intersection::{RootMargin, SoftwareObserver, Thresholds};
///
/// let mut observer = SoftwareObserver::new(Thresholds::single(0.5), RootMargin::ZERO);
/// observer.observe("card");
///
/// let viewport = Rect::new(0.0, 0.0, 800.0, 600.0);
/// let mut card = Rect::new(0.0, 700.0, 100.0, 800.0);
///
/// let entries = observer.update(viewport, 0, |_| Some(card));
/// assert_eq!(entries.len(), 1);
/// assert!(!entries[0].is_intersecting);
///
/// // Nothing crossed: no entry.
/// card = Rect::new(0.0, 650.0, 100.0, 750.0);
/// assert!(observer.update(viewport, 16, |_| Some(card)).is_empty());
///
/// card = Rect::new(0.0, 400.0, 100.0, 500.0);
/// let entries = observer.update(viewport, 32, |_| Some(card));
/// assert!(entries[0].is_intersecting);
/// ```
#[derive(Clone, Debug)]
pub struct SoftwareObserver<K> {
    thresholds: Thresholds,
    root_margin: RootMargin,
    targets: Vec<Tracked<K>>,
}

impl<K: Clone + PartialEq> SoftwareObserver<K> {
    /// Creates an observer with no targets.
    #[must_use]
    pub fn new(thresholds: Thresholds, root_margin: RootMargin) -> Self {
        Self {
            thresholds,
            root_margin,
            targets: Vec::new(),
        }
    }

    /// Returns the observer's thresholds.
    #[must_use]
    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Returns the observer's root margin.
    #[must_use]
    pub fn root_margin(&self) -> &RootMargin {
        &self.root_margin
    }

    /// Starts observing `target`. Observing a target twice has no effect.
    pub fn observe(&mut self, target: K) {
        if !self.targets.iter().any(|t| t.target == target) {
            self.targets.push(Tracked { target, last: None });
        }
    }

    /// Stops observing `target`. Returns `true` if it was observed.
    pub fn unobserve(&mut self, target: &K) -> bool {
        let before = self.targets.len();
        self.targets.retain(|t| t.target != *target);
        before != self.targets.len()
    }

    /// Stops observing every target.
    pub fn disconnect(&mut self) {
        self.targets.clear();
    }

    /// Number of observed targets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Returns `true` if no target is observed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Measures every target against `viewport` and returns the entries whose
    /// state changed.
    ///
    /// `rect_of` returns a target's bounding rect in viewport coordinates, or
    /// `None` if it is currently detached; detached targets are skipped and
    /// keep their previous state.
    pub fn update(
        &mut self,
        viewport: Rect,
        time_ms: u64,
        mut rect_of: impl FnMut(&K) -> Option<Rect>,
    ) -> Vec<IntersectionEntry<K>> {
        let mut entries = Vec::new();
        for tracked in &mut self.targets {
            let Some(bounding_rect) = rect_of(&tracked.target) else {
                continue;
            };
            let m = Measurement::new(bounding_rect, viewport, &self.root_margin);
            let state = (
                m.threshold_index(&self.thresholds),
                m.is_intersecting(&self.thresholds),
            );
            if tracked.last == Some(state) {
                continue;
            }
            tracked.last = Some(state);
            entries.push(IntersectionEntry {
                target: tracked.target.clone(),
                is_intersecting: state.1,
                intersection_ratio: m.ratio,
                bounding_rect,
                root_bounds: m.root_bounds,
                viewport,
                time_ms,
            });
        }
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Rect = Rect::new(0.0, 0.0, 800.0, 600.0);

    fn rect_at(y: f64) -> Rect {
        Rect::new(0.0, y, 100.0, y + 100.0)
    }

    #[test]
    fn initial_entry_is_always_reported() {
        let mut observer = SoftwareObserver::new(Thresholds::single(0.15), RootMargin::ZERO);
        observer.observe(7_u32);
        let entries = observer.update(VIEWPORT, 0, |_| Some(rect_at(2000.0)));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].target, 7);
        assert!(!entries[0].is_intersecting);
    }

    #[test]
    fn crossing_each_threshold_reports_once() {
        let mut observer =
            SoftwareObserver::new(Thresholds::new(&[0.1, 0.3, 0.5]), RootMargin::ZERO);
        observer.observe(1_u32);
        observer.update(VIEWPORT, 0, |_| Some(rect_at(600.0)));

        // 20% visible: crosses 0.1.
        let e = observer.update(VIEWPORT, 1, |_| Some(rect_at(580.0)));
        assert_eq!(e.len(), 1);
        assert!(e[0].is_intersecting);
        // 25% visible: same bucket.
        assert!(observer.update(VIEWPORT, 2, |_| Some(rect_at(575.0))).is_empty());
        // 40% visible: crosses 0.3.
        assert_eq!(observer.update(VIEWPORT, 3, |_| Some(rect_at(560.0))).len(), 1);
    }

    #[test]
    fn detached_targets_are_skipped() {
        let mut observer = SoftwareObserver::new(Thresholds::default(), RootMargin::ZERO);
        observer.observe(1_u32);
        observer.observe(2_u32);
        let entries = observer.update(VIEWPORT, 0, |k| (*k == 2).then(|| rect_at(0.0)));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].target, 2);
    }

    #[test]
    fn observe_is_idempotent_and_unobserve_reports_presence() {
        let mut observer = SoftwareObserver::new(Thresholds::default(), RootMargin::ZERO);
        observer.observe(1_u32);
        observer.observe(1_u32);
        assert_eq!(observer.len(), 1);
        assert!(observer.unobserve(&1));
        assert!(!observer.unobserve(&1));
        assert!(observer.is_empty());
    }
}
