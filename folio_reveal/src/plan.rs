// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reveal plans: trackers for a set of document elements, mounted together.

use alloc::string::String;
use alloc::vec::Vec;

use folio_host::{
    ElementHost, IntersectionEntry, IntersectionHost, MotionHost, ObserverId, TimerHost, TimerId,
};

use crate::{TrackerConfig, VisibilityTracker};

/// An ordered list of element ids and how each one reveals.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RevealPlan {
    items: Vec<(String, TrackerConfig)>,
}

impl RevealPlan {
    /// Creates an empty plan.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one element.
    #[must_use]
    pub fn with(mut self, id: impl Into<String>, config: TrackerConfig) -> Self {
        self.items.push((id.into(), config));
        self
    }

    /// Appends `ids` in order, each delayed `step_ms` more than the previous.
    ///
    /// ```
    /// use folio_reveal::{RevealPlan, TrackerConfig};
    ///
    /// let plan = RevealPlan::new().staggered(["a", "b", "c"], TrackerConfig::default(), 150);
    /// let delays: Vec<u64> = plan.items().map(|(_, c)| c.delay_ms()).collect();
    /// assert_eq!(delays, [0, 150, 300]);
    /// ```
    #[must_use]
    pub fn staggered<I>(mut self, ids: I, base: TrackerConfig, step_ms: u64) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        for (index, id) in ids.into_iter().enumerate() {
            self.items.push((id.into(), base.staggered(index, step_ms)));
        }
        self
    }

    /// Planned elements in order.
    pub fn items(&self) -> impl Iterator<Item = (&str, &TrackerConfig)> + '_ {
        self.items.iter().map(|(id, c)| (id.as_str(), c))
    }

    /// Number of planned elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if nothing is planned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Resolves every id on `host` and starts one tracker per element found.
    ///
    /// Every tracker holds its own clone of `host`, so pass a shared handle
    /// such as `&Host` or `Rc<Host>`. Ids the document does not contain are
    /// skipped.
    pub fn mount<K, H>(&self, host: H) -> RevealSet<K, H>
    where
        K: PartialEq,
        H: Clone + ElementHost<K> + IntersectionHost<K> + TimerHost + MotionHost,
    {
        let mut trackers = Vec::with_capacity(self.items.len());
        for (id, config) in &self.items {
            let Some(element) = host.element_by_id(id) else {
                #[cfg(feature = "tracing")]
                tracing::debug!(id = %id, "reveal target not in document");
                continue;
            };
            trackers.push((
                id.clone(),
                VisibilityTracker::with_element(host.clone(), *config, element),
            ));
        }
        RevealSet { trackers }
    }
}

/// Trackers started by [`RevealPlan::mount`].
///
/// Dropping the set drops every tracker, releasing all of their host
/// registrations.
#[derive(Debug)]
pub struct RevealSet<K, H>
where
    K: PartialEq,
    H: IntersectionHost<K> + TimerHost,
{
    trackers: Vec<(String, VisibilityTracker<K, H>)>,
}

impl<K, H> RevealSet<K, H>
where
    K: PartialEq,
    H: IntersectionHost<K> + TimerHost,
{
    /// Routes an intersection batch to the tracker that owns `observer`.
    pub fn handle_intersections(
        &mut self,
        observer: ObserverId,
        entries: &[IntersectionEntry<K>],
    ) -> bool {
        self.trackers
            .iter_mut()
            .find(|(_, t)| t.observer() == Some(observer))
            .is_some_and(|(_, t)| t.handle_intersections(observer, entries))
    }

    /// Routes a timer expiry to every tracker; only its owner reacts.
    pub fn handle_timer(&mut self, timer: TimerId) -> bool {
        self.trackers
            .iter_mut()
            .fold(false, |changed, (_, t)| t.handle_timer(timer) || changed)
    }

    /// Visibility of the element mounted under `id`, if it was found.
    #[must_use]
    pub fn is_visible(&self, id: &str) -> Option<bool> {
        self.tracker(id).map(VisibilityTracker::is_visible)
    }

    /// The tracker mounted under `id`.
    #[must_use]
    pub fn tracker(&self, id: &str) -> Option<&VisibilityTracker<K, H>> {
        self.trackers
            .iter()
            .find(|(key, _)| key == id)
            .map(|(_, t)| t)
    }

    /// Ids that were found and are being tracked, in plan order.
    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.trackers.iter().map(|(id, _)| id.as_str())
    }

    /// Number of mounted trackers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.trackers.len()
    }

    /// Returns `true` if no element was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trackers.is_empty()
    }
}
