// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::slice;

use folio_host::{IntersectionEntry, IntersectionHost, MotionHost, ObserverId, TimerHost, TimerId};

use crate::TrackerConfig;

/// Visibility flags of one tracked element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct VisibilityState {
    /// Whether the element should render as revealed.
    pub is_visible: bool,
    /// Set once a `trigger_once` tracker has revealed; the tracker is inert
    /// afterwards.
    pub has_fired: bool,
}

/// How a tracker obtains its visibility.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TrackerMode {
    /// Driven by intersection callbacks.
    Observing,
    /// The user prefers reduced motion: always visible, never observes.
    ReducedMotion,
    /// The host cannot observe intersections: always visible.
    FailOpen,
}

/// Reveal-on-scroll visibility for one element.
///
/// Each tracker is an isolated instance; create one per element (for example
/// one per card in a list). The tracker owns at most one observation and one
/// delayed-reveal timer on its host, and releases both when dropped.
///
/// The host reports back by calling [`VisibilityTracker::handle_intersections`]
/// and [`VisibilityTracker::handle_timer`] with the ids it issued. Both return
/// `true` when [`VisibilityTracker::is_visible`] changed.
#[derive(Debug)]
pub struct VisibilityTracker<K, H>
where
    K: PartialEq,
    H: IntersectionHost<K> + TimerHost,
{
    host: H,
    config: TrackerConfig,
    state: VisibilityState,
    mode: TrackerMode,
    element: Option<K>,
    observer: Option<ObserverId>,
    pending: Option<TimerId>,
}

impl<K, H> VisibilityTracker<K, H>
where
    K: PartialEq,
    H: IntersectionHost<K> + TimerHost,
{
    /// Creates a tracker with no element attached.
    ///
    /// The reduced-motion preference is read once, here. When it is set the
    /// tracker reports visible immediately and never observes.
    pub fn new(host: H, config: TrackerConfig) -> Self
    where
        H: MotionHost,
    {
        let reduced = host.prefers_reduced_motion();
        Self {
            host,
            config,
            state: VisibilityState {
                is_visible: reduced,
                has_fired: false,
            },
            mode: if reduced {
                TrackerMode::ReducedMotion
            } else {
                TrackerMode::Observing
            },
            element: None,
            observer: None,
            pending: None,
        }
    }

    /// Creates a tracker and attaches `element`.
    pub fn with_element(host: H, config: TrackerConfig, element: K) -> Self
    where
        H: MotionHost,
    {
        let mut tracker = Self::new(host, config);
        tracker.set_element(Some(element));
        tracker
    }

    /// Attaches, replaces or detaches the observed element.
    ///
    /// Any previous observation and pending reveal are released before the new
    /// element is observed.
    pub fn set_element(&mut self, element: Option<K>) {
        if self.element == element {
            return;
        }
        self.release();
        self.element = element;
        self.attach();
    }

    /// Whether the element should render as revealed.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.state.is_visible
    }

    /// Current visibility flags.
    #[must_use]
    pub fn state(&self) -> VisibilityState {
        self.state
    }

    /// The tracker's configuration.
    #[must_use]
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// How the tracker obtains its visibility.
    #[must_use]
    pub fn mode(&self) -> TrackerMode {
        self.mode
    }

    /// The observed element, if any.
    #[must_use]
    pub fn element(&self) -> Option<&K> {
        self.element.as_ref()
    }

    /// The active observation, if any.
    #[must_use]
    pub fn observer(&self) -> Option<ObserverId> {
        self.observer
    }

    /// Consumes a batch of entries delivered for `observer`.
    ///
    /// Batches for other observers, and entries for other targets, are
    /// ignored. The last entry for the element wins.
    pub fn handle_intersections(
        &mut self,
        observer: ObserverId,
        entries: &[IntersectionEntry<K>],
    ) -> bool {
        if self.observer != Some(observer) || self.state.has_fired {
            return false;
        }
        let Some(element) = self.element.as_ref() else {
            return false;
        };
        let Some(entry) = entries.iter().rev().find(|e| e.target == *element) else {
            return false;
        };
        let before = self.state.is_visible;
        if entry.is_intersecting {
            self.on_enter();
        } else {
            self.on_exit();
        }
        before != self.state.is_visible
    }

    /// Completes a delayed reveal. Timers this tracker no longer holds are
    /// ignored.
    pub fn handle_timer(&mut self, timer: TimerId) -> bool {
        if self.pending != Some(timer) {
            return false;
        }
        self.pending = None;
        if self.state.has_fired {
            return false;
        }
        let before = self.state.is_visible;
        self.reveal();
        before != self.state.is_visible
    }

    fn attach(&mut self) {
        if self.mode != TrackerMode::Observing || self.state.has_fired {
            return;
        }
        let Some(element) = self.element.as_ref() else {
            return;
        };
        match self
            .host
            .observe(slice::from_ref(element), &self.config.observer_init())
        {
            Ok(id) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(observer = id.get(), "reveal tracker observing");
                self.observer = Some(id);
            }
            Err(_err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(error = %_err, "intersection unavailable, revealing immediately");
                self.mode = TrackerMode::FailOpen;
                self.state.is_visible = true;
            }
        }
    }

    fn on_enter(&mut self) {
        if self.state.is_visible {
            return;
        }
        if self.config.delay_ms() == 0 {
            self.reveal();
        } else if self.pending.is_none() {
            self.pending = Some(self.host.set_timeout(self.config.delay_ms()));
        }
    }

    fn on_exit(&mut self) {
        self.cancel_pending();
        if !self.config.trigger_once() {
            self.state.is_visible = false;
        }
    }

    fn reveal(&mut self) {
        self.state.is_visible = true;
        if self.config.trigger_once() {
            self.state.has_fired = true;
            self.disconnect();
            #[cfg(feature = "tracing")]
            tracing::trace!("reveal tracker latched");
        }
    }

    fn cancel_pending(&mut self) {
        if let Some(timer) = self.pending.take() {
            self.host.clear_timeout(timer);
        }
    }

    fn disconnect(&mut self) {
        if let Some(observer) = self.observer.take() {
            self.host.disconnect(observer);
        }
    }

    fn release(&mut self) {
        self.disconnect();
        self.cancel_pending();
    }
}

impl<K, H> Drop for VisibilityTracker<K, H>
where
    K: PartialEq,
    H: IntersectionHost<K> + TimerHost,
{
    fn drop(&mut self) {
        self.release();
    }
}
