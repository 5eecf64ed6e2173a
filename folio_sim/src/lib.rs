// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Folio Sim: a deterministic, instrumented host for tests and benchmarks.
//!
//! [`SimHost`] implements every `folio_host` capability over an in-memory
//! document:
//!
//! - Elements are rects in document coordinates, registered under an id.
//! - The viewport is a fixed size scrolled by [`SimHost::set_scroll_y`].
//! - Time only moves through [`SimHost::advance`], which returns the timers
//!   that fired.
//! - Intersection observers are [`SoftwareObserver`]s, flushed on demand.
//! - Every registration is counted so tests can assert that a component left
//!   nothing behind ([`SimHost::outstanding`]).
//!
//! The host never calls into components. Tests route the returned ids to the
//! component that owns them, which keeps ownership simple and ordering
//! explicit.
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use folio_host::{ObserverInit, IntersectionHost};
//! use folio_sim::SimHost;
//!
//! let host = SimHost::new(Size::new(800.0, 600.0));
//! host.insert_element("about", 1_u32, Rect::new(0.0, 1200.0, 800.0, 1800.0));
//!
//! let observer = host.observe(&[1], &ObserverInit::default()).unwrap();
//! let batches = host.flush_intersections();
//! assert_eq!(batches.len(), 1);
//! assert!(!batches[0].1[0].is_intersecting);
//!
//! host.set_scroll_y(1000.0);
//! let batches = host.flush_intersections();
//! assert_eq!(batches[0].0, observer);
//! assert!(batches[0].1[0].is_intersecting);
//! ```

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::hash::Hash;

use folio_host::{
    Capability, CapabilityError, ElementHost, FrameHost, FrameId, IntersectionHost, ListenerHost,
    ListenerId, ListenerKinds, MotionHost, ObserverId, ObserverInit, ScrollCommand, ScrollHost,
    TimerHost, TimerId, UiOverrideHost, UiOverrides,
};
use folio_intersection::{IntersectionEntry, SoftwareObserver};
use hashbrown::HashMap;
use kurbo::{Rect, Size, Vec2};

/// Counts of registrations a component still holds on the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Outstanding {
    /// Connected intersection observers.
    pub observers: usize,
    /// Pending timeouts.
    pub timers: usize,
    /// Pending frame callbacks.
    pub frames: usize,
    /// Registered listener sets.
    pub listeners: usize,
}

impl Outstanding {
    /// Returns `true` if nothing is registered.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug)]
struct State<K> {
    now_ms: u64,
    next_id: u64,
    viewport: Size,
    scroll: Vec2,
    elements: HashMap<K, Rect>,
    ids: HashMap<String, K>,
    reduced_motion: bool,
    intersection_supported: bool,
    observers: BTreeMap<ObserverId, SoftwareObserver<K>>,
    timers: BTreeMap<TimerId, u64>,
    frames: Vec<FrameId>,
    listeners: BTreeMap<ListenerId, ListenerKinds>,
    overrides: UiOverrides,
    override_surface: Option<K>,
    override_history: Vec<UiOverrides>,
    scroll_commands: Vec<ScrollCommand>,
}

impl<K> State<K> {
    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    fn viewport_rect(&self) -> Rect {
        Rect::from_origin_size((0.0, 0.0), self.viewport)
    }
}

/// A deterministic in-memory host.
#[derive(Debug)]
pub struct SimHost<K> {
    state: RefCell<State<K>>,
}

impl<K: Clone + Eq + Hash> SimHost<K> {
    /// Creates a host with a viewport of the given size, scrolled to the top.
    #[must_use]
    pub fn new(viewport: Size) -> Self {
        Self {
            state: RefCell::new(State {
                now_ms: 0,
                next_id: 0,
                viewport,
                scroll: Vec2::ZERO,
                elements: HashMap::new(),
                ids: HashMap::new(),
                reduced_motion: false,
                intersection_supported: true,
                observers: BTreeMap::new(),
                timers: BTreeMap::new(),
                frames: Vec::new(),
                listeners: BTreeMap::new(),
                overrides: UiOverrides::empty(),
                override_surface: None,
                override_history: Vec::new(),
                scroll_commands: Vec::new(),
            }),
        }
    }

    /// Sets the reduced-motion preference reported to components.
    pub fn set_reduced_motion(&self, reduced: bool) {
        self.state.borrow_mut().reduced_motion = reduced;
    }

    /// Makes intersection observation available or unavailable.
    pub fn set_intersection_supported(&self, supported: bool) {
        self.state.borrow_mut().intersection_supported = supported;
    }

    /// Adds an element at `rect` (document coordinates) under `id`.
    pub fn insert_element(&self, id: &str, element: K, rect: Rect) {
        let mut state = self.state.borrow_mut();
        state.elements.insert(element.clone(), rect);
        state.ids.insert(id.to_string(), element);
    }

    /// Moves an existing element.
    pub fn set_element_rect(&self, element: &K, rect: Rect) {
        if let Some(slot) = self.state.borrow_mut().elements.get_mut(element) {
            *slot = rect;
        }
    }

    /// Removes an element from the document.
    pub fn remove_element(&self, element: &K) {
        let mut state = self.state.borrow_mut();
        state.elements.remove(element);
        state.ids.retain(|_, k| k != element);
    }

    /// Current simulated time.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.state.borrow().now_ms
    }

    /// Scrolls the document to `y` (clamped at zero).
    pub fn set_scroll_y(&self, y: f64) {
        self.state.borrow_mut().scroll.y = y.max(0.0);
    }

    /// Advances time by `ms` and returns the timers that fired, in due order.
    pub fn advance(&self, ms: u64) -> Vec<TimerId> {
        let mut state = self.state.borrow_mut();
        state.now_ms = state.now_ms.saturating_add(ms);
        let now = state.now_ms;
        let mut due: Vec<(u64, TimerId)> = state
            .timers
            .iter()
            .filter(|(_, at)| **at <= now)
            .map(|(id, at)| (*at, *id))
            .collect();
        due.sort_unstable();
        for (_, id) in &due {
            state.timers.remove(id);
        }
        due.into_iter().map(|(_, id)| id).collect()
    }

    /// Runs one frame: returns and clears every pending frame callback.
    pub fn take_frames(&self) -> Vec<FrameId> {
        core::mem::take(&mut self.state.borrow_mut().frames)
    }

    /// Measures every connected observer and returns non-empty batches in
    /// observer registration order.
    pub fn flush_intersections(&self) -> Vec<(ObserverId, Vec<IntersectionEntry<K>>)> {
        let mut state = self.state.borrow_mut();
        let state = &mut *state;
        let viewport = state.viewport_rect();
        let scroll = state.scroll;
        let now = state.now_ms;
        let elements = &state.elements;
        state
            .observers
            .iter_mut()
            .filter_map(|(id, observer)| {
                let entries =
                    observer.update(viewport, now, |k| elements.get(k).map(|r| *r - scroll));
                (!entries.is_empty()).then_some((*id, entries))
            })
            .collect()
    }

    /// Registrations still held by components.
    #[must_use]
    pub fn outstanding(&self) -> Outstanding {
        let state = self.state.borrow();
        Outstanding {
            observers: state.observers.len(),
            timers: state.timers.len(),
            frames: state.frames.len(),
            listeners: state.listeners.len(),
        }
    }

    /// Union of every registered listener kind.
    #[must_use]
    pub fn listening(&self) -> ListenerKinds {
        self.state
            .borrow()
            .listeners
            .values()
            .fold(ListenerKinds::empty(), |acc, k| acc | *k)
    }

    /// Currently applied UI overrides.
    #[must_use]
    pub fn overrides(&self) -> UiOverrides {
        self.state.borrow().overrides
    }

    /// Surface named by the most recent non-empty override, if still active.
    #[must_use]
    pub fn override_surface(&self) -> Option<K> {
        self.state.borrow().override_surface.clone()
    }

    /// Every override set applied so far, in order.
    #[must_use]
    pub fn override_history(&self) -> Vec<UiOverrides> {
        self.state.borrow().override_history.clone()
    }

    /// Every scroll command issued so far, in order.
    #[must_use]
    pub fn scroll_commands(&self) -> Vec<ScrollCommand> {
        self.state.borrow().scroll_commands.clone()
    }
}

impl<K: Clone + Eq + Hash> IntersectionHost<K> for SimHost<K> {
    fn observe(&self, targets: &[K], init: &ObserverInit) -> Result<ObserverId, CapabilityError> {
        let mut state = self.state.borrow_mut();
        if !state.intersection_supported {
            return Err(CapabilityError::Unsupported(Capability::Intersection));
        }
        let mut observer = SoftwareObserver::new(init.thresholds.clone(), init.root_margin);
        for target in targets {
            observer.observe(target.clone());
        }
        let id = ObserverId::new(state.next_id());
        state.observers.insert(id, observer);
        Ok(id)
    }

    fn disconnect(&self, observer: ObserverId) {
        self.state.borrow_mut().observers.remove(&observer);
    }
}

impl<K> TimerHost for SimHost<K> {
    fn set_timeout(&self, delay_ms: u64) -> TimerId {
        let mut state = self.state.borrow_mut();
        let id = TimerId::new(state.next_id());
        let due = state.now_ms.saturating_add(delay_ms);
        state.timers.insert(id, due);
        id
    }

    fn clear_timeout(&self, timer: TimerId) {
        self.state.borrow_mut().timers.remove(&timer);
    }
}

impl<K> FrameHost for SimHost<K> {
    fn request_frame(&self) -> FrameId {
        let mut state = self.state.borrow_mut();
        let id = FrameId::new(state.next_id());
        state.frames.push(id);
        id
    }

    fn cancel_frame(&self, frame: FrameId) {
        self.state.borrow_mut().frames.retain(|f| *f != frame);
    }
}

impl<K> ListenerHost for SimHost<K> {
    fn listen(&self, kinds: ListenerKinds) -> ListenerId {
        let mut state = self.state.borrow_mut();
        let id = ListenerId::new(state.next_id());
        state.listeners.insert(id, kinds);
        id
    }

    fn unlisten(&self, listener: ListenerId) {
        self.state.borrow_mut().listeners.remove(&listener);
    }
}

impl<K> MotionHost for SimHost<K> {
    fn prefers_reduced_motion(&self) -> bool {
        self.state.borrow().reduced_motion
    }
}

impl<K: Clone + Eq + Hash> ElementHost<K> for SimHost<K> {
    fn element_by_id(&self, id: &str) -> Option<K> {
        self.state.borrow().ids.get(id).cloned()
    }

    fn bounding_rect(&self, element: &K) -> Option<Rect> {
        let state = self.state.borrow();
        state.elements.get(element).map(|r| *r - state.scroll)
    }
}

impl<K> ScrollHost for SimHost<K> {
    fn scroll_offset(&self) -> Vec2 {
        self.state.borrow().scroll
    }

    fn scroll_to(&self, command: ScrollCommand) {
        let mut state = self.state.borrow_mut();
        state.scroll_commands.push(command);
        state.scroll.y = command.top.max(0.0);
    }
}

impl<K: Clone> UiOverrideHost<K> for SimHost<K> {
    fn apply_overrides(&self, surface: &K, overrides: UiOverrides) {
        let mut state = self.state.borrow_mut();
        state.overrides = overrides;
        state.override_surface = (!overrides.is_empty()).then(|| surface.clone());
        state.override_history.push(overrides);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timers_fire_in_due_order_and_only_once() {
        let host = SimHost::<u32>::new(Size::new(100.0, 100.0));
        let late = host.set_timeout(300);
        let early = host.set_timeout(100);
        assert!(host.advance(99).is_empty());
        assert_eq!(host.advance(1), vec![early]);
        assert_eq!(host.advance(500), vec![late]);
        assert!(host.advance(500).is_empty());
        assert!(host.outstanding().is_idle());
    }

    #[test]
    fn cleared_timers_never_fire() {
        let host = SimHost::<u32>::new(Size::new(100.0, 100.0));
        let t = host.set_timeout(10);
        host.clear_timeout(t);
        assert!(host.advance(100).is_empty());
    }

    #[test]
    fn huge_delays_saturate_instead_of_overflowing() {
        let host = SimHost::<u32>::new(Size::new(100.0, 100.0));
        assert!(host.advance(10).is_empty());
        let far = host.set_timeout(u64::MAX);
        assert!(host.advance(1_000).is_empty());
        assert_eq!(host.outstanding().timers, 1);
        assert_eq!(host.advance(u64::MAX), vec![far]);
        assert_eq!(host.now_ms(), u64::MAX);
    }

    #[test]
    fn bounding_rects_follow_scroll() {
        let host = SimHost::new(Size::new(100.0, 100.0));
        host.insert_element("a", 1_u32, Rect::new(0.0, 500.0, 100.0, 600.0));
        host.set_scroll_y(450.0);
        assert_eq!(host.bounding_rect(&1), Some(Rect::new(0.0, 50.0, 100.0, 150.0)));
        assert_eq!(host.element_by_id("a"), Some(1));
        assert_eq!(host.element_by_id("b"), None);
    }

    #[test]
    fn unsupported_intersection_errors() {
        let host = SimHost::<u32>::new(Size::new(100.0, 100.0));
        host.set_intersection_supported(false);
        assert_eq!(
            host.observe(&[1], &ObserverInit::default()),
            Err(CapabilityError::Unsupported(Capability::Intersection))
        );
        assert_eq!(host.outstanding().observers, 0);
    }

    #[test]
    fn overrides_record_surface_and_history() {
        let host = SimHost::<u32>::new(Size::new(100.0, 100.0));
        host.apply_overrides(&9, UiOverrides::SUPPRESS_TEXT_SELECTION);
        assert_eq!(host.override_surface(), Some(9));
        host.apply_overrides(&9, UiOverrides::empty());
        assert_eq!(host.override_surface(), None);
        assert_eq!(
            host.override_history(),
            vec![UiOverrides::SUPPRESS_TEXT_SELECTION, UiOverrides::empty()]
        );
    }
}
