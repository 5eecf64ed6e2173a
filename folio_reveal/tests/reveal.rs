// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reveal-on-scroll behavior against a simulated document.

use folio_host::{IntersectionHost, TimerHost, TimerId};
use folio_reveal::{RevealPlan, RevealPreset, TrackerConfig, TrackerMode, VisibilityTracker};
use folio_sim::SimHost;
use kurbo::{Rect, Size};

const CARD: u32 = 1;

/// 800x600 viewport with one 400px tall card starting at y=900.
fn document() -> SimHost<u32> {
    let host = SimHost::new(Size::new(800.0, 600.0));
    host.insert_element("card", CARD, Rect::new(0.0, 900.0, 800.0, 1300.0));
    host
}

fn pump<H>(host: &SimHost<u32>, tracker: &mut VisibilityTracker<u32, H>)
where
    H: IntersectionHost<u32> + TimerHost,
{
    for (observer, entries) in host.flush_intersections() {
        tracker.handle_intersections(observer, &entries);
    }
}

fn fire_timers<H>(fired: Vec<TimerId>, tracker: &mut VisibilityTracker<u32, H>)
where
    H: IntersectionHost<u32> + TimerHost,
{
    for timer in fired {
        tracker.handle_timer(timer);
    }
}

#[test]
fn trigger_once_latches_and_releases_the_observer() {
    let host = document();
    let mut tracker = VisibilityTracker::with_element(&host, TrackerConfig::default(), CARD);
    pump(&host, &mut tracker);
    assert!(!tracker.is_visible());
    assert_eq!(host.outstanding().observers, 1);

    host.set_scroll_y(500.0);
    pump(&host, &mut tracker);
    assert!(tracker.is_visible());
    assert!(tracker.state().has_fired);
    assert_eq!(host.outstanding().observers, 0);

    host.set_scroll_y(0.0);
    pump(&host, &mut tracker);
    assert!(tracker.is_visible());
}

#[test]
fn without_trigger_once_visibility_mirrors_intersection() {
    let host = document();
    let config = TrackerConfig::default().with_trigger_once(false);
    let mut tracker = VisibilityTracker::with_element(&host, config, CARD);

    let mut seen = Vec::new();
    for y in [0.0, 500.0, 0.0, 500.0] {
        host.set_scroll_y(y);
        pump(&host, &mut tracker);
        seen.push(tracker.is_visible());
    }
    assert_eq!(seen, [false, true, false, true]);
    assert!(!tracker.state().has_fired);
}

#[test]
fn mirrored_visibility_delays_only_the_rising_edge() {
    let host = document();
    let config = TrackerConfig::default()
        .with_trigger_once(false)
        .with_delay_ms(300);
    let mut tracker = VisibilityTracker::with_element(&host, config, CARD);
    pump(&host, &mut tracker);

    host.set_scroll_y(500.0);
    pump(&host, &mut tracker);
    assert!(!tracker.is_visible());
    fire_timers(host.advance(300), &mut tracker);
    assert!(tracker.is_visible());

    host.set_scroll_y(0.0);
    pump(&host, &mut tracker);
    assert!(!tracker.is_visible());
    assert_eq!(host.outstanding().timers, 0);
    assert_eq!(host.outstanding().observers, 1);

    // Entering again waits for the delay once more.
    host.set_scroll_y(500.0);
    pump(&host, &mut tracker);
    assert!(!tracker.is_visible());
    fire_timers(host.advance(300), &mut tracker);
    assert!(tracker.is_visible());
}

#[test]
fn bottom_margin_delays_the_reveal() {
    let host = document();
    let mut tracker = VisibilityTracker::with_element(&host, TrackerConfig::default(), CARD);
    // Card top sits at 580: inside the viewport but within the bottom 5%.
    host.set_scroll_y(320.0);
    pump(&host, &mut tracker);
    assert!(!tracker.is_visible());
}

#[test]
fn delayed_reveal_fires_exactly_at_the_delay() {
    let host = document();
    let config = TrackerConfig::default().with_delay_ms(300);
    let mut tracker = VisibilityTracker::with_element(&host, config, CARD);
    host.set_scroll_y(500.0);
    pump(&host, &mut tracker);
    assert!(!tracker.is_visible());

    fire_timers(host.advance(299), &mut tracker);
    assert!(!tracker.is_visible());
    fire_timers(host.advance(1), &mut tracker);
    assert!(tracker.is_visible());
    assert!(host.outstanding().is_idle());
}

#[test]
fn leaving_before_the_delay_cancels_the_reveal() {
    let host = document();
    let config = TrackerConfig::default().with_delay_ms(300);
    let mut tracker = VisibilityTracker::with_element(&host, config, CARD);
    host.set_scroll_y(500.0);
    pump(&host, &mut tracker);
    assert_eq!(host.outstanding().timers, 1);

    host.set_scroll_y(0.0);
    pump(&host, &mut tracker);
    assert_eq!(host.outstanding().timers, 0);
    fire_timers(host.advance(1000), &mut tracker);
    assert!(!tracker.is_visible());
}

#[test]
fn reduced_motion_reveals_without_observing() {
    let host = document();
    host.set_reduced_motion(true);
    let tracker = VisibilityTracker::with_element(&host, TrackerConfig::default(), CARD);
    assert!(tracker.is_visible());
    assert_eq!(tracker.mode(), TrackerMode::ReducedMotion);
    assert!(host.outstanding().is_idle());
}

#[test]
fn missing_intersection_support_fails_open() {
    let host = document();
    host.set_intersection_supported(false);
    let tracker = VisibilityTracker::with_element(&host, TrackerConfig::default(), CARD);
    assert!(tracker.is_visible());
    assert_eq!(tracker.mode(), TrackerMode::FailOpen);
    assert!(host.outstanding().is_idle());
}

#[test]
fn dropping_mid_delay_leaves_the_host_idle() {
    let host = document();
    {
        let config = TrackerConfig::default().with_delay_ms(300);
        let mut tracker = VisibilityTracker::with_element(&host, config, CARD);
        host.set_scroll_y(500.0);
        pump(&host, &mut tracker);
        assert!(!host.outstanding().is_idle());
    }
    assert!(host.outstanding().is_idle());
}

#[test]
fn stale_callbacks_are_ignored() {
    let host = document();
    let mut tracker = VisibilityTracker::with_element(&host, TrackerConfig::default(), CARD);
    let old = tracker.observer().unwrap();
    host.set_scroll_y(500.0);
    let batches = host.flush_intersections();

    // Re-attaching issues a new observer; the old batch no longer applies.
    tracker.set_element(None);
    tracker.set_element(Some(CARD));
    assert_ne!(tracker.observer(), Some(old));
    for (observer, entries) in &batches {
        assert!(!tracker.handle_intersections(*observer, entries));
    }
    assert!(!tracker.handle_timer(TimerId::new(u64::MAX)));
    assert!(!tracker.is_visible());
}

#[test]
fn detaching_the_element_releases_the_observer() {
    let host = document();
    let mut tracker = VisibilityTracker::with_element(&host, TrackerConfig::default(), CARD);
    tracker.set_element(None);
    assert_eq!(tracker.element(), None);
    assert!(host.outstanding().is_idle());
}

#[test]
fn plan_staggers_cards_and_skips_missing_ids() {
    let host = SimHost::new(Size::new(800.0, 600.0));
    for (i, id) in (0_u32..).zip(["a", "b", "c"]) {
        let x = 100.0 * f64::from(i);
        host.insert_element(id, i, Rect::new(x, 800.0, x + 90.0, 1000.0));
    }
    let plan = RevealPlan::new()
        .with("missing", TrackerConfig::default())
        .staggered(
            ["a", "b", "c"],
            TrackerConfig::preset(RevealPreset::Heading),
            150,
        );
    let mut set = plan.mount(&host);
    assert_eq!(set.ids().collect::<Vec<_>>(), ["a", "b", "c"]);
    assert_eq!(set.is_visible("missing"), None);

    host.set_scroll_y(500.0);
    for (observer, entries) in host.flush_intersections() {
        set.handle_intersections(observer, &entries);
    }
    // "a" has no delay; the others wait.
    assert_eq!(set.is_visible("a"), Some(true));
    assert_eq!(set.is_visible("b"), Some(false));

    for timer in host.advance(150) {
        set.handle_timer(timer);
    }
    assert_eq!(set.is_visible("b"), Some(true));
    assert_eq!(set.is_visible("c"), Some(false));

    for timer in host.advance(150) {
        set.handle_timer(timer);
    }
    assert_eq!(set.is_visible("c"), Some(true));

    drop(set);
    assert!(host.outstanding().is_idle());
}
