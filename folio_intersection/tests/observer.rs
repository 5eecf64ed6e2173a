// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll walkthroughs against the software observer.

use folio_intersection::{RootMargin, SoftwareObserver, Thresholds};
use kurbo::{Rect, Vec2};

const VIEWPORT: Rect = Rect::new(0.0, 0.0, 800.0, 1000.0);
const SECTION: Rect = Rect::new(0.0, 1000.0, 800.0, 1400.0);

fn observer() -> SoftwareObserver<&'static str> {
    let margin: RootMargin = "-10% 0px".parse().unwrap();
    let mut observer = SoftwareObserver::new(Thresholds::new(&[0.1, 0.3, 0.5]), margin);
    observer.observe("about");
    observer
}

fn at(scroll_y: f64) -> Rect {
    SECTION - Vec2::new(0.0, scroll_y)
}

#[test]
fn entries_follow_threshold_crossings_while_scrolling() {
    let mut observer = observer();

    let initial = observer.update(VIEWPORT, 0, |_| Some(at(0.0)));
    assert_eq!(initial.len(), 1);
    assert!(!initial[0].is_intersecting);
    assert_eq!(initial[0].root_bounds, Rect::new(0.0, 100.0, 800.0, 900.0));

    // 40 of 400 px inside the shrunken root meets the first threshold.
    let entries = observer.update(VIEWPORT, 16, |_| Some(at(140.0)));
    assert_eq!(entries.len(), 1);
    assert!(entries[0].is_intersecting);
    assert_eq!(entries[0].intersection_ratio, 0.1);

    // Still between 0.1 and 0.3.
    assert!(observer.update(VIEWPORT, 32, |_| Some(at(150.0))).is_empty());

    let entries = observer.update(VIEWPORT, 48, |_| Some(at(400.0)));
    assert_eq!(entries[0].intersection_ratio, 0.75);
    assert_eq!(entries[0].time_ms, 48);

    let entries = observer.update(VIEWPORT, 64, |_| Some(at(2000.0)));
    assert!(!entries[0].is_intersecting);
    assert_eq!(entries[0].intersection_ratio, 0.0);
}

#[test]
fn detached_targets_keep_their_state() {
    let mut observer = observer();
    observer.update(VIEWPORT, 0, |_| Some(at(400.0)));

    assert!(observer.update(VIEWPORT, 16, |_| None).is_empty());
    // Reattached at the same place: nothing changed.
    assert!(observer.update(VIEWPORT, 32, |_| Some(at(400.0))).is_empty());
}

#[test]
fn reobserving_reports_an_initial_entry_again() {
    let mut observer = observer();
    observer.update(VIEWPORT, 0, |_| Some(at(400.0)));

    assert!(observer.unobserve(&"about"));
    assert!(observer.is_empty());
    observer.observe("about");
    let entries = observer.update(VIEWPORT, 16, |_| Some(at(400.0)));
    assert_eq!(entries.len(), 1);
    assert!(entries[0].is_intersecting);
}
