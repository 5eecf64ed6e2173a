// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer track: start and last pointer positions of one drag gesture.
//!
//! ## Usage
//!
//! 1) Call [`PointerTrack::begin`] with the pointer-down position.
//! 2) For every applied move, call [`PointerTrack::advance`] to get the movement
//!    since the previously applied position.
//! 3) Call [`PointerTrack::end`] when the gesture finishes.
//!
//! Deltas are incremental: summing every delta of a gesture gives
//! [`PointerTrack::total`] for the last applied position, no matter how many
//! moves were skipped in between.
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use folio_event_state::drag::PointerTrack;
//!
//! let mut track = PointerTrack::default();
//! track.begin(Point::new(10.0, 20.0));
//!
//! assert_eq!(track.advance(Point::new(40.0, 20.0)), Some(Vec2::new(30.0, 0.0)));
//! assert_eq!(track.advance(Point::new(50.0, 25.0)), Some(Vec2::new(10.0, 5.0)));
//! assert_eq!(track.total(), Some(Vec2::new(40.0, 5.0)));
//!
//! track.end();
//! assert_eq!(track.advance(Point::new(0.0, 0.0)), None);
//! ```

use kurbo::{Point, Vec2};

/// Start and last applied pointer positions of an active gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerTrack {
    active: Option<(Point, Point)>,
}

impl PointerTrack {
    /// Starts a gesture at `pos`, replacing any previous one.
    pub fn begin(&mut self, pos: Point) {
        self.active = Some((pos, pos));
    }

    /// Moves the last applied position to `pos` and returns the movement.
    ///
    /// Returns `None` when no gesture is active.
    pub fn advance(&mut self, pos: Point) -> Option<Vec2> {
        let (_, last) = self.active.as_mut()?;
        let delta = pos - *last;
        *last = pos;
        Some(delta)
    }

    /// Movement from the gesture start to the last applied position.
    #[must_use]
    pub fn total(&self) -> Option<Vec2> {
        self.active.map(|(start, last)| last - start)
    }

    /// Where the gesture started.
    #[must_use]
    pub fn start(&self) -> Option<Point> {
        self.active.map(|(start, _)| start)
    }

    /// The last applied position.
    #[must_use]
    pub fn last(&self) -> Option<Point> {
        self.active.map(|(_, last)| last)
    }

    /// Ends the gesture.
    pub fn end(&mut self) {
        self.active = None;
    }

    /// Returns `true` while a gesture is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_track_reports_nothing() {
        let mut track = PointerTrack::default();
        assert!(!track.is_active());
        assert_eq!(track.advance(Point::new(5.0, 5.0)), None);
        assert_eq!(track.total(), None);
        assert_eq!(track.start(), None);
    }

    #[test]
    fn begin_sets_start_and_last() {
        let mut track = PointerTrack::default();
        track.begin(Point::new(3.0, 4.0));
        assert_eq!(track.start(), Some(Point::new(3.0, 4.0)));
        assert_eq!(track.last(), track.start());
        assert_eq!(track.total(), Some(Vec2::ZERO));
    }

    #[test]
    fn deltas_are_incremental() {
        let mut track = PointerTrack::default();
        track.begin(Point::ZERO);
        assert_eq!(track.advance(Point::new(5.0, 3.0)), Some(Vec2::new(5.0, 3.0)));
        assert_eq!(track.advance(Point::new(8.0, 7.0)), Some(Vec2::new(3.0, 4.0)));
        assert_eq!(track.advance(Point::new(6.0, 7.0)), Some(Vec2::new(-2.0, 0.0)));
        assert_eq!(track.total(), Some(Vec2::new(6.0, 7.0)));
    }

    #[test]
    fn begin_replaces_a_running_gesture() {
        let mut track = PointerTrack::default();
        track.begin(Point::ZERO);
        track.advance(Point::new(10.0, 10.0));
        track.begin(Point::new(50.0, 60.0));
        assert_eq!(track.advance(Point::new(55.0, 65.0)), Some(Vec2::new(5.0, 5.0)));
    }

    #[test]
    fn end_is_idempotent() {
        let mut track = PointerTrack::default();
        track.end();
        track.begin(Point::ZERO);
        track.end();
        track.end();
        assert!(!track.is_active());
    }
}
