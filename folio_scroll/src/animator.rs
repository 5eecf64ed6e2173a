// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Eased scrolling for hosts without native smooth scroll.

use folio_host::{ScrollBehavior, ScrollCommand, ScrollHost};

/// Default fraction of the remaining distance covered per frame.
pub const DEFAULT_EASE: f64 = 0.25;

/// Remaining distance, in pixels, below which the animation snaps to its
/// target.
pub const SETTLE_DISTANCE: f64 = 0.5;

/// Exponential ease-out toward a scroll target.
///
/// Each [`ScrollAnimator::step`] covers a fixed fraction of the remaining
/// distance, so the motion decelerates as it approaches the target.
///
/// ```
/// use folio_scroll::ScrollAnimator;
///
/// let mut animator = ScrollAnimator::new(0.5);
/// animator.start(0.0, 100.0);
/// assert_eq!(animator.step(), Some(50.0));
/// assert_eq!(animator.step(), Some(75.0));
/// while animator.step().is_some() {}
/// assert_eq!(animator.position(), 100.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollAnimator {
    ease: f64,
    position: f64,
    target: f64,
}

impl Default for ScrollAnimator {
    fn default() -> Self {
        Self::new(DEFAULT_EASE)
    }
}

impl ScrollAnimator {
    /// Creates a settled animator. `ease` is clamped to `[0.05, 1]`.
    #[must_use]
    pub fn new(ease: f64) -> Self {
        let ease = if ease.is_nan() {
            DEFAULT_EASE
        } else {
            ease.clamp(0.05, 1.0)
        };
        Self {
            ease,
            position: 0.0,
            target: 0.0,
        }
    }

    /// Starts animating from `from` to `to`.
    pub fn start(&mut self, from: f64, to: f64) {
        self.position = from;
        self.target = to;
    }

    /// Changes the target, continuing from the current position.
    pub fn retarget(&mut self, to: f64) {
        self.target = to;
    }

    /// Advances one frame and returns the new position, or `None` once the
    /// target has been reached.
    pub fn step(&mut self) -> Option<f64> {
        if !self.is_animating() {
            return None;
        }
        let remaining = self.target - self.position;
        self.position = if remaining.abs() <= SETTLE_DISTANCE {
            self.target
        } else {
            self.position + remaining * self.ease
        };
        Some(self.position)
    }

    /// Advances one frame and scrolls `host` to the new position.
    ///
    /// Returns `true` while more frames are needed.
    pub fn step_host<H: ScrollHost + ?Sized>(&mut self, host: &H) -> bool {
        let Some(top) = self.step() else {
            return false;
        };
        host.scroll_to(ScrollCommand {
            top,
            behavior: ScrollBehavior::Instant,
        });
        self.is_animating()
    }

    /// Stops at the current position.
    pub fn stop(&mut self) {
        self.target = self.position;
    }

    /// Returns `true` until the target is reached.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.position != self.target
    }

    /// Current position.
    #[must_use]
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Target position.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }
}
