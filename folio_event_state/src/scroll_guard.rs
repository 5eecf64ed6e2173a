// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll-in-progress flag with a quiet period.

use folio_host::{TimerHost, TimerId};

/// Default quiet period after the last scroll event, in milliseconds.
pub const DEFAULT_SCROLL_QUIET_MS: u64 = 150;

/// Tracks whether the document is scrolling.
///
/// Every scroll event sets the flag and restarts one quiet timer; the flag
/// clears when that timer fires. The guard does not own a host: pass the one
/// that issued its timers to every method, and call
/// [`ScrollGuard::cancel`] before dropping it.
///
/// ```
/// use folio_event_state::ScrollGuard;
/// use folio_sim::SimHost;
/// use kurbo::Size;
///
/// let host = SimHost::<u32>::new(Size::new(800.0, 600.0));
/// let mut guard = ScrollGuard::default();
///
/// guard.on_scroll(&host, 150);
/// host.advance(100);
/// guard.on_scroll(&host, 150);
/// assert!(host.advance(100).is_empty());
///
/// for timer in host.advance(50) {
///     guard.handle_timer(timer);
/// }
/// assert!(!guard.is_scrolling());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollGuard {
    quiet: Option<TimerId>,
}

impl ScrollGuard {
    /// Records a scroll event: sets the flag and restarts the quiet timer.
    pub fn on_scroll<H: TimerHost + ?Sized>(&mut self, host: &H, quiet_ms: u64) {
        if let Some(timer) = self.quiet.take() {
            host.clear_timeout(timer);
        }
        self.quiet = Some(host.set_timeout(quiet_ms));
    }

    /// Clears the flag if `timer` is the current quiet timer.
    pub fn handle_timer(&mut self, timer: TimerId) -> bool {
        if self.quiet == Some(timer) {
            self.quiet = None;
            true
        } else {
            false
        }
    }

    /// Clears the flag and cancels the quiet timer.
    pub fn cancel<H: TimerHost + ?Sized>(&mut self, host: &H) {
        if let Some(timer) = self.quiet.take() {
            host.clear_timeout(timer);
        }
    }

    /// Returns `true` until the quiet period after the last scroll elapses.
    #[must_use]
    pub fn is_scrolling(&self) -> bool {
        self.quiet.is_some()
    }
}
