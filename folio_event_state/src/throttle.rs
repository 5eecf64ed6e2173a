// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Leading-edge event throttle.

/// Default move throttle window: one move per 60 Hz frame.
pub const DEFAULT_MOVE_THROTTLE_MS: u64 = 16;

/// Admits at most one event per window, measured from the last admitted one.
///
/// Timestamps come from the events themselves, so the throttle needs no clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveThrottle {
    window_ms: u64,
    last: Option<u64>,
}

impl Default for MoveThrottle {
    fn default() -> Self {
        Self::new(DEFAULT_MOVE_THROTTLE_MS)
    }
}

impl MoveThrottle {
    /// Creates a throttle admitting one event per `window_ms`.
    #[must_use]
    pub const fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            last: None,
        }
    }

    /// Returns `true` and records `now_ms` if the event should be handled.
    ///
    /// Timestamps earlier than the last admitted one are rejected.
    pub fn admit(&mut self, now_ms: u64) -> bool {
        let open = match self.last {
            None => true,
            Some(last) => now_ms
                .checked_sub(last)
                .is_some_and(|elapsed| elapsed >= self.window_ms),
        };
        if open {
            self.last = Some(now_ms);
        }
        open
    }

    /// Forgets the last admitted event.
    pub fn reset(&mut self) {
        self.last = None;
    }

    /// The throttle window.
    #[must_use]
    pub fn window_ms(&self) -> u64 {
        self.window_ms
    }
}
