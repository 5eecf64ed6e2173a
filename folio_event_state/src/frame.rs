// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame coalescing: at most one pending frame, carrying the newest value.

use folio_host::{FrameHost, FrameId};

/// Holds one pending frame callback and the value it will apply.
///
/// Requesting again before the frame runs cancels the old callback, so only
/// the newest value is ever applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameSlot<T> {
    pending: Option<(FrameId, T)>,
}

impl<T> Default for FrameSlot<T> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<T> FrameSlot<T> {
    /// Schedules `value` for the next frame, replacing a pending request.
    pub fn request<H: FrameHost + ?Sized>(&mut self, host: &H, value: T) -> FrameId {
        self.cancel(host);
        let frame = host.request_frame();
        self.pending = Some((frame, value));
        frame
    }

    /// Takes the value for `frame` if it is the pending one.
    pub fn take(&mut self, frame: FrameId) -> Option<T> {
        match self.pending.take() {
            Some((id, value)) if id == frame => Some(value),
            other => {
                self.pending = other;
                None
            }
        }
    }

    /// Cancels the pending frame, if any.
    pub fn cancel<H: FrameHost + ?Sized>(&mut self, host: &H) {
        if let Some((frame, _)) = self.pending.take() {
            host.cancel_frame(frame);
        }
    }

    /// Returns `true` while a frame is pending.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_sim::SimHost;
    use kurbo::Size;

    fn host() -> SimHost<u32> {
        SimHost::new(Size::new(100.0, 100.0))
    }

    #[test]
    fn newer_request_replaces_the_pending_frame() {
        let host = host();
        let mut slot = FrameSlot::default();
        let first = slot.request(&host, 1);
        let second = slot.request(&host, 2);
        assert_eq!(host.take_frames(), [second]);
        assert_eq!(slot.take(first), None);
        assert_eq!(slot.take(second), Some(2));
        assert!(!slot.is_pending());
    }

    #[test]
    fn cancel_releases_the_frame() {
        let host = host();
        let mut slot = FrameSlot::default();
        slot.request(&host, ());
        slot.cancel(&host);
        assert!(host.outstanding().is_idle());
        assert!(!slot.is_pending());
    }
}
