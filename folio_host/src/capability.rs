// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capability traits.
//!
//! Every method takes `&self`: hosts own their registries behind interior
//! mutability, the same way DOM bindings expose a shared document. Each trait
//! is implemented for `&T` and `Rc<T>` so components can hold whichever handle
//! suits the application.

use alloc::rc::Rc;

use kurbo::{Rect, Vec2};

use crate::types::{
    CapabilityError, FrameId, ListenerId, ListenerKinds, ObserverId, ObserverInit, ScrollCommand,
    TimerId, UiOverrides,
};

/// Viewport intersection observation.
///
/// The host later delivers batches of
/// [`IntersectionEntry`](folio_intersection::IntersectionEntry) values tagged
/// with the returned [`ObserverId`], including one initial entry per target.
pub trait IntersectionHost<K> {
    /// Registers one observer watching `targets`.
    fn observe(&self, targets: &[K], init: &ObserverInit) -> Result<ObserverId, CapabilityError>;

    /// Unregisters an observer. Unknown ids are ignored.
    fn disconnect(&self, observer: ObserverId);
}

/// One-shot timers.
pub trait TimerHost {
    /// Schedules a timeout `delay_ms` from now.
    fn set_timeout(&self, delay_ms: u64) -> TimerId;

    /// Cancels a pending timeout. Unknown or already fired ids are ignored.
    fn clear_timeout(&self, timer: TimerId);
}

/// Animation-frame callbacks.
pub trait FrameHost {
    /// Requests a callback before the next frame is presented.
    fn request_frame(&self) -> FrameId;

    /// Cancels a pending frame callback. Unknown ids are ignored.
    fn cancel_frame(&self, frame: FrameId);
}

/// Document-wide event listeners.
pub trait ListenerHost {
    /// Registers listeners for `kinds`; the host routes those events to the
    /// registering component until [`ListenerHost::unlisten`].
    fn listen(&self, kinds: ListenerKinds) -> ListenerId;

    /// Removes listeners registered by [`ListenerHost::listen`].
    fn unlisten(&self, listener: ListenerId);
}

/// The user's motion preference.
pub trait MotionHost {
    /// Returns `true` if the user asked the platform to reduce motion.
    fn prefers_reduced_motion(&self) -> bool;
}

/// Element lookup and measurement.
pub trait ElementHost<K> {
    /// Resolves a document identifier to an element.
    fn element_by_id(&self, id: &str) -> Option<K>;

    /// Returns the element's bounding rect in viewport coordinates.
    fn bounding_rect(&self, element: &K) -> Option<Rect>;
}

/// Document scrolling.
pub trait ScrollHost {
    /// Current document scroll offset.
    fn scroll_offset(&self) -> Vec2;

    /// Issues a scroll command.
    fn scroll_to(&self, command: ScrollCommand);
}

/// Global UI overrides.
pub trait UiOverrideHost<K> {
    /// Replaces the active overrides. `surface` is the element that keeps
    /// receiving pointer events under
    /// [`UiOverrides::EXCLUSIVE_POINTER_ROUTING`]; the empty set restores
    /// platform defaults.
    fn apply_overrides(&self, surface: &K, overrides: UiOverrides);
}

macro_rules! forward_host {
    ($($wrapper:ty),*) => {$(
        impl<K, T: IntersectionHost<K> + ?Sized> IntersectionHost<K> for $wrapper {
            fn observe(
                &self,
                targets: &[K],
                init: &ObserverInit,
            ) -> Result<ObserverId, CapabilityError> {
                (**self).observe(targets, init)
            }
            fn disconnect(&self, observer: ObserverId) {
                (**self).disconnect(observer);
            }
        }

        impl<T: TimerHost + ?Sized> TimerHost for $wrapper {
            fn set_timeout(&self, delay_ms: u64) -> TimerId {
                (**self).set_timeout(delay_ms)
            }
            fn clear_timeout(&self, timer: TimerId) {
                (**self).clear_timeout(timer);
            }
        }

        impl<T: FrameHost + ?Sized> FrameHost for $wrapper {
            fn request_frame(&self) -> FrameId {
                (**self).request_frame()
            }
            fn cancel_frame(&self, frame: FrameId) {
                (**self).cancel_frame(frame);
            }
        }

        impl<T: ListenerHost + ?Sized> ListenerHost for $wrapper {
            fn listen(&self, kinds: ListenerKinds) -> ListenerId {
                (**self).listen(kinds)
            }
            fn unlisten(&self, listener: ListenerId) {
                (**self).unlisten(listener);
            }
        }

        impl<T: MotionHost + ?Sized> MotionHost for $wrapper {
            fn prefers_reduced_motion(&self) -> bool {
                (**self).prefers_reduced_motion()
            }
        }

        impl<K, T: ElementHost<K> + ?Sized> ElementHost<K> for $wrapper {
            fn element_by_id(&self, id: &str) -> Option<K> {
                (**self).element_by_id(id)
            }
            fn bounding_rect(&self, element: &K) -> Option<Rect> {
                (**self).bounding_rect(element)
            }
        }

        impl<T: ScrollHost + ?Sized> ScrollHost for $wrapper {
            fn scroll_offset(&self) -> Vec2 {
                (**self).scroll_offset()
            }
            fn scroll_to(&self, command: ScrollCommand) {
                (**self).scroll_to(command);
            }
        }

        impl<K, T: UiOverrideHost<K> + ?Sized> UiOverrideHost<K> for $wrapper {
            fn apply_overrides(&self, surface: &K, overrides: UiOverrides) {
                (**self).apply_overrides(surface, overrides);
            }
        }
    )*};
}

forward_host!(&T, Rc<T>);
