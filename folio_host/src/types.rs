// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Handles, flags and commands shared between hosts and components.

use core::fmt;

use folio_intersection::{RootMargin, Thresholds};

macro_rules! handle {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(u64);

        impl $name {
            /// Wraps a host-assigned raw value.
            #[must_use]
            pub const fn new(raw: u64) -> Self {
                Self(raw)
            }

            /// Returns the raw value.
            #[must_use]
            pub const fn get(self) -> u64 {
                self.0
            }
        }
    };
}

handle!(
    /// A registered intersection observer.
    ObserverId
);
handle!(
    /// A pending timeout.
    TimerId
);
handle!(
    /// A pending animation-frame callback.
    FrameId
);
handle!(
    /// A set of registered global event listeners.
    ListenerId
);

/// Options for a new intersection observer.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ObserverInit {
    /// Ratios at which the host reports changes.
    pub thresholds: Thresholds,
    /// Margin applied to the viewport before intersection is computed.
    pub root_margin: RootMargin,
}

bitflags::bitflags! {
    /// Document-wide event listeners a component can register.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct ListenerKinds: u8 {
        /// Pointer movement anywhere in the document.
        const POINTER_MOVE = 1 << 0;
        /// Pointer release anywhere in the document.
        const POINTER_UP = 1 << 1;
        /// Scrolling of the observed container.
        const SCROLL = 1 << 2;
        /// Wheel input over the observed container.
        const WHEEL = 1 << 3;
    }
}

bitflags::bitflags! {
    /// Global UI behavior a component may temporarily override.
    ///
    /// The empty set means "platform defaults".
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct UiOverrides: u8 {
        /// Disable text selection across the document.
        const SUPPRESS_TEXT_SELECTION = 1 << 0;
        /// Route pointer events only to the override's surface element.
        const EXCLUSIVE_POINTER_ROUTING = 1 << 1;
    }
}

/// How a scroll command moves the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ScrollBehavior {
    /// Animate toward the target.
    #[default]
    Smooth,
    /// Jump to the target immediately.
    Instant,
}

/// A request to scroll the document vertically.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollCommand {
    /// Absolute document scroll position, in pixels.
    pub top: f64,
    /// How to get there.
    pub behavior: ScrollBehavior,
}

/// A platform capability that may be missing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Capability {
    /// Viewport intersection observation.
    Intersection,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Intersection => f.write_str("intersection observation"),
        }
    }
}

/// Error returned by hosts when a capability cannot be used.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CapabilityError {
    /// The platform does not provide the capability.
    Unsupported(Capability),
}

impl fmt::Display for CapabilityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsupported(capability) => write!(f, "{capability} is not supported"),
        }
    }
}

impl core::error::Error for CapabilityError {}
