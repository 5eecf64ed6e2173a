// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scoped global UI overrides.

use folio_host::{UiOverrideHost, UiOverrides};

/// Applies UI overrides on creation and restores platform defaults on drop.
///
/// Only one guard should be alive per host at a time; the drag controller
/// holds it for exactly the duration of a drag.
///
/// ```
/// use folio_event_state::OverrideGuard;
/// use folio_host::UiOverrides;
/// use folio_sim::SimHost;
/// use kurbo::Size;
///
/// let host = SimHost::new(Size::new(800.0, 600.0));
/// {
///     let _guard = OverrideGuard::acquire(&host, 7_u32, UiOverrides::SUPPRESS_TEXT_SELECTION);
///     assert_eq!(host.overrides(), UiOverrides::SUPPRESS_TEXT_SELECTION);
/// }
/// assert!(host.overrides().is_empty());
/// ```
#[derive(Debug)]
pub struct OverrideGuard<K, H: UiOverrideHost<K>> {
    host: H,
    surface: K,
    overrides: UiOverrides,
}

impl<K, H: UiOverrideHost<K>> OverrideGuard<K, H> {
    /// Applies `overrides`, keeping `surface` interactive.
    pub fn acquire(host: H, surface: K, overrides: UiOverrides) -> Self {
        host.apply_overrides(&surface, overrides);
        Self {
            host,
            surface,
            overrides,
        }
    }

    /// The applied overrides.
    #[must_use]
    pub fn overrides(&self) -> UiOverrides {
        self.overrides
    }

    /// The surface that keeps receiving pointer events.
    #[must_use]
    pub fn surface(&self) -> &K {
        &self.surface
    }
}

impl<K, H: UiOverrideHost<K>> Drop for OverrideGuard<K, H> {
    fn drop(&mut self) {
        self.host.apply_overrides(&self.surface, UiOverrides::empty());
    }
}
