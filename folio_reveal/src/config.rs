// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use folio_host::ObserverInit;
use folio_intersection::{MarginLength, RootMargin, Thresholds};

/// Default fraction of an element that must be visible: `0.15`.
pub const DEFAULT_VISIBILITY_THRESHOLD: f64 = 0.15;

/// Default root margin: the bottom 5% of the viewport does not count.
pub const DEFAULT_ROOT_MARGIN: RootMargin =
    RootMargin::vertical(MarginLength::ZERO, MarginLength::Percent(-5.0));

/// Recurring reveal configurations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RevealPreset {
    /// Whole page sections: reveal once 10% is visible.
    Section,
    /// Section headings: reveal once 30% is visible.
    Heading,
    /// Body blocks such as forms and paragraphs: reveal once 20% is visible.
    Body,
}

impl RevealPreset {
    /// Visibility threshold for this preset.
    #[must_use]
    pub const fn threshold(self) -> f64 {
        match self {
            Self::Section => 0.1,
            Self::Heading => 0.3,
            Self::Body => 0.2,
        }
    }
}

/// Configuration of one [`VisibilityTracker`](crate::VisibilityTracker).
///
/// Immutable once a tracker is created; build it with the `with_*` methods.
///
/// ```
/// use folio_reveal::{RevealPreset, TrackerConfig};
///
/// // Fourth card in a list: 30% visible, revealed 450ms after entering.
/// let config = TrackerConfig::preset(RevealPreset::Heading).staggered(3, 150);
/// assert_eq!(config.visibility_threshold(), 0.3);
/// assert_eq!(config.delay_ms(), 450);
/// assert!(config.trigger_once());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackerConfig {
    visibility_threshold: f64,
    root_margin: RootMargin,
    trigger_once: bool,
    delay_ms: u64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            visibility_threshold: DEFAULT_VISIBILITY_THRESHOLD,
            root_margin: DEFAULT_ROOT_MARGIN,
            trigger_once: true,
            delay_ms: 0,
        }
    }
}

impl TrackerConfig {
    /// Default configuration with a preset's threshold.
    #[must_use]
    pub fn preset(preset: RevealPreset) -> Self {
        Self::default().with_visibility_threshold(preset.threshold())
    }

    /// Sets the visible fraction required to count as intersecting.
    ///
    /// Clamped to `[0, 1]`.
    #[must_use]
    pub fn with_visibility_threshold(mut self, threshold: f64) -> Self {
        self.visibility_threshold = if threshold.is_nan() {
            DEFAULT_VISIBILITY_THRESHOLD
        } else {
            threshold.clamp(0.0, 1.0)
        };
        self
    }

    /// Sets the root margin.
    #[must_use]
    pub fn with_root_margin(mut self, root_margin: RootMargin) -> Self {
        self.root_margin = root_margin;
        self
    }

    /// Sets whether the tracker latches after its first reveal.
    #[must_use]
    pub fn with_trigger_once(mut self, trigger_once: bool) -> Self {
        self.trigger_once = trigger_once;
        self
    }

    /// Sets the delay between intersecting and revealing.
    #[must_use]
    pub fn with_delay_ms(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Adds `index * step_ms` to the delay, for items revealed in sequence.
    #[must_use]
    pub fn staggered(mut self, index: usize, step_ms: u64) -> Self {
        let index = u64::try_from(index).unwrap_or(u64::MAX);
        self.delay_ms = self
            .delay_ms
            .saturating_add(index.saturating_mul(step_ms));
        self
    }

    /// Visible fraction required to count as intersecting.
    #[must_use]
    pub fn visibility_threshold(&self) -> f64 {
        self.visibility_threshold
    }

    /// Root margin applied to the viewport.
    #[must_use]
    pub fn root_margin(&self) -> RootMargin {
        self.root_margin
    }

    /// Whether the tracker latches after its first reveal.
    #[must_use]
    pub fn trigger_once(&self) -> bool {
        self.trigger_once
    }

    /// Delay between intersecting and revealing.
    #[must_use]
    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Observer options for this configuration.
    #[must_use]
    pub fn observer_init(&self) -> ObserverInit {
        ObserverInit {
            thresholds: Thresholds::single(self.visibility_threshold),
            root_margin: self.root_margin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn defaults_match_reveal_conventions() {
        let config = TrackerConfig::default();
        assert_eq!(config.visibility_threshold(), 0.15);
        assert_eq!(config.root_margin().to_string(), "0px 0px -5% 0px");
        assert!(config.trigger_once());
        assert_eq!(config.delay_ms(), 0);
    }

    #[test]
    fn threshold_is_clamped() {
        let high = TrackerConfig::default().with_visibility_threshold(3.0);
        assert_eq!(high.visibility_threshold(), 1.0);
        let low = TrackerConfig::default().with_visibility_threshold(-1.0);
        assert_eq!(low.visibility_threshold(), 0.0);
    }

    #[test]
    fn stagger_adds_to_existing_delay() {
        let config = TrackerConfig::default().with_delay_ms(100).staggered(2, 50);
        assert_eq!(config.delay_ms(), 200);
    }

    #[test]
    fn observer_init_uses_single_threshold() {
        let init = TrackerConfig::preset(RevealPreset::Section).observer_init();
        assert_eq!(init.thresholds.as_slice(), &[0.1]);
        assert_eq!(init.root_margin, DEFAULT_ROOT_MARGIN);
    }
}
