// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use smallvec::SmallVec;

/// Sorted, de-duplicated list of intersection ratios in `[0, 1]`.
///
/// An observer reports a new entry for a target whenever the number of
/// thresholds its intersection ratio meets or exceeds changes.
#[derive(Clone, Debug, PartialEq)]
pub struct Thresholds {
    values: SmallVec<[f64; 4]>,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::single(0.0)
    }
}

impl Thresholds {
    /// Creates a list holding a single threshold.
    ///
    /// Values outside `[0, 1]` are clamped; a NaN becomes `0.0`.
    #[must_use]
    pub fn single(value: f64) -> Self {
        let mut values = SmallVec::new();
        values.push(sanitize(value));
        Self { values }
    }

    /// Creates a list from arbitrary values.
    ///
    /// Values are clamped to `[0, 1]`, sorted ascending and de-duplicated. An
    /// empty input yields the single threshold `0.0`.
    #[must_use]
    pub fn new(values: &[f64]) -> Self {
        let mut values: SmallVec<[f64; 4]> = values.iter().copied().map(sanitize).collect();
        if values.is_empty() {
            return Self::default();
        }
        values.sort_unstable_by(f64::total_cmp);
        values.dedup();
        Self { values }
    }

    /// Returns the thresholds in ascending order.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Returns the smallest threshold.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.values.first().copied().unwrap_or(0.0)
    }

    /// Returns how many thresholds `ratio` meets or exceeds.
    #[must_use]
    pub fn index_of(&self, ratio: f64) -> usize {
        self.values.iter().take_while(|t| ratio >= **t).count()
    }
}

fn sanitize(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
