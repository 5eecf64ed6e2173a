// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Rect;

use crate::{RootMargin, Thresholds};

/// One intersection change reported for an observed target.
///
/// All rects are in viewport coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct IntersectionEntry<K> {
    /// The observed element.
    pub target: K,
    /// Whether the target meets the observer's smallest threshold inside the
    /// margin-adjusted root.
    pub is_intersecting: bool,
    /// Fraction of the target's area inside the margin-adjusted root.
    pub intersection_ratio: f64,
    /// The target's bounding rect.
    pub bounding_rect: Rect,
    /// The margin-adjusted root the ratio was computed against.
    pub root_bounds: Rect,
    /// The unadjusted viewport.
    pub viewport: Rect,
    /// Host timestamp of the observation, in milliseconds.
    pub time_ms: u64,
}

impl<K> IntersectionEntry<K> {
    /// Vertical distance between the target's center and the viewport's center.
    #[must_use]
    pub fn center_distance_y(&self) -> f64 {
        let target = (self.bounding_rect.y0 + self.bounding_rect.y1) * 0.5;
        let viewport = (self.viewport.y0 + self.viewport.y1) * 0.5;
        (target - viewport).abs()
    }
}

/// Raw intersection measurement between a target and a root.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Measurement {
    /// The margin-adjusted root.
    pub root_bounds: Rect,
    /// Whether the target touches the root at all (edge adjacency counts).
    pub touches: bool,
    /// Fraction of the target's area inside the root.
    pub ratio: f64,
}

impl Measurement {
    /// Measures `target` against `viewport` adjusted by `margin`.
    ///
    /// A target with zero area has ratio `1.0` when it touches the root and
    /// `0.0` otherwise.
    #[must_use]
    pub fn new(target: Rect, viewport: Rect, margin: &RootMargin) -> Self {
        let root_bounds = margin.apply(viewport);
        let touches = target.x0 <= root_bounds.x1
            && target.x1 >= root_bounds.x0
            && target.y0 <= root_bounds.y1
            && target.y1 >= root_bounds.y0;
        let area = target.area();
        let ratio = if !touches {
            0.0
        } else if area > 0.0 {
            (target.intersect(root_bounds).area() / area).clamp(0.0, 1.0)
        } else {
            1.0
        };
        Self {
            root_bounds,
            touches,
            ratio,
        }
    }

    /// Threshold index for this measurement; zero when the target does not
    /// touch the root.
    #[must_use]
    pub fn threshold_index(&self, thresholds: &Thresholds) -> usize {
        if self.touches {
            thresholds.index_of(self.ratio)
        } else {
            0
        }
    }

    /// Whether this measurement counts as intersecting for `thresholds`.
    #[must_use]
    pub fn is_intersecting(&self, thresholds: &Thresholds) -> bool {
        self.touches && self.ratio >= thresholds.min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MarginLength;

    const VIEWPORT: Rect = Rect::new(0.0, 0.0, 800.0, 600.0);

    #[test]
    fn fully_visible_target_has_ratio_one() {
        let m = Measurement::new(Rect::new(10.0, 10.0, 110.0, 110.0), VIEWPORT, &RootMargin::ZERO);
        assert!(m.touches);
        assert_eq!(m.ratio, 1.0);
    }

    #[test]
    fn half_visible_target() {
        let m = Measurement::new(Rect::new(0.0, 500.0, 100.0, 700.0), VIEWPORT, &RootMargin::ZERO);
        assert_eq!(m.ratio, 0.5);
        assert!(m.is_intersecting(&Thresholds::single(0.15)));
        assert!(!m.is_intersecting(&Thresholds::single(0.6)));
    }

    #[test]
    fn negative_margin_excludes_target_near_the_edge() {
        let margin = RootMargin::vertical(MarginLength::ZERO, MarginLength::Percent(-10.0));
        // Bottom 60px of the viewport are cut off by the margin.
        let m = Measurement::new(Rect::new(0.0, 560.0, 100.0, 600.0), VIEWPORT, &margin);
        assert_eq!(m.root_bounds.y1, 540.0);
        assert!(!m.touches);
        assert_eq!(m.ratio, 0.0);
    }

    #[test]
    fn edge_adjacent_target_touches_with_zero_ratio() {
        let m = Measurement::new(Rect::new(0.0, 600.0, 100.0, 700.0), VIEWPORT, &RootMargin::ZERO);
        assert!(m.touches);
        assert_eq!(m.ratio, 0.0);
        assert!(m.is_intersecting(&Thresholds::single(0.0)));
        assert!(!m.is_intersecting(&Thresholds::single(0.15)));
        assert_eq!(m.threshold_index(&Thresholds::single(0.0)), 1);
    }

    #[test]
    fn zero_area_target_inside_root_counts_as_fully_visible() {
        let m = Measurement::new(Rect::new(50.0, 50.0, 50.0, 50.0), VIEWPORT, &RootMargin::ZERO);
        assert_eq!(m.ratio, 1.0);
    }

    #[test]
    fn center_distance_is_measured_against_unadjusted_viewport() {
        let entry = IntersectionEntry {
            target: 1_u32,
            is_intersecting: true,
            intersection_ratio: 1.0,
            bounding_rect: Rect::new(0.0, 200.0, 100.0, 300.0),
            root_bounds: Rect::new(0.0, 60.0, 800.0, 540.0),
            viewport: VIEWPORT,
            time_ms: 0,
        };
        assert_eq!(entry.center_distance_y(), 50.0);
    }
}
