// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Root margins: CSS-style margin shorthand applied to the viewport before
//! intersection is computed.

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use kurbo::Rect;

/// A single margin component.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MarginLength {
    /// Absolute length in pixels.
    Px(f64),
    /// Percentage of the viewport extent along the margin's axis.
    ///
    /// Top and bottom resolve against the viewport height, left and right
    /// against its width.
    Percent(f64),
}

impl MarginLength {
    /// Zero pixels.
    pub const ZERO: Self = Self::Px(0.0);

    /// Resolves this length to pixels given the extent of its axis.
    #[must_use]
    pub fn resolve(self, extent: f64) -> f64 {
        match self {
            Self::Px(px) => px,
            Self::Percent(pct) => extent * pct / 100.0,
        }
    }

    fn parse_component(token: &str) -> Result<Self, RootMarginError> {
        let invalid = || RootMarginError::InvalidLength(token.to_string());
        if token == "0" {
            return Ok(Self::ZERO);
        }
        if let Some(number) = token.strip_suffix("px") {
            let px = number.parse::<f64>().map_err(|_| invalid())?;
            return if px.is_finite() { Ok(Self::Px(px)) } else { Err(invalid()) };
        }
        if let Some(number) = token.strip_suffix('%') {
            let pct = number.parse::<f64>().map_err(|_| invalid())?;
            return if pct.is_finite() {
                Ok(Self::Percent(pct))
            } else {
                Err(invalid())
            };
        }
        Err(invalid())
    }
}

impl fmt::Display for MarginLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(px) => write!(f, "{px}px"),
            Self::Percent(pct) => write!(f, "{pct}%"),
        }
    }
}

/// Error returned when a root margin string cannot be parsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RootMarginError {
    /// The string contained no components.
    Empty,
    /// More than four components were given.
    TooManyComponents(usize),
    /// A component was not `0`, a pixel length, or a percentage.
    InvalidLength(String),
}

impl fmt::Display for RootMarginError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("root margin is empty"),
            Self::TooManyComponents(n) => {
                write!(f, "root margin has {n} components, expected 1 to 4")
            }
            Self::InvalidLength(token) => {
                write!(f, "invalid root margin length {token:?}, expected px or %")
            }
        }
    }
}

impl core::error::Error for RootMarginError {}

/// Margin applied around the viewport before computing intersections.
///
/// Positive components grow the effective viewport (elements count as
/// intersecting earlier), negative components shrink it.
///
/// ```
/// use folio_intersection::{MarginLength, RootMargin};
///
/// let margin: RootMargin = "0px 0px -5% 0px".parse().unwrap();
/// assert_eq!(margin.bottom, MarginLength::Percent(-5.0));
/// assert_eq!(margin.to_string(), "0px 0px -5% 0px");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RootMargin {
    /// Top edge.
    pub top: MarginLength,
    /// Right edge.
    pub right: MarginLength,
    /// Bottom edge.
    pub bottom: MarginLength,
    /// Left edge.
    pub left: MarginLength,
}

impl Default for RootMargin {
    fn default() -> Self {
        Self::ZERO
    }
}

impl RootMargin {
    /// No margin on any edge.
    pub const ZERO: Self = Self::uniform(MarginLength::ZERO);

    /// Creates a margin from its four components in CSS order.
    #[must_use]
    pub const fn new(
        top: MarginLength,
        right: MarginLength,
        bottom: MarginLength,
        left: MarginLength,
    ) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Creates a margin with the same length on every edge.
    #[must_use]
    pub const fn uniform(length: MarginLength) -> Self {
        Self::new(length, length, length, length)
    }

    /// Creates a margin that only affects the top and bottom edges.
    #[must_use]
    pub const fn vertical(top: MarginLength, bottom: MarginLength) -> Self {
        Self::new(top, MarginLength::ZERO, bottom, MarginLength::ZERO)
    }

    /// Parses a CSS margin shorthand with one to four components.
    ///
    /// Components expand like CSS `margin`: `a` applies to all edges,
    /// `a b` is vertical/horizontal, `a b c` is top/horizontal/bottom and
    /// `a b c d` is top/right/bottom/left.
    pub fn parse(input: &str) -> Result<Self, RootMarginError> {
        let mut parts = [MarginLength::ZERO; 4];
        let mut count = 0;
        for token in input.split_whitespace() {
            if count == 4 {
                return Err(RootMarginError::TooManyComponents(
                    input.split_whitespace().count(),
                ));
            }
            parts[count] = MarginLength::parse_component(token)?;
            count += 1;
        }
        let [a, b, c, d] = parts;
        match count {
            0 => Err(RootMarginError::Empty),
            1 => Ok(Self::uniform(a)),
            2 => Ok(Self::new(a, b, a, b)),
            3 => Ok(Self::new(a, b, c, b)),
            _ => Ok(Self::new(a, b, c, d)),
        }
    }

    /// Applies this margin to `viewport`, returning the effective root bounds.
    ///
    /// The result is never inverted: if negative margins overlap, the rect
    /// collapses to zero size along that axis.
    #[must_use]
    pub fn apply(&self, viewport: Rect) -> Rect {
        let width = viewport.width();
        let height = viewport.height();
        let x0 = viewport.x0 - self.left.resolve(width);
        let x1 = viewport.x1 + self.right.resolve(width);
        let y0 = viewport.y0 - self.top.resolve(height);
        let y1 = viewport.y1 + self.bottom.resolve(height);
        Rect::new(x0, y0, x1.max(x0), y1.max(y0))
    }
}

impl FromStr for RootMargin {
    type Err = RootMarginError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RootMargin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.top, self.right, self.bottom, self.left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_component_applies_to_every_edge() {
        let margin = RootMargin::parse("10px").unwrap();
        assert_eq!(margin, RootMargin::uniform(MarginLength::Px(10.0)));
    }

    #[test]
    fn two_and_three_components_expand_like_css() {
        let two = RootMargin::parse("-10% 0px").unwrap();
        assert_eq!(two.top, MarginLength::Percent(-10.0));
        assert_eq!(two.bottom, MarginLength::Percent(-10.0));
        assert_eq!(two.left, MarginLength::ZERO);

        let three = RootMargin::parse("1px 2px 3px").unwrap();
        assert_eq!(three.top, MarginLength::Px(1.0));
        assert_eq!(three.right, MarginLength::Px(2.0));
        assert_eq!(three.bottom, MarginLength::Px(3.0));
        assert_eq!(three.left, MarginLength::Px(2.0));
    }

    #[test]
    fn unitless_zero_is_accepted_but_other_unitless_numbers_are_not() {
        assert!(RootMargin::parse("0 0 -5% 0").is_ok());
        assert_eq!(
            RootMargin::parse("5"),
            Err(RootMarginError::InvalidLength("5".to_string()))
        );
        assert_eq!(
            RootMargin::parse("2em"),
            Err(RootMarginError::InvalidLength("2em".to_string()))
        );
    }

    #[test]
    fn empty_and_oversized_inputs_error() {
        assert_eq!(RootMargin::parse("   "), Err(RootMarginError::Empty));
        assert_eq!(
            RootMargin::parse("1px 1px 1px 1px 1px"),
            Err(RootMarginError::TooManyComponents(5))
        );
    }

    #[test]
    fn apply_shrinks_with_negative_percentages() {
        let margin = RootMargin::parse("-10% 0px -10% 0px").unwrap();
        let root = margin.apply(Rect::new(0.0, 0.0, 800.0, 1000.0));
        assert_eq!(root, Rect::new(0.0, 100.0, 800.0, 900.0));
    }

    #[test]
    fn apply_grows_with_positive_pixels() {
        let margin = RootMargin::uniform(MarginLength::Px(20.0));
        let root = margin.apply(Rect::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(root, Rect::new(-20.0, -20.0, 120.0, 120.0));
    }

    #[test]
    fn apply_never_inverts() {
        let margin =
            RootMargin::vertical(MarginLength::Percent(-60.0), MarginLength::Percent(-60.0));
        let root = margin.apply(Rect::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(root.height(), 0.0);
        assert!(root.y1 >= root.y0);
    }

    #[test]
    fn display_round_trips_through_parse() {
        let margin = RootMargin::parse("0px 0px -5% 0px").unwrap();
        assert_eq!(RootMargin::parse(&margin.to_string()), Ok(margin));
    }
}
