// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use folio_host::{ElementHost, MotionHost, ScrollBehavior, ScrollCommand, ScrollHost};
use kurbo::{Rect, Vec2};

/// Document position that puts an anchor `offset` pixels below the top of the
/// viewport.
///
/// `anchor_top` is the anchor's top edge in viewport coordinates and
/// `scroll_y` the current document scroll offset.
#[must_use]
pub fn scroll_target(anchor_top: f64, scroll_y: f64, offset: f64) -> f64 {
    anchor_top + scroll_y - offset
}

/// Scroll behavior for the given motion preference.
#[must_use]
pub fn behavior_for(prefers_reduced_motion: bool) -> ScrollBehavior {
    if prefers_reduced_motion {
        ScrollBehavior::Instant
    } else {
        ScrollBehavior::Smooth
    }
}

/// Command scrolling to an anchor measured at `anchor`.
#[must_use]
pub fn anchor_command(
    anchor: Rect,
    scroll: Vec2,
    offset: f64,
    prefers_reduced_motion: bool,
) -> ScrollCommand {
    ScrollCommand {
        top: scroll_target(anchor.y0, scroll.y, offset),
        behavior: behavior_for(prefers_reduced_motion),
    }
}

/// Scrolls the element with id `id` to `offset_px` below the top of the
/// viewport.
///
/// Does nothing and returns `None` if the id does not resolve to a measurable
/// element. Otherwise returns the command that was issued: smooth, or instant
/// when the user prefers reduced motion.
///
/// ```
/// use folio_host::{ScrollBehavior, ScrollHost};
/// use folio_scroll::scroll_to_anchor;
/// use folio_sim::SimHost;
/// use kurbo::{Rect, Size};
///
/// let host = SimHost::new(Size::new(800.0, 600.0));
/// host.insert_element("contact", 9_u32, Rect::new(0.0, 2400.0, 800.0, 3000.0));
/// host.set_scroll_y(1000.0);
///
/// let command = scroll_to_anchor(&host, "contact", 80.0).unwrap();
/// assert_eq!(command.top, 2320.0);
/// assert_eq!(command.behavior, ScrollBehavior::Smooth);
///
/// assert_eq!(scroll_to_anchor(&host, "missing-id", 0.0), None);
/// ```
pub fn scroll_to_anchor<K, H>(host: &H, id: &str, offset_px: f64) -> Option<ScrollCommand>
where
    H: ElementHost<K> + ScrollHost + MotionHost + ?Sized,
{
    let Some(rect) = host
        .element_by_id(id)
        .and_then(|element| host.bounding_rect(&element))
    else {
        #[cfg(feature = "tracing")]
        tracing::debug!(id, "scroll anchor not in document");
        return None;
    };
    let command = anchor_command(
        rect,
        host.scroll_offset(),
        offset_px,
        host.prefers_reduced_motion(),
    );
    host.scroll_to(command);
    Some(command)
}

/// Scrolls the document back to the top.
pub fn scroll_to_top<H>(host: &H) -> ScrollCommand
where
    H: ScrollHost + MotionHost + ?Sized,
{
    let command = ScrollCommand {
        top: 0.0,
        behavior: behavior_for(host.prefers_reduced_motion()),
    };
    host.scroll_to(command);
    command
}
