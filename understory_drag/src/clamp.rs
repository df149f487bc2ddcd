// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered boundary clamp for a tentative drag offset.
//!
//! A move applies its delta to the current offset, then evaluates four
//! independent predicates against the measured rectangles:
//!
//! - top: the panel's top edge plus the vertical delta is above the bounds;
//! - left: the panel's left edge plus the horizontal delta is left of the
//!   bounds;
//! - bottom: the handle's bottom edge plus the vertical delta passes the
//!   bottom of the bounds;
//! - right: the panel's right edge plus the horizontal delta reaches the
//!   right of the bounds.
//!
//! Pins are relative to where the rectangles are now, so the element may be
//! laid out anywhere on the page and the bounds need not start at the origin.
//!
//! Exactly one violation is corrected, in the order top, left, bottom, right.
//! The corrected axis is pinned to its edge; the other axis keeps its tentative
//! value even if it is also out of bounds.
//!
//! This ordering cannot satisfy two violations at once. A drag toward the
//! top-left corner pins the top edge and leaves the panel partly past the left
//! edge until a later move stops violating the top. A panel larger than its
//! bounds is never fully contained. Callers that need strict containment must
//! clamp the published offset again.
//!
//! ```
//! use kurbo::Rect;
//! use understory_drag::{ClampEdge, Geometry, Position, clamp_offset};
//!
//! let rect = Rect::new(5.0, 5.0, 15.0, 15.0);
//! let geometry = Geometry {
//!     handle: rect,
//!     panel: rect,
//!     bounds: Rect::new(0.0, 0.0, 500.0, 500.0),
//! };
//!
//! let clamped = clamp_offset(Position::new(5, 5), Position::new(-20, -20), &geometry);
//! assert_eq!(clamped.edge, Some(ClampEdge::Top));
//! assert_eq!(clamped.offset, Position::new(-15, 0));
//! ```

use crate::bounds::Geometry;
use crate::cursor::floor_px;
use crate::types::Position;

bitflags::bitflags! {
    /// Boundaries a tentative offset violates.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Violations: u8 {
        /// Above the top edge.
        const TOP    = 0b0001;
        /// Past the left edge.
        const LEFT   = 0b0010;
        /// Below the bottom edge.
        const BOTTOM = 0b0100;
        /// At or past the right edge.
        const RIGHT  = 0b1000;
    }
}

impl Violations {
    /// The violation the clamp corrects: the first of top, left, bottom,
    /// right that is present.
    #[must_use]
    pub fn corrected_edge(self) -> Option<ClampEdge> {
        if self.contains(Self::TOP) {
            Some(ClampEdge::Top)
        } else if self.contains(Self::LEFT) {
            Some(ClampEdge::Left)
        } else if self.contains(Self::BOTTOM) {
            Some(ClampEdge::Bottom)
        } else if self.contains(Self::RIGHT) {
            Some(ClampEdge::Right)
        } else {
            None
        }
    }
}

/// The edge an offset was pinned to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ClampEdge {
    /// Vertical offset pinned so the panel's top meets the top of the bounds.
    Top,
    /// Horizontal offset pinned so the panel's left meets the left of the
    /// bounds.
    Left,
    /// Vertical offset pinned so the handle's bottom meets the bottom of the
    /// bounds.
    Bottom,
    /// Horizontal offset pinned so the panel's right meets the right of the
    /// bounds.
    Right,
}

/// Result of [`clamp_offset`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Clamped {
    /// The offset to publish.
    pub offset: Position,
    /// Every boundary the tentative offset violated.
    pub violations: Violations,
    /// The boundary that was corrected, if any.
    pub edge: Option<ClampEdge>,
}

/// Applies `delta` to `offset` and clamps the result against `geometry`.
///
/// See the [module docs](self) for the ordered policy.
#[must_use]
pub fn clamp_offset(offset: Position, delta: Position, geometry: &Geometry) -> Clamped {
    let mut next = offset + delta;
    let dx = f64::from(delta.x);
    let dy = f64::from(delta.y);

    let Geometry {
        handle,
        panel,
        bounds,
    } = *geometry;

    let mut violations = Violations::empty();
    violations.set(Violations::TOP, panel.min_y() + dy < bounds.min_y());
    violations.set(Violations::LEFT, panel.min_x() + dx < bounds.min_x());
    violations.set(Violations::BOTTOM, handle.max_y() + dy > bounds.max_y());
    violations.set(Violations::RIGHT, panel.max_x() + dx >= bounds.max_x());

    // Pins move the current offset by the distance from the measured edge
    // to the bounds, floored so the element lands inside.
    let edge = violations.corrected_edge();
    match edge {
        Some(ClampEdge::Top) => {
            next.y = offset
                .y
                .saturating_sub(floor_px(panel.min_y() - bounds.min_y()));
        }
        Some(ClampEdge::Left) => {
            next.x = offset
                .x
                .saturating_sub(floor_px(panel.min_x() - bounds.min_x()));
        }
        Some(ClampEdge::Bottom) => {
            next.y = offset
                .y
                .saturating_add(floor_px(bounds.max_y() - handle.max_y()));
        }
        Some(ClampEdge::Right) => {
            next.x = offset
                .x
                .saturating_add(floor_px(bounds.max_x() - panel.max_x()));
        }
        None => {}
    }

    Clamped {
        offset: next,
        violations,
        edge,
    }
}
