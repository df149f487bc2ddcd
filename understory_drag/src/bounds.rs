// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element handles and the geometry the clamp is computed against.

use kurbo::{Rect, Size};

/// A host-owned reference to a laid-out element.
///
/// Handles are weak: once the element leaves the document,
/// [`bounding_rect`](Self::bounding_rect) returns `None` and the controller
/// skips moves instead of failing.
pub trait ElementRef {
    /// Returns `false` for nodes that cannot be dragged or measured, such as
    /// text or comment nodes. Such targets are rejected at attach time.
    fn is_element(&self) -> bool {
        true
    }

    /// Current bounding rectangle in page coordinates, or `None` if the
    /// element is gone.
    fn bounding_rect(&self) -> Option<Rect>;
}

/// Rectangles sampled at the start of one move.
///
/// Never stored across moves: layout may change during a drag.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Geometry {
    /// The draggable region (handle). Its bottom edge is tested against the
    /// available height, so the handle stays reachable even when a tall panel
    /// hangs below the fold.
    pub handle: Rect,
    /// The element that moves (panel). Its right edge is tested against the
    /// available width.
    pub panel: Rect,
    /// The allowed area in page coordinates.
    pub bounds: Rect,
}

/// The area a viewport-bounded element may occupy.
///
/// Uses the smaller of the viewport and the screen's available area on each
/// axis, so a window that is larger than, or partly off, its screen does not
/// let panels drift out of sight.
#[must_use]
pub fn available_extent(viewport: Size, screen_available: Option<Size>) -> Size {
    match screen_available {
        Some(screen) => Size::new(
            viewport.width.min(screen.width),
            viewport.height.min(screen.height),
        ),
        None => viewport,
    }
}
