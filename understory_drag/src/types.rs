// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public value types: drag state, pixel positions, and the style projection.

use core::fmt;
use core::ops::Add;

use kurbo::Vec2;

/// Whether a drag gesture is in progress.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum DragState {
    /// No pointer is driving the element.
    #[default]
    Idle,
    /// A captured pointer is moving the element.
    Dragging,
}

impl DragState {
    /// The name presentation layers bind to, e.g. a `data-dragging` attribute.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Dragging => "dragging",
        }
    }

    /// Returns `true` while dragging.
    #[must_use]
    pub const fn is_dragging(self) -> bool {
        matches!(self, Self::Dragging)
    }

    /// Cursor affordance for this state.
    #[must_use]
    pub const fn cursor(self) -> Cursor {
        match self {
            Self::Idle => Cursor::Grab,
            Self::Dragging => Cursor::Grabbing,
        }
    }
}

impl fmt::Display for DragState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cursor shown over the draggable region.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Cursor {
    /// The element can be picked up.
    Grab,
    /// The element is being carried.
    Grabbing,
}

impl Cursor {
    /// CSS cursor keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Grab => "grab",
            Self::Grabbing => "grabbing",
        }
    }
}

/// Integer pixel pair.
///
/// Used both for the element's translation offset and for per-move deltas.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    /// Horizontal component, growing to the right.
    pub x: i32,
    /// Vertical component, growing downward.
    pub y: i32,
}

impl Position {
    /// The origin.
    pub const ZERO: Self = Self::new(0, 0);

    /// Creates a position.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Converts to a Kurbo vector, e.g. for a `translate(..)` transform.
    #[must_use]
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(f64::from(self.x), f64::from(self.y))
    }
}

impl Add for Position {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Absolute top/left placement of the element before any drag offset.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Anchor {
    /// Distance from the top edge, in pixels.
    pub top: i32,
    /// Distance from the left edge, in pixels.
    pub left: i32,
}

impl Anchor {
    /// Creates an anchor.
    #[must_use]
    pub const fn new(top: i32, left: i32) -> Self {
        Self { top, left }
    }
}

/// Read-only projection of a controller for the presentation layer.
///
/// The controller only speaks in numbers. Whether the offset becomes a
/// `translate(x, y)` transform or is folded into `top`/`left` is up to the
/// renderer; [`DragStyle::top_left`] covers the latter.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DragStyle {
    /// Current gesture state.
    pub state: DragState,
    /// Accumulated translation relative to the initial layout position.
    pub offset: Position,
    /// Initial placement, if one was configured.
    pub anchor: Option<Anchor>,
    /// Cursor affordance, or `None` when dragging is not available.
    pub cursor: Option<Cursor>,
}

impl DragStyle {
    /// The offset as a translation vector.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        self.offset.to_vec2()
    }

    /// The anchor moved by the offset, for renderers that position with
    /// `top`/`left` instead of a transform.
    #[must_use]
    pub fn top_left(&self) -> Option<Anchor> {
        self.anchor.map(|a| {
            Anchor::new(
                a.top.saturating_add(self.offset.y),
                a.left.saturating_add(self.offset.x),
            )
        })
    }
}
