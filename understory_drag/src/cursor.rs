// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cursor sampling: floor pointer positions and compute whole-pixel deltas.
//!
//! ## Usage
//!
//! 1) Call [`CursorSample::start`] with the pointer position at press time.
//! 2) On each move, call [`CursorSample::delta_to`] to get the whole-pixel
//!    movement since the last committed sample.
//! 3) Once the move has been applied, call [`CursorSample::advance_to`].
//!    Skipping this keeps the delta pending for the next move.
//! 4) Call [`CursorSample::end`] when the gesture finishes.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_drag::{CursorSample, Position};
//!
//! let mut cursor = CursorSample::default();
//! cursor.start(Point::new(10.9, 20.2));
//!
//! // Sub-pixel jitter floors to the same pixel.
//! assert_eq!(cursor.delta_to(Point::new(10.1, 20.7)), Some(Position::ZERO));
//!
//! let delta = cursor.delta_to(Point::new(15.5, 25.0)).unwrap();
//! assert_eq!(delta, Position::new(5, 5));
//! cursor.advance_to(Point::new(15.5, 25.0));
//! assert_eq!(cursor.last(), Some(Position::new(15, 25)));
//! ```

use kurbo::Point;

use crate::types::Position;

/// Floors a coordinate to whole pixels.
///
/// Values beyond the `i32` range saturate; `NaN` maps to `0`.
#[must_use]
pub fn floor_px(value: f64) -> i32 {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "float to int casts saturate, and flooring is corrected below"
    )]
    let truncated = value as i32;
    if f64::from(truncated) > value {
        truncated.saturating_sub(1)
    } else {
        truncated
    }
}

/// Floors both coordinates of a point.
#[must_use]
pub fn floor_point(point: Point) -> Position {
    Position::new(floor_px(point.x), floor_px(point.y))
}

/// Last committed cursor position of a drag, in whole page pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CursorSample {
    last: Option<Position>,
}

impl CursorSample {
    /// Starts sampling from `page`.
    pub fn start(&mut self, page: Point) {
        self.last = Some(floor_point(page));
    }

    /// Whole-pixel movement from the last committed sample to `page`.
    ///
    /// Returns `None` when no gesture is being sampled.
    #[must_use]
    pub fn delta_to(&self, page: Point) -> Option<Position> {
        let last = self.last?;
        let now = floor_point(page);
        Some(Position::new(
            now.x.saturating_sub(last.x),
            now.y.saturating_sub(last.y),
        ))
    }

    /// Commits `page` as the new baseline. Has no effect when not sampling.
    pub fn advance_to(&mut self, page: Point) {
        if self.last.is_some() {
            self.last = Some(floor_point(page));
        }
    }

    /// Stops sampling.
    pub fn end(&mut self) {
        self.last = None;
    }

    /// Returns `true` while a gesture is being sampled.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.last.is_some()
    }

    /// The last committed sample.
    #[must_use]
    pub fn last(&self) -> Option<Position> {
        self.last
    }
}
