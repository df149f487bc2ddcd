// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_drag --heading-base-level=0

//! Understory Drag: a headless controller for draggable floating panels.
//!
//! This crate turns a pointer lifecycle into a whole-pixel offset for a
//! window, toolbar or any other floating element, and keeps that element
//! inside its bounds. It does **not** render anything. A host (the
//! presentation layer) is expected to:
//! - Own the elements and expose them through [`ElementRef`] handles.
//! - Forward raw pointer input to the controller.
//! - Re-render from [`DragController::current_style`] when asked through
//!   [`DragHost::request_update`].
//!
//! ## How a move is computed
//!
//! Moves are incremental. Each pointer sample is floored to whole pixels and
//! the difference to the previous sample is added to the offset, so the element
//! tracks the cursor exactly from wherever it was grabbed, with no jump to the
//! pointer. A move that stays on the same pixel does nothing at all.
//!
//! The tentative offset is then clamped by [`clamp_offset`] against the
//! draggable region, the moving element and the allowed area, which are
//! measured again on every move. Elements may be laid out anywhere; the
//! clamp works from their current rectangles. The clamp corrects at most one edge per
//! move, in the order top, left, bottom, right; see [`clamp`] for the
//! consequences.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use understory_drag::{
//!     ClampEdge, DragController, DragHost, DragOptions, ElementRef, MoveOutcome, Position,
//! };
//! use understory_pointer::{Pointer, PointerId};
//!
//! #[derive(Clone)]
//! struct Panel(Rect);
//!
//! impl ElementRef for Panel {
//!     fn bounding_rect(&self) -> Option<Rect> {
//!         Some(self.0)
//!     }
//! }
//!
//! struct Page;
//!
//! impl DragHost<Panel> for Page {
//!     fn request_update(&mut self) {}
//!
//!     fn viewport_size(&self) -> Size {
//!         Size::new(500.0, 400.0)
//!     }
//! }
//!
//! let panel = Panel(Rect::new(0.0, 0.0, 100.0, 30.0));
//! let mut drag = DragController::new();
//! drag.attach(&mut Page, Some(panel.clone()), Some(panel), DragOptions::new())
//!     .unwrap();
//!
//! let id = PointerId(7);
//! drag.pointer_down(&mut Page, Pointer::new(id, Point::new(50.0, 15.0)));
//!
//! // Dragging up past the top edge pins the element to it.
//! let outcome = drag.pointer_move(&mut Page, Pointer::new(id, Point::new(60.0, 5.0)));
//! assert_eq!(
//!     outcome,
//!     MoveOutcome::Moved { offset: Position::new(10, 0), edge: Some(ClampEdge::Top) }
//! );
//! ```
//!
//! ## Scheduling
//!
//! By default every change re-renders synchronously. With
//! [`UpdateMode::NextFrame`] the controller hands out one [`FrameToken`] per
//! frame instead and re-renders when the host runs it; see [`frame`].
//!
//! ## Features
//!
//! - `std` (default): build Kurbo and `tracing` with the standard library.
//! - `libm`: build Kurbo for `no_std` targets.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod bounds;
pub mod clamp;
mod controller;
mod cursor;
mod error;
pub mod frame;
mod host;
mod options;
mod types;

pub use bounds::{ElementRef, Geometry, available_extent};
pub use clamp::{ClampEdge, Clamped, Violations, clamp_offset};
pub use controller::{Attachment, DragController, ListenerId, MoveOutcome, SkipReason};
pub use cursor::{CursorSample, floor_point, floor_px};
pub use error::{ConfigurationError, ElementRole};
pub use frame::{FrameQueue, FrameToken};
pub use host::{DragEvent, DragHost};
pub use options::{BoundsMode, DragOptions, PointerFilter, UpdateMode};
pub use types::{Anchor, Cursor, DragState, DragStyle, Position};
