// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_pointer --heading-base-level=0

//! Understory Pointer: pointer lifecycle tracking for UI interactions.
//!
//! This crate turns a host's raw pointer down/move/up/cancel notifications into
//! a per-pointer lifecycle (`start`, any number of `move`s, `end`) delivered to a
//! [`PointerHandler`]. It is the pointer stream adapter that higher-level
//! gesture code (for example `understory_drag`) is written against.
//!
//! - [`Pointer`]: a single pointer sample in page coordinates.
//! - [`PointerHandler`]: the callbacks a consumer implements. `start` returns
//!   whether the pointer should be captured, so consumers can reject secondary
//!   touches or re-entrant presses.
//! - [`PointerTracker`]: the bookkeeping. It remembers captured pointers,
//!   hands `moved` both the previous and the current pointer arrays, and
//!   releases everything on [`PointerTracker::stop`].
//!
//! The tracker does not own its handler. Each call takes the handler by
//! `&mut`, so the consumer's state can live next to the tracker without
//! shared ownership.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use understory_pointer::{Pointer, PointerHandler, PointerId, PointerTracker};
//!
//! #[derive(Default)]
//! struct Log {
//!     moves: Vec<Point>,
//!     ended: bool,
//! }
//!
//! impl PointerHandler for Log {
//!     fn start(&mut self, _pointer: &Pointer, _event: &()) -> bool {
//!         true
//!     }
//!
//!     fn moved(&mut self, _previous: &[Pointer], current: &[Pointer], _event: &()) {
//!         self.moves.push(current[0].page);
//!     }
//!
//!     fn end(&mut self, _pointer: &Pointer, _event: &()) {
//!         self.ended = true;
//!     }
//! }
//!
//! let mut tracker = PointerTracker::new();
//! let mut log = Log::default();
//! let id = PointerId(1);
//!
//! assert!(tracker.down(&mut log, Pointer::new(id, Point::new(10.0, 10.0)), &()));
//! tracker.moved(&mut log, Pointer::new(id, Point::new(12.0, 14.0)), &());
//! tracker.up(&mut log, Pointer::new(id, Point::new(12.0, 14.0)), &());
//!
//! assert_eq!(log.moves, vec![Point::new(12.0, 14.0)]);
//! assert!(log.ended);
//! ```
//!
//! ## Features
//!
//! - `std` (default): build Kurbo with the standard library.
//! - `libm`: build Kurbo for `no_std` targets.
//!
//! This crate is `no_std`.

#![no_std]

mod pointer;
mod tracker;

pub use pointer::{Pointer, PointerId, PointerKind};
pub use tracker::{PointerHandler, PointerTracker};
