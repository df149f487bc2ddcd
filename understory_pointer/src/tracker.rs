// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer tracker: turn raw down/move/up/cancel notifications into lifecycles.
//!
//! ## Usage
//!
//! 1) Forward pointer-down to [`PointerTracker::down`]. The handler's
//!    [`PointerHandler::start`] decides whether the pointer is captured.
//! 2) Forward pointer-move to [`PointerTracker::moved`]. Only captured
//!    pointers reach [`PointerHandler::moved`].
//! 3) Forward pointer-up and pointer-cancel to [`PointerTracker::up`] and
//!    [`PointerTracker::cancel`]. Both end the lifecycle.
//! 4) Call [`PointerTracker::stop`] when the tracked element goes away.
//!    A stopped tracker ignores everything until it is dropped.

use smallvec::SmallVec;

use crate::pointer::{Pointer, PointerId};

/// Callbacks for a pointer lifecycle.
///
/// `Ev` is the host's originating event type, passed through untouched so
/// handlers can inspect modifiers or call host-specific APIs on it.
pub trait PointerHandler<Ev: ?Sized = ()> {
    /// A pointer went down. Return `true` to capture it; rejected pointers
    /// never reach [`moved`](Self::moved) or [`end`](Self::end).
    fn start(&mut self, pointer: &Pointer, event: &Ev) -> bool;

    /// A captured pointer moved.
    ///
    /// `previous` and `current` hold every captured pointer before and after
    /// the move, in capture order.
    fn moved(&mut self, previous: &[Pointer], current: &[Pointer], event: &Ev);

    /// A captured pointer was released or cancelled.
    fn end(&mut self, pointer: &Pointer, event: &Ev);
}

/// Tracks captured pointers and forwards their lifecycle to a handler.
#[derive(Clone, Debug, Default)]
pub struct PointerTracker {
    current: SmallVec<[Pointer; 2]>,
    stopped: bool,
}

impl PointerTracker {
    /// Creates a tracker with no captured pointers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently captured pointers, in capture order.
    #[must_use]
    pub fn pointers(&self) -> &[Pointer] {
        &self.current
    }

    /// Returns `true` if the pointer with `id` is captured.
    #[must_use]
    pub fn is_tracking(&self, id: PointerId) -> bool {
        self.position_of(id).is_some()
    }

    /// Returns `true` once [`stop`](Self::stop) has been called.
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Offers a new pointer to the handler.
    ///
    /// Returns `true` if the handler captured it. A pointer that is already
    /// captured is not offered again.
    pub fn down<H, Ev>(&mut self, handler: &mut H, pointer: Pointer, event: &Ev) -> bool
    where
        H: PointerHandler<Ev> + ?Sized,
        Ev: ?Sized,
    {
        if self.stopped || self.is_tracking(pointer.id) {
            return false;
        }
        if !handler.start(&pointer, event) {
            return false;
        }
        self.current.push(pointer);
        true
    }

    /// Updates a captured pointer and notifies the handler.
    ///
    /// Returns `false` without calling the handler if the pointer is not
    /// captured.
    pub fn moved<H, Ev>(&mut self, handler: &mut H, pointer: Pointer, event: &Ev) -> bool
    where
        H: PointerHandler<Ev> + ?Sized,
        Ev: ?Sized,
    {
        if self.stopped {
            return false;
        }
        let Some(index) = self.position_of(pointer.id) else {
            return false;
        };
        let previous = self.current.clone();
        self.current[index] = pointer;
        handler.moved(&previous, &self.current, event);
        true
    }

    /// Releases a captured pointer and notifies the handler.
    ///
    /// Returns `false` if the pointer was not captured.
    pub fn up<H, Ev>(&mut self, handler: &mut H, pointer: Pointer, event: &Ev) -> bool
    where
        H: PointerHandler<Ev> + ?Sized,
        Ev: ?Sized,
    {
        self.release(handler, pointer, event)
    }

    /// Cancels a captured pointer, for example when the host steals the
    /// gesture for scrolling. The handler sees the same `end` as for
    /// [`up`](Self::up).
    pub fn cancel<H, Ev>(&mut self, handler: &mut H, pointer: Pointer, event: &Ev) -> bool
    where
        H: PointerHandler<Ev> + ?Sized,
        Ev: ?Sized,
    {
        self.release(handler, pointer, event)
    }

    /// Releases every captured pointer and ignores all further input.
    ///
    /// No `end` callbacks are made. Returns the number of pointers that were
    /// still captured. Calling this more than once is harmless.
    pub fn stop(&mut self) -> usize {
        let released = self.current.len();
        self.current.clear();
        self.stopped = true;
        released
    }

    fn release<H, Ev>(&mut self, handler: &mut H, pointer: Pointer, event: &Ev) -> bool
    where
        H: PointerHandler<Ev> + ?Sized,
        Ev: ?Sized,
    {
        if self.stopped {
            return false;
        }
        let Some(index) = self.position_of(pointer.id) else {
            return false;
        };
        self.current.remove(index);
        handler.end(&pointer, event);
        true
    }

    fn position_of(&self, id: PointerId) -> Option<usize> {
        self.current.iter().position(|p| p.id == id)
    }
}
