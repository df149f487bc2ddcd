// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host side of a controller: re-render requests, viewport queries and
//! ancestor notifications.

use kurbo::Size;
use understory_pointer::Pointer;

use crate::frame::FrameToken;
use crate::types::Position;

/// The object that owns a controller and renders its element.
///
/// Every controller entry point that can change what is on screen takes the
/// host by `&mut`, so the controller never holds on to it.
pub trait DragHost<E> {
    /// Re-read [`DragController::current_style`](crate::DragController::current_style)
    /// and render.
    fn request_update(&mut self);

    /// Size of the visible viewport in page pixels.
    fn viewport_size(&self) -> Size;

    /// Area of the physical screen available to windows, when known.
    fn screen_available_size(&self) -> Option<Size> {
        None
    }

    /// Returns `false` if the platform cannot deliver pointer events. The
    /// element then stays static and shows no drag cursor.
    fn supports_pointer_events(&self) -> bool {
        true
    }

    /// Run `token` on the next display frame by passing it to
    /// [`DragController::run_frame`](crate::DragController::run_frame).
    ///
    /// Only used with [`UpdateMode::NextFrame`](crate::UpdateMode::NextFrame).
    /// Returns `true` if the token was scheduled. The default schedules
    /// nothing and returns `false`, and the controller renders right away.
    fn request_frame(&mut self, token: FrameToken) -> bool {
        let _ = token;
        false
    }

    /// Deliver `event` to ancestors of the draggable element, e.g. a window
    /// manager raising the dragged window.
    ///
    /// Only used when [`DragOptions::notify_ancestors`](crate::DragOptions::notify_ancestors)
    /// is set.
    fn dispatch_drag_event(&mut self, event: &DragEvent<'_, E>) {
        let _ = event;
    }
}

/// Notification sent to ancestors on every accepted move.
#[derive(Copy, Clone, Debug)]
pub struct DragEvent<'a, E> {
    /// The pointer sample that caused the move.
    pub pointer: &'a Pointer,
    /// The element being moved.
    pub container: &'a E,
    /// The draggable region.
    pub draggable: &'a E,
    /// The offset after clamping.
    pub offset: Position,
    /// The event propagates from the draggable element to its ancestors.
    pub bubbles: bool,
    /// The event crosses shadow or component boundaries.
    pub composed: bool,
}

impl<'a, E> DragEvent<'a, E> {
    /// Creates a bubbling, composed event.
    #[must_use]
    pub fn new(pointer: &'a Pointer, container: &'a E, draggable: &'a E, offset: Position) -> Self {
        Self {
            pointer,
            container,
            draggable,
            offset,
            bubbles: true,
            composed: true,
        }
    }
}
