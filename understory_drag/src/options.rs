// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Controller configuration.

use understory_pointer::Pointer;

use crate::types::Anchor;

/// What the element is clamped against.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum BoundsMode {
    /// The host viewport, shrunk to the screen's available area when the host
    /// reports one.
    #[default]
    Viewport,
    /// A bounding element set with
    /// [`DragController::set_bounds_element`](crate::DragController::set_bounds_element).
    /// The element may sit anywhere on the page; its bounding rect is the
    /// allowed area.
    Element,
}

/// When the host is asked to re-render after a change.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum UpdateMode {
    /// Call [`DragHost::request_update`](crate::DragHost::request_update) and
    /// notify listeners synchronously.
    #[default]
    Immediate,
    /// Hand the host a [`FrameToken`](crate::FrameToken) and re-render when it
    /// is run, coalescing every change made before the next frame.
    NextFrame,
}

/// Which pointers may start a drag.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum PointerFilter {
    /// Only primary pointers; a second finger never starts a drag.
    #[default]
    PrimaryOnly,
    /// Any pointer.
    Any,
}

impl PointerFilter {
    /// Returns `true` if `pointer` may start a drag.
    #[must_use]
    pub fn accepts(self, pointer: &Pointer) -> bool {
        match self {
            Self::PrimaryOnly => pointer.primary,
            Self::Any => true,
        }
    }
}

/// Options passed to [`DragController::attach`](crate::DragController::attach).
///
/// ```
/// use understory_drag::{Anchor, DragOptions, UpdateMode};
///
/// let options = DragOptions::new()
///     .with_initial_position(Anchor::new(50, 50))
///     .with_update_mode(UpdateMode::NextFrame)
///     .with_notify_ancestors(true);
/// assert_eq!(options.initial_position, Some(Anchor::new(50, 50)));
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DragOptions {
    /// Initial top/left placement reported through the style projection.
    pub initial_position: Option<Anchor>,
    /// Clamp target.
    pub bounds: BoundsMode,
    /// Re-render scheduling.
    pub update: UpdateMode,
    /// Pointer acceptance.
    pub pointer_filter: PointerFilter,
    /// Dispatch a [`DragEvent`](crate::DragEvent) to the host on every
    /// accepted move.
    pub notify_ancestors: bool,
}

impl DragOptions {
    /// Default options: viewport bounds, immediate updates, primary pointers
    /// only, no ancestor notification.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial top/left placement.
    #[must_use]
    pub fn with_initial_position(mut self, anchor: Anchor) -> Self {
        self.initial_position = Some(anchor);
        self
    }

    /// Sets the clamp target.
    #[must_use]
    pub fn with_bounds(mut self, bounds: BoundsMode) -> Self {
        self.bounds = bounds;
        self
    }

    /// Sets the re-render scheduling.
    #[must_use]
    pub fn with_update_mode(mut self, update: UpdateMode) -> Self {
        self.update = update;
        self
    }

    /// Sets which pointers may start a drag.
    #[must_use]
    pub fn with_pointer_filter(mut self, filter: PointerFilter) -> Self {
        self.pointer_filter = filter;
        self
    }

    /// Enables or disables [`DragEvent`](crate::DragEvent) dispatch.
    #[must_use]
    pub fn with_notify_ancestors(mut self, notify: bool) -> Self {
        self.notify_ancestors = notify;
        self
    }
}
