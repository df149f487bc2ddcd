// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drag controller: pointer lifecycle in, clamped offset out.
//!
//! ## Lifecycle
//!
//! 1) [`DragController::attach`] with the draggable region, the element that
//!    moves, and [`DragOptions`]. If the draggable region is not rendered yet,
//!    pass `None` and call [`DragController::provide_draggable`] once it is.
//! 2) Forward raw pointer input to [`DragController::pointer_down`],
//!    [`DragController::pointer_move`], [`DragController::pointer_up`] and
//!    [`DragController::pointer_cancel`].
//! 3) Render from [`DragController::current_style`] whenever the host's
//!    [`DragHost::request_update`] is called, or from a
//!    [`subscribe`](DragController::subscribe)d listener.
//! 4) Call [`DragController::host_disconnected`] when the host is torn down.
//!    Dropping the controller does the same.
//!
//! ## States
//!
//! `Idle → Dragging` on an accepted pointer-down; `Dragging → Idle` on
//! pointer-up or cancel. While dragging, further pointer-downs are rejected,
//! so one pointer drives a gesture from start to end. The offset survives the
//! end of a gesture: the element stays where it was dropped.
//!
//! ## Example
//!
//! ```
//! use kurbo::{Point, Rect, Size};
//! use understory_drag::{DragController, DragHost, DragOptions, DragState, ElementRef, Position};
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
//! struct Page {
//!     renders: usize,
//! }
//!
//! impl DragHost<Panel> for Page {
//!     fn request_update(&mut self) {
//!         self.renders += 1;
//!     }
//!
//!     fn viewport_size(&self) -> Size {
//!         Size::new(800.0, 600.0)
//!     }
//! }
//!
//! let panel = Panel(Rect::new(0.0, 0.0, 200.0, 120.0));
//! let mut page = Page { renders: 0 };
//! let mut drag = DragController::new();
//! drag.attach(&mut page, Some(panel.clone()), Some(panel), DragOptions::new())
//!     .unwrap();
//!
//! let id = PointerId(1);
//! assert!(drag.pointer_down(&mut page, Pointer::new(id, Point::new(20.0, 10.0))));
//! drag.pointer_move(&mut page, Pointer::new(id, Point::new(45.5, 30.0)));
//! assert_eq!(drag.current_style().state, DragState::Dragging);
//!
//! drag.pointer_up(&mut page, Pointer::new(id, Point::new(45.5, 30.0)));
//! let style = drag.current_style();
//! assert_eq!(style.state, DragState::Idle);
//! assert_eq!(style.offset, Position::new(25, 20));
//! ```

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use understory_pointer::{Pointer, PointerHandler, PointerTracker};

use crate::bounds::{ElementRef, Geometry, available_extent};
use crate::clamp::{ClampEdge, clamp_offset};
use crate::cursor::CursorSample;
use crate::error::{ConfigurationError, ElementRole};
use crate::frame::FrameToken;
use crate::host::{DragEvent, DragHost};
use crate::options::{BoundsMode, DragOptions, UpdateMode};
use crate::types::{Anchor, DragState, DragStyle, Position};

/// How a controller is connected to its draggable region.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Attachment {
    /// Not attached, or detached.
    #[default]
    Detached,
    /// Attached, waiting for the draggable region to be provided.
    Deferred,
    /// Attached, but the host cannot deliver pointer events. The element is
    /// static.
    Unsupported,
    /// Listening for pointer input.
    Attached,
}

/// Why a pointer move changed nothing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// No accepted pointer-down precedes the move.
    NotDragging,
    /// The draggable, container or bounding element could not be measured.
    /// The cursor baseline is kept, so the movement is applied by the next
    /// move that can be measured.
    MissingElement,
}

/// Result of [`DragController::pointer_move`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// A new offset was published.
    Moved {
        /// The published offset.
        offset: Position,
        /// The boundary that was corrected, if any.
        edge: Option<ClampEdge>,
    },
    /// The cursor stayed on the same whole pixel; nothing was recomputed.
    Unchanged,
    /// The move was ignored.
    Skipped(SkipReason),
}

/// Handle returned by [`DragController::subscribe`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u32);

type Listener = Box<dyn FnMut(&DragStyle)>;

/// Converts pointer input into a bounds-clamped offset for one draggable
/// element.
///
/// `E` is the host's element handle type. Each draggable host owns its own
/// controller; controllers share nothing.
pub struct DragController<E> {
    core: Core<E>,
    tracker: Option<PointerTracker>,
}

struct Core<E> {
    options: DragOptions,
    attachment: Attachment,
    state: DragState,
    offset: Position,
    anchor: Option<Anchor>,
    cursor: CursorSample,
    draggable: Option<E>,
    container: Option<E>,
    bounds_element: Option<E>,
    generation: u32,
    frame_pending: bool,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u32,
}

impl<E> DragController<E> {
    /// Creates a detached controller at offset zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            core: Core {
                options: DragOptions::default(),
                attachment: Attachment::Detached,
                state: DragState::Idle,
                offset: Position::ZERO,
                anchor: None,
                cursor: CursorSample::default(),
                draggable: None,
                container: None,
                bounds_element: None,
                generation: 0,
                frame_pending: false,
                listeners: Vec::new(),
                next_listener: 0,
            },
            tracker: None,
        }
    }

    /// Releases the pointer subscription.
    ///
    /// Any gesture in progress is abandoned and the state returns to
    /// [`DragState::Idle`]; the offset is kept. Frame tokens issued before
    /// this call become stale. Returns `false` if the controller was not
    /// attached. Safe to call any number of times.
    pub fn detach(&mut self) -> bool {
        if self.core.attachment == Attachment::Detached {
            return false;
        }
        let captured = self.tracker.take().map_or(0, |mut tracker| tracker.stop());
        let core = &mut self.core;
        core.attachment = Attachment::Detached;
        core.generation = core.generation.wrapping_add(1);
        core.frame_pending = false;
        core.state = DragState::Idle;
        core.cursor.end();
        core.draggable = None;
        tracing::debug!(captured, "drag controller detached");
        true
    }

    /// Host teardown notification. Equivalent to [`detach`](Self::detach).
    pub fn host_disconnected(&mut self) {
        self.detach();
    }

    /// The style/position descriptor the presentation layer applies.
    #[must_use]
    pub fn current_style(&self) -> DragStyle {
        self.core.style()
    }

    /// Current gesture state.
    #[must_use]
    pub fn state(&self) -> DragState {
        self.core.state
    }

    /// Current offset.
    #[must_use]
    pub fn offset(&self) -> Position {
        self.core.offset
    }

    /// Current attachment.
    #[must_use]
    pub fn attachment(&self) -> Attachment {
        self.core.attachment
    }

    /// Options from the last [`attach`](Self::attach).
    #[must_use]
    pub fn options(&self) -> &DragOptions {
        &self.core.options
    }

    /// Replaces the initial top/left placement.
    ///
    /// The host picks the change up on its next render.
    pub fn set_initial_position(&mut self, anchor: Anchor) {
        self.core.anchor = Some(anchor);
    }

    /// Registers `listener` to run on every re-render with the new style.
    pub fn subscribe(&mut self, listener: impl FnMut(&DragStyle) + 'static) -> ListenerId {
        let id = ListenerId(self.core.next_listener);
        self.core.next_listener = self.core.next_listener.wrapping_add(1);
        self.core.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.core.listeners.len();
        self.core.listeners.retain(|(listener, _)| *listener != id);
        self.core.listeners.len() != before
    }

    /// Runs a re-render scheduled with [`DragHost::request_frame`].
    ///
    /// Returns `false` and does nothing if `token` is stale: issued before
    /// the last detach or attach, or already run.
    pub fn run_frame<H: DragHost<E>>(&mut self, host: &mut H, token: FrameToken) -> bool {
        if token.generation() != self.core.generation || !self.core.frame_pending {
            tracing::debug!("dropping stale frame");
            return false;
        }
        self.core.frame_pending = false;
        self.core.render(host);
        true
    }
}

impl<E: ElementRef> DragController<E> {
    /// Attaches to `draggable`, moving `container`.
    ///
    /// A previous attachment is released first. With `draggable` absent the
    /// controller waits for [`provide_draggable`](Self::provide_draggable).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] if either reference is not an element.
    /// The controller is left untouched in that case.
    pub fn attach<H: DragHost<E>>(
        &mut self,
        host: &mut H,
        draggable: Option<E>,
        container: Option<E>,
        options: DragOptions,
    ) -> Result<Attachment, ConfigurationError> {
        check_element(draggable.as_ref(), ElementRole::Draggable)?;
        check_element(container.as_ref(), ElementRole::Container)?;

        self.detach();
        let core = &mut self.core;
        core.options = options;
        if let Some(anchor) = options.initial_position {
            core.anchor = Some(anchor);
        }
        core.container = container;
        core.generation = core.generation.wrapping_add(1);

        match draggable {
            Some(draggable) => Ok(self.bind(host, draggable)),
            None => {
                self.core.attachment = Attachment::Deferred;
                tracing::debug!("draggable element not rendered yet, deferring attach");
                Ok(Attachment::Deferred)
            }
        }
    }

    /// Completes a deferred attach.
    ///
    /// Does nothing unless the controller is [`Attachment::Deferred`] and
    /// `draggable` is present.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] if `draggable` is not an element.
    pub fn provide_draggable<H: DragHost<E>>(
        &mut self,
        host: &mut H,
        draggable: Option<E>,
    ) -> Result<Attachment, ConfigurationError> {
        if self.core.attachment != Attachment::Deferred {
            return Ok(self.core.attachment);
        }
        let Some(draggable) = draggable else {
            return Ok(Attachment::Deferred);
        };
        check_element(Some(&draggable), ElementRole::Draggable)?;
        Ok(self.bind(host, draggable))
    }

    /// Replaces the element that moves. Read again on every move.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] if `container` is not an element.
    pub fn set_container(&mut self, container: Option<E>) -> Result<(), ConfigurationError> {
        check_element(container.as_ref(), ElementRole::Container)?;
        self.core.container = container;
        Ok(())
    }

    /// Sets the bounding element used with [`BoundsMode::Element`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] if `bounds` is not an element.
    pub fn set_bounds_element(&mut self, bounds: Option<E>) -> Result<(), ConfigurationError> {
        check_element(bounds.as_ref(), ElementRole::Bounds)?;
        self.core.bounds_element = bounds;
        Ok(())
    }

    /// Forwards a pointer-down. Returns `true` if it started a drag.
    pub fn pointer_down<H: DragHost<E>>(&mut self, host: &mut H, pointer: Pointer) -> bool {
        let Some(tracker) = self.tracker.as_mut() else {
            return false;
        };
        let mut binding = Binding::new(&mut self.core, host);
        tracker.down(&mut binding, pointer, &())
    }

    /// Forwards a pointer-move.
    pub fn pointer_move<H: DragHost<E>>(&mut self, host: &mut H, pointer: Pointer) -> MoveOutcome {
        let not_dragging = MoveOutcome::Skipped(SkipReason::NotDragging);
        let Some(tracker) = self.tracker.as_mut() else {
            return not_dragging;
        };
        let mut binding = Binding::new(&mut self.core, host);
        tracker.moved(&mut binding, pointer, &());
        binding.outcome.unwrap_or(not_dragging)
    }

    /// Forwards a pointer-up. Returns `true` if it ended a drag.
    pub fn pointer_up<H: DragHost<E>>(&mut self, host: &mut H, pointer: Pointer) -> bool {
        let Some(tracker) = self.tracker.as_mut() else {
            return false;
        };
        let mut binding = Binding::new(&mut self.core, host);
        tracker.up(&mut binding, pointer, &())
    }

    /// Forwards a pointer-cancel. Returns `true` if it ended a drag.
    pub fn pointer_cancel<H: DragHost<E>>(&mut self, host: &mut H, pointer: Pointer) -> bool {
        let Some(tracker) = self.tracker.as_mut() else {
            return false;
        };
        let mut binding = Binding::new(&mut self.core, host);
        tracker.cancel(&mut binding, pointer, &())
    }

    fn bind<H: DragHost<E>>(&mut self, host: &mut H, draggable: E) -> Attachment {
        self.core.draggable = Some(draggable);
        let attachment = if host.supports_pointer_events() {
            self.tracker = Some(PointerTracker::new());
            Attachment::Attached
        } else {
            Attachment::Unsupported
        };
        self.core.attachment = attachment;
        tracing::debug!(?attachment, "drag controller attached");
        self.core.render(host);
        attachment
    }
}

impl<E> Default for DragController<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Drop for DragController<E> {
    fn drop(&mut self) {
        self.detach();
    }
}

impl<E: fmt::Debug> fmt::Debug for DragController<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragController")
            .field("attachment", &self.core.attachment)
            .field("state", &self.core.state)
            .field("offset", &self.core.offset)
            .field("anchor", &self.core.anchor)
            .field("cursor", &self.core.cursor)
            .field("draggable", &self.core.draggable)
            .field("container", &self.core.container)
            .field("tracker", &self.tracker)
            .finish_non_exhaustive()
    }
}

fn check_element<E: ElementRef>(
    element: Option<&E>,
    role: ElementRole,
) -> Result<(), ConfigurationError> {
    match element {
        Some(element) if !element.is_element() => {
            tracing::warn!(%role, "drag target is not an element");
            Err(ConfigurationError { role })
        }
        _ => Ok(()),
    }
}

impl<E> Core<E> {
    fn style(&self) -> DragStyle {
        DragStyle {
            state: self.state,
            offset: self.offset,
            anchor: self.anchor,
            cursor: (self.attachment == Attachment::Attached).then_some(self.state.cursor()),
        }
    }

    fn render<H: DragHost<E>>(&mut self, host: &mut H) {
        let style = self.style();
        for (_, listener) in &mut self.listeners {
            listener(&style);
        }
        host.request_update();
    }

    fn publish<H: DragHost<E>>(&mut self, host: &mut H) {
        match self.options.update {
            UpdateMode::Immediate => self.render(host),
            UpdateMode::NextFrame => {
                if self.frame_pending {
                    return;
                }
                if host.request_frame(FrameToken::new(self.generation)) {
                    self.frame_pending = true;
                } else {
                    tracing::trace!("host cannot schedule frames, rendering now");
                    self.render(host);
                }
            }
        }
    }
}

impl<E: ElementRef> Core<E> {
    fn on_pointer_start<H: DragHost<E>>(&mut self, host: &mut H, pointer: &Pointer) -> bool {
        if self.state.is_dragging() {
            return false;
        }
        if !self.options.pointer_filter.accepts(pointer) {
            tracing::trace!(pointer = ?pointer.id, "pointer rejected by filter");
            return false;
        }
        self.cursor.start(pointer.page);
        self.state = DragState::Dragging;
        tracing::debug!(pointer = ?pointer.id, "drag started");
        self.publish(host);
        true
    }

    fn on_pointer_move<H: DragHost<E>>(&mut self, host: &mut H, current: &[Pointer]) -> MoveOutcome {
        if !self.state.is_dragging() {
            return MoveOutcome::Skipped(SkipReason::NotDragging);
        }
        let Some(pointer) = current.first() else {
            return MoveOutcome::Skipped(SkipReason::NotDragging);
        };
        let Some(delta) = self.cursor.delta_to(pointer.page) else {
            return MoveOutcome::Skipped(SkipReason::NotDragging);
        };
        if delta == Position::ZERO {
            return MoveOutcome::Unchanged;
        }
        let Some(geometry) = self.geometry(host) else {
            tracing::trace!("drag element unavailable, skipping move");
            return MoveOutcome::Skipped(SkipReason::MissingElement);
        };

        let clamped = clamp_offset(self.offset, delta, &geometry);
        self.cursor.advance_to(pointer.page);
        self.offset = clamped.offset;
        tracing::trace!(
            x = clamped.offset.x,
            y = clamped.offset.y,
            edge = ?clamped.edge,
            "drag moved"
        );

        if self.options.notify_ancestors
            && let (Some(container), Some(draggable)) = (&self.container, &self.draggable)
        {
            host.dispatch_drag_event(&DragEvent::new(
                pointer,
                container,
                draggable,
                clamped.offset,
            ));
        }
        self.publish(host);

        MoveOutcome::Moved {
            offset: clamped.offset,
            edge: clamped.edge,
        }
    }

    fn on_pointer_end<H: DragHost<E>>(&mut self, host: &mut H) {
        if !self.state.is_dragging() {
            return;
        }
        self.state = DragState::Idle;
        self.cursor.end();
        tracing::debug!(x = self.offset.x, y = self.offset.y, "drag ended");
        self.publish(host);
    }

    fn geometry<H: DragHost<E>>(&self, host: &H) -> Option<Geometry> {
        let handle = self.draggable.as_ref()?.bounding_rect()?;
        let panel = self.container.as_ref()?.bounding_rect()?;
        let bounds = match self.options.bounds {
            BoundsMode::Viewport => {
                available_extent(host.viewport_size(), host.screen_available_size()).to_rect()
            }
            BoundsMode::Element => self.bounds_element.as_ref()?.bounding_rect()?,
        };
        Some(Geometry {
            handle,
            panel,
            bounds,
        })
    }
}

/// Routes tracker callbacks into the controller state with the host in hand.
struct Binding<'a, E, H> {
    core: &'a mut Core<E>,
    host: &'a mut H,
    outcome: Option<MoveOutcome>,
}

impl<'a, E, H> Binding<'a, E, H> {
    fn new(core: &'a mut Core<E>, host: &'a mut H) -> Self {
        Self {
            core,
            host,
            outcome: None,
        }
    }
}

impl<E: ElementRef, H: DragHost<E>> PointerHandler for Binding<'_, E, H> {
    fn start(&mut self, pointer: &Pointer, _event: &()) -> bool {
        self.core.on_pointer_start(self.host, pointer)
    }

    fn moved(&mut self, _previous: &[Pointer], current: &[Pointer], _event: &()) {
        self.outcome = Some(self.core.on_pointer_move(self.host, current));
    }

    fn end(&mut self, _pointer: &Pointer, _event: &()) {
        self.core.on_pointer_end(self.host);
    }
}
