// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared fixtures for controller integration tests: a page host and element
//! handles whose rectangles follow the rendered offset.

#![allow(
    dead_code,
    missing_docs,
    reason = "Integration-test helper module; not every test file uses every helper."
)]

use std::cell::Cell;
use std::rc::Rc;

use kurbo::{Point, Rect, Size};
use understory_drag::{
    DragController, DragEvent, DragHost, DragOptions, ElementRef, FrameQueue, FrameToken,
    MoveOutcome, Position,
};
use understory_pointer::{Pointer, PointerId};

pub const MOUSE: PointerId = PointerId(1);

/// An element whose bounding rect is its layout rect moved by the last
/// rendered offset.
#[derive(Clone, Debug)]
pub struct Node {
    layout: Rect,
    rendered: Rc<Cell<Position>>,
    live: Rc<Cell<bool>>,
    element: bool,
}

impl Node {
    pub fn new(layout: Rect, rendered: &Rc<Cell<Position>>) -> Self {
        Self {
            layout,
            rendered: rendered.clone(),
            live: Rc::new(Cell::new(true)),
            element: true,
        }
    }

    /// A fixed element that never moves.
    pub fn fixed(layout: Rect) -> Self {
        Self::new(layout, &Rc::new(Cell::new(Position::ZERO)))
    }

    /// A node that is not an element (think text node).
    pub fn text() -> Self {
        Self {
            element: false,
            ..Self::fixed(Rect::ZERO)
        }
    }

    /// Take the node out of the document. Clones observe the removal.
    pub fn remove(&self) {
        self.live.set(false);
    }

    pub fn restore(&self) {
        self.live.set(true);
    }
}

impl ElementRef for Node {
    fn is_element(&self) -> bool {
        self.element
    }

    fn bounding_rect(&self) -> Option<Rect> {
        self.live
            .get()
            .then(|| self.layout + self.rendered.get().to_vec2())
    }
}

#[derive(Debug)]
pub struct Page {
    pub viewport: Size,
    pub screen: Option<Size>,
    pub pointer_events: bool,
    /// Whether the page has a frame callback to run tokens from.
    pub frame_callbacks: bool,
    pub updates: usize,
    pub frames: FrameQueue,
    pub events: Vec<(Position, bool, bool)>,
}

impl Page {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            viewport: Size::new(width, height),
            screen: None,
            pointer_events: true,
            frame_callbacks: true,
            updates: 0,
            frames: FrameQueue::new(),
            events: Vec::new(),
        }
    }
}

impl DragHost<Node> for Page {
    fn request_update(&mut self) {
        self.updates += 1;
    }

    fn viewport_size(&self) -> Size {
        self.viewport
    }

    fn screen_available_size(&self) -> Option<Size> {
        self.screen
    }

    fn supports_pointer_events(&self) -> bool {
        self.pointer_events
    }

    fn request_frame(&mut self, token: FrameToken) -> bool {
        if self.frame_callbacks {
            self.frames.push(token);
        }
        self.frame_callbacks
    }

    fn dispatch_drag_event(&mut self, event: &DragEvent<'_, Node>) {
        self.events
            .push((event.offset, event.bubbles, event.composed));
    }
}

/// A floating window: a panel with a title-bar handle along its top edge.
pub struct Window {
    pub drag: DragController<Node>,
    pub page: Page,
    pub panel: Node,
    pub handle: Node,
    pub rendered: Rc<Cell<Position>>,
}

impl Window {
    pub fn new(panel: Rect, handle_height: f64, page: Page) -> Self {
        Self::with_options(panel, handle_height, page, DragOptions::new())
    }

    pub fn with_options(panel: Rect, handle_height: f64, mut page: Page, options: DragOptions) -> Self {
        let rendered = Rc::new(Cell::new(Position::ZERO));
        let handle_rect = Rect::new(panel.x0, panel.y0, panel.x1, panel.y0 + handle_height);
        let panel = Node::new(panel, &rendered);
        let handle = Node::new(handle_rect, &rendered);

        let mut drag = DragController::new();
        let sink = rendered.clone();
        drag.subscribe(move |style| sink.set(style.offset));
        drag.attach(&mut page, Some(handle.clone()), Some(panel.clone()), options)
            .expect("fixture elements are elements");

        Self {
            drag,
            page,
            panel,
            handle,
            rendered,
        }
    }

    pub fn press(&mut self, x: f64, y: f64) -> bool {
        self.drag
            .pointer_down(&mut self.page, Pointer::new(MOUSE, Point::new(x, y)))
    }

    pub fn drag_to(&mut self, x: f64, y: f64) -> MoveOutcome {
        self.drag
            .pointer_move(&mut self.page, Pointer::new(MOUSE, Point::new(x, y)))
    }

    pub fn release(&mut self, x: f64, y: f64) -> bool {
        self.drag
            .pointer_up(&mut self.page, Pointer::new(MOUSE, Point::new(x, y)))
    }

    /// Run every queued frame token, returning how many were live.
    pub fn run_frames(&mut self) -> usize {
        let tokens = self.page.frames.take();
        tokens
            .into_iter()
            .filter(|token| self.drag.run_frame(&mut self.page, *token))
            .count()
    }
}
