// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Floating window inside a workspace area.
//!
//! A window is dragged by its title bar and kept inside a fixed workspace
//! element instead of the viewport. Re-renders are batched per frame: the
//! host queues the frame tokens it is handed and runs them once per tick,
//! however many pointer moves arrived in between.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_demos --example floating_window`

use std::cell::Cell;
use std::rc::Rc;

use kurbo::{Point, Rect, Size};
use tracing_subscriber::EnvFilter;
use understory_drag::{
    BoundsMode, DragController, DragEvent, DragHost, DragOptions, ElementRef, FrameQueue,
    FrameToken, Position, UpdateMode,
};
use understory_pointer::{Pointer, PointerId};

#[derive(Clone, Debug)]
struct Element {
    name: &'static str,
    layout: Rect,
    painted: Option<Rc<Cell<Position>>>,
}

impl Element {
    fn fixed(name: &'static str, layout: Rect) -> Self {
        Self {
            name,
            layout,
            painted: None,
        }
    }

    fn moving(name: &'static str, layout: Rect, painted: &Rc<Cell<Position>>) -> Self {
        Self {
            name,
            layout,
            painted: Some(painted.clone()),
        }
    }
}

impl ElementRef for Element {
    fn bounding_rect(&self) -> Option<Rect> {
        let offset = self.painted.as_ref().map_or(Position::ZERO, |p| p.get());
        Some(self.layout + offset.to_vec2())
    }
}

#[derive(Default)]
struct Page {
    frames: FrameQueue,
    paints: u32,
}

impl DragHost<Element> for Page {
    fn request_update(&mut self) {
        self.paints += 1;
    }

    fn viewport_size(&self) -> Size {
        Size::new(1280.0, 800.0)
    }

    fn request_frame(&mut self, token: FrameToken) -> bool {
        self.frames.push(token);
        true
    }

    fn dispatch_drag_event(&mut self, event: &DragEvent<'_, Element>) {
        tracing::info!(
            container = event.container.name,
            handle = event.draggable.name,
            offset = %event.offset,
            "drag event"
        );
    }
}

fn tick(drag: &mut DragController<Element>, page: &mut Page) {
    for token in page.frames.take() {
        drag.run_frame(page, token);
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let painted = Rc::new(Cell::new(Position::ZERO));
    let window = Element::moving("window", Rect::new(0.0, 0.0, 320.0, 240.0), &painted);
    let title_bar = Element::moving("title bar", Rect::new(0.0, 0.0, 320.0, 28.0), &painted);
    let workspace = Element::fixed("workspace", Rect::new(0.0, 0.0, 800.0, 600.0));

    let mut page = Page::default();
    let mut drag = DragController::new();
    let sink = painted.clone();
    drag.subscribe(move |style| sink.set(style.offset));

    let options = DragOptions::new()
        .with_bounds(BoundsMode::Element)
        .with_update_mode(UpdateMode::NextFrame)
        .with_notify_ancestors(true);
    let attached = drag
        .set_bounds_element(Some(workspace))
        .and_then(|()| drag.attach(&mut page, Some(title_bar), Some(window), options));
    match attached {
        Ok(attachment) => println!("attachment: {attachment:?}"),
        Err(err) => {
            eprintln!("cannot attach: {err}");
            return;
        }
    }

    let mouse = PointerId(1);
    drag.pointer_down(&mut page, Pointer::new(mouse, Point::new(160.0, 14.0)));

    // Several moves per frame; each tick paints once.
    let frames = [
        [(200.0, 40.0), (260.0, 90.0), (300.0, 120.0)],
        [(500.0, 300.0), (700.0, 400.0), (900.0, 500.0)],
        [(900.0, 700.0), (905.0, 705.0), (910.0, 720.0)],
    ];
    for moves in frames {
        for (x, y) in moves {
            drag.pointer_move(&mut page, Pointer::new(mouse, Point::new(x, y)));
        }
        let before = page.paints;
        tick(&mut drag, &mut page);
        println!(
            "tick: translate {}, painted {} time(s)",
            painted.get(),
            page.paints - before
        );
    }

    drag.pointer_up(&mut page, Pointer::new(mouse, Point::new(910.0, 720.0)));
    tick(&mut drag, &mut page);
    println!("dropped at {}", drag.current_style().offset);

    // Frames queued before a detach are stale and never paint.
    drag.pointer_down(&mut page, Pointer::new(mouse, Point::new(500.0, 500.0)));
    drag.detach();
    let stale = page.frames.take();
    let ran = stale.iter().filter(|token| drag.run_frame(&mut page, **token)).count();
    println!("after detach: {} queued, {ran} ran", stale.len());
}
