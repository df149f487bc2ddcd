// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draggable toolbar basics.
//!
//! Drive a toolbar around a small page with a scripted pointer and print the
//! style the presentation layer would apply after each step. The toolbar is
//! its own handle, so the whole bar can be grabbed.
//!
//! Run:
//! - `RUST_LOG=understory_drag=trace cargo run -p understory_demos --example draggable_toolbar`

use std::cell::Cell;
use std::rc::Rc;

use kurbo::{Point, Rect, Size};
use tracing_subscriber::EnvFilter;
use understory_drag::{
    Anchor, DragController, DragHost, DragOptions, ElementRef, MoveOutcome, Position,
};
use understory_pointer::{Pointer, PointerId};

/// The toolbar as laid out, moved by whatever offset was last painted.
#[derive(Clone)]
struct Toolbar {
    layout: Rect,
    painted: Rc<Cell<Position>>,
}

impl ElementRef for Toolbar {
    fn bounding_rect(&self) -> Option<Rect> {
        Some(self.layout + self.painted.get().to_vec2())
    }
}

struct Page {
    size: Size,
    repaints: u32,
}

impl DragHost<Toolbar> for Page {
    fn request_update(&mut self) {
        self.repaints += 1;
    }

    fn viewport_size(&self) -> Size {
        self.size
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let painted = Rc::new(Cell::new(Position::ZERO));
    // Laid out at its initial anchor.
    let toolbar = Toolbar {
        layout: Rect::new(20.0, 20.0, 260.0, 56.0),
        painted: painted.clone(),
    };
    let mut page = Page {
        size: Size::new(640.0, 480.0),
        repaints: 0,
    };

    let mut drag = DragController::new();
    let sink = painted.clone();
    drag.subscribe(move |style| sink.set(style.offset));

    let options = DragOptions::new().with_initial_position(Anchor::new(20, 20));
    if let Err(err) = drag.attach(&mut page, Some(toolbar.clone()), Some(toolbar), options) {
        eprintln!("cannot attach: {err}");
        return;
    }

    let style = drag.current_style();
    println!(
        "idle: anchor {:?}, cursor {:?}, translate {}",
        style.anchor, style.cursor, style.offset
    );

    let mouse = PointerId(1);
    drag.pointer_down(&mut page, Pointer::new(mouse, Point::new(30.0, 30.0)));
    println!("pressed: {}", drag.state());

    // Right, then far past the top-left corner, then past the right edge.
    let path = [(90.0, 70.0), (90.5, 70.9), (-200.0, 40.0), (-200.0, -300.0), (900.0, 10.0)];
    for (x, y) in path {
        let outcome = drag.pointer_move(&mut page, Pointer::new(mouse, Point::new(x, y)));
        match outcome {
            MoveOutcome::Moved { offset, edge } => {
                println!("move to ({x}, {y}): translate {offset}, corrected {edge:?}");
            }
            MoveOutcome::Unchanged => println!("move to ({x}, {y}): same pixel"),
            MoveOutcome::Skipped(reason) => println!("move to ({x}, {y}): skipped {reason:?}"),
        }
    }

    drag.pointer_up(&mut page, Pointer::new(mouse, Point::new(900.0, 10.0)));
    let style = drag.current_style();
    println!(
        "released: {}, cursor {:?}, translate {}, repaints {}",
        style.state, style.cursor, style.offset, page.repaints
    );

    drag.detach();
}
