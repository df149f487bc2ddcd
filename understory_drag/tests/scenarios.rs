// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag and clamp behavior of `understory_drag` driven through a fake page.
//!
//! Element rectangles follow the offset the controller last rendered, the way
//! a real presentation layer applies the published transform.

use kurbo::{Rect, Size};
use understory_drag::{
    Anchor, BoundsMode, ClampEdge, DragOptions, DragState, ElementRef, MoveOutcome, Position,
    SkipReason,
};

mod common;

use common::{Node, Page, Window};

#[test]
fn in_bounds_moves_accumulate_exactly() {
    let mut w = Window::new(Rect::new(0.0, 0.0, 200.0, 150.0), 24.0, Page::new(1024.0, 768.0));
    assert!(w.press(150.0, 110.0));

    let path = [(160, 115), (171, 120), (165, 140), (200, 130)];
    let mut expected = Position::ZERO;
    let mut last = (150, 110);
    for (x, y) in path {
        expected = expected + Position::new(x - last.0, y - last.1);
        last = (x, y);
        assert_eq!(
            w.drag_to(f64::from(x), f64::from(y)),
            MoveOutcome::Moved {
                offset: expected,
                edge: None
            }
        );
    }

    assert_eq!(w.drag.offset(), Position::new(50, 20));
    assert_eq!(w.rendered.get(), Position::new(50, 20));
}

#[test]
fn top_is_corrected_before_left() {
    let mut w = Window::new(Rect::new(0.0, 0.0, 10.0, 10.0), 10.0, Page::new(500.0, 500.0));
    w.press(100.0, 100.0);
    w.drag_to(105.0, 105.0);
    assert_eq!(w.drag.offset(), Position::new(5, 5));

    let outcome = w.drag_to(85.0, 85.0);
    assert_eq!(
        outcome,
        MoveOutcome::Moved {
            offset: Position::new(-15, 0),
            edge: Some(ClampEdge::Top)
        }
    );
}

#[test]
fn two_axis_violation_leaves_left_unclamped() {
    let mut w = Window::new(Rect::new(0.0, 0.0, 50.0, 50.0), 20.0, Page::new(500.0, 500.0));
    w.press(100.0, 100.0);
    w.drag_to(110.0, 110.0);
    assert_eq!(w.drag.offset(), Position::new(10, 10));

    w.drag_to(80.0, 80.0);
    assert_eq!(w.drag.offset(), Position::new(-20, 0));
}

#[test]
fn right_edge_clamps_to_available_width_after_reflow() {
    let mut w = Window::new(Rect::new(0.0, 0.0, 100.0, 40.0), 20.0, Page::new(1000.0, 800.0));
    w.press(50.0, 10.0);
    w.drag_to(500.0, 10.0);
    assert_eq!(w.drag.offset(), Position::new(450, 0));

    // The viewport shrinks mid-drag; bounds are measured again on the next move.
    w.page.viewport = Size::new(500.0, 800.0);
    let outcome = w.drag_to(520.0, 10.0);
    assert_eq!(
        outcome,
        MoveOutcome::Moved {
            offset: Position::new(400, 0),
            edge: Some(ClampEdge::Right)
        }
    );
}

#[test]
fn bottom_edge_keeps_handle_on_screen() {
    let mut w = Window::new(Rect::new(0.0, 0.0, 200.0, 300.0), 30.0, Page::new(800.0, 400.0));
    w.press(100.0, 15.0);

    let outcome = w.drag_to(100.0, 415.0);
    assert_eq!(
        outcome,
        MoveOutcome::Moved {
            offset: Position::new(0, 370),
            edge: Some(ClampEdge::Bottom)
        }
    );
    let handle = w.handle.bounding_rect().expect("handle is live");
    assert_eq!(handle.y1, 400.0);
}

#[test]
fn screen_area_narrower_than_viewport_wins() {
    let mut page = Page::new(1200.0, 800.0);
    page.screen = Some(Size::new(1000.0, 700.0));
    let mut w = Window::new(Rect::new(0.0, 0.0, 100.0, 40.0), 20.0, page);
    w.press(10.0, 10.0);

    w.drag_to(960.0, 10.0);
    assert_eq!(w.drag.offset(), Position::new(900, 0));
}

#[test]
fn fractional_coordinates_are_floored() {
    let mut a = Window::new(Rect::new(0.0, 0.0, 100.0, 40.0), 20.0, Page::new(800.0, 600.0));
    let mut b = Window::new(Rect::new(0.0, 0.0, 100.0, 40.0), 20.0, Page::new(800.0, 600.0));

    a.press(10.9, 10.9);
    b.press(10.0, 10.0);
    a.drag_to(30.2, 20.99);
    b.drag_to(30.0, 20.0);

    assert_eq!(a.drag.offset(), Position::new(20, 10));
    assert_eq!(a.drag.offset(), b.drag.offset());
}

#[test]
fn same_pixel_move_does_not_republish() {
    let mut w = Window::new(Rect::new(0.0, 0.0, 100.0, 40.0), 20.0, Page::new(800.0, 600.0));
    w.press(10.0, 10.0);
    let updates = w.page.updates;

    assert_eq!(w.drag_to(10.9, 10.4), MoveOutcome::Unchanged);
    assert_eq!(w.page.updates, updates);
    assert_eq!(w.drag.offset(), Position::ZERO);
}

#[test]
fn moves_before_press_are_ignored() {
    let mut w = Window::new(Rect::new(0.0, 0.0, 100.0, 40.0), 20.0, Page::new(800.0, 600.0));
    let updates = w.page.updates;

    assert_eq!(
        w.drag_to(40.0, 40.0),
        MoveOutcome::Skipped(SkipReason::NotDragging)
    );
    assert!(!w.release(40.0, 40.0));

    assert_eq!(w.drag.state(), DragState::Idle);
    assert_eq!(w.drag.offset(), Position::ZERO);
    assert_eq!(w.page.updates, updates);
}

#[test]
fn offset_survives_release_and_next_drag_continues_from_it() {
    let mut w = Window::new(Rect::new(0.0, 0.0, 100.0, 40.0), 20.0, Page::new(800.0, 600.0));
    w.press(10.0, 10.0);
    w.drag_to(40.0, 30.0);
    assert!(w.release(40.0, 30.0));
    assert_eq!(w.drag.state(), DragState::Idle);
    assert_eq!(w.drag.offset(), Position::new(30, 20));

    // Grab the handle somewhere else; there is no jump to the cursor.
    w.press(70.0, 35.0);
    w.drag_to(75.0, 36.0);
    assert_eq!(w.drag.offset(), Position::new(35, 21));
}

#[test]
fn removed_element_skips_move_and_keeps_pending_delta() {
    let mut w = Window::new(Rect::new(0.0, 0.0, 100.0, 40.0), 20.0, Page::new(800.0, 600.0));
    w.press(10.0, 10.0);
    w.drag_to(20.0, 20.0);

    w.panel.remove();
    assert_eq!(
        w.drag_to(30.0, 30.0),
        MoveOutcome::Skipped(SkipReason::MissingElement)
    );
    assert_eq!(w.drag.state(), DragState::Dragging);
    assert_eq!(w.drag.offset(), Position::new(10, 10));

    w.panel.restore();
    w.drag_to(35.0, 35.0);
    assert_eq!(w.drag.offset(), Position::new(25, 25));
}

#[test]
fn panel_laid_out_away_from_origin_stops_at_right_edge() {
    let mut w = Window::new(
        Rect::new(100.0, 100.0, 220.0, 180.0),
        20.0,
        Page::new(800.0, 600.0),
    );
    w.press(150.0, 110.0);

    assert_eq!(
        w.drag_to(900.0, 110.0),
        MoveOutcome::Moved {
            offset: Position::new(580, 0),
            edge: Some(ClampEdge::Right)
        }
    );
    let panel = w.panel.bounding_rect().expect("panel is live");
    assert_eq!(panel.x1, 800.0);
}

#[test]
fn anchored_panel_keeps_handle_above_bottom_edge() {
    let options = DragOptions::new().with_initial_position(Anchor::new(50, 50));
    // The host lays the panel out at its anchor.
    let mut w = Window::with_options(
        Rect::new(50.0, 50.0, 170.0, 130.0),
        20.0,
        Page::new(800.0, 600.0),
        options,
    );
    w.press(100.0, 60.0);

    assert_eq!(
        w.drag_to(100.0, 700.0),
        MoveOutcome::Moved {
            offset: Position::new(0, 530),
            edge: Some(ClampEdge::Bottom)
        }
    );
    let handle = w.handle.bounding_rect().expect("handle is live");
    assert_eq!(handle.y1, 600.0);
    assert_eq!(w.drag.current_style().top_left(), Some(Anchor::new(580, 50)));
}

#[test]
fn bounding_element_away_from_origin_limits_top_and_left() {
    let options = DragOptions::new().with_bounds(BoundsMode::Element);
    let mut w = Window::with_options(
        Rect::new(150.0, 150.0, 250.0, 200.0),
        20.0,
        Page::new(800.0, 600.0),
        options,
    );
    w.drag
        .set_bounds_element(Some(Node::fixed(Rect::new(100.0, 100.0, 500.0, 400.0))))
        .expect("fixed node is an element");
    w.press(160.0, 160.0);

    assert_eq!(
        w.drag_to(60.0, 160.0),
        MoveOutcome::Moved {
            offset: Position::new(-50, 0),
            edge: Some(ClampEdge::Left)
        }
    );
    assert_eq!(
        w.drag_to(60.0, 100.0),
        MoveOutcome::Moved {
            offset: Position::new(-50, -50),
            edge: Some(ClampEdge::Top)
        }
    );
    let panel = w.panel.bounding_rect().expect("panel is live");
    assert_eq!((panel.x0, panel.y0), (100.0, 100.0));
}
