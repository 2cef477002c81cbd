// Copyright 2025 the Touchpad Gesture Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinch to zoom, emitted as Ctrl+wheel steps.
//!
//! The first two-contact move takes a baseline distance. Every later move
//! compares against it; once the contacts have spread or closed by more than
//! the touch slop, one zoom step is emitted and the baseline moves to the
//! current distance. Spreading zooms in (`scroll_with_ctrl(0, -1)`), closing
//! zooms out (`scroll_with_ctrl(0, 1)`).

use crate::geometry::two_contact_distance;
use crate::types::{Action, GestureState, Sample};

use super::{HandlerCx, StateHandler};

/// Handler for [`GestureState::PinchZoom`].
#[derive(Copy, Clone, Debug, Default)]
pub struct PinchZoomHandler;

impl StateHandler for PinchZoomHandler {
    fn handle(&self, sample: &Sample, cx: &mut HandlerCx<'_>) -> bool {
        match sample.action {
            Action::Move => on_move(sample, cx),
            Action::PointerUp => {
                if sample.pointer_count <= 1 {
                    finish(cx, "contact lifted");
                }
                true
            }
            Action::Up | Action::Cancel => {
                finish(cx, sample.action.name());
                true
            }
            _ => false,
        }
    }

    fn label(&self) -> &'static str {
        "pinch"
    }
}

fn on_move(sample: &Sample, cx: &mut HandlerCx<'_>) -> bool {
    if sample.pointer_count < 2 {
        return false;
    }
    let current = two_contact_distance(sample);
    let ctx = &mut *cx.context;

    if ctx.initial_pinch_distance == 0.0 {
        ctx.initial_pinch_distance = current;
        ctx.last_pinch_distance = current;
        ctx.pinch_started = true;
        return true;
    }

    let delta = current - ctx.initial_pinch_distance;
    if delta.abs() > cx.config.touch_slop {
        let step = if delta > 0.0 { -1.0 } else { 1.0 };
        cx.sink.scroll_with_ctrl(0.0, step);
        ctx.initial_pinch_distance = current;
    }
    ctx.last_pinch_distance = current;
    true
}

fn finish(cx: &mut HandlerCx<'_>, reason: &str) {
    cx.context.clear_pinch();
    cx.transition(GestureState::Idle, reason);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_util::Harness;
    use crate::sink::PointerCommand;
    use alloc::vec;
    use kurbo::Point;

    fn pinching(baseline: f64) -> Harness {
        let mut h = Harness::new();
        h.context.state = GestureState::PinchZoom;
        h.context.initial_pinch_distance = baseline;
        h
    }

    fn spread(width: f64) -> Sample {
        Sample::new(Action::Move, Point::ZERO, 0)
            .with_pointers(&[Point::new(0.0, 0.0), Point::new(width, 0.0)])
    }

    #[test]
    fn first_move_takes_baseline() {
        let mut h = pinching(0.0);
        assert!(PinchZoomHandler.handle(&spread(50.0), &mut h.cx()));
        assert_eq!(h.context.initial_pinch_distance, 50.0);
        assert!(h.context.pinch_started);
        assert!(h.sink.is_empty());
    }

    #[test]
    fn spreading_and_closing_step_zoom() {
        let mut h = pinching(100.0);
        assert!(PinchZoomHandler.handle(&spread(120.0), &mut h.cx()));
        assert_eq!(h.context.initial_pinch_distance, 120.0);

        // Back to 100: rebased, so this is a 20 px close.
        assert!(PinchZoomHandler.handle(&spread(100.0), &mut h.cx()));
        assert!(PinchZoomHandler.handle(&spread(80.0), &mut h.cx()));
        assert_eq!(
            h.sink,
            vec![
                PointerCommand::ScrollWithCtrl { dx: 0.0, dy: -1.0 },
                PointerCommand::ScrollWithCtrl { dx: 0.0, dy: 1.0 },
                PointerCommand::ScrollWithCtrl { dx: 0.0, dy: 1.0 },
            ]
        );
    }

    #[test]
    fn small_changes_do_not_rebase() {
        let mut h = pinching(100.0);
        assert!(PinchZoomHandler.handle(&spread(105.0), &mut h.cx()));
        assert!(PinchZoomHandler.handle(&spread(108.0), &mut h.cx()));
        assert!(h.sink.is_empty());
        assert_eq!(h.context.initial_pinch_distance, 100.0);
        assert_eq!(h.context.last_pinch_distance, 108.0);

        assert!(PinchZoomHandler.handle(&spread(109.0), &mut h.cx()));
        assert_eq!(
            h.sink,
            vec![PointerCommand::ScrollWithCtrl { dx: 0.0, dy: -1.0 }]
        );
    }

    #[test]
    fn single_contact_move_is_unhandled() {
        let mut h = pinching(100.0);
        let s = Sample::new(Action::Move, Point::new(5.0, 5.0), 0);
        assert!(!PinchZoomHandler.handle(&s, &mut h.cx()));
        assert_eq!(h.context.state, GestureState::PinchZoom);
    }

    #[test]
    fn pointer_up_ends_only_with_one_contact_left() {
        let mut h = pinching(100.0);
        let still_two = Sample::new(Action::PointerUp, Point::ZERO, 0).with_pointer_count(2);
        assert!(PinchZoomHandler.handle(&still_two, &mut h.cx()));
        assert_eq!(h.context.state, GestureState::PinchZoom);

        let last = Sample::new(Action::PointerUp, Point::ZERO, 0);
        assert!(PinchZoomHandler.handle(&last, &mut h.cx()));
        assert_eq!(h.context.state, GestureState::Idle);
        assert_eq!(h.context.initial_pinch_distance, 0.0);
    }

    #[test]
    fn up_and_cancel_clear_baseline() {
        for action in [Action::Up, Action::Cancel] {
            let mut h = pinching(100.0);
            h.context.pinch_started = true;
            let s = Sample::new(action, Point::ZERO, 0);
            assert!(PinchZoomHandler.handle(&s, &mut h.cx()));
            assert_eq!(h.context.state, GestureState::Idle);
            assert!(!h.context.pinch_started);
            assert_eq!(h.context.initial_pinch_distance, 0.0);
        }
    }
}
