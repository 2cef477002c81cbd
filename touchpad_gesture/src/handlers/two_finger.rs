// Copyright 2025 the Touchpad Gesture Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-finger tap (right click) versus two-finger scroll.
//!
//! ## Tap window
//!
//! A two-finger contact opens a 100 ms tap window. Releasing in place while
//! the window is open is a right click. The window only decides whether a
//! release counts as a tap: a move that arrives after it closed still becomes
//! a scroll.
//!
//! ## Scrolling
//!
//! Each move scrolls by the distance travelled since the previous one, scaled
//! by [`SCROLL_SENSITIVITY`]. The dominant axis picks the command:
//!
//! ```
//! use touchpad_gesture::geometry::dominant_scroll_axis;
//!
//! // Finger moved right and slightly down: content scrolls horizontally.
//! assert!(dominant_scroll_axis(-5.0, -1.0).is_horizontal());
//! // Equal travel on both axes scrolls vertically.
//! assert!(!dominant_scroll_axis(3.0, 3.0).is_horizontal());
//! ```

use crate::geometry::{distance, dominant_scroll_axis};
use crate::timer::TimerSlot;
use crate::types::{Action, GestureState, MouseButton, Sample};

use super::{HandlerCx, StateHandler};

/// Scale applied to finger travel before it is emitted as scroll.
pub const SCROLL_SENSITIVITY: f64 = 0.6;

/// Handler for [`GestureState::TwoFingerTapPending`].
#[derive(Copy, Clone, Debug, Default)]
pub struct TwoFingerTapPendingHandler;

impl StateHandler for TwoFingerTapPendingHandler {
    fn handle(&self, sample: &Sample, cx: &mut HandlerCx<'_>) -> bool {
        match sample.action {
            Action::Up => {
                let in_place =
                    distance(cx.context.scroll_anchor, sample.position) < cx.touch_slop();
                if cx.context.pending_two_finger_tap && in_place {
                    cx.sink.click(MouseButton::Right);
                }
                cancel_tap_detection(cx);
                cx.transition(GestureState::Idle, "two-finger release");
                true
            }
            Action::Move => {
                cancel_tap_detection(cx);
                cx.transition(GestureState::TwoFingerScroll, "two-finger move");
                apply_scroll(sample, cx)
            }
            Action::Cancel => {
                // Platforms cancel the single-contact stream when a second
                // finger lands.
                cx.context.expect_cancel = false;
                cx.transition(GestureState::TwoFingerScroll, "expected cancel");
                true
            }
            _ => false,
        }
    }

    fn label(&self) -> &'static str {
        "two-finger"
    }
}

/// Handler for [`GestureState::TwoFingerScroll`].
#[derive(Copy, Clone, Debug, Default)]
pub struct TwoFingerScrollHandler;

impl StateHandler for TwoFingerScrollHandler {
    fn handle(&self, sample: &Sample, cx: &mut HandlerCx<'_>) -> bool {
        match sample.action {
            Action::Move => apply_scroll(sample, cx),
            Action::Up => {
                cx.transition(GestureState::Idle, "scroll finished");
                true
            }
            Action::Cancel => true,
            _ => false,
        }
    }

    fn label(&self) -> &'static str {
        "scroll"
    }
}

fn cancel_tap_detection(cx: &mut HandlerCx<'_>) {
    cx.context.pending_two_finger_tap = false;
    cx.disarm(TimerSlot::TwoFingerTapExpiry);
}

/// Scroll by the travel from the anchor to `sample`, then move the anchor.
pub(crate) fn apply_scroll(sample: &Sample, cx: &mut HandlerCx<'_>) -> bool {
    let delta = cx.context.scroll_anchor - sample.position;
    let dx = delta.x * SCROLL_SENSITIVITY;
    let dy = delta.y * SCROLL_SENSITIVITY;

    if dominant_scroll_axis(dx, dy).is_horizontal() {
        cx.sink.scroll_with_shift(dx, 0.0);
        cx.context.scroll_accum_x += dx;
    } else {
        cx.sink.scroll(0.0, dy);
        cx.context.scroll_accum_y += dy;
    }
    cx.context.scroll_anchor = sample.position;
    cx.context.scroll_started = true;
    true
}

/// Two-finger tap window expiry: a later release no longer clicks.
pub(crate) fn on_two_finger_tap_expiry(cx: &mut HandlerCx<'_>) -> bool {
    let was_pending = cx.context.pending_two_finger_tap;
    cx.context.pending_two_finger_tap = false;
    was_pending
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_util::Harness;
    use crate::sink::PointerCommand;
    use alloc::vec;
    use kurbo::Point;

    fn tap_pending() -> Harness {
        let mut h = Harness::new();
        h.context.state = GestureState::TwoFingerTapPending;
        h.context.pending_two_finger_tap = true;
        h.context.scroll_anchor = Point::ZERO;
        h.cx().arm(TimerSlot::TwoFingerTapExpiry);
        h
    }

    fn scrolling() -> Harness {
        let mut h = Harness::new();
        h.context.state = GestureState::TwoFingerScroll;
        h
    }

    #[test]
    fn release_in_place_is_right_click() {
        let mut h = tap_pending();
        let s = Sample::new(Action::Up, Point::new(1.0, 1.0), 30);
        assert!(TwoFingerTapPendingHandler.handle(&s, &mut h.cx()));
        assert_eq!(h.sink, vec![PointerCommand::Click(MouseButton::Right)]);
        assert_eq!(h.context.state, GestureState::Idle);
        assert!(!h.context.pending_two_finger_tap);
        assert_eq!(h.timers.pending(), 0);
    }

    #[test]
    fn release_after_window_does_not_click() {
        let mut h = tap_pending();
        assert!(on_two_finger_tap_expiry(&mut h.cx()));
        let s = Sample::new(Action::Up, Point::ZERO, 130);
        assert!(TwoFingerTapPendingHandler.handle(&s, &mut h.cx()));
        assert!(h.sink.is_empty());
        assert_eq!(h.context.state, GestureState::Idle);
    }

    #[test]
    fn release_far_away_does_not_click() {
        let mut h = tap_pending();
        let s = Sample::new(Action::Up, Point::new(0.0, 12.0), 30);
        assert!(TwoFingerTapPendingHandler.handle(&s, &mut h.cx()));
        assert!(h.sink.is_empty());
    }

    #[test]
    fn move_starts_scrolling_immediately() {
        let mut h = tap_pending();
        let s = Sample::new(Action::Move, Point::new(0.0, 20.0), 30);
        assert!(TwoFingerTapPendingHandler.handle(&s, &mut h.cx()));
        assert_eq!(h.context.state, GestureState::TwoFingerScroll);
        assert_eq!(
            h.sink,
            vec![PointerCommand::Scroll {
                dx: 0.0,
                dy: -20.0 * SCROLL_SENSITIVITY
            }]
        );
        assert!(!h.context.pending_two_finger_tap);
        assert_eq!(h.timers.pending(), 0);
    }

    #[test]
    fn expected_cancel_moves_to_scroll() {
        let mut h = tap_pending();
        h.context.expect_cancel = true;
        let s = Sample::new(Action::Cancel, Point::ZERO, 5);
        assert!(TwoFingerTapPendingHandler.handle(&s, &mut h.cx()));
        assert_eq!(h.context.state, GestureState::TwoFingerScroll);
        assert!(!h.context.expect_cancel);
        assert!(h.sink.is_empty());
    }

    #[test]
    fn horizontal_travel_scrolls_with_shift() {
        let mut h = scrolling();
        let s = Sample::new(Action::Move, Point::new(5.0, 1.0), 0);
        assert!(TwoFingerScrollHandler.handle(&s, &mut h.cx()));
        assert_eq!(
            h.sink,
            vec![PointerCommand::ScrollWithShift {
                dx: -5.0 * SCROLL_SENSITIVITY,
                dy: 0.0
            }]
        );
        assert_eq!(h.context.scroll_anchor, Point::new(5.0, 1.0));
        assert!(h.context.scroll_started);
    }

    #[test]
    fn vertical_travel_scrolls_plainly() {
        let mut h = scrolling();
        let s = Sample::new(Action::Move, Point::new(1.0, 5.0), 0);
        assert!(TwoFingerScrollHandler.handle(&s, &mut h.cx()));
        assert_eq!(
            h.sink,
            vec![PointerCommand::Scroll {
                dx: 0.0,
                dy: -5.0 * SCROLL_SENSITIVITY
            }]
        );
    }

    #[test]
    fn deltas_are_relative_to_previous_move() {
        let mut h = scrolling();
        for y in [10.0, 30.0, 25.0] {
            let s = Sample::new(Action::Move, Point::new(0.0, y), 0);
            assert!(TwoFingerScrollHandler.handle(&s, &mut h.cx()));
        }
        assert_eq!(
            h.sink,
            vec![
                PointerCommand::Scroll {
                    dx: 0.0,
                    dy: -10.0 * SCROLL_SENSITIVITY
                },
                PointerCommand::Scroll {
                    dx: 0.0,
                    dy: -20.0 * SCROLL_SENSITIVITY
                },
                PointerCommand::Scroll {
                    dx: 0.0,
                    dy: 5.0 * SCROLL_SENSITIVITY
                },
            ]
        );
        assert_eq!(h.context.scroll_accum_x, 0.0);
        assert!(h.context.scroll_accum_y < 0.0);
    }

    #[test]
    fn scroll_ends_on_release_and_ignores_cancel() {
        let mut h = scrolling();
        let cancel = Sample::new(Action::Cancel, Point::ZERO, 0);
        assert!(TwoFingerScrollHandler.handle(&cancel, &mut h.cx()));
        assert_eq!(h.context.state, GestureState::TwoFingerScroll);

        let up = Sample::new(Action::Up, Point::ZERO, 0);
        assert!(TwoFingerScrollHandler.handle(&up, &mut h.cx()));
        assert_eq!(h.context.state, GestureState::Idle);
        assert!(h.sink.is_empty());
    }
}
