// Copyright 2025 the Touchpad Gesture Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resting state: decides which gesture a new contact starts.

use crate::timer::TimerSlot;
use crate::types::{Action, GestureState, GestureType, MouseButton, Sample};

use super::{HandlerCx, StateHandler};

/// Handler for [`GestureState::Idle`].
#[derive(Copy, Clone, Debug, Default)]
pub struct IdleHandler;

impl StateHandler for IdleHandler {
    fn handle(&self, sample: &Sample, cx: &mut HandlerCx<'_>) -> bool {
        match sample.action {
            Action::HoverEnter => {
                cx.transition(GestureState::HoverTracking, "finger over pad");
                true
            }
            Action::Down => on_down(sample, cx),
            Action::ButtonPress => {
                cx.transition(GestureState::PhysicalClick, "physical press");
                cx.sink.press(MouseButton::Middle);
                true
            }
            _ => false,
        }
    }

    fn label(&self) -> &'static str {
        "idle"
    }
}

fn on_down(sample: &Sample, cx: &mut HandlerCx<'_>) -> bool {
    cx.context.initial_position = sample.position;
    cx.context.current_position = sample.position;
    cx.context.start_time = sample.time;
    cx.context.active = true;

    match cx.context.gesture_type {
        GestureType::SingleFinger => {
            cx.transition(GestureState::SingleTapPending, "single tap pending");
        }
        GestureType::TwoFinger => {
            cx.transition(GestureState::TwoFingerTapPending, "two-finger contact");
            cx.context.pending_two_finger_tap = true;
            cx.context.scroll_anchor = sample.position;
            cx.arm(TimerSlot::TwoFingerTapExpiry);
        }
        GestureType::PinchZoom => {
            cx.transition(GestureState::PinchZoom, "pinch started");
        }
        GestureType::PhysicalPress => {
            cx.transition(GestureState::PhysicalClick, "physical press");
            cx.sink.press(MouseButton::Middle);
        }
        GestureType::Unknown => {}
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_util::Harness;
    use crate::sink::PointerCommand;
    use crate::types::{Buttons, SampleFlags};
    use alloc::vec;
    use kurbo::Point;

    fn down(h: &mut Harness, sample: &Sample) -> bool {
        h.context.gesture_type = crate::classify::classify(sample);
        IdleHandler.handle(sample, &mut h.cx())
    }

    #[test]
    fn hover_enter_starts_tracking() {
        let mut h = Harness::new();
        let s = Sample::new(Action::HoverEnter, Point::new(1.0, 1.0), 0);
        assert!(IdleHandler.handle(&s, &mut h.cx()));
        assert_eq!(h.context.state, GestureState::HoverTracking);
        assert!(h.sink.is_empty());
    }

    #[test]
    fn single_finger_down_records_anchor() {
        let mut h = Harness::new();
        let s = Sample::new(Action::Down, Point::new(10.0, 12.0), 500);
        assert!(down(&mut h, &s));
        assert_eq!(h.context.state, GestureState::SingleTapPending);
        assert_eq!(h.context.initial_position, Point::new(10.0, 12.0));
        assert_eq!(h.context.start_time, 500);
        assert!(h.context.active);
        assert_eq!(h.timers.pending(), 0);
    }

    #[test]
    fn two_finger_down_arms_tap_window() {
        let mut h = Harness::new();
        let s = Sample::new(Action::Down, Point::new(20.0, 20.0), 0)
            .with_flags(SampleFlags::TWO_FINGER);
        assert!(down(&mut h, &s));
        assert_eq!(h.context.state, GestureState::TwoFingerTapPending);
        assert!(h.context.pending_two_finger_tap);
        assert_eq!(h.context.scroll_anchor, Point::new(20.0, 20.0));
        assert!(h.context.timers.is_armed(TimerSlot::TwoFingerTapExpiry));
        assert_eq!(h.timers.next_deadline(), Some(100));
    }

    #[test]
    fn multi_contact_down_starts_pinch() {
        let mut h = Harness::new();
        let s = Sample::new(Action::Down, Point::ZERO, 0)
            .with_pointers(&[Point::new(0.0, 0.0), Point::new(40.0, 0.0)]);
        assert!(down(&mut h, &s));
        assert_eq!(h.context.state, GestureState::PinchZoom);
    }

    #[test]
    fn pressed_down_is_a_middle_press() {
        let mut h = Harness::new();
        let s = Sample::new(Action::Down, Point::ZERO, 0).with_buttons(Buttons::PRIMARY);
        assert!(down(&mut h, &s));
        assert_eq!(h.context.state, GestureState::PhysicalClick);
        assert_eq!(h.sink, vec![PointerCommand::Press(MouseButton::Middle)]);
    }

    #[test]
    fn button_press_is_a_middle_press() {
        let mut h = Harness::new();
        let s = Sample::new(Action::ButtonPress, Point::ZERO, 0).with_buttons(Buttons::PRIMARY);
        assert!(IdleHandler.handle(&s, &mut h.cx()));
        assert_eq!(h.context.state, GestureState::PhysicalClick);
        assert_eq!(h.sink, vec![PointerCommand::Press(MouseButton::Middle)]);
    }

    #[test]
    fn other_actions_are_unhandled() {
        let mut h = Harness::new();
        for action in [Action::Move, Action::Up, Action::HoverMove, Action::HoverExit] {
            let s = Sample::new(action, Point::ZERO, 0);
            assert!(!IdleHandler.handle(&s, &mut h.cx()), "{action:?}");
        }
        assert_eq!(h.context.state, GestureState::Idle);
    }
}
