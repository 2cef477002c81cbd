// Copyright 2025 the Touchpad Gesture Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cursor tracking while a finger hovers, and the tap-then-hover drag start.

use crate::timer::TimerSlot;
use crate::types::{Action, GestureState, MouseButton, Sample};

use super::{HandlerCx, StateHandler};

/// Handler for [`GestureState::HoverTracking`].
#[derive(Copy, Clone, Debug, Default)]
pub struct HoverTrackingHandler;

impl StateHandler for HoverTrackingHandler {
    fn handle(&self, sample: &Sample, cx: &mut HandlerCx<'_>) -> bool {
        match sample.action {
            Action::HoverMove => {
                if cx.context.double_tap.is_armed() {
                    // The pending tap becomes the first half of a drag.
                    cx.context.double_tap.disarm();
                    cx.disarm(TimerSlot::DoubleTapExpiry);
                    cx.disarm(TimerSlot::DelayedClick);
                    cx.transition(GestureState::DragActive, "tap then move");
                    cx.sink.press(MouseButton::Left);
                    cx.sink.move_to(sample.position, true);
                    cx.arm(TimerSlot::DragTimeout);
                } else {
                    cx.sink.move_to(sample.position, false);
                }
                true
            }
            Action::HoverExit => {
                cx.context.initial_position = sample.position;
                cx.transition(GestureState::Idle, "finger left pad");
                true
            }
            _ => false,
        }
    }

    fn label(&self) -> &'static str {
        "hover"
    }
}
