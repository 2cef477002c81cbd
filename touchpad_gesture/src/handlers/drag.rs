// Copyright 2025 the Touchpad Gesture Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Left-button drag started by tap-then-hover.
//!
//! The drag lasts while hover movement keeps arriving. Each movement re-arms a
//! 140 ms timeout; any other sample, or the timeout, releases the button.

use crate::timer::TimerSlot;
use crate::types::{Action, GestureState, MouseButton, Sample};

use super::{HandlerCx, StateHandler};

/// Handler for [`GestureState::DragActive`].
#[derive(Copy, Clone, Debug, Default)]
pub struct DragActiveHandler;

impl StateHandler for DragActiveHandler {
    fn handle(&self, sample: &Sample, cx: &mut HandlerCx<'_>) -> bool {
        if sample.action == Action::HoverMove {
            cx.sink.move_to(sample.position, true);
            cx.arm(TimerSlot::DragTimeout);
            return true;
        }
        end_drag(cx, sample.action.name());
        // The ending sample itself is left for the host.
        false
    }

    fn label(&self) -> &'static str {
        "drag"
    }
}

/// Release the dragged button and fall back to hover tracking.
pub(crate) fn end_drag(cx: &mut HandlerCx<'_>, reason: &str) {
    cx.disarm(TimerSlot::DragTimeout);
    cx.sink.release(MouseButton::Left);
    cx.context.double_tap.disarm();
    cx.transition(GestureState::HoverTracking, reason);
}

/// Drag timeout callback. Returns whether the drag was ended.
pub(crate) fn on_drag_timeout(cx: &mut HandlerCx<'_>) -> bool {
    if cx.state() != GestureState::DragActive {
        return false;
    }
    end_drag(cx, "drag timeout");
    true
}
