// Copyright 2025 the Touchpad Gesture Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-finger tap recognition.
//!
//! A tap does not click right away. Lifting the finger opens the double-tap
//! window and schedules a delayed left click; if the finger comes back and
//! moves in proximity first, [`HoverTrackingHandler`] turns the tap into a
//! drag and the click never happens.
//!
//! [`HoverTrackingHandler`]: super::HoverTrackingHandler

use crate::geometry::{distance, is_significant};
use crate::timer::TimerSlot;
use crate::types::{Action, GestureState, MouseButton, Sample};

use super::{HandlerCx, StateHandler};

/// Handler for [`GestureState::SingleTapPending`].
#[derive(Copy, Clone, Debug, Default)]
pub struct SingleTapPendingHandler;

impl StateHandler for SingleTapPendingHandler {
    fn handle(&self, sample: &Sample, cx: &mut HandlerCx<'_>) -> bool {
        match sample.action {
            Action::Up => {
                if distance(cx.context.initial_position, sample.position) < cx.touch_slop() {
                    cx.context.last_tap_time = sample.time;
                    let deadline = sample
                        .time
                        .saturating_add(duration_ms(TimerSlot::DoubleTapExpiry));
                    cx.context.double_tap.arm(deadline);
                    cx.arm(TimerSlot::DelayedClick);
                    cx.arm(TimerSlot::DoubleTapExpiry);
                    cx.transition(GestureState::Idle, "tap");
                } else {
                    cx.transition(GestureState::Idle, "release after slide");
                }
                true
            }
            Action::Move => {
                if is_significant(cx.context.initial_position, sample.position, cx.touch_slop()) {
                    cx.transition(GestureState::Idle, "moved beyond slop");
                }
                true
            }
            Action::Cancel => {
                cx.transition(GestureState::Idle, "cancel");
                true
            }
            _ => false,
        }
    }

    fn label(&self) -> &'static str {
        "tap"
    }
}

fn duration_ms(slot: TimerSlot) -> u64 {
    u64::try_from(slot.delay().as_millis()).unwrap_or(u64::MAX)
}

/// Delayed click callback. Returns whether a click was emitted.
///
/// The click is dropped when the window was closed in the meantime or a drag
/// took over.
pub(crate) fn on_delayed_click(cx: &mut HandlerCx<'_>) -> bool {
    if !cx.context.double_tap.is_armed() || cx.state() == GestureState::DragActive {
        return false;
    }
    cx.sink.click(MouseButton::Left);
    true
}

/// Double-tap window expiry callback.
pub(crate) fn on_double_tap_expiry(cx: &mut HandlerCx<'_>) -> bool {
    if !cx.context.double_tap.is_armed() {
        return false;
    }
    cx.context.double_tap.disarm();
    true
}
