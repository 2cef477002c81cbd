// Copyright 2025 the Touchpad Gesture Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Physical pad press, mapped to the middle button.

use crate::types::{GestureState, MouseButton, Sample};

use super::{HandlerCx, StateHandler};

/// Handler for [`GestureState::PhysicalClick`].
///
/// The middle button is already held when this state is entered. It stays
/// held, dragging the cursor, until a sample reports no buttons.
#[derive(Copy, Clone, Debug, Default)]
pub struct PhysicalClickHandler;

impl StateHandler for PhysicalClickHandler {
    fn handle(&self, sample: &Sample, cx: &mut HandlerCx<'_>) -> bool {
        if sample.buttons.is_empty() {
            cx.sink.release(MouseButton::Middle);
            cx.transition(GestureState::Idle, "button released");
        } else {
            cx.sink.move_to(sample.position, true);
        }
        true
    }

    fn label(&self) -> &'static str {
        "physical"
    }
}
