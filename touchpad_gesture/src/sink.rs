// Copyright 2025 the Touchpad Gesture Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Output side: the pointer sink capability and a recordable command type.
//!
//! The detector talks to the host through [`PointerSink`]. A `Vec` of
//! [`PointerCommand`] is itself a sink, which makes recording and replaying
//! resolved output straightforward:
//!
//! ```
//! use kurbo::Point;
//! use touchpad_gesture::{MouseButton, PointerCommand, PointerSink};
//!
//! let mut recorded: Vec<PointerCommand> = Vec::new();
//! recorded.press(MouseButton::Left);
//! recorded.move_to(Point::new(4.0, 2.0), true);
//! recorded.release(MouseButton::Left);
//!
//! let mut replayed: Vec<PointerCommand> = Vec::new();
//! for command in &recorded {
//!     command.apply_to(&mut replayed);
//! }
//! assert_eq!(recorded, replayed);
//! ```

use alloc::vec::Vec;

use kurbo::Point;

use crate::types::MouseButton;

/// Receiver of resolved pointer commands.
pub trait PointerSink {
    /// Move the cursor; `drag` is set while a button is held by the gesture.
    fn move_to(&mut self, position: Point, drag: bool);

    /// Press and release a button.
    fn click(&mut self, button: MouseButton);

    /// Press a button and keep it held.
    fn press(&mut self, button: MouseButton);

    /// Release a held button.
    fn release(&mut self, button: MouseButton);

    /// Plain wheel scroll.
    fn scroll(&mut self, dx: f64, dy: f64);

    /// Wheel scroll with Shift held (horizontal scrolling).
    fn scroll_with_shift(&mut self, dx: f64, dy: f64);

    /// Wheel scroll with Ctrl held (zoom).
    fn scroll_with_ctrl(&mut self, dx: f64, dy: f64);
}

/// A resolved pointer command as a value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerCommand {
    /// See [`PointerSink::move_to`].
    Move {
        /// Cursor position.
        position: Point,
        /// Whether a button is held.
        drag: bool,
    },
    /// See [`PointerSink::click`].
    Click(MouseButton),
    /// See [`PointerSink::press`].
    Press(MouseButton),
    /// See [`PointerSink::release`].
    Release(MouseButton),
    /// See [`PointerSink::scroll`].
    Scroll {
        /// Horizontal amount.
        dx: f64,
        /// Vertical amount.
        dy: f64,
    },
    /// See [`PointerSink::scroll_with_shift`].
    ScrollWithShift {
        /// Horizontal amount.
        dx: f64,
        /// Vertical amount.
        dy: f64,
    },
    /// See [`PointerSink::scroll_with_ctrl`].
    ScrollWithCtrl {
        /// Horizontal amount.
        dx: f64,
        /// Vertical amount.
        dy: f64,
    },
}

impl PointerCommand {
    /// Deliver this command to a sink.
    pub fn apply_to<S: PointerSink + ?Sized>(&self, sink: &mut S) {
        match *self {
            Self::Move { position, drag } => sink.move_to(position, drag),
            Self::Click(button) => sink.click(button),
            Self::Press(button) => sink.press(button),
            Self::Release(button) => sink.release(button),
            Self::Scroll { dx, dy } => sink.scroll(dx, dy),
            Self::ScrollWithShift { dx, dy } => sink.scroll_with_shift(dx, dy),
            Self::ScrollWithCtrl { dx, dy } => sink.scroll_with_ctrl(dx, dy),
        }
    }
}

impl PointerSink for Vec<PointerCommand> {
    fn move_to(&mut self, position: Point, drag: bool) {
        self.push(PointerCommand::Move { position, drag });
    }

    fn click(&mut self, button: MouseButton) {
        self.push(PointerCommand::Click(button));
    }

    fn press(&mut self, button: MouseButton) {
        self.push(PointerCommand::Press(button));
    }

    fn release(&mut self, button: MouseButton) {
        self.push(PointerCommand::Release(button));
    }

    fn scroll(&mut self, dx: f64, dy: f64) {
        self.push(PointerCommand::Scroll { dx, dy });
    }

    fn scroll_with_shift(&mut self, dx: f64, dy: f64) {
        self.push(PointerCommand::ScrollWithShift { dx, dy });
    }

    fn scroll_with_ctrl(&mut self, dx: f64, dy: f64) {
        self.push(PointerCommand::ScrollWithCtrl { dx, dy });
    }
}

impl<S: PointerSink + ?Sized> PointerSink for &mut S {
    fn move_to(&mut self, position: Point, drag: bool) {
        (**self).move_to(position, drag);
    }

    fn click(&mut self, button: MouseButton) {
        (**self).click(button);
    }

    fn press(&mut self, button: MouseButton) {
        (**self).press(button);
    }

    fn release(&mut self, button: MouseButton) {
        (**self).release(button);
    }

    fn scroll(&mut self, dx: f64, dy: f64) {
        (**self).scroll(dx, dy);
    }

    fn scroll_with_shift(&mut self, dx: f64, dy: f64) {
        (**self).scroll_with_shift(dx, dy);
    }

    fn scroll_with_ctrl(&mut self, dx: f64, dy: f64) {
        (**self).scroll_with_ctrl(dx, dy);
    }
}
