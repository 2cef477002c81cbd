// Copyright 2025 the Touchpad Gesture Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types: raw input samples, mouse buttons, and the state/type enums.

use kurbo::Point;
use smallvec::SmallVec;

/// Kind of a raw touchpad sample.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    /// First contact touches the surface.
    Down,
    /// One or more contacts move while touching.
    Move,
    /// Last contact leaves the surface.
    Up,
    /// The platform aborted the stream.
    Cancel,
    /// A finger enters proximity above the surface.
    HoverEnter,
    /// A finger moves in proximity above the surface.
    HoverMove,
    /// A finger leaves proximity.
    HoverExit,
    /// An additional contact touches the surface.
    PointerDown,
    /// A non-final contact leaves the surface.
    PointerUp,
    /// The physical button under the pad was pressed.
    ButtonPress,
    /// The physical button under the pad was released.
    ButtonRelease,
}

impl Action {
    /// Short, stable name used in debug history entries.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Down => "DOWN",
            Self::Move => "MOVE",
            Self::Up => "UP",
            Self::Cancel => "CANCEL",
            Self::HoverEnter => "HOVER_ENTER",
            Self::HoverMove => "HOVER_MOVE",
            Self::HoverExit => "HOVER_EXIT",
            Self::PointerDown => "POINTER_DOWN",
            Self::PointerUp => "POINTER_UP",
            Self::ButtonPress => "BUTTON_PRESS",
            Self::ButtonRelease => "BUTTON_RELEASE",
        }
    }
}

bitflags::bitflags! {
    /// Button state bitmask reported with each sample.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Buttons: u32 {
        /// Primary button (the physical pad click).
        const PRIMARY   = 0x1;
        /// Secondary button.
        const SECONDARY = 0x2;
        /// Tertiary button.
        const TERTIARY  = 0x4;
    }
}

bitflags::bitflags! {
    /// Raw per-sample flags as delivered by the input source.
    ///
    /// Only [`SampleFlags::TWO_FINGER`] carries meaning here; other bits are
    /// retained so hosts can pass the platform value through untouched.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct SampleFlags: u32 {
        /// The contact was reported as a two-finger gesture.
        const TWO_FINGER = 0x40;

        const _ = !0;
    }
}

/// One raw sample from the touchpad.
#[derive(Clone, Debug, PartialEq)]
pub struct Sample {
    /// What happened.
    pub action: Action,
    /// Position of the primary contact (or hover point).
    pub position: Point,
    /// Number of contacts reported with this sample.
    pub pointer_count: u8,
    /// Per-contact positions in pointer-index order.
    pub pointers: SmallVec<[Point; 2]>,
    /// Button state bitmask.
    pub buttons: Buttons,
    /// Raw platform flags.
    pub flags: SampleFlags,
    /// Event timestamp in milliseconds.
    pub time: u64,
}

impl Sample {
    /// Create a single-contact sample with no buttons held and no flags.
    pub fn new(action: Action, position: Point, time: u64) -> Self {
        let mut pointers = SmallVec::new();
        pointers.push(position);
        Self {
            action,
            position,
            pointer_count: 1,
            pointers,
            buttons: Buttons::empty(),
            flags: SampleFlags::empty(),
            time,
        }
    }

    /// Replace the contact list; the first contact becomes [`Sample::position`].
    ///
    /// An empty slice leaves the position untouched and reports zero contacts.
    #[must_use]
    pub fn with_pointers(mut self, pointers: &[Point]) -> Self {
        self.pointers = pointers.iter().copied().collect();
        self.pointer_count = u8::try_from(pointers.len()).unwrap_or(u8::MAX);
        if let Some(first) = pointers.first() {
            self.position = *first;
        }
        self
    }

    /// Override the reported contact count without changing positions.
    #[must_use]
    pub fn with_pointer_count(mut self, count: u8) -> Self {
        self.pointer_count = count;
        self
    }

    /// Set the button state.
    #[must_use]
    pub fn with_buttons(mut self, buttons: Buttons) -> Self {
        self.buttons = buttons;
        self
    }

    /// Set the raw flags.
    #[must_use]
    pub fn with_flags(mut self, flags: SampleFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Whether the input source tagged this sample as a two-finger contact.
    pub fn is_two_finger(&self) -> bool {
        self.flags.contains(SampleFlags::TWO_FINGER)
    }

    /// Whether the physical primary button is held.
    pub fn is_physical_press(&self) -> bool {
        self.buttons.contains(Buttons::PRIMARY)
    }
}

/// Mouse button addressed by a resolved pointer command.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left button.
    Left,
    /// Right button.
    Right,
    /// Middle button.
    Middle,
}

/// Primary state of the gesture state machine.
///
/// The double-tap window is not a state; see
/// [`DoubleTapWindow`](crate::context::DoubleTapWindow).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum GestureState {
    /// Resting state between gestures.
    #[default]
    Idle,
    /// Finger hovering; cursor follows.
    HoverTracking,
    /// Single contact down; may become a tap.
    SingleTapPending,
    /// Left button held, cursor dragging.
    DragActive,
    /// Two-finger contact down; may become a right click.
    TwoFingerTapPending,
    /// Two-finger movement converted to wheel scrolling.
    TwoFingerScroll,
    /// Two contacts tracked for pinch-to-zoom.
    PinchZoom,
    /// Physical pad button held.
    PhysicalClick,
}

impl GestureState {
    /// Every declared state, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Idle,
        Self::HoverTracking,
        Self::SingleTapPending,
        Self::DragActive,
        Self::TwoFingerTapPending,
        Self::TwoFingerScroll,
        Self::PinchZoom,
        Self::PhysicalClick,
    ];

    /// Short, stable name used in logs and debug history.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Idle => "IDLE",
            Self::HoverTracking => "HOVER_TRACKING",
            Self::SingleTapPending => "SINGLE_TAP_PENDING",
            Self::DragActive => "DRAG_ACTIVE",
            Self::TwoFingerTapPending => "TWO_FINGER_TAP_PENDING",
            Self::TwoFingerScroll => "TWO_FINGER_SCROLL",
            Self::PinchZoom => "PINCH_ZOOM",
            Self::PhysicalClick => "PHYSICAL_CLICK",
        }
    }
}

/// Coarse gesture type derived from a single sample.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum GestureType {
    /// Nothing classified yet.
    #[default]
    Unknown,
    /// One finger on the pad.
    SingleFinger,
    /// Two fingers, identified by the sample flags.
    TwoFinger,
    /// Physical button held.
    PhysicalPress,
    /// Two or more contacts reported.
    PinchZoom,
}

/// Dominant direction of a scroll delta.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ScrollDirection {
    /// Negative y.
    Up,
    /// Positive y.
    Down,
    /// Negative x.
    Left,
    /// Positive x.
    Right,
}

impl ScrollDirection {
    /// `true` for [`Left`](Self::Left) and [`Right`](Self::Right).
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sample_reports_one_contact() {
        let s = Sample::new(Action::Down, Point::new(3.0, 4.0), 7);
        assert_eq!(s.pointer_count, 1);
        assert_eq!(s.pointers.as_slice(), &[Point::new(3.0, 4.0)]);
        assert!(!s.is_two_finger());
        assert!(!s.is_physical_press());
    }

    #[test]
    fn with_pointers_moves_primary_position() {
        let s = Sample::new(Action::Move, Point::ZERO, 0)
            .with_pointers(&[Point::new(1.0, 1.0), Point::new(5.0, 1.0)]);
        assert_eq!(s.pointer_count, 2);
        assert_eq!(s.position, Point::new(1.0, 1.0));
    }

    #[test]
    fn raw_flags_keep_unknown_bits() {
        let flags = SampleFlags::from_bits_retain(0x41);
        assert!(flags.contains(SampleFlags::TWO_FINGER));
        assert_eq!(flags.bits(), 0x41);
    }

    #[test]
    fn all_states_are_distinct() {
        for (i, a) in GestureState::ALL.iter().enumerate() {
            for b in &GestureState::ALL[i + 1..] {
                assert_ne!(a, b, "duplicate state in ALL");
            }
        }
    }
}
