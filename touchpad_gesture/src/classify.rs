// Copyright 2025 the Touchpad Gesture Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-sample gesture classification.
//!
//! Classification looks only at the sample itself, never at detector state:
//!
//! 1. Primary button held → [`GestureType::PhysicalPress`]
//! 2. Two or more contacts → [`GestureType::PinchZoom`]
//! 3. Two-finger flag set → [`GestureType::TwoFinger`]
//! 4. Otherwise → [`GestureType::SingleFinger`]
//!
//! A physical press may be reported together with several contacts and
//! always wins.
//!
//! ```
//! use kurbo::Point;
//! use touchpad_gesture::classify::classify;
//! use touchpad_gesture::{Action, Buttons, GestureType, Sample};
//!
//! let s = Sample::new(Action::Down, Point::new(1.0, 2.0), 0)
//!     .with_pointers(&[Point::new(1.0, 2.0), Point::new(30.0, 2.0)])
//!     .with_buttons(Buttons::PRIMARY);
//! assert_eq!(classify(&s), GestureType::PhysicalPress);
//! ```

use crate::types::{GestureType, Sample};

/// Map one raw sample to a coarse gesture type.
pub fn classify(sample: &Sample) -> GestureType {
    if sample.is_physical_press() {
        GestureType::PhysicalPress
    } else if sample.pointer_count >= 2 {
        GestureType::PinchZoom
    } else if sample.is_two_finger() {
        GestureType::TwoFinger
    } else {
        GestureType::SingleFinger
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Action, Buttons, SampleFlags};
    use kurbo::Point;

    fn sample() -> Sample {
        Sample::new(Action::Down, Point::new(10.0, 10.0), 0)
    }

    #[test]
    fn plain_contact_is_single_finger() {
        assert_eq!(classify(&sample()), GestureType::SingleFinger);
    }

    #[test]
    fn flag_marks_two_finger() {
        let s = sample().with_flags(SampleFlags::TWO_FINGER);
        assert_eq!(classify(&s), GestureType::TwoFinger);
    }

    #[test]
    fn multiple_contacts_never_single_finger() {
        for count in 2..=5_u8 {
            for flags in [SampleFlags::empty(), SampleFlags::TWO_FINGER] {
                let s = sample().with_pointer_count(count).with_flags(flags);
                let ty = classify(&s);
                assert_ne!(ty, GestureType::SingleFinger);
                assert_eq!(ty, GestureType::PinchZoom);
            }
        }
    }

    #[test]
    fn physical_press_dominates() {
        let s = sample()
            .with_pointers(&[Point::new(0.0, 0.0), Point::new(50.0, 0.0)])
            .with_flags(SampleFlags::TWO_FINGER)
            .with_buttons(Buttons::PRIMARY);
        assert_eq!(classify(&s), GestureType::PhysicalPress);
    }

    #[test]
    fn other_buttons_are_not_a_physical_press() {
        let s = sample().with_buttons(Buttons::SECONDARY);
        assert_eq!(classify(&s), GestureType::SingleFinger);
    }
}
