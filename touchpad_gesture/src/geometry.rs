// Copyright 2025 the Touchpad Gesture Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small geometric helpers used to tell intentional motion from jitter.

use kurbo::Point;

use crate::types::{Sample, ScrollDirection};

/// Euclidean distance between two points.
pub fn distance(p1: Point, p2: Point) -> f64 {
    p1.distance(p2)
}

/// Whether moving from `p1` to `p2` exceeds `slop`.
///
/// Movement of exactly `slop` is not significant.
pub fn is_significant(p1: Point, p2: Point, slop: f64) -> bool {
    distance(p1, p2) > slop
}

/// Dominant axis of a delta.
///
/// Horizontal wins only when `|dx|` is strictly greater than `|dy|`; ties go
/// to the vertical axis.
pub fn dominant_scroll_axis(dx: f64, dy: f64) -> ScrollDirection {
    if dx.abs() > dy.abs() {
        if dx > 0.0 {
            ScrollDirection::Right
        } else {
            ScrollDirection::Left
        }
    } else if dy > 0.0 {
        ScrollDirection::Down
    } else {
        ScrollDirection::Up
    }
}

/// Distance between the first two contacts of a sample.
///
/// Returns `0.0` when fewer than two contacts are reported, which callers
/// treat as "no pinch baseline".
pub fn two_contact_distance(sample: &Sample) -> f64 {
    if sample.pointer_count < 2 {
        return 0.0;
    }
    match sample.pointers.as_slice() {
        [a, b, ..] => distance(*a, *b),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Action;

    #[test]
    fn distance_is_euclidean() {
        assert_eq!(distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0)), 5.0);
    }

    #[test]
    fn slop_boundary_is_not_significant() {
        let a = Point::new(10.0, 10.0);
        assert!(!is_significant(a, Point::new(18.0, 10.0), 8.0));
        assert!(is_significant(a, Point::new(18.5, 10.0), 8.0));
    }

    #[test]
    fn horizontal_needs_strict_dominance() {
        assert_eq!(dominant_scroll_axis(5.0, 1.0), ScrollDirection::Right);
        assert_eq!(dominant_scroll_axis(-5.0, 1.0), ScrollDirection::Left);
        assert_eq!(dominant_scroll_axis(1.0, 5.0), ScrollDirection::Down);
        assert_eq!(dominant_scroll_axis(1.0, -5.0), ScrollDirection::Up);
        // Ties resolve vertically.
        assert_eq!(dominant_scroll_axis(3.0, 3.0), ScrollDirection::Down);
        assert_eq!(dominant_scroll_axis(-3.0, -3.0), ScrollDirection::Up);
    }

    #[test]
    fn two_contact_distance_needs_two_contacts() {
        let one = Sample::new(Action::Move, Point::new(1.0, 1.0), 0);
        assert_eq!(two_contact_distance(&one), 0.0);

        let two = Sample::new(Action::Move, Point::ZERO, 0)
            .with_pointers(&[Point::new(0.0, 0.0), Point::new(0.0, 100.0)]);
        assert_eq!(two_contact_distance(&two), 100.0);

        // A count of two without positions cannot be measured.
        let missing = Sample::new(Action::Move, Point::ZERO, 0).with_pointer_count(2);
        assert_eq!(two_contact_distance(&missing), 0.0);
    }
}
