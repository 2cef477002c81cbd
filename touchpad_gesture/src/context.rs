// Copyright 2025 the Touchpad Gesture Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-flight gesture state.
//!
//! A single [`GestureContext`] lives as long as the input stream. It is
//! created once and reused across gestures; per-gesture fields are cleared by
//! [`GestureContext::reset`] or by the transition logic of each handler.

use alloc::collections::VecDeque;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Point;

use crate::timer::{TimerScheduler, TimerSlots};
use crate::types::{GestureState, GestureType, Sample};

/// Double-tap window, tracked alongside the primary [`GestureState`].
///
/// A tap arms the window; moving the finger in proximity while it is armed
/// turns the tap into a drag instead of a click.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum DoubleTapWindow {
    /// No window open.
    #[default]
    Idle,
    /// Window open until the expiry timer fires.
    Armed {
        /// Expected expiry time in milliseconds.
        deadline: u64,
    },
}

impl DoubleTapWindow {
    /// Whether the window is open.
    pub const fn is_armed(&self) -> bool {
        matches!(self, Self::Armed { .. })
    }

    /// Expected expiry time, if armed.
    pub const fn deadline(&self) -> Option<u64> {
        match *self {
            Self::Armed { deadline } => Some(deadline),
            Self::Idle => None,
        }
    }

    /// Open the window.
    pub fn arm(&mut self, deadline: u64) {
        *self = Self::Armed { deadline };
    }

    /// Close the window.
    pub fn disarm(&mut self) {
        *self = Self::Idle;
    }
}

/// Bounded debug log of recent samples and notes. Oldest entries drop first.
#[derive(Clone, Debug, Default)]
pub struct EventHistory {
    entries: VecDeque<String>,
    capacity: usize,
}

impl EventHistory {
    /// Create an empty history bounded to `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.min(64)),
            capacity,
        }
    }

    /// Append an entry, evicting the oldest when full.
    pub fn push(&mut self, entry: String) {
        if self.capacity == 0 {
            return;
        }
        while self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Entries, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Copy of the entries, oldest first.
    pub fn to_vec(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries kept.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Mutable record of the gesture in flight.
///
/// Owned by the detector and lent to exactly one handler at a time.
#[derive(Clone, Debug)]
pub struct GestureContext {
    /// Current primary state.
    pub state: GestureState,
    /// Classification of the last generically dispatched sample.
    pub gesture_type: GestureType,
    /// Time of the last contact-down, in milliseconds.
    pub start_time: u64,
    /// Whether a contact gesture is in flight.
    pub active: bool,

    /// Contact-down anchor.
    pub initial_position: Point,
    /// Position of the last generically dispatched sample.
    pub current_position: Point,

    /// Time of the last recognized tap.
    pub last_tap_time: u64,
    /// Double-tap sub-state.
    pub double_tap: DoubleTapWindow,

    /// Reference point for the next scroll delta.
    pub scroll_anchor: Point,
    /// Total horizontal scroll emitted in this gesture.
    pub scroll_accum_x: f64,
    /// Total vertical scroll emitted in this gesture.
    pub scroll_accum_y: f64,
    /// Whether any scroll was emitted in this gesture.
    pub scroll_started: bool,

    /// Pinch baseline; `0.0` means not yet baselined.
    pub initial_pinch_distance: f64,
    /// Last measured two-contact distance.
    pub last_pinch_distance: f64,
    /// Whether a pinch baseline was taken in this gesture.
    pub pinch_started: bool,

    /// A platform cancel is expected as part of the current gesture.
    pub expect_cancel: bool,
    /// A two-finger release would still count as a tap.
    pub pending_two_finger_tap: bool,

    /// Live timer handles.
    pub timers: TimerSlots,
    /// Debug history.
    pub history: EventHistory,
}

impl GestureContext {
    /// Create an idle context whose debug history keeps `history_capacity`
    /// entries.
    pub fn new(history_capacity: usize) -> Self {
        Self {
            state: GestureState::Idle,
            gesture_type: GestureType::Unknown,
            start_time: 0,
            active: false,
            initial_position: Point::ZERO,
            current_position: Point::ZERO,
            last_tap_time: 0,
            double_tap: DoubleTapWindow::Idle,
            scroll_anchor: Point::ZERO,
            scroll_accum_x: 0.0,
            scroll_accum_y: 0.0,
            scroll_started: false,
            initial_pinch_distance: 0.0,
            last_pinch_distance: 0.0,
            pinch_started: false,
            expect_cancel: false,
            pending_two_finger_tap: false,
            timers: TimerSlots::default(),
            history: EventHistory::with_capacity(history_capacity),
        }
    }

    /// Cancel every live timer and return to a clean idle baseline.
    ///
    /// Calling this twice is the same as calling it once.
    pub fn reset(&mut self, scheduler: &mut dyn TimerScheduler) {
        self.timers.disarm_all(scheduler);
        if self.state != GestureState::Idle {
            log::debug!("context reset from {}", self.state.name());
        }
        *self = Self::new(self.history.capacity());
    }

    /// Switch the primary state.
    ///
    /// Leaving a contact gesture for [`GestureState::Idle`] clears
    /// [`GestureContext::active`].
    pub fn transition_to(&mut self, state: GestureState, reason: &str) {
        log::debug!(
            "state transition: {} -> {} ({reason})",
            self.state.name(),
            state.name()
        );
        if state == GestureState::Idle {
            self.active = false;
        }
        self.state = state;
    }

    /// Record a sample in the debug history under `label`.
    pub fn record(&mut self, label: &str, sample: &Sample) {
        if self.history.capacity() == 0 {
            return;
        }
        let entry = format!(
            "[{}] {label}: action={}, flags=0x{:X}, buttons=0x{:X}, pointers={}",
            self.state.name(),
            sample.action.name(),
            sample.flags.bits(),
            sample.buttons.bits(),
            sample.pointer_count,
        );
        self.history.push(entry);
    }

    /// Record a free-form note in the debug history.
    pub fn note(&mut self, text: &str) {
        if self.history.capacity() == 0 {
            return;
        }
        let entry = format!("[{}] {text}", self.state.name());
        self.history.push(entry);
    }

    /// Forget the pinch baseline.
    pub fn clear_pinch(&mut self) {
        self.initial_pinch_distance = 0.0;
        self.last_pinch_distance = 0.0;
        self.pinch_started = false;
    }
}

impl Default for GestureContext {
    fn default() -> Self {
        Self::new(0)
    }
}
