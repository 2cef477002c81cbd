// Copyright 2025 the Touchpad Gesture Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deferred callbacks: timer slots, handles, and the scheduling capability.
//!
//! ## Model
//!
//! The detector never sleeps. When an interpretation depends on what happens
//! next, it asks a [`TimerScheduler`] to call back after a fixed delay and
//! keeps the returned [`TimerHandle`] in the [`TimerSlot`] for that purpose.
//! The host delivers the callback later, on the same timeline as samples, via
//! [`GestureDetector::on_timer`](crate::GestureDetector::on_timer).
//!
//! - Each slot holds at most one live handle; arming a slot cancels the
//!   previous handle first ([`TimerSlots::arm`]).
//! - [`TimerScheduler::cancel`] is idempotent: cancelling a fired or already
//!   cancelled handle does nothing.
//! - A callback whose handle is no longer live in its slot is stale and is
//!   dropped without side effects.
//!
//! [`ManualScheduler`] is a deterministic scheduler driven by an explicit
//! clock, suitable for tests, replays, and hosts that already serialize input
//! and timers onto one queue.
//!
//! ```
//! use core::time::Duration;
//! use touchpad_gesture::timer::{ManualScheduler, TimerScheduler, TimerSlot};
//!
//! let mut timers = ManualScheduler::new();
//! let click = timers.schedule(Duration::from_millis(150), TimerSlot::DelayedClick);
//! let expiry = timers.schedule(Duration::from_millis(160), TimerSlot::DoubleTapExpiry);
//! timers.cancel(expiry);
//! timers.cancel(expiry); // no-op
//!
//! assert!(timers.advance_to(149).is_empty());
//! let fired = timers.advance_to(200);
//! assert_eq!(fired.len(), 1);
//! assert_eq!(fired[0].handle, click);
//! ```

use alloc::vec::Vec;
use core::time::Duration;

/// Purpose of a deferred callback. Each purpose owns one slot.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TimerSlot {
    /// Emits the postponed left click of a single tap.
    DelayedClick,
    /// Closes the double-tap window.
    DoubleTapExpiry,
    /// Ends the window in which a two-finger release counts as a tap.
    TwoFingerTapExpiry,
    /// Ends a drag when no movement arrives.
    DragTimeout,
}

impl TimerSlot {
    /// Every slot, in storage order.
    pub const ALL: [Self; 4] = [
        Self::DelayedClick,
        Self::DoubleTapExpiry,
        Self::TwoFingerTapExpiry,
        Self::DragTimeout,
    ];

    /// Fixed delay for this slot.
    pub const fn delay(self) -> Duration {
        match self {
            Self::DelayedClick => Duration::from_millis(150),
            Self::DoubleTapExpiry => Duration::from_millis(160),
            Self::TwoFingerTapExpiry => Duration::from_millis(100),
            Self::DragTimeout => Duration::from_millis(140),
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::DelayedClick => 0,
            Self::DoubleTapExpiry => 1,
            Self::TwoFingerTapExpiry => 2,
            Self::DragTimeout => 3,
        }
    }
}

/// Opaque identifier of one scheduled callback.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

impl TimerHandle {
    /// Wrap a scheduler-specific identifier.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The scheduler-specific identifier.
    pub const fn into_raw(self) -> u64 {
        self.0
    }
}

/// Capability to schedule and cancel deferred callbacks.
pub trait TimerScheduler {
    /// Schedule a callback for `slot` after `delay`.
    ///
    /// Handles must be unique among the callbacks this scheduler has issued.
    fn schedule(&mut self, delay: Duration, slot: TimerSlot) -> TimerHandle;

    /// Cancel a scheduled callback. Unknown, fired, or already cancelled
    /// handles are ignored.
    fn cancel(&mut self, handle: TimerHandle);
}

impl<T: TimerScheduler + ?Sized> TimerScheduler for &mut T {
    fn schedule(&mut self, delay: Duration, slot: TimerSlot) -> TimerHandle {
        (**self).schedule(delay, slot)
    }

    fn cancel(&mut self, handle: TimerHandle) {
        (**self).cancel(handle);
    }
}

/// At most one live handle per [`TimerSlot`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TimerSlots {
    handles: [Option<TimerHandle>; 4],
}

impl TimerSlots {
    /// Schedule `slot` with its fixed delay, cancelling any live handle first.
    pub fn arm(&mut self, slot: TimerSlot, scheduler: &mut dyn TimerScheduler) -> TimerHandle {
        self.disarm(slot, scheduler);
        let handle = scheduler.schedule(slot.delay(), slot);
        self.handles[slot.index()] = Some(handle);
        handle
    }

    /// Cancel the live handle of `slot`, if any.
    ///
    /// Returns `true` if a handle was live.
    pub fn disarm(&mut self, slot: TimerSlot, scheduler: &mut dyn TimerScheduler) -> bool {
        match self.handles[slot.index()].take() {
            Some(handle) => {
                scheduler.cancel(handle);
                true
            }
            None => false,
        }
    }

    /// Cancel every live handle.
    pub fn disarm_all(&mut self, scheduler: &mut dyn TimerScheduler) {
        for slot in TimerSlot::ALL {
            self.disarm(slot, scheduler);
        }
    }

    /// The live handle of `slot`.
    pub fn get(&self, slot: TimerSlot) -> Option<TimerHandle> {
        self.handles[slot.index()]
    }

    /// Whether `slot` has a live handle.
    pub fn is_armed(&self, slot: TimerSlot) -> bool {
        self.handles[slot.index()].is_some()
    }

    /// Number of live handles across all slots.
    pub fn live_count(&self) -> usize {
        self.handles.iter().filter(|h| h.is_some()).count()
    }

    /// Accept a fired callback.
    ///
    /// Returns `true` and clears the slot when `handle` is the live handle of
    /// `slot`; returns `false` for stale callbacks.
    pub fn take_fired(&mut self, slot: TimerSlot, handle: TimerHandle) -> bool {
        let entry = &mut self.handles[slot.index()];
        if *entry == Some(handle) {
            *entry = None;
            true
        } else {
            false
        }
    }
}

/// A callback that came due in a [`ManualScheduler`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FiredTimer {
    /// Slot the callback was scheduled for.
    pub slot: TimerSlot,
    /// Handle returned when it was scheduled.
    pub handle: TimerHandle,
    /// Time at which it came due, in milliseconds.
    pub deadline: u64,
}

/// Deterministic scheduler driven by an explicit millisecond clock.
///
/// Due callbacks come out in deadline order; equal deadlines keep scheduling
/// order.
#[derive(Clone, Debug, Default)]
pub struct ManualScheduler {
    now: u64,
    next_id: u64,
    pending: Vec<FiredTimer>,
}

impl ManualScheduler {
    /// Create a scheduler with its clock at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scheduler with its clock at `now`.
    pub fn starting_at(now: u64) -> Self {
        Self {
            now,
            ..Self::default()
        }
    }

    /// Current clock value in milliseconds.
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Number of scheduled, not yet fired or cancelled callbacks.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Whether `handle` is still scheduled.
    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.pending.iter().any(|t| t.handle == handle)
    }

    /// Earliest deadline among scheduled callbacks.
    pub fn next_deadline(&self) -> Option<u64> {
        self.pending.iter().map(|t| t.deadline).min()
    }

    /// Remove and return the earliest callback due at or before `time`,
    /// moving the clock to its deadline.
    ///
    /// Returns `None` once nothing is due; the clock is then left untouched,
    /// so callers finish with [`ManualScheduler::advance_to`] or
    /// [`ManualScheduler::set_now`].
    pub fn pop_due(&mut self, time: u64) -> Option<FiredTimer> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, t)| t.deadline <= time)
            .min_by_key(|(_, t)| (t.deadline, t.handle))
            .map(|(i, _)| i)?;
        let fired = self.pending.remove(index);
        self.now = self.now.max(fired.deadline);
        Some(fired)
    }

    /// Move the clock to `time` and return every callback that came due, in
    /// firing order.
    pub fn advance_to(&mut self, time: u64) -> Vec<FiredTimer> {
        let mut fired = Vec::new();
        while let Some(t) = self.pop_due(time) {
            fired.push(t);
        }
        self.set_now(time);
        fired
    }

    /// Move the clock forward to `time` without firing anything.
    ///
    /// The clock never moves backwards.
    pub fn set_now(&mut self, time: u64) {
        self.now = self.now.max(time);
    }
}

impl TimerScheduler for ManualScheduler {
    fn schedule(&mut self, delay: Duration, slot: TimerSlot) -> TimerHandle {
        let handle = TimerHandle::from_raw(self.next_id);
        self.next_id += 1;
        let delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self.pending.push(FiredTimer {
            slot,
            handle,
            deadline: self.now.saturating_add(delay_ms),
        });
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.pending.retain(|t| t.handle != handle);
    }
}
