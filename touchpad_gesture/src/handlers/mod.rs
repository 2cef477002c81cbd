// Copyright 2025 the Touchpad Gesture Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-state reaction functions.
//!
//! ## Overview
//!
//! Every [`GestureState`] has exactly one [`StateHandler`]. A handler reacts to
//! one sample and may only:
//!
//! - emit commands to the sink,
//! - mutate the context,
//! - arm or disarm timers,
//! - request a state transition.
//!
//! Handlers receive their capabilities through a [`HandlerCx`] instead of
//! holding references to the detector, so a host can replace any of them with
//! [`HandlerRegistry::register`].
//!
//! ## Transition summary
//!
//! | State | Sample | Next |
//! |---|---|---|
//! | `Idle` | hover-enter | `HoverTracking` |
//! | `Idle` | down | by gesture type |
//! | `HoverTracking` | hover-move in double-tap window | `DragActive` |
//! | `HoverTracking` | hover-exit | `Idle` |
//! | `DragActive` | anything but hover-move | `HoverTracking` |
//! | `SingleTapPending` | up / large move / cancel | `Idle` |
//! | `TwoFingerTapPending` | move / cancel | `TwoFingerScroll` |
//! | `TwoFingerTapPending` | up | `Idle` |
//! | `TwoFingerScroll` | up | `Idle` |
//! | `PinchZoom` | up / cancel / last pointer-up | `Idle` |
//! | `PhysicalClick` | buttons released | `Idle` |

use alloc::boxed::Box;
use core::fmt;

use hashbrown::HashMap;

use crate::config::GestureConfig;
use crate::context::GestureContext;
use crate::sink::PointerSink;
use crate::timer::{TimerHandle, TimerScheduler, TimerSlot};
use crate::types::{GestureState, Sample};

pub mod drag;
pub mod hover;
pub mod idle;
pub mod physical;
pub mod pinch;
pub mod tap;
pub mod two_finger;

pub use drag::DragActiveHandler;
pub use hover::HoverTrackingHandler;
pub use idle::IdleHandler;
pub use physical::PhysicalClickHandler;
pub use pinch::PinchZoomHandler;
pub use tap::SingleTapPendingHandler;
pub use two_finger::{TwoFingerScrollHandler, TwoFingerTapPendingHandler};

/// Capabilities lent to a handler for one call.
pub struct HandlerCx<'a> {
    /// The gesture in flight.
    pub context: &'a mut GestureContext,
    /// Where resolved commands go.
    pub sink: &'a mut dyn PointerSink,
    /// Deferred callback scheduling.
    pub timers: &'a mut dyn TimerScheduler,
    /// Platform tuning values.
    pub config: &'a GestureConfig,
}

impl fmt::Debug for HandlerCx<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerCx")
            .field("context", &self.context)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl HandlerCx<'_> {
    /// Current primary state.
    pub fn state(&self) -> GestureState {
        self.context.state
    }

    /// Switch the primary state.
    pub fn transition(&mut self, state: GestureState, reason: &str) {
        self.context.transition_to(state, reason);
    }

    /// Schedule `slot`, superseding any live handle.
    pub fn arm(&mut self, slot: TimerSlot) -> TimerHandle {
        self.context.timers.arm(slot, &mut *self.timers)
    }

    /// Cancel the live handle of `slot`, if any.
    pub fn disarm(&mut self, slot: TimerSlot) -> bool {
        self.context.timers.disarm(slot, &mut *self.timers)
    }

    /// Touch slop from the configuration.
    pub fn touch_slop(&self) -> f64 {
        self.config.touch_slop
    }
}

/// Reaction to samples while the detector is in one state.
pub trait StateHandler {
    /// Handle one sample. Returns whether the sample was consumed.
    fn handle(&self, sample: &Sample, cx: &mut HandlerCx<'_>) -> bool;

    /// Label used for debug history entries.
    fn label(&self) -> &'static str {
        "event"
    }
}

/// Lookup table from state to handler.
pub struct HandlerRegistry {
    handlers: HashMap<GestureState, Box<dyn StateHandler>>,
}

impl fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut states: alloc::vec::Vec<&str> =
            self.handlers.keys().map(|s| s.name()).collect();
        states.sort_unstable();
        f.debug_struct("HandlerRegistry")
            .field("states", &states)
            .finish()
    }
}

impl HandlerRegistry {
    /// A registry with no handlers.
    pub fn empty() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// A registry with the built-in handler for every state.
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        registry.register(GestureState::Idle, IdleHandler);
        registry.register(GestureState::HoverTracking, HoverTrackingHandler);
        registry.register(GestureState::SingleTapPending, SingleTapPendingHandler);
        registry.register(GestureState::DragActive, DragActiveHandler);
        registry.register(GestureState::TwoFingerTapPending, TwoFingerTapPendingHandler);
        registry.register(GestureState::TwoFingerScroll, TwoFingerScrollHandler);
        registry.register(GestureState::PinchZoom, PinchZoomHandler);
        registry.register(GestureState::PhysicalClick, PhysicalClickHandler);
        registry
    }

    /// Install `handler` for `state`, returning the one it replaces.
    pub fn register(
        &mut self,
        state: GestureState,
        handler: impl StateHandler + 'static,
    ) -> Option<Box<dyn StateHandler>> {
        self.handlers.insert(state, Box::new(handler))
    }

    /// Remove the handler for `state`.
    pub fn remove(&mut self, state: GestureState) -> Option<Box<dyn StateHandler>> {
        self.handlers.remove(&state)
    }

    /// Handler for `state`, if registered.
    pub fn get(&self, state: GestureState) -> Option<&dyn StateHandler> {
        self.handlers.get(&state).map(|h| &**h)
    }

    /// Whether every declared state has a handler.
    pub fn is_complete(&self) -> bool {
        GestureState::ALL
            .iter()
            .all(|s| self.handlers.contains_key(s))
    }
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
