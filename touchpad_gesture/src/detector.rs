// Copyright 2025 the Touchpad Gesture Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Top-level entry point: routes samples and timer callbacks to handlers.
//!
//! ## Dispatch
//!
//! [`GestureDetector::handle`] first looks at samples whose meaning does not
//! depend on the current state:
//!
//! - a second contact landing forces [`GestureState::PinchZoom`],
//! - a physical button press forces [`GestureState::PhysicalClick`] and presses
//!   the middle button right away,
//! - a cancel drops whatever gesture is in flight, timers included.
//!
//! The matching releases (second contact lifting, button release) are only
//! forwarded when the detector is in the state that expects them.
//!
//! Everything else is classified and handed to the handler registered for the
//! current state.
//!
//! ## Timers
//!
//! The host owns the clock. Whenever its [`TimerScheduler`] fires a callback,
//! it passes the slot and handle back to [`GestureDetector::on_timer`]. Hosts
//! using [`ManualScheduler`] can let the detector do this with
//! [`GestureDetector::advance_to`] and [`GestureDetector::handle_at`].
//!
//! ```
//! use kurbo::Point;
//! use touchpad_gesture::{
//!     Action, GestureConfig, GestureDetector, GestureState, ManualScheduler, MouseButton,
//!     PointerCommand, Sample,
//! };
//!
//! let mut detector = GestureDetector::new(GestureConfig::default(), Vec::new(), ManualScheduler::new());
//!
//! // Tap, then come back and hover-move before the click goes out: a drag.
//! detector.handle_at(&Sample::new(Action::Down, Point::new(10.0, 10.0), 0));
//! detector.handle_at(&Sample::new(Action::Up, Point::new(10.0, 10.0), 40));
//! detector.handle_at(&Sample::new(Action::HoverEnter, Point::new(10.0, 10.0), 70));
//! detector.handle_at(&Sample::new(Action::HoverMove, Point::new(14.0, 10.0), 90));
//! assert_eq!(detector.current_state(), GestureState::DragActive);
//!
//! // No more movement: the drag times out.
//! detector.advance_to(1_000);
//! assert_eq!(detector.current_state(), GestureState::HoverTracking);
//! assert_eq!(
//!     detector.sink(),
//!     &[
//!         PointerCommand::Press(MouseButton::Left),
//!         PointerCommand::Move { position: Point::new(14.0, 10.0), drag: true },
//!         PointerCommand::Release(MouseButton::Left),
//!     ]
//! );
//! ```

use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::classify::classify;
use crate::config::{ConfigError, GestureConfig};
use crate::context::GestureContext;
use crate::geometry::two_contact_distance;
use crate::handlers::{HandlerCx, HandlerRegistry, StateHandler, drag, tap, two_finger};
use crate::sink::PointerSink;
use crate::timer::{ManualScheduler, TimerHandle, TimerScheduler, TimerSlot};
use crate::types::{Action, GestureState, MouseButton, Sample};

/// Touchpad gesture state machine.
///
/// `S` receives resolved pointer commands; `T` schedules deferred callbacks.
pub struct GestureDetector<S, T> {
    config: GestureConfig,
    context: GestureContext,
    handlers: HandlerRegistry,
    sink: S,
    timers: T,
}

impl<S, T> fmt::Debug for GestureDetector<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GestureDetector")
            .field("config", &self.config)
            .field("state", &self.context.state)
            .field("handlers", &self.handlers)
            .finish_non_exhaustive()
    }
}

impl<S: PointerSink, T: TimerScheduler> GestureDetector<S, T> {
    /// Create an idle detector with the built-in handlers.
    pub fn new(config: GestureConfig, sink: S, timers: T) -> Self {
        Self {
            context: GestureContext::new(config.history_capacity),
            config,
            handlers: HandlerRegistry::with_defaults(),
            sink,
            timers,
        }
    }

    /// Like [`GestureDetector::new`], but rejects unusable configuration.
    pub fn try_new(config: GestureConfig, sink: S, timers: T) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config, sink, timers))
    }

    /// Process one sample. Returns whether it was consumed.
    pub fn handle(&mut self, sample: &Sample) -> bool {
        match sample.action {
            Action::PointerDown => {
                if sample.pointer_count == 2 {
                    self.context
                        .transition_to(GestureState::PinchZoom, "second contact");
                    self.context.initial_pinch_distance = two_contact_distance(sample);
                    let note = format!(
                        "pinch baseline {:.1}",
                        self.context.initial_pinch_distance
                    );
                    self.context.note(&note);
                }
                true
            }
            Action::PointerUp => {
                if self.context.state == GestureState::PinchZoom {
                    self.dispatch(sample)
                } else {
                    true
                }
            }
            Action::ButtonPress => {
                self.context
                    .transition_to(GestureState::PhysicalClick, "button press");
                self.sink.press(MouseButton::Middle);
                self.context.note("middle button pressed");
                true
            }
            Action::ButtonRelease => {
                if self.context.state == GestureState::PhysicalClick {
                    self.dispatch(sample)
                } else {
                    true
                }
            }
            Action::Cancel => {
                self.reset();
                true
            }
            _ => {
                self.context.gesture_type = classify(sample);
                self.context.current_position = sample.position;
                log::trace!(
                    "{} classified as {:?} in {}",
                    sample.action.name(),
                    self.context.gesture_type,
                    self.context.state.name()
                );
                self.dispatch(sample)
            }
        }
    }

    fn dispatch(&mut self, sample: &Sample) -> bool {
        let state = self.context.state;
        let Some(handler) = self.handlers.get(state) else {
            log::warn!("no handler registered for {}", state.name());
            return false;
        };
        self.context.record(handler.label(), sample);
        let mut cx = HandlerCx {
            context: &mut self.context,
            sink: &mut self.sink,
            timers: &mut self.timers,
            config: &self.config,
        };
        handler.handle(sample, &mut cx)
    }

    fn cx(&mut self) -> HandlerCx<'_> {
        HandlerCx {
            context: &mut self.context,
            sink: &mut self.sink,
            timers: &mut self.timers,
            config: &self.config,
        }
    }

    /// Deliver a fired timer callback.
    ///
    /// Returns `true` if the callback was live and had an effect. Stale
    /// handles (superseded, cancelled, or from before a reset) are dropped.
    pub fn on_timer(&mut self, slot: TimerSlot, handle: TimerHandle) -> bool {
        if !self.context.timers.take_fired(slot, handle) {
            log::trace!("dropping stale {slot:?} timer #{}", handle.into_raw());
            return false;
        }
        self.context.note(&format!("timer {slot:?}"));
        let mut cx = self.cx();
        match slot {
            TimerSlot::DelayedClick => tap::on_delayed_click(&mut cx),
            TimerSlot::DoubleTapExpiry => tap::on_double_tap_expiry(&mut cx),
            TimerSlot::TwoFingerTapExpiry => two_finger::on_two_finger_tap_expiry(&mut cx),
            TimerSlot::DragTimeout => drag::on_drag_timeout(&mut cx),
        }
    }

    /// Cancel every live timer and return to [`GestureState::Idle`].
    pub fn reset(&mut self) {
        self.context.reset(&mut self.timers);
    }

    /// Current primary state.
    pub fn current_state(&self) -> GestureState {
        self.context.state
    }

    /// Recent debug history entries, oldest first.
    pub fn event_history(&self) -> Vec<String> {
        self.context.history.to_vec()
    }

    /// The gesture in flight.
    pub fn context(&self) -> &GestureContext {
        &self.context
    }

    /// Configuration in use.
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// The command sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the command sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// The timer scheduler.
    pub fn scheduler(&self) -> &T {
        &self.timers
    }

    /// Mutable access to the timer scheduler.
    ///
    /// Cancelling handles through this bypasses the detector's slots; the
    /// slots are cleaned up on the next re-arm or reset.
    pub fn scheduler_mut(&mut self) -> &mut T {
        &mut self.timers
    }

    /// Replace the handler for one state, returning the previous one.
    pub fn register_handler(
        &mut self,
        state: GestureState,
        handler: impl StateHandler + 'static,
    ) -> Option<Box<dyn StateHandler>> {
        self.handlers.register(state, handler)
    }

    /// The handler registry.
    pub fn handlers(&self) -> &HandlerRegistry {
        &self.handlers
    }

    /// Mutable access to the handler registry.
    pub fn handlers_mut(&mut self) -> &mut HandlerRegistry {
        &mut self.handlers
    }

    /// Take the sink and scheduler back.
    pub fn into_parts(self) -> (S, T) {
        (self.sink, self.timers)
    }
}

impl<S: PointerSink> GestureDetector<S, ManualScheduler> {
    /// Fire every callback due at or before `time`, in deadline order, then
    /// move the clock to `time`.
    ///
    /// Returns the number of callbacks that had an effect.
    pub fn advance_to(&mut self, time: u64) -> usize {
        let mut live = 0;
        while let Some(fired) = self.timers.pop_due(time) {
            if self.on_timer(fired.slot, fired.handle) {
                live += 1;
            }
        }
        self.timers.set_now(time);
        live
    }

    /// Advance the clock to the sample's timestamp, then handle it.
    pub fn handle_at(&mut self, sample: &Sample) -> bool {
        self.advance_to(sample.time);
        self.handle(sample)
    }
}
