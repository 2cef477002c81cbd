// Copyright 2025 the Touchpad Gesture Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touchpad gesture disambiguation.
//!
//! A raw touchpad stream is ambiguous when each sample arrives: one finger
//! going down could become a tap, the first half of a tap-and-drag, or
//! nothing at all; two fingers could become a right click or a scroll. This
//! crate resolves such streams into plain pointer commands (move, click,
//! press, release, scroll) by combining a small state machine with short
//! timers that settle each ambiguity.
//!
//! # Key types
//!
//! - [`Sample`] – one raw input sample: action, position, contacts, buttons.
//! - [`GestureDetector`] – the state machine. Feed it samples with
//!   [`GestureDetector::handle`] and fired timers with
//!   [`GestureDetector::on_timer`].
//! - [`PointerSink`] – where resolved commands go. `Vec<PointerCommand>`
//!   implements it for recording.
//! - [`TimerScheduler`] – the host's deferred callback facility.
//!   [`ManualScheduler`] is a deterministic implementation driven by an
//!   explicit millisecond clock.
//! - [`GestureConfig`] – platform tuning values.
//!
//! # Gestures
//!
//! | Input | Output |
//! |---|---|
//! | one-finger tap | left click, 150 ms later |
//! | tap, then hover-move within 160 ms | left-button drag until movement stops for 140 ms |
//! | two-finger tap within 100 ms | right click |
//! | two-finger move | wheel scroll (Shift held for horizontal) |
//! | pinch | Ctrl+wheel zoom steps |
//! | physical pad press | middle-button press, drag, release |
//!
//! # Example
//!
//! ```
//! use kurbo::Point;
//! use touchpad_gesture::{
//!     Action, GestureConfig, GestureDetector, ManualScheduler, MouseButton, PointerCommand,
//!     Sample,
//! };
//!
//! let mut detector = GestureDetector::new(GestureConfig::default(), Vec::new(), ManualScheduler::new());
//!
//! detector.handle_at(&Sample::new(Action::Down, Point::new(10.0, 10.0), 0));
//! detector.handle_at(&Sample::new(Action::Up, Point::new(10.0, 10.0), 40));
//! // The click waits for the double-tap window.
//! assert!(detector.sink().is_empty());
//!
//! detector.advance_to(200);
//! assert_eq!(detector.sink(), &[PointerCommand::Click(MouseButton::Left)]);
//! ```
//!
//! # Features
//!
//! - `std` (default): use `std` floating point in `kurbo`.
//! - `libm`: `no_std` floating point through `libm`.
//! - `serde`: `Serialize`/`Deserialize` for [`GestureConfig`].
//!
//! The crate is `no_std` and uses `alloc`. Diagnostics go through the `log`
//! facade: state transitions at `debug`, per-sample classification and stale
//! timers at `trace`.

#![no_std]

extern crate alloc;

pub mod classify;
pub mod config;
pub mod context;
pub mod detector;
pub mod geometry;
pub mod handlers;
pub mod sink;
pub mod timer;
pub mod types;

pub use classify::classify;
pub use config::{ConfigError, GestureConfig};
pub use context::{DoubleTapWindow, EventHistory, GestureContext};
pub use detector::GestureDetector;
pub use handlers::two_finger::SCROLL_SENSITIVITY;
pub use handlers::{HandlerCx, HandlerRegistry, StateHandler};
pub use sink::{PointerCommand, PointerSink};
pub use timer::{FiredTimer, ManualScheduler, TimerHandle, TimerScheduler, TimerSlot};
pub use types::{
    Action, Buttons, GestureState, GestureType, MouseButton, Sample, SampleFlags, ScrollDirection,
};
