// Copyright 2025 the Touchpad Gesture Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared pieces for the `touchpad_gesture` demos.
//!
//! Run:
//! - `cargo run -p touchpad_gesture_demos --example replay`
//! - `RUST_LOG=touchpad_gesture=debug cargo run -p touchpad_gesture_demos --example replay -- --verbose`

use kurbo::Point;
use touchpad_gesture::{
    Action, Buttons, MouseButton, PointerCommand, PointerSink, Sample, SampleFlags,
};
use tracing_subscriber::EnvFilter;

/// Install a `tracing` subscriber that also receives `log` records.
///
/// Without `verbose` the level is pinned to `info`; with it, `RUST_LOG`
/// overrides the default `debug` level.
pub fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    } else {
        EnvFilter::new(level)
    };
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Sink that logs every command and keeps a copy.
#[derive(Clone, Debug, Default)]
pub struct LoggingSink {
    commands: Vec<PointerCommand>,
}

impl LoggingSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands received so far, oldest first.
    pub fn commands(&self) -> &[PointerCommand] {
        &self.commands
    }

    fn push(&mut self, command: PointerCommand) {
        log::info!("pointer command: {command:?}");
        self.commands.push(command);
    }
}

impl PointerSink for LoggingSink {
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

/// A scripted session touching every gesture once, with timestamps in
/// milliseconds.
pub fn scripted_session() -> Vec<Sample> {
    let at = |action, x, y, t| Sample::new(action, Point::new(x, y), t);
    let two = |action, x, y, t| at(action, x, y, t).with_flags(SampleFlags::TWO_FINGER);
    let pinch = |action, width: f64, t| {
        at(action, 100.0, 100.0, t)
            .with_pointers(&[Point::new(100.0, 100.0), Point::new(100.0 + width, 100.0)])
    };

    vec![
        // Tap: left click once the double-tap window lapses.
        at(Action::Down, 50.0, 50.0, 0),
        at(Action::Up, 51.0, 50.0, 45),
        // Tap, then hover-move right away: drag.
        at(Action::Down, 60.0, 60.0, 500),
        at(Action::Up, 60.0, 60.0, 540),
        at(Action::HoverEnter, 60.0, 60.0, 570),
        at(Action::HoverMove, 70.0, 62.0, 590),
        at(Action::HoverMove, 82.0, 64.0, 650),
        at(Action::HoverExit, 82.0, 64.0, 1_000),
        // Two-finger tap: right click.
        two(Action::Down, 120.0, 80.0, 1_500),
        two(Action::Up, 121.0, 80.0, 1_560),
        // Two-finger scroll: down, then sideways.
        two(Action::Down, 120.0, 80.0, 2_000),
        two(Action::Move, 120.0, 100.0, 2_030),
        two(Action::Move, 120.0, 130.0, 2_060),
        two(Action::Move, 150.0, 132.0, 2_090),
        two(Action::Up, 150.0, 132.0, 2_120),
        // Pinch: spread, then close.
        at(Action::Down, 100.0, 100.0, 3_000),
        pinch(Action::PointerDown, 80.0, 3_010),
        pinch(Action::Move, 100.0, 3_040),
        pinch(Action::Move, 130.0, 3_070),
        pinch(Action::Move, 90.0, 3_100),
        at(Action::PointerUp, 100.0, 100.0, 3_130).with_pointer_count(1),
        // Physical press with a short drag.
        at(Action::ButtonPress, 40.0, 40.0, 4_000).with_buttons(Buttons::PRIMARY),
        at(Action::Move, 48.0, 44.0, 4_050).with_buttons(Buttons::PRIMARY),
        at(Action::ButtonRelease, 48.0, 44.0, 4_100),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use touchpad_gesture::{GestureConfig, GestureDetector, GestureState, ManualScheduler};

    #[test]
    fn scripted_session_resolves_every_gesture() {
        let mut detector =
            GestureDetector::new(GestureConfig::default(), LoggingSink::new(), ManualScheduler::new());
        for sample in scripted_session() {
            detector.handle_at(&sample);
        }
        detector.advance_to(10_000);
        assert_eq!(detector.current_state(), GestureState::Idle);

        let commands = detector.sink().commands();
        let has = |c: PointerCommand| commands.contains(&c);
        assert!(has(PointerCommand::Click(MouseButton::Left)));
        assert!(has(PointerCommand::Press(MouseButton::Left)));
        assert!(has(PointerCommand::Release(MouseButton::Left)));
        assert!(has(PointerCommand::Click(MouseButton::Right)));
        assert!(has(PointerCommand::ScrollWithCtrl { dx: 0.0, dy: -1.0 }));
        assert!(has(PointerCommand::ScrollWithCtrl { dx: 0.0, dy: 1.0 }));
        assert!(has(PointerCommand::Release(MouseButton::Middle)));
        assert!(
            commands
                .iter()
                .any(|c| matches!(c, PointerCommand::ScrollWithShift { .. }))
        );
    }
}
