// Copyright 2025 the Touchpad Gesture Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Replay a scripted touchpad session and print the resolved commands.
//!
//! Samples and timer callbacks share one deterministic clock, so the output
//! is the same on every run.
//!
//! Run:
//! - `cargo run -p touchpad_gesture_demos --example replay`
//! - `cargo run -p touchpad_gesture_demos --example replay -- --verbose`

use touchpad_gesture::{GestureConfig, GestureDetector, ManualScheduler};
use touchpad_gesture_demos::{LoggingSink, init_logging, scripted_session};

fn main() {
    let verbose = std::env::args().any(|a| a == "--verbose" || a == "-v");
    init_logging(verbose);

    let config = GestureConfig::default().with_history_capacity(16);
    let mut detector = match GestureDetector::try_new(config, LoggingSink::new(), ManualScheduler::new()) {
        Ok(detector) => detector,
        Err(err) => {
            eprintln!("invalid configuration: {err}");
            std::process::exit(2);
        }
    };

    let session = scripted_session();
    let end = session.last().map_or(0, |s| s.time) + 1_000;
    for sample in &session {
        let handled = detector.handle_at(sample);
        println!(
            "t={:>5} {:<14} -> {:<22} handled={handled}",
            sample.time,
            sample.action.name(),
            detector.current_state().name(),
        );
    }
    detector.advance_to(end);

    println!();
    println!("resolved commands:");
    for command in detector.sink().commands() {
        println!("  {command:?}");
    }

    println!();
    println!("last debug history entries:");
    for entry in detector.event_history() {
        println!("  {entry}");
    }
}
