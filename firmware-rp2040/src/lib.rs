//! Serial telemetry to dual-servo gauge for RP2040.
//!
//! This crate provides the embedded implementation of a g-force gauge
//! that reads sim telemetry over UART and sweeps two hobby servos.
//!
//! # Overview
//!
//! The firmware runs on a Raspberry Pi Pico (RP2040) and:
//! 1. Receives telemetry lines over UART (115200 baud, 8N1)
//! 2. Decodes each line (g-force plus the paused/running session flags)
//! 3. Maps the g-force onto 0-180 degrees while the session is live
//! 4. Drives both servos with the resulting angle
//!
//! # Hardware Configuration
//!
//! | Function  | GPIO | Description |
//! |-----------|------|-------------|
//! | UART1 TX  | 8    | Serial transmit (unused) |
//! | UART1 RX  | 9    | Serial receive (telemetry input) |
//! | PWM0 A    | 0    | Servo 1 signal |
//! | PWM1 A    | 2    | Servo 2 signal (separate PWM slice) |
//!
//! # Architecture
//!
//! A single Embassy task runs the [`ServoBridge`] loop: the decode path
//! is strictly sequential, one complete line per cycle, and only suspends
//! while awaiting transport bytes. Diagnostics go out over defmt RTT and
//! never gate actuation.
//!
//! # Modules
//!
//! - [`uart_line`]: UART line assembly ([`UartLineSource`])
//! - [`servo`]: PWM servo driver ([`PwmServo`])
//! - [`diag`]: defmt diagnostic sink ([`DefmtDiag`])
//!
//! # Features
//!
//! - **`dev-panic`** (default): Use `panic-probe` for development (prints panic info via RTT)
//! - **`prod-panic`**: Use `panic-reset` for production (silent watchdog reset)
//!
//! # Re-exports
//!
//! This crate re-exports the public items of [`servo_core`] for
//! convenience, so the binary only needs to depend on this crate.

#![no_std]

// Re-export core types for convenience
pub use servo_core::{
    gate_open, parse_frame, target_angle, ActuatorSink, BridgeError, DiagError, DiagEvent,
    DiagSink, FlagText, InputError, LineSource, OutputError, ServoBridge, ServoMapping, ServoPair,
    TelemetryFrame, DEFAULT_MAPPING, MAX_LINE_LENGTH, REST_ANGLE,
};

pub mod diag;
pub mod servo;
pub mod uart_line;

pub use diag::DefmtDiag;
pub use servo::PwmServo;
pub use uart_line::UartLineSource;
