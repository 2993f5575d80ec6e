//! Platform-agnostic core of the serial-to-servo gauge.
//!
//! This crate turns decoded telemetry frames into servo angles and drives
//! them through small async seams, without any platform-specific
//! dependencies. It runs both in embedded `no_std` environments and on
//! host for testing.
//!
//! # Overview
//!
//! - [`mapping`]: Linear g-force-to-angle mapping and the gating policy
//!   ([`ServoMapping`], [`target_angle`], [`gate_open`])
//! - [`input`]: Line transport trait ([`LineSource`])
//! - [`output`]: Actuator trait and dual-write adapter ([`ActuatorSink`],
//!   [`ServoPair`])
//! - [`diag`]: Best-effort diagnostic side channel ([`DiagSink`])
//! - [`bridge`]: Per-line decode-and-actuate driver ([`ServoBridge`])
//!
//! # Decode cycle
//!
//! The host delivers one line per telemetry update. Each cycle the bridge
//! reads a line, decodes it (total, never fails), applies gating and the
//! linear map, writes the resulting angle to both servos, and emits one
//! diagnostic event:
//!
//! ```text
//! 2.53;0;1\n  ->  gate open  -> angle = map(253)   -> both servos
//! 2.53;1;1\n  ->  gate closed -> angle = 0 (rest)  -> both servos
//! ```
//!
//! # Features
//!
//! - **`std`**: Enable standard library support (for host testing)
//! - **`defmt`**: Enable defmt formatting (for embedded logging)
//!
//! # No-std Support
//!
//! This crate is `#![no_std]` by default and uses no heap allocations.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

pub mod bridge;
pub mod diag;
pub mod input;
pub mod mapping;
pub mod output;

#[cfg(test)]
mod test_util;

// Re-export main types at crate root
pub use bridge::{BridgeError, ServoBridge};
pub use diag::{DiagError, DiagEvent, DiagSink, NullDiag};
pub use input::{InputError, LineSource};
pub use mapping::{gate_open, target_angle, ServoMapping, DEFAULT_MAPPING, REST_ANGLE};
pub use output::{ActuatorSink, OutputError, ServoPair};

// Protocol types travel with the core API
pub use telemetry_proto::{parse_frame, FlagText, TelemetryFrame, MAX_LINE_LENGTH};
