//! Line-based sim telemetry protocol: tokenizing, lenient parsing, encoding.
//!
//! The host simulation emits one ASCII line per telemetry update:
//!
//! ```text
//! <gforce>;<paused>;<running>\n
//! ```
//!
//! - `gforce` - longitudinal acceleration in g as decimal text (e.g. `2.53`)
//! - `paused` - `0` while the session is live, `1` while paused
//! - `running` - `1` while the player is driving, `0` otherwise
//!
//! The protocol is deliberately forgiving: a missing field tokenizes to the
//! empty slice, a malformed number parses to `0.0`, and unexpected flag text
//! classifies as [`FlagText::Other`]. Nothing on the decode path ever fails.
//!
//! # Overview
//!
//! - [`fields`]: Delimiter-based field extraction ([`field`])
//! - [`parser`]: Line decoding ([`parse_frame`], [`float_or_zero`])
//! - [`types`]: Frame and flag types ([`TelemetryFrame`], [`FlagText`])
//! - [`builder`]: Host-side line construction ([`encode_frame`], [`FrameBuilder`])
//!
//! # Example
//!
//! ```rust
//! use telemetry_proto::{parse_frame, FlagText};
//!
//! let frame = parse_frame(b"2.53;0;1");
//! assert_eq!(frame.scaled_centi(), 253);
//! assert_eq!(frame.paused, FlagText::Zero);
//! assert_eq!(frame.running, FlagText::One);
//! ```
//!
//! # Features
//!
//! - **`std`**: Enable standard library support (for host testing)
//! - **`defmt`**: Enable defmt formatting (for embedded logging)
//! - **`heapless`**: Enable `encode_to_vec()`
//!
//! # No-std Support
//!
//! This crate is `#![no_std]` by default and uses no heap allocations.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

pub mod builder;
pub mod fields;
mod fmt;
pub mod parser;
pub mod types;

// Re-export main items at crate root
pub use builder::{encode_frame, EncodeError, FrameBuilder, MAX_FRAME_SIZE};
pub use fields::field;
pub use parser::{
    float_or_zero, parse_frame, FIELD_SEPARATOR, GFORCE_FIELD, MAX_LINE_LENGTH, PAUSED_FIELD,
    RUNNING_FIELD,
};
pub use types::{FlagText, TelemetryFrame};
