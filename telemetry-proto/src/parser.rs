//! Line decoding for telemetry frames.
//!
//! Decoding is total: every byte sequence, including the empty line,
//! produces a [`TelemetryFrame`]. Anomalies degrade to defined defaults
//! (zero g-force, [`FlagText::Other`]) instead of surfacing as errors.

use crate::fields::field;
use crate::types::{FlagText, TelemetryFrame};

/// Field separator used by the host protocol.
pub const FIELD_SEPARATOR: u8 = b';';

/// Maximum line length for the protocol (including newline).
pub const MAX_LINE_LENGTH: usize = 64;

/// Field index carrying the g-force value.
pub const GFORCE_FIELD: usize = 0;

/// Field index carrying the session-paused flag.
pub const PAUSED_FIELD: usize = 1;

/// Field index carrying the game-running flag.
pub const RUNNING_FIELD: usize = 2;

/// Parse a field as `f32`, defaulting to `0.0`.
///
/// This is an explicit parse-with-default policy, not a swallowed error:
/// a field that is empty, non-UTF-8, or not a complete decimal number
/// yields zero magnitude by contract. Leading and trailing ASCII
/// whitespace is tolerated.
#[inline]
#[must_use]
pub fn float_or_zero(text: &[u8]) -> f32 {
    core::str::from_utf8(text)
        .ok()
        .map(str::trim)
        .and_then(|s| s.parse::<f32>().ok())
        .unwrap_or(0.0)
}

/// Decode one telemetry line into a [`TelemetryFrame`].
///
/// The transport normally delivers the line with the terminator already
/// stripped; a trailing LF and/or CR is tolerated anyway. Never fails.
///
/// # Example
///
/// ```
/// use telemetry_proto::{parse_frame, FlagText};
///
/// let frame = parse_frame(b"-1.20;0;1");
/// assert_eq!(frame.scaled_centi(), -120);
/// assert_eq!(frame.running, FlagText::One);
///
/// // Garbage decodes too, it just keeps the gate closed.
/// let frame = parse_frame(b";;");
/// assert_eq!(frame.gforce, 0.0);
/// assert_eq!(frame.paused, FlagText::Other);
/// ```
#[must_use]
pub fn parse_frame(line: &[u8]) -> TelemetryFrame {
    let line = strip_line_ending(line);

    TelemetryFrame {
        gforce: float_or_zero(field(line, FIELD_SEPARATOR, GFORCE_FIELD)),
        paused: FlagText::classify(field(line, FIELD_SEPARATOR, PAUSED_FIELD)),
        running: FlagText::classify(field(line, FIELD_SEPARATOR, RUNNING_FIELD)),
    }
}

/// Strip trailing LF and/or CR from a line.
#[inline]
fn strip_line_ending(line: &[u8]) -> &[u8] {
    let mut end = line.len();
    if end > 0 && line[end - 1] == b'\n' {
        end -= 1;
    }
    if end > 0 && line[end - 1] == b'\r' {
        end -= 1;
    }
    &line[..end]
}
