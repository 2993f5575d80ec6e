//! Host-side construction of protocol lines.
//!
//! The firmware only ever consumes this format; encoding lives here for
//! host tools, integration tests and anything else that needs to play the
//! simulation's role.
//!
//! # Example
//!
//! ```
//! use telemetry_proto::FrameBuilder;
//!
//! let mut buf = [0u8; 32];
//! let len = FrameBuilder::new()
//!     .gforce_centi(253)
//!     .running(true)
//!     .encode(&mut buf)
//!     .unwrap();
//! assert_eq!(&buf[..len], b"2.53;0;1\n");
//! ```

use crate::fmt::write_centi;

/// Maximum encoded frame size: sign + 8 integer digits + `.` + 2 fraction
/// digits, two one-byte flags, two separators, newline.
pub const MAX_FRAME_SIZE: usize = 17;

/// Error type for frame encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EncodeError {
    /// The output buffer cannot hold a maximum-size frame.
    BufferTooSmall,
}

/// Encode one telemetry line into `buf`, returning the encoded length.
///
/// The g-force is given in centi-g and rendered with two fractional
/// digits; the flags are rendered as literal `0`/`1` text. The line is
/// terminated with `\n`.
pub fn encode_frame(
    buf: &mut [u8],
    gforce_centi: i32,
    paused: bool,
    running: bool,
) -> Result<usize, EncodeError> {
    if buf.len() < MAX_FRAME_SIZE {
        return Err(EncodeError::BufferTooSmall);
    }

    let mut pos = write_centi(buf, gforce_centi);
    buf[pos] = b';';
    buf[pos + 1] = if paused { b'1' } else { b'0' };
    buf[pos + 2] = b';';
    buf[pos + 3] = if running { b'1' } else { b'0' };
    buf[pos + 4] = b'\n';
    pos += 5;

    Ok(pos)
}

/// Fluent builder for telemetry lines.
///
/// Starts from a neutral frame: zero g, not paused, not running (so the
/// receiver's gate stays closed until `running(true)` is set).
#[derive(Debug, Clone, Copy)]
#[must_use]
pub struct FrameBuilder {
    gforce_centi: i32,
    paused: bool,
    running: bool,
}

impl FrameBuilder {
    /// Start building a telemetry line.
    pub fn new() -> Self {
        Self {
            gforce_centi: 0,
            paused: false,
            running: false,
        }
    }

    /// Set the g-force in centi-g.
    pub fn gforce_centi(mut self, centi: i32) -> Self {
        self.gforce_centi = centi;
        self
    }

    /// Set the g-force in g, rounded to centi-g.
    pub fn gforce(mut self, gforce: f32) -> Self {
        self.gforce_centi = libm::roundf(gforce * 100.0) as i32;
        self
    }

    /// Set the session-paused flag.
    pub fn paused(mut self, paused: bool) -> Self {
        self.paused = paused;
        self
    }

    /// Set the game-running flag.
    pub fn running(mut self, running: bool) -> Self {
        self.running = running;
        self
    }

    /// Encode the line into `buf`, returning the encoded length.
    pub fn encode(self, buf: &mut [u8]) -> Result<usize, EncodeError> {
        encode_frame(buf, self.gforce_centi, self.paused, self.running)
    }

    /// Encode the line into a `heapless::Vec`.
    #[cfg(feature = "heapless")]
    pub fn encode_to_vec(self) -> heapless::Vec<u8, MAX_FRAME_SIZE> {
        let mut buf = [0u8; MAX_FRAME_SIZE];
        // A MAX_FRAME_SIZE buffer always fits a frame.
        let len = self
            .encode(&mut buf)
            .unwrap_or(0);
        heapless::Vec::from_slice(&buf[..len]).unwrap_or_default()
    }
}

impl Default for FrameBuilder {
    fn default() -> Self {
        Self::new()
    }
}
