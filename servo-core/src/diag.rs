//! Best-effort diagnostic side channel.
//!
//! The bridge reports each decode cycle's intermediate values so a host
//! log panel can show what the gauge is doing. The channel is purely
//! observational: emission failure never affects actuation, and sinks
//! must never block the decode path.

use core::future::Future;

use telemetry_proto::FlagText;

/// Intermediate values of one decode cycle.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DiagEvent<'a> {
    /// The raw line as delivered by the transport.
    pub raw: &'a [u8],
    /// Classified session-paused flag.
    pub paused: FlagText,
    /// Classified game-running flag.
    pub running: FlagText,
    /// Decoded g-force.
    pub gforce: f32,
    /// Angle written to both servos this cycle.
    pub angle: i32,
}

/// Error type for diagnostic emission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DiagError {
    /// No listener attached / channel not supported.
    NotSupported,
    /// I/O error during emission.
    Io,
    /// Transmit buffer is full.
    BufferFull,
}

/// Trait for diagnostic sinks.
///
/// Implementations should be fast and non-blocking; callers ignore the
/// result.
pub trait DiagSink {
    /// Emit one diagnostic event, best effort.
    fn emit(&mut self, event: &DiagEvent<'_>) -> impl Future<Output = Result<(), DiagError>>;
}

/// Diagnostic sink that discards all events.
///
/// Use this when no listener is attached.
pub struct NullDiag;

impl DiagSink for NullDiag {
    async fn emit(&mut self, _event: &DiagEvent<'_>) -> Result<(), DiagError> {
        Err(DiagError::NotSupported)
    }
}
