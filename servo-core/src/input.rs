//! Line transport trait and error types.

use core::future::Future;

/// Error type for line transport operations.
///
/// There is deliberately no parse variant: decoding a delivered line is
/// total and cannot fail. These errors all describe the transport itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputError {
    /// UART/communication I/O error.
    Io,
    /// Connection lost / timeout.
    Disconnected,
    /// Line too long for the caller's buffer.
    BufferOverflow,
    /// UART framing error.
    Framing,
}

/// Async trait for sources of complete telemetry lines.
///
/// The transport assembles bytes into whole lines; the decode step only
/// ever sees one complete line per invocation. Implementations exist for
/// UART and for in-memory test doubles.
///
/// # `no_std` Compatibility
///
/// All implementations must be `#![no_std]` compatible with no heap
/// allocation.
pub trait LineSource {
    /// Wait for the next complete line and copy it into `buf`.
    ///
    /// Returns the number of bytes written. The line terminator is not
    /// included. A line longer than `buf` is discarded in full and
    /// reported as [`InputError::BufferOverflow`].
    fn next_line(&mut self, buf: &mut [u8]) -> impl Future<Output = Result<usize, InputError>>;

    /// Check if the transport is connected/ready.
    fn is_connected(&self) -> bool;
}
