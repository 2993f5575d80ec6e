//! UART line assembly.
//!
//! Reads bytes from the UART and hands the bridge one complete line per
//! call, terminator stripped. The host terminates every telemetry update
//! with `\n`; a CR from CRLF hosts is dropped.

use embassy_rp::uart::{Async, Error as UartError, UartRx};
use servo_core::{InputError, LineSource};

/// Convert UART errors to [`InputError`].
///
/// This is a helper function instead of a `From` impl to avoid orphan
/// rule issues (both `UartError` and `InputError` are defined in external
/// crates).
#[inline]
fn uart_error_to_input_error(e: UartError) -> InputError {
    match e {
        UartError::Framing => InputError::Framing,
        UartError::Overrun => InputError::BufferOverflow,
        _ => InputError::Io,
    }
}

/// UART-based line source for telemetry input.
pub struct UartLineSource<'d> {
    rx: UartRx<'d, Async>,
}

impl<'d> UartLineSource<'d> {
    /// Create a new line source from the given UART receiver.
    #[must_use]
    pub fn new(rx: UartRx<'d, Async>) -> Self {
        Self { rx }
    }
}

impl<'d> LineSource for UartLineSource<'d> {
    /// Read bytes until a newline is found, filling the caller's buffer.
    ///
    /// If a line exceeds the buffer capacity, the rest of the line is
    /// discarded to resynchronize on the next line boundary.
    async fn next_line(&mut self, buf: &mut [u8]) -> Result<usize, InputError> {
        let mut len = 0;

        loop {
            let mut byte = [0u8; 1];
            self.rx
                .read(&mut byte)
                .await
                .map_err(uart_error_to_input_error)?;

            match byte[0] {
                b'\n' => return Ok(len),
                b'\r' => {}
                b => {
                    if len == buf.len() {
                        // Buffer overflow - discard rest of line until newline
                        loop {
                            self.rx
                                .read(&mut byte)
                                .await
                                .map_err(uart_error_to_input_error)?;
                            if byte[0] == b'\n' {
                                break;
                            }
                        }
                        return Err(InputError::BufferOverflow);
                    }
                    buf[len] = b;
                    len += 1;
                }
            }
        }
    }

    fn is_connected(&self) -> bool {
        // UART is always "connected" if we have the peripheral
        true
    }
}
