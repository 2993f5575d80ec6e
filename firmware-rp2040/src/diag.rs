//! Diagnostic sink over defmt RTT.

use servo_core::{DiagError, DiagEvent, DiagSink};

/// Emits each decode cycle's values to the defmt log.
///
/// RTT writes are non-blocking; with no debugger attached the events
/// simply vanish, which is exactly the contract the bridge expects.
pub struct DefmtDiag;

impl DiagSink for DefmtDiag {
    async fn emit(&mut self, event: &DiagEvent<'_>) -> Result<(), DiagError> {
        defmt::debug!(
            "rx {=[u8]:a} paused={} running={} gforce={=f32} angle={=i32}",
            event.raw,
            event.paused,
            event.running,
            event.gforce,
            event.angle,
        );
        Ok(())
    }
}
