//! Actuator trait and the dual-write adapter.

use core::future::Future;

/// Error type for actuator operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputError {
    /// Hardware/communication I/O error.
    Io,
    /// Actuator not ready (e.g. PWM slice not configured).
    NotReady,
    /// Channel busy.
    Busy,
}

/// Async trait for servo actuator outputs.
///
/// Accepts an angle in whole degrees. Implementations own their pulse
/// timing and their own hardware limits; a commanded angle outside the
/// physically reachable span is the implementation's to saturate.
///
/// # `no_std` Compatibility
///
/// All implementations must be `#![no_std]` compatible with no heap
/// allocation.
pub trait ActuatorSink {
    /// Command the actuator to the given angle in degrees.
    fn set_angle(&mut self, angle: i32) -> impl Future<Output = Result<(), OutputError>>;

    /// Check if the actuator is ready to accept commands.
    fn is_ready(&self) -> bool;
}

/// Two actuators driven as one.
///
/// The gauge drives both servos with the identical angle every cycle; the
/// duplication is deliberate, not a failover mechanism. Both writes happen
/// even if the first fails, so the pair never splits within a cycle; the
/// first error is reported after both writes complete.
pub struct ServoPair<A, B> {
    first: A,
    second: B,
}

impl<A: ActuatorSink, B: ActuatorSink> ServoPair<A, B> {
    /// Create a pair from two actuator sinks.
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// Decompose the pair into its two sinks.
    pub fn into_parts(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A: ActuatorSink, B: ActuatorSink> ActuatorSink for ServoPair<A, B> {
    async fn set_angle(&mut self, angle: i32) -> Result<(), OutputError> {
        let first = self.first.set_angle(angle).await;
        let second = self.second.set_angle(angle).await;
        first.and(second)
    }

    fn is_ready(&self) -> bool {
        self.first.is_ready() && self.second.is_ready()
    }
}
