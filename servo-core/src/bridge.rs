//! ServoBridge: drives the actuators from a line transport.

use telemetry_proto::{parse_frame, MAX_LINE_LENGTH};

use crate::diag::{DiagEvent, DiagSink};
use crate::input::{InputError, LineSource};
use crate::mapping::{target_angle, ServoMapping, DEFAULT_MAPPING, REST_ANGLE};
use crate::output::{ActuatorSink, OutputError};

/// Per-line decode-and-actuate driver.
///
/// Owns the transport, the actuator output (typically a
/// [`ServoPair`](crate::output::ServoPair)), the diagnostic sink, the line
/// buffer, and the last angle written. One call to [`process_one`] is one
/// decode cycle: read a line, decode it, gate and map, write the angle,
/// emit a diagnostic event.
///
/// # Error Handling
///
/// Decoding never fails; only the transport and the actuators can. On a
/// transport error the bridge drives the actuators to [`REST_ANGLE`] so a
/// dead link cannot hold the last commanded angle. Diagnostic failures
/// are ignored.
///
/// [`process_one`]: ServoBridge::process_one
pub struct ServoBridge<I, O, D> {
    input: I,
    output: O,
    diag: D,
    mapping: ServoMapping,
    line: [u8; MAX_LINE_LENGTH],
    last_angle: i32,
}

impl<I: LineSource, O: ActuatorSink, D: DiagSink> ServoBridge<I, O, D> {
    /// Create a bridge with the default gauge calibration.
    pub fn new(input: I, output: O, diag: D) -> Self {
        Self::with_mapping(input, output, diag, DEFAULT_MAPPING)
    }

    /// Create a bridge with a custom mapping.
    pub fn with_mapping(input: I, output: O, diag: D, mapping: ServoMapping) -> Self {
        Self {
            input,
            output,
            diag,
            mapping,
            line: [0; MAX_LINE_LENGTH],
            last_angle: REST_ANGLE,
        }
    }

    /// Run the bridge, decoding lines indefinitely.
    ///
    /// This method never returns under normal operation.
    pub async fn run(&mut self) -> ! {
        loop {
            let _ = self.process_one().await;
        }
    }

    /// Process a single line and drive the actuators.
    ///
    /// Returns the result of the cycle for testing purposes.
    pub async fn process_one(&mut self) -> Result<(), BridgeError> {
        let len = match self.input.next_line(&mut self.line).await {
            Ok(len) => len,
            Err(e) => {
                // Return to rest so a dead link can't hold the last angle
                self.last_angle = REST_ANGLE;
                let _ = self.output.set_angle(REST_ANGLE).await;
                return Err(BridgeError::Input(e));
            }
        };

        let raw = &self.line[..len];
        let frame = parse_frame(raw);
        let angle = target_angle(&frame, &self.mapping);

        self.last_angle = angle;
        self.output
            .set_angle(angle)
            .await
            .map_err(BridgeError::Output)?;

        let _ = self
            .diag
            .emit(&DiagEvent {
                raw,
                paused: frame.paused,
                running: frame.running,
                gforce: frame.gforce,
                angle,
            })
            .await;

        Ok(())
    }

    /// The angle most recently written to the actuators.
    pub fn last_angle(&self) -> i32 {
        self.last_angle
    }

    /// Get a reference to the line transport.
    pub fn input(&self) -> &I {
        &self.input
    }

    /// Get a mutable reference to the line transport.
    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    /// Get a reference to the actuator output.
    pub fn output(&self) -> &O {
        &self.output
    }

    /// Get a mutable reference to the actuator output.
    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    /// Decompose the bridge into its transport, output and diagnostic
    /// components.
    pub fn into_parts(self) -> (I, O, D) {
        (self.input, self.output, self.diag)
    }
}

/// Error type for bridge operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BridgeError {
    /// Error from the line transport.
    Input(InputError),
    /// Error from the actuator output.
    Output(OutputError),
}
