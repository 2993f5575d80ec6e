//! PWM servo driver.
//!
//! Standard hobby servos expect a 50 Hz pulse train whose width selects
//! the position: 500 us at 0 degrees through 2500 us at 180 degrees for
//! the gauge's servos. The PWM slice is clocked at 1 MHz so compare
//! values are pulse widths in microseconds.

use embassy_rp::pwm::{Config, Pwm};
use fixed::traits::ToFixed;
use servo_core::{ActuatorSink, OutputError};

/// PWM frame period in microseconds (50 Hz).
const SERVO_PERIOD_US: u32 = 20_000;

/// System clock divider producing a 1 MHz PWM tick from the 125 MHz core.
const SERVO_CLK_DIVIDER: u32 = 125;

/// Physically reachable servo span in degrees.
const SERVO_SWEEP_DEGREES: i32 = 180;

/// A hobby servo on channel A of one PWM slice.
///
/// The commanded angle is saturated to the physical 0-180 degree sweep at
/// the duty conversion. That is this driver's hardware limit and is
/// independent of whether the gauge mapping clamps: an extrapolated
/// command like 240 degrees simply pins the horn at 180.
pub struct PwmServo<'d> {
    pwm: Pwm<'d>,
    cfg: Config,
    min_pulse_us: u32,
    max_pulse_us: u32,
}

impl<'d> PwmServo<'d> {
    /// Take over a PWM channel and configure it for servo timing.
    ///
    /// `min_pulse_us`/`max_pulse_us` are the pulse widths at 0 and 180
    /// degrees; 500/2500 suits most hobby servos.
    pub fn new(pwm: Pwm<'d>, min_pulse_us: u32, max_pulse_us: u32) -> Self {
        let mut cfg = Config::default();
        cfg.divider = SERVO_CLK_DIVIDER.to_fixed();
        cfg.top = (SERVO_PERIOD_US - 1) as u16;
        cfg.compare_a = 0;

        let mut servo = Self {
            pwm,
            cfg,
            min_pulse_us,
            max_pulse_us,
        };
        servo.pwm.set_config(&servo.cfg);
        servo
    }

    /// Command the servo position in degrees, saturating to the sweep.
    pub fn set_degrees(&mut self, angle: i32) {
        let clamped = angle.clamp(0, SERVO_SWEEP_DEGREES) as u32;
        let span = self.max_pulse_us - self.min_pulse_us;
        let pulse = self.min_pulse_us + clamped * span / SERVO_SWEEP_DEGREES as u32;

        self.cfg.compare_a = pulse as u16;
        self.pwm.set_config(&self.cfg);
    }

    /// Stop generating pulses; the servo relaxes and holds no position.
    pub fn disable(&mut self) {
        self.cfg.compare_a = 0;
        self.pwm.set_config(&self.cfg);
    }
}

impl<'d> ActuatorSink for PwmServo<'d> {
    async fn set_angle(&mut self, angle: i32) -> Result<(), OutputError> {
        self.set_degrees(angle);
        Ok(())
    }

    fn is_ready(&self) -> bool {
        true
    }
}
