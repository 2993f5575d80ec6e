//! G-force-to-angle mapping and the gating policy.
//!
//! The host reports longitudinal acceleration in g; the gauge sweeps a
//! servo across 0-180 degrees. The map is a fixed linear interpolation
//! from centi-g onto degrees, enabled only while the session is live.

use telemetry_proto::{FlagText, TelemetryFrame};

/// Servo angle commanded whenever gating disables tracking.
pub const REST_ANGLE: i32 = 0;

/// Linear mapping configuration from centi-g onto servo degrees.
///
/// Customize at compile time by creating your own const.
///
/// Invariant: `gforce_max > gforce_min`.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ServoMapping {
    /// Domain floor in centi-g (maps to `angle_min`).
    pub gforce_min: i32,
    /// Domain ceiling in centi-g (maps to `angle_max`).
    pub gforce_max: i32,
    /// Output angle at the domain floor, in degrees.
    pub angle_min: i32,
    /// Output angle at the domain ceiling, in degrees.
    pub angle_max: i32,
    /// Clamp the output to `[angle_min, angle_max]`.
    ///
    /// Off by default: out-of-domain input extrapolates linearly and the
    /// servo driver's own hardware limits decide what to do with the
    /// result.
    pub clamp: bool,
}

/// Default gauge calibration: -15 g..+30 g across the full servo sweep.
pub const DEFAULT_MAPPING: ServoMapping = ServoMapping {
    gforce_min: -1500,
    gforce_max: 3000,
    angle_min: 0,
    angle_max: 180,
    clamp: false,
};

impl ServoMapping {
    /// Map a scaled signal (centi-g) to a servo angle in degrees.
    ///
    /// Standard integer linear interpolation with truncating division,
    /// computed in `i64` so no `i32` input can overflow an intermediate.
    #[inline]
    #[must_use]
    pub fn angle_for(&self, centi: i32) -> i32 {
        let in_span = (self.gforce_max - self.gforce_min) as i64;
        let out_span = (self.angle_max - self.angle_min) as i64;
        let angle =
            (centi as i64 - self.gforce_min as i64) * out_span / in_span + self.angle_min as i64;

        let angle = if self.clamp {
            angle.clamp(self.angle_min as i64, self.angle_max as i64)
        } else {
            angle
        };

        angle as i32
    }
}

/// Gating policy: actuation tracks the signal only while the session is
/// live.
///
/// The comparison is deliberately asymmetric: the paused flag must read
/// exactly `0` and the running flag exactly `1`. Any other combination,
/// including missing fields, keeps the gate closed.
#[inline]
#[must_use]
pub fn gate_open(paused: FlagText, running: FlagText) -> bool {
    paused == FlagText::Zero && running == FlagText::One
}

/// Compute the target angle for one decoded frame.
///
/// Gate closed -> [`REST_ANGLE`], regardless of the signal value.
#[inline]
#[must_use]
pub fn target_angle(frame: &TelemetryFrame, mapping: &ServoMapping) -> i32 {
    if gate_open(frame.paused, frame.running) {
        mapping.angle_for(frame.scaled_centi())
    } else {
        REST_ANGLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use telemetry_proto::parse_frame;

    #[test]
    fn test_map_domain_floor() {
        assert_eq!(DEFAULT_MAPPING.angle_for(-1500), 0);
    }

    #[test]
    fn test_map_domain_ceiling() {
        assert_eq!(DEFAULT_MAPPING.angle_for(3000), 180);
    }

    #[test]
    fn test_map_midpoint() {
        assert_eq!(DEFAULT_MAPPING.angle_for(750), 90);
    }

    #[test]
    fn test_map_is_exactly_linear() {
        assert_eq!(DEFAULT_MAPPING.angle_for(1500), 120);
        assert_eq!(DEFAULT_MAPPING.angle_for(0), 60);
    }

    #[test]
    fn test_unclamped_extrapolation_leaves_nominal_range() {
        // The default mapping intentionally does not clamp: input beyond
        // the domain drives the angle outside [0, 180] and the servo
        // driver's hardware limits take over.
        assert_eq!(DEFAULT_MAPPING.angle_for(4500), 240);
        assert_eq!(DEFAULT_MAPPING.angle_for(-3000), -60);
    }

    #[test]
    fn test_clamped_mapping_saturates() {
        let clamped = ServoMapping {
            clamp: true,
            ..DEFAULT_MAPPING
        };
        assert_eq!(clamped.angle_for(4500), 180);
        assert_eq!(clamped.angle_for(-3000), 0);
        assert_eq!(clamped.angle_for(750), 90);
    }

    #[test]
    fn test_extreme_input_does_not_overflow() {
        let _ = DEFAULT_MAPPING.angle_for(i32::MAX);
        let _ = DEFAULT_MAPPING.angle_for(i32::MIN);
    }

    #[test]
    fn test_gate_truth_table() {
        assert!(gate_open(FlagText::Zero, FlagText::One));

        assert!(!gate_open(FlagText::One, FlagText::One));
        assert!(!gate_open(FlagText::Zero, FlagText::Zero));
        assert!(!gate_open(FlagText::One, FlagText::Zero));
        assert!(!gate_open(FlagText::Other, FlagText::One));
        assert!(!gate_open(FlagText::Zero, FlagText::Other));
        assert!(!gate_open(FlagText::Other, FlagText::Other));
    }

    #[test]
    fn test_closed_gate_rests_regardless_of_signal() {
        let frame = parse_frame(b"30.00;1;1");
        assert_eq!(target_angle(&frame, &DEFAULT_MAPPING), REST_ANGLE);

        let frame = parse_frame(b"30.00;0;0");
        assert_eq!(target_angle(&frame, &DEFAULT_MAPPING), REST_ANGLE);
    }

    #[test]
    fn test_open_gate_tracks_signal() {
        let frame = parse_frame(b"15.00;0;1");
        assert_eq!(target_angle(&frame, &DEFAULT_MAPPING), 120);
    }
}
