//! Frame and gate-flag types.

/// Classification of a gate-flag field's raw text.
///
/// The host transmits session flags as literal `0`/`1` text. Gating
/// decisions compare against these classifications rather than against raw
/// strings, which makes the asymmetric policy (paused must be `Zero`,
/// running must be `One`) an explicit rule instead of scattered string
/// comparisons.
///
/// Classification is an exact byte match with no trimming or case folding:
/// `b" 1"`, `b"01"` and the empty slice are all [`FlagText::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FlagText {
    /// The field was exactly `0`.
    Zero,
    /// The field was exactly `1`.
    One,
    /// Anything else, including a missing field.
    Other,
}

impl FlagText {
    /// Classify a raw flag field.
    #[inline]
    #[must_use]
    pub fn classify(text: &[u8]) -> Self {
        match text {
            b"0" => FlagText::Zero,
            b"1" => FlagText::One,
            _ => FlagText::Other,
        }
    }
}

/// One decoded telemetry update.
///
/// Frames are transient: one is produced per inbound line and consumed in
/// the same cycle. Decoding is total, so there is no invalid frame - a
/// garbled line simply decodes to zero g with [`FlagText::Other`] flags.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TelemetryFrame {
    /// Longitudinal acceleration in g, `0.0` when field 0 failed to parse.
    pub gforce: f32,
    /// Session-paused flag (field 1).
    pub paused: FlagText,
    /// Game-running flag (field 2).
    pub running: FlagText,
}

impl TelemetryFrame {
    /// A frame that keeps the gate closed: zero g, both flags unknown.
    #[must_use]
    pub const fn neutral() -> Self {
        Self {
            gforce: 0.0,
            paused: FlagText::Other,
            running: FlagText::Other,
        }
    }

    /// The g-force scaled to centi-g, rounded half away from zero.
    ///
    /// This integer is the domain value fed to the servo mapping; two
    /// decimal digits of precision survive the conversion. Values beyond
    /// the `i32` range saturate.
    #[inline]
    #[must_use]
    pub fn scaled_centi(&self) -> i32 {
        libm::roundf(self.gforce * 100.0) as i32
    }
}
