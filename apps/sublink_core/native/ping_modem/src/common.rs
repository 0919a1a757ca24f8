//! Shared reference constants for the acoustic ping modem
//!
//! All quantities are SI: seconds, hertz, metres, metres per second.

/// Speed of sound in sea water (m/s)
pub const SPEED_OF_SOUND_WATER: f64 = 1480.0;

/// Samples generated for each wave segment
pub const DEFAULT_SAMPLES_PER_SEGMENT: usize = 1000;

/// Relative phase between differing bits for binary DPSK (degrees)
pub const DEFAULT_PSK_PHASE_DEG: f64 = 180.0;

/// Relative phase increments for the symbols 00, 01, 10, 11 (degrees)
pub const DEFAULT_QPSK_PHASES_DEG: [f64; 4] = [0.0, 90.0, 180.0, 270.0];

/// Fraction of the bit interval on each side of the centre that the
/// correlation window covers
pub const WINDOW_HALF_WIDTH_FRACTION: f64 = 3.0 / 8.0;

/// Distance below the nominal amplitude that still counts as a peak
pub const DEFAULT_PEAK_ERROR: f64 = 0.1;

/// Span of the single-shot phase and frequency measurements (s)
pub const DEFAULT_PHASE_SPAN: f64 = 0.001;
