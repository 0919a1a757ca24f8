//! PhaseDetector trait - Per-interval differential phase measurement

use crate::waveform::Waveform;

/// Recovers the phase change between consecutive bit intervals
///
/// Both detectors report in the same convention: the measured difference is
/// the negated transmit increment, in radians.
pub trait PhaseDetector {
    /// One value per interval after the first; empty if the waveform is
    /// too short for two windows
    fn phase_shifts(&self, wave: &Waveform) -> Vec<f64>;
}
