//! Reference tone
//!
//! Evaluates cos/sin of a fixed-frequency carrier at absolute times, for
//! correlating against waveforms sampled on irregular grids.

use crate::traits::Carrier;
use std::f64::consts::PI;

/// Fixed-frequency reference oscillator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceTone {
    freq_hz: f64,
    omega: f64,
}

impl ReferenceTone {
    /// Create a reference at `freq_hz`
    pub fn new(freq_hz: f64) -> Self {
        Self {
            freq_hz,
            omega: 2.0 * PI * freq_hz,
        }
    }

    /// Angular frequency in rad/s
    pub fn omega(&self) -> f64 {
        self.omega
    }
}

impl Carrier for ReferenceTone {
    fn frequency(&self) -> f64 {
        self.freq_hz
    }

    fn at(&self, t: f64) -> (f64, f64) {
        let (sin, cos) = (self.omega * t).sin_cos();
        (cos, sin)
    }
}
