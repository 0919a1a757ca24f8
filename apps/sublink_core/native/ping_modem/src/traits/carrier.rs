//! Carrier trait - Reference oscillator for correlation
//!
//! Waveforms are sampled on arbitrary (non-uniform) time grids, so the
//! oscillator is evaluated at an absolute time rather than stepped.

/// Reference carrier for I/Q correlation
pub trait Carrier: Send + Sync {
    /// Carrier frequency in Hz
    fn frequency(&self) -> f64;

    /// (cos, sin) of the carrier phase at time `t` (seconds)
    fn at(&self, t: f64) -> (f64, f64);

    /// Correlate samples against the carrier
    ///
    /// # Returns
    /// Tuple of (I, Q) = (Σ x·cos, Σ x·sin)
    fn correlate(&self, times: &[f64], samples: &[f64]) -> (f64, f64) {
        times
            .iter()
            .zip(samples)
            .fold((0.0, 0.0), |(i, q), (&t, &x)| {
                let (cos, sin) = self.at(t);
                (i + x * cos, q + x * sin)
            })
    }
}
