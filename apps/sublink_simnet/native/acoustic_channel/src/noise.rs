//! Per-receiver Gaussian noise
//!
//! Each receiver owns a generator whose ChaCha8 stream is seeded from one
//! draw of a shared master RNG, so the set of streams depends only on the
//! master seed and the order receivers are created in. Samples come from the
//! Box-Muller transform, which yields them in pairs.

use std::f64::consts::TAU;

use ping_modem::Waveform;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Zero-mean additive noise for one receiver
pub struct NoiseGenerator {
    std_dev: f64,
    rng: ChaCha8Rng,
    /// Second half of the last Box-Muller pair, unscaled
    spare: Option<f64>,
}

impl NoiseGenerator {
    /// Generator with the given variance, in received-amplitude² units
    ///
    /// Negative variances are treated as zero.
    pub fn new(variance: f64, master: &mut ChaCha8Rng) -> Self {
        Self {
            std_dev: variance.max(0.0).sqrt(),
            rng: ChaCha8Rng::seed_from_u64(master.gen()),
            spare: None,
        }
    }

    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// Standard normal pair from two uniforms
    fn standard_pair(&mut self) -> (f64, f64) {
        // (0, 1] keeps the logarithm finite
        let u: f64 = 1.0 - self.rng.gen::<f64>();
        let angle = TAU * self.rng.gen::<f64>();
        let radius = (-2.0 * u.ln()).sqrt();
        (radius * angle.cos(), radius * angle.sin())
    }

    pub fn next_sample(&mut self) -> f64 {
        let z = match self.spare.take() {
            Some(z) => z,
            None => {
                let (z, spare) = self.standard_pair();
                self.spare = Some(spare);
                z
            }
        };
        z * self.std_dev
    }

    /// Add an independent draw to every sample
    ///
    /// Zero variance returns the input unchanged without consuming the RNG.
    pub fn apply(&mut self, wave: &Waveform) -> Waveform {
        if self.std_dev == 0.0 {
            return wave.clone();
        }
        wave.map_samples(|_, x| x + self.next_sample())
    }
}
