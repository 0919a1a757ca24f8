//! Windowed I/Q correlation phase detector
//!
//! For each bit interval k the detector correlates the samples within
//! `3ΔT/8` of the interval centre against a reference carrier and takes
//! φₖ = atan2(Q, I). It emits φₖ − φₖ₋₁ wrapped to (−π, π]. The loop stops
//! at the first window that would run past the last sample.

use tracing::{debug, trace};

use crate::carriers::ReferenceTone;
use crate::error::ModemResult;
use crate::timing::FixedTiming;
use crate::traits::{Carrier, PhaseDetector, SymbolTiming};
use crate::utils::{phase, wrap_to_pi};
use crate::waveform::Waveform;

/// Fourier correlation detector composed of a carrier and a timing
pub struct FourierDetector<K, T>
where
    K: Carrier,
    T: SymbolTiming,
{
    carrier: K,
    timing: T,
}

impl FourierDetector<ReferenceTone, FixedTiming> {
    /// Detector for a `frequency` Hz carrier keyed at `bit_rate`
    pub fn for_carrier(frequency: f64, bit_rate: f64) -> ModemResult<Self> {
        Ok(Self::new(
            ReferenceTone::new(frequency),
            FixedTiming::from_bit_rate(bit_rate)?,
        ))
    }
}

impl<K, T> FourierDetector<K, T>
where
    K: Carrier,
    T: SymbolTiming,
{
    pub fn new(carrier: K, timing: T) -> Self {
        Self { carrier, timing }
    }

    /// Absolute phase of every complete interval, radians
    pub fn window_phases(&self, wave: &Waveform) -> Vec<f64> {
        let (Some(t0), Some(t_last)) = (wave.start_time(), wave.end_time()) else {
            return Vec::new();
        };
        let half = self.timing.window_half_width();

        let mut phases = Vec::new();
        for k in 0.. {
            let center = self.timing.window_center(t0, k);
            if center + half > t_last {
                break;
            }
            let (times, samples) = wave.slice_between(center - half, center + half);
            let (i, q) = self.carrier.correlate(times, samples);
            trace!(window = k, center, i, q, "correlated window");
            phases.push(phase(i, q));
        }
        phases
    }
}

impl<K, T> PhaseDetector for FourierDetector<K, T>
where
    K: Carrier,
    T: SymbolTiming,
{
    fn phase_shifts(&self, wave: &Waveform) -> Vec<f64> {
        let phases = self.window_phases(wave);
        if phases.len() < 2 {
            debug!(
                windows = phases.len(),
                duration = wave.duration(),
                "waveform too short for a phase difference"
            );
            return Vec::new();
        }
        phases.windows(2).map(|w| wrap_to_pi(w[1] - w[0])).collect()
    }
}
