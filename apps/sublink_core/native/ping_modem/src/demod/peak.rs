//! Peak-timing phase detector
//!
//! Locates one carrier peak per bit interval and measures how far it has
//! drifted from where the previous interval's peak predicts it should be.
//! The drift, as a fraction of the carrier period, is bucketed to the
//! nearest quarter cycle (tolerance `period/8` either side).
//!
//! Noise moves threshold crossings directly, so this is markedly less robust
//! than [`FourierDetector`](super::FourierDetector).

use std::f64::consts::FRAC_PI_2;

use tracing::{debug, trace};

use crate::common::DEFAULT_PEAK_ERROR;
use crate::error::{ModemError, ModemResult};
use crate::timing::FixedTiming;
use crate::traits::{PhaseDetector, SymbolTiming};
use crate::utils::wrap_to_pi;
use crate::waveform::Waveform;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeakTracker {
    period: f64,
    timing: FixedTiming,
    threshold: f64,
}

impl PeakTracker {
    /// Tracker for a `frequency` Hz carrier of peak `amplitude`
    ///
    /// A sample counts as a peak once it exceeds `amplitude − error`.
    pub fn new(frequency: f64, bit_rate: f64, amplitude: f64, error: f64) -> ModemResult<Self> {
        if !(frequency.is_finite() && frequency > 0.0) {
            return Err(ModemError::invalid(format!(
                "carrier frequency must be positive, got {}",
                frequency
            )));
        }
        Ok(Self {
            period: 1.0 / frequency,
            timing: FixedTiming::from_bit_rate(bit_rate)?,
            threshold: amplitude - error,
        })
    }

    /// Tracker with the default error margin
    pub fn with_default_error(frequency: f64, bit_rate: f64, amplitude: f64) -> ModemResult<Self> {
        Self::new(frequency, bit_rate, amplitude, DEFAULT_PEAK_ERROR)
    }

    /// Time of the first rising threshold crossing in `[start, start + period)`
    ///
    /// Falls back to the largest sample when nothing crosses; `None` if the
    /// sub-window holds no samples at all.
    fn locate_peak(&self, wave: &Waveform, start: f64) -> Option<f64> {
        let (times, samples) = wave.slice_between(start, start + self.period);
        let crossing = (1..samples.len())
            .find(|&i| samples[i] > self.threshold && samples[i - 1] <= self.threshold);
        match crossing {
            Some(i) => Some(times[i]),
            None => samples
                .iter()
                .enumerate()
                .max_by(|a, b| a.1.total_cmp(b.1))
                .map(|(i, _)| times[i]),
        }
    }
}

impl PhaseDetector for PeakTracker {
    fn phase_shifts(&self, wave: &Waveform) -> Vec<f64> {
        let (Some(t0), Some(t_last)) = (wave.start_time(), wave.end_time()) else {
            return Vec::new();
        };
        let interval = self.timing.interval();
        let cycles_per_interval = (interval / self.period).round();

        let Some(mut reference) = self.locate_peak(wave, self.timing.window_center(t0, 0)) else {
            debug!("no samples in the reference window");
            return Vec::new();
        };

        let mut shifts = Vec::new();
        for k in 1.. {
            let start = self.timing.window_center(t0, k);
            if start + self.period >= t_last {
                break;
            }
            let Some(actual) = self.locate_peak(wave, start) else {
                break;
            };
            let expected = reference + cycles_per_interval * self.period;
            let drift = (actual - expected).rem_euclid(self.period);
            let quarter = (4.0 * drift / self.period).round() % 4.0;
            trace!(interval = k, drift, quarter, "peak drift");
            shifts.push(wrap_to_pi(quarter * FRAC_PI_2));
            reference = actual;
        }

        if shifts.is_empty() {
            debug!(duration = wave.duration(), "waveform too short for peak tracking");
        }
        shifts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demod::phase_to_symbol;
    use crate::waveform::{synthesize, WaveSegment};

    fn wave(shifts: &[f64]) -> Waveform {
        let segs: Vec<WaveSegment> = shifts
            .iter()
            .map(|&s| WaveSegment::new(0.001, 20_000.0, 1.0, s))
            .collect();
        synthesize(&segs, 1000).unwrap()
    }

    #[test]
    fn test_tracks_quarter_cycle_steps() {
        let tracker = PeakTracker::with_default_error(20_000.0, 1000.0, 1.0).unwrap();
        let shifts = tracker.phase_shifts(&wave(&[0.0, 90.0, 180.0, 270.0, 0.0]));
        let degrees: Vec<f64> = shifts
            .iter()
            .map(|s| s.to_degrees().rem_euclid(360.0).round())
            .collect();
        assert_eq!(degrees, vec![270.0, 180.0, 90.0, 0.0]);
        let symbols: Vec<u8> = shifts.iter().map(|s| phase_to_symbol(s.to_degrees())).collect();
        assert_eq!(symbols, vec![1, 2, 3, 0]);
    }

    #[test]
    fn test_constant_phase_gives_zero() {
        let tracker = PeakTracker::with_default_error(20_000.0, 1000.0, 1.0).unwrap();
        let shifts = tracker.phase_shifts(&wave(&[0.0; 4]));
        assert_eq!(shifts.len(), 3);
        assert!(shifts.iter().all(|s| s.abs() < 1e-12));
    }

    #[test]
    fn test_falls_back_to_maximum_below_threshold() {
        // amplitude 1 never exceeds a threshold of 1.4
        let tracker = PeakTracker::new(20_000.0, 1000.0, 1.5, 0.1).unwrap();
        let shifts = tracker.phase_shifts(&wave(&[0.0, 180.0, 0.0]));
        let degrees: Vec<f64> = shifts
            .iter()
            .map(|s| s.to_degrees().rem_euclid(360.0).round())
            .collect();
        assert_eq!(degrees, vec![180.0, 0.0]);
    }

    #[test]
    fn test_short_and_invalid() {
        let tracker = PeakTracker::with_default_error(20_000.0, 1000.0, 1.0).unwrap();
        assert!(tracker.phase_shifts(&Waveform::default()).is_empty());
        assert!(tracker.phase_shifts(&wave(&[0.0])).is_empty());
        assert!(PeakTracker::with_default_error(0.0, 1000.0, 1.0).is_err());
        assert!(PeakTracker::with_default_error(20_000.0, -1.0, 1.0).is_err());
    }
}
