//! Sampled waveforms and the segments they are built from
//!
//! A `Waveform` is a lock-step pair of time and sample vectors. Times are
//! monotonically non-decreasing; segment boundaries repeat the boundary
//! instant, so duplicate times are normal.

mod ops;
mod pwl;
mod synth;

pub use ops::combine;
pub use pwl::{write_pwl, write_pwl_to};
pub use synth::{synthesize, synthesize_with, SynthesisMode};

use serde::{Deserialize, Serialize};

use crate::error::{ModemError, ModemResult};

/// One constant-parameter stretch of sinusoid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveSegment {
    /// Length of the segment in seconds (> 0)
    pub duration: f64,
    /// Carrier frequency in Hz
    pub frequency: f64,
    /// Peak amplitude
    pub amplitude: f64,
    /// Phase shift in degrees, relative to the running phase
    pub phase_shift_deg: f64,
}

impl WaveSegment {
    pub fn new(duration: f64, frequency: f64, amplitude: f64, phase_shift_deg: f64) -> Self {
        Self {
            duration,
            frequency,
            amplitude,
            phase_shift_deg,
        }
    }

    /// Reject non-finite fields and non-positive durations
    pub fn validate(&self) -> ModemResult<()> {
        if !(self.duration.is_finite() && self.duration > 0.0) {
            return Err(ModemError::invalid(format!(
                "segment duration must be positive, got {}",
                self.duration
            )));
        }
        if !self.frequency.is_finite()
            || !self.amplitude.is_finite()
            || !self.phase_shift_deg.is_finite()
        {
            return Err(ModemError::invalid("segment parameters must be finite"));
        }
        Ok(())
    }
}

/// Densely sampled signal: `samples[i]` is the value at `times[i]`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Waveform {
    times: Vec<f64>,
    samples: Vec<f64>,
}

impl Waveform {
    /// Pair up times and samples
    ///
    /// Fails if the lengths differ or the times ever decrease.
    pub fn new(times: Vec<f64>, samples: Vec<f64>) -> ModemResult<Self> {
        if times.len() != samples.len() {
            return Err(ModemError::invalid(format!(
                "times ({}) and samples ({}) differ in length",
                times.len(),
                samples.len()
            )));
        }
        if times.windows(2).any(|w| w[1] < w[0]) {
            return Err(ModemError::invalid("waveform times must be non-decreasing"));
        }
        Ok(Self { times, samples })
    }

    /// Construct without checking ordering; callers guarantee the invariants
    pub(crate) fn from_parts(times: Vec<f64>, samples: Vec<f64>) -> Self {
        debug_assert_eq!(times.len(), samples.len());
        Self { times, samples }
    }

    /// The single zero sample at t = 0 returned for an empty segment list
    pub fn sentinel() -> Self {
        Self::from_parts(vec![0.0], vec![0.0])
    }

    pub fn times(&self) -> &[f64] {
        &self.times
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn start_time(&self) -> Option<f64> {
        self.times.first().copied()
    }

    pub fn end_time(&self) -> Option<f64> {
        self.times.last().copied()
    }

    /// Elapsed time between the first and last sample
    pub fn duration(&self) -> f64 {
        match (self.start_time(), self.end_time()) {
            (Some(a), Some(b)) => b - a,
            _ => 0.0,
        }
    }

    /// Iterate over `(time, sample)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.times.iter().copied().zip(self.samples.iter().copied())
    }

    /// Same samples, every time shifted by `delay`
    pub fn delayed(&self, delay: f64) -> Self {
        Self::from_parts(
            self.times.iter().map(|t| t + delay).collect(),
            self.samples.clone(),
        )
    }

    /// Samples whose time falls in `[start, end)`
    pub fn slice_between(&self, start: f64, end: f64) -> (&[f64], &[f64]) {
        let lo = self.times.partition_point(|&t| t < start);
        let hi = self.times.partition_point(|&t| t < end);
        let hi = hi.max(lo);
        (&self.times[lo..hi], &self.samples[lo..hi])
    }

    /// Apply `f(index, sample)` to every sample, keeping the times
    pub fn map_samples(&self, mut f: impl FnMut(usize, f64) -> f64) -> Self {
        Self::from_parts(
            self.times.clone(),
            self.samples
                .iter()
                .enumerate()
                .map(|(i, &x)| f(i, x))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_length_mismatch() {
        assert!(Waveform::new(vec![0.0, 1.0], vec![0.0]).is_err());
    }

    #[test]
    fn test_new_rejects_decreasing_times() {
        assert!(Waveform::new(vec![0.0, 2.0, 1.0], vec![0.0; 3]).is_err());
    }

    #[test]
    fn test_duplicate_times_allowed() {
        let w = Waveform::new(vec![0.0, 1.0, 1.0, 2.0], vec![0.0, 1.0, -1.0, 0.0]).unwrap();
        assert_eq!(w.len(), 4);
        assert_eq!(w.duration(), 2.0);
    }

    #[test]
    fn test_delayed() {
        let w = Waveform::new(vec![0.0, 0.5], vec![1.0, 2.0]).unwrap();
        let d = w.delayed(0.25);
        assert_eq!(d.times(), &[0.25, 0.75]);
        assert_eq!(d.samples(), w.samples());
    }

    #[test]
    fn test_slice_between() {
        let w = Waveform::new(vec![0.0, 0.1, 0.2, 0.3], vec![0.0, 1.0, 2.0, 3.0]).unwrap();
        let (t, x) = w.slice_between(0.05, 0.25);
        assert_eq!(t, &[0.1, 0.2]);
        assert_eq!(x, &[1.0, 2.0]);
    }

    #[test]
    fn test_segment_validation() {
        assert!(WaveSegment::new(0.001, 1000.0, 1.0, 0.0).validate().is_ok());
        assert!(WaveSegment::new(-0.001, 1000.0, 1.0, 0.0).validate().is_err());
        assert!(WaveSegment::new(0.0, 1000.0, 1.0, 0.0).validate().is_err());
        assert!(WaveSegment::new(0.001, f64::NAN, 1.0, 0.0).validate().is_err());
    }
}
