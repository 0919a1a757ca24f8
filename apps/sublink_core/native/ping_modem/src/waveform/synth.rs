//! Segment-by-segment sinusoid synthesis
//!
//! Each segment contributes `samples_per_segment` evenly spaced points that
//! span exactly its duration, starting at the last emitted time. A running
//! phase accumulator carries the relative phase shifts across segments, so
//! FM, PM/PSK, AM, and mixed modulation all come out of the same loop.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{WaveSegment, Waveform};
use crate::error::{ModemError, ModemResult};

/// How a segment's phase shift combines with the segments before it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SynthesisMode {
    /// `phase = (phase + shift) mod 360`
    #[default]
    Cumulative,
    /// The shift is the segment's absolute phase
    Absolute,
}

/// Synthesize with cumulative phase
pub fn synthesize(segments: &[WaveSegment], samples_per_segment: usize) -> ModemResult<Waveform> {
    synthesize_with(segments, samples_per_segment, SynthesisMode::Cumulative)
}

/// Stitch the segments into one waveform
///
/// The output always starts with a zero sample at t = 0; an empty segment
/// list yields only that sample. Consumers must tolerate it. With one sample
/// per segment that sample sits at the segment's end, so the elapsed time
/// still equals the summed durations.
pub fn synthesize_with(
    segments: &[WaveSegment],
    samples_per_segment: usize,
    mode: SynthesisMode,
) -> ModemResult<Waveform> {
    if samples_per_segment == 0 {
        return Err(ModemError::invalid("samples per segment must be positive"));
    }
    for seg in segments {
        seg.validate()?;
    }

    let total = 1 + segments.len() * samples_per_segment;
    let mut times = Vec::with_capacity(total);
    let mut samples = Vec::with_capacity(total);
    times.push(0.0);
    samples.push(0.0);

    let mut phase_deg = 0.0_f64;
    let mut start = 0.0_f64;

    for seg in segments {
        phase_deg = match mode {
            SynthesisMode::Cumulative => (phase_deg + seg.phase_shift_deg).rem_euclid(360.0),
            SynthesisMode::Absolute => seg.phase_shift_deg.rem_euclid(360.0),
        };
        let end = start + seg.duration;
        let step = if samples_per_segment > 1 {
            seg.duration / (samples_per_segment - 1) as f64
        } else {
            0.0
        };

        for i in 0..samples_per_segment {
            // the last sample always lands on the segment end, even when it
            // is the only one
            let t = if i + 1 == samples_per_segment {
                end
            } else {
                start + i as f64 * step
            };
            times.push(t);
            samples.push(seg.amplitude * (2.0 * PI * (seg.frequency * t + phase_deg / 360.0)).sin());
        }

        start = times[times.len() - 1];
    }

    debug!(
        segments = segments.len(),
        samples = times.len(),
        duration = start,
        "synthesized waveform"
    );

    Ok(Waveform::from_parts(times, samples))
}
