//! FSK detection by per-candidate correlation energy

use tracing::debug;

use crate::bits::Bit;
use crate::carriers::ReferenceTone;
use crate::error::{ModemError, ModemResult};
use crate::timing::FixedTiming;
use crate::traits::{Carrier, SymbolTiming};
use crate::waveform::Waveform;

/// Candidate with the largest I² + Q² over the given samples
fn strongest(times: &[f64], samples: &[f64], candidates: &[f64]) -> Option<f64> {
    candidates
        .iter()
        .map(|&f| {
            let (i, q) = ReferenceTone::new(f).correlate(times, samples);
            (f, i * i + q * q)
        })
        .fold(None, |best: Option<(f64, f64)>, (f, e)| match best {
            Some((_, be)) if be >= e => best,
            _ => Some((f, e)),
        })
        .map(|(f, _)| f)
}

/// Dominant candidate frequency in every complete bit interval
///
/// Uses the same windows as the phase detector but does not difference,
/// so one label comes out per interval. Empty if no interval fits or no
/// candidates are given.
pub fn decode_frequencies(wave: &Waveform, timing: &FixedTiming, candidates: &[f64]) -> Vec<f64> {
    let (Some(t0), Some(t_last)) = (wave.start_time(), wave.end_time()) else {
        return Vec::new();
    };
    let half = timing.window_half_width();

    let mut labels = Vec::new();
    for k in 0.. {
        let center = timing.window_center(t0, k);
        if center + half > t_last {
            break;
        }
        let (times, samples) = wave.slice_between(center - half, center + half);
        match strongest(times, samples, candidates) {
            Some(f) => labels.push(f),
            None => break,
        }
    }
    debug!(intervals = labels.len(), candidates = candidates.len(), "decoded frequencies");
    labels
}

/// Dominant candidate over the first `span` seconds
///
/// # Errors
/// - `InvalidParameter` for an empty candidate list
/// - `InsufficientData` if no samples fall inside the span
pub fn dominant_frequency(wave: &Waveform, candidates: &[f64], span: f64) -> ModemResult<f64> {
    if candidates.is_empty() {
        return Err(ModemError::invalid("no candidate frequencies"));
    }
    let t0 = wave.start_time().unwrap_or(0.0);
    let (times, samples) = wave.slice_between(t0, t0 + span);
    if times.is_empty() {
        return Err(ModemError::InsufficientData {
            needed: 1,
            available: 0,
        });
    }
    strongest(times, samples, candidates).ok_or_else(|| ModemError::invalid("no candidate frequencies"))
}

/// Label each frequency with the bit whose tone it is closer to
pub fn frequencies_to_bits(frequencies: &[f64], freq0: f64, freq1: f64) -> Vec<Bit> {
    frequencies
        .iter()
        .map(|&f| {
            if (f - freq0).abs() <= (f - freq1).abs() {
                Bit::Zero
            } else {
                Bit::One
            }
        })
        .collect()
}
