//! Superposition of waveforms sampled on different grids

use super::Waveform;

/// Linear interpolation of `wave` at `t`, `None` outside its time span
fn interpolate(wave: &Waveform, t: f64) -> Option<f64> {
    let times = wave.times();
    let samples = wave.samples();
    let (first, last) = (*times.first()?, *times.last()?);
    if t < first || t > last {
        return None;
    }

    let idx = times.partition_point(|&x| x < t);
    if times[idx] == t {
        return Some(samples[idx]);
    }
    let (t0, t1) = (times[idx - 1], times[idx]);
    let (x0, x1) = (samples[idx - 1], samples[idx]);
    Some(x0 + (x1 - x0) * (t - t0) / (t1 - t0))
}

/// Add two waveforms together
///
/// The output grid is the ordered merge of both inputs' times. At each time,
/// a waveform contributes its own sample or, between its samples, a linear
/// interpolation; outside its span it contributes nothing. Shared instants
/// appear once. The order of the arguments does not matter.
pub fn combine(a: &Waveform, b: &Waveform) -> Waveform {
    let (ta, xa) = (a.times(), a.samples());
    let (tb, xb) = (b.times(), b.samples());
    let mut times = Vec::with_capacity(ta.len() + tb.len());
    let mut samples = Vec::with_capacity(ta.len() + tb.len());
    let (mut i, mut j) = (0, 0);

    while i < ta.len() || j < tb.len() {
        let take_a = j == tb.len() || (i < ta.len() && ta[i] < tb[j]);
        let take_b = i == ta.len() || (j < tb.len() && tb[j] < ta[i]);

        if take_a {
            times.push(ta[i]);
            samples.push(xa[i] + interpolate(b, ta[i]).unwrap_or(0.0));
            i += 1;
        } else if take_b {
            times.push(tb[j]);
            samples.push(xb[j] + interpolate(a, tb[j]).unwrap_or(0.0));
            j += 1;
        } else {
            times.push(ta[i]);
            samples.push(xa[i] + xb[j]);
            i += 1;
            j += 1;
        }
    }

    Waveform::from_parts(times, samples)
}
