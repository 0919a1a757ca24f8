//! Single-receiver propagation through a moving medium
//!
//! Every emitted sample is remapped to the instant it reaches the receiver.
//! At emission time t the transmitter sits at `relpos(t)` relative to the
//! receiver; the wavefront leaves it at `wave_speed` in the medium frame and
//! closes on the (moving) receiver at `|v_wave − v_rx|`. Amplitude falls off
//! as 1/r with the separation at emission.

use ping_modem::Waveform;
use tracing::debug;

use crate::error::{ChannelError, ChannelResult};
use crate::kinematics::Platform;

/// Separations below this count as coincident platforms (m)
pub const MIN_SEPARATION: f64 = 1e-9;

pub(crate) fn check_wave_speed(wave_speed: f64) -> ChannelResult<()> {
    if !(wave_speed.is_finite() && wave_speed > 0.0) {
        return Err(ChannelError::invalid(format!(
            "wave speed must be positive, got {}",
            wave_speed
        )));
    }
    Ok(())
}

/// Received copy of `input` as heard by `rx`
///
/// # Errors
/// - `InvalidParameter` for a non-positive wave speed, or when the platforms
///   outrun the wave so that arrivals would go backwards in time
/// - `DegenerateGeometry` when the platforms coincide at some emission time
pub fn propagate(
    input: &Waveform,
    tx: &Platform,
    rx: &Platform,
    wave_speed: f64,
) -> ChannelResult<Waveform> {
    check_wave_speed(wave_speed)?;

    let relpos0 = tx.position - rx.position;
    let relvel = tx.velocity - rx.velocity;

    let mut times = Vec::with_capacity(input.len());
    let mut samples = Vec::with_capacity(input.len());

    for (t, x) in input.iter() {
        let relpos = relpos0 + relvel * t;
        let distance = relpos.norm();
        if !(distance.is_finite() && distance > MIN_SEPARATION) {
            return Err(ChannelError::DegenerateGeometry { time: t, distance });
        }

        let wave_velocity = relpos * (-wave_speed / distance);
        let closing = (wave_velocity - rx.velocity).norm();
        if closing.is_nan() || closing <= 0.0 {
            return Err(ChannelError::DegenerateGeometry { time: t, distance });
        }

        let arrival = t + distance / closing;
        if let Some(&prev) = times.last() {
            if arrival < prev {
                return Err(ChannelError::invalid(format!(
                    "arrivals reverse at t = {}: platforms outrun the wave",
                    t
                )));
            }
        }
        times.push(arrival);
        samples.push(x / distance);
    }

    debug!(
        samples = times.len(),
        first_arrival = times.first().copied(),
        distance0 = relpos0.norm(),
        "propagated waveform"
    );
    Ok(Waveform::new(times, samples)?)
}
