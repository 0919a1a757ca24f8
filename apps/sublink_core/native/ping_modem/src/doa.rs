//! Direction of arrival from a four-hydrophone square array
//!
//! Phases are carrier phase *leads*, ordered upper-left, upper-right,
//! bottom-right, bottom-left in the array's body frame: +y points along the
//! platform heading, +x to starboard, +z away from the array face. A
//! hydrophone closer to the source hears the wavefront first and so leads.
//!
//! The x and y components each average the two parallel baselines; z is
//! whatever is left of the unit length. Phase noise can push x² + y² past 1,
//! in which case z is clamped to 0 and the vector is left unnormalized.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::carriers::ReferenceTone;
use crate::error::{ModemError, ModemResult};
use crate::traits::Carrier;
use crate::utils::{phase, wrap_to_pi};
use crate::waveform::Waveform;

/// Unit-ish vector from the array toward the source
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DirectionVector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl DirectionVector {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Angle off the array's forward (+y) axis in the x-y plane, radians,
    /// positive to starboard
    pub fn bearing(&self) -> f64 {
        self.x.atan2(self.y)
    }
}

fn check_positive(name: &str, value: f64) -> ModemResult<()> {
    if !(value.is_finite() && value > 0.0) {
        return Err(ModemError::invalid(format!("{} must be positive, got {}", name, value)));
    }
    Ok(())
}

/// Estimate the arrival direction from four phase leads (radians)
///
/// # Arguments
/// * `speed` - Wave speed (m/s)
/// * `frequency` - Carrier frequency (Hz)
/// * `spacing` - Side of the square array (m)
/// * `phases` - Leads for upper-left, upper-right, bottom-right, bottom-left
pub fn estimate_doa(
    speed: f64,
    frequency: f64,
    spacing: f64,
    phases: [f64; 4],
) -> ModemResult<DirectionVector> {
    check_positive("wave speed", speed)?;
    check_positive("frequency", frequency)?;
    check_positive("array spacing", spacing)?;

    let [ul, ur, br, bl] = phases;
    let dx = wrap_to_pi(ur - ul) + wrap_to_pi(br - bl);
    let dy = wrap_to_pi(ul - bl) + wrap_to_pi(ur - br);

    let scale = speed / (4.0 * PI * spacing * frequency);
    let x = scale * dx;
    let y = scale * dy;
    let z = (1.0 - x * x - y * y).max(0.0).sqrt();

    debug!(x, y, z, "estimated direction of arrival");
    Ok(DirectionVector { x, y, z })
}

/// Phase lead of the carrier over the first `span` seconds of `wave`
///
/// # Errors
/// `InsufficientData` if no samples fall inside the span
pub fn hydrophone_phase(wave: &Waveform, frequency: f64, span: f64) -> ModemResult<f64> {
    let t0 = wave.start_time().unwrap_or(0.0);
    let (times, samples) = wave.slice_between(t0, t0 + span);
    if times.is_empty() {
        return Err(ModemError::InsufficientData {
            needed: 1,
            available: 0,
        });
    }
    let (i, q) = ReferenceTone::new(frequency).correlate(times, samples);
    Ok(-phase(i, q))
}

/// Measure each hydrophone's phase lead and estimate the direction
///
/// `waves` follows the same upper-left, upper-right, bottom-right,
/// bottom-left order as [`estimate_doa`].
pub fn signal_angle_detect(
    speed: f64,
    frequency: f64,
    spacing: f64,
    waves: [&Waveform; 4],
    span: f64,
) -> ModemResult<DirectionVector> {
    let mut phases = [0.0; 4];
    for (slot, wave) in phases.iter_mut().zip(waves) {
        *slot = hydrophone_phase(wave, frequency, span)?;
    }
    estimate_doa(speed, frequency, spacing, phases)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{DEFAULT_PHASE_SPAN, SPEED_OF_SOUND_WATER};
    use crate::waveform::{synthesize, WaveSegment};

    const FREQ: f64 = 30_000.0;
    const SPACING: f64 = 0.02;

    /// Ideal leads for a plane wave arriving from unit direction `u`
    fn ideal_phases(u: (f64, f64)) -> [f64; 4] {
        let k = 2.0 * PI * FREQ / SPEED_OF_SOUND_WATER;
        let h = SPACING / 2.0;
        [(-h, h), (h, h), (h, -h), (-h, -h)].map(|(px, py)| k * (px * u.0 + py * u.1))
    }

    #[test]
    fn test_equal_phases_point_straight_out() {
        let v = estimate_doa(SPEED_OF_SOUND_WATER, FREQ, SPACING, [0.7; 4]).unwrap();
        assert_eq!(v, DirectionVector::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_recovers_plane_wave_direction() {
        for (ux, uy) in [(0.6, 0.0), (0.0, -0.5), (0.3, 0.4), (-0.7, 0.2)] {
            let v = estimate_doa(SPEED_OF_SOUND_WATER, FREQ, SPACING, ideal_phases((ux, uy))).unwrap();
            assert!((v.x - ux).abs() < 1e-9, "x {} vs {}", v.x, ux);
            assert!((v.y - uy).abs() < 1e-9, "y {} vs {}", v.y, uy);
            assert!((v.norm() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_wraps_raw_differences() {
        let mut phases = ideal_phases((0.5, 0.0));
        let shifted = phases.map(|p| p + 2.0 * PI);
        phases[1] += 2.0 * PI;
        let a = estimate_doa(SPEED_OF_SOUND_WATER, FREQ, SPACING, phases).unwrap();
        let b = estimate_doa(SPEED_OF_SOUND_WATER, FREQ, SPACING, shifted).unwrap();
        assert!((a.x - 0.5).abs() < 1e-9);
        assert!((b.x - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_contradictory_phases_clamp_z() {
        let v = estimate_doa(SPEED_OF_SOUND_WATER, FREQ, SPACING, [0.0, 3.0, 3.0, 0.0]).unwrap();
        assert!(v.x > 1.0);
        assert_eq!(v.z, 0.0);
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(estimate_doa(0.0, FREQ, SPACING, [0.0; 4]).is_err());
        assert!(estimate_doa(SPEED_OF_SOUND_WATER, -1.0, SPACING, [0.0; 4]).is_err());
        assert!(estimate_doa(SPEED_OF_SOUND_WATER, FREQ, 0.0, [0.0; 4]).is_err());
    }

    #[test]
    fn test_hydrophone_phase_lead() {
        // a delayed copy lags: lead(early) − lead(late) = ω·delay
        let tone = synthesize(&[WaveSegment::new(0.002, FREQ, 1.0, 0.0)], 2000).unwrap();
        let delay = 2.0e-6;
        let early = hydrophone_phase(&tone, FREQ, DEFAULT_PHASE_SPAN).unwrap();
        let late = hydrophone_phase(&tone.delayed(delay), FREQ, DEFAULT_PHASE_SPAN).unwrap();
        let expected = 2.0 * PI * FREQ * delay;
        assert!((wrap_to_pi(early - late) - expected).abs() < 0.02);
    }

    #[test]
    fn test_hydrophone_phase_empty() {
        assert!(matches!(
            hydrophone_phase(&Waveform::default(), FREQ, DEFAULT_PHASE_SPAN),
            Err(ModemError::InsufficientData { .. })
        ));
    }

    #[test]
    fn test_signal_angle_detect_from_delays() {
        // source to starboard: the right-hand pair hears it first
        let tone = synthesize(&[WaveSegment::new(0.002, FREQ, 1.0, 0.0)], 4000).unwrap();
        let lag = SPACING / SPEED_OF_SOUND_WATER;
        let right = tone.clone();
        let left = tone.delayed(lag);
        let v = signal_angle_detect(
            SPEED_OF_SOUND_WATER,
            FREQ,
            SPACING,
            [&left, &right, &right, &left],
            DEFAULT_PHASE_SPAN,
        )
        .unwrap();
        assert!(v.x > 0.95, "{:?}", v);
        assert!(v.y.abs() < 0.05, "{:?}", v);
    }
}
