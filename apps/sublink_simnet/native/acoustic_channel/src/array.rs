//! Four-hydrophone square array
//!
//! The hydrophones sit at the corners of a square of side `spacing` centred
//! on the platform, emitted in the order front-left, back-left, back-right,
//! front-right (each a 90° counter-clockwise turn of the previous one about
//! the centre). All of them share the platform's velocity.
//!
//! Propagation to the centre and to each hydrophone is independent, so the
//! five runs go on scoped threads. Noise streams are derived from the master
//! seed before any thread starts, which keeps results reproducible.

use std::thread;

use ping_modem::Waveform;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ChannelConfig;
use crate::error::{ChannelError, ChannelResult};
use crate::kinematics::{Platform, Vec3};
use crate::noise::NoiseGenerator;
use crate::propagation::propagate;

/// Hydrophone indices in emission order
pub const FRONT_LEFT: usize = 0;
pub const BACK_LEFT: usize = 1;
pub const BACK_RIGHT: usize = 2;
pub const FRONT_RIGHT: usize = 3;

/// Square receiver array mounted on a platform
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReceiverArray {
    /// Motion of the array centre
    pub center: Platform,
    /// Heading in the horizontal plane (need not be unit length)
    pub orientation: Vec3,
    /// Side of the square (m)
    pub spacing: f64,
}

impl Default for ReceiverArray {
    fn default() -> Self {
        Self {
            center: Platform::default(),
            orientation: Vec3::planar(0.0, 1.0),
            spacing: 0.02,
        }
    }
}

impl ReceiverArray {
    pub fn new(center: Platform, orientation: Vec3, spacing: f64) -> Self {
        Self {
            center,
            orientation,
            spacing,
        }
    }

    pub fn validate(&self) -> ChannelResult<()> {
        if !(self.spacing.is_finite() && self.spacing > 0.0) {
            return Err(ChannelError::invalid(format!(
                "array spacing must be positive, got {}",
                self.spacing
            )));
        }
        if Vec3::planar(self.orientation.x, self.orientation.y).normalized().is_none() {
            return Err(ChannelError::invalid("array orientation has no horizontal component"));
        }
        Ok(())
    }

    /// Hydrophone offsets from the centre, front-left first
    pub fn offsets(&self) -> ChannelResult<[Vec3; 4]> {
        self.validate()?;
        let heading = Vec3::planar(self.orientation.x, self.orientation.y)
            .normalized()
            .ok_or_else(|| ChannelError::invalid("array orientation has no horizontal component"))?;

        let forward = heading * (self.spacing / 2.0);
        let mut corner = forward + forward.rot90();
        let mut out = [Vec3::ZERO; 4];
        for slot in out.iter_mut() {
            *slot = corner;
            corner = corner.rot90();
        }
        Ok(out)
    }

    /// Hydrophone positions at t = 0
    pub fn positions(&self) -> ChannelResult<[Vec3; 4]> {
        Ok(self.offsets()?.map(|o| self.center.position + o))
    }

    /// Hydrophone indices in upper-left, upper-right, bottom-right,
    /// bottom-left order, as direction finding expects them
    pub fn doa_order() -> [usize; 4] {
        [FRONT_LEFT, FRONT_RIGHT, BACK_RIGHT, BACK_LEFT]
    }
}

/// Waveforms heard at the array centre and at each hydrophone
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayReception {
    pub center: Waveform,
    /// Emission order: front-left, back-left, back-right, front-right
    pub hydrophones: [Waveform; 4],
}

impl ArrayReception {
    /// Hydrophone waveforms rearranged for direction finding
    pub fn doa_ordered(&self) -> [&Waveform; 4] {
        ReceiverArray::doa_order().map(|i| &self.hydrophones[i])
    }
}

/// Propagate `input` from `tx` to the array centre and every hydrophone,
/// adding independent noise to each
pub fn propagate_to_array(
    input: &Waveform,
    tx: &Platform,
    array: &ReceiverArray,
    config: &ChannelConfig,
) -> ChannelResult<ArrayReception> {
    config.validate()?;
    let offsets = array.offsets()?;

    let mut receivers = vec![array.center];
    receivers.extend(offsets.iter().map(|&o| array.center.offset(o)));

    let mut master = ChaCha8Rng::seed_from_u64(config.seed);
    let noises: Vec<NoiseGenerator> = receivers
        .iter()
        .map(|_| NoiseGenerator::new(config.noise_variance, &mut master))
        .collect();

    debug!(
        receivers = receivers.len(),
        spacing = array.spacing,
        noise_variance = config.noise_variance,
        "propagating to array"
    );

    let results: Vec<ChannelResult<Waveform>> = thread::scope(|s| {
        let handles: Vec<_> = receivers
            .iter()
            .zip(noises)
            .enumerate()
            .map(|(idx, (rx, mut noise))| {
                s.spawn(move || -> ChannelResult<Waveform> {
                    let clean = propagate(input, tx, rx, config.wave_speed)?;
                    debug!(receiver = idx, first_arrival = clean.start_time(), "receiver done");
                    Ok(noise.apply(&clean))
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|h| h.join().unwrap_or_else(|panic| std::panic::resume_unwind(panic)))
            .collect()
    });

    let mut waves = results.into_iter().collect::<ChannelResult<Vec<Waveform>>>()?.into_iter();
    let center = waves.next().unwrap_or_default();
    let mut hydrophones: [Waveform; 4] = Default::default();
    for slot in hydrophones.iter_mut() {
        *slot = waves.next().unwrap_or_default();
    }

    Ok(ArrayReception {
        center,
        hydrophones,
    })
}
