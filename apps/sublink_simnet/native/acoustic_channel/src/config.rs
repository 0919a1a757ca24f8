//! Channel configuration

use ping_modem::common::SPEED_OF_SOUND_WATER;
use serde::{Deserialize, Serialize};

use crate::error::{ChannelError, ChannelResult};
use crate::propagation::check_wave_speed;

/// Medium and noise parameters shared by every receiver
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelConfig {
    /// Propagation speed in the medium (m/s)
    pub wave_speed: f64,
    /// Variance of the additive noise, in received-amplitude² units
    /// (after 1/r attenuation)
    pub noise_variance: f64,
    /// Master seed; each receiver derives its own noise stream from it
    pub seed: u64,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            wave_speed: SPEED_OF_SOUND_WATER,
            noise_variance: 0.0,
            seed: 0,
        }
    }
}

impl ChannelConfig {
    pub fn validate(&self) -> ChannelResult<()> {
        check_wave_speed(self.wave_speed)?;
        if !(self.noise_variance.is_finite() && self.noise_variance >= 0.0) {
            return Err(ChannelError::invalid(format!(
                "noise variance must be non-negative, got {}",
                self.noise_variance
            )));
        }
        Ok(())
    }
}
