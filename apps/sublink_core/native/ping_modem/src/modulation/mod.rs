//! Encoder side of the link: coding, keying, synthesis
//!
//! `transmit` runs the whole chain; `modulate` stops at segments.

mod modulator;

pub use modulator::{modulate, DifferentialModulator};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bits::Bit;
use crate::coding::Coding;
use crate::common::{DEFAULT_PSK_PHASE_DEG, DEFAULT_QPSK_PHASES_DEG, DEFAULT_SAMPLES_PER_SEGMENT};
use crate::error::ModemResult;
use crate::waveform::{synthesize, Waveform};

/// Keying scheme and its parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "scheme", rename_all = "snake_case")]
pub enum Modulation {
    /// Frequency-shift keying: `freq0` for 0, `freq1` for 1
    Fsk { freq0: f64, freq1: f64 },
    /// Differential binary PSK at `frequency`
    Psk { frequency: f64, phase_deg: f64 },
    /// Differential QPSK; `phases` are the increments for 00, 01, 10, 11
    Qpsk { frequency: f64, phases: [f64; 4] },
}

impl Modulation {
    /// DPSK with the default 180° shift
    pub fn psk(frequency: f64) -> Self {
        Modulation::Psk {
            frequency,
            phase_deg: DEFAULT_PSK_PHASE_DEG,
        }
    }

    /// DQPSK with the default increments
    pub fn qpsk(frequency: f64) -> Self {
        Modulation::Qpsk {
            frequency,
            phases: DEFAULT_QPSK_PHASES_DEG,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Modulation::Fsk { .. } => "FSK",
            Modulation::Psk { .. } => "PSK",
            Modulation::Qpsk { .. } => "QPSK",
        }
    }

    /// Bits carried by one segment
    pub fn bits_per_segment(&self) -> usize {
        match self {
            Modulation::Qpsk { .. } => 2,
            _ => 1,
        }
    }

    /// Frequencies a receiver has to listen on
    pub fn frequencies(&self) -> Vec<f64> {
        match *self {
            Modulation::Fsk { freq0, freq1 } => vec![freq0, freq1],
            Modulation::Psk { frequency, .. } | Modulation::Qpsk { frequency, .. } => vec![frequency],
        }
    }

    /// Bits sent ahead of the message so that a differential receiver has a
    /// known starting symbol
    pub fn reference_prefix(&self) -> &'static [Bit] {
        match self {
            Modulation::Fsk { .. } => &[],
            Modulation::Psk { .. } => &[Bit::Zero],
            Modulation::Qpsk { .. } => &[Bit::Zero, Bit::Zero],
        }
    }
}

impl Default for Modulation {
    fn default() -> Self {
        Modulation::psk(10_000.0)
    }
}

/// Everything the transmitter needs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModulatorConfig {
    /// Bits (or QPSK symbols) per second
    pub bit_rate: f64,
    pub amplitude: f64,
    /// Samples synthesized for each segment
    pub samples_per_bit: usize,
    pub coding: Coding,
    pub modulation: Modulation,
}

impl Default for ModulatorConfig {
    fn default() -> Self {
        Self {
            bit_rate: 1000.0,
            amplitude: 1.0,
            samples_per_bit: DEFAULT_SAMPLES_PER_SEGMENT,
            coding: Coding::None,
            modulation: Modulation::default(),
        }
    }
}

/// Encode, modulate, and synthesize a message
pub fn transmit(bits: &[Bit], config: &ModulatorConfig) -> ModemResult<Waveform> {
    let coded = config.coding.encode(bits)?;
    let segments = modulate(&coded, config.bit_rate, config.amplitude, &config.modulation)?;
    let wave = synthesize(&segments, config.samples_per_bit)?;
    debug!(
        message_bits = bits.len(),
        coded_bits = coded.len(),
        duration = wave.duration(),
        "transmit"
    );
    Ok(wave)
}
