//! End-to-end link: ping for bearing, then send a message
//!
//! A run first emits a pure tone and estimates the arrival direction from the
//! four hydrophone phases. It then codes and keys the message, propagates it
//! to the array, and decodes it independently on every hydrophone.
//!
//! Differential schemes need a known first symbol to turn phase differences
//! back into absolute bits, so the coded stream is prefixed with the
//! modulation's reference bits before keying.

use ping_modem::{
    decode_frequencies, frequencies_to_bits, integrate_differential, modulate, phases_to_bits,
    phases_to_symbols, signal_angle_detect, symbols_to_bits, synthesize, Bit, DirectionVector,
    FixedTiming, FourierDetector, ModemError, Modulation, ModulatorConfig, PhaseDetector,
    WaveSegment, Waveform,
};
use ping_modem::common::{DEFAULT_PHASE_SPAN, DEFAULT_SAMPLES_PER_SEGMENT};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::array::{propagate_to_array, ReceiverArray};
use crate::config::ChannelConfig;
use crate::error::ChannelResult;
use crate::kinematics::{Platform, Vec3};

/// Everything needed for one ping-and-message exchange
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkScenario {
    pub transmitter: Platform,
    pub array: ReceiverArray,
    pub channel: ChannelConfig,
    pub modulator: ModulatorConfig,
    /// Uncoded message bits
    pub message: Vec<Bit>,
    /// Bearing ping carrier (Hz)
    pub ping_frequency: f64,
    /// Bearing ping length (s)
    pub ping_duration: f64,
    pub ping_samples: usize,
    /// Window for the per-hydrophone phase measurement (s)
    pub phase_span: f64,
}

impl Default for LinkScenario {
    fn default() -> Self {
        Self {
            transmitter: Platform::stationary(Vec3::planar(0.0, 100.0)),
            array: ReceiverArray::default(),
            channel: ChannelConfig::default(),
            modulator: ModulatorConfig::default(),
            message: [1, 1, 0, 1, 0, 1, 0, 0].map(Bit::from_value).to_vec(),
            ping_frequency: 30_000.0,
            ping_duration: 0.002,
            ping_samples: DEFAULT_SAMPLES_PER_SEGMENT,
            phase_span: DEFAULT_PHASE_SPAN,
        }
    }
}

/// Decoding outcome at one hydrophone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HydrophoneReport {
    pub recovered: Vec<Bit>,
    /// Mismatched positions plus any length difference
    pub bit_errors: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkReport {
    pub doa: DirectionVector,
    /// Emission order: front-left, back-left, back-right, front-right
    pub hydrophones: Vec<HydrophoneReport>,
    pub sent: Vec<Bit>,
}

impl LinkReport {
    pub fn total_bit_errors(&self) -> usize {
        self.hydrophones.iter().map(|h| h.bit_errors).sum()
    }
}

impl LinkScenario {
    /// Ping, estimate the bearing, then send and decode the message
    pub fn run(&self) -> ChannelResult<LinkReport> {
        self.channel.validate()?;
        self.array.validate()?;

        let doa = self.estimate_bearing()?;

        let wave = self.transmit_framed()?;
        // message noise must not repeat the ping's
        let channel = ChannelConfig {
            seed: self.channel.seed.wrapping_add(1),
            ..self.channel
        };
        let reception = propagate_to_array(&wave, &self.transmitter, &self.array, &channel)?;

        let hydrophones = reception
            .hydrophones
            .iter()
            .enumerate()
            .map(|(idx, wave)| {
                let recovered = self.receive(wave)?;
                let bit_errors = count_bit_errors(&self.message, &recovered);
                debug!(hydrophone = idx, bit_errors, recovered = recovered.len(), "decoded message");
                Ok(HydrophoneReport {
                    recovered,
                    bit_errors,
                })
            })
            .collect::<ChannelResult<Vec<_>>>()?;

        Ok(LinkReport {
            doa,
            hydrophones,
            sent: self.message.clone(),
        })
    }

    fn estimate_bearing(&self) -> ChannelResult<DirectionVector> {
        let ping = synthesize(
            &[WaveSegment::new(
                self.ping_duration,
                self.ping_frequency,
                self.modulator.amplitude,
                0.0,
            )],
            self.ping_samples,
        )?;
        let reception = propagate_to_array(&ping, &self.transmitter, &self.array, &self.channel)?;
        let doa = signal_angle_detect(
            self.channel.wave_speed,
            self.ping_frequency,
            self.array.spacing,
            reception.doa_ordered(),
            self.phase_span,
        )?;
        debug!(x = doa.x, y = doa.y, z = doa.z, "bearing from ping");
        Ok(doa)
    }

    /// Coded message behind the reference prefix, synthesized
    fn transmit_framed(&self) -> ChannelResult<Waveform> {
        let config = &self.modulator;
        let coded = config.coding.encode(&self.message)?;
        let mut framed = config.modulation.reference_prefix().to_vec();
        framed.extend_from_slice(&coded);

        let segments = modulate(&framed, config.bit_rate, config.amplitude, &config.modulation)?;
        Ok(synthesize(&segments, config.samples_per_bit)?)
    }

    /// Recover the uncoded message from one received waveform
    pub fn receive(&self, wave: &Waveform) -> ChannelResult<Vec<Bit>> {
        let config = &self.modulator;
        let coded: Vec<Bit> = match config.modulation {
            Modulation::Psk { frequency, .. } => {
                let detector = FourierDetector::for_carrier(frequency, config.bit_rate)?;
                let diffs = phases_to_bits(&detector.phase_shifts(wave));
                // the first bit is the reference '0'
                integrate_differential(0, &diffs)
                    .into_iter()
                    .skip(1)
                    .map(Bit::from_value)
                    .collect()
            }
            Modulation::Qpsk { frequency, .. } => {
                // the reference symbol occupies the first window, which
                // yields no difference
                let detector = FourierDetector::for_carrier(frequency, config.bit_rate)?;
                let symbols = phases_to_symbols(&detector.phase_shifts(wave));
                symbols_to_bits(&symbols).into_iter().map(Bit::from_value).collect()
            }
            Modulation::Fsk { freq0, freq1 } => {
                let timing = FixedTiming::from_bit_rate(config.bit_rate)?;
                let labels = decode_frequencies(wave, &timing, &[freq0, freq1]);
                frequencies_to_bits(&labels, freq0, freq1)
            }
        };

        let block = config.coding.block_len()?;
        let whole = coded.len() - coded.len() % block;
        if whole == 0 && !self.message.is_empty() {
            return Err(ModemError::InsufficientData {
                needed: block,
                available: coded.len(),
            }
            .into());
        }
        Ok(config.coding.decode(&coded[..whole])?)
    }
}

/// Positions that differ plus the difference in length
pub fn count_bit_errors(sent: &[Bit], recovered: &[Bit]) -> usize {
    let mismatched = sent.iter().zip(recovered).filter(|(a, b)| a != b).count();
    mismatched + sent.len().abs_diff(recovered.len())
}
