//! Ping Modem - Waveform engine for acoustic links between submarines
//!
//! Synthesizes segment-by-segment sinusoids, keys bitstreams onto them
//! (FSK, differential PSK, differential QPSK) behind an optional outer code,
//! and recovers bits and arrival direction from received waveforms. Channel
//! modelling lives in the `acoustic_channel` crate.

pub mod bits;
pub mod carriers;
pub mod coding;
pub mod common;
pub mod constellations;
pub mod demod;
pub mod doa;
pub mod error;
pub mod modulation;
pub mod timing;
pub mod traits;
pub mod waveform;
mod utils;

// Re-export core types for convenience
pub use bits::{bits_to_string, differential_bits, integrate_differential, parse_bits, Bit};
pub use carriers::ReferenceTone;
pub use coding::{Coding, Hamming, Repetition};
pub use constellations::{Bpsk, Qpsk};
pub use demod::{
    decode_frequencies, dominant_frequency, frequencies_to_bits, phase_to_bit, phase_to_symbol,
    phases_to_bits, phases_to_symbols, symbols_to_bits, FourierDetector, PeakTracker,
};
pub use doa::{estimate_doa, hydrophone_phase, signal_angle_detect, DirectionVector};
pub use error::{ModemError, ModemResult};
pub use modulation::{modulate, transmit, Modulation, ModulatorConfig};
pub use timing::FixedTiming;
pub use traits::{BlockCode, Carrier, Constellation, PhaseDetector, SymbolTiming};
pub use utils::wrap_to_pi;
pub use waveform::{combine, synthesize, synthesize_with, write_pwl, write_pwl_to, SynthesisMode, WaveSegment, Waveform};
