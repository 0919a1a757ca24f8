//! Receiver side: phase and frequency detection
//!
//! Two interchangeable phase detectors implement [`PhaseDetector`]: the
//! windowed Fourier correlator (preferred) and the peak tracker.

mod fourier;
mod frequency;
mod mapping;
mod peak;

pub use fourier::FourierDetector;
pub use frequency::{decode_frequencies, dominant_frequency, frequencies_to_bits};
pub use mapping::{phase_to_bit, phase_to_symbol, phases_to_bits, phases_to_symbols, symbols_to_bits};
pub use peak::PeakTracker;

pub use crate::traits::PhaseDetector;
