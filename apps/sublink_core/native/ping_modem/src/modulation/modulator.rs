//! Bit-to-segment modulators
//!
//! Differential keying composes a [`Constellation`] with a [`SymbolTiming`];
//! FSK needs neither and is a plain per-bit map.

use tracing::debug;

use super::Modulation;
use crate::bits::{bit_values, Bit};
use crate::constellations::{Bpsk, Qpsk};
use crate::error::{ModemError, ModemResult};
use crate::timing::FixedTiming;
use crate::traits::{Constellation, SymbolTiming};
use crate::waveform::WaveSegment;

/// Differential phase modulator composed of trait implementations
///
/// # Type Parameters
/// * `C` - Constellation (symbol → phase increment)
/// * `T` - Symbol timing (segment duration)
pub struct DifferentialModulator<C, T>
where
    C: Constellation,
    T: SymbolTiming,
{
    constellation: C,
    timing: T,
    frequency: f64,
    amplitude: f64,
}

impl<C, T> DifferentialModulator<C, T>
where
    C: Constellation,
    T: SymbolTiming,
{
    /// Create a new modulator
    ///
    /// # Arguments
    /// * `constellation` - Symbol mapping
    /// * `timing` - Segment duration
    /// * `frequency` - Carrier frequency in Hz
    /// * `amplitude` - Peak amplitude of every segment
    pub fn new(constellation: C, timing: T, frequency: f64, amplitude: f64) -> Self {
        Self {
            constellation,
            timing,
            frequency,
            amplitude,
        }
    }

    /// One segment per symbol, carrying that symbol's phase increment
    pub fn modulate_symbols(&self, symbols: &[u8]) -> Vec<WaveSegment> {
        let duration = self.timing.interval();
        symbols
            .iter()
            .map(|&sym| {
                WaveSegment::new(
                    duration,
                    self.frequency,
                    self.amplitude,
                    self.constellation.symbol_to_increment_deg(sym),
                )
            })
            .collect()
    }

    /// Group bit values into symbols, MSB first
    ///
    /// # Errors
    /// `InvalidEncoding` if the bits do not fill whole symbols
    pub fn symbols_from_values(&self, values: &[u8]) -> ModemResult<Vec<u8>> {
        let bps = self.constellation.bits_per_symbol();
        if values.len() % bps != 0 {
            return Err(ModemError::InvalidEncoding(format!(
                "{} bits do not form whole {}-bit symbols",
                values.len(),
                bps
            )));
        }
        Ok(values
            .chunks(bps)
            .map(|chunk| chunk.iter().fold(0u8, |acc, &b| (acc << 1) | (b & 1)))
            .collect())
    }
}

fn fsk(bits: &[u8], timing: &FixedTiming, freq0: f64, freq1: f64, amplitude: f64) -> Vec<WaveSegment> {
    bits.iter()
        .map(|&b| {
            let freq = if b == 0 { freq0 } else { freq1 };
            WaveSegment::new(timing.interval(), freq, amplitude, 0.0)
        })
        .collect()
}

/// Map a coded bitstream to synthesizer segments
///
/// - FSK: one segment per bit at `freq0`/`freq1`, zero phase shift
/// - PSK: one segment per bit; the phase advances by the configured shift
///   whenever a bit differs from its predecessor. The first bit is the
///   reference and never shifts.
/// - QPSK: one segment per bit pair, each carrying its symbol's increment
///
/// Every segment lasts `1 / bit_rate`.
///
/// # Errors
/// - `InvalidParameter` if `bit_rate` is not positive
/// - `InvalidEncoding` for unknown bits or an odd-length QPSK stream
pub fn modulate(
    bits: &[Bit],
    bit_rate: f64,
    amplitude: f64,
    modulation: &Modulation,
) -> ModemResult<Vec<WaveSegment>> {
    let timing = FixedTiming::from_bit_rate(bit_rate)?;
    let values = bit_values(bits)?;

    let segments = match *modulation {
        Modulation::Fsk { freq0, freq1 } => fsk(&values, &timing, freq0, freq1, amplitude),
        Modulation::Psk {
            frequency,
            phase_deg,
        } => {
            let modulator = DifferentialModulator::new(Bpsk::new(phase_deg), timing, frequency, amplitude);
            // symbol 1 means "differs from the previous bit"
            let flips: Vec<u8> = values
                .iter()
                .scan(values.first().copied(), |prev, &b| {
                    let flip = prev.map_or(0, |p| p ^ b);
                    *prev = Some(b);
                    Some(flip)
                })
                .collect();
            modulator.modulate_symbols(&flips)
        }
        Modulation::Qpsk { frequency, phases } => {
            let modulator = DifferentialModulator::new(Qpsk::new(phases), timing, frequency, amplitude);
            let symbols = modulator.symbols_from_values(&values)?;
            modulator.modulate_symbols(&symbols)
        }
    };

    debug!(
        scheme = modulation.name(),
        bits = bits.len(),
        segments = segments.len(),
        "modulated bitstream"
    );
    Ok(segments)
}
