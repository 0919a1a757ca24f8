//! Measured phase differences → bits and symbols
//!
//! Measurements arrive as negated transmit increments. The binary regions
//! are symmetric under negation so the sign does not matter there; the
//! quadrature decision negates before choosing a symbol.

use crate::constellations::{Bpsk, Qpsk};
use crate::traits::Constellation;

/// [90°, 270°) → 1, otherwise 0
pub fn phase_to_bit(phase_deg: f64) -> u8 {
    Bpsk::default().increment_to_symbol(phase_deg)
}

/// Quadrant nearest to the (un-negated) increment: 0°→0, 90°→1, 180°→2, 270°→3
pub fn phase_to_symbol(phase_deg: f64) -> u8 {
    Qpsk::default().increment_to_symbol(-phase_deg)
}

/// Apply [`phase_to_bit`] to a sequence of measurements in radians
pub fn phases_to_bits(phases: &[f64]) -> Vec<u8> {
    phases.iter().map(|p| phase_to_bit(p.to_degrees())).collect()
}

/// Apply [`phase_to_symbol`] to a sequence of measurements in radians
pub fn phases_to_symbols(phases: &[f64]) -> Vec<u8> {
    phases.iter().map(|p| phase_to_symbol(p.to_degrees())).collect()
}

/// Expand 2-bit symbols, MSB first
pub fn symbols_to_bits(symbols: &[u8]) -> Vec<u8> {
    symbols
        .iter()
        .flat_map(|&s| [(s >> 1) & 1, s & 1])
        .collect()
}
