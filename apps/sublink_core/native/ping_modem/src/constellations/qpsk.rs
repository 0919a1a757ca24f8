//! Differential QPSK alphabet (2 bits per symbol)
//!
//! Default increments:
//! Symbol 0 (00) → 0°
//! Symbol 1 (01) → 90°
//! Symbol 2 (10) → 180°
//! Symbol 3 (11) → 270°

use serde::{Deserialize, Serialize};

use crate::common::DEFAULT_QPSK_PHASES_DEG;
use crate::traits::Constellation;

/// Quadrature differential phase-shift keying
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Qpsk {
    /// Increment for each symbol, indexed by the symbol's 2-bit value
    pub increments: [f64; 4],
}

impl Qpsk {
    pub fn new(increments: [f64; 4]) -> Self {
        Self { increments }
    }
}

impl Default for Qpsk {
    fn default() -> Self {
        Self::new(DEFAULT_QPSK_PHASES_DEG)
    }
}

/// Distance between two angles on the circle, in [0, 180]
fn circular_distance_deg(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(360.0);
    d.min(360.0 - d)
}

impl Constellation for Qpsk {
    fn order(&self) -> usize {
        4
    }

    fn symbol_to_increment_deg(&self, sym: u8) -> f64 {
        self.increments[(sym & 0x03) as usize]
    }

    /// Nearest configured increment; ties go to the lower symbol
    fn increment_to_symbol(&self, increment_deg: f64) -> u8 {
        let mut best = 0u8;
        let mut best_dist = f64::INFINITY;
        for (sym, &inc) in self.increments.iter().enumerate() {
            let dist = circular_distance_deg(increment_deg, inc);
            if dist < best_dist {
                best = sym as u8;
                best_dist = dist;
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qpsk_roundtrip() {
        let qpsk = Qpsk::default();
        for sym in 0..4u8 {
            let inc = qpsk.symbol_to_increment_deg(sym);
            let recovered = qpsk.increment_to_symbol(inc);
            assert_eq!(sym, recovered, "Symbol {} roundtrip failed", sym);
        }
    }

    #[test]
    fn test_qpsk_quadrants() {
        let qpsk = Qpsk::default();
        assert_eq!(qpsk.increment_to_symbol(30.0), 0);
        assert_eq!(qpsk.increment_to_symbol(-30.0), 0);
        assert_eq!(qpsk.increment_to_symbol(100.0), 1);
        assert_eq!(qpsk.increment_to_symbol(170.0), 2);
        assert_eq!(qpsk.increment_to_symbol(-80.0), 3);
        assert_eq!(qpsk.increment_to_symbol(355.0), 0);
    }

    #[test]
    fn test_qpsk_custom_increments() {
        let qpsk = Qpsk::new([45.0, 135.0, 225.0, 315.0]);
        assert_eq!(qpsk.increment_to_symbol(50.0), 0);
        assert_eq!(qpsk.increment_to_symbol(-50.0), 3);
    }

    #[test]
    fn test_qpsk_order() {
        assert_eq!(Qpsk::default().order(), 4);
        assert_eq!(Qpsk::default().bits_per_symbol(), 2);
    }
}
