//! Differential BPSK alphabet (1 bit per symbol)
//!
//! Symbol 0 → no phase change
//! Symbol 1 → phase advances by `shift_deg` (180° by default)

use serde::{Deserialize, Serialize};

use crate::common::DEFAULT_PSK_PHASE_DEG;
use crate::traits::Constellation;

/// Binary differential phase-shift keying
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bpsk {
    pub shift_deg: f64,
}

impl Bpsk {
    pub fn new(shift_deg: f64) -> Self {
        Self { shift_deg }
    }
}

impl Default for Bpsk {
    fn default() -> Self {
        Self::new(DEFAULT_PSK_PHASE_DEG)
    }
}

impl Constellation for Bpsk {
    fn order(&self) -> usize {
        2
    }

    fn symbol_to_increment_deg(&self, sym: u8) -> f64 {
        match sym & 0x01 {
            0 => 0.0,
            _ => self.shift_deg,
        }
    }

    /// The half circle starting at `shift/2` decides 1. With the default
    /// 180° shift that is [90°, 270°).
    fn increment_to_symbol(&self, increment_deg: f64) -> u8 {
        let rel = (increment_deg - self.shift_deg / 2.0).rem_euclid(360.0);
        if rel < 180.0 {
            1
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bpsk_roundtrip() {
        let bpsk = Bpsk::default();
        for sym in 0..2u8 {
            let inc = bpsk.symbol_to_increment_deg(sym);
            let recovered = bpsk.increment_to_symbol(inc);
            assert_eq!(sym, recovered, "Symbol {} roundtrip failed", sym);
        }
    }

    #[test]
    fn test_bpsk_decision_regions() {
        let bpsk = Bpsk::default();
        for (deg, sym) in [
            (0.0, 0),
            (89.9, 0),
            (90.0, 1),
            (180.0, 1),
            (269.9, 1),
            (270.0, 0),
            (-90.0, 0),
            (-180.0, 1),
            (540.0, 1),
        ] {
            assert_eq!(bpsk.increment_to_symbol(deg), sym, "{} degrees", deg);
        }
    }

    #[test]
    fn test_bpsk_custom_shift() {
        let bpsk = Bpsk::new(90.0);
        assert_eq!(bpsk.symbol_to_increment_deg(1), 90.0);
        assert_eq!(bpsk.increment_to_symbol(90.0), 1);
        assert_eq!(bpsk.increment_to_symbol(0.0), 0);
    }

    #[test]
    fn test_bpsk_order() {
        assert_eq!(Bpsk::default().order(), 2);
        assert_eq!(Bpsk::default().bits_per_symbol(), 1);
    }
}
