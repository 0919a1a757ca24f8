//! Constellation trait - Symbol ↔ phase increment mapping
//!
//! Differential keying carries each symbol in the phase *change* between
//! consecutive segments, so the alphabet is a set of increments rather than
//! absolute I/Q points.

/// Differential symbol alphabet
pub trait Constellation: Send + Sync {
    /// Number of symbols (2 for DPSK, 4 for DQPSK)
    fn order(&self) -> usize;

    /// Bits per symbol (log2 of order)
    fn bits_per_symbol(&self) -> usize {
        (self.order() as f64).log2() as usize
    }

    /// Phase increment applied when sending `sym`, in degrees
    fn symbol_to_increment_deg(&self, sym: u8) -> f64;

    /// Hard decision: nearest symbol for a transmit-side increment in degrees
    fn increment_to_symbol(&self, increment_deg: f64) -> u8;
}
