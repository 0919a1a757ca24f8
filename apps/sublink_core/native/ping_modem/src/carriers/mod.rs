//! Carrier oscillator implementations
//!
//! Currently only a fixed reference tone.

mod tone;

pub use tone::ReferenceTone;
