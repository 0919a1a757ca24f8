//! Differential constellations
//!
//! - DBPSK (1 bit/symbol)
//! - DQPSK (2 bits/symbol)

mod bpsk;
mod qpsk;

pub use bpsk::Bpsk;
pub use qpsk::Qpsk;
