//! Core DSP traits for the ping modem
//!
//! These traits define mathematical behavior, not waveforms or links.
//! Each trait represents one orthogonal axis of modem configuration.

mod block_code;
mod carrier;
mod constellation;
mod phase_detector;
mod timing;

pub use block_code::BlockCode;
pub use carrier::Carrier;
pub use constellation::Constellation;
pub use phase_detector::PhaseDetector;
pub use timing::SymbolTiming;
