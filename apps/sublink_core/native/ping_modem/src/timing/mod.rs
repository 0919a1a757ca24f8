//! Symbol timing implementations
//!
//! Currently only fixed timing.

mod fixed;

pub use fixed::FixedTiming;
