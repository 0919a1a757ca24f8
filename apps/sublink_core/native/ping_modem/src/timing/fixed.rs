//! Fixed bit timing
//!
//! Deterministic intervals at a known bit rate. No timing recovery; the
//! first sample of the received waveform is taken as the start of the first
//! interval.

use crate::error::{ModemError, ModemResult};
use crate::traits::SymbolTiming;

/// Fixed symbol timing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedTiming {
    interval: f64,
}

impl FixedTiming {
    /// Create timing for `bit_rate` symbols per second
    ///
    /// # Errors
    /// `InvalidParameter` if the rate is not a positive finite number
    pub fn from_bit_rate(bit_rate: f64) -> ModemResult<Self> {
        if !(bit_rate.is_finite() && bit_rate > 0.0) {
            return Err(ModemError::invalid(format!(
                "bit rate must be positive, got {}",
                bit_rate
            )));
        }
        Ok(Self {
            interval: 1.0 / bit_rate,
        })
    }

    /// Create timing from the interval length directly
    pub fn from_interval(interval: f64) -> ModemResult<Self> {
        if !(interval.is_finite() && interval > 0.0) {
            return Err(ModemError::invalid(format!(
                "bit interval must be positive, got {}",
                interval
            )));
        }
        Ok(Self { interval })
    }
}

impl SymbolTiming for FixedTiming {
    fn interval(&self) -> f64 {
        self.interval
    }
}
