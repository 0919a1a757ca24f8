//! SymbolTiming trait - Bit interval and measurement windows
//!
//! Demodulators integrate over a window centred on each bit interval; the
//! timing decides where those windows sit.

use crate::common::WINDOW_HALF_WIDTH_FRACTION;

/// Symbol timing trait
pub trait SymbolTiming: Send + Sync {
    /// Duration of one symbol interval ΔT (seconds)
    fn interval(&self) -> f64;

    /// Symbol rate in baud
    fn symbol_rate(&self) -> f64 {
        1.0 / self.interval()
    }

    /// Half-width of the measurement window around each centre
    fn window_half_width(&self) -> f64 {
        WINDOW_HALF_WIDTH_FRACTION * self.interval()
    }

    /// Centre of the `k`th interval of a signal starting at `t0`
    fn window_center(&self, t0: f64, k: usize) -> f64 {
        t0 + self.interval() / 2.0 + k as f64 * self.interval()
    }
}
