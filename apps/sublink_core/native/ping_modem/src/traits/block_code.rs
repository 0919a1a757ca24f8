//! BlockCode trait - Outer error-correcting code

use crate::bits::Bit;
use crate::error::ModemResult;

/// Encoder/decoder pair over bitstreams
pub trait BlockCode {
    /// Message bits consumed per block
    fn data_len(&self) -> usize;

    /// Coded bits produced per block
    fn block_len(&self) -> usize;

    fn encode(&self, bits: &[Bit]) -> ModemResult<Vec<Bit>>;

    fn decode(&self, code: &[Bit]) -> ModemResult<Vec<Bit>>;
}
