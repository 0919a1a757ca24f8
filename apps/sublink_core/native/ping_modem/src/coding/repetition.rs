//! Repetition code with majority-vote decoding

use crate::bits::Bit;
use crate::error::{ModemError, ModemResult};
use crate::traits::BlockCode;

/// Each bit sent `repetitions` times
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Repetition {
    repetitions: usize,
}

impl Repetition {
    pub fn new(repetitions: usize) -> ModemResult<Self> {
        if repetitions == 0 {
            return Err(ModemError::invalid("repetition count must be positive"));
        }
        Ok(Self { repetitions })
    }

    pub fn repetitions(&self) -> usize {
        self.repetitions
    }

    fn check_length(&self, len: usize) -> ModemResult<()> {
        if self.repetitions > len {
            return Err(ModemError::invalid(format!(
                "repetition count {} exceeds input length {}",
                self.repetitions, len
            )));
        }
        Ok(())
    }
}

impl BlockCode for Repetition {
    fn data_len(&self) -> usize {
        1
    }

    fn block_len(&self) -> usize {
        self.repetitions
    }

    fn encode(&self, bits: &[Bit]) -> ModemResult<Vec<Bit>> {
        self.check_length(bits.len())?;
        Ok(bits
            .iter()
            .flat_map(|&b| std::iter::repeat(b).take(self.repetitions))
            .collect())
    }

    /// Majority vote per chunk
    ///
    /// A chunk containing an unknown bit, or with an exact tie, decodes to
    /// `Unknown`.
    fn decode(&self, code: &[Bit]) -> ModemResult<Vec<Bit>> {
        self.check_length(code.len())?;
        if code.len() % self.repetitions != 0 {
            return Err(ModemError::InputLengthMismatch {
                length: code.len(),
                block: self.repetitions,
            });
        }

        Ok(code
            .chunks(self.repetitions)
            .map(|chunk| {
                let mut ones = 0usize;
                for bit in chunk {
                    match bit.value() {
                        Some(v) => ones += v as usize,
                        None => return Bit::Unknown,
                    }
                }
                let zeros = chunk.len() - ones;
                match ones.cmp(&zeros) {
                    std::cmp::Ordering::Greater => Bit::One,
                    std::cmp::Ordering::Less => Bit::Zero,
                    std::cmp::Ordering::Equal => Bit::Unknown,
                }
            })
            .collect())
    }
}
