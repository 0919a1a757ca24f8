//! Bit alphabet shared by the coders and the modulator
//!
//! Bitstreams travel as '0'/'1' strings, with 'x' marking a bit whose value
//! could not be determined (e.g. a tied repetition vote).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ModemError, ModemResult};

/// A single symbol of a bitstream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bit {
    Zero,
    One,
    /// Undetermined value
    Unknown,
}

impl Bit {
    pub fn from_char(c: char) -> ModemResult<Self> {
        match c {
            '0' => Ok(Bit::Zero),
            '1' => Ok(Bit::One),
            'x' => Ok(Bit::Unknown),
            other => Err(ModemError::InvalidEncoding(format!(
                "bit values must be '0', '1', or 'x', got {other:?}"
            ))),
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Bit::Zero => '0',
            Bit::One => '1',
            Bit::Unknown => 'x',
        }
    }

    /// Numeric value, `None` for `Unknown`
    pub fn value(self) -> Option<u8> {
        match self {
            Bit::Zero => Some(0),
            Bit::One => Some(1),
            Bit::Unknown => None,
        }
    }

    pub fn from_value(v: u8) -> Self {
        if v & 1 == 0 {
            Bit::Zero
        } else {
            Bit::One
        }
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Parse a '0'/'1'/'x' string into bits
pub fn parse_bits(s: &str) -> ModemResult<Vec<Bit>> {
    s.chars().map(Bit::from_char).collect()
}

/// Render bits back into a '0'/'1'/'x' string
pub fn bits_to_string(bits: &[Bit]) -> String {
    bits.iter().map(|b| b.to_char()).collect()
}

/// Numeric values of a fully-known bitstream
pub fn bit_values(bits: &[Bit]) -> ModemResult<Vec<u8>> {
    bits.iter()
        .enumerate()
        .map(|(idx, b)| {
            b.value().ok_or_else(|| {
                ModemError::InvalidEncoding(format!("unknown bit at position {idx}"))
            })
        })
        .collect()
}

/// XOR of every pair of consecutive bits
///
/// This is what a differential detector recovers from a DPSK waveform.
pub fn differential_bits(bits: &[Bit]) -> ModemResult<Vec<u8>> {
    let values = bit_values(bits)?;
    Ok(values.windows(2).map(|w| w[0] ^ w[1]).collect())
}

/// Undo `differential_bits` given the value of the first bit
pub fn integrate_differential(first: u8, diffs: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(diffs.len() + 1);
    let mut current = first & 1;
    out.push(current);
    for &d in diffs {
        current ^= d & 1;
        out.push(current);
    }
    out
}
