//! Outer error-correcting codes
//!
//! Applied to the logical message before modulation and removed after
//! demodulation. `Coding` selects the scheme; each scheme implements
//! [`BlockCode`].

mod gf2;
mod hamming;
mod repetition;

pub use gf2::BitMatrix;
pub use hamming::{Hamming, MAX_PARITY_BITS};
pub use repetition::Repetition;

use serde::{Deserialize, Serialize};

use crate::bits::Bit;
use crate::error::ModemResult;
use crate::traits::BlockCode;

/// Outer code selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "scheme", rename_all = "snake_case")]
pub enum Coding {
    /// Bits pass through unchanged
    #[default]
    None,
    Repetition { repetitions: usize },
    /// (2ⁿ−1, 2ⁿ−n−1) Hamming code
    Hamming { n: u32 },
}

impl Coding {
    fn code(&self) -> ModemResult<Option<Box<dyn BlockCode>>> {
        Ok(match *self {
            Coding::None => None,
            Coding::Repetition { repetitions } => Some(Box::new(Repetition::new(repetitions)?)),
            Coding::Hamming { n } => Some(Box::new(Hamming::new(n)?)),
        })
    }

    pub fn encode(&self, bits: &[Bit]) -> ModemResult<Vec<Bit>> {
        match self.code()? {
            Some(code) => code.encode(bits),
            None => Ok(bits.to_vec()),
        }
    }

    pub fn decode(&self, code: &[Bit]) -> ModemResult<Vec<Bit>> {
        match self.code()? {
            Some(c) => c.decode(code),
            None => Ok(code.to_vec()),
        }
    }

    /// Coded bits per block, 1 for uncoded
    pub fn block_len(&self) -> ModemResult<usize> {
        Ok(self.code()?.map_or(1, |c| c.block_len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits::{bits_to_string, parse_bits};
    use crate::error::ModemError;

    #[test]
    fn test_none_is_identity() {
        let bits = parse_bits("1011").unwrap();
        assert_eq!(Coding::None.encode(&bits).unwrap(), bits);
        assert_eq!(Coding::None.decode(&bits).unwrap(), bits);
    }

    #[test]
    fn test_dispatch() {
        let bits = parse_bits("1011").unwrap();
        let rep = Coding::Repetition { repetitions: 2 };
        assert_eq!(bits_to_string(&rep.encode(&bits).unwrap()), "11001111");
        let ham = Coding::Hamming { n: 3 };
        assert_eq!(ham.encode(&bits).unwrap().len(), 7);
        assert_eq!(ham.block_len().unwrap(), 7);
        assert_eq!(ham.decode(&ham.encode(&bits).unwrap()).unwrap(), bits);
    }

    #[test]
    fn test_invalid_parameters_surface() {
        let bits = parse_bits("1011").unwrap();
        assert!(matches!(
            Coding::Hamming { n: 0 }.encode(&bits),
            Err(ModemError::InvalidParameter(_))
        ));
        assert!(matches!(
            Coding::Repetition { repetitions: 0 }.encode(&bits),
            Err(ModemError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_serde_tagged() {
        let json = serde_json::to_string(&Coding::Hamming { n: 4 }).unwrap();
        assert_eq!(json, r#"{"scheme":"hamming","n":4}"#);
        let back: Coding = serde_json::from_str(r#"{"scheme":"repetition","repetitions":3}"#).unwrap();
        assert_eq!(back, Coding::Repetition { repetitions: 3 });
        let none: Coding = serde_json::from_str(r#"{"scheme":"none"}"#).unwrap();
        assert_eq!(none, Coding::None);
    }
}
