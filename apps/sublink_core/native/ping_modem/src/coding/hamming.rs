//! Systematic (2ⁿ−1, 2ⁿ−n−1) Hamming code
//!
//! Codewords carry the data bits first and the n parity bits last. The
//! parity-check matrix H = [A | Iₙ] lists, as MSB-first columns, every
//! non-power-of-two value from 2ⁿ−1 down to 3, then the powers of two from
//! 2ⁿ⁻¹ down to 1. The generator is G = [Iₖ | Aᵀ].
//!
//! A single flipped bit per codeword is corrected from its syndrome. Two
//! flipped bits produce the syndrome of a third position, which gets
//! "corrected" too; the decoder cannot tell.

use tracing::trace;

use super::gf2::BitMatrix;
use crate::bits::{bit_values, Bit};
use crate::error::{ModemError, ModemResult};
use crate::traits::BlockCode;

/// Largest supported parity-bit count
pub const MAX_PARITY_BITS: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hamming {
    n: u32,
    parity_check: BitMatrix,
    generator: BitMatrix,
}

fn column_bits(value: usize, n: u32) -> Vec<u8> {
    (0..n).rev().map(|shift| ((value >> shift) & 1) as u8).collect()
}

impl Hamming {
    /// Code with `n` parity bits per codeword
    pub fn new(n: u32) -> ModemResult<Self> {
        if !(2..=MAX_PARITY_BITS).contains(&n) {
            return Err(ModemError::invalid(format!(
                "Hamming parity bits must be in 2..={}, got {}",
                MAX_PARITY_BITS, n
            )));
        }

        let block = (1usize << n) - 1;
        let data = block - n as usize;

        let columns: Vec<usize> = (3..=block)
            .rev()
            .filter(|v| !v.is_power_of_two())
            .chain((0..n).rev().map(|s| 1usize << s))
            .collect();

        let mut parity_check = BitMatrix::zeros(n as usize, block);
        for (c, &value) in columns.iter().enumerate() {
            for (r, bit) in column_bits(value, n).into_iter().enumerate() {
                parity_check.set(r, c, bit);
            }
        }

        let mut a_t = BitMatrix::zeros(data, n as usize);
        for c in 0..data {
            for r in 0..n as usize {
                a_t.set(c, r, parity_check.get(r, c));
            }
        }
        let generator = BitMatrix::identity(data)
            .hstack(&a_t)
            .ok_or_else(|| ModemError::invalid("generator dimensions disagree"))?;

        Ok(Self {
            n,
            parity_check,
            generator,
        })
    }

    pub fn parity_check_matrix(&self) -> &BitMatrix {
        &self.parity_check
    }

    pub fn generator_matrix(&self) -> &BitMatrix {
        &self.generator
    }

    fn syndrome(&self, codeword: &[u8]) -> ModemResult<Vec<u8>> {
        self.parity_check
            .mul(&BitMatrix::column_vector(codeword))
            .map(|s| s.as_slice().to_vec())
            .ok_or_else(|| ModemError::invalid("codeword length disagrees with H"))
    }
}

impl BlockCode for Hamming {
    fn data_len(&self) -> usize {
        self.generator.rows()
    }

    fn block_len(&self) -> usize {
        self.generator.cols()
    }

    fn encode(&self, bits: &[Bit]) -> ModemResult<Vec<Bit>> {
        let k = self.data_len();
        if bits.len() % k != 0 {
            return Err(ModemError::InputLengthMismatch {
                length: bits.len(),
                block: k,
            });
        }
        let values = bit_values(bits)?;

        let mut out = Vec::with_capacity(bits.len() / k * self.block_len());
        for chunk in values.chunks(k) {
            let codeword = BitMatrix::row_vector(chunk)
                .mul(&self.generator)
                .ok_or_else(|| ModemError::invalid("message block disagrees with G"))?;
            out.extend(codeword.as_slice().iter().map(|&b| Bit::from_value(b)));
        }
        Ok(out)
    }

    fn decode(&self, code: &[Bit]) -> ModemResult<Vec<Bit>> {
        let (k, block) = (self.data_len(), self.block_len());
        if code.len() % block != 0 {
            return Err(ModemError::InputLengthMismatch {
                length: code.len(),
                block,
            });
        }
        let values = bit_values(code)?;

        let mut out = Vec::with_capacity(code.len() / block * k);
        for (idx, chunk) in values.chunks(block).enumerate() {
            let mut codeword = chunk.to_vec();
            let syndrome = self.syndrome(&codeword)?;
            if syndrome.iter().any(|&s| s != 0) {
                if let Some(pos) = (0..block).find(|&c| self.parity_check.column(c) == syndrome) {
                    trace!(codeword = idx, position = pos, "correcting bit");
                    codeword[pos] ^= 1;
                }
            }
            out.extend(codeword[..k].iter().map(|&b| Bit::from_value(b)));
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits::{bits_to_string, parse_bits};
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn random_message(rng: &mut ChaCha8Rng, len: usize) -> Vec<Bit> {
        (0..len).map(|_| Bit::from_value(rng.gen_range(0..2))).collect()
    }

    fn flip(bit: Bit) -> Bit {
        match bit {
            Bit::Zero => Bit::One,
            Bit::One => Bit::Zero,
            Bit::Unknown => Bit::Unknown,
        }
    }

    #[test]
    fn test_block_sizes() {
        for (n, k, block) in [(2, 1, 3), (3, 4, 7), (4, 11, 15)] {
            let h = Hamming::new(n).unwrap();
            assert_eq!(h.data_len(), k);
            assert_eq!(h.block_len(), block);
        }
    }

    #[test]
    fn test_hamming_7_4_matrices() {
        let h = Hamming::new(3).unwrap();
        // columns 7 6 5 3 4 2 1
        assert_eq!(
            h.parity_check_matrix().as_slice(),
            &[1, 1, 1, 0, 1, 0, 0, 1, 1, 0, 1, 0, 1, 0, 1, 0, 1, 1, 0, 0, 1]
        );
        let g = h.generator_matrix();
        let h_gt = h.parity_check_matrix().mul(&g.transpose()).unwrap();
        assert!(h_gt.as_slice().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_hamming_7_4_codewords() {
        let h = Hamming::new(3).unwrap();
        let coded = h.encode(&parse_bits("10000001").unwrap()).unwrap();
        assert_eq!(bits_to_string(&coded), "10001110001011");
    }

    #[test]
    fn test_roundtrip_without_errors() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for n in 2..=4 {
            let h = Hamming::new(n).unwrap();
            for blocks in 1..5 {
                let message = random_message(&mut rng, blocks * h.data_len());
                let decoded = h.decode(&h.encode(&message).unwrap()).unwrap();
                assert_eq!(decoded, message, "n = {}, blocks = {}", n, blocks);
            }
        }
    }

    #[test]
    fn test_single_error_per_codeword_corrected() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for n in 2..=4 {
            let h = Hamming::new(n).unwrap();
            let block = h.block_len();
            let message = random_message(&mut rng, 3 * h.data_len());
            let coded = h.encode(&message).unwrap();
            for pos in 0..block {
                let mut received = coded.clone();
                for cw in 0..3 {
                    let p = (pos + cw) % block;
                    received[cw * block + p] = flip(received[cw * block + p]);
                }
                let decoded = h.decode(&received).unwrap();
                assert_eq!(decoded, message, "n = {}, error at {}", n, pos);
            }
        }
    }

    #[test]
    fn test_double_error_is_miscorrected() {
        let h = Hamming::new(3).unwrap();
        // both parity bits 2 and 1 flipped: syndrome 3 lands on data bit 3
        let received = parse_bits("0000011").unwrap();
        let decoded = h.decode(&received).unwrap();
        assert_eq!(bits_to_string(&decoded), "0001");
    }

    #[test]
    fn test_length_and_alphabet_errors() {
        let h = Hamming::new(3).unwrap();
        assert_eq!(
            h.encode(&parse_bits("101").unwrap()),
            Err(ModemError::InputLengthMismatch { length: 3, block: 4 })
        );
        assert_eq!(
            h.decode(&parse_bits("10101").unwrap()),
            Err(ModemError::InputLengthMismatch { length: 5, block: 7 })
        );
        assert!(matches!(
            h.encode(&parse_bits("10x1").unwrap()),
            Err(ModemError::InvalidEncoding(_))
        ));
        assert!(matches!(Hamming::new(1), Err(ModemError::InvalidParameter(_))));
    }
}
