use crate::{error::*, types::*, util::even_parity, BitVector, CorrectionStrategy, DecodeResult};
use bitvec::prelude::*;
use log::debug;

/// Single even parity bit at index 0, data at indices `1..=info_len`.
/// Detects any odd number of flipped bits, corrects nothing.
#[derive(Debug, Clone)]
pub struct ParityBit {
  pub info_len: usize,
}

impl ParityBit {
  pub fn new(info_len: usize) -> Result<Self> {
    ensure!(info_len > 0, "Data width must be positive");
    Ok(ParityBit { info_len })
  }
}

impl CorrectionStrategy for ParityBit {
  fn data_bit_len(&self) -> usize {
    self.info_len
  }

  fn code_bit_len(&self) -> usize {
    self.info_len + 1
  }

  fn encode(&self, data: &BitVector) -> BitVector {
    assert_eq!(data.len(), self.info_len, "Invalid data length");

    let mut encoded: BVRep = bitvec![u8, Lsb0; 0; 1];
    encoded.extend_from_bitslice(data.as_bitslice());
    encoded.set(0, even_parity(data.as_bitslice()));
    debug_assert_eq!(encoded.count_ones() % 2, 0);
    BitVector::from(encoded)
  }

  fn decode(&self, stored: &BitVector) -> DecodeResult {
    assert_eq!(stored.len(), self.code_bit_len(), "Invalid codeword length");

    let success = stored.population_count() % 2 == 0;
    if !success {
      debug!("Parity mismatch over {} bits", stored.len());
    }

    DecodeResult {
      decoded_bits: BitVector::from(stored.as_bitslice()[1..].to_bitvec()),
      stored_bits: stored.to_owned(),
      original_bits: None,
      success,
      error_detected: !success,
      correct: None,
      num_corrupt_bits: usize::from(!success),
      num_corrected_bits: 0,
    }
  }
}
