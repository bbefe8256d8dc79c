mod util;

use crate::{error::*, types::*, util::even_parity, BitVector, CorrectionStrategy, DecodeResult};
use bitvec::prelude::*;
use log::debug;
use util::{check_bit_count, data_positions, lsb_to_usize};

/// Extended Hamming code: single error correction, double error detection (SECDED).
///
/// An even parity bit over the data is appended to the data before plain Hamming encoding.
/// Codeword positions are 1-based; power-of-two positions hold check bits and the others hold
/// the extended data in ascending order. Storage index is position - 1.
#[derive(Debug, Clone)]
pub struct HammingCode {
  pub info_len: usize,  // data bits given by the caller
  pub data_len: usize,  // info_len + appended parity bit
  pub check_len: usize, // r
  pub code_len: usize,  // data_len + r
  data_positions: Vec<usize>,
}

impl HammingCode {
  pub fn new(info_len: usize) -> Result<Self> {
    ensure!(info_len > 0, "Data width must be positive");
    let data_len = info_len + 1;
    let check_len = check_bit_count(data_len);
    ensure!(check_len < usize::BITS as usize, "Data width too large");
    let code_len = data_len + check_len;

    let data_positions = data_positions(code_len);
    assert_eq!(data_positions.len(), data_len);

    Ok(HammingCode {
      info_len,
      data_len,
      check_len,
      code_len,
      data_positions,
    })
  }

  /// Bit `i` is set iff check `i` sees an odd number of ones over the positions having bit `i`
  /// set, its own position included.
  fn compute_parity_bits(&self, encoded: &BSRep) -> BVRep {
    (0..self.check_len)
      .map(|i| {
        let mask = 1usize << i;
        let ones = encoded
          .iter_ones()
          .filter(|idx| (idx + 1) & mask != 0)
          .count();
        ones % 2 == 1
      })
      .collect()
  }

  fn fetch_extended(&self, encoded: &BSRep) -> BVRep {
    self.data_positions.iter().map(|pos| encoded[*pos]).collect()
  }

  fn parity_agrees(&self, extended: &BSRep) -> bool {
    extended[self.info_len] == even_parity(&extended[..self.info_len])
  }

  fn strip_parity(&self, extended: &BSRep) -> BitVector {
    BitVector::from(extended[..self.info_len].to_bitvec())
  }
}

impl CorrectionStrategy for HammingCode {
  fn data_bit_len(&self) -> usize {
    self.info_len
  }

  fn code_bit_len(&self) -> usize {
    self.code_len
  }

  fn encode(&self, data: &BitVector) -> BitVector {
    assert_eq!(data.len(), self.info_len, "Invalid data length");

    let mut extended = data.as_bitslice().to_bitvec();
    extended.push(even_parity(data.as_bitslice()));

    let mut encoded = bitvec![u8, Lsb0; 0; self.code_len];
    for (pos, bit) in self.data_positions.iter().zip(extended.iter().by_vals()) {
      encoded.set(*pos, bit);
    }

    let parity = self.compute_parity_bits(&encoded);
    for (i, bit) in parity.iter().by_vals().enumerate() {
      encoded.set((1 << i) - 1, bit);
    }
    BitVector::from(encoded)
  }

  fn decode(&self, stored: &BitVector) -> DecodeResult {
    assert_eq!(stored.len(), self.code_len, "Invalid codeword length");

    let syndrome = lsb_to_usize(&self.compute_parity_bits(stored.as_bitslice()));
    let uncorrected = self.fetch_extended(stored.as_bitslice());

    if syndrome == 0 {
      return DecodeResult {
        decoded_bits: self.strip_parity(&uncorrected),
        stored_bits: stored.to_owned(),
        original_bits: None,
        success: true,
        error_detected: false,
        correct: None,
        num_corrupt_bits: 0,
        num_corrected_bits: 0,
      };
    }

    if syndrome <= self.code_len {
      let mut corrected = stored.as_bitslice().to_bitvec();
      let val = corrected[syndrome - 1];
      corrected.set(syndrome - 1, !val);

      let extended = self.fetch_extended(&corrected);
      if self.parity_agrees(&extended) {
        debug!("Corrected single bit error at position {}", syndrome);
        return DecodeResult {
          decoded_bits: self.strip_parity(&extended),
          stored_bits: stored.to_owned(),
          original_bits: None,
          success: true,
          error_detected: true,
          correct: None,
          num_corrupt_bits: 1,
          num_corrected_bits: 1,
        };
      }
      debug!(
        "Syndrome {} leaves the appended parity broken: double bit error",
        syndrome
      );
    } else {
      debug!(
        "Syndrome {} is beyond the {}-bit codeword: uncorrectable",
        syndrome, self.code_len
      );
    }

    // the tentative flip means nothing here, so hand back the bits as stored
    DecodeResult {
      decoded_bits: self.strip_parity(&uncorrected),
      stored_bits: stored.to_owned(),
      original_bits: None,
      success: false,
      error_detected: true,
      correct: None,
      num_corrupt_bits: 2,
      num_corrected_bits: 0,
    }
  }
}
