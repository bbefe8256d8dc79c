use crate::types::*;

/// Smallest `r` such that `2^r >= data_len + r + 1`.
pub fn check_bit_count(data_len: usize) -> usize {
  let mut r = 0usize;
  while (1usize << r) < data_len + r + 1 {
    r += 1;
  }
  r
}

pub fn is_power_of_two(val: usize) -> bool {
  val != 0 && val & (val - 1) == 0
}

/// 0-based storage indices of the data positions in a codeword of `code_len` bits.
/// Check bits sit at 1-based positions that are powers of two.
pub fn data_positions(code_len: usize) -> Vec<usize> {
  (0..code_len)
    .filter(|idx| !is_power_of_two(idx + 1))
    .collect()
}

/// Reads bit `i` as weight `2^i`.
pub fn lsb_to_usize(bv: &BSRep) -> usize {
  assert!(bv.len() <= usize::BITS as usize);
  bv.iter_ones().fold(0usize, |acc, idx| acc | (1 << idx))
}
