mod chunk;
mod error;

use crate::error::*;
use std::sync::Arc;

pub use chunk::Chunk;
pub use libecc::{
  BitDump, BitVector, CorrectionStrategy, DecodeResult, HammingCode, HexDump, ParityBit,
};

/// Selects a correction scheme and the width of the data it protects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ecc {
  /// Even parity bit over `usize` data bits.
  ParityBit(usize),
  /// Extended Hamming code over `usize` data bits.
  Hamming(usize),
}

impl Ecc {
  pub fn setup(&self) -> Result<Arc<dyn CorrectionStrategy>> {
    let strategy: Arc<dyn CorrectionStrategy> = match *self {
      Ecc::ParityBit(data_bits) => Arc::new(ParityBit::new(data_bits)?),
      Ecc::Hamming(data_bits) => Arc::new(HammingCode::new(data_bits)?),
    };
    Ok(strategy)
  }

  pub fn chunk(&self) -> Result<Chunk> {
    Ok(Chunk::new(self.setup()?))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_setup() {
    let parity = Ecc::ParityBit(112).setup().unwrap();
    assert_eq!(112, parity.data_bit_len());
    assert_eq!(113, parity.code_bit_len());
    assert_eq!(1, parity.check_bit_len());

    let hamming = Ecc::Hamming(7).setup().unwrap();
    assert_eq!(7, hamming.data_bit_len());
    assert_eq!(12, hamming.code_bit_len());
    assert_eq!(5, hamming.check_bit_len());

    assert!(Ecc::ParityBit(0).setup().is_err());
    assert!(Ecc::Hamming(0).chunk().is_err());
  }

  #[test]
  fn test_chunks_share_strategy() {
    let hamming = Ecc::Hamming(16).setup().unwrap();
    let mut first = Chunk::new(hamming.clone());
    let mut second = Chunk::new(hamming.clone());
    assert_eq!(3, Arc::strong_count(&hamming));

    first.store(BitVector::from_value(0x1234u16, 16).unwrap());
    second.store(BitVector::from_value(0xABCDu16, 16).unwrap());
    first.corrupt(4);

    assert_eq!(0x1234u16, first.retrieve().decoded_bits.to_value::<u16>());
    assert_eq!(0xABCDu16, second.retrieve().decoded_bits.to_value::<u16>());
    assert!(Arc::ptr_eq(first.strategy(), second.strategy()));
  }
}
