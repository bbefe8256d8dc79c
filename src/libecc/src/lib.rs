mod bit_vector;
mod error;
pub mod types;
mod util;

mod hamming;
mod parity;

pub use bit_vector::BitVector;
pub use hamming::HammingCode;
pub use parity::ParityBit;
pub use util::{bitdump_bitslice, hexdump_slice};

/// Error correcting (or detecting) code over fixed-width bit blocks.
///
/// Implementors hold no mutable state: `encode` and `decode` are pure functions of their input,
/// so a single instance can be shared by any number of owners.
pub trait CorrectionStrategy: std::fmt::Debug + Send + Sync {
  /// Width of a data block.
  fn data_bit_len(&self) -> usize;
  /// Width of an encoded block.
  fn code_bit_len(&self) -> usize;
  fn check_bit_len(&self) -> usize {
    self.code_bit_len() - self.data_bit_len()
  }

  /// Panics if `data` is not exactly `data_bit_len()` wide.
  fn encode(&self, data: &BitVector) -> BitVector;
  /// Never fails: whatever was found in `stored` is reported through the result.
  /// Panics if `stored` is not exactly `code_bit_len()` wide.
  fn decode(&self, stored: &BitVector) -> DecodeResult;
}

/// Outcome of a single decode.
///
/// `success` is what the code itself believes about `decoded_bits`. Whether the data is really
/// intact can only be told with the ground truth, so `original_bits` and `correct` stay `None`
/// until the owner of the ground truth fills them in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeResult {
  pub decoded_bits: BitVector,
  pub stored_bits: BitVector,
  pub original_bits: Option<BitVector>,
  pub success: bool,
  pub error_detected: bool,
  pub correct: Option<bool>,
  pub num_corrupt_bits: usize,
  pub num_corrected_bits: usize,
}

impl DecodeResult {
  /// Attaches the ground truth and derives `correct` from it.
  pub fn with_original(mut self, original: &BitVector) -> Self {
    self.correct = Some(self.decoded_bits == *original);
    self.original_bits = Some(original.to_owned());
    self
  }

  /// True only when ground truth is attached and matches the decoded bits.
  pub fn is_correct(&self) -> bool {
    self.correct.unwrap_or(false)
  }
}

pub trait BitDump {
  fn bitdump(&self) -> String;
}
impl BitDump for BitVector {
  fn bitdump(&self) -> String {
    bitdump_bitslice(self.as_bitslice())
  }
}
impl BitDump for types::BSRep {
  fn bitdump(&self) -> String {
    bitdump_bitslice(self)
  }
}

pub trait HexDump {
  fn hexdump(&self) -> String;
}
impl HexDump for BitVector {
  fn hexdump(&self) -> String {
    hexdump_slice(&self.to_bytes())
  }
}
impl HexDump for types::U8SRep {
  fn hexdump(&self) -> String {
    hexdump_slice(self)
  }
}
