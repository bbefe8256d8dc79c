use libecc::{BitVector, CorrectionStrategy, DecodeResult};
use log::debug;
use std::sync::Arc;

/// A block of simulated memory protected by a correction strategy.
///
/// The chunk keeps the encoded bits, which may be corrupted at will, next to the data that was
/// last stored, so that every retrieval can be checked against the ground truth.
#[derive(Debug)]
pub struct Chunk<C = dyn CorrectionStrategy>
where
  C: CorrectionStrategy + ?Sized,
{
  strategy: Arc<C>,
  stored: BitVector,
  original: BitVector,
}

impl<C> Chunk<C>
where
  C: CorrectionStrategy + ?Sized,
{
  /// Starts out holding the encoding of the all-zero block.
  pub fn new(strategy: Arc<C>) -> Self {
    let original = BitVector::new(strategy.data_bit_len());
    let stored = strategy.encode(&original);
    Chunk {
      strategy,
      stored,
      original,
    }
  }

  /// Panics if `data` is not as wide as the strategy's data block.
  pub fn store(&mut self, data: BitVector) {
    self.stored = self.strategy.encode(&data);
    self.original = data;
  }

  /// Flips one stored bit. Repeated calls on the same index undo each other.
  pub fn corrupt(&mut self, bit_idx: usize) {
    self.stored.flip(bit_idx);
  }

  pub fn retrieve(&self) -> DecodeResult {
    let mut result = self.strategy.decode(&self.stored).with_original(&self.original);
    result.stored_bits = self.stored.to_owned();

    if result.correct != Some(result.success) {
      debug!(
        "Decoder reported success={} but data is {}",
        result.success,
        if result.is_correct() { "intact" } else { "corrupt" }
      );
    }
    result
  }

  pub fn strategy(&self) -> &Arc<C> {
    &self.strategy
  }

  pub fn stored_bits(&self) -> &BitVector {
    &self.stored
  }

  pub fn original_bits(&self) -> &BitVector {
    &self.original
  }
}

impl<C> Clone for Chunk<C>
where
  C: CorrectionStrategy + ?Sized,
{
  fn clone(&self) -> Self {
    Chunk {
      strategy: Arc::clone(&self.strategy),
      stored: self.stored.clone(),
      original: self.original.clone(),
    }
  }
}
