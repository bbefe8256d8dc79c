use crate::{error::*, types::*};
use bitvec::prelude::*;
use num_traits::{FromBytes, ToBytes};

/// Fixed-width sequence of bits. Index 0 is the least significant, first-stored bit.
///
/// Bytes map onto bits byte-major and least-significant-bit first within each byte,
/// i.e., bit `i` is bit `i % 8` of byte `i / 8`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BitVector(BVRep);

impl BitVector {
  /// All-zero vector of the given width.
  pub fn new(width: usize) -> Self {
    BitVector(bitvec![u8, Lsb0; 0; width])
  }

  /// Takes the first `length_bits` bits of `buf`; the rest of the vector up to `width` is zero.
  pub fn from_buffer(buf: &U8SRep, length_bits: usize, width: usize) -> Result<Self> {
    ensure!(length_bits <= width, "Bit length exceeds the width");
    ensure!(length_bits <= buf.len() * 8, "Buffer is shorter than the bit length");

    let mut bits = BVRep::with_capacity(width);
    bits.extend_from_bitslice(&buf.view_bits::<Lsb0>()[..length_bits]);
    bits.resize(width, false);
    Ok(BitVector(bits))
  }

  /// Reinterprets a scalar as its little-endian bytes.
  pub fn from_value<T: ToBytes>(value: T, width: usize) -> Result<Self> {
    let bytes = value.to_le_bytes();
    let buf = bytes.as_ref();
    Self::from_buffer(buf, buf.len() * 8, width)
  }

  /// Writes the bits into the first `ceil(width / 8)` bytes of `buf`.
  /// Padding bits of the last written byte are zero, bytes past it are left untouched.
  pub fn to_buffer(&self, buf: &mut U8SRep) -> Result<()> {
    let byte_len = self.byte_len();
    ensure!(buf.len() >= byte_len, "Buffer is too short for the bit vector");
    buf[..byte_len].copy_from_slice(&self.to_bytes());
    Ok(())
  }

  pub fn to_bytes(&self) -> U8VRep {
    self.0.chunks(8).map(|byte| byte.load_le::<u8>()).collect()
  }

  /// Inverse of [`BitVector::from_value`]. Bits beyond the scalar's width are dropped.
  pub fn to_value<T>(&self) -> T
  where
    T: FromBytes,
    T::Bytes: Sized + Default,
  {
    let mut bytes = T::Bytes::default();
    let buf = bytes.as_mut();
    let resized = self.resize_copy(buf.len() * 8);
    buf.copy_from_slice(&resized.to_bytes());
    T::from_le_bytes(&bytes)
  }

  /// Copies bits `[0, min(len, width))` into a vector of `width` bits, zero-filling the rest.
  pub fn resize_copy(&self, width: usize) -> Self {
    let mut bits = self.0.clone();
    bits.resize(width, false);
    BitVector(bits)
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn byte_len(&self) -> usize {
    (self.0.len() + 7) / 8
  }

  pub fn population_count(&self) -> usize {
    self.0.count_ones()
  }

  pub fn test(&self, idx: usize) -> bool {
    assert!(idx < self.len(), "Bit index {} out of range {}", idx, self.len());
    self.0[idx]
  }

  pub fn set(&mut self, idx: usize, value: bool) {
    assert!(idx < self.len(), "Bit index {} out of range {}", idx, self.len());
    self.0.set(idx, value);
  }

  pub fn flip(&mut self, idx: usize) {
    let val = self.test(idx);
    self.0.set(idx, !val);
  }

  pub fn as_bitslice(&self) -> &BSRep {
    self.0.as_bitslice()
  }
}

impl From<BVRep> for BitVector {
  fn from(bits: BVRep) -> Self {
    BitVector(bits)
  }
}

impl AsRef<BSRep> for BitVector {
  fn as_ref(&self) -> &BSRep {
    self.as_bitslice()
  }
}
