use crate::types::*;
use bitvec::prelude::*;

pub fn hexdump_slice(slice: &U8SRep) -> String {
  slice
    .iter()
    .fold("".to_owned(), |s, b| format!("{}{:02X}", s, b))
}

/// Renders bits in index order, i.e., index 0 comes first.
pub fn bitdump_bitslice<T, O>(bits: &BitSlice<T, O>) -> String
where
  T: BitStore,
  O: BitOrder,
{
  bits.iter().fold("".to_owned(), |s, b| {
    format!("{}{}", s, if *b { 1 } else { 0 })
  })
}

/// Even parity bit of the given bits: true iff an odd number of them is set.
pub fn even_parity(bits: &BSRep) -> bool {
  bits.count_ones() % 2 == 1
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn hexdump_slice_test() {
    let sliced = &{ (0usize..16).map(|x| x as u8).collect::<U8VRep>() };
    assert_eq!("000102030405060708090A0B0C0D0E0F", hexdump_slice(sliced));
    assert_eq!("", hexdump_slice(&[]));
    assert_eq!("70FF", hexdump_slice(&[0x70, 0xFF]));
  }

  #[test]
  fn bitdump_bitslice_test() {
    assert_eq!("111", bitdump_bitslice(bitvec![u8, Lsb0; 1; 3].as_bitslice()));
    assert_eq!(
      "00001110",
      bitdump_bitslice(BVRep::from_element(0b0111_0000).as_bitslice())
    );
  }

  #[test]
  fn even_parity_test() {
    assert!(!even_parity(&bitvec![u8, Lsb0; 0; 5]));
    assert!(even_parity(&bitvec![u8, Lsb0; 1, 0, 0]));
    assert!(!even_parity(&bitvec![u8, Lsb0; 1, 1, 0]));
    assert!(even_parity(&bitvec![u8, Lsb0; 1, 1, 1]));
    assert!(!even_parity(BitSlice::<u8, Lsb0>::empty()));
  }
}
