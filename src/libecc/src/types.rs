use bitvec::prelude::*;

pub type BVRep = BitVec<u8, Lsb0>;
pub type BSRep = BitSlice<u8, Lsb0>;
pub type U8VRep = Vec<u8>;
pub type U8SRep = [u8];
