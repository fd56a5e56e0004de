//! Padding-independence fuzzing.
//!
//! The kernels may read the padding but its contents must never change a
//! result. Two allocations with identical logical bytes and arbitrary,
//! different padding must compare equal through every tier.

#![no_main]

use anemone::{CmpTier, PADDING};
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct PaddingCase {
  data: Vec<u8>,
  pad_a: [u8; PADDING],
  pad_b: [u8; PADDING],
}

fuzz_target!(|case: PaddingCase| {
  let len = case.data.len();

  let mut a = case.data.clone();
  let mut b = case.data;
  a.extend_from_slice(&case.pad_a);
  b.extend_from_slice(&case.pad_b);

  for tier in CmpTier::ALL {
    // SAFETY: both vectors hold `len + PADDING` initialized bytes.
    let ord = unsafe { (tier.ordering_fn())(a.as_ptr(), b.as_ptr(), len) };
    let eq = unsafe { (tier.equality_fn())(a.as_ptr(), b.as_ptr(), len) };
    assert_eq!(ord, 0, "{tier} ordering saw the padding at len={len}");
    assert_eq!(eq, 0, "{tier} equality saw the padding at len={len}");
  }
});
