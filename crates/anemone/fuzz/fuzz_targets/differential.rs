//! Differential fuzzing of the comparison tiers.
//!
//! Every tier must agree with the byte reference on sign, every equality
//! kernel on zero-ness, and the safe portable routines with the standard
//! slice order.

#![no_main]

use anemone::{CmpTier, PaddedBuf, portable};
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct CasePair {
  a: Vec<u8>,
  b: Vec<u8>,
}

fuzz_target!(|case: CasePair| {
  let n = case.a.len().min(case.b.len());
  let (a, b) = (&case.a[..n], &case.b[..n]);

  let pa = PaddedBuf::from_slice(a);
  let pb = PaddedBuf::from_slice(b);
  // SAFETY: `PaddedBuf` allocations carry the required trailing padding.
  let reference = unsafe { (CmpTier::Byte.ordering_fn())(pa.as_padded_ptr(), pb.as_padded_ptr(), n) };

  for tier in CmpTier::ALL {
    // SAFETY: as above.
    let ord = unsafe { (tier.ordering_fn())(pa.as_padded_ptr(), pb.as_padded_ptr(), n) };
    assert_eq!(
      ord.signum(),
      reference.signum(),
      "{tier} ordering sign mismatch: got={ord}, reference={reference}, len={n}"
    );

    // SAFETY: as above.
    let eq = unsafe { (tier.equality_fn())(pa.as_padded_ptr(), pb.as_padded_ptr(), n) };
    assert_eq!(eq == 0, reference == 0, "{tier} equality mismatch: got={eq}, reference={reference}, len={n}");
  }

  // Magnitude-exact tiers must reproduce the reference value itself.
  // SAFETY: as above.
  let vector = unsafe { (CmpTier::Vector.ordering_fn())(pa.as_padded_ptr(), pb.as_padded_ptr(), n) };
  assert_eq!(vector, reference, "vector magnitude mismatch at len={n}");

  // Safe routines against the std oracle.
  assert_eq!(portable::compare(a, b), a.cmp(b));
  assert_eq!(portable::equal(a, b), a == b);
  assert_eq!(pa.cmp(&pb), a.cmp(b));
});
