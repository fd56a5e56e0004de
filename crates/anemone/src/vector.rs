//! Vector comparison tier.
//!
//! Steps through both buffers in chunks of up to 16 bytes and asks the
//! chunk kernel in [`crate::simd`] for the index of the first mismatching
//! byte within the chunk's valid length. Unlike the word tier, a mismatch
//! pinpoints the exact differing byte, so ordering results carry the same
//! sign *and* magnitude as the byte tier.

use crate::simd::first_diff16;

/// Vector-tier three-way comparison, 16 bytes per step.
///
/// Returns the signed difference of the two buffers' bytes at the first
/// mismatching position, or 0 when all `len` bytes are equal. Identical
/// to [`memcmp8`](crate::memcmp8) on every input.
///
/// # Safety
///
/// `a` and `b` must each point to at least `len` readable bytes followed
/// by at least [`PADDING`](crate::PADDING) readable bytes. Chunk loads are
/// always full-width; bytes past `len` are read but excluded from the
/// comparison by the chunk kernel's explicit length bound.
pub unsafe fn memcmp128(a: *const u8, b: *const u8, len: usize) -> i32 {
  let mut a = a;
  let mut b = b;
  let mut rem = len;
  while rem > 0 {
    let chunk = if rem < 16 { rem } else { 16 };
    // SAFETY: `chunk <= rem` valid bytes remain; the padding guarantee
    // covers the full 16-byte loads behind `first_diff16`.
    let idx = unsafe { first_diff16(a, b, chunk) };
    if idx < chunk {
      // SAFETY: `idx < chunk <= rem`, a valid byte in both buffers.
      let (x, y) = unsafe { (*a.add(idx), *b.add(idx)) };
      return i32::from(x) - i32::from(y);
    }
    // Advance by the full register width; only the length accounting uses
    // `chunk`, which zeroes `rem` on a final partial step.
    // SAFETY: the stepped pointers stay inside the padded allocations
    // (a final partial chunk starts at most 15 bytes before the padding).
    a = unsafe { a.add(16) };
    b = unsafe { b.add(16) };
    rem -= chunk;
  }
  0
}

/// Vector-tier equality, 16 bytes per step.
///
/// Returns 0 iff all `len` bytes are equal, 1 otherwise; the mismatch
/// position the chunk kernel reports is not worth converting into a
/// difference here.
///
/// # Safety
///
/// Same contract as [`memcmp128`].
pub unsafe fn memeq128(a: *const u8, b: *const u8, len: usize) -> i32 {
  let mut a = a;
  let mut b = b;
  let mut rem = len;
  while rem > 0 {
    let chunk = if rem < 16 { rem } else { 16 };
    // SAFETY: as in `memcmp128`.
    let idx = unsafe { first_diff16(a, b, chunk) };
    if idx < chunk {
      return 1;
    }
    // SAFETY: as in `memcmp128`.
    a = unsafe { a.add(16) };
    b = unsafe { b.add(16) };
    rem -= chunk;
  }
  0
}

#[cfg(test)]
mod tests {
  use super::*;

  fn padded<const N: usize>(data: &[u8], fill: u8) -> [u8; N] {
    assert!(data.len() + crate::PADDING <= N);
    let mut v = [fill; N];
    v[..data.len()].copy_from_slice(data);
    v
  }

  #[test]
  fn exact_magnitude_at_mismatch() {
    let a: [u8; 48] = padded(b"abc", 0);
    let b: [u8; 48] = padded(b"abd", 0);
    assert_eq!(unsafe { memcmp128(a.as_ptr(), b.as_ptr(), 3) }, -1);
    assert_eq!(unsafe { memcmp128(b.as_ptr(), a.as_ptr(), 3) }, 1);
  }

  #[test]
  fn mismatch_in_second_chunk() {
    let mut a = [7u8; 64];
    let mut b = [7u8; 64];
    a[20] = 0xFF;
    b[20] = 0x00;
    assert_eq!(unsafe { memcmp128(a.as_ptr(), b.as_ptr(), 21) }, 255);
    assert_eq!(unsafe { memeq128(a.as_ptr(), b.as_ptr(), 21) }, 1);
  }

  #[test]
  fn padding_does_not_leak_into_partial_chunk() {
    let a: [u8; 48] = padded(b"0123456789abcdefxyz", 0xEE);
    let b: [u8; 48] = padded(b"0123456789abcdefxyz", 0x11);
    assert_eq!(unsafe { memcmp128(a.as_ptr(), b.as_ptr(), 19) }, 0);
    assert_eq!(unsafe { memeq128(a.as_ptr(), b.as_ptr(), 19) }, 0);
  }

  #[test]
  fn zero_length() {
    let a = [0u8; 16];
    assert_eq!(unsafe { memcmp128(a.as_ptr(), a.as_ptr(), 0) }, 0);
    assert_eq!(unsafe { memeq128(a.as_ptr(), a.as_ptr(), 0) }, 0);
  }
}
