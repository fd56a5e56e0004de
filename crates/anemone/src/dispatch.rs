//! Default comparison dispatchers.
//!
//! Both entry points forward unconditionally to the word tier. The vector
//! tier pinpoints the first mismatching byte and so preserves magnitude,
//! but in measured practice the word tier's simpler loop wins on average,
//! so it is the general-purpose default; callers wanting exact-position
//! semantics at SIMD throughput reach for
//! [`memcmp128`](crate::memcmp128) explicitly. Selection is fixed at
//! compile time; there is no runtime CPU detection.

use crate::word;

/// General-purpose three-way comparison.
///
/// Delegates to [`memcmp64`](crate::memcmp64); sign-only, like that tier.
///
/// # Safety
///
/// Same contract as [`memcmp64`](crate::memcmp64).
#[inline]
pub unsafe fn memcmp(a: *const u8, b: *const u8, len: usize) -> i32 {
  // SAFETY: identical contract.
  unsafe { word::memcmp64(a, b, len) }
}

/// General-purpose equality.
///
/// Delegates to [`memeq64`](crate::memeq64); 0 iff equal.
///
/// # Safety
///
/// Same contract as [`memeq64`](crate::memeq64).
#[inline]
pub unsafe fn memeq(a: *const u8, b: *const u8, len: usize) -> i32 {
  // SAFETY: identical contract.
  unsafe { word::memeq64(a, b, len) }
}
