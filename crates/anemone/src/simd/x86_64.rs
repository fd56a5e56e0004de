//! x86_64 chunk-compare kernel (SSE4.2 `pcmpestri`).
//!
//! # Safety
//!
//! Uses `unsafe` for x86 SIMD intrinsics. This module is only compiled
//! when the build enables the `sse4.2` target feature, so the instruction
//! is statically available; no runtime detection is involved.
#![allow(unsafe_code)]

use core::arch::x86_64::{
  __m128i, _SIDD_CMP_EQUAL_EACH, _SIDD_NEGATIVE_POLARITY, _SIDD_UBYTE_OPS, _mm_cmpestri, _mm_loadu_si128,
};

/// Unsigned bytes, pairwise equality, negated result: `pcmpestri` reports
/// the lowest lane where the chunks do NOT match.
const FIRST_DIFF: i32 = _SIDD_UBYTE_OPS | _SIDD_CMP_EQUAL_EACH | _SIDD_NEGATIVE_POLARITY;

/// Index of the first byte where the two chunks differ, or a sentinel
/// `>= len` when their first `len` bytes agree.
///
/// Lanes past `len` are excluded by the instruction's explicit length
/// operands, not by masking, so the full-width loads are harmless.
///
/// # Safety
///
/// `a` and `b` must each point to `len` readable bytes (`len <= 16`)
/// followed by enough readable padding to cover a full 16-byte load.
#[inline]
pub(crate) unsafe fn first_diff16(a: *const u8, b: *const u8, len: usize) -> usize {
  debug_assert!(len <= 16);
  // SAFETY: the caller's padding guarantee covers both 16-byte loads.
  unsafe {
    let va = _mm_loadu_si128(a.cast::<__m128i>());
    let vb = _mm_loadu_si128(b.cast::<__m128i>());
    _mm_cmpestri::<FIRST_DIFF>(va, len as i32, vb, len as i32) as usize
  }
}
