//! aarch64 chunk-compare kernel (NEON).
//!
//! NEON has no `pcmpestri` equivalent, but the same answer falls out of a
//! bytewise-equal mask: narrowing the 16 equal/not-equal lanes to one
//! nibble each packs the whole comparison into a single 64-bit value whose
//! first zero nibble is the first differing byte.
//!
//! # Safety
//!
//! Uses `unsafe` for NEON intrinsics, which are baseline on aarch64.
#![allow(unsafe_code)]

use core::arch::aarch64::{vceqq_u8, vget_lane_u64, vld1q_u8, vreinterpret_u64_u8, vreinterpretq_u16_u8, vshrn_n_u16};

/// Index of the first byte where the two chunks differ, or a sentinel
/// `>= len` when their first `len` bytes agree.
///
/// Differences in the padding lanes past `len` may be reported; callers
/// discard any index `>= len`, which keeps the padding irrelevant.
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
    let va = vld1q_u8(a);
    let vb = vld1q_u8(b);
    // 0xFF per equal lane, narrowed to one nibble per lane.
    let eq = vceqq_u8(va, vb);
    let nibbles = vshrn_n_u16::<4>(vreinterpretq_u16_u8(eq));
    let mask = vget_lane_u64::<0>(vreinterpret_u64_u8(nibbles));
    // Flipping makes differing lanes the set nibbles.
    let diff = !mask;
    if diff == 0 {
      return 16;
    }
    (diff.trailing_zeros() as usize) / 4
  }
}
