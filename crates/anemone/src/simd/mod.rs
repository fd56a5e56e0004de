//! ISA-specific chunk-compare kernels.
//!
//! The vector tier needs exactly one capability from the hardware: the
//! index of the first byte at which two chunks of up to 16 bytes differ,
//! bounded by an explicit valid length. SSE4.2's `pcmpestri` answers that
//! directly; NEON derives it from a bytewise-equal mask; every other build
//! falls back to a bounded scalar scan.
//!
//! Selection is purely compile-time (`target_arch` / `target_feature`);
//! there is no runtime capability probing in this crate.

#[cfg(all(target_arch = "x86_64", target_feature = "sse4.2"))]
mod x86_64;
#[cfg(all(target_arch = "x86_64", target_feature = "sse4.2"))]
pub(crate) use x86_64::first_diff16;

#[cfg(target_arch = "aarch64")]
mod aarch64;
#[cfg(target_arch = "aarch64")]
pub(crate) use aarch64::first_diff16;

/// Scalar fallback: bounded scan over the valid bytes only.
///
/// Reads nothing past `len`, so it trivially satisfies the contract; the
/// padding guarantee exists for the real vector kernels.
///
/// # Safety
///
/// `a` and `b` must each point to `len` readable bytes, `len <= 16`.
#[cfg(not(any(all(target_arch = "x86_64", target_feature = "sse4.2"), target_arch = "aarch64")))]
#[inline]
pub(crate) unsafe fn first_diff16(a: *const u8, b: *const u8, len: usize) -> usize {
  debug_assert!(len <= 16);
  for i in 0..len {
    // SAFETY: `i < len` readable bytes at both pointers.
    if unsafe { *a.add(i) != *b.add(i) } {
      return i;
    }
  }
  16
}
