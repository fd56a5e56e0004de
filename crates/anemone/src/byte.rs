//! Byte-at-a-time comparison tier.
//!
//! The reference tier: always available, never reads past the logical
//! length, and the only ordering kernel whose result magnitude is
//! meaningful on every input. The wider tiers must agree with it on sign.

/// Compare `len` bytes of `a` and `b`, one byte per step.
///
/// Returns the signed difference of the first mismatching pair, treating
/// each byte as an unsigned 0–255 value (`a[i] - b[i]`), or 0 when all
/// `len` bytes are equal.
///
/// # Safety
///
/// `a` and `b` must each point to at least `len` readable bytes. This
/// tier never reads past `len`, so no trailing padding is required.
#[inline]
pub unsafe fn memcmp8(a: *const u8, b: *const u8, len: usize) -> i32 {
  for i in 0..len {
    // SAFETY: `i < len` and the caller guarantees `len` readable bytes.
    let (x, y) = unsafe { (*a.add(i), *b.add(i)) };
    if x != y {
      return i32::from(x) - i32::from(y);
    }
  }
  0
}

/// Byte-tier equality.
///
/// Nothing beats a single-byte scan at this granularity, so this is
/// [`memcmp8`] reused; callers inspect only zero versus nonzero.
///
/// # Safety
///
/// Same contract as [`memcmp8`].
#[inline]
pub unsafe fn memeq8(a: *const u8, b: *const u8, len: usize) -> i32 {
  // SAFETY: identical contract.
  unsafe { memcmp8(a, b, len) }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn equal_buffers() {
    let a = *b"hello world";
    let b = a;
    assert_eq!(unsafe { memcmp8(a.as_ptr(), b.as_ptr(), a.len()) }, 0);
    assert_eq!(unsafe { memeq8(a.as_ptr(), b.as_ptr(), a.len()) }, 0);
  }

  #[test]
  fn first_mismatch_magnitude() {
    let a = *b"abc";
    let b = *b"abd";
    assert_eq!(unsafe { memcmp8(a.as_ptr(), b.as_ptr(), 3) }, -1);
    assert_eq!(unsafe { memcmp8(b.as_ptr(), a.as_ptr(), 3) }, 1);
  }

  #[test]
  fn unsigned_byte_order() {
    let a = [0xFFu8];
    let b = [0x00u8];
    assert_eq!(unsafe { memcmp8(a.as_ptr(), b.as_ptr(), 1) }, 255);
  }

  #[test]
  fn zero_length() {
    let a = [0u8; 1];
    assert_eq!(unsafe { memcmp8(a.as_ptr(), a.as_ptr(), 0) }, 0);
  }
}
