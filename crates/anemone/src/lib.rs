//! Tiered byte-buffer comparison kernels.
//!
//! `anemone` compares two equal-length memory regions for lexicographic
//! order or plain equality faster than a byte-at-a-time scan by stepping
//! 8, 64, or 128 bits at a time. The wide tiers cheat: they load whole
//! words and vector registers across the logical end of a buffer, so
//! callers must guarantee [`PADDING`] readable bytes past it. The padding
//! is read but its contents never affect a result.
//!
//! # Tier Overview
//!
//! | Tier | Step | Kernels | Result guarantee |
//! |------|------|---------|------------------|
//! | Byte | 1 B | [`memcmp8`], [`memeq8`] | exact sign and magnitude; never reads padding |
//! | Word | 8 B | [`memcmp64`], [`memeq64`] | sign only |
//! | Vector | 16 B | [`memcmp128`], [`memeq128`] | exact sign and magnitude |
//!
//! [`memcmp`] and [`memeq`] are the general-purpose defaults; both forward
//! to the word tier. Tier selection is static: there is no runtime CPU
//! detection anywhere. The vector tier compiles to SSE4.2 `pcmpestri`
//! when the build enables the `sse4.2` target feature, to NEON on aarch64
//! (baseline), and to a bounded scalar scan on every other build.
//!
//! # Quick Start
//!
//! ```
//! use anemone::PaddedBuf;
//!
//! let a = PaddedBuf::from_slice(b"abc");
//! let b = PaddedBuf::from_slice(b"abd");
//! assert!(a < b);
//! assert_ne!(a, b);
//! ```
//!
//! [`PaddedBuf`] allocations carry the padding guarantee, so the raw
//! kernels are sound on them:
//!
//! ```
//! use anemone::PaddedBuf;
//!
//! let a = PaddedBuf::from_slice(b"abc");
//! let b = PaddedBuf::from_slice(b"abd");
//! // SAFETY: `PaddedBuf` allocations carry the required trailing padding.
//! let d = unsafe { anemone::memcmp(a.as_padded_ptr(), b.as_padded_ptr(), a.len()) };
//! assert!(d < 0);
//! ```
//!
//! Buffers without the padding guarantee can use the bounds-checked
//! routines in [`portable`] instead, at some cost in tail throughput.
//!
//! # Preconditions
//!
//! Every raw kernel takes two pointers and one shared length. The caller
//! must ensure both regions hold `len` readable bytes followed by at least
//! [`PADDING`] readable bytes (byte tier excepted, which never over-reads),
//! and that `len` is the logical length of both buffers. Nothing is
//! validated at runtime: a violated precondition is undefined behavior,
//! not a recoverable error. That trade-off is the whole point: the
//! kernels skip the bounds discipline a standard comparison must pay for.
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std` | Yes | Implies `alloc` |
//! | `alloc` | Yes | Enables [`PaddedBuf`] |
//!
//! The crate is `no_std`; disable default features for embedded use.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod byte;
mod dispatch;
#[cfg(feature = "alloc")]
mod padded;
pub mod portable;
mod simd;
pub mod tier;
mod vector;
mod word;

pub use byte::{memcmp8, memeq8};
pub use dispatch::{memcmp, memeq};
#[cfg(feature = "alloc")]
pub use padded::PaddedBuf;
pub use tier::{CmpTier, MemcmpFn, MemeqFn};
pub use vector::{memcmp128, memeq128};
pub use word::{memcmp64, memeq64};

/// Readable padding, in bytes, that the word and vector tiers may read
/// past a buffer's logical length.
///
/// The worst case is the vector tier's full 16-byte load starting at the
/// last logical byte; the word tier's tail load needs at most 7.
pub const PADDING: usize = 15;
