//! aarch64 block ASCII check.
//!
//! `umaxv` reduces a 16-byte vector to its maximum lane; a maximum below
//! 0x80 over the OR of two vectors means the whole block is ASCII. NEON is
//! baseline on aarch64; no runtime detection is needed.

use core::arch::aarch64::*;

use crate::scan::BLOCK_BYTES;

/// Check the 32 bytes starting at `at`. Caller guarantees
/// `at + BLOCK_BYTES <= len`.
#[inline(always)]
pub(crate) fn block_is_ascii(input: &[u8], at: usize) -> bool {
    let chunk = &input[at..at + BLOCK_BYTES];
    // SAFETY: the slice above proves 32 readable bytes at `chunk.as_ptr()`;
    // `vld1q_u8` tolerates unaligned addresses. NEON is part of the aarch64
    // baseline.
    unsafe {
        let lo = vld1q_u8(chunk.as_ptr());
        let hi = vld1q_u8(chunk.as_ptr().add(16));
        vmaxvq_u8(vorrq_u8(lo, hi)) < 0x80
    }
}
