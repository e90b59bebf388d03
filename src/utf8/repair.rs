//! Lossy repair of malformed UTF-8.
//!
//! Substitutes one U+FFFD for each maximal invalid subsequence and copies
//! every valid byte verbatim, in order. The caller supplies the first
//! malformed range from a prior [`validate_utf8`](crate::validate_utf8)
//! call, so the already-validated prefix is copied without rescanning.

#[cfg(not(test))]
use alloc::vec::Vec;

use crate::buffer::GrowthBuffer;
use crate::utf8::{next_scalar, MalformedSequence, ScalarStep, REPLACEMENT_BYTES};

/// Replace every maximal invalid subsequence of `input` with U+FFFD.
///
/// `first_bad` must be the range reported by a validation of `input`; the
/// bytes before `first_bad.start` are taken as valid without rescanning.
/// The result always re-validates as well-formed UTF-8.
///
/// # Examples
///
/// ```
/// use textly::{repair_utf8, validate_utf8};
///
/// let input = b"ab\xFFcd";
/// let bad = validate_utf8(input).unwrap_err();
/// assert_eq!(repair_utf8(input, bad), "ab\u{FFFD}cd".as_bytes());
/// ```
pub fn repair_utf8(input: &[u8], first_bad: MalformedSequence) -> Vec<u8> {
    debug_assert!(first_bad.start < first_bad.end && first_bad.end <= input.len());

    // One substitution rarely grows the output; reserving one replacement's
    // worth of slack on top of the input length covers the common case.
    let mut out = GrowthBuffer::with_capacity(input.len() + REPLACEMENT_BYTES.len());
    out.push_slice(&input[..first_bad.start]);
    out.push_slice(&REPLACEMENT_BYTES);

    let mut pos = first_bad.end;
    // Start of the current run of verbatim-copyable bytes
    let mut run = pos;
    loop {
        match next_scalar(input, pos) {
            ScalarStep::Valid { len, .. } => pos += len,
            ScalarStep::Error { len } => {
                out.push_slice(&input[run..pos]);
                out.push_slice(&REPLACEMENT_BYTES);
                pos += len;
                run = pos;
            }
            ScalarStep::Empty => {
                out.push_slice(&input[run..]);
                return out.into_vec();
            }
        }
    }
}
