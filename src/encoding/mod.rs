//! Source encodings and the generic transcoder.
//!
//! An [`Encoding`] contributes a forward parser: given a slice of its code
//! units and a position, produce the next [`ScalarStep`]. The transcoder
//! drives that parser scalar by scalar, re-encoding into UTF-8, and either
//! substitutes U+FFFD on error or aborts, depending on the caller's mode.
//!
//! `validate_text` is the seam for validate-and-construct: the default
//! method takes the generic transcoding path, while [`Utf8`] and [`Ascii`]
//! override it with in-place fast paths that never copy valid input.

mod ascii;
mod utf16;

pub use ascii::Ascii;
pub use utf16::Utf16;

#[cfg(not(test))]
use alloc::vec::Vec;

use crate::buffer::GrowthBuffer;
use crate::scan;
use crate::text::Text;
use crate::utf8::{encode_scalar, validate_utf8, ScalarStep, REPLACEMENT_BYTES};

/// A source encoding: a code-unit type plus a forward scalar parser.
pub trait Encoding {
    /// The encoding's code-unit type.
    type CodeUnit: Copy;

    /// Parse one scalar from `units` starting at `pos`.
    ///
    /// [`ScalarStep::Error`] must cover the maximal invalid subsequence so
    /// that resuming at `pos + len` never skips a viable sequence start.
    fn next_scalar(units: &[Self::CodeUnit], pos: usize) -> ScalarStep;

    /// Validate `units` and construct a text value, `None` on any error.
    ///
    /// The default implementation transcodes strictly. Encodings whose
    /// valid code-unit sequences are already the target representation
    /// override this to skip the copy.
    fn validate_text(units: &[Self::CodeUnit]) -> Option<Text>
    where
        Self: Sized,
    {
        let out = transcode::<Self>(units, OnError::Fail)?;
        Some(Text::make_owned(out.bytes, out.is_ascii))
    }
}

/// What the transcoder does when a scalar fails to decode or re-encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnError {
    /// Substitute U+FFFD and continue. The transcoder becomes total.
    Substitute,
    /// Abort, releasing the output built so far.
    Fail,
}

/// A finished transcoding run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcoded {
    /// The output, well-formed UTF-8 with no trailing partial sequence.
    pub bytes: Vec<u8>,
    /// True iff at least one scalar was substituted.
    pub repairs_made: bool,
    /// True iff every output byte is below 0x80.
    pub is_ascii: bool,
}

/// Decode `units` under `E` and re-encode as UTF-8.
///
/// Returns `None` only in [`OnError::Fail`] mode, when a source scalar
/// fails to decode or re-encode; with [`OnError::Substitute`] the call
/// always succeeds. Output grows geometrically, and every exit path
/// releases the working buffer exactly once.
///
/// # Examples
///
/// ```
/// use textly::{transcode, OnError, Utf16};
///
/// let units: Vec<u16> = "z\u{00FC}rich 🎉".encode_utf16().collect();
/// let out = transcode::<Utf16>(&units, OnError::Fail).unwrap();
/// assert_eq!(out.bytes, "z\u{00FC}rich 🎉".as_bytes());
/// assert!(!out.repairs_made);
///
/// // An unpaired surrogate fails strict mode but substitutes in lossy mode
/// assert!(transcode::<Utf16>(&[0xD800], OnError::Fail).is_none());
/// let lossy = transcode::<Utf16>(&[0xD800], OnError::Substitute).unwrap();
/// assert_eq!(lossy.bytes, "\u{FFFD}".as_bytes());
/// ```
pub fn transcode<E: Encoding>(units: &[E::CodeUnit], on_error: OnError) -> Option<Transcoded> {
    let mut out = GrowthBuffer::with_capacity(units.len());
    let mut pos = 0;
    let mut repairs_made = false;
    let mut is_ascii = true;

    loop {
        match E::next_scalar(units, pos) {
            ScalarStep::Valid { scalar, len } => {
                pos += len;
                match encode_scalar(scalar) {
                    Some((bytes, n)) => {
                        if n > 1 {
                            is_ascii = false;
                        }
                        out.push_slice(&bytes[..n]);
                    }
                    // A parser that yields non-scalar values is treated the
                    // same as a decode error
                    None => {
                        if on_error == OnError::Fail {
                            return None;
                        }
                        repairs_made = true;
                        is_ascii = false;
                        out.push_slice(&REPLACEMENT_BYTES);
                    }
                }
            }
            ScalarStep::Error { len } => {
                if on_error == OnError::Fail {
                    return None;
                }
                pos += len;
                repairs_made = true;
                is_ascii = false;
                out.push_slice(&REPLACEMENT_BYTES);
            }
            ScalarStep::Empty => {
                return Some(Transcoded {
                    bytes: out.into_vec(),
                    repairs_made,
                    is_ascii,
                });
            }
        }
    }
}

/// The target encoding itself, usable as a source.
pub struct Utf8;

impl Encoding for Utf8 {
    type CodeUnit = u8;

    #[inline]
    fn next_scalar(units: &[u8], pos: usize) -> ScalarStep {
        crate::utf8::next_scalar(units, pos)
    }

    /// Valid UTF-8 input is already the target representation; validate in
    /// place and copy once into the text value.
    fn validate_text(units: &[u8]) -> Option<Text> {
        if scan::is_ascii(units) {
            return Some(Text::make(units, true));
        }
        let info = validate_utf8(units).ok()?;
        Some(Text::make(units, info.is_ascii))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Generic transcoding through Utf8-as-source
    // =========================================================================

    mod utf8_source {
        use super::*;

        #[test]
        fn valid_input_roundtrips() {
            let input = "mixed ascii café 日本 🎉".as_bytes();
            let out = transcode::<Utf8>(input, OnError::Fail).unwrap();
            assert_eq!(out.bytes, input);
            assert!(!out.repairs_made);
            assert!(!out.is_ascii);
        }

        #[test]
        fn ascii_purity_tracked() {
            let out = transcode::<Utf8>(b"plain", OnError::Fail).unwrap();
            assert!(out.is_ascii);
            assert!(!out.repairs_made);
        }

        #[test]
        fn strict_mode_fails_on_bad_byte() {
            assert!(transcode::<Utf8>(b"ab\xFFcd", OnError::Fail).is_none());
        }

        #[test]
        fn lossy_mode_substitutes() {
            let out = transcode::<Utf8>(b"ab\xFFcd", OnError::Substitute).unwrap();
            assert_eq!(out.bytes, "ab\u{FFFD}cd".as_bytes());
            assert!(out.repairs_made);
            assert!(!out.is_ascii);
        }

        #[test]
        fn empty_input() {
            let out = transcode::<Utf8>(b"", OnError::Fail).unwrap();
            assert!(out.bytes.is_empty());
            assert!(out.is_ascii);
            assert!(!out.repairs_made);
        }
    }

    // =========================================================================
    // validate_text seam
    // =========================================================================

    mod validate_seam {
        use super::*;

        #[test]
        fn utf8_override_accepts_valid() {
            let text = Utf8::validate_text("grün".as_bytes()).unwrap();
            assert_eq!(text.as_str(), "grün");
            assert!(!text.is_ascii());
        }

        #[test]
        fn utf8_override_rejects_invalid() {
            assert!(Utf8::validate_text(b"\xC3").is_none());
        }

        #[test]
        fn default_path_through_utf16() {
            let units: Vec<u16> = "päron".encode_utf16().collect();
            let text = Utf16::validate_text(&units).unwrap();
            assert_eq!(text.as_str(), "päron");
        }

        #[test]
        fn default_path_rejects_unpaired_surrogate() {
            assert!(Utf16::validate_text(&[0x0041, 0xDC00]).is_none());
        }
    }
}
