//! Construction entry points.
//!
//! Every constructor runs the same pipeline: scan for ASCII purity first
//! (pure input skips validation entirely), then validate, and on failure
//! either return the absence signal, or repair and carry on, depending on
//! the entry point. Trusted entry points skip the pipeline; the checked
//! variants still assert the caller's claim in debug builds.

#[cfg(not(test))]
use alloc::vec::Vec;

use crate::encoding::{transcode, Encoding, OnError, Utf16};
use crate::scan;
use crate::text::Text;
use crate::utf8::{repair_utf8, validate_utf8};

impl Text {
    /// Construct from bytes the caller guarantees are pure ASCII.
    ///
    /// No checks run, not even in debug builds. Prefer
    /// [`Text::from_ascii`] unless the input was literally just scanned.
    pub fn from_ascii_unchecked(input: &[u8]) -> Text {
        Text::make(input, true)
    }

    /// Construct from bytes trusted to be pure ASCII, asserting the claim
    /// in debug builds.
    pub fn from_ascii(input: &[u8]) -> Text {
        debug_assert!(scan::is_ascii(input), "input is not pure ASCII");
        Text::make(input, true)
    }

    /// Construct from bytes after confirming they are pure ASCII.
    ///
    /// Returns `None` if any byte is 0x80 or above.
    ///
    /// # Examples
    ///
    /// ```
    /// use textly::Text;
    ///
    /// assert!(Text::from_ascii_validating(b"ok").is_some());
    /// assert!(Text::from_ascii_validating(&[b'n', 0x80]).is_none());
    /// ```
    pub fn from_ascii_validating(input: &[u8]) -> Option<Text> {
        if scan::is_ascii(input) {
            Some(Text::make(input, true))
        } else {
            None
        }
    }

    /// Construct from bytes after validating them as UTF-8.
    ///
    /// Returns `None` on the first malformed sequence. Pure-ASCII input is
    /// detected by the scanner and skips validation.
    pub fn from_utf8(input: &[u8]) -> Option<Text> {
        if scan::is_ascii(input) {
            return Some(Text::make(input, true));
        }
        let info = validate_utf8(input).ok()?;
        Some(Text::make(input, info.is_ascii))
    }

    /// Construct from bytes the caller guarantees are well-formed UTF-8.
    ///
    /// Validity is asserted in debug builds; the purity flag is recomputed
    /// by the scanner either way.
    pub fn from_utf8_unchecked(input: &[u8]) -> Text {
        debug_assert!(validate_utf8(input).is_ok(), "input is not valid UTF-8");
        Text::make(input, scan::is_ascii(input))
    }

    /// Construct from bytes, substituting U+FFFD for each maximal invalid
    /// subsequence. Total: always produces a valid text value.
    ///
    /// The flag reports whether any repair occurred, i.e. whether at least
    /// one input byte was not copied verbatim.
    ///
    /// # Examples
    ///
    /// ```
    /// use textly::Text;
    ///
    /// let (text, repaired) = Text::from_utf8_repairing("intact".as_bytes());
    /// assert_eq!(text.as_str(), "intact");
    /// assert!(!repaired);
    ///
    /// let (text, repaired) = Text::from_utf8_repairing(b"ab\xFFcd");
    /// assert_eq!(text.as_str(), "ab\u{FFFD}cd");
    /// assert!(repaired);
    /// ```
    pub fn from_utf8_repairing(input: &[u8]) -> (Text, bool) {
        if scan::is_ascii(input) {
            return (Text::make(input, true), false);
        }
        match validate_utf8(input) {
            Ok(info) => (Text::make(input, info.is_ascii), false),
            Err(bad) => {
                // Replacement bytes are multi-byte, so repaired output is
                // never pure ASCII
                let repaired = repair_utf8(input, bad);
                (Text::make_owned(repaired, false), true)
            }
        }
    }

    /// Like [`Text::from_utf8_repairing`] but consumes a byte vector the
    /// caller has just filled, keeping the allocation when no repair is
    /// needed.
    pub fn from_utf8_vec_repairing(input: Vec<u8>) -> (Text, bool) {
        match validate_utf8(&input) {
            Ok(info) => {
                let is_ascii = info.is_ascii;
                (Text::make_owned(input, is_ascii), false)
            }
            Err(bad) => {
                let repaired = repair_utf8(&input, bad);
                (Text::make_owned(repaired, false), true)
            }
        }
    }

    /// Construct from UTF-16 code units, substituting U+FFFD for each
    /// unpaired surrogate. Total.
    pub fn from_utf16_repairing(units: &[u16]) -> Text {
        match Text::from_code_units::<Utf16>(units, true) {
            Some((text, _)) => text,
            // Substitution makes the transcoder total
            None => unreachable!(),
        }
    }

    /// Construct from code units of any [`Encoding`].
    ///
    /// With `repair` set, decode errors become U+FFFD and the call always
    /// succeeds; the flag reports whether any substitution happened.
    /// Without it, the first decode error aborts with `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use textly::{Text, Utf16};
    ///
    /// let units: Vec<u16> = "smörgås".encode_utf16().collect();
    /// let (text, repaired) = Text::from_code_units::<Utf16>(&units, false).unwrap();
    /// assert_eq!(text.as_str(), "smörgås");
    /// assert!(!repaired);
    ///
    /// assert!(Text::from_code_units::<Utf16>(&[0xDC00], false).is_none());
    /// ```
    pub fn from_code_units<E: Encoding>(
        units: &[E::CodeUnit],
        repair: bool,
    ) -> Option<(Text, bool)> {
        let on_error = if repair {
            OnError::Substitute
        } else {
            OnError::Fail
        };
        let out = transcode::<E>(units, on_error)?;
        Some((Text::make_owned(out.bytes, out.is_ascii), out.repairs_made))
    }

    /// Validate code units of a statically chosen [`Encoding`] and
    /// construct on success.
    ///
    /// [`Utf8`](crate::Utf8) and [`Ascii`](crate::Ascii) validate in place
    /// without transcoding; other encodings take the generic strict
    /// transcoding path.
    pub fn validate_as<E: Encoding>(units: &[E::CodeUnit]) -> Option<Text> {
        E::validate_text(units)
    }
}
