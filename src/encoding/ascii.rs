//! Single-byte-range source encoding.
//!
//! Every code unit below 0x80 is its own scalar; anything else is a
//! one-unit error. Transcoding from [`Ascii`] in strict mode doubles as a
//! validating fast path for byte collections that claim to be ASCII.

use crate::scan;
use crate::text::Text;
use crate::utf8::ScalarStep;

use super::Encoding;

/// 7-bit ASCII.
pub struct Ascii;

impl Encoding for Ascii {
    type CodeUnit = u8;

    #[inline]
    fn next_scalar(units: &[u8], pos: usize) -> ScalarStep {
        match units.get(pos) {
            None => ScalarStep::Empty,
            Some(&b) if b < 0x80 => ScalarStep::Valid {
                scalar: b as u32,
                len: 1,
            },
            Some(_) => ScalarStep::Error { len: 1 },
        }
    }

    /// Pure ASCII is already the target representation; one scan decides.
    fn validate_text(units: &[u8]) -> Option<Text> {
        if scan::is_ascii(units) {
            Some(Text::make(units, true))
        } else {
            None
        }
    }
}
