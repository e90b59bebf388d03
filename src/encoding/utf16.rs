//! UTF-16 source encoding.
//!
//! BMP code units outside the surrogate block decode directly. A high
//! surrogate followed by a low surrogate combines into a supplementary
//! scalar. An unpaired surrogate, high or low, is a one-unit error; the
//! unit after an unpaired high surrogate may itself begin a valid
//! sequence, so the error never swallows it.

use crate::utf8::ScalarStep;

use super::Encoding;

/// UTF-16, native-order code units.
pub struct Utf16;

impl Encoding for Utf16 {
    type CodeUnit = u16;

    fn next_scalar(units: &[u16], pos: usize) -> ScalarStep {
        let Some(&unit) = units.get(pos) else {
            return ScalarStep::Empty;
        };

        match unit {
            0xD800..=0xDBFF => match units.get(pos + 1) {
                Some(&low @ 0xDC00..=0xDFFF) => ScalarStep::Valid {
                    scalar: 0x10000
                        + (((unit as u32 - 0xD800) << 10) | (low as u32 - 0xDC00)),
                    len: 2,
                },
                // Unpaired high surrogate, whether truncated or followed by
                // a non-low unit
                _ => ScalarStep::Error { len: 1 },
            },
            0xDC00..=0xDFFF => ScalarStep::Error { len: 1 },
            _ => ScalarStep::Valid {
                scalar: unit as u32,
                len: 1,
            },
        }
    }
}
