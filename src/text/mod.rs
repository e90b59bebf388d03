//! The immutable text value.
//!
//! A finished [`Text`] is one of two representations behind an opaque
//! type: an inline buffer for payloads up to [`INLINE_CAPACITY`] bytes, or
//! a heap allocation with a cached purity flag. The construction pipeline
//! never branches on the tag; it hands validated bytes plus the purity
//! flag to [`Text::make`], which consults only the byte count against the
//! capacity threshold.
//!
//! Every representation holds well-formed UTF-8. The construction entry
//! points are the only way to obtain a `Text`, and each one validates,
//! repairs, or transcodes before storing.

#[cfg(not(test))]
use alloc::{boxed::Box, vec::Vec};

use core::fmt;
use core::hash::{Hash, Hasher};

mod build;

/// Largest payload the inline representation can hold, in bytes.
pub const INLINE_CAPACITY: usize = 15;

/// An immutable, always well-formed text value.
#[derive(Clone)]
pub struct Text {
    repr: Repr,
}

#[derive(Clone)]
enum Repr {
    Small(SmallText),
    Heap(HeapText),
}

/// Inline storage: length byte plus a fixed payload array.
#[derive(Clone, Copy)]
struct SmallText {
    len: u8,
    bytes: [u8; INLINE_CAPACITY],
}

/// Heap storage: owned bytes plus the purity flag computed at construction.
#[derive(Clone)]
struct HeapText {
    bytes: Box<[u8]>,
    is_ascii: bool,
}

impl SmallText {
    /// Inline constructor; `None` if the payload exceeds the capacity.
    fn try_create(input: &[u8]) -> Option<SmallText> {
        if input.len() > INLINE_CAPACITY {
            return None;
        }
        let mut bytes = [0u8; INLINE_CAPACITY];
        bytes[..input.len()].copy_from_slice(input);
        Some(SmallText {
            len: input.len() as u8,
            bytes,
        })
    }

    #[inline]
    fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }
}

impl HeapText {
    /// Allocate and copy. Allocation failure aborts, as everywhere in
    /// alloc-backed code.
    fn create(input: &[u8], is_ascii: bool) -> HeapText {
        HeapText {
            bytes: Box::from(input),
            is_ascii,
        }
    }

    /// Take ownership of an already-built byte vector without copying.
    fn from_vec(input: Vec<u8>, is_ascii: bool) -> HeapText {
        HeapText {
            bytes: input.into_boxed_slice(),
            is_ascii,
        }
    }
}

impl Text {
    /// Route validated bytes to a representation by byte count alone.
    ///
    /// `is_ascii` must be the purity result for `input`. Trust is the
    /// point: the unchecked entry points pass the caller's claim through
    /// here without rescanning.
    pub(crate) fn make(input: &[u8], is_ascii: bool) -> Text {
        let repr = match SmallText::try_create(input) {
            Some(small) => Repr::Small(small),
            None => Repr::Heap(HeapText::create(input, is_ascii)),
        };
        Text { repr }
    }

    /// Like [`Text::make`] but consumes an owned vector, avoiding a copy
    /// on the heap path.
    pub(crate) fn make_owned(input: Vec<u8>, is_ascii: bool) -> Text {
        let repr = match SmallText::try_create(&input) {
            Some(small) => Repr::Small(small),
            None => Repr::Heap(HeapText::from_vec(input, is_ascii)),
        };
        Text { repr }
    }

    /// The text content as raw bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        match &self.repr {
            Repr::Small(small) => small.as_bytes(),
            Repr::Heap(heap) => &heap.bytes,
        }
    }

    /// The text content as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        debug_assert!(core::str::from_utf8(self.as_bytes()).is_ok());
        // SAFETY: every constructor validates, repairs, or transcodes its
        // input into well-formed UTF-8 before storing it.
        unsafe { core::str::from_utf8_unchecked(self.as_bytes()) }
    }

    /// Length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// True iff the text holds no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True iff every byte is below 0x80.
    #[inline]
    pub fn is_ascii(&self) -> bool {
        match &self.repr {
            // Inline payloads are at most 15 bytes; scanning beats a flag
            Repr::Small(small) => crate::scan::is_ascii(small.as_bytes()),
            Repr::Heap(heap) => heap.is_ascii,
        }
    }

    /// True iff the inline representation holds the payload.
    #[cfg(test)]
    pub(crate) fn is_inline(&self) -> bool {
        matches!(self.repr, Repr::Small(_))
    }
}

impl Default for Text {
    fn default() -> Self {
        Text::make(b"", true)
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl PartialEq for Text {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for Text {}

impl PartialEq<str> for Text {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for Text {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Hash for Text {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}
