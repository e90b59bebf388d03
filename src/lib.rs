//! # Textly
//!
//! Validated text construction for Rust.
//!
//! This crate builds immutable [`Text`] values from raw byte or wide
//! code-unit buffers, guaranteeing the result is well-formed UTF-8. The
//! ingestion pipeline has three legs, each usable on its own:
//!
//! - [`scan`] - Fast ASCII purity scanning at word/vector granularity
//! - [`utf8`] - UTF-8 validation with exact error ranges, and lossy repair
//! - [`encoding`] - Transcoding from UTF-16, ASCII, or any [`Encoding`]
//!
//! ## Quick Start
//!
//! ```
//! use textly::Text;
//!
//! // Validating construction: `None` on malformed input
//! let text = Text::from_utf8(b"caf\xC3\xA9").unwrap();
//! assert_eq!(text.as_str(), "café");
//! assert!(Text::from_utf8(b"caf\xC3").is_none());
//!
//! // Repairing construction is total: each maximal invalid subsequence
//! // becomes one U+FFFD
//! let (text, repaired) = Text::from_utf8_repairing(b"ab\xFFcd");
//! assert_eq!(text.as_str(), "ab\u{FFFD}cd");
//! assert!(repaired);
//! ```
//!
//! ## Features
//!
//! - `std` (default) - Enables the `std::error::Error` impls. The library
//!   itself is `no_std` + `alloc` compatible.
//! - `serde` - Enable serialization/deserialization for the outcome types

// Use no_std unless std feature is enabled or we're in test mode
#![cfg_attr(not(any(test, feature = "std")), no_std)]

// When using no_std, we need to explicitly link the alloc crate
#[cfg(not(any(test, feature = "std")))]
extern crate alloc;

// When using std, re-export alloc types from std for compatibility
#[cfg(any(test, feature = "std"))]
extern crate std as alloc;

// =============================================================================
// Core modules
// =============================================================================

/// Fast ASCII purity scanning.
pub mod scan;

/// UTF-8 validation, repair, and scalar codecs.
pub mod utf8;

/// Source encodings and the generic transcoder.
pub mod encoding;

/// The immutable text value and its construction entry points.
pub mod text;

/// Growth buffer used by the repairer and transcoder.
pub(crate) mod buffer;

// =============================================================================
// Public re-exports (convenience)
// =============================================================================

pub use encoding::{transcode, Ascii, Encoding, OnError, Transcoded, Utf16, Utf8};
pub use scan::is_ascii;
pub use text::{Text, INLINE_CAPACITY};
pub use utf8::{
    repair_utf8, validate_utf8, MalformedSequence, ScalarStep, Wellformed, REPLACEMENT_SCALAR,
};
