//! Encoding conformance checks and code-unit aware pattern search.
//!
//! Validators answer whether a byte sequence is well-formed ASCII, UTF-8,
//! UTF-16 or UTF-32 without decoding it, and explain the first failure with
//! its offset and raw octets. Matchers find an encoded pattern in an encoded
//! source and report byte spans that never cross a code unit boundary.
//!
//! ```rust
//! use unitscan::{ByteOrder, SearchOptions, validate_utf16, validate_utf8, search_utf32};
//!
//! assert!(validate_utf8("κόσμε".as_bytes()).is_ok());
//! assert!(validate_utf8(&[0xED, 0xA0, 0x80]).is_err());
//! assert!(validate_utf16(&[0x3D, 0xD8, 0x00, 0xDE], ByteOrder::LittleEndian).is_ok());
//!
//! let source = [0, 0, 0, 0x78, 0, 0, 0, 0x41, 0, 0, 0, 0x42];
//! let pattern = [0, 0, 0, 0x41, 0, 0, 0, 0x42];
//! let spans = search_utf32(&source, &pattern, ByteOrder::BigEndian, SearchOptions::default());
//! assert_eq!(spans.unwrap()[0].len(), 8);
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod encoding;
mod error;
mod search;
mod validate;

#[cfg(test)]
mod tests;

pub use encoding::{ByteOrder, Encoding, Octets, Planes};
pub use error::{SearchError, Side, SurrogateFault, ValidationError};
pub use search::{
    SearchOptions, Span, search, search_ascii, search_utf8, search_utf16, search_utf16_planes,
    search_utf32,
};
pub use validate::{
    Ascii, Conformance, Utf8, Utf16, Utf32, validate_ascii, validate_utf8, validate_utf16,
    validate_utf16_planes, validate_utf32,
};

/// Whether `bytes` is ASCII.
#[must_use]
pub fn is_ascii(bytes: &[u8]) -> bool {
    validate_ascii(bytes).is_ok()
}

/// Whether `bytes` is well-formed UTF-8.
#[must_use]
pub fn is_utf8(bytes: &[u8]) -> bool {
    validate_utf8(bytes).is_ok()
}

/// Whether `bytes` is well-formed UTF-16 in byte order `order`.
#[must_use]
pub fn is_utf16(bytes: &[u8], order: ByteOrder) -> bool {
    validate_utf16(bytes, order).is_ok()
}

/// Whether `bytes` is well-formed UTF-32 in byte order `order`.
#[must_use]
pub fn is_utf32(bytes: &[u8], order: ByteOrder) -> bool {
    validate_utf32(bytes, order).is_ok()
}
