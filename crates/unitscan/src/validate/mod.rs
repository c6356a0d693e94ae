//! Conformance state machines, one per encoding family.
//!
//! Each validator is a single forward scan that stops at the first failure.
//! Multi-byte unit encodings take the byte order explicitly; the logical
//! high byte is selected before any comparison so the scan itself is
//! byte-order agnostic.

mod ascii;
mod utf16;
mod utf32;
mod utf8;

pub use ascii::{Ascii, validate_ascii};
pub use utf8::{Utf8, validate_utf8};
pub use utf16::{Utf16, validate_utf16, validate_utf16_planes};
pub use utf32::{Utf32, validate_utf32};

use crate::{encoding::Encoding, error::ValidationError};

/// An encoding the matcher can search in: its validator, its code unit width
/// and how two code units compare.
pub trait Conformance {
    /// Descriptor of the encoding.
    fn encoding(&self) -> Encoding;

    /// Checks that `bytes` conforms to the encoding.
    ///
    /// # Errors
    ///
    /// Returns the first conformance failure.
    fn validate(&self, bytes: &[u8]) -> Result<(), ValidationError>;

    /// Whether two stored code units are equal. Both slices are exactly one
    /// unit wide.
    #[inline]
    fn units_equal(&self, a: &[u8], b: &[u8]) -> bool {
        a == b
    }

    /// Moves a truncation point back so it does not split a character.
    ///
    /// `cut` is already a multiple of the unit width and at most
    /// `bytes.len()`.
    #[inline]
    fn boundary_at_or_before(&self, bytes: &[u8], cut: usize) -> usize {
        let _ = bytes;
        cut
    }

    /// Convenience wrapper around [`Conformance::validate`].
    fn is_conformant(&self, bytes: &[u8]) -> bool {
        self.validate(bytes).is_ok()
    }
}
