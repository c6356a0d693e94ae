use core::fmt;

use thiserror::Error;

use crate::encoding::{Encoding, Octets, Planes};

/// Which surrogate rule a [`ValidationError::SurrogateRangeViolation`] broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurrogateFault {
    /// A surrogate code point (U+D800..=U+DFFF) encoded as a scalar value.
    Encoded,
    /// A high surrogate not followed by a low surrogate.
    UnpairedHigh,
    /// A low surrogate without a preceding high surrogate.
    UnpairedLow,
}

impl fmt::Display for SurrogateFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Encoded => "surrogate code point is not a scalar value",
            Self::UnpairedHigh => "high surrogate is not followed by a low surrogate",
            Self::UnpairedLow => "low surrogate has no preceding high surrogate",
        })
    }
}

/// The first conformance failure found in a byte sequence.
///
/// Offsets are byte offsets of the start of the offending character or code
/// unit. Octets are the raw bytes inspected there, in stored order.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// A byte with the high bit set in ASCII input.
    #[error("[ASCII]: non-ASCII byte 0x{octet:02x} at offset {offset}")]
    NonAsciiByte {
        /// Offset of the byte.
        offset: usize,
        /// The byte itself.
        octet: u8,
    },

    /// Input length is not a multiple of the required alignment, normally
    /// the code unit width.
    #[error("[{encoding}]: length {len} is not a multiple of {width} octets")]
    LengthAlignment {
        /// Encoding being validated.
        encoding: Encoding,
        /// Total input length in bytes.
        len: usize,
        /// Required alignment in bytes.
        width: usize,
    },

    /// Input ends inside a multi-byte sequence or surrogate pair.
    #[error("[{encoding}]: sequence {octets} at offset {offset} is truncated, {expected} octets expected")]
    TruncatedSequence {
        /// Encoding being validated.
        encoding: Encoding,
        /// Offset of the sequence start.
        offset: usize,
        /// Bytes present before the end of input.
        octets: Octets,
        /// Length the sequence should have had.
        expected: usize,
    },

    /// A UTF-8 lead byte outside every recognised class.
    #[error("[UTF-8]: invalid lead byte 0x{octet:02x} at offset {offset}")]
    InvalidLeadByte {
        /// Offset of the byte.
        offset: usize,
        /// The byte itself.
        octet: u8,
    },

    /// A UTF-8 continuation byte not of the form `10xxxxxx`.
    #[error("[UTF-8]: invalid continuation byte in {octets} at offset {offset}")]
    InvalidContinuationByte {
        /// Offset of the sequence start.
        offset: usize,
        /// Lead byte through the offending continuation byte.
        octets: Octets,
    },

    /// A sequence encoding a value that a shorter sequence could represent.
    #[error("[{encoding}]: overlong encoding {octets} at offset {offset}")]
    OverlongEncoding {
        /// Encoding being validated.
        encoding: Encoding,
        /// Offset of the sequence start.
        offset: usize,
        /// Bytes that decided the verdict.
        octets: Octets,
    },

    /// A surrogate where a scalar value or a valid pairing is required.
    #[error("[{encoding}]: {fault}: {octets} at offset {offset}")]
    SurrogateRangeViolation {
        /// Encoding being validated.
        encoding: Encoding,
        /// Offset of the sequence or unit start.
        offset: usize,
        /// Bytes that decided the verdict.
        octets: Octets,
        /// The rule that was broken.
        fault: SurrogateFault,
    },

    /// A value above U+10FFFF.
    #[error("[{encoding}]: {octets} at offset {offset} is beyond the maximum code point 0x10FFFF")]
    CodepointRangeExceeded {
        /// Encoding being validated.
        encoding: Encoding,
        /// Offset of the sequence or unit start.
        offset: usize,
        /// Bytes that decided the verdict.
        octets: Octets,
    },

    /// A well-formed UTF-16 character outside the permitted planes.
    #[error("[{encoding}]: {octets} at offset {offset} is outside {planes}")]
    PlaneRestriction {
        /// Encoding being validated.
        encoding: Encoding,
        /// Offset of the character.
        offset: usize,
        /// The character's code units.
        octets: Octets,
        /// Planes the input was restricted to.
        planes: Planes,
    },
}

impl ValidationError {
    /// Encoding under which the failure was detected.
    #[must_use]
    pub const fn encoding(&self) -> Encoding {
        match *self {
            Self::NonAsciiByte { .. } => Encoding::Ascii,
            Self::InvalidLeadByte { .. } | Self::InvalidContinuationByte { .. } => Encoding::Utf8,
            Self::LengthAlignment { encoding, .. }
            | Self::TruncatedSequence { encoding, .. }
            | Self::OverlongEncoding { encoding, .. }
            | Self::SurrogateRangeViolation { encoding, .. }
            | Self::CodepointRangeExceeded { encoding, .. }
            | Self::PlaneRestriction { encoding, .. } => encoding,
        }
    }

    /// Byte offset of the failure. Length alignment failures report the input
    /// length.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match *self {
            Self::LengthAlignment { len, .. } => len,
            Self::NonAsciiByte { offset, .. }
            | Self::TruncatedSequence { offset, .. }
            | Self::InvalidLeadByte { offset, .. }
            | Self::InvalidContinuationByte { offset, .. }
            | Self::OverlongEncoding { offset, .. }
            | Self::SurrogateRangeViolation { offset, .. }
            | Self::CodepointRangeExceeded { offset, .. }
            | Self::PlaneRestriction { offset, .. } => offset,
        }
    }
}

/// Which search input a [`SearchError`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The sequence being searched.
    Source,
    /// The sequence being searched for.
    Pattern,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Source => "source",
            Self::Pattern => "pattern",
        })
    }
}

/// A search rejected before scanning.
///
/// An absent pattern is not an error; it yields an empty match set.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// The source (after applying the limit) or the pattern is empty.
    #[error("[{encoding}]: the {side} is empty")]
    EmptyInput {
        /// Encoding of the search.
        encoding: Encoding,
        /// The empty input.
        side: Side,
    },

    /// The source or the pattern fails validation.
    #[error("the {side} is not conformant: {error}")]
    NonConformant {
        /// The rejected input.
        side: Side,
        /// Why it was rejected.
        #[source]
        error: ValidationError,
    },
}

impl SearchError {
    /// The input the error refers to.
    #[must_use]
    pub const fn side(&self) -> Side {
        match *self {
            Self::EmptyInput { side, .. } | Self::NonConformant { side, .. } => side,
        }
    }
}
