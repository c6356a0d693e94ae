use super::Conformance;
use crate::{
    encoding::{Encoding, Octets},
    error::{SurrogateFault, ValidationError},
};

/// UTF-8 as defined by RFC 3629.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Utf8;

const fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

/// Checks that `bytes` is well-formed UTF-8.
///
/// The lead byte decides the sequence length. A sequence cut short by the end
/// of input is reported as truncated before its continuation bytes are
/// looked at.
///
/// # Errors
///
/// - [`ValidationError::InvalidLeadByte`] for a continuation byte in lead
///   position and for the disallowed leads `0xC0`, `0xC1` and `0xF5..=0xFF`.
/// - [`ValidationError::TruncatedSequence`] when input ends mid-sequence.
/// - [`ValidationError::OverlongEncoding`] for `0xE0 0x80..=0x9F` and
///   `0xF0 0x80..=0x8F` prefixes.
/// - [`ValidationError::SurrogateRangeViolation`] for `0xED 0xA0..=0xBF`.
/// - [`ValidationError::CodepointRangeExceeded`] for `0xF4 0x90..=0xBF`.
/// - [`ValidationError::InvalidContinuationByte`] for a trailing byte not of
///   the form `10xxxxxx`.
pub fn validate_utf8(bytes: &[u8]) -> Result<(), ValidationError> {
    scan(bytes).inspect_err(|error| log::trace!("{error}"))
}

fn scan(bytes: &[u8]) -> Result<(), ValidationError> {
    let mut index = 0;

    while index < bytes.len() {
        let lead = bytes[index];
        let width = match lead {
            0x00..=0x7F => {
                index += 1;
                continue;
            }
            0xC2..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF4 => 4,
            // 0x80..=0xC1 and 0xF5..=0xFF
            _ => {
                return Err(ValidationError::InvalidLeadByte {
                    offset: index,
                    octet: lead,
                });
            }
        };

        let sequence = &bytes[index..bytes.len().min(index + width)];
        check_sequence(sequence, index, width)?;
        index += width;
    }

    Ok(())
}

/// `sequence` starts at the lead byte and holds at most `width` bytes.
fn check_sequence(sequence: &[u8], offset: usize, width: usize) -> Result<(), ValidationError> {
    if sequence.len() < width {
        return Err(ValidationError::TruncatedSequence {
            encoding: Encoding::Utf8,
            offset,
            octets: Octets::new(sequence),
            expected: width,
        });
    }

    for (position, &byte) in sequence.iter().enumerate().skip(1) {
        if !is_continuation(byte) {
            return Err(ValidationError::InvalidContinuationByte {
                offset,
                octets: Octets::new(&sequence[..=position]),
            });
        }
        if position == 1 {
            check_second_byte(sequence[0], byte, offset)?;
        }
    }

    Ok(())
}

/// Lead bytes whose valid second-byte range is narrower than `0x80..=0xBF`.
fn check_second_byte(lead: u8, second: u8, offset: usize) -> Result<(), ValidationError> {
    let octets = Octets::new(&[lead, second]);
    match (lead, second) {
        (0xE0, 0x80..=0x9F) | (0xF0, 0x80..=0x8F) => Err(ValidationError::OverlongEncoding {
            encoding: Encoding::Utf8,
            offset,
            octets,
        }),
        (0xED, 0xA0..=0xBF) => Err(ValidationError::SurrogateRangeViolation {
            encoding: Encoding::Utf8,
            offset,
            octets,
            fault: SurrogateFault::Encoded,
        }),
        (0xF4, 0x90..=0xBF) => Err(ValidationError::CodepointRangeExceeded {
            encoding: Encoding::Utf8,
            offset,
            octets,
        }),
        _ => Ok(()),
    }
}

impl Conformance for Utf8 {
    fn encoding(&self) -> Encoding {
        Encoding::Utf8
    }

    fn validate(&self, bytes: &[u8]) -> Result<(), ValidationError> {
        validate_utf8(bytes)
    }

    fn boundary_at_or_before(&self, bytes: &[u8], mut cut: usize) -> usize {
        while cut > 0 && cut < bytes.len() && is_continuation(bytes[cut]) {
            cut -= 1;
        }
        cut
    }
}
