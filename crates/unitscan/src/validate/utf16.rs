use super::Conformance;
use crate::{
    encoding::{ByteOrder, Encoding, Octets, Planes},
    error::{SurrogateFault, ValidationError},
};

const UNIT: usize = 2;

/// UTF-16 in an explicit byte order, optionally restricted to some planes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Utf16 {
    /// Byte order of every code unit.
    pub order: ByteOrder,
    /// Planes characters may come from.
    pub planes: Planes,
}

impl Utf16 {
    /// Unrestricted UTF-16 in byte order `order`.
    #[must_use]
    pub const fn new(order: ByteOrder) -> Self {
        Self {
            order,
            planes: Planes::All,
        }
    }

    /// Restricts accepted characters to `planes`.
    #[must_use]
    pub const fn with_planes(self, planes: Planes) -> Self {
        Self { planes, ..self }
    }
}

/// Logical high byte of the unit stored at `bytes[index..index + 2]`.
#[inline]
fn high_byte(bytes: &[u8], index: usize, order: ByteOrder) -> u8 {
    order.logical_pair([bytes[index], bytes[index + 1]])[0]
}

/// Checks that `bytes` is well-formed UTF-16 in byte order `order`.
///
/// # Errors
///
/// - [`ValidationError::LengthAlignment`] for an odd length, before scanning.
/// - [`ValidationError::TruncatedSequence`] for a high surrogate in the last
///   unit.
/// - [`ValidationError::SurrogateRangeViolation`] for a high surrogate not
///   followed by a low surrogate, or a low surrogate on its own.
pub fn validate_utf16(bytes: &[u8], order: ByteOrder) -> Result<(), ValidationError> {
    validate_utf16_planes(bytes, order, Planes::All)
}

/// Like [`validate_utf16`], and additionally rejects characters outside
/// `planes`.
///
/// With [`Planes::Supplementary`] the length must be a multiple of 4 octets.
///
/// # Errors
///
/// Everything [`validate_utf16`] reports, plus
/// [`ValidationError::PlaneRestriction`] for the first well-formed character
/// outside `planes`.
pub fn validate_utf16_planes(
    bytes: &[u8],
    order: ByteOrder,
    planes: Planes,
) -> Result<(), ValidationError> {
    scan(bytes, order, planes).inspect_err(|error| log::trace!("{error}"))
}

fn scan(bytes: &[u8], order: ByteOrder, planes: Planes) -> Result<(), ValidationError> {
    let encoding = Encoding::Utf16(order);
    let alignment = match planes {
        Planes::Supplementary => 2 * UNIT,
        Planes::All | Planes::Basic => UNIT,
    };

    if bytes.len() % alignment != 0 {
        return Err(ValidationError::LengthAlignment {
            encoding,
            len: bytes.len(),
            width: alignment,
        });
    }

    let mut index = 0;
    while index < bytes.len() {
        let end = match high_byte(bytes, index, order) {
            0xD8..=0xDB => {
                let pair_end = index + 2 * UNIT;
                if pair_end > bytes.len() {
                    return Err(ValidationError::TruncatedSequence {
                        encoding,
                        offset: index,
                        octets: Octets::new(&bytes[index..]),
                        expected: 2 * UNIT,
                    });
                }
                if !matches!(high_byte(bytes, index + UNIT, order), 0xDC..=0xDF) {
                    return Err(ValidationError::SurrogateRangeViolation {
                        encoding,
                        offset: index,
                        octets: Octets::new(&bytes[index..pair_end]),
                        fault: SurrogateFault::UnpairedHigh,
                    });
                }
                pair_end
            }
            0xDC..=0xDF => {
                return Err(ValidationError::SurrogateRangeViolation {
                    encoding,
                    offset: index,
                    octets: Octets::new(&bytes[index..index + UNIT]),
                    fault: SurrogateFault::UnpairedLow,
                });
            }
            _ => index + UNIT,
        };

        if !planes.admits(end - index > UNIT) {
            return Err(ValidationError::PlaneRestriction {
                encoding,
                offset: index,
                octets: Octets::new(&bytes[index..end]),
                planes,
            });
        }
        index = end;
    }

    Ok(())
}

impl Conformance for Utf16 {
    fn encoding(&self) -> Encoding {
        Encoding::Utf16(self.order)
    }

    fn validate(&self, bytes: &[u8]) -> Result<(), ValidationError> {
        validate_utf16_planes(bytes, self.order, self.planes)
    }

    fn boundary_at_or_before(&self, bytes: &[u8], cut: usize) -> usize {
        if cut >= UNIT
            && cut < bytes.len()
            && matches!(high_byte(bytes, cut - UNIT, self.order), 0xD8..=0xDB)
        {
            cut - UNIT
        } else {
            cut
        }
    }
}
