use super::Conformance;
use crate::{
    encoding::{ByteOrder, Encoding, Octets},
    error::{SurrogateFault, ValidationError},
};

const UNIT: usize = 4;

/// UTF-32 in an explicit byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Utf32(pub ByteOrder);

/// Checks that every 4-byte unit of `bytes` is a Unicode scalar value in
/// byte order `order`.
///
/// # Errors
///
/// - [`ValidationError::LengthAlignment`] when the length is not a multiple
///   of 4, before scanning.
/// - [`ValidationError::CodepointRangeExceeded`] for values above `0x10FFFF`.
/// - [`ValidationError::SurrogateRangeViolation`] for `0xD800..=0xDFFF`.
pub fn validate_utf32(bytes: &[u8], order: ByteOrder) -> Result<(), ValidationError> {
    scan(bytes, order).inspect_err(|error| log::trace!("{error}"))
}

fn scan(bytes: &[u8], order: ByteOrder) -> Result<(), ValidationError> {
    let encoding = Encoding::Utf32(order);

    if bytes.len() % UNIT != 0 {
        return Err(ValidationError::LengthAlignment {
            encoding,
            len: bytes.len(),
            width: UNIT,
        });
    }

    for (position, unit) in bytes.chunks_exact(UNIT).enumerate() {
        let [b0, b1, b2, _] = order.logical_quad([unit[0], unit[1], unit[2], unit[3]]);
        let offset = position * UNIT;

        if b0 != 0x00 || b1 > 0x10 {
            return Err(ValidationError::CodepointRangeExceeded {
                encoding,
                offset,
                octets: Octets::new(unit),
            });
        }
        if b1 == 0x00 && b2 & 0xF8 == 0xD8 {
            return Err(ValidationError::SurrogateRangeViolation {
                encoding,
                offset,
                octets: Octets::new(unit),
                fault: SurrogateFault::Encoded,
            });
        }
    }

    Ok(())
}

impl Conformance for Utf32 {
    fn encoding(&self) -> Encoding {
        Encoding::Utf32(self.0)
    }

    fn validate(&self, bytes: &[u8]) -> Result<(), ValidationError> {
        validate_utf32(bytes, self.0)
    }

    /// Least significant byte first, then the most significant, then the two
    /// middle bytes. Text differs most often in the low byte and the high
    /// byte is almost always zero.
    #[inline]
    fn units_equal(&self, a: &[u8], b: &[u8]) -> bool {
        let low = self.0.least_significant(UNIT);
        let high = self.0.most_significant(UNIT);
        a[low] == b[low] && a[high] == b[high] && a[1] == b[1] && a[2] == b[2]
    }
}
