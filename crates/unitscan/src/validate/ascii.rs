use super::Conformance;
use crate::{encoding::Encoding, error::ValidationError};

/// 7-bit ASCII: every byte in `0x00..=0x7F`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ascii;

/// Checks that every byte of `bytes` has its high bit clear.
///
/// # Errors
///
/// [`ValidationError::NonAsciiByte`] for the first byte at or above `0x80`.
pub fn validate_ascii(bytes: &[u8]) -> Result<(), ValidationError> {
    match bytes.iter().position(|&b| b & 0x80 != 0) {
        None => Ok(()),
        Some(offset) => {
            let error = ValidationError::NonAsciiByte {
                offset,
                octet: bytes[offset],
            };
            log::trace!("{error}");
            Err(error)
        }
    }
}

impl Conformance for Ascii {
    fn encoding(&self) -> Encoding {
        Encoding::Ascii
    }

    fn validate(&self, bytes: &[u8]) -> Result<(), ValidationError> {
        validate_ascii(bytes)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::empty(b"")]
    #[case::nul(b"\x00")]
    #[case::last_ascii(b"\x7f")]
    #[case::text(b"test1234567890!@#$%^&*()")]
    fn accepts(#[case] bytes: &[u8]) {
        assert_eq!(validate_ascii(bytes), Ok(()));
    }

    #[rstest]
    #[case::first_non_ascii(b"\x80", 0, 0x80)]
    #[case::trailing(b"abc\xff", 3, 0xff)]
    #[case::stops_at_first(b"a\xc3\xa9\x80", 1, 0xc3)]
    fn rejects(#[case] bytes: &[u8], #[case] offset: usize, #[case] octet: u8) {
        assert_eq!(
            validate_ascii(bytes),
            Err(ValidationError::NonAsciiByte { offset, octet })
        );
    }
}
