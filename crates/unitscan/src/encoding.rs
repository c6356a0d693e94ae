use core::fmt;

/// Byte order of a multi-byte code unit as it is stored in memory.
///
/// Always supplied by the caller; no byte order mark is ever inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ByteOrder {
    /// Most significant byte stored first.
    BigEndian,
    /// Least significant byte stored first.
    LittleEndian,
}

impl ByteOrder {
    /// Returns `BigEndian` for `false` and `LittleEndian` for `true`, matching
    /// the boolean `little_endian` flag used by the bindings.
    #[must_use]
    pub const fn from_little_endian(little_endian: bool) -> Self {
        if little_endian {
            Self::LittleEndian
        } else {
            Self::BigEndian
        }
    }

    /// Reorders a stored 2-byte unit into `[high, low]`.
    #[inline]
    #[must_use]
    pub const fn logical_pair(self, stored: [u8; 2]) -> [u8; 2] {
        match self {
            Self::BigEndian => stored,
            Self::LittleEndian => [stored[1], stored[0]],
        }
    }

    /// Reorders a stored 4-byte unit into most-significant-first order.
    #[inline]
    #[must_use]
    pub const fn logical_quad(self, stored: [u8; 4]) -> [u8; 4] {
        match self {
            Self::BigEndian => stored,
            Self::LittleEndian => [stored[3], stored[2], stored[1], stored[0]],
        }
    }

    /// Stored index of the least significant byte within a unit of `width`
    /// bytes.
    #[inline]
    #[must_use]
    pub const fn least_significant(self, width: usize) -> usize {
        match self {
            Self::BigEndian => width - 1,
            Self::LittleEndian => 0,
        }
    }

    /// Stored index of the most significant byte within a unit of `width`
    /// bytes.
    #[inline]
    #[must_use]
    pub const fn most_significant(self, width: usize) -> usize {
        match self {
            Self::BigEndian => 0,
            Self::LittleEndian => width - 1,
        }
    }

    const fn suffix(self) -> &'static str {
        match self {
            Self::BigEndian => "BE",
            Self::LittleEndian => "LE",
        }
    }
}

/// Encoding descriptor: code unit width plus, for multi-byte units, the byte
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Encoding {
    /// 7-bit ASCII.
    Ascii,
    /// UTF-8.
    Utf8,
    /// UTF-16 in the given byte order.
    Utf16(ByteOrder),
    /// UTF-32 in the given byte order.
    Utf32(ByteOrder),
}

impl Encoding {
    /// Width in bytes of one code unit.
    #[must_use]
    pub const fn unit_width(self) -> usize {
        match self {
            Self::Ascii | Self::Utf8 => 1,
            Self::Utf16(_) => 2,
            Self::Utf32(_) => 4,
        }
    }

    /// Byte order, or `None` for the single-byte unit encodings.
    #[must_use]
    pub const fn byte_order(self) -> Option<ByteOrder> {
        match self {
            Self::Ascii | Self::Utf8 => None,
            Self::Utf16(order) | Self::Utf32(order) => Some(order),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascii => f.write_str("ASCII"),
            Self::Utf8 => f.write_str("UTF-8"),
            Self::Utf16(order) => write!(f, "UTF-16{}", order.suffix()),
            Self::Utf32(order) => write!(f, "UTF-32{}", order.suffix()),
        }
    }
}

/// Unicode planes a UTF-16 sequence may draw characters from.
///
/// Characters in the basic multilingual plane take one code unit, all others
/// a surrogate pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Planes {
    /// Any scalar value.
    #[default]
    All,
    /// U+0000..=U+FFFF only, so no surrogate pairs.
    Basic,
    /// U+10000..=U+10FFFF only, so every character is a surrogate pair and
    /// the length is a multiple of 4 octets.
    Supplementary,
}

impl Planes {
    /// Whether a character of the given kind is allowed.
    #[must_use]
    pub const fn admits(self, supplementary: bool) -> bool {
        match self {
            Self::All => true,
            Self::Basic => !supplementary,
            Self::Supplementary => supplementary,
        }
    }
}

impl fmt::Display for Planes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::All => "the Unicode code space",
            Self::Basic => "the basic multilingual plane",
            Self::Supplementary => "the supplementary planes",
        })
    }
}

/// Up to four raw bytes taken from the input, kept in stored order.
///
/// Displays as `0x` followed by two lowercase hex digits per byte.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Octets {
    bytes: [u8; 4],
    len: u8,
}

impl Octets {
    /// Copies at most four bytes from the front of `bytes`.
    #[must_use]
    pub fn new(bytes: &[u8]) -> Self {
        let len = bytes.len().min(4);
        let mut buf = [0u8; 4];
        buf[..len].copy_from_slice(&bytes[..len]);
        Self {
            bytes: buf,
            len: u8::try_from(len).unwrap_or(4),
        }
    }

    /// The captured bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..usize::from(self.len)]
    }
}

impl fmt::Display for Octets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("0x")?;
        for byte in self.as_bytes() {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Octets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Octets({self})")
    }
}
