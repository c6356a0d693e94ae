//! Code-unit aware pattern search.
//!
//! Source and pattern are compared one code unit at a time, so every reported
//! span starts and ends on a unit boundary. Both inputs are validated first;
//! for UTF-8 and UTF-16 that also guarantees spans fall on character
//! boundaries, since a valid pattern can only line up with whole characters of
//! a valid source.

use alloc::vec::Vec;
use core::ops::Range;

use bstr::BStr;

use crate::{
    encoding::{ByteOrder, Planes},
    error::{SearchError, Side},
    validate::{Ascii, Conformance, Utf8, Utf16, Utf32},
};

/// Options for a pattern search.
///
/// # Examples
///
/// ```rust
/// use unitscan::{SearchOptions, Span, search_ascii};
///
/// let options = SearchOptions {
///     all_matches: true,
///     ..Default::default()
/// };
/// let spans = search_ascii(b"aaaa", b"aa", options).unwrap();
/// assert_eq!(spans, [Span::new(0, 2), Span::new(2, 4)]);
/// ```
///
/// # Default
///
/// The leftmost match only, no limit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOptions {
    /// Whether to report every match instead of the leftmost one.
    ///
    /// # Default
    ///
    /// `false`
    pub all_matches: bool,

    /// Whether matches may share code units.
    ///
    /// By default scanning resumes after the end of each match, so `"aa"` in
    /// `"aaaa"` matches twice. With `overlapping` it resumes one unit after
    /// the start of each match and matches three times. Only meaningful
    /// together with [`all_matches`](Self::all_matches).
    ///
    /// # Default
    ///
    /// `false`
    pub overlapping: bool,

    /// Maximum number of code units of the source to search.
    ///
    /// The source is cut to `limit * unit width` bytes before validation. For
    /// UTF-8 and UTF-16 the cut moves back to the previous character boundary
    /// rather than split a sequence or surrogate pair.
    ///
    /// # Default
    ///
    /// `None`
    pub limit: Option<usize>,
}

/// Half-open byte range `[start, end)` of one match in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    /// Offset of the first matched byte.
    pub start: usize,
    /// Offset one past the last matched byte.
    pub end: usize,
}

impl Span {
    /// Creates a span covering `start..end`.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the span is empty. Spans returned by a search never are.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl From<Span> for Range<usize> {
    fn from(span: Span) -> Self {
        span.start..span.end
    }
}

impl From<Span> for (usize, usize) {
    fn from(span: Span) -> Self {
        (span.start, span.end)
    }
}

/// Searches `source` for `pattern`, both encoded as described by
/// `conformance`.
///
/// Preconditions are checked in order: the limit is applied, then emptiness
/// (source before pattern), then conformance (source before pattern). A
/// pattern that does not occur yields `Ok` with no spans.
///
/// # Errors
///
/// - [`SearchError::EmptyInput`] when the limited source or the pattern is
///   empty.
/// - [`SearchError::NonConformant`] when either fails validation.
pub fn search<C>(
    conformance: &C,
    source: &[u8],
    pattern: &[u8],
    options: SearchOptions,
) -> Result<Vec<Span>, SearchError>
where
    C: Conformance + ?Sized,
{
    let encoding = conformance.encoding();
    let source = match options.limit {
        Some(limit) => {
            let cut = limit
                .saturating_mul(encoding.unit_width())
                .min(source.len());
            &source[..conformance.boundary_at_or_before(source, cut)]
        }
        None => source,
    };

    check_preconditions(conformance, source, pattern).inspect_err(|error| {
        log::debug!("rejected search for {:?}: {error}", BStr::new(pattern));
    })?;

    let spans = scan(conformance, source, pattern, options);
    log::trace!(
        "[{encoding}] {} match(es) of {:?} in {} bytes",
        spans.len(),
        BStr::new(pattern),
        source.len()
    );
    Ok(spans)
}

fn check_preconditions<C>(conformance: &C, source: &[u8], pattern: &[u8]) -> Result<(), SearchError>
where
    C: Conformance + ?Sized,
{
    let encoding = conformance.encoding();
    for (side, bytes) in [(Side::Source, source), (Side::Pattern, pattern)] {
        if bytes.is_empty() {
            return Err(SearchError::EmptyInput { encoding, side });
        }
    }
    for (side, bytes) in [(Side::Source, source), (Side::Pattern, pattern)] {
        conformance
            .validate(bytes)
            .map_err(|error| SearchError::NonConformant { side, error })?;
    }
    Ok(())
}

/// Unit-wise scan. Both inputs are non-empty, valid, and a whole number of
/// units long.
///
/// A mismatch discards the tentative match and resumes one unit after its
/// start, so the result always agrees with a plain leftmost substring search
/// over unit-aligned offsets.
fn scan<C>(conformance: &C, source: &[u8], pattern: &[u8], options: SearchOptions) -> Vec<Span>
where
    C: Conformance + ?Sized,
{
    let width = conformance.encoding().unit_width();
    let mut spans = Vec::new();

    // Bytes of the pattern matched so far and where that tentative match began.
    let mut matched = 0;
    let mut start = 0;
    let mut index = 0;

    while index < source.len() {
        if matched == 0 && source.len() - index < pattern.len() {
            break;
        }

        let unit = &source[index..index + width];
        if conformance.units_equal(unit, &pattern[matched..matched + width]) {
            if matched == 0 {
                start = index;
            }
            matched += width;
            index += width;

            if matched == pattern.len() {
                spans.push(Span::new(start, index));
                matched = 0;
                if !options.all_matches {
                    break;
                }
                if options.overlapping {
                    index = start + width;
                }
            }
        } else {
            if matched != 0 {
                index = start;
                matched = 0;
            }
            start = 0;
            index += width;
        }
    }

    spans
}

/// Searches ASCII `source` for ASCII `pattern`. `limit` counts bytes.
///
/// # Errors
///
/// See [`search`].
pub fn search_ascii(
    source: &[u8],
    pattern: &[u8],
    options: SearchOptions,
) -> Result<Vec<Span>, SearchError> {
    search(&Ascii, source, pattern, options)
}

/// Searches UTF-8 `source` for UTF-8 `pattern`. `limit` counts bytes.
///
/// # Errors
///
/// See [`search`].
pub fn search_utf8(
    source: &[u8],
    pattern: &[u8],
    options: SearchOptions,
) -> Result<Vec<Span>, SearchError> {
    search(&Utf8, source, pattern, options)
}

/// Searches UTF-16 `source` for UTF-16 `pattern`, both in byte order `order`.
/// `limit` counts 2-byte units.
///
/// # Errors
///
/// See [`search`].
pub fn search_utf16(
    source: &[u8],
    pattern: &[u8],
    order: ByteOrder,
    options: SearchOptions,
) -> Result<Vec<Span>, SearchError> {
    search(&Utf16::new(order), source, pattern, options)
}

/// Like [`search_utf16`], with both source and pattern restricted to
/// characters from `planes`.
///
/// # Errors
///
/// See [`search`]. A character outside `planes` on either side is
/// [`SearchError::NonConformant`].
pub fn search_utf16_planes(
    source: &[u8],
    pattern: &[u8],
    order: ByteOrder,
    planes: Planes,
    options: SearchOptions,
) -> Result<Vec<Span>, SearchError> {
    search(&Utf16::new(order).with_planes(planes), source, pattern, options)
}

/// Searches UTF-32 `source` for UTF-32 `pattern`, both in byte order `order`.
/// `limit` counts 4-byte units.
///
/// # Errors
///
/// See [`search`].
pub fn search_utf32(
    source: &[u8],
    pattern: &[u8],
    order: ByteOrder,
    options: SearchOptions,
) -> Result<Vec<Span>, SearchError> {
    search(&Utf32(order), source, pattern, options)
}
