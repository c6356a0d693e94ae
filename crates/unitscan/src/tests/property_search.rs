//! Matchers must agree with a brute-force search over unit-aligned offsets.

use alloc::vec::Vec;

use quickcheck::QuickCheck;

use super::{
    arbitrary::{BinaryAscii, SmallText, encode_utf8, encode_utf16, encode_utf32},
    property_tests,
};
use crate::{
    ByteOrder, SearchError, SearchOptions, Span, search_ascii, search_utf8, search_utf16,
    search_utf32,
};

fn reference(source: &[u8], pattern: &[u8], width: usize, options: SearchOptions) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut index = 0;
    while index + pattern.len() <= source.len() {
        if &source[index..index + pattern.len()] == pattern {
            spans.push(Span::new(index, index + pattern.len()));
            if !options.all_matches {
                break;
            }
            index += if options.overlapping { width } else { pattern.len() };
        } else {
            index += width;
        }
    }
    spans
}

fn options(all_matches: bool, overlapping: bool) -> SearchOptions {
    SearchOptions {
        all_matches,
        overlapping,
        limit: None,
    }
}

/// Empty inputs are errors, not empty match sets.
fn agrees(
    found: Result<Vec<Span>, SearchError>,
    source: &[u8],
    pattern: &[u8],
    width: usize,
    options: SearchOptions,
) -> bool {
    if source.is_empty() || pattern.is_empty() {
        return matches!(found, Err(SearchError::EmptyInput { .. }));
    }
    found == Ok(reference(source, pattern, width, options))
}

#[test]
fn ascii_matches_reference() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(source: BinaryAscii, pattern: BinaryAscii, all: bool, overlapping: bool) -> bool {
        let (source, pattern) = (&source.0, &pattern.0[..pattern.0.len().min(4)]);
        let options = options(all, overlapping);
        agrees(search_ascii(source, pattern, options), source, pattern, 1, options)
    }

    QuickCheck::new()
        .tests(property_tests())
        .quickcheck(prop as fn(BinaryAscii, BinaryAscii, bool, bool) -> bool);
}

#[test]
fn utf8_matches_reference() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(source: SmallText, pattern: SmallText, all: bool, overlapping: bool) -> bool {
        let source = encode_utf8(&source.0);
        let pattern = encode_utf8(&pattern.0[..pattern.0.len().min(3)]);
        let options = options(all, overlapping);
        agrees(search_utf8(&source, &pattern, options), &source, &pattern, 1, options)
    }

    QuickCheck::new()
        .tests(property_tests())
        .quickcheck(prop as fn(SmallText, SmallText, bool, bool) -> bool);
}

#[test]
fn utf16_matches_reference() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(source: SmallText, pattern: SmallText, order: ByteOrder, all: bool) -> bool {
        let source = encode_utf16(&source.0, order);
        let pattern = encode_utf16(&pattern.0[..pattern.0.len().min(3)], order);
        let options = options(all, false);
        agrees(search_utf16(&source, &pattern, order, options), &source, &pattern, 2, options)
    }

    QuickCheck::new()
        .tests(property_tests())
        .quickcheck(prop as fn(SmallText, SmallText, ByteOrder, bool) -> bool);
}

#[test]
fn utf32_matches_reference() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(source: SmallText, pattern: SmallText, order: ByteOrder, all: bool, overlapping: bool) -> bool {
        let source = encode_utf32(&source.0, order);
        let pattern = encode_utf32(&pattern.0[..pattern.0.len().min(3)], order);
        let options = options(all, overlapping);
        agrees(search_utf32(&source, &pattern, order, options), &source, &pattern, 4, options)
    }

    QuickCheck::new()
        .tests(property_tests())
        .quickcheck(prop as fn(SmallText, SmallText, ByteOrder, bool, bool) -> bool);
}

#[test]
fn spans_are_ordered_aligned_and_pattern_sized() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(source: SmallText, pattern: SmallText, order: ByteOrder) -> bool {
        let source = encode_utf32(&source.0, order);
        let pattern = encode_utf32(&pattern.0[..pattern.0.len().min(2)], order);
        let Ok(spans) = search_utf32(&source, &pattern, order, options(true, false)) else {
            return source.is_empty() || pattern.is_empty();
        };
        spans.iter().all(|span| span.start % 4 == 0 && span.len() == pattern.len())
            && spans.windows(2).all(|pair| pair[0].end <= pair[1].start)
    }

    QuickCheck::new()
        .tests(property_tests())
        .quickcheck(prop as fn(SmallText, SmallText, ByteOrder) -> bool);
}
