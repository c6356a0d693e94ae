#![allow(missing_docs)]

use unitscan::{
    Ascii, ByteOrder, Conformance, Encoding, SearchError, SearchOptions, Side, Span, Utf32,
    search, search_ascii, search_utf16, search_utf32, search_utf8,
};

fn utf32_be(text: &str) -> Vec<u8> {
    text.chars().flat_map(|ch| u32::from(ch).to_be_bytes()).collect()
}

fn all() -> SearchOptions {
    SearchOptions {
        all_matches: true,
        ..SearchOptions::default()
    }
}

#[test]
fn leftmost_ascii_match() {
    let spans = search_ascii(
        b"xxtest1234567890!@#$%^&*()xx",
        b"test1234567890!@#$%^&*()",
        SearchOptions::default(),
    )
    .unwrap();
    assert_eq!(spans, [Span::new(2, 26)]);
    assert_eq!(spans[0].len(), b"test1234567890!@#$%^&*()".len());
}

#[test]
fn all_matches_do_not_overlap() {
    assert_eq!(
        search_ascii(b"aaaa", b"aa", all()).unwrap(),
        [Span::new(0, 2), Span::new(2, 4)]
    );
}

#[test]
fn overlapping_matches_on_request() {
    let options = SearchOptions {
        overlapping: true,
        ..all()
    };
    assert_eq!(
        search_ascii(b"aaaa", b"aa", options).unwrap(),
        [Span::new(0, 2), Span::new(1, 3), Span::new(2, 4)]
    );
}

#[test]
fn utf32_pattern_spans_two_units() {
    let source = utf32_be("--AB--AB");
    let pattern = utf32_be("AB");
    assert_eq!(pattern.len(), 8);

    let spans = search_utf32(&source, &pattern, ByteOrder::BigEndian, all()).unwrap();
    assert_eq!(spans, [Span::new(8, 16), Span::new(24, 32)]);
    assert!(spans.iter().all(|s| s.start % 4 == 0 && s.end % 4 == 0 && s.len() == 8));
}

#[test]
fn empty_inputs_are_errors_for_every_matcher() {
    let options = SearchOptions::default();
    let order = ByteOrder::LittleEndian;
    let cases = [
        (search_ascii(b"", b"a", options), Encoding::Ascii, Side::Source),
        (search_ascii(b"a", b"", options), Encoding::Ascii, Side::Pattern),
        (search_utf8(b"", b"a", options), Encoding::Utf8, Side::Source),
        (search_utf16(b"a\0", b"", order, options), Encoding::Utf16(order), Side::Pattern),
        (search_utf32(b"", b"a\0\0\0", order, options), Encoding::Utf32(order), Side::Source),
        (search_utf32(b"a\0\0\0", b"", order, options), Encoding::Utf32(order), Side::Pattern),
    ];
    for (result, encoding, side) in cases {
        assert_eq!(result, Err(SearchError::EmptyInput { encoding, side }));
    }
}

#[test]
fn absent_pattern_is_an_empty_match_set() {
    assert_eq!(search_ascii(b"abc", b"d", all()), Ok(vec![]));
}

#[test]
fn generic_search_accepts_trait_objects() {
    let encodings: [&dyn Conformance; 2] = [&Ascii, &Utf32(ByteOrder::BigEndian)];
    let inputs = [(b"xAB".to_vec(), b"AB".to_vec()), (utf32_be("xAB"), utf32_be("AB"))];
    for (conformance, (source, pattern)) in encodings.into_iter().zip(inputs) {
        assert!(conformance.is_conformant(&source));
        let spans = search(conformance, &source, &pattern, SearchOptions::default()).unwrap();
        let width = conformance.encoding().unit_width();
        assert_eq!(spans, [Span::new(width, 3 * width)]);
    }
}
