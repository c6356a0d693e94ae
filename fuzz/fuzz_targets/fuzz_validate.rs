#![no_main]
use std::cell::RefCell;

use arbitrary::Arbitrary;
use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use unitscan::{
    ByteOrder, Planes, SearchOptions, is_ascii, is_utf8, is_utf16, is_utf32, search_utf32,
    validate_utf16_planes,
};

thread_local! {
    static RNG: RefCell<SmallRng> = RefCell::new(SmallRng::from_os_rng());
}

/// Characters on either side of every validator boundary.
static CHAR_TABLE: &[char] = &[
    '\u{0}', 'A', '\u{7F}', '\u{80}', '\u{7FF}', '\u{800}', '\u{D7FF}', '\u{E000}', '\u{FFFF}',
    '\u{10000}', '\u{10FFFF}', 'é', '€', '😀',
];

fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

/// Most valid inputs are astronomically rare among random bytes, so every
/// tenth mutation writes well-formed text in a random encoding and then
/// corrupts at most one byte of it.
fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    if !seed.is_multiple_of(10) || max_size < 2 {
        return fuzzer_mutate(data, size, max_size);
    }

    with_rng(|rng| {
        let flags: u8 = rng.random::<u8>() & 0x07;
        data[0] = flags;

        let order = order_from(flags);
        let mut written = 1;
        loop {
            let ch = CHAR_TABLE[rng.random_range(0..CHAR_TABLE.len())];
            let encoded = encode(ch, flags >> 1, order);
            if written + encoded.len() > max_size || rng.random_range(0..16) == 0 {
                break;
            }
            data[written..written + encoded.len()].copy_from_slice(&encoded);
            written += encoded.len();
        }

        if written > 1 && rng.random_bool(0.5) {
            let at = rng.random_range(1..written);
            data[at] = rng.random();
        }
        written
    })
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

fn order_from(flags: u8) -> ByteOrder {
    ByteOrder::from_little_endian(flags & 1 == 1)
}

fn encode(ch: char, encoding: u8, order: ByteOrder) -> Vec<u8> {
    let mut buf = [0u16; 2];
    match encoding % 3 {
        0 => ch.to_string().into_bytes(),
        1 => ch
            .encode_utf16(&mut buf)
            .iter()
            .flat_map(|unit| match order {
                ByteOrder::BigEndian => unit.to_be_bytes(),
                ByteOrder::LittleEndian => unit.to_le_bytes(),
            })
            .collect(),
        _ => match order {
            ByteOrder::BigEndian => u32::from(ch).to_be_bytes().to_vec(),
            ByteOrder::LittleEndian => u32::from(ch).to_le_bytes().to_vec(),
        },
    }
}

fn std_utf16(bytes: &[u8], order: ByteOrder) -> bool {
    bytes.len() % 2 == 0
        && char::decode_utf16(bytes.chunks_exact(2).map(|unit| match order {
            ByteOrder::BigEndian => u16::from_be_bytes([unit[0], unit[1]]),
            ByteOrder::LittleEndian => u16::from_le_bytes([unit[0], unit[1]]),
        }))
        .all(|decoded| decoded.is_ok())
}

fn std_utf16_planes(bytes: &[u8], order: ByteOrder, planes: Planes) -> bool {
    bytes.len() % 2 == 0
        && char::decode_utf16(bytes.chunks_exact(2).map(|unit| match order {
            ByteOrder::BigEndian => u16::from_be_bytes([unit[0], unit[1]]),
            ByteOrder::LittleEndian => u16::from_le_bytes([unit[0], unit[1]]),
        }))
        .all(|decoded| decoded.is_ok_and(|ch| planes.admits(u32::from(ch) > 0xFFFF)))
}

fn std_utf32(bytes: &[u8], order: ByteOrder) -> bool {
    bytes.len() % 4 == 0
        && bytes.chunks_exact(4).all(|unit| {
            let stored = [unit[0], unit[1], unit[2], unit[3]];
            char::from_u32(match order {
                ByteOrder::BigEndian => u32::from_be_bytes(stored),
                ByteOrder::LittleEndian => u32::from_le_bytes(stored),
            })
            .is_some()
        })
}

#[derive(Debug, Arbitrary)]
struct SearchInput {
    pattern_start: usize,
    pattern_units: u8,
    all_matches: bool,
}

fn validate(data: &[u8]) {
    let Some((&flags, bytes)) = data.split_first() else {
        return;
    };
    let order = order_from(flags);

    assert_eq!(is_ascii(bytes), bytes.is_ascii(), "ASCII {bytes:02x?}");
    assert_eq!(is_utf8(bytes), std::str::from_utf8(bytes).is_ok(), "UTF-8 {bytes:02x?}");
    assert_eq!(is_utf16(bytes, order), std_utf16(bytes, order), "UTF-16 {order:?} {bytes:02x?}");
    assert_eq!(is_utf32(bytes, order), std_utf32(bytes, order), "UTF-32 {order:?} {bytes:02x?}");
    for planes in [Planes::Basic, Planes::Supplementary] {
        assert_eq!(
            validate_utf16_planes(bytes, order, planes).is_ok(),
            std_utf16_planes(bytes, order, planes),
            "UTF-16 {order:?} {planes:?} {bytes:02x?}"
        );
    }

    // Any unit-aligned slice of a valid UTF-32 source must be found at or
    // before its own offset.
    if is_utf32(bytes, order) && bytes.len() >= 4 {
        let Ok(input) = SearchInput::arbitrary(&mut arbitrary::Unstructured::new(bytes)) else {
            return;
        };
        let units = bytes.len() / 4;
        let start = input.pattern_start % units;
        let len = 1 + usize::from(input.pattern_units) % (units - start);
        let pattern = &bytes[start * 4..(start + len) * 4];
        let options = SearchOptions {
            all_matches: input.all_matches,
            ..SearchOptions::default()
        };
        let spans = search_utf32(bytes, pattern, order, options).expect("valid inputs");
        let first = spans.first().expect("pattern is a slice of the source");
        assert!(first.start <= start * 4 && first.start % 4 == 0);
        assert_eq!(&bytes[first.start..first.end], pattern);
    }
}

fuzz_target!(|data: &[u8]| {
    validate(data);
});
