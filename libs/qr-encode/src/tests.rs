//! Symbol-level tests for the encoder.

use super::*;
use crate::canvas::format_info_bits;
use proptest::prelude::*;
use qrcodegen::{QrCode, QrCodeEcc, QrSegment};

/// Version 1-L, byte mode, mask 0 symbol for "A".
const GOLDEN_A: &str = "\
#######..#.##.#######
#.....#..###..#.....#
#.###.#.##.##.#.###.#
#.###.#..#.#..#.###.#
#.###.#...#.#.#.###.#
#.....#.....#.#.....#
#######.#.#.#.#######
........##.##........
###.########.##...#..
#.##....#.....#...##.
.#.####..##.#...#...#
.#.##...##....#...#..
..##.##.#...#.#.#.#.#
........#..#.#.#.#.#.
#######.#.##.###.####
#.....#.######.###...
#.###.#.##.#.###.##.#
#.###.#..##...#...##.
#.###.#.##..#...#...#
#.....#.#.....#...##.
#######.###.#.#.#.###";

#[test]
fn test_golden_single_character() {
    let matrix = encode("A").unwrap();
    assert_eq!(matrix.version().number(), 1);
    assert_eq!(matrix.mask().index(), 0);
    assert_eq!(matrix.to_string(), GOLDEN_A);
}

#[test]
fn test_known_dark_module_counts() {
    let cases = [
        ("A", 1, 0, 226),
        ("", 1, 0, 236),
        ("HELLO", 1, 0, 222),
        ("Hello, World!", 1, 7, 226),
        ("https://example.com", 2, 5, 311),
        ("The quick brown fox jumps over the lazy dog", 3, 3, 414),
    ];
    for (text, version, mask, dark) in cases {
        let matrix = encode(text).unwrap();
        assert_eq!(matrix.version().number(), version, "version of {text:?}");
        assert_eq!(matrix.mask().index(), mask, "mask of {text:?}");
        assert_eq!(matrix.dark_module_count(), dark, "dark modules of {text:?}");
    }
}

#[test]
fn test_version_seven_symbol() {
    let text = "a".repeat(150);
    let matrix = encode(&text).unwrap();
    assert_eq!(matrix.version().number(), 7);
    assert_eq!(matrix.size(), 45);
    assert_eq!(matrix.mask().index(), 1);
    assert_eq!(matrix.dark_module_count(), 1021);

    // Version block below the top-right finder: bit i at row i / 3,
    // column size - 11 + i % 3.
    let size = matrix.size();
    let mut bits = 0u32;
    for i in (0..18).rev() {
        let dark = matrix.is_dark(i / 3, size - 11 + i % 3);
        bits = bits << 1 | u32::from(dark);
    }
    assert_eq!(bits, 0b000111110010010100);
}

#[test]
fn test_largest_symbol() {
    let text = "x".repeat(2953);
    let matrix = encode(&text).unwrap();
    assert_eq!(matrix.version(), Version::MAX);
    assert_eq!(matrix.size(), 177);
    assert_eq!(matrix.dark_module_count(), 15826);
}

#[test]
fn test_too_long_is_rejected() {
    let text = "x".repeat(5000);
    assert_eq!(
        encode(&text),
        Err(EncodingError::DataTooLong {
            length: 5000,
            capacity: 2953
        })
    );
}

#[test]
fn test_capacity_counts_bytes_not_chars() {
    // 'é' is two bytes in UTF-8.
    let text = "é".repeat(1477);
    assert!(matches!(
        encode(&text),
        Err(EncodingError::DataTooLong { length: 2954, .. })
    ));
}

#[test]
fn test_format_information_matches_mask() {
    let matrix = encode("https://example.com").unwrap();
    let mut word = 0u32;
    // First copy: column 8 rows 0-5, 7, 8, then row 8 columns 7, 5..0
    let positions: Vec<(usize, usize)> = (0..=5)
        .map(|i| (i, 8))
        .chain([(7, 8), (8, 8), (8, 7)])
        .chain((9..15).map(|i| (8, 14 - i)))
        .collect();
    for (i, &(row, col)) in positions.iter().enumerate() {
        word |= u32::from(matrix.is_dark(row, col)) << i;
    }
    assert_eq!(word, format_info_bits(EcLevel::Low, matrix.mask()));
}

#[test]
fn test_fixed_patterns() {
    let matrix = encode("HELLO").unwrap();
    let size = matrix.size();

    // Finder corners and centres
    for (r, c) in [(0, 0), (3, 3), (0, size - 1), (size - 1, 0), (3, size - 4)] {
        assert!(matrix.is_dark(r, c), "finder module ({r}, {c})");
    }
    // Separators
    assert!(!matrix.is_dark(7, 7));
    assert!(!matrix.is_dark(7, size - 8));
    // Timing pattern
    for i in 8..size - 8 {
        assert_eq!(matrix.is_dark(6, i), i % 2 == 0);
        assert_eq!(matrix.is_dark(i, 6), i % 2 == 0);
    }
    // Dark module
    assert!(matrix.is_dark(size - 8, 8));
}

#[test]
fn test_outside_positions_are_light() {
    let matrix = encode("A").unwrap();
    assert!(!matrix.is_dark(21, 0));
    assert!(!matrix.is_dark(0, 21));
}

#[test]
fn test_higher_level_needs_larger_version() {
    let text = "a".repeat(20);
    let low = QrEncoder::new(EcLevel::Low).encode_text(&text).unwrap();
    let high = QrEncoder::new(EcLevel::High).encode_text(&text).unwrap();
    assert!(high.version() > low.version());
    assert_eq!(high.ec_level(), EcLevel::High);
}

/// Encodes `data` with the qrcodegen reference at a fixed level, no boost.
fn reference(data: &[u8], ec_level: EcLevel) -> QrCode {
    let ecl = match ec_level {
        EcLevel::Low => QrCodeEcc::Low,
        EcLevel::Medium => QrCodeEcc::Medium,
        EcLevel::Quartile => QrCodeEcc::Quartile,
        EcLevel::High => QrCodeEcc::High,
    };
    QrCode::encode_segments_advanced(
        &[QrSegment::make_bytes(data)],
        ecl,
        qrcodegen::Version::MIN,
        qrcodegen::Version::MAX,
        None,
        false,
    )
    .unwrap()
}

/// Asserts version, mask and every module agree with the reference.
fn assert_matches_reference(data: &[u8], ec_level: EcLevel) {
    let ours = QrEncoder::new(ec_level).encode_bytes(data).unwrap();
    let theirs = reference(data, ec_level);
    let label = format!("{} bytes at {ec_level}", data.len());

    assert_eq!(ours.version().number(), theirs.version().value(), "version, {label}");
    assert_eq!(ours.mask().index(), theirs.mask().value(), "mask, {label}");
    assert_eq!(ours.size() as i32, theirs.size(), "size, {label}");
    for row in 0..ours.size() {
        for col in 0..ours.size() {
            assert_eq!(
                ours.is_dark(row, col),
                theirs.get_module(col as i32, row as i32),
                "module ({row}, {col}), {label}"
            );
        }
    }
}

/// Deterministic, non-repeating filler bytes.
fn filler(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 131 + 17) as u8).collect()
}

#[test]
fn test_matches_reference_for_sample_texts() {
    for text in [
        "",
        "A",
        "HELLO",
        "Hello, World!",
        "https://example.com",
        "The quick brown fox jumps over the lazy dog",
        "ünïcødé ✓ 日本語",
    ] {
        assert_matches_reference(text.as_bytes(), EcLevel::Low);
    }
}

#[test]
fn test_matches_reference_at_every_version() {
    // Exactly filling each version, and one byte past the previous one.
    for version in Version::all() {
        let capacity = version.max_byte_capacity(EcLevel::Low);
        assert_matches_reference(&filler(capacity), EcLevel::Low);
        if version > Version::MIN {
            let previous = Version::new(version.number() - 1).unwrap();
            let len = previous.max_byte_capacity(EcLevel::Low) + 1;
            assert_matches_reference(&filler(len), EcLevel::Low);
        }
    }
}

#[test]
fn test_matches_reference_at_other_levels() {
    for ec_level in [EcLevel::Medium, EcLevel::Quartile, EcLevel::High] {
        for len in [0, 1, 30, 200, 1000] {
            assert_matches_reference(&filler(len), ec_level);
        }
    }
}

#[test]
fn test_non_utf8_bytes_match_reference() {
    assert_matches_reference(&[0xff, 0xfe, 0x00, 0x80, 0xc3], EcLevel::Low);
}

fn encode_bytes_low(data: &[u8]) -> QrMatrix {
    QrEncoder::default().encode_bytes(data).unwrap()
}

proptest! {
    #[test]
    fn prop_encoding_is_deterministic(text in ".{0,80}") {
        let a = encode(&text).unwrap();
        let b = encode(&text).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_bytes_match_reference(data in proptest::collection::vec(any::<u8>(), 0..400)) {
        let ours = encode_bytes_low(&data);
        let theirs = reference(&data, EcLevel::Low);
        prop_assert_eq!(ours.version().number(), theirs.version().value());
        prop_assert_eq!(ours.mask().index(), theirs.mask().value());
        for row in 0..ours.size() {
            for col in 0..ours.size() {
                prop_assert_eq!(ours.is_dark(row, col), theirs.get_module(col as i32, row as i32));
            }
        }
    }

    #[test]
    fn prop_size_follows_version(text in "[ -~]{0,200}") {
        let matrix = encode(&text).unwrap();
        prop_assert_eq!(matrix.size(), 17 + 4 * matrix.version().number() as usize);
        prop_assert_eq!(matrix.rows().count(), matrix.size());
        prop_assert!(text.len() <= matrix.version().max_byte_capacity(EcLevel::Low));
    }
}
