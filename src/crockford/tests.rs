use proptest::prelude::*;

use super::*;
use crate::Error;

fn stream_encode(chunks: &[&[u8]], padding: bool) -> Vec<u8> {
    let mut stream = CrockfordStream::new(padding);
    for chunk in chunks {
        stream.encode(chunk, false);
    }
    stream.encode(&[], true);
    stream.read_results()
}

fn stream_decode(chunks: &[&[u8]]) -> Vec<u8> {
    let mut stream = CrockfordStream::new(false);
    for chunk in chunks {
        stream.decode(chunk, false);
    }
    stream.decode(&[], true);
    stream.read_results()
}

// ===== ONE-SHOT ENCODING =====

#[test]
fn test_encode_empty() {
    assert_eq!(encode(b""), "");
    assert_eq!(CrockfordBase32::new(true).encode(b""), "");
}

#[test]
fn test_encode_known_values() {
    assert_eq!(encode(b"f"), "CR");
    assert_eq!(encode(b"Hello"), "91JPRV3F");
    assert_eq!(encode(b"foobar"), "CSQPYRK1E8");
}

#[test]
fn test_encode_padded() {
    let codec = CrockfordBase32::new(true);
    assert_eq!(codec.encode(b"f"), "CR======");
    assert_eq!(codec.encode(b"fo"), "CSQG====");
    assert_eq!(codec.encode(b"foo"), "CSQPY===");
    assert_eq!(codec.encode(b"foob"), "CSQPYRG=");
    assert_eq!(codec.encode(b"fooba"), "CSQPYRK1");
    assert_eq!(codec.encode(b"foobar"), "CSQPYRK1E8======");
}

#[test]
fn test_encode_never_emits_ambiguous_letters() {
    let data: Vec<u8> = (0..=255).collect();
    let encoded = encode(&data);
    assert!(!encoded.contains(['I', 'L', 'O', 'U']));
}

#[test]
fn test_encode_str() {
    assert_eq!(CrockfordBase32::default().encode_str("foobar"), "CSQPYRK1E8");
}

#[test]
fn test_encoded_len() {
    let codec = CrockfordBase32::new(true);
    assert_eq!(codec.encoded_len(0), 0);
    assert_eq!(codec.encoded_len(1), 8);
    assert_eq!(codec.encoded_len(5), 8);
    assert_eq!(codec.encoded_len(6), 16);
}

// ===== ONE-SHOT DECODING =====

#[test]
fn test_decode_empty() {
    assert_eq!(decode(""), b"");
}

#[test]
fn test_decode_known_values() {
    assert_eq!(decode("CR"), b"f");
    assert_eq!(decode("91JPRV3F"), b"Hello");
    assert_eq!(decode("CSQPYRK1E8"), b"foobar");
    assert_eq!(decode("CSQPYRK1E8======"), b"foobar");
}

#[test]
fn test_decode_aliases_and_lowercase() {
    assert_eq!(decode("CSQPYRKIE8"), b"foobar");
    assert_eq!(decode("CSQPYRKlE8"), b"foobar");
    assert_eq!(decode("csqpyrk1e8"), b"foobar");
    assert_eq!(decode("91JPRu3F"), b"Hello");
}

#[test]
fn test_decode_skips_whitespace_and_garbage() {
    assert_eq!(decode("CSQP YRK1\r\nE8\t"), b"foobar");
    assert_eq!(decode("CS!QP#YRK1E8"), b"foobar");
}

#[test]
fn test_decode_pad_is_hard_stop() {
    assert_eq!(decode("CR=CSQPYRK1E8"), b"f");
    assert_eq!(decode("=CSQPYRK1E8"), b"");
}

#[test]
fn test_decode_partial_groups() {
    // a single symbol cannot hold a byte
    assert_eq!(decode("C"), b"");
    // 15 bits -> 1 byte
    assert_eq!(decode("CSQ"), b"f");
    assert_eq!(decode("CSQG"), b"fo");
}

#[test]
fn test_decode_to_string() {
    let codec = CrockfordBase32::default();
    assert_eq!(codec.decode_to_string("CSQPYRK1E8").unwrap(), "foobar");
    // 0xFF is not valid UTF-8
    let invalid = codec.encode(&[0xFF]);
    assert!(matches!(codec.decode_to_string(invalid), Err(Error::Utf8(_))));
}

// ===== STREAMING =====

#[test]
fn test_stream_chunked_encode_matches_one_shot() {
    let data = b"The quick brown fox jumps over the lazy dog";
    let chunks: Vec<&[u8]> = data.chunks(1).collect();
    assert_eq!(stream_encode(&chunks, false), encode(data).into_bytes());

    let chunks: Vec<&[u8]> = data.chunks(3).collect();
    assert_eq!(
        stream_encode(&chunks, true),
        CrockfordBase32::new(true).encode(data).into_bytes()
    );
}

#[test]
fn test_stream_chunked_decode_matches_one_shot() {
    let text = encode(b"The quick brown fox jumps over the lazy dog");
    let chunks: Vec<&[u8]> = text.as_bytes().chunks(1).collect();
    assert_eq!(stream_decode(&chunks), decode(&text));
}

#[test]
fn test_stream_final_with_data() {
    let mut stream = CrockfordStream::new(false);
    stream.encode(b"foo", false);
    stream.encode(b"bar", true);
    assert!(stream.is_eof());
    assert_eq!(stream.available(), 10);
    assert_eq!(stream.read_results(), b"CSQPYRK1E8");
    assert!(!stream.has_data());
}

#[test]
fn test_stream_ignores_input_after_eof() {
    let mut stream = CrockfordStream::new(false);
    stream.encode(b"f", true);
    stream.encode(b"oo", false);
    stream.encode(b"", true);
    assert_eq!(stream.read_results(), b"CR");
}

#[test]
fn test_stream_pad_latches_eof_mid_chunk() {
    let mut stream = CrockfordStream::new(false);
    stream.decode(b"CSQ=G", false);
    assert!(stream.is_eof());
    stream.decode(b"PYRK1E8", true);
    assert_eq!(stream.read_results(), b"f");
}

#[test]
fn test_stream_reset() {
    let mut stream = CrockfordStream::new(true);
    stream.encode(b"f", true);
    assert_eq!(stream.read_results(), b"CR======");

    stream.reset();
    assert!(!stream.is_eof());
    assert_eq!(stream.available(), 0);
    stream.encode(b"fo", true);
    assert_eq!(stream.read_results(), b"CSQG====");
}

#[test]
fn test_stream_reset_discards_partial_state() {
    let mut stream = CrockfordStream::new(false);
    stream.decode(b"CSQ", false);
    stream.reset();
    stream.decode(b"CR", true);
    assert_eq!(stream.read_results(), b"f");
}

// ===== ALPHABET PREDICATES =====

#[test]
fn test_is_in_alphabet() {
    assert!(is_in_alphabet(b'0'));
    assert!(is_in_alphabet(b'o'));
    assert!(is_in_alphabet(b'U'));
    assert!(!is_in_alphabet(b'='));
    assert!(!is_in_alphabet(b' '));

    assert!(is_in_alphabet_bytes(b"", false));
    assert!(is_in_alphabet_bytes(b"CSQPYRK1E8", false));
    assert!(!is_in_alphabet_bytes(b"CSQP YRK1", false));
    assert!(is_in_alphabet_bytes(b"CSQP YRK1", true));
    assert!(is_in_alphabet_str("CR======\n"));
    assert!(!is_in_alphabet_str("CR!"));
}

// ===== FIXED-WIDTH IDS =====

#[test]
fn test_parse_crockford_aliases() {
    assert_eq!(parse_crockford("0").unwrap(), 0);
    assert_eq!(parse_crockford("O").unwrap(), 0);
    assert_eq!(parse_crockford("o").unwrap(), 0);
    for s in ["1", "I", "i", "L", "l"] {
        assert_eq!(parse_crockford(s).unwrap(), 1, "input {s}");
    }
    assert_eq!(parse_crockford("U").unwrap(), parse_crockford("V").unwrap());
}

#[test]
fn test_parse_crockford_values() {
    assert_eq!(parse_crockford("").unwrap(), 0);
    assert_eq!(parse_crockford("Z").unwrap(), 31);
    assert_eq!(parse_crockford("10").unwrap(), 32);
    assert_eq!(parse_crockford("1V").unwrap(), 59);
    assert_eq!(parse_crockford("ZZZZZZZZZZZZ").unwrap(), (1 << 60) - 1);
}

#[test]
fn test_parse_crockford_too_long() {
    assert_eq!(
        parse_crockford("0000000000000"),
        Err(Error::TooLong { len: 13, max: 12 })
    );
}

#[test]
fn test_parse_crockford_invalid_character() {
    assert_eq!(
        parse_crockford("1!"),
        Err(Error::InvalidCharacter {
            character: '!',
            position: 1
        })
    );
    assert_eq!(
        parse_crockford("é"),
        Err(Error::InvalidCharacter {
            character: 'é',
            position: 0
        })
    );
}

#[test]
fn test_append_crockford() {
    let mut s = String::from("id-");
    append_crockford(&mut s, 59, 2);
    assert_eq!(s, "id-1V");

    assert_eq!(to_crockford(0, 4), "0000");
    assert_eq!(to_crockford(32, 2), "10");
    // only the low `count * 5` bits are written
    assert_eq!(to_crockford(32, 1), "0");
    assert_eq!(to_crockford(u64::MAX, 13), "FZZZZZZZZZZZZ");
    assert_eq!(to_crockford(u64::MAX, 14), "0FZZZZZZZZZZZZ");
}

#[test]
fn test_write_crockford() {
    let mut buffer = [b'-'; 6];
    write_crockford(&mut buffer, 59, 2, 2);
    assert_eq!(&buffer, b"--1V--");
}

proptest! {
    #[test]
    fn prop_roundtrip(data in proptest::collection::vec(any::<u8>(), 0..256), padding in any::<bool>()) {
        let codec = CrockfordBase32::new(padding);
        prop_assert_eq!(codec.decode(codec.encode(&data)), data);
    }

    #[test]
    fn prop_chunk_size_independent(
        data in proptest::collection::vec(any::<u8>(), 0..128),
        size in 1usize..16,
        padding in any::<bool>(),
    ) {
        let chunks: Vec<&[u8]> = data.chunks(size).collect();
        let encoded = stream_encode(&chunks, padding);
        let expected = CrockfordBase32::new(padding).encode(&data);
        prop_assert_eq!(&encoded, expected.as_bytes());

        let chunks: Vec<&[u8]> = encoded.chunks(size).collect();
        prop_assert_eq!(stream_decode(&chunks), data);
    }

    #[test]
    fn prop_fixed_width_roundtrip(value in any::<u64>(), count in 1usize..=MAX_SYMBOLS) {
        let value = value & ((1u64 << (count * 5)) - 1);
        let rendered = to_crockford(value, count);
        prop_assert_eq!(rendered.len(), count);
        prop_assert_eq!(parse_crockford(&rendered).unwrap(), value);
    }
}
