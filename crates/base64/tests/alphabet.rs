//! Tests for custom alphabet support.

use buf_base64::{
    decode_using_alphabet, decoded_length_upper_bound, encode_using_alphabet, encoded_length,
    Alphabet, Base64Error, ALPHABET_RFC4648, ALPHABET_URL_SAFE, STANDARD,
};
use rand::Rng;

fn generate_blob() -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let length = rng.gen_range(0..=100);
    (0..length).map(|_| rng.gen::<u8>()).collect()
}

#[test]
fn url_safe_round_trip() {
    let url_safe = Alphabet::new(ALPHABET_URL_SAFE).unwrap();

    for _ in 0..100 {
        let blob = generate_blob();
        let mut encoded = vec![0u8; encoded_length(blob.len())];
        let n = encode_using_alphabet(&url_safe, &mut encoded, &blob).unwrap();

        assert!(!encoded[..n].contains(&b'+'));
        assert!(!encoded[..n].contains(&b'/'));

        let mut decoded = vec![0u8; decoded_length_upper_bound(n)];
        let m = decode_using_alphabet(&url_safe, &mut decoded, &encoded[..n]).unwrap();
        assert_eq!(&decoded[..m], blob);
    }
}

#[test]
fn url_safe_output_fails_standard_decode_on_substituted_symbols() {
    let url_safe = Alphabet::new(ALPHABET_URL_SAFE).unwrap();

    // 0xfb 0xff encodes to "-_" territory in the URL-safe alphabet.
    let blob = [0xfbu8, 0xef, 0xff];
    let mut encoded = [0u8; 4];
    encode_using_alphabet(&url_safe, &mut encoded, &blob).unwrap();
    assert!(encoded.contains(&b'-') || encoded.contains(&b'_'));

    let mut decoded = [0u8; 3];
    let result = decode_using_alphabet(&STANDARD, &mut decoded, &encoded);
    assert!(matches!(result, Err(Base64Error::InvalidSymbol(b'-' | b'_'))));
}

#[test]
fn contains_matches_membership_for_all_bytes() {
    let url_safe = Alphabet::new(ALPHABET_URL_SAFE).unwrap();
    for byte in 0..=255u8 {
        assert_eq!(
            url_safe.contains(byte),
            ALPHABET_URL_SAFE.contains(&byte),
            "membership mismatch for {byte:#04x}"
        );
    }
    assert!(!url_safe.contains(b'='));
}

#[test]
fn duplicate_symbols_fail_construction() {
    let mut symbols = *ALPHABET_RFC4648;
    symbols[10] = symbols[3];
    assert!(matches!(
        Alphabet::new(&symbols),
        Err(Base64Error::DuplicateSymbol(_))
    ));
}

#[test]
fn standard_matches_explicitly_built_table() {
    let built = Alphabet::new(ALPHABET_RFC4648).unwrap();
    let blob = b"any carnal pleasure";
    let mut via_static = vec![0u8; encoded_length(blob.len())];
    let mut via_built = vec![0u8; encoded_length(blob.len())];
    encode_using_alphabet(&STANDARD, &mut via_static, blob).unwrap();
    encode_using_alphabet(&built, &mut via_built, blob).unwrap();
    assert_eq!(via_static, via_built);
}
