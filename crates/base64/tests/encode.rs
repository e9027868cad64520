//! Tests for the buffer-level encoder.

use buf_base64::{encode, encoded_length, Base64Error};
use rand::Rng;

fn generate_blob() -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let length = rng.gen_range(0..=100);
    (0..length).map(|_| rng.gen::<u8>()).collect()
}

#[test]
fn output_is_always_full_groups_of_alphabet_symbols() {
    for _ in 0..100 {
        let blob = generate_blob();
        let mut dest = vec![0u8; encoded_length(blob.len())];
        let n = encode(&mut dest, &blob).unwrap();

        assert_eq!(n, dest.len());
        assert_eq!(n % 4, 0);
        for &symbol in &dest[..n] {
            assert!(
                symbol.is_ascii_alphanumeric()
                    || symbol == b'+'
                    || symbol == b'/'
                    || symbol == b'=',
                "unexpected output byte {symbol:#04x}"
            );
        }
    }
}

#[test]
fn known_vectors() {
    let mut dest = [0u8; 16];
    let n = encode(&mut dest, b"foobar").unwrap();
    assert_eq!(&dest[..n], b"Zm9vYmFy");
    let n = encode(&mut dest, b"hello world").unwrap();
    assert_eq!(&dest[..n], b"aGVsbG8gd29ybGQ=");
}

#[test]
fn destination_one_byte_short_overflows() {
    for _ in 0..100 {
        let blob = generate_blob();
        let needed = encoded_length(blob.len());
        if needed == 0 {
            continue;
        }
        let mut dest = vec![0u8; needed - 1];
        let result = encode(&mut dest, &blob);
        assert!(matches!(result, Err(Base64Error::Overflow { .. })));
    }
}

#[test]
fn oversized_destination_is_zero_padded() {
    let mut dest = [0xffu8; 32];
    let n = encode(&mut dest, b"fo").unwrap();
    assert_eq!(&dest[..n], b"Zm8=");
    assert!(dest[n..].iter().all(|&b| b == 0));
}
