//! Codec for the final, possibly partial, group.

use crate::alphabet::Alphabet;
use crate::constants::PAD;
use crate::triplet::{decode_quartet, encode_triplet};
use crate::Base64Error;

/// Encodes the final 1 or 2 source bytes into a padded 4-symbol group.
///
/// The missing source bytes are zero-filled before encoding, then the symbol
/// positions covering only absent bytes are overwritten with padding: one
/// missing byte yields one `=` (position 3), two missing bytes yield two
/// (positions 2 and 3).
///
/// # Panics
///
/// Panics if `src` is empty or holds 3 or more bytes; a full group belongs
/// to [`encode_triplet`].
///
/// # Example
///
/// ```
/// use buf_base64::{encode_tail, STANDARD};
///
/// assert_eq!(encode_tail(&STANDARD, b"f"), *b"Zg==");
/// assert_eq!(encode_tail(&STANDARD, b"fo"), *b"Zm8=");
/// ```
pub fn encode_tail(alphabet: &Alphabet, src: &[u8]) -> [u8; 4] {
    assert!(
        !src.is_empty() && src.len() < 3,
        "tail must hold 1 or 2 bytes"
    );
    let mut triplet = [0u8; 3];
    triplet[..src.len()].copy_from_slice(src);
    let mut quartet = encode_triplet(alphabet, triplet);
    for symbol in &mut quartet[src.len() + 1..] {
        *symbol = PAD;
    }
    quartet
}

/// Decodes the final 0–4 symbols of an encoded buffer, which may end in
/// padding or be an unpadded partial group.
///
/// Trailing padding is stripped, the remaining symbols are extended to a
/// full quartet with the alphabet's zero-value symbol, and `remaining - 1`
/// bytes of the decoded group are returned: 2 symbols carry 1 byte,
/// 3 symbols carry 2, 4 symbols carry 3. An empty or all-padding segment
/// decodes to 0 bytes.
///
/// Returns the decoded group and the number of its bytes that are valid.
///
/// # Errors
///
/// - [`Base64Error::TruncatedTail`] if exactly one symbol remains after
///   stripping padding; a lone symbol carries only 6 bits, less than a byte.
/// - [`Base64Error::InvalidSymbol`] if any remaining symbol is not a member
///   of the alphabet.
///
/// # Panics
///
/// Panics if `src` holds more than 4 symbols.
pub fn decode_tail(alphabet: &Alphabet, src: &[u8]) -> Result<([u8; 3], usize), Base64Error> {
    assert!(src.len() <= 4, "tail must hold at most 4 symbols");
    let mut remaining = src.len();
    while remaining > 0 && src[remaining - 1] == PAD {
        remaining -= 1;
    }
    match remaining {
        0 => return Ok(([0u8; 3], 0)),
        1 => return Err(Base64Error::TruncatedTail),
        _ => {}
    }
    let mut quartet = [alphabet.to_symbol(0); 4];
    quartet[..remaining].copy_from_slice(&src[..remaining]);
    let bytes = decode_quartet(alphabet, quartet)?;
    Ok((bytes, remaining - 1))
}
