//! The fixed-size unit codec: 3 source bytes to and from 4 symbols.

use crate::alphabet::Alphabet;
use crate::Base64Error;

/// Encodes one 3-byte group into 4 symbols.
///
/// The 24 input bits are split into four 6-bit groups, most-significant-bit
/// first, per RFC 4648. Infallible: every six-bit value has a symbol.
///
/// # Example
///
/// ```
/// use buf_base64::{encode_triplet, STANDARD};
///
/// assert_eq!(encode_triplet(&STANDARD, *b"foo"), *b"Zm9v");
/// ```
pub fn encode_triplet(alphabet: &Alphabet, src: [u8; 3]) -> [u8; 4] {
    let [a, b, c] = src;
    [
        alphabet.to_symbol(a >> 2),
        alphabet.to_symbol((a << 4) | (b >> 4)),
        alphabet.to_symbol((b << 2) | (c >> 6)),
        alphabet.to_symbol(c),
    ]
}

/// Decodes one 4-symbol group into 3 bytes.
///
/// # Errors
///
/// Returns [`Base64Error::InvalidSymbol`] on the first symbol that is not a
/// member of the alphabet; nothing is decoded in that case.
///
/// # Example
///
/// ```
/// use buf_base64::{decode_quartet, STANDARD};
///
/// assert_eq!(decode_quartet(&STANDARD, *b"Zm9v").unwrap(), *b"foo");
/// assert!(decode_quartet(&STANDARD, *b"Zm9@").is_err());
/// ```
pub fn decode_quartet(alphabet: &Alphabet, src: [u8; 4]) -> Result<[u8; 3], Base64Error> {
    let mut values = [0u8; 4];
    for (value, &symbol) in values.iter_mut().zip(src.iter()) {
        *value = alphabet
            .to_value(symbol)
            .ok_or(Base64Error::InvalidSymbol(symbol))?;
    }
    let [a, b, c, d] = values;
    Ok([(a << 2) | (b >> 4), (b << 4) | (c >> 2), (c << 6) | d])
}
