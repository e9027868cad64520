//! Buffer-level encode driver.

use crate::alphabet::{Alphabet, STANDARD};
use crate::tail::encode_tail;
use crate::triplet::encode_triplet;
use crate::Base64Error;

/// Destination capacity required to encode `srclen` source bytes:
/// one 4-symbol group per started 3-byte group.
///
/// # Example
///
/// ```
/// use buf_base64::encoded_length;
///
/// assert_eq!(encoded_length(0), 0);
/// assert_eq!(encoded_length(1), 4);
/// assert_eq!(encoded_length(3), 4);
/// assert_eq!(encoded_length(4), 8);
/// ```
pub fn encoded_length(srclen: usize) -> usize {
    srclen.div_ceil(3) * 4
}

/// Encodes `src` into `dest` using the given alphabet.
///
/// Full 3-byte groups are encoded in place; a 1- or 2-byte remainder becomes
/// a final padded group. Any destination bytes beyond the written symbols
/// are zero-filled, so the destination can be handed to bounded-string
/// consumers as-is.
///
/// Returns the number of symbols written, always
/// [`encoded_length`]`(src.len())`.
///
/// # Errors
///
/// Returns [`Base64Error::Overflow`] if `dest` is smaller than
/// [`encoded_length`]`(src.len())`; nothing is written in that case.
pub fn encode_using_alphabet(
    alphabet: &Alphabet,
    dest: &mut [u8],
    src: &[u8],
) -> Result<usize, Base64Error> {
    let needed = encoded_length(src.len());
    if dest.len() < needed {
        return Err(Base64Error::Overflow {
            needed,
            available: dest.len(),
        });
    }

    let mut written = 0;
    let mut groups = src.chunks_exact(3);
    for group in &mut groups {
        let quartet = encode_triplet(alphabet, [group[0], group[1], group[2]]);
        dest[written..written + 4].copy_from_slice(&quartet);
        written += 4;
    }

    let remainder = groups.remainder();
    if !remainder.is_empty() {
        let quartet = encode_tail(alphabet, remainder);
        dest[written..written + 4].copy_from_slice(&quartet);
        written += 4;
    }

    dest[written..].fill(0);
    Ok(written)
}

/// Encodes `src` into `dest` using the RFC 4648 alphabet.
///
/// See [`encode_using_alphabet`].
///
/// # Errors
///
/// Returns [`Base64Error::Overflow`] if `dest` is too small.
///
/// # Example
///
/// ```
/// use buf_base64::encode;
///
/// let mut dest = [0u8; 8];
/// let n = encode(&mut dest, b"foobar").unwrap();
/// assert_eq!(&dest[..n], b"Zm9vYmFy");
/// ```
pub fn encode(dest: &mut [u8], src: &[u8]) -> Result<usize, Base64Error> {
    encode_using_alphabet(&STANDARD, dest, src)
}
