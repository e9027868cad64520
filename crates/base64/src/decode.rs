//! Buffer-level decode driver.

use crate::alphabet::{Alphabet, STANDARD};
use crate::tail::decode_tail;
use crate::triplet::decode_quartet;
use crate::Base64Error;

/// Destination capacity required to decode `srclen` encoded symbols.
///
/// This is an upper bound, not the decoded size: padding in the final group
/// can make the actual output up to 2 bytes shorter. The return value of
/// [`decode`] reports the exact length.
///
/// # Example
///
/// ```
/// use buf_base64::decoded_length_upper_bound;
///
/// assert_eq!(decoded_length_upper_bound(0), 0);
/// assert_eq!(decoded_length_upper_bound(4), 3);
/// assert_eq!(decoded_length_upper_bound(8), 6);
/// ```
pub fn decoded_length_upper_bound(srclen: usize) -> usize {
    srclen.div_ceil(4) * 3
}

/// Decodes `src` into `dest` using the given alphabet.
///
/// Full 4-symbol groups are decoded in place; the final group of at most 4
/// symbols (padded, unpadded, or partial) goes through the tail path.
/// Destination bytes beyond the decoded output are zero-filled.
///
/// Returns the number of bytes written.
///
/// # Errors
///
/// - [`Base64Error::Overflow`] if `dest` is smaller than
///   [`decoded_length_upper_bound`]`(src.len())`; nothing is written.
/// - [`Base64Error::InvalidSymbol`] on the first input byte outside the
///   alphabet.
/// - [`Base64Error::TruncatedTail`] if the final group holds exactly one
///   symbol after stripping padding.
///
/// Groups decoded before a failure are already committed to `dest`; on an
/// error return the destination contents are unspecified and must be
/// discarded.
pub fn decode_using_alphabet(
    alphabet: &Alphabet,
    dest: &mut [u8],
    src: &[u8],
) -> Result<usize, Base64Error> {
    let needed = decoded_length_upper_bound(src.len());
    if dest.len() < needed {
        return Err(Base64Error::Overflow {
            needed,
            available: dest.len(),
        });
    }

    let mut written = 0;
    let mut offset = 0;
    // Stop while more than one group remains; the last group may carry
    // padding and belongs to the tail path.
    while src.len() - offset > 4 {
        let group = [src[offset], src[offset + 1], src[offset + 2], src[offset + 3]];
        let bytes = decode_quartet(alphabet, group)?;
        dest[written..written + 3].copy_from_slice(&bytes);
        written += 3;
        offset += 4;
    }

    let (bytes, count) = decode_tail(alphabet, &src[offset..])?;
    dest[written..written + count].copy_from_slice(&bytes[..count]);
    written += count;

    dest[written..].fill(0);
    Ok(written)
}

/// Decodes `src` into `dest` using the RFC 4648 alphabet.
///
/// See [`decode_using_alphabet`].
///
/// # Errors
///
/// Returns [`Base64Error::Overflow`], [`Base64Error::InvalidSymbol`] or
/// [`Base64Error::TruncatedTail`] as described there.
///
/// # Example
///
/// ```
/// use buf_base64::decode;
///
/// let mut dest = [0u8; 6];
/// let n = decode(&mut dest, b"Zm9vYmFy").unwrap();
/// assert_eq!(&dest[..n], b"foobar");
/// ```
pub fn decode(dest: &mut [u8], src: &[u8]) -> Result<usize, Base64Error> {
    decode_using_alphabet(&STANDARD, dest, src)
}
