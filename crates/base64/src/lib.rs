//! Buffer-to-buffer base64 encoding and decoding.
//!
//! This crate transcodes between raw bytes and the base64 alphabet without
//! allocating: the caller owns and sizes both buffers, and the codec reports
//! exactly how many bytes it wrote. It supports:
//! - The standard RFC 4648 alphabet with `=` padding
//! - Caller-supplied 64-symbol alphabets (e.g. the URL-safe variant)
//! - Exact destination-capacity checks before any write happens
//!
//! # Example
//!
//! ```
//! use buf_base64::{encode, decode, encoded_length};
//!
//! let src = b"hello world";
//! let mut encoded = vec![0u8; encoded_length(src.len())];
//! let n = encode(&mut encoded, src).unwrap();
//! assert_eq!(&encoded[..n], b"aGVsbG8gd29ybGQ=");
//!
//! let mut decoded = vec![0u8; 100];
//! let n = decode(&mut decoded, &encoded).unwrap();
//! assert_eq!(&decoded[..n], src);
//! ```

mod alphabet;
mod constants;
mod decode;
mod encode;
mod tail;
mod triplet;

pub use alphabet::{Alphabet, STANDARD};
pub use constants::{ALPHABET_RFC4648, ALPHABET_URL_SAFE, PAD};
pub use decode::{decode, decode_using_alphabet, decoded_length_upper_bound};
pub use encode::{encode, encode_using_alphabet, encoded_length};
pub use tail::{decode_tail, encode_tail};
pub use triplet::{decode_quartet, encode_triplet};

/// Error type for base64 operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Base64Error {
    /// The destination buffer is smaller than the computed bound.
    #[error("destination buffer too small: need {needed} bytes, have {available}")]
    Overflow {
        /// Required destination capacity for this input.
        needed: usize,
        /// Capacity the caller actually supplied.
        available: usize,
    },
    /// A decode input byte is not a member of the alphabet.
    #[error("byte {0:#04x} is not part of the alphabet")]
    InvalidSymbol(u8),
    /// The final group contains exactly one symbol after padding removal;
    /// a single base64 symbol cannot encode a partial byte.
    #[error("truncated final group: one leftover base64 symbol")]
    TruncatedTail,
    /// An alphabet was constructed with a repeated symbol.
    #[error("alphabet contains duplicate symbol {0:#04x}")]
    DuplicateSymbol(u8),
}
