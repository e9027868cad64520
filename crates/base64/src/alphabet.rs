//! Bidirectional mapping between six-bit values and printable symbols.

use crate::constants::ALPHABET_RFC4648;
use crate::Base64Error;

/// Reserved `decode_map` entry for bytes outside the alphabet. No six-bit
/// value can reach it.
const NOT_A_MEMBER: u8 = 0xff;

/// An immutable base64 alphabet: 64 symbols indexed by six-bit value, plus
/// the derived 256-entry reverse lookup used for decoding.
///
/// Once constructed the table is read-only, so a single `Alphabet` may be
/// shared by any number of concurrent encode/decode calls.
///
/// # Example
///
/// ```
/// use buf_base64::{Alphabet, ALPHABET_URL_SAFE};
///
/// let url_safe = Alphabet::new(ALPHABET_URL_SAFE).unwrap();
/// assert_eq!(url_safe.to_symbol(62), b'-');
/// assert_eq!(url_safe.to_value(b'-'), Some(62));
/// assert!(!url_safe.contains(b'+'));
/// ```
#[derive(Clone)]
pub struct Alphabet {
    encode_map: [u8; 64],
    decode_map: [u8; 256],
}

impl std::fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Alphabet")
            .field("encode_map", &self.encode_map)
            .finish_non_exhaustive()
    }
}

impl Alphabet {
    /// Builds an alphabet from 64 symbols.
    ///
    /// # Errors
    ///
    /// Returns [`Base64Error::DuplicateSymbol`] if any symbol appears more
    /// than once; a repeated symbol would make the reverse lookup ambiguous.
    pub fn new(symbols: &[u8; 64]) -> Result<Self, Base64Error> {
        let table = Self::build(symbols);
        for (i, &symbol) in symbols.iter().enumerate() {
            // A duplicate leaves the earlier index unreachable in decode_map.
            if table.decode_map[symbol as usize] != i as u8 {
                return Err(Base64Error::DuplicateSymbol(symbol));
            }
        }
        Ok(table)
    }

    /// Populates both maps. Const so the standard table can be built at
    /// compile time; duplicate validation happens in [`Alphabet::new`].
    const fn build(symbols: &[u8; 64]) -> Self {
        let mut decode_map = [NOT_A_MEMBER; 256];
        let mut i = 0;
        while i < 64 {
            decode_map[symbols[i] as usize] = i as u8;
            i += 1;
        }
        Self {
            encode_map: *symbols,
            decode_map,
        }
    }

    /// Returns true if `symbol` can appear in an encoded string (the padding
    /// symbol is not a member).
    pub fn contains(&self, symbol: u8) -> bool {
        self.decode_map[symbol as usize] != NOT_A_MEMBER
    }

    /// Maps a symbol to its six-bit value, or `None` if the symbol is not a
    /// member of this alphabet.
    pub fn to_value(&self, symbol: u8) -> Option<u8> {
        match self.decode_map[symbol as usize] {
            NOT_A_MEMBER => None,
            value => Some(value),
        }
    }

    /// Maps a six-bit value to its symbol. The value is masked to six bits,
    /// so the lookup always succeeds.
    pub fn to_symbol(&self, value: u8) -> u8 {
        self.encode_map[(value & 0x3f) as usize]
    }
}

/// The RFC 4648 alphabet, built at compile time.
pub static STANDARD: Alphabet = Alphabet::build(ALPHABET_RFC4648);
