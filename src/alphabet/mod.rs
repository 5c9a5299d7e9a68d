//! Symbol tables shared by the codecs.
//!
//! Every alphabet pairs an encode table (value -> symbol) with a full 256-entry
//! decode table (symbol -> value) so that lookups are branch-free and never
//! index out of bounds. Bytes with no value map to [`INVALID`].

use std::fmt;


/// Decode-table entry for a byte that is not part of the alphabet.
pub const INVALID: u8 = 0xFF;

/// An ordered set of `N` printable ASCII symbols and its reverse lookup.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Alphabet<const N: usize> {
    encode: [u8; N],
    decode: [u8; 256],
}

impl<const N: usize> Alphabet<N> {
    /// Build the encode and decode tables from `symbols`.
    ///
    /// Panics (at compile time for `const`/`static` items) if `symbols` does
    /// not hold exactly `N` entries or repeats a symbol.
    pub const fn new(symbols: &[u8]) -> Self {
        assert!(symbols.len() == N, "alphabet length does not match table size");
        assert!(N <= INVALID as usize, "alphabet too large for a byte-sized table");

        let mut encode = [0u8; N];
        let mut decode = [INVALID; 256];
        let mut i = 0;
        while i < N {
            let symbol = symbols[i];
            assert!(decode[symbol as usize] == INVALID, "duplicate alphabet symbol");
            encode[i] = symbol;
            decode[symbol as usize] = i as u8;
            i += 1;
        }
        Self { encode, decode }
    }

    /// Also accept the lower-case form of every upper-case letter when decoding.
    pub const fn case_insensitive(mut self) -> Self {
        let mut i = 0;
        while i < N {
            let symbol = self.encode[i];
            if symbol.is_ascii_uppercase() {
                self.decode[symbol.to_ascii_lowercase() as usize] = i as u8;
            }
            i += 1;
        }
        self
    }

    /// Decode `alias` to the same value as the canonical symbol `target`.
    ///
    /// Aliases only affect decoding; the encode table stays alias-free.
    pub const fn with_alias(mut self, alias: u8, target: u8) -> Self {
        let value = self.decode[target as usize];
        assert!(value != INVALID, "alias target is not in the alphabet");
        self.decode[alias as usize] = value;
        self
    }

    /// Symbol for a value in `0..N`.
    #[inline]
    pub const fn encode(&self, value: u8) -> u8 {
        self.encode[value as usize]
    }

    /// Value of `symbol`, or `None` when it is not in the alphabet.
    #[inline]
    pub const fn decode(&self, symbol: u8) -> Option<u8> {
        match self.decode[symbol as usize] {
            INVALID => None,
            value => Some(value),
        }
    }

    /// Raw decode-table entry: the value of `symbol`, or [`INVALID`].
    #[inline]
    pub const fn decode_raw(&self, symbol: u8) -> u8 {
        self.decode[symbol as usize]
    }

    #[inline]
    pub const fn contains(&self, symbol: u8) -> bool {
        self.decode[symbol as usize] != INVALID
    }

    /// The canonical symbols in value order.
    #[inline]
    pub const fn symbols(&self) -> &[u8; N] {
        &self.encode
    }

    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// Symbol with the highest value.
    #[inline]
    pub const fn last(&self) -> u8 {
        self.encode[N - 1]
    }
}

impl<const N: usize> fmt::Debug for Alphabet<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Alphabet")
            .field(&String::from_utf8_lossy(&self.encode))
            .finish()
    }
}

/// RFC 4648 section 6 alphabet.
pub static BASE32_STANDARD: Alphabet<32> =
    Alphabet::new(b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567").case_insensitive();

/// RFC 4648 section 7 "extended hex" alphabet; preserves sort order.
pub static BASE32_HEX: Alphabet<32> =
    Alphabet::new(b"0123456789ABCDEFGHIJKLMNOPQRSTUV").case_insensitive();

/// Douglas Crockford's alphabet. `I`, `L`, `O` and `U` are left out of the
/// encode table and read back as `1`, `1`, `0` and `V`.
pub static CROCKFORD: Alphabet<32> = Alphabet::new(b"0123456789ABCDEFGHJKMNPQRSTVWXYZ")
    .case_insensitive()
    .with_alias(b'O', b'0')
    .with_alias(b'o', b'0')
    .with_alias(b'I', b'1')
    .with_alias(b'i', b'1')
    .with_alias(b'L', b'1')
    .with_alias(b'l', b'1')
    .with_alias(b'U', b'V')
    .with_alias(b'u', b'V');

/// ZeroMQ Z85 alphabet (RFC 32/Z85). Case-sensitive: both cases are symbols.
pub static Z85: Alphabet<85> = Alphabet::new(
    b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ.-:+=^!/*?&<>()[]{}@%$#",
);
