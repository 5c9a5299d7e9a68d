//! Douglas Crockford's Base32.
//!
//! Uses the alphabet `0123456789ABCDEFGHJKMNPQRSTVWXYZ` and reads the
//! commonly confused `O`, `I`, `L` and `U` as `0`, `1`, `1` and `V`. Decoding
//! is permissive: whitespace and unknown bytes are skipped, and the first pad
//! character ends the input.
//!
//! [`CrockfordStream`] is the incremental codec; [`CrockfordBase32`] and the
//! free [`encode`]/[`decode`] functions are one-shot wrappers over it.
//! [`parse_crockford`] and [`append_crockford`] handle fixed-width integer IDs.

mod core;
mod id;

#[cfg(test)]
mod tests;

pub use self::core::{CrockfordStream, PAD};
pub use self::id::{MAX_SYMBOLS, append_crockford, parse_crockford, to_crockford, write_crockford};

use crate::alphabet::CROCKFORD;
use crate::error::Result;

/// One-shot Crockford Base32 codec.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CrockfordBase32 {
    padding: bool,
}

impl CrockfordBase32 {
    /// `padding` pads the final encoded block to 8 symbols with `=`.
    pub const fn new(padding: bool) -> Self {
        Self { padding }
    }

    #[inline]
    pub const fn padding(&self) -> bool {
        self.padding
    }

    /// Upper bound on the encoded length of `n` bytes (the padded length).
    pub const fn encoded_len(&self, n: usize) -> usize {
        n.div_ceil(5) * 8
    }

    pub fn encode(&self, data: &[u8]) -> String {
        let mut stream = CrockfordStream::new(self.padding);
        stream.encode(data, true);
        // SAFETY: the encoder only emits alphabet symbols and `=`, all ASCII.
        unsafe { String::from_utf8_unchecked(stream.read_results()) }
    }

    /// Encode the UTF-8 bytes of `text`.
    pub fn encode_str(&self, text: &str) -> String {
        self.encode(text.as_bytes())
    }

    pub fn decode(&self, text: impl AsRef<[u8]>) -> Vec<u8> {
        let mut stream = CrockfordStream::new(self.padding);
        stream.decode(text.as_ref(), true);
        stream.read_results()
    }

    /// Decode and interpret the bytes as UTF-8.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Utf8`](crate::Error::Utf8) if the decoded bytes are
    /// not valid UTF-8.
    pub fn decode_to_string(&self, text: impl AsRef<[u8]>) -> Result<String> {
        Ok(String::from_utf8(self.decode(text))?)
    }
}

/// Encode `data` without padding.
pub fn encode(data: &[u8]) -> String {
    CrockfordBase32::default().encode(data)
}

/// Decode `text`, skipping bytes outside the alphabet.
pub fn decode(text: impl AsRef<[u8]>) -> Vec<u8> {
    CrockfordBase32::default().decode(text)
}

/// Whether `octet` is a Crockford symbol or alias.
#[inline]
pub fn is_in_alphabet(octet: u8) -> bool {
    CROCKFORD.contains(octet)
}

/// Whether every byte is in the alphabet; with `allow_ws_pad`, whitespace
/// and `=` are accepted too. Empty input is valid.
pub fn is_in_alphabet_bytes(bytes: &[u8], allow_ws_pad: bool) -> bool {
    bytes
        .iter()
        .all(|&b| is_in_alphabet(b) || (allow_ws_pad && (b == PAD || is_whitespace(b))))
}

/// Whether `text` holds only alphabet symbols, whitespace and `=`.
pub fn is_in_alphabet_str(text: &str) -> bool {
    is_in_alphabet_bytes(text.as_bytes(), true)
}

#[inline]
fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}
