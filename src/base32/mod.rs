//! RFC 4648 Base32 with the standard and extended-hex alphabets.

mod core;


pub use self::core::{Base32, Base32Variant, PAD};

/// Encode `data` with the given alphabet, padding to a multiple of 8 symbols
/// when `pad` is set.
pub fn encode(data: &[u8], variant: Base32Variant, pad: bool) -> String {
    Base32::new(variant).with_padding(pad).encode(data)
}

/// Decode `text` with the given alphabet. Bytes outside the alphabet are
/// skipped; see [`Base32::decode`].
pub fn decode(text: impl AsRef<[u8]>, variant: Base32Variant) -> Vec<u8> {
    Base32::new(variant).decode(text)
}
