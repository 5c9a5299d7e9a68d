use std::array;

use crate::alphabet::{Alphabet, BASE32_HEX, BASE32_STANDARD};

/// Default RFC 4648 pad character.
pub const PAD: u8 = b'=';

/// Input bytes per full block.
const BYTES_PER_BLOCK: usize = 5;

/// Symbols per full block.
const SYMBOLS_PER_BLOCK: usize = 8;

/// Symbols needed for a tail of `n % 5` bytes, without padding.
const TAIL_SYMBOLS: [usize; BYTES_PER_BLOCK] = [0, 2, 4, 5, 7];

/// Which RFC 4648 alphabet a [`Base32`] engine uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Base32Variant {
    /// `A-Z2-7` (RFC 4648 section 6).
    #[default]
    Standard,
    /// `0-9A-V` (RFC 4648 section 7), sorts like the raw bytes.
    Hex,
}

impl Base32Variant {
    #[inline]
    pub const fn alphabet(self) -> &'static Alphabet<32> {
        match self {
            Base32Variant::Standard => &BASE32_STANDARD,
            Base32Variant::Hex => &BASE32_HEX,
        }
    }
}

/// Whole-buffer RFC 4648 Base32 encoder/decoder.
///
/// The alphabet variant, padding flag and pad character are fixed at
/// construction. Values are `Copy` and stateless, so one engine can be shared
/// freely between threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Base32 {
    variant: Base32Variant,
    padding: bool,
    pad: u8,
}

impl Default for Base32 {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl Base32 {
    /// Standard alphabet, padded with `=`.
    pub const STANDARD: Self = Self::new(Base32Variant::Standard);

    /// Extended-hex alphabet, padded with `=`.
    pub const HEX: Self = Self::new(Base32Variant::Hex);

    pub const fn new(variant: Base32Variant) -> Self {
        Self {
            variant,
            padding: true,
            pad: PAD,
        }
    }

    /// Enable or disable padding of the encoded output to a multiple of 8.
    ///
    /// Decoding always honours a pad character when one is present.
    #[must_use]
    pub const fn with_padding(mut self, padding: bool) -> Self {
        self.padding = padding;
        self
    }

    /// Use `pad` instead of `=`.
    ///
    /// # Panics
    ///
    /// Panics if `pad` is not printable ASCII or is a symbol the alphabet
    /// decodes.
    #[must_use]
    pub const fn with_pad_char(mut self, pad: u8) -> Self {
        assert!(pad.is_ascii_graphic(), "pad character must be printable ASCII");
        assert!(
            !self.variant.alphabet().contains(pad),
            "pad character must not be an alphabet symbol"
        );
        self.pad = pad;
        self
    }

    #[inline]
    pub const fn variant(&self) -> Base32Variant {
        self.variant
    }

    #[inline]
    pub const fn padding(&self) -> bool {
        self.padding
    }

    #[inline]
    pub const fn pad_char(&self) -> u8 {
        self.pad
    }

    /// Length of the encoded form of `n` bytes: `ceil(n * 8 / 5)`, rounded up
    /// to a multiple of 8 when padding is enabled.
    pub const fn encoded_len(&self, n: usize) -> usize {
        if self.padding {
            n.div_ceil(BYTES_PER_BLOCK) * SYMBOLS_PER_BLOCK
        } else {
            unpadded_len(n)
        }
    }

    /// Number of bytes [`decode`](Self::decode) returns for `text`.
    ///
    /// Counted from the first pad character when there is one, otherwise from
    /// the whole input. Stray characters are included in the count.
    pub fn decoded_len(&self, text: &[u8]) -> usize {
        let symbols = memchr::memchr(self.pad, text).unwrap_or(text.len());
        symbols / SYMBOLS_PER_BLOCK * BYTES_PER_BLOCK
            + symbols % SYMBOLS_PER_BLOCK * BYTES_PER_BLOCK / SYMBOLS_PER_BLOCK
    }

    /// Encode `data` into a string.
    pub fn encode(&self, data: &[u8]) -> String {
        // SAFETY: every alphabet symbol is ASCII and the pad character is
        // checked to be printable ASCII at construction.
        unsafe { String::from_utf8_unchecked(self.encode_to_vec(data)) }
    }

    /// Encode `data` into ASCII bytes.
    pub fn encode_to_vec(&self, data: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.encoded_len(data.len()));
        let alphabet = self.variant.alphabet();

        // Full 5-byte blocks: branch-free 40-bit split.
        let (blocks, tail) = data.as_chunks::<BYTES_PER_BLOCK>();
        for &block in blocks {
            out.extend_from_slice(&encode_block(alphabet, block));
        }

        encode_tail(alphabet, tail, &mut out);

        if self.padding {
            out.resize(self.encoded_len(data.len()), self.pad);
        }
        out
    }

    /// Decode `text`, skipping any byte outside the alphabet.
    ///
    /// Never fails: stray characters are ignored (garbage in, garbage out) and
    /// an incomplete trailing group is dropped. The result always has
    /// [`decoded_len`](Self::decoded_len) bytes; positions the valid symbols
    /// never reach are left zero.
    pub fn decode(&self, text: impl AsRef<[u8]>) -> Vec<u8> {
        let text = text.as_ref();
        let out_len = self.decoded_len(text);
        let mut bytes = vec![0u8; out_len];
        let alphabet = self.variant.alphabet();

        // Bits already filled in `bytes[offset]`.
        let mut index = 0usize;
        let mut offset = 0usize;
        let mut i = 0usize;

        while i < text.len() && offset < out_len {
            // Fast path: eight valid symbols starting on a byte boundary.
            if index == 0
                && offset + BYTES_PER_BLOCK <= out_len
                && i + SYMBOLS_PER_BLOCK <= text.len()
            {
                let vals: [u8; SYMBOLS_PER_BLOCK] =
                    array::from_fn(|k| alphabet.decode_raw(text[i + k]));
                if vals.iter().fold(0, |acc, &v| acc | v) <= 0x1F {
                    bytes[offset..offset + BYTES_PER_BLOCK]
                        .copy_from_slice(&decode_block(vals));
                    offset += BYTES_PER_BLOCK;
                    i += SYMBOLS_PER_BLOCK;
                    continue;
                }
            }

            let symbol = text[i];
            i += 1;
            let Some(digit) = alphabet.decode(symbol) else {
                continue;
            };

            if index <= 3 {
                index = (index + 5) % 8;
                if index == 0 {
                    bytes[offset] |= digit;
                    offset += 1;
                } else {
                    bytes[offset] |= digit << (8 - index);
                }
            } else {
                // The symbol straddles two output bytes.
                index = (index + 5) % 8;
                bytes[offset] |= digit >> index;
                offset += 1;
                if offset < out_len {
                    bytes[offset] |= digit << (8 - index);
                }
            }
        }

        bytes
    }
}

/// Symbols for `n` bytes without padding: `ceil(n * 8 / 5)`.
const fn unpadded_len(n: usize) -> usize {
    n / BYTES_PER_BLOCK * SYMBOLS_PER_BLOCK + TAIL_SYMBOLS[n % BYTES_PER_BLOCK]
}

/// Encode 5 bytes into 8 symbols.
#[inline(always)]
fn encode_block(alphabet: &Alphabet<32>, [b0, b1, b2, b3, b4]: [u8; 5]) -> [u8; 8] {
    [
        alphabet.encode(b0 >> 3),
        alphabet.encode(((b0 & 0x07) << 2) | (b1 >> 6)),
        alphabet.encode((b1 >> 1) & 0x1F),
        alphabet.encode(((b1 & 0x01) << 4) | (b2 >> 4)),
        alphabet.encode(((b2 & 0x0F) << 1) | (b3 >> 7)),
        alphabet.encode((b3 >> 2) & 0x1F),
        alphabet.encode(((b3 & 0x03) << 3) | (b4 >> 5)),
        alphabet.encode(b4 & 0x1F),
    ]
}

/// Decode 8 five-bit values into 5 bytes.
#[inline(always)]
fn decode_block([v0, v1, v2, v3, v4, v5, v6, v7]: [u8; 8]) -> [u8; 5] {
    [
        (v0 << 3) | (v1 >> 2),
        (v1 << 6) | (v2 << 1) | (v3 >> 4),
        (v3 << 4) | (v4 >> 1),
        (v4 << 7) | (v5 << 2) | (v6 >> 3),
        (v6 << 5) | v7,
    ]
}

/// Encode a partial block by walking it as a bitstream.
///
/// `index` is the bit offset into `tail[i]`. A group that starts past bit 3
/// spans into the next byte, which reads as zero past the end of the input.
fn encode_tail(alphabet: &Alphabet<32>, tail: &[u8], out: &mut Vec<u8>) {
    let mut i = 0usize;
    let mut index = 0u32;

    for _ in 0..unpadded_len(tail.len()) {
        let current = tail[i];
        let digit = if index > 3 {
            let next = tail.get(i + 1).copied().unwrap_or(0);
            let digit = ((current & (0xFF >> index)) << (index - 3)) | (next >> (11 - index));
            index = (index + 5) % 8;
            i += 1;
            digit
        } else {
            let digit = (current >> (3 - index)) & 0x1F;
            index = (index + 5) % 8;
            if index == 0 {
                i += 1;
            }
            digit
        };
        out.push(alphabet.encode(digit));
    }
}
