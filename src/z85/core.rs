use tracing::debug;

use crate::alphabet::{INVALID, Z85};
use crate::error::{Error, Result};

const BYTES_PER_BLOCK: usize = 4;
const SYMBOLS_PER_BLOCK: usize = 5;
const BASE: u64 = 85;

/// Length of the encoded form of `n` bytes.
///
/// Full blocks take 5 symbols per 4 bytes; a final partial block of `k` bytes
/// takes `k + 1` symbols.
pub const fn encoded_len(n: usize) -> usize {
    let padding = (BYTES_PER_BLOCK - n % BYTES_PER_BLOCK) % BYTES_PER_BLOCK;
    (n + padding) / BYTES_PER_BLOCK * SYMBOLS_PER_BLOCK - padding
}

/// Length of the decoded form of `n` symbols. Inverse of [`encoded_len`] for
/// every length it produces.
pub const fn decoded_len(n: usize) -> usize {
    let padding = (SYMBOLS_PER_BLOCK - n % SYMBOLS_PER_BLOCK) % SYMBOLS_PER_BLOCK;
    (n + padding) / SYMBOLS_PER_BLOCK * BYTES_PER_BLOCK - padding
}

/// Encode `data` as Z85 text.
///
/// Input that is not a multiple of 4 bytes is completed with virtual zero
/// bytes, and the matching number of trailing symbols is left out of the last
/// block.
pub fn encode(data: &[u8]) -> String {
    // SAFETY: every Z85 symbol is ASCII.
    unsafe { String::from_utf8_unchecked(encode_to_vec(data)) }
}

/// Encode `data` into ASCII bytes.
pub fn encode_to_vec(data: &[u8]) -> Vec<u8> {
    let mut result = Vec::with_capacity(encoded_len(data.len()));

    let (blocks, tail) = data.as_chunks::<BYTES_PER_BLOCK>();
    for &block in blocks {
        result.extend_from_slice(&encode_block(block));
    }

    if !tail.is_empty() {
        let mut block = [0u8; BYTES_PER_BLOCK];
        block[..tail.len()].copy_from_slice(tail);
        let chars = encode_block(block);
        result.extend_from_slice(&chars[..=tail.len()]);
    }

    result
}

/// Decode Z85 text.
///
/// Text that is not a multiple of 5 symbols is completed with the highest
/// symbol (`#`), and the matching number of trailing bytes is dropped.
///
/// # Errors
///
/// Returns [`Error::InvalidCharacter`] for any byte outside the alphabet,
/// including whitespace.
pub fn decode(text: impl AsRef<[u8]>) -> Result<Vec<u8>> {
    let text = text.as_ref();
    let mut result = Vec::with_capacity(decoded_len(text.len()));

    let (blocks, tail) = text.as_chunks::<SYMBOLS_PER_BLOCK>();
    for (n, block) in blocks.iter().enumerate() {
        result.extend_from_slice(&decode_block(block, n * SYMBOLS_PER_BLOCK)?);
    }

    if !tail.is_empty() {
        let mut block = [Z85.last(); SYMBOLS_PER_BLOCK];
        block[..tail.len()].copy_from_slice(tail);
        let bytes = decode_block(&block, blocks.len() * SYMBOLS_PER_BLOCK)?;
        // a single trailing symbol carries no full byte
        result.extend_from_slice(&bytes[..tail.len() - 1]);
    }

    Ok(result)
}

/// Encode one big-endian 4-byte block into 5 symbols, most significant first.
#[inline]
fn encode_block(block: [u8; BYTES_PER_BLOCK]) -> [u8; SYMBOLS_PER_BLOCK] {
    let mut value = u64::from(u32::from_be_bytes(block));
    let mut chars = [0u8; SYMBOLS_PER_BLOCK];
    for c in chars.iter_mut().rev() {
        *c = Z85.encode((value % BASE) as u8);
        value /= BASE;
    }
    chars
}

/// Decode 5 symbols into a big-endian 4-byte block. `offset` is the position
/// of the block in the input, used for error reporting.
///
/// Values past `u32::MAX` keep only their low 32 bits.
#[inline]
fn decode_block(
    block: &[u8; SYMBOLS_PER_BLOCK],
    offset: usize,
) -> Result<[u8; BYTES_PER_BLOCK]> {
    let mut value = 0u64;
    for (i, &symbol) in block.iter().enumerate() {
        let digit = Z85.decode_raw(symbol);
        if digit == INVALID {
            let position = offset + i;
            debug!(position, symbol, "invalid z85 symbol");
            return Err(Error::InvalidCharacter {
                character: char::from(symbol),
                position,
            });
        }
        value = value * BASE + u64::from(digit);
    }
    Ok((value as u32).to_be_bytes())
}
