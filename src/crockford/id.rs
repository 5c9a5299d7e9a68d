//! Fixed-width integer IDs in Crockford Base32, as used by ULID-style
//! identifiers: each symbol carries 5 bits, most significant first.

use crate::alphabet::CROCKFORD;
use crate::error::{Error, Result};

/// Most symbols [`parse_crockford`] accepts: 12 symbols carry 60 bits.
pub const MAX_SYMBOLS: usize = 12;

/// Parse a Crockford Base32 number. Aliases and lower case are accepted.
///
/// # Errors
///
/// Returns [`Error::TooLong`] for more than [`MAX_SYMBOLS`] characters and
/// [`Error::InvalidCharacter`] for anything outside the alphabet.
pub fn parse_crockford(input: &str) -> Result<u64> {
    let len = input.chars().count();
    if len > MAX_SYMBOLS {
        return Err(Error::TooLong {
            len,
            max: MAX_SYMBOLS,
        });
    }

    input
        .chars()
        .enumerate()
        .try_fold(0u64, |acc, (position, character)| {
            let value = u8::try_from(character)
                .ok()
                .and_then(|b| CROCKFORD.decode(b))
                .ok_or(Error::InvalidCharacter {
                    character,
                    position,
                })?;
            Ok((acc << 5) | u64::from(value))
        })
}

/// Append the low `count * 5` bits of `value` to `sink` as `count` symbols.
///
/// Symbols above bit 64 are written as `0`.
pub fn append_crockford(sink: &mut String, value: u64, count: usize) {
    sink.reserve(count);
    for i in (0..count).rev() {
        sink.push(char::from(symbol_at(value, i)));
    }
}

/// Render `value` as exactly `count` symbols.
#[must_use]
pub fn to_crockford(value: u64, count: usize) -> String {
    let mut s = String::with_capacity(count);
    append_crockford(&mut s, value, count);
    s
}

/// Write `count` symbols of `value` into `buffer` starting at `offset`.
///
/// # Panics
///
/// Panics if `buffer` is shorter than `offset + count`.
pub fn write_crockford(buffer: &mut [u8], value: u64, count: usize, offset: usize) {
    let out = &mut buffer[offset..offset + count];
    for (i, slot) in out.iter_mut().enumerate() {
        *slot = symbol_at(value, count - i - 1);
    }
}

/// Symbol for the 5-bit group `index` groups up from the least significant.
#[inline]
fn symbol_at(value: u64, index: usize) -> u8 {
    let group = u32::try_from(index * 5)
        .ok()
        .and_then(|shift| value.checked_shr(shift))
        .unwrap_or(0);
    CROCKFORD.encode((group & 0x1F) as u8)
}
