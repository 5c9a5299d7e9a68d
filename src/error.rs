use std::string::FromUtf8Error;

/// Errors returned by the fallible codec operations.
///
/// Base32 and Crockford stream decoding never fail: they skip symbols outside
/// their alphabet. Z85 decoding and fixed-width Crockford parsing are strict.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A symbol outside the alphabet was found.
    #[error("invalid character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },

    /// Fixed-width input exceeds the number of symbols that fit in a `u64`.
    #[error("input length must not exceed {max} but was {len}")]
    TooLong { len: usize, max: usize },

    /// The encoding name is not one of `base32`, `base32hex`, `crockford`, `z85`.
    #[error("unknown encoding '{0}'")]
    UnknownEncoding(String),

    /// Decoded bytes are not valid UTF-8.
    #[error(transparent)]
    Utf8(#[from] FromUtf8Error),
}

/// Shorthand for results carrying [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
