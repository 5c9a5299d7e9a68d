//! Engine selection: one value that picks an encoding at construction and
//! forwards every call to it.

use std::fmt;
use std::str::FromStr;

use crate::base32::{Base32, Base32Variant};
use crate::crockford::CrockfordBase32;
use crate::error::{Error, Result};
use crate::z85;


/// A configured binary-to-text encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Codec {
    /// RFC 4648 Base32, standard or extended-hex alphabet.
    Base32(Base32),
    /// Crockford Base32.
    Crockford(CrockfordBase32),
    /// ZeroMQ Z85.
    Z85,
}

impl Codec {
    pub const BASE32: Self = Codec::Base32(Base32::STANDARD);
    pub const BASE32_HEX: Self = Codec::Base32(Base32::HEX);
    pub const CROCKFORD: Self = Codec::Crockford(CrockfordBase32::new(false));

    /// Name accepted by [`FromStr`], matching the `basenc` option names.
    pub fn name(&self) -> &'static str {
        match self {
            Codec::Base32(engine) => match engine.variant() {
                Base32Variant::Standard => "base32",
                Base32Variant::Hex => "base32hex",
            },
            Codec::Crockford(_) => "crockford",
            Codec::Z85 => "z85",
        }
    }

    pub fn encode(&self, data: &[u8]) -> String {
        match self {
            Codec::Base32(engine) => engine.encode(data),
            Codec::Crockford(codec) => codec.encode(data),
            Codec::Z85 => z85::encode(data),
        }
    }

    /// Encode the UTF-8 bytes of `text`.
    pub fn encode_str(&self, text: &str) -> String {
        self.encode(text.as_bytes())
    }

    /// Decode `text`.
    ///
    /// # Errors
    ///
    /// Only Z85 can fail, with [`Error::InvalidCharacter`]; the Base32
    /// variants skip bytes outside their alphabet.
    pub fn decode(&self, text: impl AsRef<[u8]>) -> Result<Vec<u8>> {
        match self {
            Codec::Base32(engine) => Ok(engine.decode(text)),
            Codec::Crockford(codec) => Ok(codec.decode(text)),
            Codec::Z85 => z85::decode(text),
        }
    }

    /// Decode `text` and interpret the bytes as UTF-8.
    ///
    /// # Errors
    ///
    /// Returns the [`decode`](Self::decode) error, or [`Error::Utf8`].
    pub fn decode_to_string(&self, text: impl AsRef<[u8]>) -> Result<String> {
        Ok(String::from_utf8(self.decode(text)?)?)
    }
}

impl Default for Codec {
    fn default() -> Self {
        Self::BASE32
    }
}

impl From<Base32> for Codec {
    fn from(engine: Base32) -> Self {
        Codec::Base32(engine)
    }
}

impl From<CrockfordBase32> for Codec {
    fn from(codec: CrockfordBase32) -> Self {
        Codec::Crockford(codec)
    }
}

/// Writes the encoding [`name`](Codec::name) only. Padding and a custom pad
/// character are not part of it, so parsing the output back yields the
/// default configuration for that name.
impl fmt::Display for Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses `base32`, `base32hex`, `crockford` or `z85`, ignoring ASCII case
/// and an optional leading `--`. Each name maps to its default
/// configuration: padded Base32 and unpadded Crockford.
impl FromStr for Codec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.strip_prefix("--").unwrap_or(s);
        if name.eq_ignore_ascii_case("base32") {
            Ok(Self::BASE32)
        } else if name.eq_ignore_ascii_case("base32hex") {
            Ok(Self::BASE32_HEX)
        } else if name.eq_ignore_ascii_case("crockford") {
            Ok(Self::CROCKFORD)
        } else if name.eq_ignore_ascii_case("z85") {
            Ok(Codec::Z85)
        } else {
            Err(Error::UnknownEncoding(s.to_owned()))
        }
    }
}
