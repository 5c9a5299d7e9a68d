//! Binary-to-text codecs: RFC 4648 Base32 (standard and extended-hex
//! alphabets), Crockford Base32 and ZeroMQ Z85.
//!
//! All codecs are pure in-memory transforms. [`base32`], [`z85`] and the
//! one-shot [`crockford`] functions are stateless and thread-safe;
//! [`crockford::CrockfordStream`] carries per-stream state and is driven
//! through `&mut self`. [`Codec`] picks one of them by name.
//!
//! ```
//! use basecodec_rs::base32::{self, Base32Variant};
//!
//! assert_eq!(base32::encode(b"foobar", Base32Variant::Standard, true), "MZXW6YTBOI======");
//! assert_eq!(basecodec_rs::crockford::parse_crockford("1V").unwrap(), 59);
//! ```

// Alphabets have a fixed, never-empty size.
#![allow(clippy::len_without_is_empty)]

pub mod alphabet;
pub mod base32;
pub mod codec;
pub mod crockford;
pub mod error;
pub mod z85;

pub use self::codec::Codec;
pub use self::error::{Error, Result};
