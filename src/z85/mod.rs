//! ZeroMQ Z85 (RFC 32/Z85): 4 bytes to 5 printable symbols.
//!
//! Unlike the strict ZeroMQ definition, lengths that are not a multiple of
//! 4 bytes (or 5 symbols) are accepted: the final block is completed with
//! virtual padding that never appears in the output.

mod core;


pub use self::core::{decode, decoded_len, encode, encode_to_vec, encoded_len};
