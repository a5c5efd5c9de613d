//! RFC 4648 Base32 and Base32-Hex encoding with a strict decoder.
//!
//! ```
//! assert_eq!(base32::encode32("foobar"), "MZXW6YTBOI======");
//! assert_eq!(base32::decode32("MZXW6YTBOI"), Ok(b"foobar".to_vec()));
//! assert!(base32::decode32("MZXW6Z==").is_err());
//! ```

pub mod base32;
pub mod base_binary;
pub mod base_common;
pub mod chronometer;
pub mod cli;
pub mod configuration;
pub mod error;
pub mod hex;
pub mod logger;
pub mod report;

pub use self::base32::{
    decode as decode32, decode_hex as decode32hex, decode_hex_to_string as decode32hex_to_string, decode_to_string as decode32_to_string,
    encode as encode32, encode_hex as encode32hex, Decoder, Encoder, Variant,
};
