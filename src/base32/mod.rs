//! RFC 4648 Base32 (section 6) and Base32 with extended hex alphabet (section 7).

pub mod decode;
pub mod encode;
pub use crate::base_common::Alphabet;

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

pub const BITS: usize = 5;

pub const ALPHABET: Alphabet<32> = match Alphabet::new(b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567") {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("Could not build alphabet"),
};

pub const HEX_ALPHABET: Alphabet<32> = match Alphabet::new(b"0123456789ABCDEFGHIJKLMNOPQRSTUV") {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("Could not build alphabet"),
};

pub use decode::{decode, decode_hex, decode_hex_into, decode_hex_to_string, decode_into, decode_to_string, Decoder};
pub use encode::{encode, encode_hex, encode_hex_into, encode_into, Encoder};

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum Variant {
    #[default]
    #[serde(rename = "base32")]
    Standard,
    #[serde(rename = "base32hex")]
    Hex,
}

impl Variant {
    pub fn alphabet(&self) -> &'static Alphabet<32> {
        match self {
            Self::Standard => &ALPHABET,
            Self::Hex => &HEX_ALPHABET,
        }
    }

    pub fn encoder(&self) -> &'static Encoder<'static> {
        match self {
            Self::Standard => Encoder::default(),
            Self::Hex => Encoder::hex(),
        }
    }

    pub fn decoder(&self) -> &'static Decoder<'static> {
        match self {
            Self::Standard => Decoder::default(),
            Self::Hex => Decoder::hex(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Standard => "base32",
            Self::Hex => "base32hex",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct UnknownVariant;

impl std::error::Error for UnknownVariant {}

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Unknown base32 variant")
    }
}

impl FromStr for Variant {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "base32" => Ok(Self::Standard),
            "base32hex" => Ok(Self::Hex),
            _ => Err(UnknownVariant),
        }
    }
}
