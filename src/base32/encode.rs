use super::{Alphabet, ALPHABET, BITS, HEX_ALPHABET};
pub use crate::base_binary::encode::Error;

pub struct Encoder<'a> {
    encoder: crate::base_binary::Encoder<'a, 32>,
}

impl<'a> Encoder<'a> {
    pub const fn new(alphabet: &'a Alphabet<32>) -> Self {
        Self {
            encoder: crate::base_binary::Encoder::new(alphabet, BITS),
        }
    }

    pub fn encode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        self.encoder.encode_into(input, output)
    }

    pub fn encode(&self, input: impl AsRef<[u8]>) -> String {
        self.encoder.encode(input)
    }

    pub const fn encoded_len(&self, len: usize) -> usize {
        self.encoder.encoded_len(len)
    }

    pub fn default() -> &'static Self {
        &ENCODER
    }

    pub fn hex() -> &'static Self {
        &HEX_ENCODER
    }
}

const ENCODER: Encoder = Encoder::new(&ALPHABET);
const HEX_ENCODER: Encoder = Encoder::new(&HEX_ALPHABET);

pub fn encode_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    Encoder::default().encode_into(input, output)
}

pub fn encode(input: impl AsRef<[u8]>) -> String {
    Encoder::default().encode(input)
}

pub fn encode_hex_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    Encoder::hex().encode_into(input, output)
}

pub fn encode_hex(input: impl AsRef<[u8]>) -> String {
    Encoder::hex().encode(input)
}
