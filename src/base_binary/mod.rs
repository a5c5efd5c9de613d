pub mod decode;
pub mod encode;

pub use crate::base_common::Alphabet;
pub use decode::Decoder;
pub use encode::Encoder;

const fn div_ceil(lhs: usize, rhs: usize) -> usize {
    (lhs + rhs - 1) / rhs
}

/// Smallest run of whole bytes that maps onto a whole number of symbols, e.g. 5 bytes / 8 characters for 5-bit symbols.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Block {
    bits: usize,
    bytes: usize,
    characters: usize,
}

impl Block {
    pub const fn new(bits: usize) -> Self {
        let mut bytes = 1;
        while (bytes * 8) % bits != 0 {
            bytes += 1;
        }
        Self {
            bits,
            bytes,
            characters: bytes * 8 / bits,
        }
    }

    pub const fn bytes(&self) -> usize {
        self.bytes
    }

    pub const fn characters(&self) -> usize {
        self.characters
    }

    /// Data characters needed for the first `bytes` bytes of a block.
    pub const fn characters_for(&self, bytes: usize) -> usize {
        div_ceil(bytes * 8, self.bits)
    }

    /// Bytes carried by `characters` data characters at the end of an encoding, if that count can occur at all.
    pub const fn bytes_for(&self, characters: usize) -> Option<usize> {
        let bytes = characters * self.bits / 8;
        if self.characters_for(bytes) == characters {
            Some(bytes)
        } else {
            None
        }
    }

    /// Total encoded length, padding included, of `len` bytes.
    pub const fn encoded_len(&self, len: usize) -> usize {
        div_ceil(len, self.bytes) * self.characters
    }
}
