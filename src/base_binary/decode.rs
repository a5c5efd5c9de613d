use super::{Alphabet, Block};
use crate::base_common::{alphabet, PADDING};
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    BufferTooSmall,
    /// The number of data characters in the final block matches no whole number of bytes.
    InvalidLength { length: usize },
    /// A padding character outside the trailing run of the final block, or a run that fills a whole block.
    InvalidPadding { index: usize },
    NonAsciiCharacter { character: u8, index: usize },
    InvalidCharacter { character: char, index: usize },
    InvalidUtf8 { valid_up_to: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::BufferTooSmall => write!(f, "Output buffer too small"),
            Self::InvalidLength { length } => write!(f, "Invalid length {}", length),
            Self::InvalidPadding { index } => write!(f, "Invalid padding at index {}", index),
            Self::InvalidCharacter { character, index } => write!(f, "Invalid character '{}' at index {}", character, index),
            Self::NonAsciiCharacter { character, index } => write!(f, "Non-ascii character {:#02x} at index {}", character, index),
            Self::InvalidUtf8 { valid_up_to } => write!(f, "Decoded bytes are not valid utf-8 after byte {}", valid_up_to),
        }
    }
}

impl From<alphabet::DecodeError> for Error {
    fn from(error: alphabet::DecodeError) -> Self {
        match error {
            alphabet::DecodeError::InvalidCharacter { character, index } => Error::InvalidCharacter { character, index },
            alphabet::DecodeError::NonAsciiCharacter { character, index } => Error::NonAsciiCharacter { character, index },
        }
    }
}

/// Split of a validated input into its data characters and the number of bytes they carry.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct Layout {
    data: usize,
    bytes: usize,
}

pub struct Decoder<'a, const N: usize> {
    alphabet: &'a Alphabet<N>,
    bits: usize,
}

impl<'a, const N: usize> Decoder<'a, N> {
    pub const fn new(alphabet: &'a Alphabet<N>, bits: usize) -> Self {
        assert!(alphabet.len() == (1 << bits));
        Self { alphabet, bits }
    }

    pub const fn block(&self) -> Block {
        Block::new(self.bits)
    }

    // Trailing padding is optional, but when present it must complete the final block.
    fn layout(&self, input: &[u8]) -> Result<Layout, Error> {
        let block = self.block();
        let padding = input.iter().rev().take_while(|&&value| value == PADDING).count();
        let data = input.len() - padding;
        if padding > 0 {
            if padding >= block.characters() {
                return Err(Error::InvalidPadding { index: data });
            }
            if input.len() % block.characters() != 0 {
                return Err(Error::InvalidLength { length: input.len() });
            }
        }
        let tail = data % block.characters();
        let tail_bytes = block.bytes_for(tail).ok_or(Error::InvalidLength { length: input.len() })?;
        Ok(Layout {
            data,
            bytes: (data / block.characters()) * block.bytes() + tail_bytes,
        })
    }

    fn decode_with<E: From<Error>>(&self, input: &[u8], layout: Layout, mut emit: impl FnMut(u8) -> Result<(), E>) -> Result<(), E> {
        let mut accumulator: usize = 0;
        let mut bits: usize = 0;
        for (index, &value) in input[..layout.data].iter().enumerate() {
            if value == PADDING {
                return Err(Error::InvalidPadding { index }.into());
            }
            let symbol = self.alphabet.decode(value, index).map_err(Error::from)?;
            accumulator = (accumulator << self.bits) | (symbol as usize);
            bits += self.bits;
            while bits >= 8 {
                bits -= 8;
                emit((accumulator >> bits) as u8)?;
                accumulator &= (1 << bits) - 1;
            }
        }
        // Whatever is left in the accumulator is filler from the final block.
        Ok(())
    }

    /// Number of bytes `input` decodes to, checking only its length and padding.
    pub fn decoded_len(&self, input: impl AsRef<[u8]>) -> Result<usize, Error> {
        Ok(self.layout(input.as_ref())?.bytes)
    }

    pub fn decode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let input = input.as_ref();
        let output = output.as_mut();
        let layout = self.layout(input)?;
        if output.len() < layout.bytes {
            return Err(Error::BufferTooSmall);
        }
        let mut index = 0;
        self.decode_with(input, layout, |value| {
            output[index] = value;
            index += 1;
            Ok::<(), Error>(())
        })?;
        Ok(index)
    }

    pub fn decode(&self, input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
        let input = input.as_ref();
        let layout = self.layout(input)?;
        let mut output = Vec::with_capacity(layout.bytes);
        self.decode_with(input, layout, |value| {
            output.push(value);
            Ok::<(), Error>(())
        })?;
        Ok(output)
    }

    pub fn decode_to_string(&self, input: impl AsRef<[u8]>) -> Result<String, Error> {
        String::from_utf8(self.decode(input)?).map_err(|error| Error::InvalidUtf8 {
            valid_up_to: error.utf8_error().valid_up_to(),
        })
    }

    /// Whether `input` is a well-formed encoding, without producing any output.
    pub fn validate(&self, input: impl AsRef<[u8]>) -> Result<(), Error> {
        let input = input.as_ref();
        let layout = self.layout(input)?;
        self.decode_with(input, layout, |_| Ok::<(), Error>(()))
    }
}
