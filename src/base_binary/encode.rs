use super::{Alphabet, Block};
use crate::base_common::PADDING;
use std::{convert::Infallible, error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    BufferTooSmall,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::BufferTooSmall => write!(f, "Output buffer too small"),
        }
    }
}

pub struct Encoder<'a, const N: usize> {
    alphabet: &'a Alphabet<N>,
    bits: usize,
}

impl<'a, const N: usize> Encoder<'a, N> {
    pub const fn new(alphabet: &'a Alphabet<N>, bits: usize) -> Self {
        assert!(alphabet.len() == (1 << bits));
        Self { alphabet, bits }
    }

    pub const fn block(&self) -> Block {
        Block::new(self.bits)
    }

    pub const fn encoded_len(&self, len: usize) -> usize {
        self.block().encoded_len(len)
    }

    fn encode_with<E>(&self, input: &[u8], mut emit: impl FnMut(u8) -> Result<(), E>) -> Result<(), E> {
        let mut accumulator: usize = 0;
        let mut bits: usize = 0;
        let mut count = 0;
        for &value in input {
            accumulator = (accumulator << 8) | (value as usize);
            bits += 8;
            while bits >= self.bits {
                bits -= self.bits;
                emit(self.alphabet.encode(accumulator >> bits))?;
                count += 1;
                accumulator &= (1 << bits) - 1;
            }
        }
        if bits > 0 {
            emit(self.alphabet.encode(accumulator << (self.bits - bits)))?;
            count += 1;
        }
        while count % self.block().characters() != 0 {
            emit(PADDING)?;
            count += 1;
        }
        Ok(())
    }

    pub fn encode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let output = output.as_mut();
        let mut index = 0;
        self.encode_with(input.as_ref(), |character| {
            *output.get_mut(index).ok_or(Error::BufferTooSmall)? = character;
            index += 1;
            Ok(())
        })?;
        Ok(index)
    }

    pub fn encode(&self, input: impl AsRef<[u8]>) -> String {
        let input = input.as_ref();
        let mut output = Vec::with_capacity(self.encoded_len(input.len()));
        let result: Result<(), Infallible> = self.encode_with(input, |character| {
            output.push(character);
            Ok(())
        });
        match result {
            Ok(()) => {}
            Err(never) => match never {},
        }
        // SAFETY: alphabets only hold ascii characters and the padding character is ascii.
        unsafe { String::from_utf8_unchecked(output) }
    }
}
