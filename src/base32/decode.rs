use super::{Alphabet, ALPHABET, BITS, HEX_ALPHABET};
pub use crate::base_binary::decode::Error;

pub struct Decoder<'a> {
    decoder: crate::base_binary::Decoder<'a, 32>,
}

impl<'a> Decoder<'a> {
    pub const fn new(alphabet: &'a Alphabet<32>) -> Self {
        Self {
            decoder: crate::base_binary::Decoder::new(alphabet, BITS),
        }
    }

    pub fn decode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        self.decoder.decode_into(input, output)
    }

    pub fn decode(&self, input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
        self.decoder.decode(input)
    }

    pub fn decode_to_string(&self, input: impl AsRef<[u8]>) -> Result<String, Error> {
        self.decoder.decode_to_string(input)
    }

    pub fn decoded_len(&self, input: impl AsRef<[u8]>) -> Result<usize, Error> {
        self.decoder.decoded_len(input)
    }

    pub fn validate(&self, input: impl AsRef<[u8]>) -> Result<(), Error> {
        self.decoder.validate(input)
    }

    pub fn default() -> &'static Self {
        &DECODER
    }

    pub fn hex() -> &'static Self {
        &HEX_DECODER
    }
}

const DECODER: Decoder = Decoder::new(&ALPHABET);
const HEX_DECODER: Decoder = Decoder::new(&HEX_ALPHABET);

pub fn decode_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    Decoder::default().decode_into(input, output)
}

pub fn decode(input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
    Decoder::default().decode(input)
}

pub fn decode_to_string(input: impl AsRef<[u8]>) -> Result<String, Error> {
    Decoder::default().decode_to_string(input)
}

pub fn decode_hex_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    Decoder::hex().decode_into(input, output)
}

pub fn decode_hex(input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
    Decoder::hex().decode(input)
}

pub fn decode_hex_to_string(input: impl AsRef<[u8]>) -> Result<String, Error> {
    Decoder::hex().decode_to_string(input)
}

#[cfg(test)]
mod tests {
    use super::Error;

    const VECTORS: [(&str, &str, &str); 7] = [
        ("", "", ""),
        ("f", "MY======", "CO======"),
        ("fo", "MZXQ====", "CPNG===="),
        ("foo", "MZXW6===", "CPNMU==="),
        ("foob", "MZXW6YQ=", "CPNMUOG="),
        ("fooba", "MZXW6YTB", "CPNMUOJ1"),
        ("foobar", "MZXW6YTBOI======", "CPNMUOJ1E8======"),
    ];

    const INVALID: [(&str, &str); 4] = [
        ("M=======", "C======="),
        ("MYZ=====", "COZ====="),
        ("MZXW6Z==", "CPNMUZ=="),
        ("MZXW6YTBO=======", "CPNMUOJ1E======="),
    ];

    #[test]
    fn decode() {
        for (expected, standard, hex) in VECTORS {
            assert_eq!(super::decode(standard), Ok(expected.as_bytes().to_vec()));
            assert_eq!(super::decode_hex(hex), Ok(expected.as_bytes().to_vec()));
        }
    }

    #[test]
    fn decode_to_string() {
        for (expected, standard, hex) in VECTORS {
            assert_eq!(super::decode_to_string(standard).as_deref(), Ok(expected));
            assert_eq!(super::decode_hex_to_string(hex).as_deref(), Ok(expected));
        }
        assert_eq!(super::decode_to_string("74======"), Err(Error::InvalidUtf8 { valid_up_to: 0 }));
        assert_eq!(super::decode_to_string("MZXW6===").ok(), Some("foo".to_string()));
    }

    #[test]
    fn decode_without_padding() {
        for (expected, standard, hex) in VECTORS {
            assert_eq!(super::decode(standard.replace('=', "")), Ok(expected.as_bytes().to_vec()));
            assert_eq!(super::decode_hex(hex.replace('=', "")), Ok(expected.as_bytes().to_vec()));
        }
    }

    #[test]
    fn decode_invalid_length() {
        for (standard, hex) in INVALID {
            assert!(super::decode(standard).is_err(), "{}", standard);
            assert!(super::decode_hex(hex).is_err(), "{}", hex);
            assert!(super::decode(standard.replace('=', "")).is_err(), "{}", standard);
            assert!(super::decode_hex(hex.replace('=', "")).is_err(), "{}", hex);
        }
        assert_eq!(super::decode("M======="), Err(Error::InvalidLength { length: 8 }));
        assert_eq!(super::decode("MYZ"), Err(Error::InvalidLength { length: 3 }));
        assert_eq!(super::decode("MZXW6YTBO"), Err(Error::InvalidLength { length: 9 }));
    }

    #[test]
    fn decode_invalid_padding() {
        assert_eq!(super::decode("MY=="), Err(Error::InvalidLength { length: 4 }));
        assert_eq!(super::decode("MY======="), Err(Error::InvalidLength { length: 9 }));
        assert_eq!(super::decode("========"), Err(Error::InvalidPadding { index: 0 }));
        assert_eq!(super::decode("MY======MY======"), Err(Error::InvalidPadding { index: 2 }));
        assert_eq!(super::decode("M=ZQ===="), Err(Error::InvalidPadding { index: 1 }));
    }

    #[test]
    fn decode_non_canonical_trailing_bits() {
        assert_eq!(super::decode("MY======"), Ok(b"f".to_vec()));
        assert_eq!(super::decode("MZ======"), Ok(b"f".to_vec()));
        assert_eq!(super::decode("MZ"), Ok(b"f".to_vec()));
        assert_eq!(super::decode_hex("CV======"), Ok(b"f".to_vec()));
        assert_eq!(super::decode_hex("CV"), Ok(b"f".to_vec()));
        assert_eq!(super::decode("MZXW6YTBMZ"), Ok(b"foobaf".to_vec()));
    }

    #[test]
    fn decode_invalid_character() {
        assert_eq!(super::decode("my======"), Err(Error::InvalidCharacter { character: 'm', index: 0 }));
        assert_eq!(super::decode("MZXW1==="), Err(Error::InvalidCharacter { character: '1', index: 4 }));
        assert_eq!(super::decode_hex("MZXW6==="), Err(Error::InvalidCharacter { character: 'Z', index: 1 }));
        assert_eq!(super::decode("MZ\u{e9}"), Err(Error::NonAsciiCharacter { character: 0xc3, index: 2 }));
    }

    #[test]
    fn decode_into() {
        let mut output = [0u8; 6];
        assert_eq!(super::decode_into("MZXW6YTBOI======", &mut output), Ok(6));
        assert_eq!(&output, b"foobar");
        assert_eq!(super::decode_hex_into("CPNMUOJ1", &mut output), Ok(5));
        assert_eq!(&output[..5], b"fooba");
        let mut output = [0u8; 5];
        assert_eq!(super::decode_into("MZXW6YTBOI", &mut output), Err(Error::BufferTooSmall));
    }

    #[test]
    fn decoded_len() {
        let decoder = super::Decoder::default();
        assert_eq!(decoder.decoded_len("MZXW6YTBOI======"), Ok(6));
        assert_eq!(decoder.decoded_len("MZXW6YQ"), Ok(4));
        assert_eq!(decoder.decoded_len(""), Ok(0));
        assert!(decoder.decoded_len("MZXW6Y").is_err());
        assert_eq!(decoder.validate("MZXW6YQ="), Ok(()));
        assert!(decoder.validate("MZXW6YQ!").is_err());
    }
}
