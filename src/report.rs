use crate::{base32::Variant, configuration::Mode, error::Error, hex};
use serde::Serialize;
use serde_json::json;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputEncoding {
    Utf8,
    Hex,
}

/// Summary of one run, written instead of the raw output when json output is requested.
#[derive(Debug, Serialize)]
pub struct Report {
    mode: Mode,
    variant: Variant,
    input_length: usize,
    output_length: usize,
    output: String,
    output_encoding: OutputEncoding,
}

impl Report {
    pub fn encoded(variant: Variant, input_length: usize, output: String) -> Self {
        Self {
            mode: Mode::Encode,
            variant,
            input_length,
            output_length: output.len(),
            output,
            output_encoding: OutputEncoding::Utf8,
        }
    }

    pub fn decoded(variant: Variant, input_length: usize, output: Vec<u8>) -> Self {
        let output_length = output.len();
        let (output, output_encoding) = match String::from_utf8(output) {
            Ok(output) => (output, OutputEncoding::Utf8),
            Err(error) => (hex::encode(error.as_bytes()), OutputEncoding::Hex),
        };
        Self {
            mode: Mode::Decode,
            variant,
            input_length,
            output_length,
            output,
            output_encoding,
        }
    }

    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string(self).map_err(|error| Error::new(format!("Could not serialize report: {}", error)))
    }
}

pub fn error_to_json(error: &Error) -> String {
    json!({ "error": error.message() }).to_string()
}
