use crate::{
    configuration::{Configuration, Format, Mode},
    error::Error,
    logger::Logger,
    report::Report,
};

fn strip_newline(input: &[u8]) -> &[u8] {
    input.strip_suffix(b"\r\n").or_else(|| input.strip_suffix(b"\n")).unwrap_or(input)
}

/// Transforms the whole of `input` as configured and returns the bytes to write to stdout.
pub fn run(configuration: &Configuration, logger: &Logger, input: &[u8]) -> Result<Vec<u8>, Error> {
    let variant = configuration.variant();
    match configuration.mode() {
        Mode::Encode => {
            let output = variant.encoder().encode(input);
            logger.log(format!("Encoded {} bytes into {} {} characters", input.len(), output.len(), variant));
            match configuration.format() {
                Format::Text => Ok(format!("{}\n", output).into_bytes()),
                Format::Json => Ok(format!("{}\n", Report::encoded(variant, input.len(), output).to_json()?).into_bytes()),
            }
        }
        Mode::Decode => {
            let text = strip_newline(input);
            let output = variant.decoder().decode(text)?;
            logger.log(format!("Decoded {} {} characters into {} bytes", text.len(), variant, output.len()));
            match configuration.format() {
                Format::Text => Ok(output),
                Format::Json => Ok(format!("{}\n", Report::decoded(variant, text.len(), output).to_json()?).into_bytes()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::run;
    use crate::{configuration::Configuration, logger::Logger};
    use std::collections::HashMap;

    fn configuration(args: &[&str], vars: &[(&str, &str)]) -> Configuration {
        let vars: HashMap<&str, &str> = vars.iter().copied().collect();
        Configuration::from_lookup(args.iter().map(|arg| arg.to_string()), |key| vars.get(key).map(|value| value.to_string())).unwrap()
    }

    #[test]
    fn encode() {
        let logger = Logger::new(false);
        assert_eq!(run(&configuration(&["encode"], &[]), &logger, b"foobar").unwrap(), b"MZXW6YTBOI======\n");
        let hex = configuration(&[], &[("BASE32_VARIANT", "base32hex")]);
        assert_eq!(run(&hex, &logger, b"foobar").unwrap(), b"CPNMUOJ1E8======\n");
        assert_eq!(run(&hex, &logger, b"").unwrap(), b"\n");
    }

    #[test]
    fn decode() {
        let logger = Logger::new(false);
        let decode = configuration(&["decode"], &[]);
        assert_eq!(run(&decode, &logger, b"MZXW6YTBOI======\n").unwrap(), b"foobar");
        assert_eq!(run(&decode, &logger, b"MZXW6YTBOI\r\n").unwrap(), b"foobar");
        assert_eq!(run(&decode, &logger, b"MZXW6===").unwrap(), b"foo");
        assert_eq!(run(&decode, &logger, b"").unwrap(), b"");
    }

    #[test]
    fn decode_invalid() {
        let logger = Logger::new(false);
        let decode = configuration(&["decode"], &[]);
        assert_eq!(run(&decode, &logger, b"MZXW6Z==").unwrap_err().message(), "Invalid length 8");
        assert_eq!(run(&decode, &logger, b"MZXW6YQ\n\n").unwrap_err().message(), "Invalid character '\n' at index 7");
    }

    #[test]
    fn json() {
        let logger = Logger::new(false);
        let decode = configuration(&["decode"], &[("BASE32_FORMAT", "json")]);
        let output = String::from_utf8(run(&decode, &logger, b"MZXW6===").unwrap()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["mode"], "decode");
        assert_eq!(value["output"], "foo");
        assert_eq!(value["input_length"], 8);
    }
}
