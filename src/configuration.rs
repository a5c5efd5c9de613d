use crate::{base32::Variant, error::Error};
use serde::Serialize;
use std::{env, error, str::FromStr};

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Encode,
    Decode,
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "encode" => Ok(Self::Encode),
            "decode" => Ok(Self::Decode),
            _ => Err(Error::new(format!("Unknown mode {}", value))),
        }
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Format {
    #[default]
    Text,
    Json,
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(Error::new(format!("Unknown format {}", value))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Configuration {
    mode: Mode,
    variant: Variant,
    format: Format,
    verbose: bool,
}

fn var(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: Option<String>) -> Result<String, String> {
    match lookup(key) {
        Some(value) => Ok(value),
        None => default.ok_or(format!("Missing {}", key)),
    }
}

fn var_map<T, E: error::Error>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    mut f: impl FnMut(&str) -> Result<T, E>,
    default: Option<T>,
) -> Result<T, String> {
    match var(lookup, key, None) {
        Ok(value) => f(&value).map_err(|_| format!("Invalid {} {}", key, value)),
        Err(err) => default.ok_or(err),
    }
}

impl Configuration {
    pub fn new() -> Result<Self, Error> {
        Self::from_lookup(env::args().skip(1), |key| env::var(key).ok())
    }

    /// Resolves the mode from the first positional argument and everything else from `lookup`.
    pub fn from_lookup(args: impl IntoIterator<Item = String>, lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let mut args = args.into_iter();
        let mode = match args.next() {
            Some(mode) => mode.parse()?,
            None => Mode::default(),
        };
        if let Some(argument) = args.next() {
            return Err(Error::new(format!("Unexpected argument {}", argument)));
        }
        let variant = var_map(&lookup, "BASE32_VARIANT", |variant| variant.parse(), Some(Variant::default())).map_err(Error::new)?;
        let format = var_map(&lookup, "BASE32_FORMAT", |format| format.parse(), Some(Format::default())).map_err(Error::new)?;
        let verbose = var_map(&lookup, "BASE32_VERBOSE", |verbose| verbose.parse(), Some(false)).map_err(Error::new)?;
        Ok(Self {
            mode,
            variant,
            format,
            verbose,
        })
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn format(&self) -> Format {
        self.format
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}
