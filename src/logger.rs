use crate::chronometer::Chronometer;
use std::fmt::Display;

/// Writes timestamped diagnostics to stderr, leaving stdout to the encoded or decoded data.
#[derive(Clone, Copy)]
pub struct Logger {
    chronometer: Chronometer,
    enabled: bool,
}

impl Logger {
    pub fn new(enabled: bool) -> Self {
        Self {
            chronometer: Chronometer::new(),
            enabled,
        }
    }

    pub fn line(&self, value: impl Display) -> String {
        format!("{} ({} elapsed)", value, self.chronometer.elapsed())
    }

    pub fn log(&self, value: impl Display) {
        if self.enabled {
            eprintln!("{}", self.line(value));
        }
    }
}
