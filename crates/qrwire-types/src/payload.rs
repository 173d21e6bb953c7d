use serde::Serialize;
use std::fmt;

/// The final formatted text handed to the QR encoder.
///
/// A payload conforms to its scheme's micro-format grammar, terminators
/// and escapes included; it is a write-only artifact and is never parsed
/// back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Payload(String);

impl Payload {
    pub fn new(text: impl Into<String>) -> Self {
        Payload(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
