use serde::Serialize;
use std::collections::HashMap;

/// How a field's raw text is interpreted by the payload builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Free text, substituted as captured.
    Text,
    /// Wall-clock `YYYYMMDD HHMM`, normalized to UTC at build time.
    Date,
    /// A phone number. Substituted as typed; no format validation.
    Phone,
    /// One of a fixed set of options, shown when prompting.
    Choice { options: &'static [&'static str] },
}

/// Static description of one field of one scheme.
///
/// Field order in a scheme's table is collection order: collectors are
/// invoked once per spec, first to last.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FieldSpec {
    /// Stable key the builder reads values back by.
    pub key: &'static str,
    /// Human label used for prompting.
    pub label: &'static str,
    /// Required fields must be non-empty after trimming.
    pub required: bool,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn new(
        key: &'static str,
        label: &'static str,
        required: bool,
        kind: FieldKind,
    ) -> Self {
        Self {
            key,
            label,
            required,
            kind,
        }
    }
}

/// Raw field values captured for a single payload build.
///
/// Absent keys read as empty text, so a formatter never observes the
/// difference between "never collected" and "left blank".
#[derive(Debug, Clone, Default)]
pub struct FieldValues {
    values: HashMap<String, String>,
}

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let mut values = Self::new();
        for (key, value) in pairs {
            values.set(*key, *value);
        }
        values
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// The captured text for a key, empty if the key was never set.
    pub fn raw(&self, key: &str) -> &str {
        self.values.get(key).map(String::as_str).unwrap_or("")
    }

    /// The captured text with surrounding whitespace removed.
    pub fn trimmed(&self, key: &str) -> &str {
        self.raw(key).trim()
    }

    /// True when the key is unset, empty, or whitespace-only.
    pub fn is_blank(&self, key: &str) -> bool {
        self.trimmed(key).is_empty()
    }
}
