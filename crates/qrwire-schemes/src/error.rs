use std::fmt;

/// Result type for qrwire-schemes operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while resolving a scheme or building a payload
///
/// A build either yields a complete, grammar-valid payload or one of these;
/// there is no partial output. Every variant carries enough detail (field
/// key, offending raw text) for the caller to render an actionable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Requested scheme name is not in the registry
    UnknownScheme(String),

    /// A required field was empty or absent after trimming
    MissingField { field: &'static str },

    /// A calendar date could not be parsed as `YYYYMMDD HHMM` local time
    MalformedDate {
        field: &'static str,
        value: String,
    },

    /// A map coordinate did not parse as a finite number
    InvalidCoordinate {
        field: &'static str,
        value: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownScheme(name) => write!(f, "unknown scheme: {}", name),
            Error::MissingField { field } => write!(f, "missing required field: {}", field),
            Error::MalformedDate { field, value } => write!(
                f,
                "malformed {} date: {:?} (expected YYYYMMDD HHMM)",
                field, value
            ),
            Error::InvalidCoordinate { field, value } => {
                write!(f, "invalid {} coordinate: {:?}", field, value)
            }
        }
    }
}

impl std::error::Error for Error {}
