// Error types
pub mod error;

// Field collection boundary (public API)
pub mod collector;

// Scheme catalogue
pub mod registry;

// Payload assembly
pub mod builder;

// Micro-format modules
pub mod uri;
pub mod vcard;
pub mod vevent;
pub mod wifi;

// Shared formatting helpers
pub mod datetime;
pub mod escape;

// Builder
pub use builder::build;

// Collection
pub use collector::{FieldCollector, gather_fields};

// Registry
pub use registry::Scheme;

// Error types
pub use error::{Error, Result};
