pub mod field;
pub mod hints;
pub mod payload;

pub use field::{FieldKind, FieldSpec, FieldValues};
pub use hints::{EcLevel, RenderHints};
pub use payload::Payload;
