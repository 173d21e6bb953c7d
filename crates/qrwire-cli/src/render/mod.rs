pub mod png;
pub mod terminal;

mod symbol;
pub use symbol::{Symbol, encode};
