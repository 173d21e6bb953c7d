mod args;
mod commands;
mod handlers;
mod prompt;
pub mod render;
pub mod types;

pub use args::Cli;
pub use commands::run;
