//! Testing infrastructure for qrwire integration tests.
//!
//! This crate provides utilities for writing robust integration tests:
//! - `CannedCollector`: a `FieldCollector` answering from a fixed table
//! - `fixtures`: canned field sets and stdin scripts per scheme
//! - `cli`: configured `assert_cmd` commands for the qrwire binary

pub mod cli;
pub mod collector;
pub mod fixtures;

pub use cli::qrwire_command;
pub use collector::CannedCollector;
