//! Configuration for SajaruBox.
//!
//! This crate provides the configuration types read from
//! `<root>/.sajarubox/config.yaml` (or an explicit file) and the `.env`
//! loading done before command-line parsing.

pub mod env;
pub mod loader;
pub mod types;

pub use env::*;
pub use loader::*;
pub use types::*;
