//! SajaruBox common core types.
//!
//! Every crate in the workspace reports failures that eventually reach a
//! protocol client. [`Error`] carries the category and stable code used to
//! pick the wire error for those failures.

pub mod error;

pub use error::{Error, ErrorCategory, ErrorCode, Result};
