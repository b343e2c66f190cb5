//! Subcommand implementations.

mod check;
mod serve;
mod topics;

pub use check::check;
pub use serve::serve;
pub use topics::topics;
