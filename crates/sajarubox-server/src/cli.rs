//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};
use sajarubox_common_log::LogLevel;

/// SajaruBox knowledge server
///
/// Serves the SajaruBox documentation and sprint backlog to MCP clients
/// over stdio.
#[derive(Debug, Parser)]
#[command(name = "sajarubox-mcp", author, version, about, long_about = None, propagate_version = true)]
pub struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Documentation root holding knowledge/ and sprints/
    #[arg(long, global = true, env = "SAJARUBOX_ROOT", value_hint = ValueHint::DirPath)]
    pub root: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "SAJARUBOX_CONFIG", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Serve the protocol on stdin/stdout (default)
    Serve,

    /// Print the topics accepted by get_context
    Topics,

    /// Verify that every catalog file exists under the root
    Check,
}

impl Cli {
    /// Subcommand to run, `serve` when none is given.
    pub fn selected_command(&self) -> Command {
        self.command.unwrap_or(Command::Serve)
    }

    /// Level forced by `-q`/`-v` flags, if any.
    pub fn level_override(&self) -> Option<LogLevel> {
        match self.verbose {
            0 if self.quiet => Some(LogLevel::Error),
            0 => None,
            1 => Some(LogLevel::Info),
            2 => Some(LogLevel::Debug),
            _ => Some(LogLevel::Trace),
        }
    }
}
