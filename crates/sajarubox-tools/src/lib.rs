//! SajaruBox tools and resource handlers.
//!
//! This crate provides the request handlers behind the knowledge server:
//!
//! - `get_context` - Read a topic (single file or bundle)
//! - `list_topics` - List topic keys
//! - `list_sprints` - List sprint files
//! - `get_sprint` - Read one sprint file
//! - `add_feature` - Add a pending feature to a sprint
//! - `list_knowledge` - List knowledge base files
//!
//! plus the resource listing and reading handlers.

#![warn(missing_docs)]

pub mod call;
pub mod context;
pub mod error;
pub mod resources;
pub mod tools;
pub mod traits;

// Re-exports
pub use call::ToolCall;
pub use context::ToolContext;
pub use error::{ToolError, ToolResult};
pub use resources::{list_resources, read_resource, ResourceContents, ResourceInfo};
pub use traits::{DynTool, Tool, ToolDefinition, ToolRegistry};

/// Directory holding the knowledge base.
pub const KNOWLEDGE_DIR: &str = "knowledge";

/// Directory holding sprint files.
pub const SPRINTS_DIR: &str = "sprints";
