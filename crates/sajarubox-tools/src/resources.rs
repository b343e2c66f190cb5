//! Resource listing and reading.

use sajarubox_catalog::MARKDOWN_MIME_TYPE;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{context::ToolContext, error::ToolResult};

/// A resource as listed by `resources/list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceInfo {
    /// Resource URI.
    pub uri: String,
    /// Display name.
    pub name: String,
    /// Short description.
    pub description: String,
    /// Always `text/markdown`.
    pub mime_type: String,
}

/// Contents returned by `resources/read`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceContents {
    /// Requested URI.
    pub uri: String,
    /// Always `text/markdown`.
    pub mime_type: String,
    /// File content.
    pub text: String,
}

/// Every catalog resource, in declaration order.
pub fn list_resources(ctx: &ToolContext) -> Vec<ResourceInfo> {
    ctx.catalog
        .resources()
        .iter()
        .map(|r| ResourceInfo {
            uri: r.uri.clone(),
            name: r.name.clone(),
            description: r.description.clone(),
            mime_type: MARKDOWN_MIME_TYPE.to_string(),
        })
        .collect()
}

/// Read the file behind a resource URI.
#[instrument(skip(ctx), fields(op_id = %ctx.operation_id))]
pub fn read_resource(ctx: &ToolContext, uri: &str) -> ToolResult<ResourceContents> {
    let text = ctx.catalog.read_resource(&ctx.store, uri)?;
    Ok(ResourceContents {
        uri: uri.to_string(),
        mime_type: MARKDOWN_MIME_TYPE.to_string(),
        text,
    })
}
