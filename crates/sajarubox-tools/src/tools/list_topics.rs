//! Topic listing.

use async_trait::async_trait;

use super::NoInput;
use crate::{context::ToolContext, error::ToolResult, traits::Tool};

/// Lists every topic key accepted by `get_context`.
pub struct ListTopics;

#[async_trait]
impl Tool for ListTopics {
    type Input = NoInput;

    fn name(&self) -> &'static str {
        "list_topics"
    }

    fn description(&self) -> &'static str {
        "Lista todos los topics disponibles para get_context"
    }

    async fn execute(&self, ctx: &ToolContext, _input: NoInput) -> ToolResult<String> {
        let lines: Vec<String> = ctx.catalog.topics().iter().map(|t| t.listing_line()).collect();
        Ok(format!("Topics disponibles para get_context:\n\n{}", lines.join("\n")))
    }
}
