//! Knowledge base listing.

use async_trait::async_trait;
use sajarubox_fs::ListOptions;
use tracing::instrument;

use super::NoInput;
use crate::{context::ToolContext, error::ToolResult, traits::Tool, KNOWLEDGE_DIR};

/// Lists every markdown file under `knowledge/`, recursively.
pub struct ListKnowledge;

#[async_trait]
impl Tool for ListKnowledge {
    type Input = NoInput;

    fn name(&self) -> &'static str {
        "list_knowledge"
    }

    fn description(&self) -> &'static str {
        "Lista todos los archivos de documentacion disponibles en knowledge/"
    }

    #[instrument(skip_all, fields(op_id = %ctx.operation_id))]
    async fn execute(&self, ctx: &ToolContext, _input: NoInput) -> ToolResult<String> {
        let files = ctx
            .store
            .list_files(KNOWLEDGE_DIR, &ListOptions::new().recursive())?;
        let list: Vec<String> = files
            .iter()
            .map(|f| format!("- {KNOWLEDGE_DIR}/{f}"))
            .collect();
        Ok(format!("Archivos de documentacion:\n\n{}", list.join("\n")))
    }
}
