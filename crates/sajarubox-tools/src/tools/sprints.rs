//! Sprint backlog tools.

use async_trait::async_trait;
use sajarubox_backlog::{insert_candidate, FeatureItem, Placement, DEFAULT_SPRINT, PLATFORMS};
use sajarubox_fs::{path::escapes_root, ListOptions};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, info, instrument, warn};

use super::NoInput;
use crate::{context::ToolContext, error::ToolResult, traits::Tool, SPRINTS_DIR};

/// Root-relative path of a sprint file.
///
/// The name is joined as given; one that leaves `sprints/` is only logged.
fn sprint_path(filename: &str) -> String {
    if escapes_root(filename) {
        warn!(filename, "sprint name leaves the sprints directory");
    }
    format!("{SPRINTS_DIR}/{filename}")
}

/// Lists the sprint files directly inside `sprints/`.
pub struct ListSprints;

#[async_trait]
impl Tool for ListSprints {
    type Input = NoInput;

    fn name(&self) -> &'static str {
        "list_sprints"
    }

    fn description(&self) -> &'static str {
        "Lista todos los sprints disponibles"
    }

    async fn execute(&self, ctx: &ToolContext, _input: NoInput) -> ToolResult<String> {
        let files = ctx.store.list_files(SPRINTS_DIR, &ListOptions::new())?;
        let list: Vec<String> = files.iter().map(|f| format!("- {f}")).collect();
        Ok(format!("Sprints disponibles:\n{}", list.join("\n")))
    }
}

/// Arguments for `get_sprint`.
#[derive(Debug, Deserialize)]
pub struct GetSprintInput {
    /// File name inside `sprints/`.
    pub filename: String,
}

/// Returns one sprint file verbatim.
pub struct GetSprint;

#[async_trait]
impl Tool for GetSprint {
    type Input = GetSprintInput;

    fn name(&self) -> &'static str {
        "get_sprint"
    }

    fn description(&self) -> &'static str {
        "Obtiene el contenido de un sprint especifico"
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "filename": {
                    "type": "string",
                    "description": "Nombre del archivo, ej: sprint-01.md"
                }
            },
            "required": ["filename"]
        })
    }

    #[instrument(skip(self, ctx), fields(op_id = %ctx.operation_id))]
    async fn execute(&self, ctx: &ToolContext, input: GetSprintInput) -> ToolResult<String> {
        Ok(ctx.store.read(&sprint_path(&input.filename))?)
    }
}

/// Arguments for `add_feature`.
#[derive(Debug, Deserialize)]
pub struct AddFeatureInput {
    /// Feature title.
    pub title: String,
    /// Target platform; not checked against [`PLATFORMS`].
    pub platform: String,
    /// Sprint file name, [`DEFAULT_SPRINT`] when absent or null.
    #[serde(default)]
    pub sprint: Option<String>,
}

/// Adds a pending feature to a sprint's candidates section.
pub struct AddFeature;

#[async_trait]
impl Tool for AddFeature {
    type Input = AddFeatureInput;

    fn name(&self) -> &'static str {
        "add_feature"
    }

    fn description(&self) -> &'static str {
        "Agrega un feature al sprint actual como item pendiente"
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "title": { "type": "string", "description": "Titulo del feature" },
                "platform": {
                    "type": "string",
                    "enum": PLATFORMS,
                    "description": "Plataforma objetivo"
                },
                "sprint": {
                    "type": "string",
                    "description": "Nombre del sprint, ej: sprint-02.md",
                    "default": DEFAULT_SPRINT
                }
            },
            "required": ["title", "platform"]
        })
    }

    #[instrument(skip(self, ctx), fields(op_id = %ctx.operation_id))]
    async fn execute(&self, ctx: &ToolContext, input: AddFeatureInput) -> ToolResult<String> {
        let sprint = input.sprint.as_deref().unwrap_or(DEFAULT_SPRINT);
        let path = sprint_path(sprint);

        // The sprint must already exist.
        let content = ctx.store.read(&path)?;

        let item = FeatureItem::new(input.platform.as_str(), input.title.as_str());
        let insertion = insert_candidate(&content, &item.to_string());
        match insertion.placement {
            Placement::Section { line } => debug!(line, "inserted into candidates"),
            Placement::EndOfFile => debug!("no candidates section, appended"),
        }

        ctx.store.write(&path, &insertion.text)?;
        info!(sprint, platform = %input.platform, "feature added");

        Ok(format!(
            "Feature agregado: \"{}\" ({}) en {}",
            input.title, input.platform, sprint
        ))
    }
}
