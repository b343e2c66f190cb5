//! Common trait for all tools.

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, instrument};

use crate::{
    context::ToolContext,
    error::{ToolError, ToolResult},
    tools,
};

/// Common trait for all tools.
#[async_trait]
pub trait Tool: Send + Sync {
    /// The argument type for this tool.
    type Input: DeserializeOwned + Send;

    /// Get the tool name.
    fn name(&self) -> &'static str;

    /// Get the tool description.
    fn description(&self) -> &'static str;

    /// Run the tool, producing the text shown to the client.
    async fn execute(&self, ctx: &ToolContext, input: Self::Input) -> ToolResult<String>;

    /// Get the JSON schema for the arguments.
    fn input_schema(&self) -> Value {
        serde_json::json!({ "type": "object", "properties": {} })
    }
}

/// A boxed tool for dynamic dispatch.
#[async_trait]
pub trait DynTool: Send + Sync {
    /// Get the tool name.
    fn name(&self) -> &'static str;

    /// Execute with JSON arguments.
    async fn execute_json(&self, ctx: &ToolContext, arguments: Value) -> ToolResult<String>;

    /// Get the tool definition advertised to clients.
    fn definition(&self) -> ToolDefinition;
}

/// Tool definition as listed by `tools/list`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Tool name.
    pub name: String,
    /// Tool description.
    pub description: String,
    /// JSON Schema for the arguments.
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// Wrapper to make any Tool into a DynTool.
pub struct ToolWrapper<T> {
    inner: T,
}

impl<T> ToolWrapper<T> {
    /// Wrap a tool.
    pub fn new(tool: T) -> Self {
        Self { inner: tool }
    }
}

#[async_trait]
impl<T> DynTool for ToolWrapper<T>
where
    T: Tool,
    T::Input: 'static,
{
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    async fn execute_json(&self, ctx: &ToolContext, arguments: Value) -> ToolResult<String> {
        // Clients may omit `arguments` entirely.
        let arguments = if arguments.is_null() {
            Value::Object(Default::default())
        } else {
            arguments
        };

        let input: T::Input =
            serde_json::from_value(arguments).map_err(|e| ToolError::InvalidArguments {
                tool: self.inner.name().to_string(),
                reason: e.to_string(),
            })?;

        self.inner.execute(ctx, input).await
    }

    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: self.inner.name().to_string(),
            description: self.inner.description().to_string(),
            input_schema: self.inner.input_schema(),
        }
    }
}

/// Ordered set of tools, listed in registration order.
#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<Box<dyn DynTool>>,
}

impl ToolRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the six knowledge server tools.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(tools::GetContext);
        registry.register(tools::ListTopics);
        registry.register(tools::ListSprints);
        registry.register(tools::GetSprint);
        registry.register(tools::AddFeature);
        registry.register(tools::ListKnowledge);
        registry
    }

    /// Register a tool. A tool with the same name is replaced in place.
    pub fn register<T>(&mut self, tool: T)
    where
        T: Tool + 'static,
        T::Input: 'static,
    {
        let wrapped: Box<dyn DynTool> = Box::new(ToolWrapper::new(tool));
        match self.tools.iter().position(|t| t.name() == wrapped.name()) {
            Some(i) => self.tools[i] = wrapped,
            None => self.tools.push(wrapped),
        }
    }

    /// Get a tool by name.
    pub fn get(&self, name: &str) -> Option<&dyn DynTool> {
        self.tools.iter().find(|t| t.name() == name).map(|t| t.as_ref())
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Execute a tool by name.
    #[instrument(skip(self, ctx, arguments), fields(op_id = %ctx.operation_id))]
    pub async fn execute(&self, name: &str, ctx: &ToolContext, arguments: Value) -> ToolResult<String> {
        let tool = self.get(name).ok_or_else(|| ToolError::UnknownTool {
            name: name.to_string(),
        })?;

        let text = tool.execute_json(ctx, arguments).await?;
        debug!("tool produced {} bytes", text.len());
        Ok(text)
    }

    /// Definitions of every tool, in registration order.
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools.iter().map(|t| t.definition()).collect()
    }
}
