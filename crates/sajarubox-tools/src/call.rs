//! Tool call requests.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Parameters of a `tools/call` request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    /// Tool name.
    pub name: String,
    /// Raw arguments; absent means none.
    #[serde(default)]
    pub arguments: Value,
}
