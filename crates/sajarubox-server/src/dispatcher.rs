//! Method routing.

use sajarubox_common_core::ErrorCategory;
use sajarubox_tools::{list_resources, read_resource, ToolCall, ToolContext, ToolError, ToolRegistry};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, info, instrument, warn};

use crate::protocol::{
    codes, CallToolResult, InitializeResult, ListResourcesResult, ListToolsResult,
    ReadResourceParams, ReadResourceResult, Request, Response, RpcError, ServerInfo,
    DEFAULT_PROTOCOL_VERSION, JSONRPC_VERSION,
};

type HandlerResult = Result<Value, RpcError>;

/// Routes protocol methods to the tools and resource handlers.
pub struct Dispatcher {
    registry: ToolRegistry,
    context: ToolContext,
    server: ServerInfo,
}

impl Dispatcher {
    /// Create a dispatcher with the default tools.
    pub fn new(context: ToolContext, server: ServerInfo) -> Self {
        Self {
            registry: ToolRegistry::with_defaults(),
            context,
            server,
        }
    }

    /// The tool registry.
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Handle one raw line. Returns `None` for notifications.
    pub async fn handle_line(&self, line: &str) -> Option<Response> {
        let value: Value = match serde_json::from_str(line) {
            Ok(v) => v,
            Err(e) => return Some(parse_error(e)),
        };

        let id = value.get("id").cloned().unwrap_or(Value::Null);
        let request: Request = match serde_json::from_value(value) {
            Ok(r) => r,
            Err(e) => {
                warn!("invalid request: {}", e);
                return Some(Response::failure(
                    id,
                    RpcError::new(codes::INVALID_REQUEST, format!("Invalid request: {e}")),
                ));
            }
        };

        if request.jsonrpc != JSONRPC_VERSION {
            return Some(Response::failure(
                id,
                RpcError::new(
                    codes::INVALID_REQUEST,
                    format!("Invalid request: unsupported jsonrpc version {:?}", request.jsonrpc),
                ),
            ));
        }

        self.handle(request).await
    }

    /// Handle a parsed request. Returns `None` for notifications.
    #[instrument(skip(self, request), fields(method = %request.method))]
    pub async fn handle(&self, request: Request) -> Option<Response> {
        let result = self.route(&request).await;

        if request.is_notification() {
            if let Err(e) = result {
                warn!(code = e.code, "notification failed: {}", e.message);
            }
            return None;
        }

        let id = request.id.unwrap_or(Value::Null);
        Some(match result {
            Ok(value) => Response::success(id, value),
            Err(error) => {
                debug!(code = error.code, "request failed: {}", error.message);
                Response::failure(id, error)
            }
        })
    }

    async fn route(&self, request: &Request) -> HandlerResult {
        let params = &request.params;
        match request.method.as_str() {
            "initialize" => self.initialize(params),
            "ping" => Ok(json!({})),
            "resources/list" => to_value(ListResourcesResult {
                resources: list_resources(&self.context),
            }),
            "resources/read" => self.read_resource(params),
            "tools/list" => to_value(ListToolsResult {
                tools: self.registry.definitions(),
            }),
            "tools/call" => self.call_tool(params).await,
            method if method.starts_with("notifications/") => {
                debug!("notification {}", method);
                Ok(Value::Null)
            }
            method => Err(RpcError::new(
                codes::METHOD_NOT_FOUND,
                format!("Method not found: {method}"),
            )),
        }
    }

    fn initialize(&self, params: &Value) -> HandlerResult {
        let protocol_version = params
            .get("protocolVersion")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_PROTOCOL_VERSION);

        if let Some(client) = params.get("clientInfo").and_then(|c| c.get("name")).and_then(Value::as_str) {
            info!(client, protocol_version, "client connected");
        }

        to_value(InitializeResult {
            protocol_version: protocol_version.to_string(),
            capabilities: json!({ "resources": {}, "tools": {} }),
            server_info: self.server.clone(),
        })
    }

    fn read_resource(&self, params: &Value) -> HandlerResult {
        let params: ReadResourceParams = parse_params(params)?;
        let ctx = self.context.next_operation();
        let contents = read_resource(&ctx, &params.uri).map_err(tool_error)?;
        to_value(ReadResourceResult {
            contents: vec![contents],
        })
    }

    async fn call_tool(&self, params: &Value) -> HandlerResult {
        let call: ToolCall = parse_params(params)?;
        let ctx = self.context.next_operation();
        debug!(tool = %call.name, op_id = %ctx.operation_id, "tool call");

        let text = self
            .registry
            .execute(&call.name, &ctx, call.arguments)
            .await
            .map_err(tool_error)?;
        to_value(CallToolResult::text(text))
    }
}

/// Response to a message that could not be decoded; its id is unknown.
pub(crate) fn parse_error(err: impl std::fmt::Display) -> Response {
    warn!("unparseable message: {}", err);
    Response::failure(Value::Null, RpcError::new(codes::PARSE_ERROR, format!("Parse error: {err}")))
}

fn parse_params<T: DeserializeOwned>(params: &Value) -> Result<T, RpcError> {
    T::deserialize(params).map_err(|e| RpcError::new(codes::INVALID_PARAMS, format!("Invalid params: {e}")))
}

fn to_value<T: Serialize>(result: T) -> HandlerResult {
    serde_json::to_value(result).map_err(|e| RpcError::new(codes::INTERNAL_ERROR, e.to_string()))
}

/// Bad arguments are the caller's fault; every other failure is reported
/// as a handler error carrying the tool's message.
fn tool_error(err: ToolError) -> RpcError {
    let code = match err.category() {
        ErrorCategory::InvalidInput => codes::INVALID_PARAMS,
        _ => codes::INTERNAL_ERROR,
    };
    RpcError::new(code, err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;
    use test_case::test_case;

    fn dispatcher(root: &std::path::Path) -> Dispatcher {
        Dispatcher::new(
            ToolContext::new(root),
            ServerInfo {
                name: "sajarubox-mcp".into(),
                version: "1.17.0".into(),
            },
        )
    }

    async fn call(d: &Dispatcher, message: Value) -> Response {
        d.handle_line(&message.to_string()).await.unwrap()
    }

    #[test_case(json!({ "protocolVersion": "2025-03-26" }), "2025-03-26" ; "echoes client version")]
    #[test_case(json!({}), "2024-11-05" ; "defaults without version")]
    #[tokio::test]
    async fn test_initialize(params: Value, expected: &str) {
        let d = dispatcher(std::path::Path::new("/nonexistent"));
        let response = call(&d, json!({ "jsonrpc": "2.0", "id": 1, "method": "initialize", "params": params })).await;
        let result = response.result.unwrap();
        assert_eq!(result["protocolVersion"], expected);
        assert_eq!(result["serverInfo"], json!({ "name": "sajarubox-mcp", "version": "1.17.0" }));
        assert!(result["capabilities"]["tools"].is_object());
        assert!(result["capabilities"]["resources"].is_object());
    }

    #[tokio::test]
    async fn test_notification_gets_no_response() {
        let d = dispatcher(std::path::Path::new("/nonexistent"));
        let messages = [
            json!({ "jsonrpc": "2.0", "method": "notifications/initialized" }),
            json!({ "jsonrpc": "2.0", "id": null, "method": "notifications/cancelled" }),
            json!({ "jsonrpc": "2.0", "method": "prompts/list" }),
        ];
        for message in messages {
            assert!(d.handle_line(&message.to_string()).await.is_none(), "{message}");
        }
    }

    #[tokio::test]
    async fn test_unknown_method() {
        let d = dispatcher(std::path::Path::new("/nonexistent"));
        let response = call(&d, json!({ "jsonrpc": "2.0", "id": "a", "method": "prompts/list" })).await;
        assert_eq!(response.id, json!("a"));
        assert_eq!(response.error.unwrap().code, codes::METHOD_NOT_FOUND);
    }

    #[test_case("{not json", codes::PARSE_ERROR ; "malformed json")]
    #[test_case(r#"{"jsonrpc":"2.0","id":4}"#, codes::INVALID_REQUEST ; "missing method")]
    #[test_case(r#"{"jsonrpc":"1.0","id":4,"method":"ping"}"#, codes::INVALID_REQUEST ; "wrong version")]
    #[tokio::test]
    async fn test_rejected_messages(line: &str, code: i64) {
        let d = dispatcher(std::path::Path::new("/nonexistent"));
        let response = d.handle_line(line).await.unwrap();
        assert_eq!(response.error.unwrap().code, code);
    }

    #[tokio::test]
    async fn test_tool_failure_is_internal_error() {
        let dir = tempdir().unwrap();
        let d = dispatcher(dir.path());
        let response = call(
            &d,
            json!({ "jsonrpc": "2.0", "id": 2, "method": "tools/call",
                    "params": { "name": "get_sprint", "arguments": { "filename": "sprint-01.md" } } }),
        )
        .await;
        let error = response.error.unwrap();
        assert_eq!(error.code, codes::INTERNAL_ERROR);
        assert_eq!(error.message, "Archivo no encontrado: sprints/sprint-01.md");
    }

    #[tokio::test]
    async fn test_missing_tool_argument_is_invalid_params() {
        let d = dispatcher(std::path::Path::new("/nonexistent"));
        let response = call(
            &d,
            json!({ "jsonrpc": "2.0", "id": 3, "method": "tools/call", "params": { "name": "get_context" } }),
        )
        .await;
        assert_eq!(response.error.unwrap().code, codes::INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_unknown_tool_message() {
        let d = dispatcher(std::path::Path::new("/nonexistent"));
        let response = call(
            &d,
            json!({ "jsonrpc": "2.0", "id": 3, "method": "tools/call", "params": { "name": "nope" } }),
        )
        .await;
        assert_eq!(response.error.unwrap().message, "Tool desconocido: nope");
    }

    #[tokio::test]
    async fn test_read_resource() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("knowledge")).unwrap();
        fs::write(dir.path().join("knowledge/business-rules.md"), "# Reglas").unwrap();
        let d = dispatcher(dir.path());

        let response = call(
            &d,
            json!({ "jsonrpc": "2.0", "id": 5, "method": "resources/read", "params": { "uri": "sajarubox://rules" } }),
        )
        .await;
        assert_eq!(
            response.result.unwrap(),
            json!({ "contents": [{ "uri": "sajarubox://rules", "mimeType": "text/markdown", "text": "# Reglas" }] })
        );
    }

    #[tokio::test]
    async fn test_read_resource_requires_uri() {
        let d = dispatcher(std::path::Path::new("/nonexistent"));
        let response = call(&d, json!({ "jsonrpc": "2.0", "id": 6, "method": "resources/read" })).await;
        assert_eq!(response.error.unwrap().code, codes::INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_catalog_override_keeps_tool_descriptions() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("custom.md"), "# Custom").unwrap();
        let catalog = sajarubox_catalog::Catalog::from_yaml("topics:\n  - key: custom\n    path: custom.md\n").unwrap();
        let server = ServerInfo {
            name: "sajarubox-mcp".into(),
            version: "1.17.0".into(),
        };
        let custom = Dispatcher::new(ToolContext::with_catalog(dir.path(), catalog), server);
        let builtin = dispatcher(dir.path());

        let list = json!({ "jsonrpc": "2.0", "id": 1, "method": "tools/list" });
        let custom_tools = call(&custom, list.clone()).await.result.unwrap();
        let builtin_tools = call(&builtin, list).await.result.unwrap();
        assert_eq!(custom_tools, builtin_tools);

        let response = call(
            &custom,
            json!({ "jsonrpc": "2.0", "id": 2, "method": "tools/call",
                    "params": { "name": "get_context", "arguments": { "topic": "custom" } } }),
        )
        .await;
        assert_eq!(response.result.unwrap()["content"][0]["text"], "# Custom");
    }
}
