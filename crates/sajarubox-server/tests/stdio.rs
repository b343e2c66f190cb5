use sajarubox_server::{serve, Dispatcher, ServeStats, ServerInfo};
use sajarubox_tools::ToolContext;
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn dispatcher(root: &Path) -> Dispatcher {
    Dispatcher::new(
        ToolContext::new(root),
        ServerInfo {
            name: "sajarubox-mcp".into(),
            version: "1.17.0".into(),
        },
    )
}

async fn run_session(root: &Path, messages: &[Value]) -> (ServeStats, Vec<Value>) {
    let mut input = String::new();
    for message in messages {
        input.push_str(&message.to_string());
        input.push('\n');
    }

    let d = dispatcher(root);
    let mut output = Vec::new();
    let stats = serve(&d, input.as_bytes(), &mut output).await.unwrap();

    let responses = String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    (stats, responses)
}

#[tokio::test]
async fn handshake_and_listing() {
    let dir = tempdir().unwrap();
    let (stats, responses) = run_session(
        dir.path(),
        &[
            json!({ "jsonrpc": "2.0", "id": 0, "method": "initialize",
                    "params": { "protocolVersion": "2024-11-05", "clientInfo": { "name": "test", "version": "1" } } }),
            json!({ "jsonrpc": "2.0", "method": "notifications/initialized" }),
            json!({ "jsonrpc": "2.0", "id": 1, "method": "tools/list" }),
            json!({ "jsonrpc": "2.0", "id": 2, "method": "resources/list" }),
        ],
    )
    .await;

    assert_eq!(stats, ServeStats { received: 4, responded: 3 });
    assert_eq!(responses[0]["result"]["serverInfo"]["name"], "sajarubox-mcp");

    let tools = responses[1]["result"]["tools"].as_array().unwrap();
    let names: Vec<&str> = tools.iter().map(|t| t["name"].as_str().unwrap()).collect();
    assert_eq!(
        names,
        ["get_context", "list_topics", "list_sprints", "get_sprint", "add_feature", "list_knowledge"]
    );
    assert_eq!(tools[0]["inputSchema"]["required"], json!(["topic"]));

    let resources = responses[2]["result"]["resources"].as_array().unwrap();
    assert_eq!(resources.len(), 28);
    assert!(resources.iter().all(|r| r["mimeType"] == "text/markdown"));
}

#[tokio::test]
async fn loop_survives_failures() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("knowledge")).unwrap();
    fs::write(dir.path().join("knowledge/schema.md"), "# Schema\n").unwrap();

    let (stats, responses) = run_session(
        dir.path(),
        &[
            json!({ "jsonrpc": "2.0", "id": 1, "method": "tools/call",
                    "params": { "name": "get_context", "arguments": { "topic": "all-business" } } }),
            json!({ "jsonrpc": "2.0", "id": 2, "method": "sampling/createMessage" }),
            json!({ "jsonrpc": "2.0", "id": 3, "method": "tools/call",
                    "params": { "name": "get_context", "arguments": { "topic": "schema" } } }),
        ],
    )
    .await;

    assert_eq!(stats.responded, 3);
    assert_eq!(responses[0]["id"], 1);
    assert_eq!(responses[0]["error"]["code"], -32603);
    assert!(responses[0]["error"]["message"]
        .as_str()
        .unwrap()
        .starts_with("Archivo no encontrado: "));
    assert_eq!(responses[1]["error"]["code"], -32601);
    assert_eq!(
        responses[2]["result"],
        json!({ "content": [{ "type": "text", "text": "# Schema\n" }] })
    );
}

#[tokio::test]
async fn garbage_and_blank_lines() {
    let dir = tempdir().unwrap();
    let d = dispatcher(dir.path());
    let input = "\n{oops\n   \n{\"jsonrpc\":\"2.0\",\"id\":9,\"method\":\"ping\"}\n";
    let mut output = Vec::new();

    let stats = serve(&d, input.as_bytes(), &mut output).await.unwrap();
    let text = String::from_utf8(output).unwrap();
    let lines: Vec<Value> = text.lines().map(|l| serde_json::from_str(l).unwrap()).collect();

    assert_eq!(stats, ServeStats { received: 2, responded: 2 });
    assert_eq!(lines[0]["error"]["code"], -32700);
    assert_eq!(lines[0]["id"], Value::Null);
    assert_eq!(lines[1], json!({ "jsonrpc": "2.0", "id": 9, "result": {} }));
}

#[tokio::test]
async fn add_feature_round_trip_over_stdio() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("sprints")).unwrap();
    fs::write(dir.path().join("sprints/sprint-01.md"), "# Sprint 01\n\n## Candidatos\n").unwrap();

    let (_, responses) = run_session(
        dir.path(),
        &[
            json!({ "jsonrpc": "2.0", "id": 1, "method": "tools/call",
                    "params": { "name": "add_feature", "arguments": { "title": "Reservas", "platform": "Web" } } }),
            json!({ "jsonrpc": "2.0", "id": 2, "method": "tools/call",
                    "params": { "name": "get_sprint", "arguments": { "filename": "sprint-01.md" } } }),
        ],
    )
    .await;

    assert_eq!(
        responses[0]["result"]["content"][0]["text"],
        "Feature agregado: \"Reservas\" (Web) en sprint-01.md"
    );
    assert_eq!(
        responses[1]["result"]["content"][0]["text"],
        "# Sprint 01\n\n## Candidatos\n- [ ] Web: Reservas\n"
    );
}

#[tokio::test]
async fn invalid_utf8_line_does_not_stop_the_loop() {
    let dir = tempdir().unwrap();
    let d = dispatcher(dir.path());

    let mut input = Vec::new();
    input.extend_from_slice(b"{\"jsonrpc\":\"2.0\",\"id\":1,\"method\":\"ping\"}\n");
    input.extend_from_slice(b"{\"jsonrpc\":\"2.0\",\"id\":2,\"method\":\"ping\xff\"}\n");
    input.extend_from_slice(b"{\"jsonrpc\":\"2.0\",\"id\":3,\"method\":\"ping\"}\r\n");
    let mut output = Vec::new();

    let stats = serve(&d, input.as_slice(), &mut output).await.unwrap();
    let lines: Vec<Value> = String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();

    assert_eq!(stats, ServeStats { received: 3, responded: 3 });
    assert_eq!(lines[0], json!({ "jsonrpc": "2.0", "id": 1, "result": {} }));
    assert_eq!(lines[1]["id"], Value::Null);
    assert_eq!(lines[1]["error"]["code"], -32700);
    assert_eq!(lines[2], json!({ "jsonrpc": "2.0", "id": 3, "result": {} }));
}
