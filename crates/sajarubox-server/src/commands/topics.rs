use sajarubox_tools::ToolRegistry;
use serde_json::Value;

use crate::settings::Settings;
use crate::Exit;

/// Print the `list_topics` output.
pub async fn topics(settings: &Settings) -> anyhow::Result<Exit> {
    let context = settings.tool_context()?;
    let text = ToolRegistry::with_defaults()
        .execute("list_topics", &context, Value::Null)
        .await?;
    println!("{text}");
    Ok(Exit::Success)
}
