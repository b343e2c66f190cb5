use sajarubox_server::{serve_stdio, Dispatcher};
use tracing::info;

use crate::settings::Settings;
use crate::Exit;

/// Run the protocol loop until stdin closes.
pub async fn serve(settings: &Settings) -> anyhow::Result<Exit> {
    let context = settings.tool_context()?;
    let dispatcher = Dispatcher::new(context, settings.server_info());

    info!(
        root = %settings.root.display(),
        tools = dispatcher.registry().len(),
        "serving on stdio"
    );
    serve_stdio(&dispatcher).await?;
    Ok(Exit::Success)
}
