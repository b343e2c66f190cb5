use tracing::{info, warn};

use crate::settings::Settings;
use crate::Exit;

/// Report catalog files missing from the root.
pub async fn check(settings: &Settings) -> anyhow::Result<Exit> {
    let context = settings.tool_context()?;
    let missing = context.catalog.missing_files(&context.store);

    if missing.is_empty() {
        info!(root = %settings.root.display(), "all catalog files present");
        println!("OK: {}", settings.root.display());
        return Ok(Exit::Success);
    }

    for file in &missing {
        warn!(file = %file, "missing");
        println!("missing: {file}");
    }
    println!("{} missing file(s) under {}", missing.len(), settings.root.display());
    Ok(Exit::ValidationError)
}
