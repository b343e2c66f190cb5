//! Directory listing by extension.

use crate::path::to_unix_string;
use crate::MARKDOWN_EXTENSION;
use sajarubox_common_core::Result;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

/// Options for [`list_files`].
#[derive(Debug, Clone)]
pub struct ListOptions {
    /// Suffix a file name must end with.
    pub extension: String,
    /// Descend into subdirectories.
    pub recursive: bool,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            extension: MARKDOWN_EXTENSION.to_string(),
            recursive: false,
        }
    }
}

impl ListOptions {
    /// Markdown files directly inside the directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the required suffix.
    pub fn extension(mut self, ext: impl Into<String>) -> Self {
        self.extension = ext.into();
        self
    }

    /// Descend into subdirectories.
    pub fn recursive(mut self) -> Self {
        self.recursive = true;
        self
    }
}

/// List files below `base` whose name ends with the configured extension.
///
/// Entries from subdirectories are prefixed with their `/`-separated path
/// relative to `base`. The result is sorted. A missing `base` yields an
/// empty list.
pub fn list_files(base: &Path, options: &ListOptions) -> Result<Vec<String>> {
    if !base.is_dir() {
        debug!("directory not present: {:?}", base);
        return Ok(Vec::new());
    }

    let max_depth = if options.recursive { usize::MAX } else { 1 };
    let mut files = Vec::new();

    for entry in WalkDir::new(base).min_depth(1).max_depth(max_depth) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                debug!("Error reading entry: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if !name.ends_with(options.extension.as_str()) {
            continue;
        }

        if let Ok(relative) = entry.path().strip_prefix(base) {
            files.push(to_unix_string(relative));
        }
    }

    files.sort();
    debug!("listed {} files", files.len());
    Ok(files)
}
