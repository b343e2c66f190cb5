//! Document root accessor for SajaruBox.
//!
//! Every path handed to a [`DocumentStore`] is relative to a fixed root
//! directory. Reads always go back to storage; nothing is cached.

pub mod list;
pub mod path;

pub use list::ListOptions;

use sajarubox_common_core::{Error, ErrorCode, Result};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument, warn};

/// Markdown file extension used by every document in the root.
pub const MARKDOWN_EXTENSION: &str = ".md";

/// Accessor for the documentation root.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    root: PathBuf,
}

impl DocumentStore {
    /// Create a store over the given root directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a relative path against the root.
    ///
    /// No sanitization happens here: `..` components are kept as given.
    pub fn resolve(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    /// Whether a relative path currently names an existing regular file.
    pub fn exists(&self, relative: &str) -> bool {
        self.resolve(relative).is_file()
    }

    /// Read a document as UTF-8 text.
    #[instrument(skip(self), fields(root = %self.root.display()))]
    pub fn read(&self, relative: &str) -> Result<String> {
        let path = self.resolve(relative);

        if !path.exists() {
            debug!("missing document: {:?}", path);
            return Err(Error::not_found(
                ErrorCode::FILE_NOT_FOUND,
                format!("Archivo no encontrado: {relative}"),
            ));
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            warn!("failed to read {:?}: {}", path, e);
            fs_error(ErrorCode::FILE_READ_ERROR, "failed to read file", relative, e)
        })?;

        debug!("read {} bytes", content.len());
        Ok(content)
    }

    /// Replace a document's content, creating parent directories first.
    #[instrument(skip(self, content), fields(root = %self.root.display(), bytes = content.len()))]
    pub fn write(&self, relative: &str, content: &str) -> Result<()> {
        let path = self.resolve(relative);
        write_atomic(&path, content.as_bytes()).map_err(|e| {
            warn!("failed to write {:?}: {}", path, e);
            e
        })?;
        debug!("wrote {:?}", path);
        Ok(())
    }

    /// List files under a root-relative directory.
    ///
    /// A missing directory yields an empty list.
    #[instrument(skip(self), fields(root = %self.root.display()))]
    pub fn list_files(&self, directory: &str, options: &ListOptions) -> Result<Vec<String>> {
        list::list_files(&self.resolve(directory), options)
    }
}

fn fs_error(code: ErrorCode, what: &str, relative: &str, source: io::Error) -> Error {
    Error::FileSystem {
        code,
        message: format!("{what}: {relative}"),
        path: Some(relative.to_string()),
        source: Some(Box::new(source)),
    }
}

/// Write to a file atomically (write to temp, then rename).
///
/// Missing parent directories are created.
pub fn write_atomic(path: impl AsRef<Path>, contents: &[u8]) -> Result<()> {
    let path = path.as_ref();
    let display = path.to_string_lossy();
    let parent = path.parent().unwrap_or(Path::new("."));

    fs::create_dir_all(parent).map_err(|e| {
        fs_error(
            ErrorCode::FILE_WRITE_ERROR,
            "failed to create parent directory",
            &parent.to_string_lossy(),
            e,
        )
    })?;

    let mut temp_path = path.to_path_buf();
    match path.file_name() {
        Some(name) => temp_path.set_file_name(format!(".{}.tmp", name.to_string_lossy())),
        None => temp_path.push(".tmp"),
    }

    {
        let mut file = File::create(&temp_path).map_err(|e| {
            fs_error(ErrorCode::FILE_WRITE_ERROR, "failed to create temporary file", &display, e)
        })?;

        file.write_all(contents).map_err(|e| {
            fs_error(ErrorCode::FILE_WRITE_ERROR, "failed to write temporary file", &display, e)
        })?;

        file.sync_all().map_err(|e| {
            fs_error(ErrorCode::FILE_WRITE_ERROR, "failed to sync temporary file", &display, e)
        })?;
    }

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        fs_error(ErrorCode::FILE_WRITE_ERROR, "failed to replace file", &display, e)
    })?;

    Ok(())
}
