//! Resource and topic tables for SajaruBox.
//!
//! A [`Catalog`] maps resource URIs and topic keys to files under the
//! document root. The tables are immutable once built; files are only
//! looked up (and may turn out to be missing) when a request needs them.

mod builtin;
mod topic;

pub use topic::{Topic, TopicTarget};

use sajarubox_common_core::{Error, ErrorCode, Result};
use sajarubox_fs::DocumentStore;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use thiserror::Error;
use tracing::{debug, instrument};

/// Content type reported for every resource.
pub const MARKDOWN_MIME_TYPE: &str = "text/markdown";

/// Divider placed between the files of a bundle.
pub const BUNDLE_DIVIDER: &str = "\n\n---\n\n";

static BUILTIN: OnceLock<Catalog> = OnceLock::new();

/// A URI-addressed document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// Opaque identifier, e.g. `sajarubox://schema`.
    pub uri: String,
    /// Display name.
    pub name: String,
    /// Short description.
    pub description: String,
    /// Root-relative backing file.
    file: String,
}

impl Resource {
    /// Create a resource.
    pub fn new(
        uri: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        file: impl Into<String>,
    ) -> Self {
        Self {
            uri: uri.into(),
            name: name.into(),
            description: description.into(),
            file: file.into(),
        }
    }

    /// Root-relative backing file.
    pub fn file(&self) -> &str {
        &self.file
    }
}

/// Errors raised while building a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The override file could not be read.
    #[error("failed to read catalog {}: {source}", path.display())]
    Read {
        /// Catalog file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The override file is not a valid catalog document.
    #[error("invalid catalog YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// Two resources share a URI.
    #[error("duplicate resource uri: {0}")]
    DuplicateUri(String),

    /// Two topics share a key.
    #[error("duplicate topic key: {0}")]
    DuplicateTopic(String),

    /// A bundle topic lists no files.
    #[error("topic {0} has an empty bundle")]
    EmptyBundle(String),
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    resources: Vec<Resource>,
    #[serde(default)]
    topics: Vec<Topic>,
}

/// Resource list and topic map.
#[derive(Debug, Clone)]
pub struct Catalog {
    resources: Vec<Resource>,
    topics: Vec<Topic>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate identifiers and empty bundles.
    pub fn new(resources: Vec<Resource>, topics: Vec<Topic>) -> std::result::Result<Self, CatalogError> {
        let mut uris = HashSet::new();
        for resource in &resources {
            if !uris.insert(resource.uri.as_str()) {
                return Err(CatalogError::DuplicateUri(resource.uri.clone()));
            }
        }

        let mut keys = HashSet::new();
        for topic in &topics {
            if !keys.insert(topic.key.as_str()) {
                return Err(CatalogError::DuplicateTopic(topic.key.clone()));
            }
            if let TopicTarget::Bundle(files) = &topic.target {
                if files.is_empty() {
                    return Err(CatalogError::EmptyBundle(topic.key.clone()));
                }
            }
        }

        Ok(Self { resources, topics })
    }

    /// The tables shipped with the server.
    pub fn builtin() -> &'static Catalog {
        BUILTIN.get_or_init(|| {
            let resources = builtin::RESOURCES
                .iter()
                .map(|(uri, name, description, file)| Resource::new(*uri, *name, *description, *file))
                .collect();

            let topics = builtin::FILE_TOPICS
                .iter()
                .map(|(key, file)| Topic::file(*key, *file))
                .chain(
                    builtin::BUNDLE_TOPICS
                        .iter()
                        .map(|(key, files)| Topic::bundle(*key, files.iter().copied())),
                )
                .collect();

            Self { resources, topics }
        })
    }

    /// Parse a catalog from YAML with `resources` and `topics` lists.
    pub fn from_yaml(yaml: &str) -> std::result::Result<Self, CatalogError> {
        let file: CatalogFile = serde_yaml::from_str(yaml)?;
        Self::new(file.resources, file.topics)
    }

    /// Load a catalog YAML file.
    pub fn load(path: impl AsRef<Path>) -> std::result::Result<Self, CatalogError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&yaml)
    }

    /// Resources in declaration order.
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    /// Topics in declaration order.
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    /// Topic keys in declaration order.
    pub fn topic_keys(&self) -> Vec<&str> {
        self.topics.iter().map(|t| t.key.as_str()).collect()
    }

    /// Look up a resource by exact URI.
    pub fn resource(&self, uri: &str) -> Result<&Resource> {
        self.resources
            .iter()
            .find(|r| r.uri == uri)
            .ok_or_else(|| {
                Error::not_found(
                    ErrorCode::RESOURCE_NOT_FOUND,
                    format!("Recurso no encontrado: {uri}"),
                )
            })
    }

    /// Look up a topic by exact key.
    ///
    /// The not-found message lists every valid key.
    pub fn topic(&self, key: &str) -> Result<&Topic> {
        self.topics.iter().find(|t| t.key == key).ok_or_else(|| {
            Error::not_found(
                ErrorCode::TOPIC_NOT_FOUND,
                format!(
                    "Topic invalido: \"{key}\". Disponibles: {}",
                    self.topic_keys().join(", ")
                ),
            )
        })
    }

    /// Read the file behind a resource.
    #[instrument(skip(self, store))]
    pub fn read_resource(&self, store: &DocumentStore, uri: &str) -> Result<String> {
        let resource = self.resource(uri)?;
        debug!("resource {} -> {}", uri, resource.file);
        store.read(&resource.file)
    }

    /// Resolve a topic to text.
    ///
    /// A single file comes back unwrapped. A bundle reads every file in
    /// order, prefixes each with a `# --- <path> ---` header and joins them
    /// with [`BUNDLE_DIVIDER`]; the first unreadable file fails the whole
    /// bundle.
    #[instrument(skip(self, store))]
    pub fn resolve_topic(&self, store: &DocumentStore, key: &str) -> Result<String> {
        match &self.topic(key)?.target {
            TopicTarget::File(file) => store.read(file),
            TopicTarget::Bundle(files) => {
                let mut sections = Vec::with_capacity(files.len());
                for file in files {
                    let content = store.read(file)?;
                    sections.push(format!("# --- {file} ---\n\n{content}"));
                }
                debug!("bundle {} joined {} files", key, sections.len());
                Ok(sections.join(BUNDLE_DIVIDER))
            }
        }
    }

    /// Every file referenced by the catalog that is missing from the store.
    ///
    /// Each path appears once, in first-reference order.
    pub fn missing_files(&self, store: &DocumentStore) -> Vec<String> {
        let mut seen = HashSet::new();
        self.resources
            .iter()
            .map(|r| r.file.as_str())
            .chain(self.topics.iter().flat_map(|t| t.target.files()))
            .filter(|file| seen.insert(*file))
            .filter(|file| !store.exists(file))
            .map(str::to_string)
            .collect()
    }
}
