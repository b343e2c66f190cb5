//! Topic keys for context lookups.

use serde::{Deserialize, Serialize};

/// What a topic key points at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TopicTarget {
    /// One root-relative file, returned as-is.
    File(String),
    /// Several files concatenated in order.
    Bundle(Vec<String>),
}

impl TopicTarget {
    /// Whether this target is a bundle.
    pub fn is_bundle(&self) -> bool {
        matches!(self, Self::Bundle(_))
    }

    /// Referenced files in order.
    pub fn files(&self) -> impl Iterator<Item = &str> {
        let files: &[String] = match self {
            Self::File(file) => std::slice::from_ref(file),
            Self::Bundle(files) => files,
        };
        files.iter().map(String::as_str)
    }
}

/// A topic entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    /// Lookup key.
    pub key: String,
    /// Target file or bundle.
    #[serde(rename = "path")]
    pub target: TopicTarget,
}

impl Topic {
    /// A single-file topic.
    pub fn file(key: impl Into<String>, file: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            target: TopicTarget::File(file.into()),
        }
    }

    /// A bundle topic.
    pub fn bundle<I, S>(key: impl Into<String>, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            key: key.into(),
            target: TopicTarget::Bundle(files.into_iter().map(Into::into).collect()),
        }
    }

    /// Line used by the topic listing, e.g. `- **all-business** (bundle: 11 archivos)`.
    pub fn listing_line(&self) -> String {
        match &self.target {
            TopicTarget::File(_) => format!("- **{}**", self.key),
            TopicTarget::Bundle(files) => {
                format!("- **{}** (bundle: {} archivos)", self.key, files.len())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(Topic::file("schema", "knowledge/schema.md"), "- **schema**" ; "single file")]
    #[test_case(Topic::bundle("pair", ["a.md", "b.md"]), "- **pair** (bundle: 2 archivos)" ; "bundle")]
    fn test_listing_line(topic: Topic, expected: &str) {
        assert_eq!(topic.listing_line(), expected);
    }

    #[test]
    fn test_yaml_accepts_string_or_list() {
        let topics: Vec<Topic> = serde_yaml::from_str(
            r#"
- key: one
  path: a.md
- key: many
  path: [a.md, b.md]
"#,
        )
        .unwrap();

        assert_eq!(topics[0], Topic::file("one", "a.md"));
        assert_eq!(topics[1], Topic::bundle("many", ["a.md", "b.md"]));
        assert!(topics[1].target.is_bundle());
        assert_eq!(topics[1].target.files().collect::<Vec<_>>(), vec!["a.md", "b.md"]);
    }
}
