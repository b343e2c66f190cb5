//! Path manipulation utilities.

use std::path::{Component, Path, PathBuf};

/// Normalize a path by resolving `.` and `..` without hitting the filesystem.
pub fn normalize(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    let mut components = Vec::new();

    for component in path.components() {
        match component {
            Component::Prefix(p) => components.push(Component::Prefix(p)),
            Component::RootDir => {
                components.clear();
                components.push(Component::RootDir);
            }
            Component::CurDir => {}
            Component::ParentDir => match components.last() {
                Some(Component::Normal(_)) => {
                    components.pop();
                }
                Some(Component::ParentDir) | None => components.push(Component::ParentDir),
                _ => {} // Don't pop prefix or root dir
            },
            Component::Normal(c) => components.push(Component::Normal(c)),
        }
    }

    if components.is_empty() {
        PathBuf::from(".")
    } else {
        components.iter().collect()
    }
}

/// Whether a relative path, once joined onto a root, lands outside that root.
///
/// Absolute paths always count as escaping since `Path::join` discards the
/// root for them.
pub fn escapes_root(path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    if path.has_root() {
        return true;
    }
    matches!(
        normalize(path).components().next(),
        Some(Component::ParentDir)
    )
}

/// Convert a path to a Unix-style string (forward slashes).
pub fn to_unix_string(path: impl AsRef<Path>) -> String {
    path.as_ref()
        .components()
        .map(|c| c.as_os_str().to_string_lossy().to_string())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("a/b/../c"), PathBuf::from("a/c"));
        assert_eq!(normalize("a/./b"), PathBuf::from("a/b"));
        assert_eq!(normalize("../a/b"), PathBuf::from("../a/b"));
        assert_eq!(normalize("/a/../b"), PathBuf::from("/b"));
        assert_eq!(normalize(""), PathBuf::from("."));
    }

    #[test_case("sprint-01.md", false ; "plain name")]
    #[test_case("archive/sprint-00.md", false ; "nested name")]
    #[test_case("a/../sprint-01.md", false ; "dotdot that stays inside")]
    #[test_case("../knowledge/schema.md", true ; "sibling directory")]
    #[test_case("../../etc/hosts", true ; "deep escape")]
    #[test_case("/etc/hosts", true ; "absolute")]
    fn test_escapes_root(path: &str, expected: bool) {
        assert_eq!(escapes_root(path), expected);
    }

    #[test]
    fn test_to_unix_string() {
        let path: PathBuf = ["ios-architecture", "01-project-structure.md"].iter().collect();
        assert_eq!(to_unix_string(&path), "ios-architecture/01-project-structure.md");
    }
}
