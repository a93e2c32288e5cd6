//! Content error taxonomy.
//!
//! Loader and indexer failures propagate unmodified to their immediate
//! caller; there is no retry layer. A resolution miss or an out-of-range
//! page number is *not* an error (see `content::resolver` and
//! `content::paginate`).

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by document loading and collection indexing.
#[derive(Debug, Error)]
pub enum ContentError {
    /// A document's metadata block could not be parsed.
    #[error("malformed frontmatter in `{path}`")]
    MalformedDocument {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The folder a collection should be indexed from does not exist.
    #[error("content folder not found: `{0}`")]
    CollectionNotFound(PathBuf),

    /// File system failure while reading a document or enumerating a folder.
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_content_error_display() {
        let missing = ContentError::CollectionNotFound(PathBuf::from("content/posts"));
        let display = format!("{missing}");
        assert!(display.contains("not found"));
        assert!(display.contains("content/posts"));

        let io_err = ContentError::Io(
            PathBuf::from("content/about.md"),
            Error::new(ErrorKind::PermissionDenied, "denied"),
        );
        let display = format!("{io_err}");
        assert!(display.contains("IO error"));
        assert!(display.contains("about.md"));
    }

    #[test]
    fn test_malformed_document_keeps_source() {
        let source = serde_yaml::from_str::<serde_yaml::Value>("[unclosed").unwrap_err();
        let err = ContentError::MalformedDocument {
            path: PathBuf::from("content/bad.md"),
            source,
        };
        let display = format!("{err}");
        assert!(display.contains("malformed frontmatter"));
        assert!(display.contains("bad.md"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
