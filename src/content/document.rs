//! Document loading and identifier derivation.
//!
//! A `Document` is the atomic content unit: one file, split into a typed
//! metadata mapping and a verbatim body, addressed by a canonical
//! identifier (slug).
//!
//! # Identifier derivation
//!
//! | Source file       | Frontmatter          | Identifier    |
//! |-------------------|----------------------|---------------|
//! | `hello-world.md`  | (none)               | `hello-world` |
//! | `hello-world.mdx` | (none)               | `hello-world` |
//! | `hello-world.md`  | `url: "/custom-id"`  | `custom-id`   |

use crate::error::ContentError;
use crate::utils::date::DateTimeUtc;
use serde::Deserialize;
use serde_yaml::Value;
use std::{collections::BTreeMap, fs, path::Path};

use super::matter;

/// Layout value marking the not-found sentinel document.
///
/// Documents carrying it never reach a published collection.
pub const NOT_FOUND_LAYOUT: &str = "not-found";

/// Typed metadata block of a document.
///
/// Well-known fields are typed; everything else lands in `extra` so a
/// document can carry arbitrary additional fields without failing to load.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Frontmatter {
    pub title: Option<String>,

    /// Publication date, `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM:SSZ`.
    pub date: Option<String>,

    /// Drafts never reach a published collection.
    #[serde(default)]
    pub draft: bool,

    /// Layout hint consumed by the presentation layer.
    pub layout: Option<String>,

    /// Explicit identifier override; a leading `/` is stripped.
    pub url: Option<String>,

    /// Cover image path.
    pub image: Option<String>,

    pub description: Option<String>,

    #[serde(default)]
    pub categories: Vec<String>,

    /// Author identifiers, resolving into the authors section.
    #[serde(default)]
    pub authors: Vec<String>,

    /// Any remaining fields, kept as-is.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Frontmatter {
    /// Whether this document belongs in a published collection.
    pub fn is_publishable(&self) -> bool {
        !self.draft && self.layout.as_deref() != Some(NOT_FOUND_LAYOUT)
    }

    /// Publication date parsed for sorting; `None` if absent or unparseable.
    pub fn parsed_date(&self) -> Option<DateTimeUtc> {
        self.date.as_deref().and_then(DateTimeUtc::parse)
    }

    /// Publication date formatted for display (`15 Jun 2024`).
    pub fn display_date(&self) -> Option<String> {
        self.parsed_date().map(|date| date.to_display())
    }
}

/// One content item: identifier, metadata and verbatim body.
///
/// A loaded document owns its data outright; later loads never alias or
/// mutate an earlier result.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Unique within its collection; see the module docs for derivation.
    pub identifier: String,
    pub meta: Frontmatter,
    /// Raw text following the metadata block, unmodified. Empty when the
    /// file has no body.
    pub body: String,
}

impl Document {
    /// Load one document from a file.
    ///
    /// The only parse failure this can produce is
    /// [`ContentError::MalformedDocument`], for a metadata block that is
    /// not valid YAML. A file without a metadata block gets empty
    /// metadata, and a file without a body gets an empty body string.
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let text = fs::read_to_string(path)
            .map_err(|err| ContentError::Io(path.to_path_buf(), err))?;

        let (block, body) = matter::split(&text);
        let meta = match block {
            // An empty or comment-only block parses as YAML null, which
            // maps to default metadata rather than a failure.
            Some(block) => serde_yaml::from_str::<Option<Frontmatter>>(block)
                .map_err(|source| ContentError::MalformedDocument {
                    path: path.to_path_buf(),
                    source,
                })?
                .unwrap_or_default(),
            None => Frontmatter::default(),
        };

        Ok(Self {
            identifier: derive_identifier(path, &meta),
            meta,
            body: body.to_owned(),
        })
    }
}

/// Filename-derived identifier, unless `url:` claims one explicitly.
fn derive_identifier(path: &Path, meta: &Frontmatter) -> String {
    if let Some(url) = meta.url.as_deref() {
        return url.trim_start_matches('/').to_owned();
    }
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_doc(dir: &TempDir, name: &str, text: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(text.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_full_document() {
        let dir = TempDir::new().unwrap();
        let path = write_doc(
            &dir,
            "hello-world.md",
            "---\ntitle: Hello\ndate: 2024-06-15\ncategories:\n  - running\n---\nThe body.\n",
        );

        let doc = Document::load(&path).unwrap();
        assert_eq!(doc.identifier, "hello-world");
        assert_eq!(doc.meta.title, Some("Hello".to_string()));
        assert_eq!(doc.meta.date, Some("2024-06-15".to_string()));
        assert_eq!(doc.meta.categories, vec!["running"]);
        assert_eq!(doc.body, "The body.\n");
    }

    #[test]
    fn test_load_without_frontmatter() {
        let dir = TempDir::new().unwrap();
        let path = write_doc(&dir, "plain.md", "only a body\n");

        let doc = Document::load(&path).unwrap();
        assert_eq!(doc.identifier, "plain");
        assert_eq!(doc.meta, Frontmatter::default());
        assert_eq!(doc.body, "only a body\n");
    }

    #[test]
    fn test_load_missing_body_is_empty_string() {
        let dir = TempDir::new().unwrap();
        let path = write_doc(&dir, "bare.md", "---\ntitle: Bare\n---\n");

        let doc = Document::load(&path).unwrap();
        assert_eq!(doc.body, "");
    }

    #[test]
    fn test_load_malformed_frontmatter() {
        let dir = TempDir::new().unwrap();
        let path = write_doc(&dir, "broken.md", "---\ntitle: [unclosed\n---\nbody\n");

        let err = Document::load(&path).unwrap_err();
        assert!(matches!(err, ContentError::MalformedDocument { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Document::load(Path::new("no/such/file.md")).unwrap_err();
        assert!(matches!(err, ContentError::Io(..)));
    }

    #[test]
    fn test_identifier_from_stem_strips_extension() {
        let dir = TempDir::new().unwrap();
        let md = write_doc(&dir, "notes.md", "body");
        let mdx = write_doc(&dir, "other.mdx", "body");

        assert_eq!(Document::load(&md).unwrap().identifier, "notes");
        assert_eq!(Document::load(&mdx).unwrap().identifier, "other");
    }

    #[test]
    fn test_identifier_url_override() {
        let dir = TempDir::new().unwrap();
        let path = write_doc(&dir, "filename.md", "---\nurl: \"/custom-id\"\n---\n");

        let doc = Document::load(&path).unwrap();
        assert_eq!(doc.identifier, "custom-id");
    }

    #[test]
    fn test_identifier_url_override_without_slash() {
        let dir = TempDir::new().unwrap();
        let path = write_doc(&dir, "filename.md", "---\nurl: elsewhere\n---\n");

        let doc = Document::load(&path).unwrap();
        assert_eq!(doc.identifier, "elsewhere");
    }

    #[test]
    fn test_unknown_fields_collect_into_extra() {
        let dir = TempDir::new().unwrap();
        let path = write_doc(
            &dir,
            "open.md",
            "---\ntitle: Open\nmeta_title: SEO title\nnoindex: true\n---\n",
        );

        let doc = Document::load(&path).unwrap();
        assert_eq!(
            doc.meta.extra.get("meta_title"),
            Some(&Value::String("SEO title".to_string()))
        );
        assert_eq!(doc.meta.extra.get("noindex"), Some(&Value::Bool(true)));
    }

    #[test]
    fn test_is_publishable() {
        let published = Frontmatter::default();
        assert!(published.is_publishable());

        let draft = Frontmatter {
            draft: true,
            ..Frontmatter::default()
        };
        assert!(!draft.is_publishable());

        let sentinel = Frontmatter {
            layout: Some(NOT_FOUND_LAYOUT.to_string()),
            ..Frontmatter::default()
        };
        assert!(!sentinel.is_publishable());

        let other_layout = Frontmatter {
            layout: Some("about".to_string()),
            ..Frontmatter::default()
        };
        assert!(other_layout.is_publishable());
    }

    #[test]
    fn test_display_date() {
        let meta = Frontmatter {
            date: Some("2024-06-15".to_string()),
            ..Frontmatter::default()
        };
        assert_eq!(meta.display_date(), Some("15 Jun 2024".to_string()));

        let undated = Frontmatter::default();
        assert_eq!(undated.display_date(), None);
    }

    #[test]
    fn test_loaded_documents_do_not_alias() {
        let dir = TempDir::new().unwrap();
        let path = write_doc(&dir, "twice.md", "---\ntitle: Same\n---\nsame body\n");

        let first = Document::load(&path).unwrap();
        let second = Document::load(&path).unwrap();
        assert_eq!(first, second);

        // Rewriting the file must not affect the already-loaded value.
        write_doc(&dir, "twice.md", "---\ntitle: Changed\n---\nnew body\n");
        assert_eq!(first.meta.title, Some("Same".to_string()));
    }
}
