//! Collection indexing: enumerate one folder, load, filter, sort.
//!
//! A `Collection` is an ordered sequence of published documents drawn from
//! the direct children of a single folder:
//!
//! 1. Enumerate direct entries only (no recursion), sorted by file name so
//!    the enumeration order is deterministic across runs and platforms.
//! 2. Keep `.md` and `.mdx` files; the two extensions are equivalent.
//! 3. Drop `_`-prefixed names (reserved for section-index documents).
//! 4. Load each file; a malformed document aborts the whole call.
//! 5. Drop drafts and not-found-layout documents.
//! 6. Stable-sort by date, newest first; undated documents keep their
//!    enumeration order after all dated ones.

use crate::error::ContentError;
use crate::utils::date::DateTimeUtc;
use std::{
    cmp::Ordering,
    path::{Path, PathBuf},
};
use walkdir::WalkDir;

use super::document::Document;

/// File extensions recognized as content documents.
const DOCUMENT_EXTENSIONS: [&str; 2] = ["md", "mdx"];

/// Name prefix reserved for section-index documents.
const SECTION_INDEX_PREFIX: char = '_';

/// An ordered, published-only, date-sorted sequence of documents from one
/// folder. Immutable once constructed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collection {
    items: Vec<Document>,
}

impl Collection {
    /// Index one folder into a collection.
    ///
    /// # Errors
    ///
    /// [`ContentError::CollectionNotFound`] when the folder does not
    /// exist; any [`ContentError::MalformedDocument`] from a single file
    /// aborts the whole call, so a partial collection is never surfaced.
    pub fn index(folder: &Path) -> Result<Self, ContentError> {
        let mut items = Vec::new();
        for path in enumerate(folder)? {
            let doc = Document::load(&path)?;
            if doc.meta.is_publishable() {
                items.push(doc);
            }
        }
        sort_by_date(&mut items);
        Ok(Self { items })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.items.iter()
    }

    pub fn items(&self) -> &[Document] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Document> {
        self.items
    }

    /// Look up a document by identifier.
    pub fn get(&self, identifier: &str) -> Option<&Document> {
        self.items.iter().find(|doc| doc.identifier == identifier)
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.get(identifier).is_some()
    }
}

/// Direct children of `folder` eligible for loading, in file-name order.
fn enumerate(folder: &Path) -> Result<Vec<PathBuf>, ContentError> {
    if !folder.is_dir() {
        return Err(ContentError::CollectionNotFound(folder.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(folder)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|err| {
            let path = err
                .path()
                .map_or_else(|| folder.to_path_buf(), Path::to_path_buf);
            ContentError::Io(path, err.into())
        })?;

        if !entry.file_type().is_file() {
            continue;
        }
        if entry
            .file_name()
            .to_string_lossy()
            .starts_with(SECTION_INDEX_PREFIX)
        {
            continue;
        }
        let recognized = entry
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| DOCUMENT_EXTENSIONS.contains(&ext));
        if recognized {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Newest first; ties and undated documents keep their enumeration order.
fn sort_by_date(items: &mut [Document]) {
    items.sort_by(|a, b| compare_by_date(a.meta.parsed_date(), b.meta.parsed_date()));
}

fn compare_by_date(a: Option<DateTimeUtc>, b: Option<DateTimeUtc>) -> Ordering {
    match (a, b) {
        (Some(date_a), Some(date_b)) => date_b.cmp(&date_a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
