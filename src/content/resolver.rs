//! Identifier resolution with a sentinel fallback.
//!
//! The precedence rule is data, not control flow: a resolver holds an
//! ordered list of candidate source folders and returns the first match.
//! An identifier that matches nowhere resolves to the not-found sentinel
//! document, so resolution is total over identifiers; only file-system
//! and parse failures are errors.

use crate::config::SiteConfig;
use crate::error::ContentError;
use std::path::PathBuf;

use super::collection::Collection;
use super::document::Document;

pub struct Resolver {
    /// Candidate source folders, tried in priority order.
    sources: Vec<PathBuf>,
    /// The always-present fallback document for unmatched identifiers.
    not_found: PathBuf,
}

impl Resolver {
    /// Candidate order: the posts folder shadows the content root.
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            sources: vec![config.posts_dir(), config.content_dir().to_path_buf()],
            not_found: config.not_found_path(),
        }
    }

    /// Resolve an identifier to a document.
    ///
    /// Indexes each candidate source in priority order and returns the
    /// first document whose identifier matches. A miss everywhere returns
    /// the sentinel not-found document - a successful outcome, never an
    /// error.
    pub fn resolve(&self, identifier: &str) -> Result<Document, ContentError> {
        for source in &self.sources {
            let collection = Collection::index(source)?;
            if let Some(doc) = collection
                .into_items()
                .into_iter()
                .find(|doc| doc.identifier == identifier)
            {
                return Ok(doc);
            }
        }
        Document::load(&self.not_found)
    }
}
