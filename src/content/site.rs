//! Site facade: the surface the presentation layer calls.
//!
//! `Site` threads one [`SiteConfig`] into the indexer and resolver and
//! exposes the read operations a renderer needs. Every call is a fresh
//! pass over the file system - no cross-call caching, no shared mutable
//! state - so concurrent callers are safe by construction.

use crate::config::SiteConfig;
use crate::error::ContentError;
use crate::log;
use std::path::Path;

use super::collection::Collection;
use super::document::Document;
use super::paginate::PageWindow;
use super::resolver::Resolver;

pub struct Site {
    config: SiteConfig,
    resolver: Resolver,
}

impl Site {
    pub fn new(config: SiteConfig) -> Self {
        let resolver = Resolver::new(&config);
        Self { config, resolver }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// The distinguished timestamped-content collection.
    pub fn posts(&self) -> Result<Collection, ContentError> {
        self.indexed(&self.config.posts_dir())
    }

    /// Top-level documents of the content root.
    pub fn pages(&self) -> Result<Collection, ContentError> {
        self.indexed(self.config.content_dir())
    }

    /// Any other content section (e.g. `authors`), indexed the same way.
    pub fn section(&self, name: &str) -> Result<Collection, ContentError> {
        self.indexed(&self.config.content_dir().join(name))
    }

    /// The `_index` document of a section: excluded from the section's
    /// collection, but it carries the listing page's own title and body.
    pub fn section_index(&self, name: &str) -> Result<Document, ContentError> {
        Document::load(&self.config.content_dir().join(name).join("_index.md"))
    }

    /// Resolve an identifier: posts first, then the content root, then
    /// the not-found sentinel. Never a miss error.
    pub fn resolve(&self, identifier: &str) -> Result<Document, ContentError> {
        self.resolver.resolve(identifier)
    }

    /// One page of a collection at the configured page size.
    pub fn paginate<'a>(
        &self,
        collection: &'a Collection,
        page: Option<usize>,
    ) -> (&'a [Document], PageWindow) {
        let window = PageWindow::compute(collection.len(), page, self.config.pagination);
        (window.slice(collection.items()), window)
    }

    fn indexed(&self, folder: &Path) -> Result<Collection, ContentError> {
        let collection = Collection::index(folder)?;
        log!("index"; "{} documents from {}", collection.len(), folder.display());
        Ok(collection)
    }
}
