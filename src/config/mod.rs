//! Site configuration for the content index, representing `stanza.toml`.
//!
//! # Fields
//!
//! | Field        | Purpose                                             |
//! |--------------|-----------------------------------------------------|
//! | `content`    | Root folder holding all content documents           |
//! | `posts`      | Folder name (under `content`) of the posts section  |
//! | `not_found`  | Fallback document path, relative to `content`       |
//! | `pagination` | Documents per listing page                          |
//!
//! # Example
//!
//! ```toml
//! content = "content"
//! posts = "posts"
//! not_found = "404.md"
//! pagination = 10
//! ```
//!
//! Values are plain data threaded explicitly into
//! [`Site`](crate::content::Site) and [`Resolver`](crate::content::Resolver)
//! rather than read from process-wide state, so the whole pipeline can be
//! exercised with arbitrary configurations.

pub mod defaults;
mod error;

pub use error::ConfigError;

use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Root configuration structure representing `stanza.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Root folder holding all content documents
    #[serde(default = "defaults::content")]
    pub content: PathBuf,

    /// Folder name, under `content`, of the distinguished posts collection
    #[serde(default = "defaults::posts")]
    pub posts: String,

    /// Not-found fallback document, relative to `content`
    #[serde(default = "defaults::not_found")]
    pub not_found: PathBuf,

    /// Number of documents per listing page
    #[serde(default = "defaults::pagination")]
    pub pagination: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content: defaults::content(),
            posts: defaults::posts(),
            not_found: defaults::not_found(),
            pagination: defaults::pagination(),
        }
    }
}

impl SiteConfig {
    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file path.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// The content root folder.
    pub fn content_dir(&self) -> &Path {
        &self.content
    }

    /// The distinguished posts folder.
    pub fn posts_dir(&self) -> PathBuf {
        self.content.join(&self.posts)
    }

    /// Full path of the not-found fallback document.
    pub fn not_found_path(&self) -> PathBuf {
        self.content.join(&self.not_found)
    }

    /// Check cross-field constraints.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pagination == 0 {
            return Err(ConfigError::Validation(
                "pagination must be at least 1".to_string(),
            ));
        }
        if self.posts.is_empty() {
            return Err(ConfigError::Validation(
                "posts folder name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
