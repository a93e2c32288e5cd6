//! Stanza - content indexing and retrieval for statically-rendered sites.
//!
//! Turns a directory tree of Markdown documents (YAML frontmatter + body)
//! into queryable, sorted, paginated collections. Rendering is someone
//! else's job: the body is stored and returned verbatim, and everything
//! this crate produces is plain data for a presentation layer to consume.
//!
//! # Modules
//!
//! | Module    | Purpose                                           |
//! |-----------|---------------------------------------------------|
//! | `config`  | `stanza.toml` site configuration                  |
//! | `content` | Document loading, collections, resolution, paging |
//! | `error`   | Content error taxonomy                            |
//! | `logger`  | Colored `log!` output                             |
//! | `utils`   | Date parsing and display                          |
//!
//! # Example
//!
//! ```ignore
//! let site = Site::new(SiteConfig::default());
//! let posts = site.posts()?;
//! let (items, window) = site.paginate(&posts, Some(2));
//! let about = site.resolve("about")?;
//! ```

pub mod config;
pub mod content;
pub mod error;
pub mod logger;
pub mod utils;

pub use config::SiteConfig;
pub use content::{Collection, Document, Frontmatter, PageWindow, Resolver, Site, page_path};
pub use error::ContentError;
