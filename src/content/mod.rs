//! The content pipeline: load, index, resolve, paginate.
//!
//! Composed bottom-up, with data flowing strictly upward:
//!
//! ```text
//! matter::split()           one file's text → (metadata block, body)
//!        │
//!        ▼
//! Document::load()          one file → Document (identifier, meta, body)
//!        │
//!        ▼
//! Collection::index()       one folder → published, date-sorted documents
//!        │
//!        ▼
//! Resolver / PageWindow     identifier → Document, page → bounded slice
//!        │
//!        ▼
//! Site                      the facade the presentation layer calls
//! ```
//!
//! Every operation is a fresh, read-only pass over the file system; nothing
//! is cached across calls and nothing is mutated after construction.

mod collection;
mod document;
mod matter;
mod paginate;
mod resolver;
mod site;

pub use collection::Collection;
pub use document::{Document, Frontmatter, NOT_FOUND_LAYOUT};
pub use paginate::{PageWindow, page_path};
pub use resolver::Resolver;
pub use site::Site;
