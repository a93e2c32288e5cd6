//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

use std::path::PathBuf;

pub fn content() -> PathBuf {
    "content".into()
}

pub fn posts() -> String {
    "posts".into()
}

pub fn not_found() -> PathBuf {
    "404.md".into()
}

pub fn pagination() -> usize {
    10
}
