//! Pagination windows over ordered collections.
//!
//! A window is ephemeral: derived per request from `(total items, page,
//! page size)`, never stored. Out-of-range pages yield empty windows,
//! never errors.

/// A bounded view of one page of an ordered collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub current_page: usize,
    pub per_page: usize,
    pub total_items: usize,
}

impl PageWindow {
    /// Compute the window for a requested page.
    ///
    /// An absent page defaults to 1 and a page of 0 clamps to 1. A page
    /// size of 0 is treated as 1, keeping every window well-formed.
    pub fn compute(total_items: usize, page: Option<usize>, per_page: usize) -> Self {
        Self {
            current_page: page.unwrap_or(1).max(1),
            per_page: per_page.max(1),
            total_items,
        }
    }

    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.per_page)
    }

    /// First index of the window (inclusive).
    pub const fn start(&self) -> usize {
        self.current_page
            .saturating_sub(1)
            .saturating_mul(self.per_page)
    }

    /// Last index of the window (exclusive).
    pub const fn end(&self) -> usize {
        self.current_page.saturating_mul(self.per_page)
    }

    /// The window's half-open slice of `items`; out-of-range windows
    /// simply yield fewer or zero items.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.start().min(items.len());
        let end = self.end().min(items.len());
        &items[start..end]
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.total_pages() > self.current_page
    }

    /// Link target of the previous page, if any.
    pub fn previous_path(&self, section: &str) -> Option<String> {
        self.has_previous()
            .then(|| page_path(section, self.current_page - 1))
    }

    /// Link target of the next page, if any.
    pub fn next_path(&self, section: &str) -> Option<String> {
        self.has_next()
            .then(|| page_path(section, self.current_page + 1))
    }
}

/// Listing path for one page of a section.
///
/// Page 1 collapses to the section's root listing, so the first page has
/// a single canonical URL; `/posts/page/1` never appears in links.
pub fn page_path(section: &str, page: usize) -> String {
    match (section.is_empty(), page <= 1) {
        (true, true) => "/".to_string(),
        (true, false) => format!("/page/{page}"),
        (false, true) => format!("/{section}"),
        (false, false) => format!("/{section}/page/{page}"),
    }
}
