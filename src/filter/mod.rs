//! Filter and search engine.
//!
//! Maps `(records, criteria)` to the ordered subsequence of records matching
//! every active predicate. Filtering is pure and O(n); `apply` accepts any
//! iterator of references so its output can be filtered again.

pub mod criteria;
pub mod date_range;

pub use criteria::{FilterCriteria, Predicate};
pub use date_range::DateRange;

use chrono::NaiveDateTime;
use serde::Serialize;
use std::borrow::Cow;

/// A record type the engine can search and filter
pub trait Filterable {
    /// Text fields searched by a free-text term, ORed together
    fn search_fields(&self) -> Vec<&str>;

    /// Value of a named filter field, or `None` when the type has no such field
    fn field_value(&self, field: &str) -> Option<Cow<'_, str>>;

    /// Timestamp used by date predicates
    fn timestamp(&self) -> Option<NaiveDateTime> {
        None
    }
}

/// Normalizes a filter value: lowercase words joined by a single `-`.
/// Whitespace, `_`, `-` and camel-case humps all start a new word, so
/// "Low Stock", `low_stock` and `LowStock` share the slug `low-stock`.
pub fn slug(value: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut word = String::new();
    let mut after_lower = false;

    for c in value.chars() {
        if c.is_whitespace() || c == '_' || c == '-' {
            if !word.is_empty() {
                words.push(std::mem::take(&mut word));
            }
            after_lower = false;
            continue;
        }
        if c.is_uppercase() && after_lower {
            words.push(std::mem::take(&mut word));
        }
        after_lower = c.is_lowercase() || c.is_ascii_digit();
        word.extend(c.to_lowercase());
    }
    if !word.is_empty() {
        words.push(word);
    }
    words.join("-")
}

/// Returns the records matching `criteria`, preserving input order.
pub fn apply<'a, R, I>(records: I, criteria: &FilterCriteria, now: NaiveDateTime) -> Vec<&'a R>
where
    R: Filterable + 'a,
    I: IntoIterator<Item = &'a R>,
{
    metrics::counter!("pharmadash.filter.queries", 1);
    records
        .into_iter()
        .filter(|record| criteria.matches(*record, now))
        .collect()
}

/// Pagination metadata for a filtered subset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
    pub total_pages: u64,
}

impl PageInfo {
    pub fn new(page: u64, per_page: u64, total: u64) -> Self {
        let total_pages = if total == 0 || per_page == 0 {
            0
        } else {
            (total + per_page - 1) / per_page
        };
        Self {
            page,
            per_page,
            total,
            total_pages,
        }
    }
}

/// Slices one page out of `subset`. `page` is 1-based (0 is treated as 1)
/// and `per_page` is clamped to `[1, max_per_page]`. A page past the end is
/// empty.
pub fn paginate<T: Clone>(
    subset: &[T],
    page: u64,
    per_page: u64,
    max_per_page: u64,
) -> (Vec<T>, PageInfo) {
    let page = page.max(1);
    let per_page = per_page.clamp(1, max_per_page.max(1));
    let total = subset.len() as u64;
    let start = usize::try_from((page - 1).saturating_mul(per_page)).unwrap_or(usize::MAX);
    let items = subset
        .iter()
        .skip(start)
        .take(usize::try_from(per_page).unwrap_or(usize::MAX))
        .cloned()
        .collect();
    (items, PageInfo::new(page, per_page, total))
}
