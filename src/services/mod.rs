//! Page services.
//!
//! Each service runs the same pipeline for one dashboard page: record store,
//! filter, aggregate, view. Views are plain serializable structs; handlers wrap
//! them in the response envelope.

pub mod analytics;
pub mod dashboard;
pub mod digital_twin;
pub mod expenses;
pub mod inventory;
pub mod suppliers;
pub mod usage_logs;
pub mod verification;

use crate::filter::{self, PageInfo};
use serde::Serialize;

/// Resolved page request: `page` is 1-based
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub per_page: u64,
    pub max_per_page: u64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 20,
            max_per_page: 100,
        }
    }
}

/// One page of a filtered subset
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: PageInfo,
}

impl PageRequest {
    pub fn slice<T: Clone>(&self, subset: &[T]) -> Page<T> {
        let (items, pagination) =
            filter::paginate(subset, self.page, self.per_page, self.max_per_page);
        Page { items, pagination }
    }
}

/// Message shown in place of an empty table
pub(crate) fn empty_state(matched: usize, message: &str) -> Option<String> {
    (matched == 0).then(|| message.to_string())
}
