use crate::{
    aggregate,
    filter::{self, DateRange, FilterCriteria},
    models::UsageLogEntry,
    services::{empty_state, Page, PageRequest},
    store::{seed::DEPARTMENTS, RecordStore},
};
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};

pub const EMPTY_STATE: &str = "No usage logs found matching your criteria";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UsageLogFilter {
    pub search: Option<String>,
    pub department: Option<String>,
    /// `all`, `today`, `yesterday`, `week` or `custom`
    pub date: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
}

impl UsageLogFilter {
    pub fn date_range(&self) -> DateRange {
        DateRange::from_query(
            self.date.as_deref(),
            self.from.as_deref(),
            self.to.as_deref(),
        )
    }

    /// Criteria for this filter with an already parsed date range
    pub fn criteria_with(&self, date_range: DateRange) -> FilterCriteria {
        FilterCriteria::new()
            .search(self.search.as_deref())
            .field("department", self.department.as_deref())
            .date(date_range)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UsageSummary {
    pub records: usize,
    pub items_dispensed: u64,
    pub total_cost: Decimal,
    /// Distinct departments among the matched records
    pub active_departments: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct UsageLogView {
    #[serde(flatten)]
    pub page: Page<UsageLogEntry>,
    pub summary: UsageSummary,
    pub date_range: DateRange,
    pub department_options: Vec<&'static str>,
    pub empty_state: Option<String>,
}

#[derive(Clone)]
pub struct UsageLogService {
    store: Arc<RecordStore>,
}

impl UsageLogService {
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self { store }
    }

    /// Builds the usage log view. `now` is local time and anchors the
    /// relative date ranges.
    #[instrument(skip(self))]
    pub fn list(
        &self,
        filter: &UsageLogFilter,
        page: PageRequest,
        now: NaiveDateTime,
    ) -> UsageLogView {
        let date_range = filter.date_range();
        let criteria = filter.criteria_with(date_range);
        let matched = filter::apply(&self.store.usage_logs, &criteria, now);

        let cost = aggregate::totals(matched.iter().copied(), |e: &UsageLogEntry| e.cost);
        let summary = UsageSummary {
            records: cost.count,
            items_dispensed: aggregate::totals(matched.iter().copied(), |e: &UsageLogEntry| {
                u64::from(e.quantity)
            })
            .sum,
            total_cost: cost.sum,
            active_departments: aggregate::distinct_count(
                matched.iter().copied(),
                |e: &UsageLogEntry| e.department.clone(),
            ),
        };
        info!(matched = summary.records, "Usage log view built");

        let entries: Vec<UsageLogEntry> = matched.into_iter().cloned().collect();
        UsageLogView {
            page: page.slice(&entries),
            empty_state: empty_state(summary.records, EMPTY_STATE),
            summary,
            date_range,
            department_options: DEPARTMENTS.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn service() -> UsageLogService {
        UsageLogService::new(RecordStore::shared())
    }

    fn now() -> NaiveDateTime {
        NaiveDateTime::parse_from_str("2024-01-15T18:00", "%Y-%m-%dT%H:%M").unwrap()
    }

    fn patients(view: &UsageLogView) -> Vec<&str> {
        view.page
            .items
            .iter()
            .map(|e| e.patient_id.as_str())
            .collect()
    }

    #[test]
    fn emergency_department_has_one_entry() {
        let filter = UsageLogFilter {
            department: Some("Emergency".into()),
            ..UsageLogFilter::default()
        };
        let view = service().list(&filter, PageRequest::default(), now());
        assert_eq!(patients(&view), vec!["P-2024-001"]);
        assert_eq!(view.page.items[0].cost, dec!(0.30));
        assert_eq!(view.summary.total_cost, dec!(0.30));
    }

    #[test]
    fn multi_word_department_matches_by_slug() {
        let filter = UsageLogFilter {
            department: Some("internal-medicine".into()),
            ..UsageLogFilter::default()
        };
        let view = service().list(&filter, PageRequest::default(), now());
        assert_eq!(patients(&view), vec!["P-2024-005"]);
    }

    #[test]
    fn today_and_yesterday_split_the_samples() {
        let today = UsageLogFilter {
            date: Some("today".into()),
            ..UsageLogFilter::default()
        };
        let view = service().list(&today, PageRequest::default(), now());
        assert_eq!(patients(&view), vec!["P-2024-001", "P-2024-002", "P-2024-003"]);

        let yesterday = UsageLogFilter {
            date: Some("yesterday".into()),
            ..UsageLogFilter::default()
        };
        let view = service().list(&yesterday, PageRequest::default(), now());
        assert_eq!(view.summary.records, 3);
        assert_eq!(view.summary.items_dispensed, 30 + 60 + 20);
    }

    #[test]
    fn unparseable_custom_date_matches_nothing() {
        let filter = UsageLogFilter {
            date: Some("custom".into()),
            from: Some("15/01/2024".into()),
            ..UsageLogFilter::default()
        };
        let view = service().list(&filter, PageRequest::default(), now());
        assert_eq!(view.date_range, DateRange::Invalid);
        assert!(view.page.items.is_empty());
        assert_eq!(view.empty_state.as_deref(), Some(EMPTY_STATE));
    }

    #[test]
    fn summary_covers_full_subset_not_page() {
        let page = PageRequest {
            page: 2,
            per_page: 4,
            max_per_page: 100,
        };
        let view = service().list(&UsageLogFilter::default(), page, now());
        assert_eq!(view.page.items.len(), 2);
        assert_eq!(view.summary.records, 6);
        assert_eq!(view.summary.active_departments, 6);
        assert_eq!(
            view.summary.total_cost,
            dec!(0.30) + dec!(10.50) + dec!(24.99) + dec!(13.50) + dec!(15.00) + dec!(4.00)
        );
    }
}
