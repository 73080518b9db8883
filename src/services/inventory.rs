use crate::{
    aggregate::{self, partition_sum, Totals},
    errors::ServiceError,
    filter::{self, FilterCriteria},
    models::{Availability, Medicine},
    services::{empty_state, Page, PageRequest},
    store::RecordStore,
};
use chrono::Local;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{info, instrument};

pub const EMPTY_STATE: &str = "No medicines found matching your criteria";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct InventoryFilter {
    pub search: Option<String>,
    /// Availability slug, or `all`
    pub status: Option<String>,
}

impl InventoryFilter {
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::new()
            .search(self.search.as_deref())
            .field("availability", self.status.as_deref())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MedicineRow {
    #[serde(flatten)]
    pub medicine: Medicine,
    pub verification_path: String,
}

impl From<&Medicine> for MedicineRow {
    fn from(medicine: &Medicine) -> Self {
        Self {
            verification_path: format!("/inventory/{}/verification", medicine.id),
            medicine: medicine.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct InventorySummary {
    pub matched: usize,
    pub total_units: u64,
    /// Sum of unit price times stock
    pub stock_value: Decimal,
    pub by_availability: BTreeMap<Availability, usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InventoryView {
    #[serde(flatten)]
    pub page: Page<MedicineRow>,
    pub summary: InventorySummary,
    pub status_options: Vec<Availability>,
    pub empty_state: Option<String>,
}

/// Medicine inventory page
#[derive(Clone)]
pub struct InventoryService {
    store: Arc<RecordStore>,
}

impl InventoryService {
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self { store }
    }

    #[instrument(skip(self))]
    pub fn list(&self, filter: &InventoryFilter, page: PageRequest) -> InventoryView {
        let criteria = filter.criteria();
        let matched = filter::apply(
            &self.store.medicines,
            &criteria,
            Local::now().naive_local(),
        );

        let Totals {
            count,
            sum: total_units,
        } = aggregate::totals(matched.iter().copied(), |m: &Medicine| u64::from(m.stock));
        let stock_value = aggregate::totals(matched.iter().copied(), |m: &Medicine| {
            m.price * Decimal::from(m.stock)
        })
        .sum;
        let by_availability = partition_sum(
            matched.iter().copied(),
            &Availability::all(),
            |m: &Medicine| m.availability,
            |_| 1usize,
        );

        let rows: Vec<MedicineRow> = matched.iter().map(|m| MedicineRow::from(*m)).collect();
        info!(matched = count, "Inventory view built");

        InventoryView {
            page: page.slice(&rows),
            summary: InventorySummary {
                matched: count,
                total_units,
                stock_value,
                by_availability,
            },
            status_options: Availability::all(),
            empty_state: empty_state(count, EMPTY_STATE),
        }
    }

    pub fn medicine(&self, id: u32) -> Result<Medicine, ServiceError> {
        self.store
            .medicine(id)
            .cloned()
            .ok_or_else(|| ServiceError::NotFound(format!("Medicine {} not found", id)))
    }
}
