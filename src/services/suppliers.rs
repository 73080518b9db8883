use crate::{
    aggregate::{self, status::TrustTier},
    filter::{self, FilterCriteria},
    models::Supplier,
    services::empty_state,
    store::RecordStore,
};
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};

pub const EMPTY_STATE: &str = "No suppliers found matching your criteria";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SupplierFilter {
    pub search: Option<String>,
    /// `recommended`, `other` or `all`
    pub recommended: Option<String>,
    /// Trust tier slug, or `all`
    pub trust: Option<String>,
}

impl SupplierFilter {
    pub fn criteria(&self) -> FilterCriteria {
        let recommended = self.recommended.as_deref().map(|value| {
            match value.trim().to_ascii_lowercase().as_str() {
                "true" | "yes" => "recommended",
                "false" | "no" => "other",
                _ => value,
            }
        });
        FilterCriteria::new()
            .search(self.search.as_deref())
            .field("recommended", recommended)
            .field("trust", self.trust.as_deref())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SupplierRow {
    #[serde(flatten)]
    pub supplier: Supplier,
    pub recommended: bool,
    pub trust_tier: TrustTier,
}

impl From<&Supplier> for SupplierRow {
    fn from(supplier: &Supplier) -> Self {
        Self {
            recommended: supplier.is_recommended(),
            trust_tier: supplier.trust_tier(),
            supplier: supplier.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SupplierSummary {
    pub matched: usize,
    pub recommended: usize,
    pub other: usize,
    pub average_trust: f64,
    pub average_rating: f64,
    pub total_contracts: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SuppliersView {
    /// Recommended suppliers, listed first on the page
    pub recommended: Vec<SupplierRow>,
    pub other: Vec<SupplierRow>,
    pub summary: SupplierSummary,
    pub empty_state: Option<String>,
}

#[derive(Clone)]
pub struct SupplierService {
    store: Arc<RecordStore>,
}

impl SupplierService {
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self { store }
    }

    #[instrument(skip(self))]
    pub fn list(&self, filter: &SupplierFilter) -> SuppliersView {
        let matched = filter::apply(
            &self.store.suppliers,
            &filter.criteria(),
            Local::now().naive_local(),
        );

        let (recommended, other): (Vec<SupplierRow>, Vec<SupplierRow>) = matched
            .iter()
            .map(|s| SupplierRow::from(*s))
            .partition(|row| row.recommended);

        let summary = SupplierSummary {
            matched: matched.len(),
            recommended: recommended.len(),
            other: other.len(),
            average_trust: aggregate::mean(matched.iter().copied(), |s: &Supplier| s.trust_score),
            average_rating: aggregate::mean(matched.iter().copied(), |s: &Supplier| s.rating),
            total_contracts: aggregate::totals(matched.iter().copied(), |s: &Supplier| {
                u64::from(s.total_contracts)
            })
            .sum,
        };
        info!(
            matched = summary.matched,
            recommended = summary.recommended,
            "Suppliers view built"
        );

        SuppliersView {
            recommended,
            other,
            empty_state: empty_state(summary.matched, EMPTY_STATE),
            summary,
        }
    }
}
