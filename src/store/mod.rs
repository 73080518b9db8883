//! Immutable record store.
//!
//! Built once from the sample literals in [`seed`] and shared read-only by
//! every page service.

pub mod seed;

use crate::models::{
    AiPrediction, BudgetTrendPoint, CategoryShare, DepartmentSnapshot, Expense, ForecastPoint,
    InventoryLevel, Medicine, MonthlyAmount, ShortageAlert, Supplier, SupplierRecommendation,
    SupplierShare, UsageLogEntry, UsageTrendPoint,
};
use once_cell::sync::Lazy;
use std::sync::Arc;

static SAMPLE_STORE: Lazy<Arc<RecordStore>> = Lazy::new(|| Arc::new(RecordStore::sample()));

#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    pub medicines: Vec<Medicine>,
    pub suppliers: Vec<Supplier>,
    pub usage_logs: Vec<UsageLogEntry>,
    pub expenses: Vec<Expense>,
    pub departments: Vec<DepartmentSnapshot>,
    pub inventory_levels: Vec<InventoryLevel>,
    pub demand_forecast: Vec<ForecastPoint>,
    pub supplier_recommendations: Vec<SupplierRecommendation>,
    pub ai_predictions: Vec<AiPrediction>,
    pub usage_trend: Vec<UsageTrendPoint>,
    pub supplier_shares: Vec<SupplierShare>,
    pub monthly_expenses: Vec<MonthlyAmount>,
    pub shortage_alerts: Vec<ShortageAlert>,
    pub budget_trend: Vec<BudgetTrendPoint>,
    pub category_shares: Vec<CategoryShare>,
}

impl RecordStore {
    /// Store populated with the built-in sample data
    pub fn sample() -> Self {
        Self {
            medicines: seed::medicines(),
            suppliers: seed::suppliers(),
            usage_logs: seed::usage_logs(),
            expenses: seed::expenses(),
            departments: seed::departments(),
            inventory_levels: seed::inventory_levels(),
            demand_forecast: seed::demand_forecast(),
            supplier_recommendations: seed::supplier_recommendations(),
            ai_predictions: seed::ai_predictions(),
            usage_trend: seed::usage_trend(),
            supplier_shares: seed::supplier_shares(),
            monthly_expenses: seed::monthly_expenses(),
            shortage_alerts: seed::shortage_alerts(),
            budget_trend: seed::budget_trend(),
            category_shares: seed::category_shares(),
        }
    }

    /// Process-wide shared sample store
    pub fn shared() -> Arc<RecordStore> {
        Arc::clone(&SAMPLE_STORE)
    }

    pub fn medicine(&self, id: u32) -> Option<&Medicine> {
        self.medicines.iter().find(|m| m.id == id)
    }

    pub fn prediction(&self, id: u32) -> Option<&AiPrediction> {
        self.ai_predictions.iter().find(|p| p.id == id)
    }
}
