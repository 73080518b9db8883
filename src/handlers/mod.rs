pub mod analytics;
pub mod common;
pub mod dashboard;
pub mod expenses;
pub mod inventory;
pub mod simulation;
pub mod suppliers;
pub mod usage_logs;
pub mod verification;

use crate::{
    config::AppConfig,
    services::{
        analytics::AnalyticsService, dashboard::DashboardService,
        digital_twin::DigitalTwinService, expenses::ExpenseService, inventory::InventoryService,
        suppliers::SupplierService, usage_logs::UsageLogService,
        verification::VerificationService,
    },
    store::RecordStore,
};
use std::sync::Arc;

// Re-export AppState so handler modules can import it as crate::handlers::AppState
pub use crate::AppState;

/// Page services used by HTTP handlers
#[derive(Clone)]
pub struct AppServices {
    pub dashboard: Arc<DashboardService>,
    pub inventory: Arc<InventoryService>,
    pub suppliers: Arc<SupplierService>,
    pub usage_logs: Arc<UsageLogService>,
    pub expenses: Arc<ExpenseService>,
    pub analytics: Arc<AnalyticsService>,
    pub digital_twin: Arc<DigitalTwinService>,
    pub verification: Arc<VerificationService>,
}

impl AppServices {
    /// Build every page service over one shared record store.
    pub fn new(store: Arc<RecordStore>, config: &AppConfig) -> Self {
        Self {
            dashboard: Arc::new(DashboardService::new(store.clone())),
            inventory: Arc::new(InventoryService::new(store.clone())),
            suppliers: Arc::new(SupplierService::new(store.clone())),
            usage_logs: Arc::new(UsageLogService::new(store.clone())),
            expenses: Arc::new(ExpenseService::new(
                store.clone(),
                config.default_currency.clone(),
            )),
            analytics: Arc::new(AnalyticsService::new(store.clone())),
            digital_twin: Arc::new(DigitalTwinService::new(store)),
            verification: Arc::new(VerificationService::new(config.verification_delay())),
        }
    }
}
