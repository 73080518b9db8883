// Catalogue records
pub mod medicine;
pub mod supplier;

// Ledgers
pub mod expense;
pub mod usage_log;

// Derived and sample series
pub mod analytics;
pub mod dashboard;
pub mod twin;

pub use analytics::{AiPrediction, ForecastPoint, PredictionKind, SupplierRecommendation};
pub use dashboard::{MonthlyAmount, ShortageAlert, SupplierShare, UsageTrendPoint};
pub use expense::{BudgetTrendPoint, CategoryShare, Expense, ExpenseCategory, ExpenseStatus};
pub use medicine::{Availability, Medicine};
pub use supplier::Supplier;
pub use twin::{DepartmentSnapshot, InventoryLevel};
pub use usage_log::UsageLogEntry;
