use crate::filter::Filterable;
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use strum::{EnumIter, IntoEnumIterator};

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    Serialize,
    Deserialize,
    strum::Display,
)]
#[serde(rename_all = "kebab-case")]
pub enum ExpenseCategory {
    #[strum(serialize = "Medicine Purchase")]
    MedicinePurchase,
    Equipment,
    Maintenance,
    Staff,
    Utilities,
    Other,
}

impl ExpenseCategory {
    pub fn all() -> Vec<ExpenseCategory> {
        ExpenseCategory::iter().collect()
    }
}

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    Serialize,
    Deserialize,
    strum::Display,
)]
#[serde(rename_all = "kebab-case")]
pub enum ExpenseStatus {
    Paid,
    Pending,
}

impl ExpenseStatus {
    pub fn all() -> Vec<ExpenseStatus> {
        ExpenseStatus::iter().collect()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Expense {
    pub id: u32,
    pub date: NaiveDate,
    pub category: ExpenseCategory,
    pub amount: Decimal,
    pub description: String,
    pub vendor: String,
    pub department: String,
    pub status: ExpenseStatus,
}

impl Filterable for Expense {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.description.as_str(),
            self.vendor.as_str(),
            self.department.as_str(),
        ]
    }

    fn field_value(&self, field: &str) -> Option<Cow<'_, str>> {
        match field {
            "category" => Some(Cow::Owned(self.category.to_string())),
            "status" => Some(Cow::Owned(self.status.to_string())),
            _ => None,
        }
    }

    fn timestamp(&self) -> Option<NaiveDateTime> {
        self.date.and_hms_opt(0, 0, 0)
    }
}

/// Spend against budget for one month
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BudgetTrendPoint {
    pub month: String,
    pub amount: Decimal,
    pub budget: Decimal,
}

/// Share of spend per category, in percent
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CategoryShare {
    pub category: ExpenseCategory,
    pub share: f64,
}
