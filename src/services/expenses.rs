use crate::{
    aggregate::{self, partition_sum, percentage, Percentage},
    filter::{self, FilterCriteria},
    models::{CategoryShare, Expense, ExpenseCategory, ExpenseStatus},
    services::{empty_state, Page, PageRequest},
    store::RecordStore,
};
use chrono::Local;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{info, instrument};

pub const EMPTY_STATE: &str = "No expenses found matching your criteria";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExpenseFilter {
    pub search: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
}

impl ExpenseFilter {
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::new()
            .search(self.search.as_deref())
            .field("category", self.category.as_deref())
            .field("status", self.status.as_deref())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ExpenseSummary {
    pub count: usize,
    pub total: Decimal,
    pub paid: Decimal,
    pub pending: Decimal,
    pub by_category: BTreeMap<ExpenseCategory, Decimal>,
    pub currency: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BudgetRow {
    pub month: String,
    pub amount: Decimal,
    pub budget: Decimal,
    /// Spend as a share of budget
    pub utilization: Percentage,
    pub over_budget: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExpensesView {
    #[serde(flatten)]
    pub page: Page<Expense>,
    pub summary: ExpenseSummary,
    pub budget_trend: Vec<BudgetRow>,
    pub category_shares: Vec<CategoryShare>,
    pub category_options: Vec<ExpenseCategory>,
    pub status_options: Vec<ExpenseStatus>,
    pub empty_state: Option<String>,
}

#[derive(Clone)]
pub struct ExpenseService {
    store: Arc<RecordStore>,
    currency: String,
}

impl ExpenseService {
    pub fn new(store: Arc<RecordStore>, currency: impl Into<String>) -> Self {
        Self {
            store,
            currency: currency.into(),
        }
    }

    #[instrument(skip(self))]
    pub fn list(&self, filter: &ExpenseFilter, page: PageRequest) -> ExpensesView {
        let matched = filter::apply(
            &self.store.expenses,
            &filter.criteria(),
            Local::now().naive_local(),
        );

        let totals = aggregate::totals(matched.iter().copied(), |e: &Expense| e.amount);
        let by_status = partition_sum(
            matched.iter().copied(),
            &ExpenseStatus::all(),
            |e: &Expense| e.status,
            |e: &Expense| e.amount,
        );
        let by_category = partition_sum(
            matched.iter().copied(),
            &ExpenseCategory::all(),
            |e: &Expense| e.category,
            |e: &Expense| e.amount,
        );

        let summary = ExpenseSummary {
            count: totals.count,
            total: totals.sum,
            paid: by_status
                .get(&ExpenseStatus::Paid)
                .copied()
                .unwrap_or_default(),
            pending: by_status
                .get(&ExpenseStatus::Pending)
                .copied()
                .unwrap_or_default(),
            by_category,
            currency: self.currency.clone(),
        };
        info!(matched = summary.count, total = %summary.total, "Expenses view built");

        let rows: Vec<Expense> = matched.into_iter().cloned().collect();
        ExpensesView {
            page: page.slice(&rows),
            empty_state: empty_state(summary.count, EMPTY_STATE),
            summary,
            budget_trend: self.budget_trend(),
            category_shares: self.store.category_shares.clone(),
            category_options: ExpenseCategory::all(),
            status_options: ExpenseStatus::all(),
        }
    }

    fn budget_trend(&self) -> Vec<BudgetRow> {
        self.store
            .budget_trend
            .iter()
            .map(|point| BudgetRow {
                month: point.month.clone(),
                amount: point.amount,
                budget: point.budget,
                utilization: percentage(
                    point.amount.to_f64().unwrap_or_default(),
                    point.budget.to_f64().unwrap_or_default(),
                ),
                over_budget: point.amount > point.budget,
            })
            .collect()
    }
}
