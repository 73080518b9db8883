use crate::{
    aggregate::{self, percentage, status::AlertSeverity, Percentage},
    models::{Medicine, MonthlyAmount, ShortageAlert, SupplierShare, UsageTrendPoint},
    store::RecordStore,
};
use rust_decimal::Decimal;
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, instrument};

#[derive(Debug, Clone, Serialize)]
pub struct DashboardKpis {
    /// Units in stock across all medicines
    pub total_medicine_units: u64,
    pub active_suppliers: usize,
    /// Spend of the most recent month in the expense series
    pub monthly_expenses: Decimal,
    pub shortage_alerts: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ShortageRow {
    #[serde(flatten)]
    pub alert: ShortageAlert,
    pub severity: AlertSeverity,
    /// Stock as a share of the threshold
    pub level: Percentage,
}

impl From<&ShortageAlert> for ShortageRow {
    fn from(alert: &ShortageAlert) -> Self {
        Self {
            severity: alert.severity(),
            level: percentage(f64::from(alert.current), f64::from(alert.threshold)),
            alert: alert.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub kpis: DashboardKpis,
    pub usage_trend: Vec<UsageTrendPoint>,
    pub supplier_shares: Vec<SupplierShare>,
    pub monthly_expenses: Vec<MonthlyAmount>,
    pub shortages: Vec<ShortageRow>,
}

#[derive(Clone)]
pub struct DashboardService {
    store: Arc<RecordStore>,
}

impl DashboardService {
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self { store }
    }

    #[instrument(skip(self))]
    pub fn view(&self) -> DashboardView {
        let store = &self.store;
        let kpis = DashboardKpis {
            total_medicine_units: aggregate::totals(&store.medicines, |m: &Medicine| {
                u64::from(m.stock)
            })
            .sum,
            active_suppliers: store.suppliers.len(),
            monthly_expenses: store
                .monthly_expenses
                .last()
                .map(|m| m.amount)
                .unwrap_or_default(),
            shortage_alerts: store.shortage_alerts.len(),
        };
        info!(
            shortages = kpis.shortage_alerts,
            units = kpis.total_medicine_units,
            "Dashboard view built"
        );

        DashboardView {
            kpis,
            usage_trend: store.usage_trend.clone(),
            supplier_shares: store.supplier_shares.clone(),
            monthly_expenses: store.monthly_expenses.clone(),
            shortages: store.shortage_alerts.iter().map(ShortageRow::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn kpis_are_derived_from_the_store() {
        let view = DashboardService::new(RecordStore::shared()).view();
        assert_eq!(view.kpis.total_medicine_units, 4695);
        assert_eq!(view.kpis.active_suppliers, 5);
        assert_eq!(view.kpis.monthly_expenses, dec!(58000));
        assert_eq!(view.kpis.shortage_alerts, 3);
        assert_eq!(view.usage_trend.len(), 6);
    }

    #[test]
    fn shortages_carry_severity_and_level() {
        let view = DashboardService::new(RecordStore::shared()).view();
        let severities: Vec<_> = view.shortages.iter().map(|s| s.severity).collect();
        assert_eq!(
            severities,
            vec![
                AlertSeverity::High,
                AlertSeverity::Medium,
                AlertSeverity::Critical
            ]
        );
        assert_eq!(view.shortages[0].level.display, 45.0);
        assert_eq!(view.shortages[2].level.raw, 24.0);
    }

    #[test]
    fn empty_store_has_zero_kpis() {
        let view = DashboardService::new(Arc::new(RecordStore::default())).view();
        assert_eq!(view.kpis.total_medicine_units, 0);
        assert_eq!(view.kpis.monthly_expenses, Decimal::ZERO);
        assert!(view.shortages.is_empty());
    }
}
