use crate::aggregate::status::{self, AlertSeverity};
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UsageTrendPoint {
    pub month: String,
    pub usage: u32,
    pub prediction: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SupplierShare {
    pub supplier: String,
    /// Percent of total purchasing volume
    pub share: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MonthlyAmount {
    pub month: String,
    pub amount: Decimal,
}

/// Medicine running short on the dashboard
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ShortageAlert {
    pub medicine: String,
    pub current: u32,
    pub threshold: u32,
}

impl ShortageAlert {
    pub fn severity(&self) -> AlertSeverity {
        status::alert_severity(f64::from(self.current), f64::from(self.threshold))
    }
}
