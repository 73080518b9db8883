use crate::aggregate::status::{self, DepartmentStatus, StockStatus};
use serde::Serialize;

/// Point-in-time view of a hospital department
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DepartmentSnapshot {
    pub name: String,
    current_patients: u32,
    max_capacity: u32,
    /// Medicine consumption in percent, 0 to 100
    consumption: f64,
    pub critical_medicines: Vec<String>,
}

impl DepartmentSnapshot {
    /// Clamps `current_patients` to `max_capacity` and `consumption` to `[0, 100]`.
    pub fn new(
        name: impl Into<String>,
        current_patients: u32,
        max_capacity: u32,
        consumption: f64,
        critical_medicines: Vec<String>,
    ) -> Self {
        let consumption = if consumption.is_finite() {
            consumption.clamp(0.0, 100.0)
        } else {
            0.0
        };
        Self {
            name: name.into(),
            current_patients: current_patients.min(max_capacity),
            max_capacity,
            consumption,
            critical_medicines,
        }
    }

    pub fn current_patients(&self) -> u32 {
        self.current_patients
    }

    pub fn max_capacity(&self) -> u32 {
        self.max_capacity
    }

    pub fn consumption(&self) -> f64 {
        self.consumption
    }

    pub fn occupancy(&self) -> f64 {
        status::occupancy_percentage(self.current_patients, self.max_capacity)
    }

    pub fn status(&self) -> DepartmentStatus {
        status::department_status(self.current_patients, self.max_capacity, self.consumption)
    }
}

/// Stock level of a medicine tracked by the twin
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InventoryLevel {
    pub medicine: String,
    pub current_stock: u32,
    pub reorder_threshold: u32,
    /// Units consumed per hour
    pub consumption_rate: f64,
}

impl InventoryLevel {
    pub fn status(&self) -> StockStatus {
        status::stock_status(
            f64::from(self.current_stock),
            f64::from(self.reorder_threshold),
        )
    }

    /// Hours until stock falls to the reorder threshold at the current rate.
    /// Zero when already at or below it; `None` when nothing is consumed.
    pub fn hours_until_threshold(&self) -> Option<f64> {
        let headroom = f64::from(self.current_stock) - f64::from(self.reorder_threshold);
        if headroom <= 0.0 {
            return Some(0.0);
        }
        if !self.consumption_rate.is_finite() || self.consumption_rate <= 0.0 {
            return None;
        }
        Some(headroom / self.consumption_rate)
    }
}
