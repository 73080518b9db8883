//! Digital twin page: department and inventory snapshots next to the live
//! metrics published by the simulation.

use crate::{
    aggregate::{
        self, percentage,
        status::{DepartmentStatus, StockStatus},
        Percentage,
    },
    models::{DepartmentSnapshot, InventoryLevel},
    simulation::{SimulationSnapshot, SimulationSpeed},
    store::RecordStore,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, instrument};

#[derive(Debug, Clone, Serialize)]
pub struct DepartmentRow {
    pub name: String,
    pub current_patients: u32,
    pub max_capacity: u32,
    pub occupancy: Percentage,
    pub consumption: f64,
    pub status: DepartmentStatus,
    pub critical_medicines: Vec<String>,
}

impl From<&DepartmentSnapshot> for DepartmentRow {
    fn from(department: &DepartmentSnapshot) -> Self {
        Self {
            name: department.name.clone(),
            current_patients: department.current_patients(),
            max_capacity: department.max_capacity(),
            occupancy: percentage(
                f64::from(department.current_patients()),
                f64::from(department.max_capacity()),
            ),
            consumption: department.consumption(),
            status: department.status(),
            critical_medicines: department.critical_medicines.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct InventoryLevelRow {
    #[serde(flatten)]
    pub level: InventoryLevel,
    pub status: StockStatus,
    /// Current stock relative to the reorder threshold
    pub level_percentage: Percentage,
    pub hours_until_threshold: Option<f64>,
}

impl From<&InventoryLevel> for InventoryLevelRow {
    fn from(level: &InventoryLevel) -> Self {
        Self {
            status: level.status(),
            level_percentage: percentage(
                f64::from(level.current_stock),
                f64::from(level.reorder_threshold),
            ),
            hours_until_threshold: level.hours_until_threshold(),
            level: level.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TwinSummary {
    pub patients: u64,
    pub capacity: u64,
    pub occupancy: Percentage,
    pub critical_departments: usize,
    pub critical_stock: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct DigitalTwinView {
    pub live: SimulationSnapshot,
    pub speed_options: Vec<SimulationSpeed>,
    pub departments: Vec<DepartmentRow>,
    pub inventory: Vec<InventoryLevelRow>,
    pub summary: TwinSummary,
}

#[derive(Clone)]
pub struct DigitalTwinService {
    store: Arc<RecordStore>,
}

impl DigitalTwinService {
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self { store }
    }

    #[instrument(skip(self, live), fields(tick = live.tick))]
    pub fn view(&self, live: SimulationSnapshot) -> DigitalTwinView {
        let departments: Vec<DepartmentRow> = self
            .store
            .departments
            .iter()
            .map(DepartmentRow::from)
            .collect();
        let inventory: Vec<InventoryLevelRow> = self
            .store
            .inventory_levels
            .iter()
            .map(InventoryLevelRow::from)
            .collect();

        let patients = aggregate::totals(&departments, |d: &DepartmentRow| {
            u64::from(d.current_patients)
        })
        .sum;
        let capacity =
            aggregate::totals(&departments, |d: &DepartmentRow| u64::from(d.max_capacity)).sum;
        let summary = TwinSummary {
            patients,
            capacity,
            occupancy: percentage(patients as f64, capacity as f64),
            critical_departments: departments
                .iter()
                .filter(|d| d.status == DepartmentStatus::Critical)
                .count(),
            critical_stock: inventory
                .iter()
                .filter(|i| i.status == StockStatus::Critical)
                .count(),
        };
        debug!(
            critical_departments = summary.critical_departments,
            critical_stock = summary.critical_stock,
            "Digital twin view built"
        );

        DigitalTwinView {
            live,
            speed_options: SimulationSpeed::ALL.to_vec(),
            departments,
            inventory,
            summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::{LiveMetrics, RunState};

    fn live() -> SimulationSnapshot {
        SimulationSnapshot {
            state: RunState::Running,
            speed: SimulationSpeed::Normal,
            tick: 0,
            metrics: LiveMetrics::default(),
        }
    }

    #[test]
    fn departments_are_classified() {
        let view = DigitalTwinService::new(RecordStore::shared()).view(live());
        let statuses: Vec<_> = view
            .departments
            .iter()
            .map(|d| (d.name.as_str(), d.status))
            .collect();
        assert_eq!(
            statuses,
            vec![
                ("Emergency", DepartmentStatus::HighActivity),
                ("ICU", DepartmentStatus::Critical),
                ("Pediatrics", DepartmentStatus::Normal),
                ("Cardiology", DepartmentStatus::Normal),
                ("Surgery", DepartmentStatus::HighActivity),
            ]
        );
        assert!((view.departments[1].occupancy.raw - 90.0).abs() < 1e-9);
    }

    #[test]
    fn summary_counts_critical_rows() {
        let view = DigitalTwinService::new(RecordStore::shared()).view(live());
        assert_eq!(view.summary.patients, 24 + 18 + 12 + 15 + 8);
        assert_eq!(view.summary.capacity, 30 + 20 + 25 + 20 + 12);
        assert_eq!(view.summary.critical_departments, 1);
        assert_eq!(view.summary.critical_stock, 1);
        assert_eq!(view.speed_options.len(), 4);
    }

    #[test]
    fn inventory_rows_expose_levels() {
        let view = DigitalTwinService::new(RecordStore::shared()).view(live());
        let insulin = &view.inventory[1];
        assert_eq!(insulin.level.medicine, "Insulin Pen");
        assert_eq!(insulin.status, StockStatus::Critical);
        assert!((insulin.level_percentage.raw - 89.0).abs() < 1e-9);
        assert_eq!(insulin.hours_until_threshold, Some(0.0));

        let morphine = &view.inventory[3];
        assert_eq!(morphine.status, StockStatus::Low);
        assert_eq!(morphine.level_percentage.display, 100.0);
    }
}
