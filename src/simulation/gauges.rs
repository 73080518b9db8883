use rand::Rng;
use serde::Serialize;

/// Closed band a gauge is kept within
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeBand {
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

impl GaugeBand {
    pub const fn new(min: f64, max: f64, default: f64) -> Self {
        Self { min, max, default }
    }

    /// Clamps `value` into the band; non-finite values become the default.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_finite() {
            value.clamp(self.min, self.max)
        } else {
            self.default
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        value.is_finite() && value >= self.min && value <= self.max
    }
}

pub const PATIENTS: GaugeBand = GaugeBand::new(70.0, 85.0, 77.0);
pub const PATIENTS_JITTER: f64 = 2.0;

pub const SYSTEM_LOAD: GaugeBand = GaugeBand::new(60.0, 95.0, 76.0);
pub const SYSTEM_LOAD_JITTER: f64 = 5.0;

pub const CRITICAL_ALERTS: GaugeBand = GaugeBand::new(0.0, 5.0, 2.0);
/// Chance per tick that one more critical alert is raised
pub const ALERT_PROBABILITY: f64 = 0.2;

pub const ACTIVE_DEPARTMENTS: u32 = 5;

/// The mutable slice of the digital twin
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LiveMetrics {
    pub total_patients: f64,
    /// Percent
    pub system_load: f64,
    pub critical_alerts: u32,
    pub active_departments: u32,
}

impl Default for LiveMetrics {
    fn default() -> Self {
        Self {
            total_patients: PATIENTS.default,
            system_load: SYSTEM_LOAD.default,
            critical_alerts: CRITICAL_ALERTS.default as u32,
            active_departments: ACTIVE_DEPARTMENTS,
        }
    }
}

impl LiveMetrics {
    /// Advances every gauge by one step of bounded random drift.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let patients_delta = rng.gen_range(-PATIENTS_JITTER..=PATIENTS_JITTER);
        let load_delta = rng.gen_range(-SYSTEM_LOAD_JITTER..=SYSTEM_LOAD_JITTER);
        let raise_alert = rng.gen_bool(ALERT_PROBABILITY);
        self.apply(patients_delta, load_delta, raise_alert);
    }

    /// Applies explicit deltas, clamping each gauge into its band.
    pub fn apply(&mut self, patients_delta: f64, load_delta: f64, raise_alert: bool) {
        self.total_patients = PATIENTS.clamp(PATIENTS.clamp(self.total_patients) + patients_delta);
        self.system_load = SYSTEM_LOAD.clamp(SYSTEM_LOAD.clamp(self.system_load) + load_delta);

        let alerts = f64::from(self.critical_alerts) + if raise_alert { 1.0 } else { 0.0 };
        self.critical_alerts = CRITICAL_ALERTS.clamp(alerts) as u32;
        self.active_departments = ACTIVE_DEPARTMENTS;
    }

    pub fn within_bands(&self) -> bool {
        PATIENTS.contains(self.total_patients)
            && SYSTEM_LOAD.contains(self.system_load)
            && CRITICAL_ALERTS.contains(f64::from(self.critical_alerts))
            && self.active_departments == ACTIVE_DEPARTMENTS
    }
}
