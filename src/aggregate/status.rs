//! Derived status classification.
//!
//! Every function here is total: any finite or non-finite input maps to exactly
//! one variant, so callers never need a fallback branch.

use serde::{Deserialize, Serialize};

/// Ratio of current stock to the reorder threshold below which stock is critical
pub const STOCK_CRITICAL_RATIO: f64 = 1.0;
/// Ratio below which stock is low
pub const STOCK_LOW_RATIO: f64 = 1.5;

pub const TRUST_EXCELLENT: f64 = 95.0;
pub const TRUST_GOOD: f64 = 85.0;

pub const RECOMMENDED_MIN_TRUST: f64 = 90.0;
pub const RECOMMENDED_MIN_RATING: f64 = 4.5;

/// Occupancy percentage at or above which a department is critical
pub const DEPARTMENT_CRITICAL_OCCUPANCY: f64 = 90.0;
/// Consumption percentage at or above which a department is highly active
pub const DEPARTMENT_HIGH_CONSUMPTION: f64 = 80.0;

pub const ALERT_CRITICAL_RATIO: f64 = 0.25;
pub const ALERT_HIGH_RATIO: f64 = 0.5;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "kebab-case")]
pub enum StockStatus {
    Critical,
    Low,
    Good,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "kebab-case")]
pub enum TrustTier {
    Excellent,
    Good,
    Fair,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "kebab-case")]
pub enum DepartmentStatus {
    Critical,
    #[strum(serialize = "High Activity")]
    HighActivity,
    Normal,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "kebab-case")]
pub enum AlertSeverity {
    Critical,
    High,
    Medium,
}

/// Ratio of two quantities. A zero denominator yields `+inf` for a positive
/// numerator and NaN otherwise, both of which the classifiers below accept.
pub fn ratio(current: f64, threshold: f64) -> f64 {
    current / threshold
}

pub fn stock_status_for_ratio(ratio: f64) -> StockStatus {
    if ratio.is_nan() || ratio < STOCK_CRITICAL_RATIO {
        StockStatus::Critical
    } else if ratio < STOCK_LOW_RATIO {
        StockStatus::Low
    } else {
        StockStatus::Good
    }
}

pub fn stock_status(current: f64, threshold: f64) -> StockStatus {
    stock_status_for_ratio(ratio(current, threshold))
}

pub fn trust_tier(trust_score: f64) -> TrustTier {
    if trust_score >= TRUST_EXCELLENT {
        TrustTier::Excellent
    } else if trust_score >= TRUST_GOOD {
        TrustTier::Good
    } else {
        TrustTier::Fair
    }
}

pub fn is_recommended(trust_score: f64, rating: f64) -> bool {
    trust_score >= RECOMMENDED_MIN_TRUST && rating >= RECOMMENDED_MIN_RATING
}

/// Occupancy percentage; an empty capacity counts as fully occupied.
pub fn occupancy_percentage(current: u32, max: u32) -> f64 {
    if max == 0 {
        return 100.0;
    }
    f64::from(current) / f64::from(max) * 100.0
}

pub fn department_status(current: u32, max: u32, consumption: f64) -> DepartmentStatus {
    if occupancy_percentage(current, max) >= DEPARTMENT_CRITICAL_OCCUPANCY {
        DepartmentStatus::Critical
    } else if consumption >= DEPARTMENT_HIGH_CONSUMPTION {
        DepartmentStatus::HighActivity
    } else {
        DepartmentStatus::Normal
    }
}

pub fn alert_severity(current: f64, threshold: f64) -> AlertSeverity {
    let r = ratio(current, threshold);
    if r.is_nan() || r < ALERT_CRITICAL_RATIO {
        AlertSeverity::Critical
    } else if r < ALERT_HIGH_RATIO {
        AlertSeverity::High
    } else {
        AlertSeverity::Medium
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, StockStatus::Critical)]
    #[case(0.99, StockStatus::Critical)]
    #[case(1.0, StockStatus::Low)]
    #[case(1.49, StockStatus::Low)]
    #[case(1.5, StockStatus::Good)]
    #[case(10.0, StockStatus::Good)]
    #[case(f64::NAN, StockStatus::Critical)]
    #[case(f64::INFINITY, StockStatus::Good)]
    #[case(-3.0, StockStatus::Critical)]
    fn classifies_stock_ratio(#[case] ratio: f64, #[case] expected: StockStatus) {
        assert_eq!(stock_status_for_ratio(ratio), expected);
    }

    #[rstest]
    #[case(89.0, 100.0, StockStatus::Critical)]
    #[case(1245.0, 500.0, StockStatus::Good)]
    #[case(67.0, 50.0, StockStatus::Low)]
    #[case(10.0, 0.0, StockStatus::Good)]
    #[case(0.0, 0.0, StockStatus::Critical)]
    fn classifies_stock_levels(
        #[case] current: f64,
        #[case] threshold: f64,
        #[case] expected: StockStatus,
    ) {
        assert_eq!(stock_status(current, threshold), expected);
    }

    #[rstest]
    #[case(98.0, TrustTier::Excellent)]
    #[case(95.0, TrustTier::Excellent)]
    #[case(94.9, TrustTier::Good)]
    #[case(85.0, TrustTier::Good)]
    #[case(82.0, TrustTier::Fair)]
    fn classifies_trust(#[case] score: f64, #[case] expected: TrustTier) {
        assert_eq!(trust_tier(score), expected);
    }

    #[rstest]
    #[case(98.0, 4.8, true)]
    #[case(90.0, 4.5, true)]
    #[case(93.0, 4.4, false)]
    #[case(87.0, 4.9, false)]
    fn recommends_trusted_high_rated_suppliers(
        #[case] trust: f64,
        #[case] rating: f64,
        #[case] expected: bool,
    ) {
        assert_eq!(is_recommended(trust, rating), expected);
    }

    #[rstest]
    #[case(18, 20, 78.0, DepartmentStatus::Critical)]
    #[case(24, 30, 85.0, DepartmentStatus::HighActivity)]
    #[case(8, 12, 92.0, DepartmentStatus::HighActivity)]
    #[case(12, 25, 45.0, DepartmentStatus::Normal)]
    #[case(0, 0, 0.0, DepartmentStatus::Critical)]
    fn classifies_departments(
        #[case] current: u32,
        #[case] max: u32,
        #[case] consumption: f64,
        #[case] expected: DepartmentStatus,
    ) {
        assert_eq!(department_status(current, max, consumption), expected);
    }

    #[rstest]
    #[case(12.0, 50.0, AlertSeverity::Critical)]
    #[case(45.0, 100.0, AlertSeverity::High)]
    #[case(78.0, 150.0, AlertSeverity::Medium)]
    #[case(0.0, 0.0, AlertSeverity::Critical)]
    fn classifies_alert_severity(
        #[case] current: f64,
        #[case] threshold: f64,
        #[case] expected: AlertSeverity,
    ) {
        assert_eq!(alert_severity(current, threshold), expected);
    }

    #[test]
    fn display_labels_are_human_readable() {
        assert_eq!(DepartmentStatus::HighActivity.to_string(), "High Activity");
        assert_eq!(StockStatus::Good.to_string(), "Good");
    }
}
