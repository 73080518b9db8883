use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Monthly demand forecast. Future months carry no actual value.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ForecastPoint {
    pub month: String,
    pub actual: Option<u32>,
    pub predicted: u32,
    /// Model confidence in percent
    pub confidence: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SupplierRecommendation {
    pub supplier: String,
    pub score: f64,
    pub reasons: Vec<String>,
    pub risk_factors: Vec<String>,
    pub predicted_savings: Decimal,
    pub confidence: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "kebab-case")]
pub enum PredictionKind {
    #[strum(serialize = "Demand Surge")]
    DemandSurge,
    #[strum(serialize = "Supply Risk")]
    SupplyRisk,
    #[strum(serialize = "Cost Optimization")]
    CostOptimization,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AiPrediction {
    pub id: u32,
    pub kind: PredictionKind,
    pub medicine: String,
    pub prediction: String,
    pub confidence: f64,
    pub action: String,
    pub provenance_hash: String,
}
