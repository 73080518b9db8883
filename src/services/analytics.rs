use crate::{
    aggregate,
    errors::ServiceError,
    models::{AiPrediction, ForecastPoint, SupplierRecommendation},
    store::RecordStore,
};
use rust_decimal::Decimal;
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, instrument};

#[derive(Debug, Clone, Serialize)]
pub struct ForecastAccuracy {
    /// Months with a nonzero actual value. Future months and months whose
    /// actual is zero have no percentage error and are left out.
    pub observed_months: usize,
    /// Mean absolute percentage error over the observed months
    pub mape: f64,
    pub accuracy: f64,
    pub average_confidence: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PredictionRow {
    #[serde(flatten)]
    pub prediction: AiPrediction,
    pub verification_path: String,
}

impl From<&AiPrediction> for PredictionRow {
    fn from(prediction: &AiPrediction) -> Self {
        Self {
            verification_path: format!("/analytics/predictions/{}/verification", prediction.id),
            prediction: prediction.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsView {
    pub forecast: Vec<ForecastPoint>,
    pub accuracy: ForecastAccuracy,
    pub recommendations: Vec<SupplierRecommendation>,
    pub total_predicted_savings: Decimal,
    pub predictions: Vec<PredictionRow>,
}

/// Predictive analytics page. All figures are sample data.
#[derive(Clone)]
pub struct AnalyticsService {
    store: Arc<RecordStore>,
}

impl AnalyticsService {
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self { store }
    }

    #[instrument(skip(self))]
    pub fn view(&self) -> AnalyticsView {
        let forecast = &self.store.demand_forecast;
        let accuracy = forecast_accuracy(forecast);
        info!(
            observed_months = accuracy.observed_months,
            mape = accuracy.mape,
            "Analytics view built"
        );

        AnalyticsView {
            forecast: forecast.clone(),
            accuracy,
            total_predicted_savings: aggregate::totals(
                &self.store.supplier_recommendations,
                |r: &SupplierRecommendation| r.predicted_savings,
            )
            .sum,
            recommendations: self.store.supplier_recommendations.clone(),
            predictions: self
                .store
                .ai_predictions
                .iter()
                .map(PredictionRow::from)
                .collect(),
        }
    }

    pub fn prediction(&self, id: u32) -> Result<AiPrediction, ServiceError> {
        self.store
            .prediction(id)
            .cloned()
            .ok_or_else(|| ServiceError::NotFound(format!("Prediction {} not found", id)))
    }
}

/// Error metrics over the months with an actual value. Months whose actual is
/// zero are skipped since their percentage error is undefined.
pub fn forecast_accuracy(points: &[ForecastPoint]) -> ForecastAccuracy {
    let errors: Vec<f64> = points
        .iter()
        .filter_map(|p| match p.actual {
            Some(actual) if actual > 0 => {
                let actual = f64::from(actual);
                Some((actual - f64::from(p.predicted)).abs() / actual * 100.0)
            }
            _ => None,
        })
        .collect();

    let mape = aggregate::mean(&errors, |e: &f64| *e);
    ForecastAccuracy {
        observed_months: errors.len(),
        accuracy: if errors.is_empty() {
            0.0
        } else {
            (100.0 - mape).max(0.0)
        },
        mape,
        average_confidence: aggregate::mean(points, |p: &ForecastPoint| p.confidence),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn view_links_each_prediction_to_its_verification() {
        let view = AnalyticsService::new(RecordStore::shared()).view();
        assert_eq!(view.forecast.len(), 8);
        assert_eq!(view.recommendations.len(), 3);
        assert_eq!(view.total_predicted_savings, dec!(26350));
        assert_eq!(
            view.predictions[1].verification_path,
            "/analytics/predictions/2/verification"
        );
    }

    #[test]
    fn accuracy_ignores_future_months() {
        let accuracy = forecast_accuracy(&RecordStore::shared().demand_forecast);
        assert_eq!(accuracy.observed_months, 5);
        assert!(accuracy.mape > 2.7 && accuracy.mape < 2.8, "{}", accuracy.mape);
        assert!((accuracy.accuracy + accuracy.mape - 100.0).abs() < 1e-9);
    }

    #[test]
    fn zero_actual_month_is_not_observed() {
        let point = |month: &str, actual, predicted| ForecastPoint {
            month: month.to_string(),
            actual,
            predicted,
            confidence: 90.0,
        };
        let accuracy = forecast_accuracy(&[
            point("Jan", Some(100), 90),
            point("Feb", Some(0), 40),
            point("Mar", None, 120),
        ]);
        assert_eq!(accuracy.observed_months, 1);
        assert!((accuracy.mape - 10.0).abs() < 1e-9);
        assert!((accuracy.accuracy - 90.0).abs() < 1e-9);
    }

    #[test]
    fn accuracy_of_empty_forecast_is_zero() {
        let accuracy = forecast_accuracy(&[]);
        assert_eq!(accuracy.observed_months, 0);
        assert_eq!(accuracy.mape, 0.0);
        assert_eq!(accuracy.accuracy, 0.0);
    }

    #[test]
    fn unknown_prediction_is_not_found() {
        let service = AnalyticsService::new(RecordStore::shared());
        assert_eq!(service.prediction(3).unwrap().medicine, "Amoxicillin 250mg");
        assert!(matches!(service.prediction(9), Err(ServiceError::NotFound(_))));
    }
}
