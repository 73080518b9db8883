//! Simulated ledger verification.
//!
//! Records are opaque: nothing is validated and `verify` always succeeds after
//! a fixed delay. Every outcome is marked `simulated` so no caller can mistake
//! it for a real on-chain check.

use crate::{
    errors::ServiceError,
    models::{AiPrediction, Medicine},
};
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, instrument};

/// Exclusive upper bound for simulated block numbers
pub const MAX_BLOCK_NUMBER: u64 = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "kebab-case")]
pub enum ItemKind {
    Medicine,
    Prediction,
    Transaction,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationRecord {
    pub transaction_hash: String,
    pub block_number: u64,
    pub timestamp: DateTime<Utc>,
    pub item_name: String,
    pub item_kind: ItemKind,
}

impl VerificationRecord {
    pub fn for_medicine<R: Rng + ?Sized>(medicine: &Medicine, rng: &mut R) -> Self {
        Self {
            transaction_hash: medicine.provenance_hash.clone(),
            block_number: rng.gen_range(0..MAX_BLOCK_NUMBER),
            timestamp: Utc::now(),
            item_name: medicine.name.clone(),
            item_kind: ItemKind::Medicine,
        }
    }

    pub fn for_prediction<R: Rng + ?Sized>(prediction: &AiPrediction, rng: &mut R) -> Self {
        Self {
            transaction_hash: prediction.provenance_hash.clone(),
            block_number: rng.gen_range(0..MAX_BLOCK_NUMBER),
            timestamp: Utc::now(),
            item_name: format!("AI Prediction - {}", prediction.medicine),
            item_kind: ItemKind::Prediction,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct VerificationOutcome {
    pub verified: bool,
    /// Always true: no real ledger is consulted
    pub simulated: bool,
    pub record: VerificationRecord,
    pub verified_at: DateTime<Utc>,
    pub message: String,
}

#[derive(Clone)]
pub struct VerificationService {
    delay: Duration,
}

impl VerificationService {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn medicine_record(&self, medicine: &Medicine) -> VerificationRecord {
        VerificationRecord::for_medicine(medicine, &mut rand::thread_rng())
    }

    pub fn prediction_record(&self, prediction: &AiPrediction) -> VerificationRecord {
        VerificationRecord::for_prediction(prediction, &mut rand::thread_rng())
    }

    /// Waits for the configured delay, then reports success.
    #[instrument(skip(self), fields(item = %record.item_name, kind = %record.item_kind))]
    pub async fn verify(
        &self,
        record: VerificationRecord,
    ) -> Result<VerificationOutcome, ServiceError> {
        let delay = self.delay;
        crate::tracing::with_timing("ledger_verification", || async move {
            tokio::time::sleep(delay).await;
            metrics::counter!("pharmadash.verifications", 1);
            info!(hash = %record.transaction_hash, "Record verified (simulated)");
            Ok::<_, ServiceError>(VerificationOutcome {
                verified: true,
                simulated: true,
                message: format!("{} verified on the simulated ledger", record.item_name),
                verified_at: Utc::now(),
                record,
            })
        })
        .await
    }
}
