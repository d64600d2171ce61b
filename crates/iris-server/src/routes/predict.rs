//! Prediction endpoint.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use iris_core::{ClassId, FeatureRecord};
use serde::Serialize;
use tracing::{error, warn};

use crate::error::ApiError;
use crate::state::SharedState;

/// Successful prediction response
#[derive(Debug, Serialize)]
pub struct PredictResponse {
    /// Predicted class id; the label mapping is the caller's concern
    pub response: ClassId,
}

/// POST /predict - classify one measurement record.
///
/// The payload must carry all four measurements as numbers; anything else
/// is rejected before the classifier runs. The classifier contract is
/// batch-in/batch-out, so the record is submitted as a one-row batch and
/// the first output row is the prediction.
pub async fn predict_iris(
    State(state): State<SharedState>,
    payload: Result<Json<FeatureRecord>, JsonRejection>,
) -> Result<Json<PredictResponse>, ApiError> {
    let Json(record) = payload.map_err(|rejection| {
        warn!("Rejected prediction payload: {}", rejection.body_text());
        ApiError::from(rejection)
    })?;

    let batch = vec![record.to_vector()];
    let predictions = state.classifier.infer(&batch).map_err(|e| {
        error!("Inference failed: {}", e);
        ApiError::internal(e.to_string())
    })?;

    let class_id = predictions.first().copied().ok_or_else(|| {
        error!("Classifier returned an empty batch");
        ApiError::internal("classifier returned an empty batch")
    })?;

    Ok(Json(PredictResponse { response: class_id }))
}
