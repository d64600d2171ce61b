//! Iris Backend HTTP Client
//!
//! Client for communicating with the iris inference server: a quick
//! liveness probe against `/` and the prediction call on `/predict`.

use std::time::Duration;

use iris_core::{ClassId, FeatureRecord};
use serde::Deserialize;
use thiserror::Error;

/// Default backend URL
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Timeout for prediction calls
const PREDICT_TIMEOUT: Duration = Duration::from_secs(10);
/// Timeout for the liveness probe
const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Successful prediction response
#[derive(Debug, Clone, Deserialize)]
struct PredictResponse {
    response: ClassId,
}

/// Error body sent by the server on failed requests
#[derive(Debug, Clone, Deserialize)]
struct ErrorBody {
    detail: String,
}

/// Failures surfaced by a prediction call.
///
/// A reply with an error status and a failure to get any reply at all
/// are reported to the user differently, so they stay distinct here.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Backend replied with a non-success status code
    #[error("backend returned status {status}")]
    Status {
        status: reqwest::StatusCode,
        /// Error detail from the response body, when one was readable
        detail: Option<String>,
    },

    /// Backend unreachable, or its reply could not be read
    #[error("{0}")]
    Transport(String),
}

/// Iris backend API client
#[derive(Debug, Clone)]
pub struct BackendClient {
    base_url: String,
    client: reqwest::Client,
}

impl BackendClient {
    /// Create a new client for the given base URL
    pub fn with_url(url: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(PREDICT_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Get the base URL
    pub fn url(&self) -> &str {
        &self.base_url
    }

    /// Check if the backend is online (quick ping against the health
    /// endpoint). Transport failures and error statuses both report
    /// offline rather than raising.
    pub async fn is_online(&self) -> bool {
        let client = reqwest::Client::builder()
            .timeout(PROBE_TIMEOUT)
            .build()
            .unwrap_or_else(|_| self.client.clone());

        let url = format!("{}/", self.base_url);
        match client.get(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }

    /// Request a prediction for one measurement record
    pub async fn predict(&self, record: &FeatureRecord) -> Result<ClassId, ApiError> {
        let url = format!("{}/predict", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(record)
            .send()
            .await
            .map_err(|e| ApiError::Transport(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .json::<ErrorBody>()
                .await
                .ok()
                .map(|body| body.detail);
            return Err(ApiError::Status { status, detail });
        }

        let body: PredictResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Transport(format!("Invalid response: {}", e)))?;

        Ok(body.response)
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use serde_json::json;

    use super::*;

    /// Serve a stub backend on an ephemeral port.
    async fn spawn_backend(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    /// Address nothing is listening on.
    async fn dead_url() -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{}", addr)
    }

    fn sample_record() -> FeatureRecord {
        FeatureRecord::new(5.1, 3.5, 1.4, 0.2)
    }

    #[test]
    fn test_with_url_trims_trailing_slash() {
        let client = BackendClient::with_url("http://localhost:8000/");
        assert_eq!(client.url(), "http://localhost:8000");
    }

    #[tokio::test]
    async fn test_is_online_when_healthy() {
        let app = Router::new().route("/", get(|| async { Json(json!({"status": "healthy"})) }));
        let url = spawn_backend(app).await;

        assert!(BackendClient::with_url(&url).is_online().await);
    }

    #[tokio::test]
    async fn test_is_online_false_on_error_status() {
        let app = Router::new().route(
            "/",
            get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down") }),
        );
        let url = spawn_backend(app).await;

        assert!(!BackendClient::with_url(&url).is_online().await);
    }

    #[tokio::test]
    async fn test_is_online_false_when_unreachable() {
        let url = dead_url().await;
        assert!(!BackendClient::with_url(&url).is_online().await);
    }

    #[tokio::test]
    async fn test_predict_returns_class_id() {
        let app = Router::new().route(
            "/predict",
            post(|Json(record): Json<FeatureRecord>| async move {
                assert_eq!(record.to_vector(), [5.1, 3.5, 1.4, 0.2]);
                Json(json!({"response": 1}))
            }),
        );
        let url = spawn_backend(app).await;

        let class_id = BackendClient::with_url(&url)
            .predict(&sample_record())
            .await
            .unwrap();
        assert_eq!(class_id, 1);
    }

    #[tokio::test]
    async fn test_predict_passes_through_unrecognized_id() {
        let app = Router::new().route(
            "/predict",
            post(|| async { Json(json!({"response": 7})) }),
        );
        let url = spawn_backend(app).await;

        let class_id = BackendClient::with_url(&url)
            .predict(&sample_record())
            .await
            .unwrap();
        assert_eq!(class_id, 7);
    }

    #[tokio::test]
    async fn test_predict_maps_error_status() {
        let app = Router::new().route(
            "/predict",
            post(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"detail": "Inference error: bad model"})),
                )
            }),
        );
        let url = spawn_backend(app).await;

        let err = BackendClient::with_url(&url)
            .predict(&sample_record())
            .await
            .unwrap_err();
        match err {
            ApiError::Status { status, detail } => {
                assert_eq!(status, reqwest::StatusCode::INTERNAL_SERVER_ERROR);
                assert_eq!(detail.as_deref(), Some("Inference error: bad model"));
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_predict_maps_transport_failure() {
        let url = dead_url().await;
        let err = BackendClient::with_url(&url)
            .predict(&sample_record())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }

    #[tokio::test]
    async fn test_predict_status_without_json_body() {
        let app = Router::new().route(
            "/predict",
            post(|| async { (StatusCode::BAD_GATEWAY, "plain text") }),
        );
        let url = spawn_backend(app).await;

        let err = BackendClient::with_url(&url)
            .predict(&sample_record())
            .await
            .unwrap_err();
        match err {
            ApiError::Status { status, detail } => {
                assert_eq!(status, reqwest::StatusCode::BAD_GATEWAY);
                assert!(detail.is_none());
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }
}
