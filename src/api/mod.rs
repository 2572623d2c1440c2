//! Typed client for the Habits backend API.
//!
//! Thin JSON-over-HTTP wrapper: habit and user catalogs, the combined
//! statistics snapshot, and the habit-logging write path. Transport goes
//! through the [`HttpClient`] seam so tests can run against
//! [`crate::adapters::MockHttpClient`].

use std::collections::HashMap;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::adapters::ReqwestHttpClient;
use crate::models::{CombinedStatistics, Habit, LoggedHabit, User};
use crate::traits::{Headers, HttpClient, HttpError, Response};

/// Default base URL for a locally running Habits server.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Error type for Habits API operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),
    /// JSON deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Server returned an error status
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },
}

/// Read access to the statistics snapshot.
///
/// Object-safe so the refresh pipeline can hold production and test clients
/// behind one `Arc<dyn StatisticsProvider>`. Failure is non-fatal by
/// contract: callers degrade to an empty snapshot for the cycle.
#[async_trait]
pub trait StatisticsProvider: Send + Sync {
    async fn fetch_combined_statistics(&self) -> Result<CombinedStatistics, ApiError>;
}

/// Client for the Habits backend API.
pub struct HabitServiceClient<C = ReqwestHttpClient> {
    /// Base URL for the service
    pub base_url: String,
    http: C,
}

impl HabitServiceClient<ReqwestHttpClient> {
    /// Create a client for the default base URL.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_string())
    }

    /// Create a client for a custom base URL.
    pub fn with_base_url(base_url: String) -> Self {
        Self::with_http(base_url, ReqwestHttpClient::new())
    }
}

impl Default for HabitServiceClient<ReqwestHttpClient> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: HttpClient> HabitServiceClient<C> {
    /// Create a client over an arbitrary HTTP implementation.
    pub fn with_http(base_url: String, http: C) -> Self {
        Self { base_url, http }
    }

    /// Fetch the habit catalog, keyed by habit name.
    pub async fn fetch_habits(&self) -> Result<HashMap<String, Habit>, ApiError> {
        self.get_json("/habits").await
    }

    /// Fetch the user catalog, keyed by user id.
    pub async fn fetch_users(&self) -> Result<HashMap<String, User>, ApiError> {
        self.get_json("/users").await
    }

    /// Fetch the combined per-user and per-habit statistics snapshot.
    pub async fn fetch_combined_statistics(&self) -> Result<CombinedStatistics, ApiError> {
        self.get_json("/combinedStats").await
    }

    /// Record one habit-logging event.
    pub async fn log_habit(&self, logged: &LoggedHabit) -> Result<(), ApiError> {
        let url = format!("{}/loggedHabit", self.base_url);
        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        let body = serde_json::to_string(logged)?;

        let response = self.http.post(&url, &body, &headers).await?;
        if !response.is_success() {
            return Err(Self::server_error(response));
        }
        Ok(())
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.http.get(&url, &Headers::new()).await?;
        if !response.is_success() {
            return Err(Self::server_error(response));
        }
        Ok(response.json()?)
    }

    fn server_error(response: Response) -> ApiError {
        ApiError::Server {
            status: response.status,
            message: response
                .text()
                .unwrap_or_else(|_| "Unknown error".to_string()),
        }
    }
}

#[async_trait]
impl<C: HttpClient> StatisticsProvider for HabitServiceClient<C> {
    async fn fetch_combined_statistics(&self) -> Result<CombinedStatistics, ApiError> {
        HabitServiceClient::fetch_combined_statistics(self).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use bytes::Bytes;
    use chrono::Utc;

    fn client_with(mock: MockHttpClient) -> HabitServiceClient<MockHttpClient> {
        HabitServiceClient::with_http("http://localhost:8080".to_string(), mock)
    }

    #[tokio::test]
    async fn test_fetch_habits_decodes_catalog() {
        let mock = MockHttpClient::new();
        mock.set_json_response(
            "http://localhost:8080/habits",
            r#"{"Running": {"name": "Running", "category": {"name": "Fitness", "color": {"h": 0.1, "s": 0.5, "b": 0.9}}, "info": "Go for a run"}}"#,
        );
        let client = client_with(mock);

        let habits = client.fetch_habits().await.unwrap();
        assert_eq!(habits.len(), 1);
        assert_eq!(habits["Running"].category.name, "Fitness");
    }

    #[tokio::test]
    async fn test_fetch_users_decodes_catalog() {
        let mock = MockHttpClient::new();
        mock.set_json_response(
            "http://localhost:8080/users",
            r#"{"u1": {"id": "u1", "name": "Ana"}}"#,
        );
        let client = client_with(mock);

        let users = client.fetch_users().await.unwrap();
        assert_eq!(users["u1"].name, "Ana");
    }

    #[tokio::test]
    async fn test_fetch_combined_statistics() {
        let mock = MockHttpClient::new();
        mock.set_json_response(
            "http://localhost:8080/combinedStats",
            r#"{"userStatistics": [], "habitStatistics": []}"#,
        );
        let client = client_with(mock);

        let stats = StatisticsProvider::fetch_combined_statistics(&client)
            .await
            .unwrap();
        assert_eq!(stats, CombinedStatistics::default());
    }

    #[tokio::test]
    async fn test_server_status_maps_to_api_error() {
        let mock = MockHttpClient::new();
        mock.set_response(
            "http://localhost:8080/combinedStats",
            MockResponse::Success(crate::traits::Response::new(500, Bytes::from("boom"))),
        );
        let client = client_with(mock);

        let err = client.fetch_combined_statistics().await.unwrap_err();
        match err {
            ApiError::Server { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("expected server error, got {other}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_maps_to_json_error() {
        let mock = MockHttpClient::new();
        mock.set_json_response("http://localhost:8080/combinedStats", "not json");
        let client = client_with(mock);

        let err = client.fetch_combined_statistics().await.unwrap_err();
        assert!(matches!(err, ApiError::Json(_)));
    }

    #[tokio::test]
    async fn test_log_habit_posts_json_payload() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::Success(crate::traits::Response::new(
            200,
            Bytes::new(),
        )));
        let client = client_with(mock.clone());

        let logged = LoggedHabit {
            user_id: "u1".to_string(),
            habit_name: "Running".to_string(),
            timestamp: Utc::now(),
        };
        client.log_habit(&logged).await.unwrap();

        let requests = mock.get_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[0].url, "http://localhost:8080/loggedHabit");
        let body = requests[0].body.as_deref().unwrap();
        assert!(body.contains(r#""habitName":"Running""#));
        assert!(body.contains(r#""userId":"u1""#));
    }
}
