use serde::Deserialize;
use std::sync::Arc;

use crate::{
    client::{HttpGet, ReqwestHttp},
    model::IssPosition,
};

use super::ApiError;

/// NORAD catalog id of the International Space Station.
pub const ISS_NORAD_ID: u32 = 25544;

const BASE_URL: &str = "https://api.wheretheiss.at/v1/satellites";

/// Client for the wheretheiss.at satellite position API.
///
/// No credentials required; the endpoint is keyed by NORAD catalog id.
#[derive(Debug, Clone)]
pub struct WhereTheIssApi {
    satellite_id: u32,
    http: Arc<dyn HttpGet>,
}

impl WhereTheIssApi {
    pub fn new(satellite_id: u32) -> Self {
        Self::with_http(satellite_id, Arc::new(ReqwestHttp::new()))
    }

    pub fn with_http(satellite_id: u32, http: Arc<dyn HttpGet>) -> Self {
        Self { satellite_id, http }
    }

    pub fn satellite_id(&self) -> u32 {
        self.satellite_id
    }

    fn url(&self) -> String {
        format!("{BASE_URL}/{}", self.satellite_id)
    }

    /// Fetch the satellite's current position.
    pub async fn current_position(&self) -> Result<IssPosition, ApiError> {
        tracing::debug!(satellite_id = self.satellite_id, "requesting satellite position");

        let res = self.http.get(&self.url()).await?;

        if !res.status.is_success() {
            return Err(ApiError::Api { message: error_message(&res.body, res.status) });
        }

        let position: IssPosition = serde_json::from_str(&res.body)
            .map_err(|source| ApiError::Decode { what: "satellite position response", source })?;

        Ok(position)
    }
}

/// Error bodies look like `{"error": "satellite not found", "status": 404}`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

fn error_message(body: &str, status: reqwest::StatusCode) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed.error,
        Err(_) => {
            format!("Position request failed with status {status}: {}", truncate_body(body))
        }
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX { format!("{}...", &body[..MAX]) } else { body.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing::FakeHttp;

    // Trimmed-down copy of a real wheretheiss.at response.
    const POSITION_BODY: &str = r#"{
        "name": "iss",
        "id": 25544,
        "latitude": 50.11496269845,
        "longitude": 118.07900427317,
        "altitude": 408.05526028199,
        "velocity": 27635.971970874,
        "visibility": "daylight",
        "timestamp": 1364069476
    }"#;

    #[tokio::test]
    async fn parses_position_and_ignores_extra_fields() {
        let http = Arc::new(FakeHttp::new().reply(200, POSITION_BODY));
        let api = WhereTheIssApi::with_http(ISS_NORAD_ID, http.clone());

        let position = api.current_position().await.expect("fetch should succeed");

        assert_eq!(position.latitude, 50.11496269845);
        assert_eq!(position.longitude, 118.07900427317);
        assert_eq!(
            http.requested_urls(),
            vec![format!("https://api.wheretheiss.at/v1/satellites/{ISS_NORAD_ID}")]
        );
    }

    #[tokio::test]
    async fn non_success_status_surfaces_the_server_error() {
        let http = Arc::new(
            FakeHttp::new().reply(404, r#"{"error": "satellite not found", "status": 404}"#),
        );
        let api = WhereTheIssApi::with_http(99999, http);

        let err = api.current_position().await.unwrap_err();

        assert!(matches!(err, ApiError::Api { .. }));
        assert_eq!(err.to_string(), "satellite not found");
    }

    #[tokio::test]
    async fn malformed_error_body_falls_back_to_the_status() {
        let http = Arc::new(FakeHttp::new().reply(500, "Internal Server Error"));
        let api = WhereTheIssApi::with_http(ISS_NORAD_ID, http);

        let err = api.current_position().await.unwrap_err();

        assert!(err.to_string().contains("500"));
        assert!(err.to_string().contains("Internal Server Error"));
    }

    #[tokio::test]
    async fn transport_failures_pass_through() {
        let http = Arc::new(FakeHttp::new().fail("connection refused"));
        let api = WhereTheIssApi::with_http(ISS_NORAD_ID, http);

        let err = api.current_position().await.unwrap_err();

        assert!(matches!(err, ApiError::Transport(_)));
        assert_eq!(err.to_string(), "connection refused");
    }
}
