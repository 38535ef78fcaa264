use serde::Deserialize;
use std::sync::Arc;

use crate::{
    client::{HttpGet, ReqwestHttp},
    model::Address,
};

use super::ApiError;

const BASE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

/// Client for the Google reverse-geocoding API.
#[derive(Debug, Clone)]
pub struct GoogleGeocoder {
    api_key: String,
    http: Arc<dyn HttpGet>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<Address>,
}

impl GoogleGeocoder {
    pub fn new(api_key: String) -> Self {
        Self::with_http(api_key, Arc::new(ReqwestHttp::new()))
    }

    pub fn with_http(api_key: String, http: Arc<dyn HttpGet>) -> Self {
        Self { api_key, http }
    }

    fn url(&self, latitude: f64, longitude: f64) -> String {
        format!("{BASE_URL}?latlng={latitude},{longitude}&key={}", self.api_key)
    }

    /// Resolve coordinates to the addresses the geocoding API knows for them.
    ///
    /// Returns the `results` list as-is; it can be empty (open sea, poles).
    pub async fn reverse_geocode(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Vec<Address>, ApiError> {
        tracing::debug!(latitude, longitude, "requesting reverse geocoding");

        let res = self.http.get(&self.url(latitude, longitude)).await?;

        if !res.status.is_success() {
            return Err(ApiError::Api {
                message: format!(
                    "Geocoding request failed with status {}: {}",
                    res.status,
                    truncate_body(&res.body),
                ),
            });
        }

        let parsed: GeocodeResponse = serde_json::from_str(&res.body)
            .map_err(|source| ApiError::Decode { what: "geocoding response", source })?;

        if parsed.status != "OK" {
            tracing::debug!(status = %parsed.status, "geocoding API returned a non-OK status");
        }

        Ok(parsed.results)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX { format!("{}...", &body[..MAX]) } else { body.to_string() }
}
