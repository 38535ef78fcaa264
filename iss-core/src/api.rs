use crate::{
    Config,
    api::{google::GoogleGeocoder, wheretheiss::WhereTheIssApi},
};

pub mod google;
pub mod wheretheiss;

/// Errors surfaced by the API clients.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never reached the server, or the response never arrived.
    #[error(transparent)]
    Transport(#[from] crate::client::TransportError),

    /// The server answered with a non-success status. `message` carries the
    /// server-provided detail when the body had any.
    #[error("{message}")]
    Api { message: String },

    /// The response body did not match the expected shape.
    #[error("Failed to parse {what}: {source}")]
    Decode {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Construct the position client from config, honoring the satellite override.
pub fn position_api_from_config(config: &Config) -> WhereTheIssApi {
    WhereTheIssApi::new(config.tracked_satellite_id())
}

/// Construct the reverse geocoder from config.
pub fn geocoder_from_config(config: &Config) -> anyhow::Result<GoogleGeocoder> {
    let api_key = config.geocoding_api_key().ok_or_else(|| {
        anyhow::anyhow!(
            "No API key configured for the Google geocoding API.\n\
             Hint: run `iss configure` and enter your API key."
        )
    })?;

    Ok(GoogleGeocoder::new(api_key.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::wheretheiss::ISS_NORAD_ID;
    use crate::config::Config;

    #[test]
    fn geocoder_from_config_errors_when_missing_api_key() {
        let cfg = Config::default();
        let err = geocoder_from_config(&cfg).unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("No API key configured"));
        assert!(msg.contains("Hint: run `iss configure`"));
    }

    #[test]
    fn geocoder_from_config_works_when_key_is_set() {
        let mut cfg = Config::default();
        cfg.set_geocoding_api_key("KEY".to_string());

        let geocoder = geocoder_from_config(&cfg);
        assert!(geocoder.is_ok());
    }

    #[test]
    fn position_api_defaults_to_the_iss() {
        let cfg = Config::default();
        let api = position_api_from_config(&cfg);
        assert_eq!(api.satellite_id(), ISS_NORAD_ID);
    }
}
