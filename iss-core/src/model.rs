use serde::{Deserialize, Serialize};

/// Current geographic position of the tracked satellite, taken verbatim
/// from the position API response (extra response fields are ignored).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IssPosition {
    pub longitude: f64,
    pub latitude: f64,
}

/// One reverse-geocoding result record.
///
/// The geocoding API returns much richer objects; only the fields the
/// rest of the app reads are kept, anything unknown is dropped on parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub formatted_address: String,

    #[serde(default)]
    pub place_id: Option<String>,

    #[serde(default)]
    pub types: Vec<String>,
}
