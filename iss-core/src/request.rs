//! Asynchronous action creators.
//!
//! Each function issues a single HTTP GET through its injected API client
//! and dispatches the request lifecycle into the store channel. Errors
//! never escape: every failure becomes a dispatched error action.

use tokio::sync::mpsc::UnboundedSender;

use crate::{
    action::Action,
    api::{google::GoogleGeocoder, wheretheiss::WhereTheIssApi},
};

/// Payload of the address error action. All geocoding failures map to this
/// one user-facing message; the underlying detail only goes to the log.
pub const ADDRESS_ERROR_MESSAGE: &str = "Can not get addresses from Google API.";

/// Fetch the current satellite position and dispatch the lifecycle actions:
/// pending immediately, then exactly one of success or error.
pub async fn request_position(api: &WhereTheIssApi, dispatch: &UnboundedSender<Action>) {
    // A dropped receiver means the store is gone; nothing left to notify.
    let _ = dispatch.send(Action::IssRequestPending);

    match api.current_position().await {
        Ok(position) => {
            let _ = dispatch.send(Action::IssRequestSuccess(position));
        }
        Err(err) => {
            let _ = dispatch.send(Action::IssRequestError(err.to_string()));
        }
    }
}

/// Reverse-geocode the coordinates and dispatch exactly one address action.
/// This path has no pending signal.
pub async fn request_address(
    geocoder: &GoogleGeocoder,
    latitude: f64,
    longitude: f64,
    dispatch: &UnboundedSender<Action>,
) {
    match geocoder.reverse_geocode(latitude, longitude).await {
        Ok(addresses) => {
            let _ = dispatch.send(Action::IssAddressRequestSuccess(addresses));
        }
        Err(err) => {
            tracing::warn!(error = %err, "reverse geocoding failed");
            let _ = dispatch.send(Action::IssAddressRequestError(ADDRESS_ERROR_MESSAGE.to_string()));
        }
    }
}
