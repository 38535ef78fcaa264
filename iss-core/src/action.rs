use serde::Serialize;

use crate::model::{Address, IssPosition};

/// A state transition delivered to the store, tagged by `type`.
///
/// Serializes to the wire shape consumed by reducers:
/// `{"type": "...", "payload": ...}`, with `payload` absent for the
/// pending variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "payload")]
pub enum Action {
    /// A position request went out and has not settled yet.
    #[serde(rename = "ISS_REQUEST_PENDING")]
    IssRequestPending,

    /// The position request settled with the satellite's coordinates.
    #[serde(rename = "ISS_REQUEST_SUCCESS")]
    IssRequestSuccess(IssPosition),

    /// The position request failed; carries the server-provided detail
    /// when there was any, a fallback message otherwise.
    #[serde(rename = "ISS_REQUEST_ERROR")]
    IssRequestError(String),

    /// Reverse geocoding settled with the (possibly empty) result list.
    #[serde(rename = "ISS_ADDRESS_REQUEST_SUCCESS")]
    IssAddressRequestSuccess(Vec<Address>),

    /// Reverse geocoding failed; carries a fixed user-facing message.
    #[serde(rename = "ISS_ADDRESS_REQUEST_ERROR")]
    IssAddressRequestError(String),
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::IssRequestPending => ActionKind::IssRequestPending,
            Action::IssRequestSuccess(_) => ActionKind::IssRequestSuccess,
            Action::IssRequestError(_) => ActionKind::IssRequestError,
            Action::IssAddressRequestSuccess(_) => ActionKind::IssAddressRequestSuccess,
            Action::IssAddressRequestError(_) => ActionKind::IssAddressRequestError,
        }
    }
}

/// Payload-free tag of an [`Action`], matching the wire `type` strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    IssRequestPending,
    IssRequestSuccess,
    IssRequestError,
    IssAddressRequestSuccess,
    IssAddressRequestError,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::IssRequestPending => "ISS_REQUEST_PENDING",
            ActionKind::IssRequestSuccess => "ISS_REQUEST_SUCCESS",
            ActionKind::IssRequestError => "ISS_REQUEST_ERROR",
            ActionKind::IssAddressRequestSuccess => "ISS_ADDRESS_REQUEST_SUCCESS",
            ActionKind::IssAddressRequestError => "ISS_ADDRESS_REQUEST_ERROR",
        }
    }

    pub const fn all() -> &'static [ActionKind] {
        &[
            ActionKind::IssRequestPending,
            ActionKind::IssRequestSuccess,
            ActionKind::IssRequestError,
            ActionKind::IssAddressRequestSuccess,
            ActionKind::IssAddressRequestError,
        ]
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
