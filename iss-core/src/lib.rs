//! Core library for the `iss` CLI.
//!
//! This crate defines:
//! - The store action contract: actions, asynchronous action creators,
//!   the state slice and its reducer
//! - Clients for the satellite position and reverse-geocoding APIs,
//!   over an injectable HTTP layer
//! - Configuration & credentials handling
//!
//! It is used by `iss-cli`, but can also be reused by other binaries or services.

pub mod action;
pub mod api;
pub mod client;
pub mod config;
pub mod model;
pub mod request;
pub mod state;

pub use action::{Action, ActionKind};
pub use api::google::GoogleGeocoder;
pub use api::wheretheiss::{ISS_NORAD_ID, WhereTheIssApi};
pub use api::{ApiError, geocoder_from_config, position_api_from_config};
pub use client::{HttpGet, HttpResponse, ReqwestHttp, TransportError};
pub use config::Config;
pub use model::{Address, IssPosition};
pub use request::{ADDRESS_ERROR_MESSAGE, request_address, request_position};
pub use state::{IssState, reduce};
