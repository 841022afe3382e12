//! Request module - handles HTTP requests for both WASM and no-WASM environments
//!
//! This module provides a unified interface for making HTTP requests while
//! supporting different implementations for WASM (gloo_net) and no-WASM (reqwest) environments.

use crate::error::{ErrorKind, Result};
use serde_json::Value;

#[cfg(feature = "no-wasm")]
pub mod request;

#[cfg(feature = "wasm")]
pub mod gloo;

pub(crate) const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// First stage of reply handling: the body must be JSON, whatever the status.
/// The add-student endpoint reports refusals inside the payload.
pub(crate) fn parse_json_body(text: &str) -> Result<Value> {
    serde_json::from_str::<Value>(text)
        .map_err(|_| ErrorKind::ParseError(format!("Invalid JSON response: {}", text)).into())
}
