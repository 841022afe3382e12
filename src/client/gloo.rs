//! WASM HTTP client implementation using gloo_net
//!
//! This module provides HTTP functionality for WASM environments
//! using the gloo_net crate for making HTTP requests via the browser's fetch API.

use crate::config::Endpoints;
use crate::error::{ErrorKind, Result};
use gloo_net::http::{Request, RequestBuilder};
use serde_json::Value;
use web_sys::{RequestCredentials, RequestMode};

use super::{parse_json_body, FORM_CONTENT_TYPE};
use crate::interface::{HttpClient, RequestApi};
use crate::model::dtos::FormFields;
use crate::model::structs::StudentId;

/// HTTP client for WASM environments using gloo_net
#[derive(Debug, Clone)]
pub struct WasmClient {
    base_url: String,
    endpoints: Endpoints,
}

impl HttpClient for WasmClient {
    fn new(base_url: &str, endpoints: &Endpoints) -> Result<Self> {
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            endpoints: endpoints.clone(),
        })
    }
}

impl WasmClient {
    /// Build a same-origin form POST, the way the page's own forms submit
    fn build_request(&self, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);

        Request::post(&url)
            .mode(RequestMode::SameOrigin)
            .credentials(RequestCredentials::SameOrigin)
            .header("Content-Type", FORM_CONTENT_TYPE)
    }
}

impl RequestApi for WasmClient {
    async fn add_student(&self, fields: &FormFields) -> Result<Value> {
        let resp = self
            .build_request(&self.endpoints.add_student)
            .header("Accept", "application/json")
            .body(fields.encode())?
            .send()
            .await?;

        log::debug!("add_student response status: {}", resp.status());

        let text = resp.text().await?;
        parse_json_body(&text)
    }

    async fn delete_student(&self, id: &StudentId) -> Result<()> {
        let resp = self
            .build_request(&self.endpoints.delete_url(id))
            .send()
            .await?;

        if !resp.ok() {
            return Err(ErrorKind::ParseError(format!(
                "Request failed: {} {}",
                resp.status(),
                resp.status_text()
            ))
            .into());
        }

        Ok(())
    }
}
