//! No-WASM HTTP client implementation using reqwest
//!
//! Used by the terminal driver to talk to a running gradebook server.

use crate::config::Endpoints;
use crate::error::Result;
use reqwest::{
    header::{ACCEPT, CONTENT_TYPE},
    Client,
};
use serde_json::Value;

use super::{parse_json_body, FORM_CONTENT_TYPE};
use crate::interface::{HttpClient, RequestApi};
use crate::model::dtos::FormFields;
use crate::model::structs::StudentId;

/// HTTP client for no-WASM environments using reqwest
#[derive(Debug, Clone)]
pub struct NoWasmClient {
    client: Client,
    base_url: String,
    endpoints: Endpoints,
}

impl HttpClient for NoWasmClient {
    fn new(base_url: &str, endpoints: &Endpoints) -> Result<Self> {
        let client = Client::builder().build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            endpoints: endpoints.clone(),
        })
    }
}

impl NoWasmClient {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl RequestApi for NoWasmClient {
    async fn add_student(&self, fields: &FormFields) -> Result<Value> {
        let resp = self
            .client
            .post(self.url(&self.endpoints.add_student))
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .header(ACCEPT, "application/json")
            .body(fields.encode())
            .send()
            .await?;

        log::debug!("add_student response status: {}", resp.status());

        let text = resp.text().await?;
        parse_json_body(&text)
    }

    async fn delete_student(&self, id: &StudentId) -> Result<()> {
        // The server answers with a redirect back to the roster, which reqwest follows
        let resp = self
            .client
            .post(self.url(&self.endpoints.delete_url(id)))
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .send()
            .await?
            .error_for_status()?;

        log::debug!("delete_student {} response status: {}", id, resp.status());
        Ok(())
    }
}
