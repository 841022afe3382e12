#![allow(async_fn_in_trait)] // 允许在内部 trait 中使用 async fn

use crate::config::Endpoints;
use crate::error::Result;
use crate::model::dtos::FormFields;
use crate::model::structs::{StudentId, StudentRow};
use serde_json::Value;

/// Common trait for HTTP client functionality
pub trait HttpClient {
    /// Create a client resolving endpoint paths against `base_url`
    ///
    /// In the browser `base_url` is empty and paths stay page-relative.
    fn new(base_url: &str, endpoints: &Endpoints) -> Result<Self>
    where
        Self: Sized;
}

/// Common interface for all HTTP operations
pub trait RequestApi {
    /// Post the add-student form and parse the reply body as JSON
    async fn add_student(&self, fields: &FormFields) -> Result<Value>;

    /// Submit a student's delete form
    async fn delete_student(&self, id: &StudentId) -> Result<()>;
}

/// The rendered document, owned by whoever renders it
///
/// Flows only read from it or append to it. Methods take `&self`: the
/// document is mutated through the host, not through this handle.
pub trait Page {
    /// Fields of the form with the given id, `None` if there is no such form
    fn form_fields(&self, form_id: &str) -> Option<FormFields>;

    /// Render `row` and append it to the end of the container
    fn append_row(&self, container_id: &str, row: &StudentRow) -> Result<()>;

    fn reset_form(&self, form_id: &str);

    /// Remove the element if present; returns whether anything was removed
    fn remove_element(&self, id: &str) -> bool;

    /// Blocking notice to the user
    fn alert(&self, message: &str);

    /// Blocking yes/no question to the user
    fn confirm(&self, message: &str) -> bool;
}

/// Element a submit event originated from
pub trait SubmitTarget {
    fn matches_selector(&self, selector: &str) -> bool;
}
