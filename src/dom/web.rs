//! Browser document binding over web_sys

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, FormData, HtmlFormElement, Window};

use crate::error::{ErrorKind, Result};
use crate::interface::{Page, SubmitTarget};
use crate::markup::render_row;
use crate::model::dtos::FormFields;
use crate::model::structs::StudentRow;

#[derive(Debug, Clone)]
pub struct WebPage {
    window: Window,
    document: Document,
}

impl WebPage {
    pub fn new() -> Result<Self> {
        let window =
            web_sys::window().ok_or_else(|| ErrorKind::DomError("no global window".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| ErrorKind::DomError("window has no document".to_string()))?;

        Ok(Self { window, document })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn form(&self, id: &str) -> Option<HtmlFormElement> {
        self.document.get_element_by_id(id)?.dyn_into().ok()
    }
}

impl Page for WebPage {
    fn form_fields(&self, form_id: &str) -> Option<FormFields> {
        let form = self.form(form_id)?;
        let data = FormData::new_with_form(&form).ok()?;

        let mut fields = FormFields::new();
        // File inputs yield non-string values and are skipped
        for entry in js_sys::try_iter(&data).ok()?? {
            let Ok(pair) = entry.and_then(|e| e.dyn_into::<js_sys::Array>()) else {
                continue;
            };
            if let (Some(name), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string()) {
                fields.push(name, value);
            }
        }
        Some(fields)
    }

    fn append_row(&self, container_id: &str, row: &StudentRow) -> Result<()> {
        let container = self
            .document
            .get_element_by_id(container_id)
            .ok_or_else(|| ErrorKind::DomError(format!("no element with id `{container_id}`")))?;

        let html = render_row(row)?;
        container.insert_adjacent_html("beforeend", &html)?;
        Ok(())
    }

    fn reset_form(&self, form_id: &str) {
        if let Some(form) = self.form(form_id) {
            form.reset();
        }
    }

    fn remove_element(&self, id: &str) -> bool {
        match self.document.get_element_by_id(id) {
            Some(element) => {
                element.remove();
                true
            }
            None => false,
        }
    }

    fn alert(&self, message: &str) {
        if let Err(e) = self.window.alert_with_message(message) {
            log::warn!("alert failed: {e:?}");
        }
    }

    fn confirm(&self, message: &str) -> bool {
        // A browser that suppresses dialogs answers no
        self.window.confirm_with_message(message).unwrap_or(false)
    }
}

impl SubmitTarget for Element {
    fn matches_selector(&self, selector: &str) -> bool {
        self.matches(selector).unwrap_or(false)
    }
}
