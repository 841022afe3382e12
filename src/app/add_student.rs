//! Add-student flow
//!
//! Reads the add form, posts it, and splices the created student into the
//! list without reloading the page. DOM effects are strictly additive.

use crate::config::PageConfig;
use crate::error::{Error, Result};
use crate::interface::{Page, RequestApi};
use crate::model::dtos::{AddStudentReply, AddStudentResponse, FormFields};
use crate::model::structs::StudentRow;

/// How one submission of the add form ended
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Empty name; the user was alerted and nothing was sent
    Rejected,
    /// The server created the student and the row was appended
    Added(StudentRow),
    /// The server refused; the user was alerted with its message
    Refused(String),
    /// Transport, payload or DOM failure; logged only
    Failed(Error),
}

pub struct AddStudent<C> {
    client: C,
    config: PageConfig,
}

impl<C: RequestApi> AddStudent<C> {
    pub fn new(client: C, config: PageConfig) -> Self {
        Self { client, config }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Handle one submission of the add form
    pub async fn submit<P: Page + ?Sized>(&self, page: &P) -> SubmitOutcome {
        let dom = &self.config.dom;

        let mut fields = page.form_fields(&dom.add_form).unwrap_or_default();
        let name = fields
            .get(&dom.name_field)
            .map(str::trim)
            .unwrap_or_default()
            .to_string();

        if name.is_empty() {
            page.alert(&self.config.messages.empty_name);
            return SubmitOutcome::Rejected;
        }
        fields.set(&dom.name_field, name);

        match self.send(page, &fields).await {
            Ok(outcome) => outcome,
            Err(e) => {
                log::error!("Error: {}", e);
                SubmitOutcome::Failed(e)
            }
        }
    }

    async fn send<P: Page + ?Sized>(&self, page: &P, fields: &FormFields) -> Result<SubmitOutcome> {
        let payload = self.client.add_student(fields).await?;
        let response: AddStudentResponse = serde_json::from_value(payload)?;

        match response.into_reply()? {
            AddStudentReply::Created(student) => {
                let dom = &self.config.dom;
                let row = StudentRow::resolve(student, &self.config);

                page.append_row(&dom.student_list, &row)?;
                page.reset_form(&dom.add_form);
                if page.remove_element(&dom.placeholder) {
                    log::debug!("removed #{}", dom.placeholder);
                }

                log::info!("added student {} ({})", row.id, row.name);
                Ok(SubmitOutcome::Added(row))
            }
            AddStudentReply::Refused { error } => {
                let messages = &self.config.messages;
                let error = error.unwrap_or_else(|| messages.unknown_error.clone());

                page.alert(&format!("{}{}", messages.refused_prefix, error));
                Ok(SubmitOutcome::Refused(error))
            }
        }
    }
}
