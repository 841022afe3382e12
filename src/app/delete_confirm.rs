//! Delete confirmation
//!
//! One delegated check run for every submit event on the page. Forms that
//! match the delete selector only submit after the user confirms; rows added
//! after load are covered because matching happens per event.

use crate::config::PageConfig;
use crate::error::Result;
use crate::interface::{Page, RequestApi, SubmitTarget};
use crate::model::structs::StudentId;

/// What to do with the default action of a submit event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitDecision {
    /// Not a delete form
    Ignore,
    /// User confirmed; let the form submit
    Proceed,
    /// User declined; suppress the submission
    Prevent,
}

impl SubmitDecision {
    pub fn prevents_default(self) -> bool {
        self == SubmitDecision::Prevent
    }
}

#[derive(Debug, Clone)]
pub struct DeleteConfirmation {
    selector: String,
    prompt: String,
}

impl DeleteConfirmation {
    pub fn new(config: &PageConfig) -> Self {
        Self {
            selector: config.dom.delete_form_selector(),
            prompt: config.messages.delete_prompt.clone(),
        }
    }

    pub fn on_submit<P, T>(&self, page: &P, target: &T) -> SubmitDecision
    where
        P: Page + ?Sized,
        T: SubmitTarget + ?Sized,
    {
        if !target.matches_selector(&self.selector) {
            return SubmitDecision::Ignore;
        }

        if page.confirm(&self.prompt) {
            SubmitDecision::Proceed
        } else {
            log::debug!("delete cancelled by user");
            SubmitDecision::Prevent
        }
    }

    /// Confirm, then perform the delete request the form would have sent
    ///
    /// For hosts without a browser to carry out the form's own submission.
    pub async fn confirm_and_send<C, P, T>(
        &self,
        client: &C,
        page: &P,
        target: &T,
        id: &StudentId,
    ) -> Result<SubmitDecision>
    where
        C: RequestApi,
        P: Page + ?Sized,
        T: SubmitTarget + ?Sized,
    {
        let decision = self.on_submit(page, target);
        if decision == SubmitDecision::Proceed {
            client.delete_student(id).await?;
            log::info!("deleted student {}", id);
        }
        Ok(decision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::add_student::{AddStudent, SubmitOutcome};
    use crate::app::testing::RecordingClient;
    use crate::dom::memory::{MemoryForm, MemoryPage};
    use serde_json::json;

    const PROMPT: &str = "Are you sure you want to delete this? This action cannot be undone.";

    fn delete_form(id: &str) -> MemoryForm {
        MemoryForm::new(format!("/delete_student/{id}")).with_class("delete-form")
    }

    fn confirmation() -> DeleteConfirmation {
        DeleteConfirmation::new(&PageConfig::default())
    }

    #[test]
    fn other_forms_are_ignored_without_a_dialog() {
        let page = MemoryPage::new();
        let add_form = MemoryForm::new("/add_student").with_id("add-student-form");

        assert_eq!(confirmation().on_submit(&page, &add_form), SubmitDecision::Ignore);
        assert!(page.prompts().is_empty());
    }

    #[test]
    fn declined_delete_is_prevented() {
        let page = MemoryPage::new();
        page.answer_confirm(false);

        let decision = confirmation().on_submit(&page, &delete_form("3"));

        assert_eq!(decision, SubmitDecision::Prevent);
        assert!(decision.prevents_default());
        assert_eq!(page.prompts(), [PROMPT]);
        assert!(page.alerts().is_empty());
    }

    #[test]
    fn accepted_delete_proceeds() {
        let page = MemoryPage::new();
        page.answer_confirm(true);

        let decision = confirmation().on_submit(&page, &delete_form("3"));

        assert_eq!(decision, SubmitDecision::Proceed);
        assert!(!decision.prevents_default());
    }

    #[test]
    fn every_attempt_asks_again() {
        let page = MemoryPage::new();
        page.answer_confirm(false);
        page.answer_confirm(true);
        let form = delete_form("3");

        assert_eq!(confirmation().on_submit(&page, &form), SubmitDecision::Prevent);
        assert_eq!(confirmation().on_submit(&page, &form), SubmitDecision::Proceed);
        assert_eq!(page.prompts().len(), 2);
    }

    fn ada_created() -> serde_json::Value {
        json!({
            "success": true,
            "id": 7,
            "name": "Ada",
            "view_url": "/students/7/grades",
            "add_grade_url": "/students/7/grades/add"
        })
    }

    fn roster_with(name: &str) -> MemoryPage {
        MemoryPage::new()
            .with_form(
                MemoryForm::new("/add_student")
                    .with_id("add-student-form")
                    .with_field("name", name),
            )
            .with_container("student-list")
    }

    #[tokio::test]
    async fn rows_added_after_load_are_confirmed() {
        let add = AddStudent::new(
            RecordingClient::replying([Ok(ada_created())]),
            PageConfig::default(),
        );
        let page = roster_with("Ada");
        assert!(page.forms_matching(".delete-form").is_empty());

        assert!(matches!(add.submit(&page).await, SubmitOutcome::Added(_)));

        let forms = page.forms_matching(".delete-form");
        assert_eq!(forms.len(), 1);
        assert_eq!(forms[0].action, "/delete_student/7");

        page.answer_confirm(false);
        assert_eq!(confirmation().on_submit(&page, &forms[0]), SubmitDecision::Prevent);
        assert_eq!(page.prompts(), [PROMPT]);
    }

    #[tokio::test]
    async fn renamed_delete_class_still_confirms_added_rows() {
        let config =
            PageConfig::from_json(r#"{"dom": {"delete_form_class": "remove-form"}}"#).unwrap();
        let add = AddStudent::new(RecordingClient::replying([Ok(ada_created())]), config.clone());
        let page = roster_with("Ada");

        let SubmitOutcome::Added(row) = add.submit(&page).await else {
            panic!("expected the row to be added");
        };
        assert_eq!(row.delete_form_class, "remove-form");

        let forms = page.forms_matching(&config.dom.delete_form_selector());
        assert_eq!(forms.len(), 1);

        page.answer_confirm(false);
        let decision = DeleteConfirmation::new(&config).on_submit(&page, &forms[0]);
        assert_eq!(decision, SubmitDecision::Prevent);
        assert_eq!(page.prompts(), [PROMPT]);
    }

    #[tokio::test]
    async fn declined_delete_sends_nothing() {
        let client = RecordingClient::default();
        let page = MemoryPage::new();
        let id = StudentId::from("3");

        let decision = confirmation()
            .confirm_and_send(&client, &page, &delete_form("3"), &id)
            .await
            .unwrap();

        assert_eq!(decision, SubmitDecision::Prevent);
        assert!(client.deleted().is_empty());
    }

    #[tokio::test]
    async fn confirmed_delete_is_sent_once() {
        let client = RecordingClient::default();
        let page = MemoryPage::new();
        page.answer_confirm(true);
        let id = StudentId::from("3");

        let decision = confirmation()
            .confirm_and_send(&client, &page, &delete_form("3"), &id)
            .await
            .unwrap();

        assert_eq!(decision, SubmitDecision::Proceed);
        assert_eq!(client.deleted(), [id]);
    }
}
