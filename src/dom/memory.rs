//! Headless page
//!
//! A document model small enough to drive both flows without a browser:
//! forms with fields, list containers, plain elements, and scripted answers
//! for confirmation dialogs. Alerts and prompts are recorded.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet, VecDeque};

use crate::error::{ErrorKind, Result};
use crate::interface::{Page, SubmitTarget};
use crate::markup::render_row;
use crate::model::dtos::FormFields;
use crate::model::structs::StudentRow;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryForm {
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub action: String,
    pub fields: FormFields,
}

impl MemoryForm {
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push(name, value);
        self
    }
}

impl SubmitTarget for MemoryForm {
    /// Supports the single `.class` and `#id` selectors the page uses
    fn matches_selector(&self, selector: &str) -> bool {
        if let Some(class) = selector.strip_prefix('.') {
            self.classes.iter().any(|c| c == class)
        } else if let Some(id) = selector.strip_prefix('#') {
            self.id.as_deref() == Some(id)
        } else {
            false
        }
    }
}

/// A row appended at runtime, with the markup a browser would have received
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppendedRow {
    pub row: StudentRow,
    pub html: String,
}

#[derive(Debug, Default)]
pub struct MemoryPage {
    forms: RefCell<Vec<MemoryForm>>,
    containers: RefCell<BTreeMap<String, Vec<AppendedRow>>>,
    elements: RefCell<BTreeSet<String>>,
    answers: RefCell<VecDeque<bool>>,
    alerts: RefCell<Vec<String>>,
    prompts: RefCell<Vec<String>>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_form(self, form: MemoryForm) -> Self {
        self.forms.borrow_mut().push(form);
        self
    }

    pub fn with_container(self, id: impl Into<String>) -> Self {
        self.containers.borrow_mut().insert(id.into(), Vec::new());
        self
    }

    pub fn with_element(self, id: impl Into<String>) -> Self {
        self.elements.borrow_mut().insert(id.into());
        self
    }

    /// Queue the answer for the next confirmation dialog. Unscripted dialogs are declined.
    pub fn answer_confirm(&self, accept: bool) {
        self.answers.borrow_mut().push_back(accept);
    }

    /// Type into a field of a form, as a user would
    pub fn fill(&self, form_id: &str, name: &str, value: &str) {
        let mut forms = self.forms.borrow_mut();
        if let Some(form) = forms.iter_mut().find(|f| f.id.as_deref() == Some(form_id)) {
            form.fields.set(name, value);
        }
    }

    pub fn form(&self, form_id: &str) -> Option<MemoryForm> {
        self.forms
            .borrow()
            .iter()
            .find(|f| f.id.as_deref() == Some(form_id))
            .cloned()
    }

    pub fn rows(&self, container_id: &str) -> Vec<AppendedRow> {
        self.containers
            .borrow()
            .get(container_id)
            .cloned()
            .unwrap_or_default()
    }

    pub fn has_element(&self, id: &str) -> bool {
        self.elements.borrow().contains(id)
            || self.containers.borrow().contains_key(id)
            || self.form(id).is_some()
    }

    /// Forms on the page matching `selector`: those seeded at load, then
    /// those found in the markup of rows appended since
    pub fn forms_matching(&self, selector: &str) -> Vec<MemoryForm> {
        let mut forms: Vec<MemoryForm> = self.forms.borrow().clone();
        for rows in self.containers.borrow().values() {
            forms.extend(rows.iter().flat_map(|r| forms_in_markup(&r.html)));
        }

        forms.retain(|f| f.matches_selector(selector));
        forms
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }
}

/// Read the `<form>` tags out of rendered markup, keeping `action` and `class`
fn forms_in_markup(html: &str) -> Vec<MemoryForm> {
    html.match_indices("<form")
        .filter_map(|(at, _)| {
            let rest = &html[at..];
            let tag = &rest[..rest.find('>')?];
            let mut form = MemoryForm::new(attribute(tag, "action").unwrap_or_default());
            for class in attribute(tag, "class").unwrap_or_default().split_whitespace() {
                form = form.with_class(class);
            }
            Some(form)
        })
        .collect()
}

fn attribute<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
    let key = format!(" {name}=\"");
    let start = tag.find(&key)? + key.len();
    let len = tag[start..].find('"')?;
    Some(&tag[start..start + len])
}

impl Page for MemoryPage {
    fn form_fields(&self, form_id: &str) -> Option<FormFields> {
        self.form(form_id).map(|f| f.fields)
    }

    fn append_row(&self, container_id: &str, row: &StudentRow) -> Result<()> {
        let html = render_row(row)?;
        let mut containers = self.containers.borrow_mut();
        let rows = containers
            .get_mut(container_id)
            .ok_or_else(|| ErrorKind::DomError(format!("no element with id `{container_id}`")))?;

        rows.push(AppendedRow {
            row: row.clone(),
            html,
        });
        Ok(())
    }

    fn reset_form(&self, form_id: &str) {
        let mut forms = self.forms.borrow_mut();
        if let Some(form) = forms.iter_mut().find(|f| f.id.as_deref() == Some(form_id)) {
            form.fields.clear_values();
        }
    }

    fn remove_element(&self, id: &str) -> bool {
        self.elements.borrow_mut().remove(id)
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }

    fn confirm(&self, message: &str) -> bool {
        self.prompts.borrow_mut().push(message.to_string());
        self.answers.borrow_mut().pop_front().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::structs::StudentId;

    fn row(id: &str) -> StudentRow {
        StudentRow {
            id: StudentId::from(id),
            name: format!("student {id}"),
            edit_url: format!("/edit_student/{id}"),
            view_url: format!("/students/{id}/grades"),
            add_grade_url: format!("/students/{id}/grades/add"),
            delete_url: format!("/delete_student/{id}"),
            delete_form_class: "delete-form".to_string(),
        }
    }

    #[test]
    fn selectors_match_class_and_id() {
        let form = MemoryForm::new("/delete_student/1")
            .with_id("delete-1")
            .with_class("inline")
            .with_class("delete-form");

        assert!(form.matches_selector(".delete-form"));
        assert!(form.matches_selector("#delete-1"));
        assert!(!form.matches_selector(".add-form"));
        assert!(!form.matches_selector("form"));
    }

    #[test]
    fn appended_rows_contribute_delete_forms() {
        let page = MemoryPage::new()
            .with_container("student-list")
            .with_form(MemoryForm::new("/grade/3/delete").with_class("delete-form"))
            .with_form(MemoryForm::new("/add_student").with_id("add-student-form"));

        page.append_row("student-list", &row("9")).unwrap();

        let actions: Vec<String> = page
            .forms_matching(".delete-form")
            .into_iter()
            .map(|f| f.action)
            .collect();
        assert_eq!(actions, ["/grade/3/delete", "/delete_student/9"]);
    }

    #[test]
    fn row_forms_come_from_the_rendered_markup() {
        let page = MemoryPage::new().with_container("student-list");
        let renamed = StudentRow {
            delete_form_class: "remove-form".to_string(),
            ..row("4")
        };

        page.append_row("student-list", &renamed).unwrap();

        assert!(page.forms_matching(".delete-form").is_empty());
        let forms = page.forms_matching(".remove-form");
        assert_eq!(forms.len(), 1);
        assert_eq!(forms[0].action, "/delete_student/4");
        assert_eq!(forms[0].classes, ["remove-form"]);
    }

    #[test]
    fn markup_forms_keep_every_class() {
        let forms = forms_in_markup(
            r#"<li><form method="POST" action="/grade/1/delete" class="inline delete-form"></form></li>"#,
        );

        assert_eq!(forms.len(), 1);
        assert_eq!(forms[0].action, "/grade/1/delete");
        assert!(forms[0].matches_selector(".inline"));
        assert!(forms[0].matches_selector(".delete-form"));
    }

    #[test]
    fn append_to_missing_container_fails() {
        let page = MemoryPage::new();
        let err = page.append_row("student-list", &row("1")).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::DomError(_)));
    }

    #[test]
    fn removal_is_idempotent() {
        let page = MemoryPage::new().with_element("no-students-message");

        assert!(page.remove_element("no-students-message"));
        assert!(!page.remove_element("no-students-message"));
        assert!(!page.has_element("no-students-message"));
    }

    #[test]
    fn unscripted_confirm_declines() {
        let page = MemoryPage::new();
        page.answer_confirm(true);

        assert!(page.confirm("first?"));
        assert!(!page.confirm("second?"));
        assert_eq!(page.prompts(), ["first?", "second?"]);
    }
}
