//! Page configuration
//!
//! Element ids, endpoint paths and user-facing messages the two page flows
//! depend on. Every field has a default matching the roster page markup, so a
//! JSON override only needs to name what differs.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::structs::StudentId;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    pub dom: DomIds,
    pub endpoints: Endpoints,
    pub messages: Messages,
}

impl PageConfig {
    /// Load a (possibly partial) override from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct DomIds {
    pub add_form: String,
    pub name_field: String,
    pub student_list: String,
    pub placeholder: String,
    /// Class of the delete forms. Rendered rows carry it and the delegated
    /// confirmation matches on it.
    pub delete_form_class: String,
}

impl Default for DomIds {
    fn default() -> Self {
        Self {
            add_form: "add-student-form".to_string(),
            name_field: "name".to_string(),
            student_list: "student-list".to_string(),
            placeholder: "no-students-message".to_string(),
            delete_form_class: "delete-form".to_string(),
        }
    }
}

impl DomIds {
    pub fn delete_form_selector(&self) -> String {
        format!(".{}", self.delete_form_class)
    }
}

/// Endpoint paths. `{id}` is replaced by the student identifier.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Endpoints {
    pub add_student: String,
    pub edit_student: String,
    pub delete_student: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            add_student: "/add_student".to_string(),
            edit_student: "/edit_student/{id}".to_string(),
            delete_student: "/delete_student/{id}".to_string(),
        }
    }
}

impl Endpoints {
    pub fn edit_url(&self, id: &StudentId) -> String {
        self.edit_student.replace("{id}", id.as_str())
    }

    pub fn delete_url(&self, id: &StudentId) -> String {
        self.delete_student.replace("{id}", id.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Messages {
    pub empty_name: String,
    pub refused_prefix: String,
    pub unknown_error: String,
    pub delete_prompt: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            empty_name: "Student name cannot be empty.".to_string(),
            refused_prefix: "Error: ".to_string(),
            unknown_error: "Unknown error".to_string(),
            delete_prompt: "Are you sure you want to delete this? This action cannot be undone."
                .to_string(),
        }
    }
}
