use serde::{Deserialize, Serialize};

use crate::config::PageConfig;

/// Server-assigned student identifier
///
/// The server may send it as a JSON number or a string; either way it is kept
/// verbatim and only ever interpolated into attributes and URLs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(from = "IdRepr")]
pub struct StudentId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum IdRepr {
    Number(serde_json::Number),
    Text(String),
}

impl From<IdRepr> for StudentId {
    fn from(repr: IdRepr) -> Self {
        match repr {
            IdRepr::Number(n) => StudentId(n.to_string()),
            IdRepr::Text(s) => StudentId(s),
        }
    }
}

impl StudentId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StudentId {
    fn from(s: &str) -> Self {
        StudentId(s.to_string())
    }
}

impl From<String> for StudentId {
    fn from(s: String) -> Self {
        StudentId(s)
    }
}

impl std::fmt::Display for StudentId {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A student the server has just created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub id: StudentId,
    pub name: String,
    pub view_url: String,
    pub add_grade_url: String,
}

/// One rendered row of the student list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentRow {
    pub id: StudentId,
    pub name: String,
    pub edit_url: String,
    pub view_url: String,
    pub add_grade_url: String,
    pub delete_url: String,
    pub delete_form_class: String,
}

impl StudentRow {
    pub fn resolve(student: NewStudent, config: &PageConfig) -> Self {
        Self {
            edit_url: config.endpoints.edit_url(&student.id),
            delete_url: config.endpoints.delete_url(&student.id),
            delete_form_class: config.dom.delete_form_class.clone(),
            id: student.id,
            name: student.name,
            view_url: student.view_url,
            add_grade_url: student.add_grade_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_accepts_numbers_and_strings() {
        let from_number: StudentId = serde_json::from_str("7").unwrap();
        let from_text: StudentId = serde_json::from_str(r#""a1b2""#).unwrap();

        assert_eq!(from_number.as_str(), "7");
        assert_eq!(from_text.to_string(), "a1b2");
    }

    #[test]
    fn row_resolves_server_and_local_urls() {
        let row = StudentRow::resolve(
            NewStudent {
                id: StudentId::from("7"),
                name: "Ada".to_string(),
                view_url: "/students/7/grades".to_string(),
                add_grade_url: "/students/7/grades/add".to_string(),
            },
            &PageConfig::default(),
        );

        assert_eq!(row.edit_url, "/edit_student/7");
        assert_eq!(row.delete_url, "/delete_student/7");
        assert_eq!(row.view_url, "/students/7/grades");
        assert_eq!(row.add_grade_url, "/students/7/grades/add");
        assert_eq!(row.delete_form_class, "delete-form");
    }
}
