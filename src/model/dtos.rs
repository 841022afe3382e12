use serde::{Deserialize, Serialize};

use super::structs::{NewStudent, StudentId};
use crate::error::{ErrorKind, Result};

/// Reply body of the add-student endpoint, as sent on the wire
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AddStudentResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub id: Option<StudentId>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub view_url: Option<String>,
    #[serde(default)]
    pub add_grade_url: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// What the server decided about one add-student request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddStudentReply {
    Created(NewStudent),
    Refused { error: Option<String> },
}

impl AddStudentResponse {
    pub fn into_reply(self) -> Result<AddStudentReply> {
        if !self.success {
            return Ok(AddStudentReply::Refused { error: self.error });
        }

        let missing = |field: &str| ErrorKind::ParseError(format!("success reply without `{field}`"));
        Ok(AddStudentReply::Created(NewStudent {
            id: self.id.ok_or_else(|| missing("id"))?,
            name: self.name.ok_or_else(|| missing("name"))?,
            view_url: self.view_url.ok_or_else(|| missing("view_url"))?,
            add_grade_url: self.add_grade_url.ok_or_else(|| missing("add_grade_url"))?,
        }))
    }
}

/// Ordered form fields, as a browser would collect them from a form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pairs: Vec<(String, String)>,
}

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((name.into(), value.into()));
    }

    /// First value submitted under `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Replace the first value under `name`, or append it
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.pairs.iter_mut().find(|(key, _)| key == name) {
            Some((_, slot)) => *slot = value,
            None => self.pairs.push((name.to_string(), value)),
        }
    }

    pub fn clear_values(&mut self) {
        for (_, value) in &mut self.pairs {
            value.clear();
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// `application/x-www-form-urlencoded` body
    pub fn encode(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for (name, value) in &self.pairs {
            serializer.append_pair(name, value);
        }
        serializer.finish()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormFields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}
