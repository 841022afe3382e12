//! Student row markup

use askama::Template;

use crate::error::Result;
use crate::model::structs::StudentRow;

#[derive(Template)]
#[template(path = "student_row.html")]
struct StudentRowTemplate<'a> {
    row: &'a StudentRow,
}

/// Render one `<li>` for the student list. Server-supplied values are escaped.
pub fn render_row(row: &StudentRow) -> Result<String> {
    Ok(StudentRowTemplate { row }.render()?)
}
