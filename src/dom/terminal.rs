//! Terminal page for the native driver
//!
//! The add form is filled from the command line, appended rows are printed
//! as markup on stdout, alerts go to stderr and confirmations are asked on
//! stdin.

use std::cell::RefCell;
use std::io::{BufRead, Write};

use crate::error::Result;
use crate::interface::Page;
use crate::markup::render_row;
use crate::model::dtos::FormFields;
use crate::model::structs::StudentRow;

pub struct TerminalPage {
    form_id: String,
    fields: RefCell<FormFields>,
    assume_yes: bool,
}

impl TerminalPage {
    pub fn new(form_id: impl Into<String>, fields: FormFields) -> Self {
        Self {
            form_id: form_id.into(),
            fields: RefCell::new(fields),
            assume_yes: false,
        }
    }

    /// Answer every confirmation with yes without asking
    pub fn assume_yes(mut self, assume_yes: bool) -> Self {
        self.assume_yes = assume_yes;
        self
    }
}

impl Page for TerminalPage {
    fn form_fields(&self, form_id: &str) -> Option<FormFields> {
        (form_id == self.form_id).then(|| self.fields.borrow().clone())
    }

    fn append_row(&self, _container_id: &str, row: &StudentRow) -> Result<()> {
        let html = render_row(row)?;
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", html.trim_end())?;
        Ok(())
    }

    fn reset_form(&self, form_id: &str) {
        if form_id == self.form_id {
            self.fields.borrow_mut().clear_values();
        }
    }

    fn remove_element(&self, _id: &str) -> bool {
        false
    }

    fn alert(&self, message: &str) {
        eprintln!("{message}");
    }

    fn confirm(&self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        eprint!("{message} [y/N] ");
        let _ = std::io::stderr().flush();

        let mut answer = String::new();
        match std::io::stdin().lock().read_line(&mut answer) {
            Ok(_) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
            Err(e) => {
                log::warn!("could not read confirmation: {e}");
                false
            }
        }
    }
}
