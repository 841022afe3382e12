//! Application module - the two page flows
//!
//! `add_student` and `delete_confirm` are platform-neutral: they talk to the
//! page through [`Page`](crate::interface::Page) and to the server through
//! [`RequestApi`](crate::interface::RequestApi). The WASM entry points that
//! attach them to the browser document live in `gloo`.

pub mod add_student;
pub mod delete_confirm;

#[cfg(feature = "wasm")]
pub mod gloo;

pub use add_student::{AddStudent, SubmitOutcome};
pub use delete_confirm::{DeleteConfirmation, SubmitDecision};

use std::cell::Cell;

thread_local! {
    static MOUNTED: Cell<bool> = const { Cell::new(false) };
}

/// Mark the page handlers as attached on this thread
///
/// Returns `true` for the first caller only. A second set of listeners would
/// confirm every delete twice.
#[cfg_attr(not(feature = "wasm"), allow(dead_code))]
pub(crate) fn claim_mount() -> bool {
    MOUNTED.with(|mounted| !mounted.replace(true))
}


#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use serde_json::Value;

    use crate::error::{ErrorKind, Result};
    use crate::interface::RequestApi;
    use crate::model::dtos::FormFields;
    use crate::model::structs::StudentId;

    /// Replays scripted add-student replies and records every request
    #[derive(Default)]
    pub(crate) struct RecordingClient {
        replies: RefCell<VecDeque<Result<Value>>>,
        posted: RefCell<Vec<FormFields>>,
        deleted: RefCell<Vec<StudentId>>,
    }

    impl RecordingClient {
        pub(crate) fn replying(replies: impl IntoIterator<Item = Result<Value>>) -> Self {
            Self {
                replies: RefCell::new(replies.into_iter().collect()),
                ..Self::default()
            }
        }

        pub(crate) fn posted(&self) -> Vec<FormFields> {
            self.posted.borrow().clone()
        }

        pub(crate) fn deleted(&self) -> Vec<StudentId> {
            self.deleted.borrow().clone()
        }
    }

    impl RequestApi for RecordingClient {
        async fn add_student(&self, fields: &FormFields) -> Result<Value> {
            self.posted.borrow_mut().push(fields.clone());
            self.replies
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(ErrorKind::ParseError("no scripted reply".to_string()).into()))
        }

        async fn delete_student(&self, id: &StudentId) -> Result<()> {
            self.deleted.borrow_mut().push(id.clone());
            Ok(())
        }
    }
}
