//! Command results and their text rendering.

use crate::models::Person;
use serde::Serialize;
use std::fmt::Write;

/// Summary line for a listing of `count` persons.
pub fn persons_listed_message(count: usize) -> String {
    format!("{} persons listed!", count)
}

/// The outcome of running a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandResult {
    /// Message to show the user
    pub feedback_to_user: String,

    /// Persons to display, if the command produces a listing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relevant_persons: Option<Vec<Person>>,
}

impl CommandResult {
    pub fn new(feedback_to_user: impl Into<String>, relevant_persons: Option<Vec<Person>>) -> Self {
        Self {
            feedback_to_user: feedback_to_user.into(),
            relevant_persons,
        }
    }

    /// Render as a numbered listing followed by the feedback line.
    ///
    /// ```text
    /// 1. Alice Tan Phone: 91234567 Email: alice@x.com Address: 1 Main St
    /// 2. Bob Lee Phone: 98765432 Email: bob@x.com Address: 2 Main St
    /// 2 persons listed!
    /// ```
    pub fn render(&self) -> String {
        let mut out = String::new();
        if let Some(persons) = &self.relevant_persons {
            for (index, person) in persons.iter().enumerate() {
                let _ = writeln!(out, "{}. {}", index + 1, person);
            }
        }
        out.push_str(&self.feedback_to_user);
        out
    }
}
