//! The `list` command.

use super::result::{persons_listed_message, CommandResult};
use crate::models::Person;

/// Lists every person in the address book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListCommand;

impl ListCommand {
    pub const COMMAND_WORD: &'static str = "list";

    pub fn execute(&self, persons: &[Person]) -> CommandResult {
        CommandResult::new(persons_listed_message(persons.len()), Some(persons.to_vec()))
    }
}
