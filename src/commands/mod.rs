//! User commands of the address book.
//!
//! Command text such as `find alice bob` is parsed into a [`Command`], which
//! runs against a snapshot of the address book and yields a
//! [`CommandResult`] for rendering.

pub mod find;
pub mod list;
pub mod result;

pub use find::FindCommand;
pub use list::ListCommand;
pub use result::{persons_listed_message, CommandResult};

use crate::error::{CommandError, ParseResult};
use crate::models::Person;

/// A parsed user command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Find(FindCommand),
    List(ListCommand),
}

impl Command {
    /// Parse raw user input.
    ///
    /// The first whitespace-separated word selects the command; the rest is
    /// handed to that command's argument parser.
    pub fn parse(input: &str) -> ParseResult<Self> {
        let input = input.trim();
        if input.is_empty() {
            return Err(CommandError::Empty);
        }

        let (word, args) = input
            .split_once(char::is_whitespace)
            .unwrap_or((input, ""));

        match word {
            FindCommand::COMMAND_WORD => FindCommand::parse_args(args).map(Command::Find),
            ListCommand::COMMAND_WORD => Ok(Command::List(ListCommand)),
            other => Err(CommandError::UnknownCommand(other.to_string())),
        }
    }

    /// Run the command against a snapshot of the address book.
    pub fn execute(&self, persons: &[Person]) -> CommandResult {
        match self {
            Command::Find(cmd) => cmd.execute(persons),
            Command::List(cmd) => cmd.execute(persons),
        }
    }
}
