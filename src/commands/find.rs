//! The `find` command.

use super::result::{persons_listed_message, CommandResult};
use crate::error::{CommandError, ParseResult};
use crate::matching::{KeywordMatcher, KeywordSet};
use crate::models::Person;

/// Finds all persons whose name, phone, email or address contains any of
/// the keywords, ignoring case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindCommand {
    keywords: KeywordSet,
}

impl FindCommand {
    pub const COMMAND_WORD: &'static str = "find";

    pub const MESSAGE_USAGE: &'static str = "find: Finds all persons whose names, phones, \
emails or addresses contain any of the specified keywords and displays them as a list \
with index numbers.\n\tParameters: KEYWORD [MORE_KEYWORDS]...\n\tExample: find alice bob charlie";

    pub fn new(keywords: KeywordSet) -> Self {
        Self { keywords }
    }

    /// Parse the arguments following the command word.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::InvalidFormat` when no keyword is given.
    pub fn parse_args(args: &str) -> ParseResult<Self> {
        let keywords = KeywordSet::from_text(args);
        if keywords.is_empty() {
            return Err(CommandError::InvalidFormat {
                usage: Self::MESSAGE_USAGE.to_string(),
            });
        }
        Ok(Self::new(keywords))
    }

    /// A copy of the keywords of this command.
    pub fn keywords(&self) -> KeywordSet {
        self.keywords.clone()
    }

    pub fn execute(&self, persons: &[Person]) -> CommandResult {
        let found: Vec<Person> = KeywordMatcher::new()
            .find_matches(&self.keywords, persons)
            .into_iter()
            .cloned()
            .collect();

        CommandResult::new(persons_listed_message(found.len()), Some(found))
    }
}
