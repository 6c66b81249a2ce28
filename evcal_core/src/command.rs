//! Command line parsing for the interpreter.
//!
//! A line is `<op> <date> <event>`, split on single spaces. The event is
//! everything after the second space and may itself contain spaces.

use crate::{Date, ParseDateError};

const FIELD_DELIMITER: char = ' ';

/// A fully parsed calendar command
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Add { date: Date, event: String },
    /// `event: None` deletes every event of the date
    Del { date: Date, event: Option<String> },
    Find { date: Date },
    Print,
}

/// Errors that end an interpreter run
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Date(#[from] ParseDateError),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),
}

impl Command {
    /// Parse one input line.
    ///
    /// Returns `Ok(None)` when the operation is empty, which covers blank
    /// lines and lines starting with a space.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let (op, rest) = split_field(line);

        let command = match op {
            "" => return Ok(None),
            "Print" => Command::Print,
            "Add" | "Del" | "Find" => {
                // A bare keyword is read as its own date text
                let fields = if line.contains(FIELD_DELIMITER) { rest } else { line };
                let (date_text, event) = split_field(fields);
                let date = Date::parse(date_text)?;
                match op {
                    "Add" => Command::Add {
                        date,
                        event: event.to_string(),
                    },
                    "Del" => Command::Del {
                        date,
                        event: (!event.is_empty()).then(|| event.to_string()),
                    },
                    _ => Command::Find { date },
                }
            }
            other => return Err(CommandError::UnknownCommand(other.to_string())),
        };

        Ok(Some(command))
    }
}

/// Split at the first field delimiter; the remainder is empty if there is none.
fn split_field(text: &str) -> (&str, &str) {
    text.split_once(FIELD_DELIMITER).unwrap_or((text, ""))
}
