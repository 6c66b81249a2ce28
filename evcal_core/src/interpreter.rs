//! Line-driven command interpreter.
//!
//! The interpreter owns the event store and writes replies to the injected
//! writer. Date errors and unknown commands are fatal: the message is
//! printed and no further input is processed. Finding a date with no
//! events is not an error and produces no output.

use crate::{Command, CommandError, EventStore, Result};
use std::io::{BufRead, Write};

/// Interpreter run state
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum State {
    Running,
    /// Stopped by a fatal error; later lines are ignored
    Terminated(CommandError),
}

/// Executes calendar commands against a single `EventStore`
pub struct Interpreter<W: Write> {
    store: EventStore,
    out: W,
    state: State,
}

impl<W: Write> Interpreter<W> {
    /// Create an interpreter with an empty store
    pub fn new(out: W) -> Self {
        Self::with_store(EventStore::new(), out)
    }

    /// Create an interpreter over an existing store
    pub fn with_store(store: EventStore, out: W) -> Self {
        Self {
            store,
            out,
            state: State::Running,
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    /// Consume the interpreter, returning the writer
    pub fn into_writer(self) -> W {
        self.out
    }

    /// Process lines until end of input or a fatal error
    ///
    /// Lines are read as raw bytes; invalid UTF-8 is replaced with U+FFFD
    /// rather than aborting the run.
    pub fn run<R: BufRead>(&mut self, mut reader: R) -> Result<&State> {
        let mut buf = Vec::new();
        let mut line_num = 0;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_num += 1;

            let line = String::from_utf8_lossy(strip_line_ending(&buf));
            if let State::Terminated(err) = self.execute_line(&line)? {
                tracing::info!("Stopped at line {}: {}", line_num, err);
                break;
            }
        }
        Ok(&self.state)
    }

    /// Process a single input line
    pub fn execute_line(&mut self, line: &str) -> Result<&State> {
        if self.state != State::Running {
            tracing::debug!("Ignoring input after termination");
            return Ok(&self.state);
        }

        match Command::parse(line) {
            Ok(Some(command)) => self.execute(command)?,
            Ok(None) => {}
            Err(err) => {
                writeln!(self.out, "{}", err)?;
                self.state = State::Terminated(err);
            }
        }

        self.out.flush()?;
        Ok(&self.state)
    }

    fn execute(&mut self, command: Command) -> Result<()> {
        tracing::trace!(?command, "Executing");

        match command {
            Command::Add { date, event } => self.store.add_event(date, event),
            Command::Del { date, event: None } => {
                let count = self.store.delete_date(&date);
                writeln!(self.out, "Deleted {} event(s).", count)?;
            }
            Command::Del {
                date,
                event: Some(event),
            } => {
                if self.store.delete_event(&date, &event) {
                    writeln!(self.out, "Event deleted successfully.")?;
                } else {
                    writeln!(self.out, "Event not found.")?;
                }
            }
            Command::Find { date } => match self.store.find(&date) {
                Some(events) => {
                    for event in events {
                        writeln!(self.out, "{}", event)?;
                    }
                }
                None => tracing::debug!(%date, "No events found"),
            },
            Command::Print => {
                for (date, event) in self.store.entries() {
                    writeln!(self.out, "{} {}", date, event)?;
                }
            }
        }

        Ok(())
    }
}

/// Drop a trailing `\n` or `\r\n`.
fn strip_line_ending(buf: &[u8]) -> &[u8] {
    match buf.strip_suffix(b"\n") {
        Some(line) => line.strip_suffix(b"\r").unwrap_or(line),
        None => buf,
    }
}
