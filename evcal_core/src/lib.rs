#![forbid(unsafe_code)]

//! Core of the evcal line-oriented event calendar.
//!
//! This crate provides:
//! - The `Date` value type and its strict `Y-M-D` parser
//! - The ordered event store
//! - Command parsing and the interpreter that drives the store
//! - Configuration and logging setup shared with the CLI

pub mod error;
pub mod config;
pub mod logging;
pub mod date;
pub mod store;
pub mod command;
pub mod interpreter;

// Re-export commonly used types
pub use error::{Error, Result};
pub use config::Config;
pub use date::{Date, ParseDateError};
pub use store::EventStore;
pub use command::{Command, CommandError};
pub use interpreter::{Interpreter, State};
