//! Command Module
//!
//! Parsing and execution of the line typed into the command-entry view.

pub mod exec;
pub mod files;
pub mod parser;

use thiserror::Error;
use tracing::{debug, warn};

use crate::app::Session;
use crate::ui::{ViewError, CMDLINE};

/// Command errors. All of them are reported to the user and the session
/// carries on.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Missing filename")]
    MissingFilename,

    #[error("Missing pattern or replacement")]
    MissingPattern,

    #[error("Wrap expects true or false")]
    WrapArgument,

    #[error("Unexpected argument: {0}")]
    UnexpectedArgument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    View(#[from] ViewError),
}

pub type CommandResult<T> = Result<T, CommandError>;

/// What the event loop should do after a command or key handler ran
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    /// The session must end
    Quit,
}

/// Parse and execute `line`, writing any error into the error view.
///
/// # Panics
///
/// Panics if the command-entry view does not have input focus: only the
/// command line's own submit handler may call this.
pub fn validate_cmd(session: &mut Session, line: &str) -> Outcome {
    assert_eq!(
        session.focused(),
        Some(CMDLINE),
        "validate_cmd requires command line focus"
    );

    match run(session, line) {
        Ok(outcome) => outcome,
        Err(err) => {
            warn!(line, error = %err, "command failed");
            session.report_error(&err);
            Outcome::Continue
        }
    }
}

/// Parse and execute `line`, returning errors to the caller
pub fn run(session: &mut Session, line: &str) -> CommandResult<Outcome> {
    let Some(command) = parser::parse(line)? else {
        return Ok(Outcome::Continue);
    };

    debug!(?command, "executing command");
    session.clear_error();
    command.execute(session)
}

// Re-exports
pub use parser::Command;
