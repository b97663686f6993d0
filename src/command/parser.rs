//! Command Parser
//!
//! Tokenizes a command line and validates it against the fixed command
//! table.

use std::path::PathBuf;

use super::{CommandError, CommandResult};

/// A fully validated command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `o <path>`
    Open { path: PathBuf },
    /// `c!`
    Close,
    /// `repall <pattern> <replacement>`
    ReplaceAll { pattern: String, replacement: String },
    /// `setwrap <true|false>`
    SetWrap { wrap: bool },
    /// `q!`
    ForceQuit,
    /// `qs`
    QuitSave,
    /// `sa`, `sc` and `sq`: they share destination resolution and differ only
    /// in what follows the write
    Save { path: Option<PathBuf>, then: SaveThen },
}

/// What a save command does once the buffer is written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveThen {
    /// Keep editing the saved file
    Keep,
    /// Clear the main view
    Close,
    /// End the session
    Quit,
}

/// Argument kind reported when too few arguments are given
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Missing {
    Filename,
    Pattern,
    Wrap,
}

impl Missing {
    fn error(self) -> CommandError {
        match self {
            Self::Filename => CommandError::MissingFilename,
            Self::Pattern => CommandError::MissingPattern,
            Self::Wrap => CommandError::WrapArgument,
        }
    }
}

/// Entry of the command table
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    pub name: &'static str,
    pub min_args: usize,
    pub max_args: usize,
    missing: Missing,
    build: fn(&[&str]) -> CommandResult<Command>,
}

impl CommandSpec {
    /// Shared arity check: too few arguments yields the command's own
    /// missing-argument error, too many names the extra tokens.
    pub fn check_arity(&self, args: &[&str]) -> CommandResult<()> {
        if args.len() < self.min_args {
            return Err(self.missing.error());
        }
        if args.len() > self.max_args {
            return Err(CommandError::UnexpectedArgument(args[self.max_args..].join(" ")));
        }
        Ok(())
    }

    pub fn build(&self, args: &[&str]) -> CommandResult<Command> {
        self.check_arity(args)?;
        (self.build)(args)
    }
}

/// Command table, in lookup order
pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "o",
        min_args: 1,
        max_args: 1,
        missing: Missing::Filename,
        build: build_open,
    },
    CommandSpec {
        name: "c!",
        min_args: 0,
        max_args: 0,
        missing: Missing::Filename,
        build: build_close,
    },
    CommandSpec {
        name: "repall",
        min_args: 2,
        max_args: 2,
        missing: Missing::Pattern,
        build: build_replace_all,
    },
    CommandSpec {
        name: "setwrap",
        min_args: 1,
        max_args: 1,
        missing: Missing::Wrap,
        build: build_set_wrap,
    },
    CommandSpec {
        name: "q!",
        min_args: 0,
        max_args: 0,
        missing: Missing::Filename,
        build: build_force_quit,
    },
    CommandSpec {
        name: "qs",
        min_args: 0,
        max_args: 0,
        missing: Missing::Filename,
        build: build_quit_save,
    },
    CommandSpec {
        name: "sa",
        min_args: 1,
        max_args: 1,
        missing: Missing::Filename,
        build: build_save_as,
    },
    CommandSpec {
        name: "sc",
        min_args: 0,
        max_args: 1,
        missing: Missing::Filename,
        build: build_save_close,
    },
    CommandSpec {
        name: "sq",
        min_args: 0,
        max_args: 1,
        missing: Missing::Filename,
        build: build_save_quit,
    },
];

fn build_open(args: &[&str]) -> CommandResult<Command> {
    Ok(Command::Open { path: PathBuf::from(args[0]) })
}

fn build_replace_all(args: &[&str]) -> CommandResult<Command> {
    Ok(Command::ReplaceAll {
        pattern: args[0].to_string(),
        replacement: args[1].to_string(),
    })
}

fn build_set_wrap(args: &[&str]) -> CommandResult<Command> {
    let wrap = args[0].parse::<bool>().map_err(|_| CommandError::WrapArgument)?;
    Ok(Command::SetWrap { wrap })
}

fn build_close(_: &[&str]) -> CommandResult<Command> {
    Ok(Command::Close)
}

fn build_force_quit(_: &[&str]) -> CommandResult<Command> {
    Ok(Command::ForceQuit)
}

fn build_quit_save(_: &[&str]) -> CommandResult<Command> {
    Ok(Command::QuitSave)
}

fn build_save_as(args: &[&str]) -> CommandResult<Command> {
    Ok(save(args, SaveThen::Keep))
}

fn build_save_close(args: &[&str]) -> CommandResult<Command> {
    Ok(save(args, SaveThen::Close))
}

fn build_save_quit(args: &[&str]) -> CommandResult<Command> {
    Ok(save(args, SaveThen::Quit))
}

fn save(args: &[&str], then: SaveThen) -> Command {
    Command::Save {
        path: args.first().map(|p| PathBuf::from(*p)),
        then,
    }
}

/// Split a command line on whitespace
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

/// Table entry for `name` (case-sensitive)
pub fn lookup(name: &str) -> Option<&'static CommandSpec> {
    COMMANDS.iter().find(|spec| spec.name == name)
}

/// Parse a command line. A blank line parses to `None`.
pub fn parse(line: &str) -> CommandResult<Option<Command>> {
    let tokens = tokenize(line);
    let Some((name, args)) = tokens.split_first() else {
        return Ok(None);
    };

    let spec = lookup(name).ok_or_else(|| CommandError::UnknownCommand(name.to_string()))?;
    spec.build(args).map(Some)
}
