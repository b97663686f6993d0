//! Command Execution
//!
//! Runs a validated command against the session's views and the file system.

use std::path::{Path, PathBuf};

use tracing::info;

use super::files;
use super::parser::{Command, SaveThen};
use super::{CommandError, CommandResult, Outcome};
use crate::app::Session;

impl Command {
    pub fn execute(self, session: &mut Session) -> CommandResult<Outcome> {
        match self {
            Self::Open { path } => open(session, path)?,
            Self::Close => session.close_file()?,
            Self::ReplaceAll { pattern, replacement } => replace_all(session, &pattern, &replacement)?,
            Self::SetWrap { wrap } => session.main_mut()?.wrap = wrap,
            Self::ForceQuit => return Ok(Outcome::Quit),
            Self::QuitSave => return quit_save(session),
            Self::Save { path, then } => return save(session, path, then),
        }
        Ok(Outcome::Continue)
    }
}

fn open(session: &mut Session, path: PathBuf) -> CommandResult<()> {
    let content = files::read_file(&path)?;
    session.main_mut()?.set_content(&content);
    info!(path = %path.display(), "file opened");
    session.track_file(path)?;
    Ok(())
}

fn replace_all(session: &mut Session, pattern: &str, replacement: &str) -> CommandResult<()> {
    let main = session.main_mut()?;
    let lines = main
        .lines()
        .iter()
        .map(|line| replace_words(line, pattern, replacement))
        .collect();
    main.replace_lines(lines);
    Ok(())
}

fn save(session: &mut Session, path: Option<PathBuf>, then: SaveThen) -> CommandResult<Outcome> {
    let main = session.main()?;
    let dest = resolve_destination(path, &main.title)?;
    write_main(session, &dest)?;

    match then {
        SaveThen::Keep => {
            session.track_file(dest)?;
            Ok(Outcome::Continue)
        }
        SaveThen::Close => {
            session.close_file()?;
            Ok(Outcome::Continue)
        }
        SaveThen::Quit => {
            session.track_file(dest)?;
            Ok(Outcome::Quit)
        }
    }
}

fn quit_save(session: &mut Session) -> CommandResult<Outcome> {
    match resolve_destination(None, &session.main()?.title) {
        Ok(dest) => write_main(session, &dest)?,
        Err(CommandError::MissingFilename) => info!("quitting without a file to save"),
        Err(err) => return Err(err),
    }
    Ok(Outcome::Quit)
}

fn write_main(session: &Session, dest: &Path) -> CommandResult<()> {
    files::write_file(dest, &session.main()?.buffer())?;
    info!(path = %dest.display(), "buffer saved");
    Ok(())
}

/// Where a save goes: an explicit path wins over the main view's title
pub fn resolve_destination(path: Option<PathBuf>, title: &str) -> CommandResult<PathBuf> {
    match path {
        Some(path) => Ok(path),
        None if !title.is_empty() => Ok(PathBuf::from(title)),
        None => Err(CommandError::MissingFilename),
    }
}

/// Replace every whitespace-delimited word equal to `pattern`, keeping the
/// surrounding whitespace as is
pub fn replace_words(line: &str, pattern: &str, replacement: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;

    while !rest.is_empty() {
        let word_start = rest.find(|c: char| !c.is_whitespace()).unwrap_or(rest.len());
        out.push_str(&rest[..word_start]);
        rest = &rest[word_start..];

        let word_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        let word = &rest[..word_end];
        out.push_str(if word == pattern { replacement } else { word });
        rest = &rest[word_end..];
    }

    out
}
