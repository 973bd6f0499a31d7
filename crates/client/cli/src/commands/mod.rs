//! Command implementations for the CLI
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod replay;
mod run;
mod tutorial;

pub use replay::Replay;
pub use run::Run;
pub use tutorial::Tutorial;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use heist_content::{ConfigLoader, LevelLoader};
use heist_core::{GameConfig, LevelDescriptor, TurnError};
use heist_runtime::{Session, SessionError};

use crate::report;
use crate::script::{self, Step};

/// Loads a level from a RON file, or from the bundled set when `level` is not a file.
fn load_level(level: &str) -> Result<LevelDescriptor> {
    let path = Path::new(level);
    if path.is_file() {
        LevelLoader::load(path)
    } else {
        LevelLoader::bundled(level)
            .with_context(|| format!("'{level}' is neither a level file nor a bundled level"))
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<GameConfig> {
    match path {
        Some(path) => ConfigLoader::load(path),
        None => ConfigLoader::bundled(),
    }
}

/// Feeds a parsed script into `session` until the script ends or the level finishes.
///
/// Rejected actions are logged and skipped. Returns the number of steps consumed.
fn play(session: &mut Session, steps: &[Step]) -> Result<usize> {
    for (index, step) in steps.iter().enumerate() {
        if session.state().status.is_terminal() {
            return Ok(index);
        }
        let previous = session.state().message.clone();
        match step {
            Step::TogglePause => {
                session.toggle_pause();
            }
            Step::Act(action) => match session.submit(*action) {
                Ok(_) => {}
                Err(SessionError::Turn(TurnError::GameOver { status })) => {
                    tracing::warn!(step = index + 1, %status, "action ignored");
                }
                Err(SessionError::Turn(error)) => {
                    tracing::warn!(step = index + 1, %error, "action rejected");
                }
                Err(error) => return Err(error).context("turn failed"),
            },
        }
        let state = session.state();
        if let Some(message) = state.message.as_ref().filter(|m| previous.as_ref() != Some(*m)) {
            tracing::info!(turn = state.turn, "{message}");
        }
    }
    Ok(steps.len())
}

fn parse_script(actions: &str) -> Result<Vec<Step>> {
    script::parse(actions).context("invalid action script")
}

fn print_outcome(session: &Session, render: bool) {
    if render {
        println!("{}", report::render(session.state()));
    }
    println!("{}", report::summary(session.state()));
    println!("{}", report::stats_line(session.stats()));
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use heist_core::{GameStatus, Position};

    use super::*;

    fn corridor(rows: &[&str], start: Position) -> Session {
        let descriptor =
            LevelDescriptor::from_rows(rows, start, Position::new(2, 0)).expect("valid rows");
        Session::new(descriptor, GameConfig::default(), 0).expect("valid level")
    }

    #[test]
    fn play_stops_when_the_level_is_won() {
        let mut session = corridor(&["..E"], Position::new(0, 0));
        let steps = parse_script("e,e,e,e").expect("valid script");

        assert_eq!(play(&mut session, &steps).expect("play"), 2);
        assert_eq!(session.state().status, GameStatus::Won);
    }

    #[test]
    fn rejected_actions_are_skipped() {
        let mut session = corridor(&["#.E"], Position::new(1, 0));
        let steps = parse_script("w,pause,e,pause,e").expect("valid script");

        assert_eq!(play(&mut session, &steps).expect("play"), 5);
        assert_eq!(session.state().status, GameStatus::Won);
        assert_eq!(session.log().len(), 1);
    }

    #[test]
    fn levels_resolve_from_files_and_bundled_names() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"(name: "Tiny", rows: ["..E"], player_start: (0, 0), exit: (2, 0))"#
        )
        .expect("write level");

        let path = file.path().to_str().expect("utf-8 path");
        assert_eq!(load_level(path).expect("file level").width, 3);
        assert!(load_level("vault").is_ok());
        assert!(load_level("no-such-level").is_err());
    }
}
