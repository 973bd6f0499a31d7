//! Parser for comma-separated action scripts.
//!
//! `n,e,e,wait,smoke,decoy@3:4,key,pause` reads as: step north, east twice,
//! wait, throw smoke, throw a decoy at (3, 4), use the keycard, toggle pause.
//! Directions accept `n`/`north`/`up` and friends; tools accept their full
//! names or `smoke`/`key`. A decoy without `@x:y` lands at a seeded offset.

use heist_core::{Action, CardinalDirection, Position, ToolId};

/// One scripted step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Act(Action),
    TogglePause,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ScriptError {
    #[error("unknown action '{token}' at position {index}")]
    UnknownAction { token: String, index: usize },

    #[error("invalid decoy target '{target}' at position {index}; expected x:y")]
    InvalidTarget { target: String, index: usize },

    #[error("only decoys take a target, got '{token}' at position {index}")]
    UnexpectedTarget { token: String, index: usize },
}

pub fn parse(script: &str) -> Result<Vec<Step>, ScriptError> {
    script
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(index, token)| parse_step(token, index + 1))
        .collect()
}

fn parse_step(token: &str, index: usize) -> Result<Step, ScriptError> {
    let (name, target) = match token.split_once('@') {
        Some((name, target)) => (name.trim(), Some(target.trim())),
        None => (token, None),
    };
    let name = name.to_ascii_lowercase();

    let step = match name.as_str() {
        "wait" | "." => Step::Act(Action::Wait),
        "pause" => Step::TogglePause,
        "smoke" => Step::Act(Action::tool(ToolId::Smokebomb)),
        "key" => Step::Act(Action::tool(ToolId::Keycard)),
        other => {
            if let Ok(direction) = other.parse::<CardinalDirection>() {
                Step::Act(Action::step(direction))
            } else if let Ok(tool) = other.parse::<ToolId>() {
                Step::Act(Action::tool(tool))
            } else {
                return Err(ScriptError::UnknownAction {
                    token: token.to_string(),
                    index,
                });
            }
        }
    };

    match (step, target) {
        (step, None) => Ok(step),
        (
            Step::Act(Action::UseTool {
                tool: ToolId::Decoy,
                ..
            }),
            Some(target),
        ) => parse_target(target)
            .map(|position| Step::Act(Action::decoy_at(position)))
            .ok_or_else(|| ScriptError::InvalidTarget {
                target: target.to_string(),
                index,
            }),
        (_, Some(_)) => Err(ScriptError::UnexpectedTarget {
            token: token.to_string(),
            index,
        }),
    }
}

fn parse_target(target: &str) -> Option<Position> {
    let (x, y) = target.split_once(':')?;
    Some(Position::new(x.trim().parse().ok()?, y.trim().parse().ok()?))
}
