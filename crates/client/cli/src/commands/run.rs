//! Play a level from a scripted action list.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use heist_core::GameStatus;
use heist_runtime::Session;

use super::{load_config, load_level, parse_script, play, print_outcome};
use crate::config::CliConfig;

/// Play a level with a comma-separated action script
#[derive(Parser)]
pub struct Run {
    /// Level file (RON) or bundled level name (tutorial, vault, gallery)
    #[arg(short, long, value_name = "LEVEL")]
    level: Option<String>,

    /// Levels to continue into after each win, in order
    #[arg(long = "then", value_name = "LEVEL")]
    next: Vec<String>,

    /// Balance configuration TOML (defaults to the bundled one)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Session seed
    #[arg(short, long)]
    seed: Option<u64>,

    /// Actions, e.g. "n,e,e,wait,smoke,decoy@3:4,key,pause"
    #[arg(short, long, default_value = "")]
    actions: String,

    /// Write the action log of the last level played to this file
    #[arg(long, value_name = "FILE")]
    log_out: Option<PathBuf>,

    /// Print the final grid
    #[arg(short, long)]
    render: bool,
}

impl Run {
    pub fn execute(self, env: &CliConfig) -> Result<()> {
        let Some(level) = env.level_or(self.level) else {
            bail!("no level given; pass --level or set HEIST_LEVEL");
        };
        let config = load_config(env.config_or(self.config).as_ref())?;
        let seed = env.seed_or(self.seed);
        let steps = parse_script(&self.actions)?;

        let descriptor = load_level(&level)?;
        let mut session = Session::new(descriptor, config, seed)
            .with_context(|| format!("failed to start level '{level}'"))?;

        let mut consumed = play(&mut session, &steps)?;
        for name in &self.next {
            if session.state().status != GameStatus::Won {
                break;
            }
            session
                .next_level(load_level(name)?)
                .with_context(|| format!("failed to continue into level '{name}'"))?;
            consumed += play(&mut session, &steps[consumed..])?;
        }

        if consumed < steps.len() {
            tracing::info!(skipped = steps.len() - consumed, "level over; remaining actions ignored");
        }

        if let Some(path) = &self.log_out {
            session.log().save(path)?;
            tracing::info!(path = %path.display(), turns = session.log().len(), "action log saved");
        }

        print_outcome(&session, self.render);
        Ok(())
    }
}
