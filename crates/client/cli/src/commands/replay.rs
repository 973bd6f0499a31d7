//! Verify a recorded action log.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use heist_core::TurnScheduler;
use heist_runtime::ActionLog;

use super::{load_config, load_level};
use crate::config::CliConfig;
use crate::report;

/// Re-run a saved action log from the level start and check every turn digest
#[derive(Parser)]
pub struct Replay {
    /// Level the log was recorded on (file or bundled name)
    #[arg(short, long, value_name = "LEVEL")]
    level: Option<String>,

    /// Action log written by `run --log-out`
    #[arg(long, value_name = "FILE")]
    log: PathBuf,

    /// Balance configuration the run used
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

impl Replay {
    pub fn execute(self, env: &CliConfig) -> Result<()> {
        let Some(level) = env.level_or(self.level) else {
            bail!("no level given; pass --level or set HEIST_LEVEL");
        };
        let config = load_config(env.config_or(self.config).as_ref())?;
        let log = ActionLog::load(&self.log)?;

        let initial = TurnScheduler::new(config.clone()).start_level(load_level(&level)?)?;
        let state = heist_runtime::replay(&initial, &config, &log)
            .with_context(|| format!("replay of {} failed", self.log.display()))?;

        tracing::info!(turns = log.len(), "replay verified");
        println!("verified {} turns", log.len());
        println!("{}", report::summary(&state));
        Ok(())
    }
}
