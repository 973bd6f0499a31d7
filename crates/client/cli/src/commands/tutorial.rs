//! Walk through the bundled tutorial level.

use anyhow::Result;
use clap::Parser;
use heist_content::{ConfigLoader, LevelLoader};
use heist_runtime::Session;

use super::{parse_script, play, print_outcome};
use crate::config::CliConfig;

/// Start room to exit along the lower corridor, smoking past the guard's beat.
const ROUTE: &str = "n,e,e,e,smoke,e,n,n,n,n,n,e,e,e,e";

const BRIEFING: &[&str] = &[
    "Reach the exit (E) without filling the alert meter.",
    "Guards see along straight lines; walls block sight and smoke hides you.",
    "A decoy draws nearby guards to investigate the noise.",
    "Collected loot scores more the lower the alert.",
];

/// Play the tutorial along a fixed or custom route
#[derive(Parser)]
pub struct Tutorial {
    /// Custom route instead of the scripted one
    #[arg(short, long)]
    actions: Option<String>,

    /// Session seed
    #[arg(short, long)]
    seed: Option<u64>,
}

impl Tutorial {
    pub fn execute(self, env: &CliConfig) -> Result<()> {
        for line in BRIEFING {
            println!("{line}");
        }

        let steps = parse_script(self.actions.as_deref().unwrap_or(ROUTE))?;
        let mut session = Session::new(
            LevelLoader::tutorial()?,
            ConfigLoader::bundled()?,
            env.seed_or(self.seed),
        )?;
        play(&mut session, &steps)?;

        print_outcome(&session, true);
        Ok(())
    }
}
