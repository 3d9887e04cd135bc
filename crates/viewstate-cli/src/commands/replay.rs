use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use serde::Deserialize;
use viewstate_core::overlay::{LoadingOverlayController, ViewportElement, ViewportEvent};

use super::load_config;
use crate::summary::{print_final_state, print_replay_step};

#[derive(Args)]
pub struct ReplayArgs {
    /// Event log (TOML)
    pub events: PathBuf,

    /// Config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Deserialize)]
struct EventLog {
    #[serde(default = "default_viewport")]
    viewport: String,
    #[serde(default)]
    events: Vec<ViewportEvent>,
}

fn default_viewport() -> String {
    "default".to_string()
}

pub fn run(args: &ReplayArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let contents = std::fs::read_to_string(&args.events)
        .with_context(|| format!("Failed to read event log {}", args.events.display()))?;
    let log: EventLog = toml::from_str(&contents).context("Invalid event log")?;

    let element = Arc::new(ViewportElement::new(log.viewport.clone()));
    let mut overlay = LoadingOverlayController::mount(element.clone(), log.viewport);

    for (index, event) in log.events.into_iter().enumerate() {
        let label = event.to_string();
        element.emit(event);
        let transitions = overlay.poll_events();
        print_replay_step(index + 1, &label, &transitions);
    }

    print_final_state(&overlay.state(), &config.overlay);
    overlay.unmount();
    Ok(())
}
