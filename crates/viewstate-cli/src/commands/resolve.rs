use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use viewstate_core::consts::SEGMENTATION_PRESENTATION_ID;
use viewstate_core::presentation::PresentationIdDispatcher;
use viewstate_core::viewport::ViewportRegistry;

use super::load_config;

#[derive(Args)]
pub struct ResolveArgs {
    /// Viewport snapshot (TOML or JSON)
    pub snapshot: PathBuf,

    /// Viewport to resolve
    #[arg(long)]
    pub viewport: String,

    /// Presentation id kind
    #[arg(long, default_value = SEGMENTATION_PRESENTATION_ID)]
    pub kind: String,

    /// The viewport is refreshing its own state
    #[arg(long)]
    pub same: bool,

    /// Config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: &ResolveArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let registry = ViewportRegistry::load(&args.snapshot)
        .with_context(|| format!("Failed to read snapshot {}", args.snapshot.display()))?;
    let viewport = registry.get(&args.viewport)?;

    let dispatcher = PresentationIdDispatcher::with_defaults(&config.presentation);
    match dispatcher.resolve(&args.kind, viewport, &registry, args.same) {
        Some(id) => println!("{id}"),
        None => println!("(none)"),
    }

    Ok(())
}
