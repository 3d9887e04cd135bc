use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;
use viewstate_core::consts::SEGMENTATION_PRESENTATION_ID;
use viewstate_core::presentation::PresentationIdDispatcher;
use viewstate_core::viewport::ViewportRegistry;

use super::load_config;
use crate::summary::{print_assignments, Assignment};

#[derive(Args)]
pub struct AssignArgs {
    /// Viewport snapshot (TOML or JSON)
    pub snapshot: PathBuf,

    /// Presentation id kind
    #[arg(long, default_value = SEGMENTATION_PRESENTATION_ID)]
    pub kind: String,

    /// Drop ids already present in the snapshot before assigning
    #[arg(long)]
    pub fresh: bool,

    /// Config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Resolve viewports one at a time in snapshot order, recording each id
/// before resolving the next, the way a layout restore fills its grid.
pub fn run(args: &AssignArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let mut registry = ViewportRegistry::load(&args.snapshot)
        .with_context(|| format!("Failed to read snapshot {}", args.snapshot.display()))?;

    if args.fresh {
        for vp in registry.viewports.values_mut() {
            if let Some(opts) = vp.viewport_options.as_mut() {
                opts.presentation_ids.remove(&args.kind);
            }
        }
    }

    let dispatcher = PresentationIdDispatcher::with_defaults(&config.presentation);
    let viewports: Vec<_> = registry.iter().cloned().collect();
    let mut rows = Vec::with_capacity(viewports.len());

    for vp in &viewports {
        // A viewport re-resolving the id it already holds is a self-update.
        let same = vp.presentation_id(&args.kind).is_some();
        let id = dispatcher.resolve(&args.kind, vp, &registry, same);
        debug!(viewport = %vp.viewport_id, same, id = ?id, "Resolved");
        if let Some(ref id) = id {
            registry.assign(vp, &args.kind, id.clone());
        }
        rows.push(Assignment {
            viewport_id: vp.viewport_id.clone(),
            display_sets: vp.display_set_instance_uids.len(),
            presentation_id: id,
        });
    }

    print_assignments(&args.kind, &rows);
    Ok(())
}
