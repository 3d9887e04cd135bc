use std::collections::HashSet;

use crate::config::PresentationConfig;
use crate::viewport::{ViewportDescriptor, ViewportRegistry};

/// Make `candidate` unique among the ids of `kind` already assigned in
/// `registry`.
///
/// A taken candidate gets `<separator><n>` appended, with `n` counting up
/// from the configured suffix base. With `is_updating_same_viewport`, the
/// target viewport's own assignment does not count as taken.
pub fn add_unique_suffix(
    candidate: String,
    kind: &str,
    viewport: &ViewportDescriptor,
    registry: &ViewportRegistry,
    is_updating_same_viewport: bool,
    config: &PresentationConfig,
) -> String {
    let taken: HashSet<&str> = registry
        .assigned(kind)
        .filter(|(vp_id, _)| !(is_updating_same_viewport && *vp_id == viewport.viewport_id))
        .map(|(_, id)| id)
        .collect();

    if !taken.contains(candidate.as_str()) {
        return candidate;
    }

    // Terminates: `taken` is finite.
    let mut n = u64::from(config.suffix_base);
    loop {
        let key = format!("{candidate}{}{n}", config.separator);
        if !taken.contains(key.as_str()) {
            return key;
        }
        n += 1;
    }
}
