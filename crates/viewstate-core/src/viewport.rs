use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ViewstateError};

/// Identifier of a viewport slot in the layout grid.
pub type ViewportId = String;

/// Identifier of a single image in a display set stack.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageId(pub String);

impl ImageId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ImageId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Opaque error value reported by the image pipeline.
///
/// Never interpreted or classified here; it is carried through to the
/// overlay for display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorPayload(pub String);

impl ErrorPayload {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl fmt::Display for ErrorPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewportOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewport_type: Option<String>,
    /// Presentation ids already assigned to this viewport, keyed by kind.
    #[serde(default)]
    pub presentation_ids: BTreeMap<String, String>,
}

/// A viewport as seen by the layout grid.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewportDescriptor {
    #[serde(default)]
    pub viewport_id: ViewportId,
    /// Ordered; the order is part of the presentation key.
    #[serde(default, rename = "displaySetInstanceUIDs")]
    pub display_set_instance_uids: Vec<String>,
    #[serde(default)]
    pub viewport_options: Option<ViewportOptions>,
}

impl ViewportDescriptor {
    pub fn new<S: Into<String>>(
        viewport_id: impl Into<String>,
        display_set_instance_uids: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            viewport_id: viewport_id.into(),
            display_set_instance_uids: display_set_instance_uids
                .into_iter()
                .map(Into::into)
                .collect(),
            viewport_options: Some(ViewportOptions::default()),
        }
    }

    /// Builder-style helper recording an already assigned presentation id.
    pub fn with_presentation_id(mut self, kind: &str, id: impl Into<String>) -> Self {
        self.viewport_options
            .get_or_insert_with(ViewportOptions::default)
            .presentation_ids
            .insert(kind.to_string(), id.into());
        self
    }

    pub fn presentation_id(&self, kind: &str) -> Option<&str> {
        self.viewport_options
            .as_ref()
            .and_then(|opts| opts.presentation_ids.get(kind))
            .map(String::as_str)
    }
}

/// Snapshot of every open viewport, keyed by viewport id.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewportRegistry {
    #[serde(default)]
    pub viewports: BTreeMap<ViewportId, ViewportDescriptor>,
}

impl ViewportRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from descriptors, keyed by their `viewport_id`.
    pub fn from_viewports(viewports: impl IntoIterator<Item = ViewportDescriptor>) -> Self {
        let viewports = viewports
            .into_iter()
            .map(|vp| (vp.viewport_id.clone(), vp))
            .collect();
        Self { viewports }
    }

    /// Load a snapshot from a `.toml` or `.json` file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let mut registry: Self = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => toml::from_str(&contents)?,
            Some("json") => serde_json::from_str(&contents)?,
            other => {
                return Err(ViewstateError::UnsupportedSnapshot(
                    other.unwrap_or("<none>").to_string(),
                ))
            }
        };
        // Map keys win over a missing or stale embedded id.
        for (id, vp) in registry.viewports.iter_mut() {
            vp.viewport_id.clone_from(id);
        }
        Ok(registry)
    }

    pub fn len(&self) -> usize {
        self.viewports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.viewports.is_empty()
    }

    pub fn get(&self, viewport_id: &str) -> Result<&ViewportDescriptor> {
        self.viewports
            .get(viewport_id)
            .ok_or_else(|| ViewstateError::UnknownViewport(viewport_id.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ViewportDescriptor> {
        self.viewports.values()
    }

    /// Every viewport holding an id of `kind`, as `(viewport_id, presentation_id)`.
    pub fn assigned(&self, kind: &str) -> impl Iterator<Item = (&str, &str)> + '_ {
        let kind = kind.to_string();
        self.viewports
            .iter()
            .filter_map(move |(vp_id, vp)| vp.presentation_id(&kind).map(|id| (vp_id.as_str(), id)))
    }

    /// Record a presentation id for a viewport, inserting the viewport if absent.
    pub fn assign(&mut self, viewport: &ViewportDescriptor, kind: &str, presentation_id: String) {
        let entry = self
            .viewports
            .entry(viewport.viewport_id.clone())
            .or_insert_with(|| viewport.clone());
        entry
            .viewport_options
            .get_or_insert_with(ViewportOptions::default)
            .presentation_ids
            .insert(kind.to_string(), presentation_id);
    }
}
