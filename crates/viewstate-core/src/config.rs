use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_ERROR_MESSAGE, DEFAULT_ERROR_TITLE, DEFAULT_LOADING_TEXT, DEFAULT_SUFFIX_BASE,
    PRESENTATION_JOIN_STR,
};
use crate::error::Result;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewerConfig {
    #[serde(default)]
    pub presentation: PresentationConfig,
    #[serde(default)]
    pub overlay: OverlayConfig,
}

impl ViewerConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// How presentation ids are built.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresentationConfig {
    /// Placed between display set UIDs and before a uniqueness suffix.
    pub separator: String,
    /// First suffix tried on a collision.
    pub suffix_base: u32,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            separator: PRESENTATION_JOIN_STR.to_string(),
            suffix_base: DEFAULT_SUFFIX_BASE,
        }
    }
}

/// Texts for the loading/error overlay.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    pub loading_text: String,
    pub error_title: String,
    pub error_message: String,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            loading_text: DEFAULT_LOADING_TEXT.to_string(),
            error_title: DEFAULT_ERROR_TITLE.to_string(),
            error_message: DEFAULT_ERROR_MESSAGE.to_string(),
        }
    }
}
