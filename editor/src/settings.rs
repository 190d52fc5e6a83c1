//! Editor settings management
//!
//! Window titles and layout values for the entity editor, stored as JSON.

use crate::error::EditorError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Layout and behaviour settings for the entity editor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Title of the entity editor window
    pub editor_window_title: String,
    /// Title of the entity list window
    pub list_window_title: String,
    /// Title of the combined list and editor window
    pub combo_window_title: String,
    /// Indentation applied to an expanded component's fields
    pub component_indent: f32,
    /// Height of the scrolling entity list region
    pub list_height: f32,
    /// Whether listed entities can be dragged onto entity reference fields
    pub entity_drag_drop: bool,
    /// Settings version for future migration support
    pub version: u32,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            editor_window_title: "Entity Editor".to_string(),
            list_window_title: "Entity List".to_string(),
            combo_window_title: "Entities".to_string(),
            component_indent: 30.0,
            list_height: 200.0,
            entity_drag_drop: true,
            version: 1,
        }
    }
}

impl EditorSettings {
    /// Get the default path for the settings file
    pub fn default_path() -> PathBuf {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join("entity_editor.json")
    }

    /// Save settings to the default location
    pub fn save(&self) -> Result<(), EditorError> {
        self.save_to(Self::default_path())
    }

    /// Load settings from the default location
    ///
    /// A missing or unreadable file yields the defaults.
    pub fn load() -> Result<Self, EditorError> {
        let path = Self::default_path();
        if !path.exists() {
            info!("No editor settings file found, using defaults");
            return Ok(Self::default());
        }

        match Self::load_from(&path) {
            Ok(settings) => Ok(settings),
            Err(EditorError::Json(e)) => {
                warn!("Failed to parse editor settings: {}. Using defaults.", e);
                Ok(Self::default())
            }
            Err(e) => Err(e),
        }
    }

    /// Save settings to a specific path
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<(), EditorError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, json)?;
        info!("Saved editor settings to {:?}", path.as_ref());
        Ok(())
    }

    /// Load settings from a specific path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, EditorError> {
        let content = std::fs::read_to_string(&path)?;
        let settings = serde_json::from_str(&content)?;
        info!("Loaded editor settings from {:?}", path.as_ref());
        Ok(settings)
    }
}
