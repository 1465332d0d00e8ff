//! Manager configuration.
//!
//! Every field has a default matching the conventions companion
//! stylesheets and markup rely on, so most hosts use
//! [`ManagerConfig::default`]. A partial YAML document overrides only what
//! it names:
//!
//! ```rust
//! use swatchbook::ManagerConfig;
//!
//! let config = ManagerConfig::from_yaml(r#"
//! storage_key: paletteChoice
//! messages:
//!   saved: Theme saved!
//! "#).unwrap();
//!
//! assert_eq!(config.storage_key, "paletteChoice");
//! assert_eq!(config.container_id, "colorOptions");
//! assert_eq!(config.messages.saved, "Theme saved!");
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SwatchError;

/// Settings for a [`ThemeManager`](crate::ThemeManager).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ManagerConfig {
    /// Store entry holding the saved key.
    pub storage_key: String,
    /// Id of the element the picker renders into.
    pub container_id: String,
    /// Root attribute set while the dark palette is applied.
    pub marker_attribute: String,
    /// Value of [`marker_attribute`](Self::marker_attribute).
    pub marker_value: String,
    /// Confirmation texts.
    pub messages: Messages,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            storage_key: "selectedTheme".to_string(),
            container_id: "colorOptions".to_string(),
            marker_attribute: "data-theme".to_string(),
            marker_value: "dark".to_string(),
            messages: Messages::default(),
        }
    }
}

impl ManagerConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self, SwatchError> {
        serde_yaml::from_str(yaml).map_err(|e| SwatchError::parse("config", e.to_string()))
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SwatchError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| SwatchError::io(path, e))?;
        Self::from_yaml(&content)
    }
}

/// Localized confirmation texts and their success icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Messages {
    /// Icon class embedded in every confirmation.
    pub success_icon: String,
    /// Shown after a reset to the default palette.
    pub reset: String,
    /// Shown after the selection is saved.
    pub saved: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            success_icon: "fa-check".to_string(),
            reset: "Standart rəngə qaytarıldı!".to_string(),
            saved: "Tema yadda saxlandı!".to_string(),
        }
    }
}
