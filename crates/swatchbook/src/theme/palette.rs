use serde::{Deserialize, Serialize};

use crate::css::validate_value;
use crate::error::SwatchError;

/// Identifiers of the color attributes, in application order.
///
/// `name` and `icon` are deliberately absent: they describe the palette
/// and are never written to the document.
pub const ATTRIBUTES: [&str; 15] = [
    "appBg",
    "background",
    "surface",
    "surfaceAlt",
    "surfaceMuted",
    "primary",
    "primarySoft",
    "secondary",
    "success",
    "warning",
    "danger",
    "text",
    "textMuted",
    "border",
    "shadowLg",
];

/// An immutable color palette.
///
/// Every color attribute is a CSS value kept as a string (hex, color
/// function or, for `shadow_lg`, a full shadow declaration).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Theme {
    /// Display name shown in the picker.
    pub name: String,
    /// Icon identifier (a Font Awesome class such as `fa-sun`).
    pub icon: String,
    pub app_bg: String,
    pub background: String,
    pub surface: String,
    pub surface_alt: String,
    pub surface_muted: String,
    pub primary: String,
    pub primary_soft: String,
    pub secondary: String,
    pub success: String,
    pub warning: String,
    pub danger: String,
    pub text: String,
    pub text_muted: String,
    pub border: String,
    pub shadow_lg: String,
}

impl Theme {
    /// Parses a single theme from YAML.
    ///
    /// All attributes are required and unknown attributes are rejected.
    /// Values are not validated here; see [`validate`](Self::validate).
    pub fn from_yaml(yaml: &str) -> Result<Self, SwatchError> {
        serde_yaml::from_str(yaml).map_err(|e| SwatchError::parse("theme", e.to_string()))
    }

    /// Returns `(attribute, value)` pairs for every color attribute.
    pub fn properties(&self) -> [(&'static str, &str); 15] {
        [
            (ATTRIBUTES[0], self.app_bg.as_str()),
            (ATTRIBUTES[1], self.background.as_str()),
            (ATTRIBUTES[2], self.surface.as_str()),
            (ATTRIBUTES[3], self.surface_alt.as_str()),
            (ATTRIBUTES[4], self.surface_muted.as_str()),
            (ATTRIBUTES[5], self.primary.as_str()),
            (ATTRIBUTES[6], self.primary_soft.as_str()),
            (ATTRIBUTES[7], self.secondary.as_str()),
            (ATTRIBUTES[8], self.success.as_str()),
            (ATTRIBUTES[9], self.warning.as_str()),
            (ATTRIBUTES[10], self.danger.as_str()),
            (ATTRIBUTES[11], self.text.as_str()),
            (ATTRIBUTES[12], self.text_muted.as_str()),
            (ATTRIBUTES[13], self.border.as_str()),
            (ATTRIBUTES[14], self.shadow_lg.as_str()),
        ]
    }

    /// Looks up a color attribute by its camelCase identifier.
    pub fn attribute(&self, attribute: &str) -> Option<&str> {
        self.properties()
            .into_iter()
            .find(|(name, _)| *name == attribute)
            .map(|(_, value)| value)
    }

    /// The preview gradient used by the picker swatch.
    pub fn preview_gradient(&self) -> String {
        format!(
            "linear-gradient(135deg, {}, {})",
            self.primary, self.secondary
        )
    }

    /// Checks every color attribute with [`validate_value`].
    ///
    /// `key` is only used to label the error.
    pub fn validate(&self, key: &str) -> Result<(), SwatchError> {
        for (attribute, value) in self.properties() {
            validate_value(value).map_err(|reason| SwatchError::InvalidValue {
                theme: key.to_string(),
                attribute: attribute.to_string(),
                reason,
            })?;
        }
        Ok(())
    }
}
