//! Picker markup.
//!
//! The picker lists every registry entry in order. Each entry shows a
//! gradient swatch built from the palette's primary and secondary colors
//! with its icon, the display name and the primary color value. The
//! selected entry gets the `active` class and a check icon.
//!
//! Entries carry their key in a `data-theme-key` attribute. Hosts attach
//! one click listener to the container and pass that key to
//! [`ThemeManager::select`](crate::ThemeManager::select).
//!
//! Markup is rendered through MiniJinja with HTML auto-escaping, so names
//! and icons loaded from theme files cannot inject markup.

use minijinja::{context, Environment};
use serde::Serialize;

use crate::error::SwatchError;
use crate::registry::ThemeRegistry;

const TEMPLATE_NAME: &str = "picker.html";

const PICKER_TEMPLATE: &str = r#"
{%- for entry in entries %}
<div class="color-option{% if entry.active %} active{% endif %}" data-theme-key="{{ entry.key }}">
    <div class="color-preview" style="background: {{ entry.preview }}">
        <i class="fas {{ entry.icon }}"></i>
    </div>
    <div class="color-info">
        <div class="color-name">{{ entry.name }}</div>
        <div class="color-value">{{ entry.primary }}</div>
    </div>
    {%- if entry.active %}
    <i class="fas fa-check-circle check-icon"></i>
    {%- endif %}
</div>
{%- endfor %}
"#;

/// One picker row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickerEntry {
    pub key: String,
    pub name: String,
    pub icon: String,
    pub primary: String,
    pub secondary: String,
    /// CSS background of the swatch.
    pub preview: String,
    /// Whether this entry is the current selection.
    pub active: bool,
}

/// Builds one entry per registry key, in registry order.
pub fn picker_entries(registry: &ThemeRegistry, current: &str) -> Vec<PickerEntry> {
    registry
        .iter()
        .map(|(key, theme)| PickerEntry {
            key: key.to_string(),
            name: theme.name.clone(),
            icon: theme.icon.clone(),
            primary: theme.primary.clone(),
            secondary: theme.secondary.clone(),
            preview: theme.preview_gradient(),
            active: key == current,
        })
        .collect()
}

/// Renders entries as picker markup.
pub fn render_picker(entries: &[PickerEntry]) -> Result<String, SwatchError> {
    let mut env = Environment::new();
    env.add_template(TEMPLATE_NAME, PICKER_TEMPLATE)?;
    let template = env.get_template(TEMPLATE_NAME)?;
    Ok(template.render(context! { entries => entries })?)
}
