//! Writing a palette onto the document root.

use crate::config::ManagerConfig;
use crate::css::css_var_name;
use crate::env::Document;
use crate::registry::ResolvedTheme;

/// Applies a resolved palette to `document`.
///
/// The dark marker attribute is set when the entry being applied is the
/// registry's dark entry and removed otherwise. Every color attribute is
/// then written as a root custom property named by [`css_var_name`], in
/// attribute order. `None` leaves the document untouched.
///
/// ```rust
/// use swatchbook::{apply_theme, builtin_registry, ManagerConfig, MemoryDocument};
///
/// let registry = builtin_registry();
/// let mut document = MemoryDocument::new();
/// apply_theme(&mut document, registry.resolve("dark"), &ManagerConfig::default());
///
/// assert_eq!(document.attribute("data-theme"), Some("dark"));
/// assert_eq!(document.property("--surface-alt"), Some("#1e293b"));
/// ```
pub fn apply_theme<D: Document + ?Sized>(
    document: &mut D,
    theme: Option<ResolvedTheme<'_>>,
    config: &ManagerConfig,
) {
    let Some(resolved) = theme else {
        tracing::debug!("no theme to apply");
        return;
    };

    if resolved.dark {
        document.set_root_attribute(&config.marker_attribute, &config.marker_value);
    } else {
        document.remove_root_attribute(&config.marker_attribute);
    }

    for (attribute, value) in resolved.theme.properties() {
        document.set_root_property(&css_var_name(attribute), value);
    }

    tracing::debug!(key = resolved.key, dark = resolved.dark, "applied theme");
}
