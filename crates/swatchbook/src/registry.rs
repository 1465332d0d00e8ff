//! Ordered registry of palettes.
//!
//! The registry maps stable string keys to [`Theme`]s. Keys are
//! case-sensitive and never normalized; the same key is used for storage
//! and for picker entries. Iteration follows definition order, which is
//! the order the picker lists palettes in.
//!
//! Two keys are designated:
//!
//! - the **default** key, selected when nothing valid is persisted and on
//!   reset. It must be present, so construction fails without it.
//! - the optional **dark** key. Applying that palette sets the dark marker
//!   attribute on the document root.
//!
//! # Example
//!
//! ```rust
//! use swatchbook::builtin_registry;
//!
//! let registry = builtin_registry();
//! let resolved = registry.resolve("dark").unwrap();
//! assert!(resolved.dark);
//! assert_eq!(resolved.theme.name, "Dark Mode");
//! assert!(registry.resolve("Dark").is_none());
//! ```

use std::path::Path;

use crate::error::SwatchError;
use crate::theme::Theme;

/// A registry entry looked up by key.
///
/// This is what [`apply_theme`](crate::apply_theme) consumes: the dark
/// marker is decided here, from the key being applied, so applying never
/// depends on which palette happens to be selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedTheme<'a> {
    /// Registry key.
    pub key: &'a str,
    /// The palette.
    pub theme: &'a Theme,
    /// Whether `key` is the registry's dark key.
    pub dark: bool,
}

/// Immutable, ordered mapping of keys to palettes.
#[derive(Debug, Clone)]
pub struct ThemeRegistry {
    entries: Vec<(String, Theme)>,
    default_index: usize,
    dark_index: Option<usize>,
}

impl ThemeRegistry {
    /// Builds a registry from `(key, theme)` pairs.
    ///
    /// # Errors
    ///
    /// - [`SwatchError::EmptyRegistry`] when `entries` is empty
    /// - [`SwatchError::DuplicateKey`] when a key repeats
    /// - [`SwatchError::MissingDefault`] when `default_key` is not a key
    /// - [`SwatchError::InvalidValue`] when an attribute fails
    ///   [`validate_value`](crate::validate_value)
    pub fn new(
        entries: Vec<(String, Theme)>,
        default_key: impl Into<String>,
    ) -> Result<Self, SwatchError> {
        let default_key = default_key.into();

        if entries.is_empty() {
            return Err(SwatchError::EmptyRegistry);
        }
        for (i, (key, theme)) in entries.iter().enumerate() {
            if entries[..i].iter().any(|(k, _)| k == key) {
                return Err(SwatchError::DuplicateKey(key.clone()));
            }
            theme.validate(key)?;
        }
        let default_index = entries
            .iter()
            .position(|(k, _)| *k == default_key)
            .ok_or(SwatchError::MissingDefault(default_key))?;

        Ok(Self {
            entries,
            default_index,
            dark_index: None,
        })
    }

    /// Designates the dark key.
    pub fn with_dark_key(mut self, key: impl Into<String>) -> Result<Self, SwatchError> {
        let key = key.into();
        let index = self.position(&key).ok_or(SwatchError::MissingDark(key))?;
        self.dark_index = Some(index);
        Ok(self)
    }

    /// Parses a registry from a YAML mapping of key to theme.
    ///
    /// Document order becomes registry order.
    ///
    /// ```rust
    /// use swatchbook::{builtin_registry, ThemeRegistry};
    ///
    /// let light = builtin_registry().get("light").unwrap().clone();
    /// let mut themes = serde_yaml::Mapping::new();
    /// themes.insert("paper".into(), serde_yaml::to_value(light).unwrap());
    /// let yaml = serde_yaml::to_string(&themes).unwrap();
    ///
    /// let registry = ThemeRegistry::from_yaml(&yaml, "paper", None).unwrap();
    /// assert_eq!(registry.keys().collect::<Vec<_>>(), vec!["paper"]);
    /// ```
    pub fn from_yaml(
        yaml: &str,
        default_key: &str,
        dark_key: Option<&str>,
    ) -> Result<Self, SwatchError> {
        let mapping: serde_yaml::Mapping =
            serde_yaml::from_str(yaml).map_err(|e| SwatchError::parse("themes", e.to_string()))?;

        let mut entries = Vec::with_capacity(mapping.len());
        for (key, value) in mapping {
            let key = match key {
                serde_yaml::Value::String(key) => key,
                other => {
                    return Err(SwatchError::parse(
                        "themes",
                        format!("theme keys must be strings, found {:?}", other),
                    ))
                }
            };
            let theme: Theme = serde_yaml::from_value(value)
                .map_err(|e| SwatchError::parse("themes", format!("theme '{}': {}", key, e)))?;
            entries.push((key, theme));
        }

        let registry = Self::new(entries, default_key)?;
        match dark_key {
            Some(dark) => registry.with_dark_key(dark),
            None => Ok(registry),
        }
    }

    /// Reads a YAML registry from disk. See [`from_yaml`](Self::from_yaml).
    pub fn from_file<P: AsRef<Path>>(
        path: P,
        default_key: &str,
        dark_key: Option<&str>,
    ) -> Result<Self, SwatchError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| SwatchError::io(path, e))?;
        Self::from_yaml(&content, default_key, dark_key)
    }

    /// Used for the built-in palettes, which are known to be well formed.
    pub(crate) fn from_parts_unchecked(
        entries: Vec<(String, Theme)>,
        default_key: &str,
        dark_key: Option<&str>,
    ) -> Self {
        let position = |key: &str| entries.iter().position(|(k, _)| k == key);
        let default_index = position(default_key).unwrap_or(0);
        let dark_index = dark_key.and_then(position);
        Self {
            entries,
            default_index,
            dark_index,
        }
    }

    /// Index of `key` in registry order.
    pub(crate) fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    /// Entry at an index obtained from [`position`](Self::position) or
    /// [`default_index`](Self::default_index).
    pub(crate) fn resolve_index(&self, index: usize) -> ResolvedTheme<'_> {
        let (key, theme) = &self.entries[index];
        ResolvedTheme {
            key: key.as_str(),
            theme,
            dark: self.dark_index == Some(index),
        }
    }

    pub(crate) fn default_index(&self) -> usize {
        self.default_index
    }

    /// Returns the palette stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Theme> {
        self.position(key).map(|index| &self.entries[index].1)
    }

    /// Returns the entry stored under `key` along with its dark flag.
    pub fn resolve(&self, key: &str) -> Option<ResolvedTheme<'_>> {
        self.position(key).map(|index| self.resolve_index(index))
    }

    /// Whether `key` names a palette.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Keys in registry order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// `(key, theme)` pairs in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Theme)> {
        self.entries.iter().map(|(k, t)| (k.as_str(), t))
    }

    /// Number of palettes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for registries built through [`new`](Self::new).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn default_key(&self) -> &str {
        &self.entries[self.default_index].0
    }

    pub fn dark_key(&self) -> Option<&str> {
        self.dark_index.map(|index| self.entries[index].0.as_str())
    }

    /// The default entry.
    pub fn resolve_default(&self) -> ResolvedTheme<'_> {
        self.resolve_index(self.default_index)
    }
}
