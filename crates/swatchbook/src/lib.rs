//! # Swatchbook - Named Palettes as CSS Custom Properties
//!
//! `swatchbook` keeps a fixed set of named color palettes, applies one by
//! writing CSS custom properties onto a document root, remembers the choice
//! in a key-value store and renders a picker listing every palette.
//!
//! ## Core Concepts
//!
//! - [`Theme`]: an immutable palette (display name, icon, color attributes)
//! - [`ThemeRegistry`]: ordered key → palette mapping with a default key and
//!   an optional dark key; [`builtin_registry`] ships seven palettes
//! - [`ThemeManager`]: owns the current selection and drives the environment
//! - [`SelectionStore`], [`Document`], [`Notifier`], [`PickerCloser`]: the
//!   injected boundaries, with in-memory and file-backed implementations
//! - [`css_var_name`]: the attribute → custom property naming rule
//!
//! ## Quick Start
//!
//! ```rust
//! use swatchbook::{builtin_registry, MemoryDocument, MemoryStore, ThemeManager};
//!
//! let mut manager = ThemeManager::new(
//!     builtin_registry(),
//!     MemoryStore::new(),
//!     MemoryDocument::new(),
//! );
//!
//! // Construction applied the default palette.
//! assert_eq!(manager.current(), "light");
//! assert_eq!(manager.document().property("--surface-alt"), Some("#eef2ff"));
//!
//! // Unknown keys are ignored.
//! assert!(!manager.select("sepia"));
//! assert_eq!(manager.current(), "light");
//!
//! manager.select("dark");
//! assert_eq!(manager.document().attribute("data-theme"), Some("dark"));
//!
//! manager.reset();
//! assert_eq!(manager.document().attribute("data-theme"), None);
//! ```
//!
//! ## Custom Palettes
//!
//! Registries can be loaded from YAML, keyed by palette with the camelCase
//! attribute identifiers. Every value is checked with the CSS tokenizer so
//! a palette file cannot break out of a declaration. See
//! [`ThemeRegistry::from_yaml`].

mod apply;
mod config;
mod css;
mod env;
mod error;
mod manager;
mod picker;
mod registry;
mod theme;

pub use apply::apply_theme;
pub use config::{ManagerConfig, Messages};
pub use css::{css_var_name, root_stylesheet, validate_value};
pub use env::{
    Document, FileStore, MemoryDocument, MemoryStore, Notification, Notifier, PickerCloser,
    SelectionStore,
};
pub use error::SwatchError;
pub use manager::ThemeManager;
pub use picker::{picker_entries, render_picker, PickerEntry};
pub use registry::{ResolvedTheme, ThemeRegistry};
pub use theme::{builtin_registry, Theme, ATTRIBUTES, DARK_KEY, DEFAULT_KEY};
