//! The theme manager: current selection, persistence and picker updates.
//!
//! [`ThemeManager`] owns the one piece of mutable state, the current
//! selection, and routes every change through the injected environment:
//!
//! ```text
//!                 select / load_saved
//!   SelectionStore ──────────────► current ──► Document (attributes, properties)
//!         ▲                           │
//!         └──── save / reset ─────────┘──────► picker container
//! ```
//!
//! The selection is always a registry key. It starts as the persisted key
//! if that names a palette, otherwise the default key, and the matching
//! palette is applied during construction so the document never shows
//! unstyled content.
//!
//! Operations do not return errors. Unknown keys, an unmounted picker and
//! missing hooks are skipped; store and template failures are logged with
//! `tracing` and dropped.
//!
//! # Example
//!
//! ```rust
//! use swatchbook::{builtin_registry, MemoryDocument, MemoryStore, ThemeManager};
//!
//! let store = MemoryStore::new().with_entry("selectedTheme", "blue");
//! let document = MemoryDocument::new().with_element("colorOptions");
//! let mut manager = ThemeManager::new(builtin_registry(), store, document);
//! assert_eq!(manager.current(), "blue");
//!
//! manager.select("dark");
//! assert_eq!(manager.document().attribute("data-theme"), Some("dark"));
//!
//! manager.save();
//! assert_eq!(manager.store().entry("selectedTheme"), Some("dark"));
//! ```

use std::sync::Arc;

use crate::apply::apply_theme;
use crate::config::ManagerConfig;
use crate::css::root_stylesheet;
use crate::env::{Document, Notification, Notifier, PickerCloser, SelectionStore};
use crate::picker::{picker_entries, render_picker, PickerEntry};
use crate::registry::{ResolvedTheme, ThemeRegistry};

/// Tracks and applies the selected palette.
pub struct ThemeManager<S, D> {
    registry: Arc<ThemeRegistry>,
    config: ManagerConfig,
    /// Registry index of the current selection.
    current: usize,
    store: S,
    document: D,
    notifier: Option<Box<dyn Notifier>>,
    picker_closer: Option<Box<dyn PickerCloser>>,
}

impl<S: SelectionStore, D: Document> ThemeManager<S, D> {
    /// Creates a manager with the default configuration.
    pub fn new(registry: Arc<ThemeRegistry>, store: S, document: D) -> Self {
        Self::with_config(registry, store, document, ManagerConfig::default())
    }

    /// Creates a manager, restores the selection from `store` and applies it.
    pub fn with_config(
        registry: Arc<ThemeRegistry>,
        store: S,
        document: D,
        config: ManagerConfig,
    ) -> Self {
        let current = read_saved(&registry, &store, &config.storage_key)
            .unwrap_or_else(|| registry.default_index());

        let mut manager = Self {
            registry,
            config,
            current,
            store,
            document,
            notifier: None,
            picker_closer: None,
        };
        manager.apply_current();
        manager
    }

    /// Installs the confirmation hook.
    pub fn with_notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Some(Box::new(notifier));
        self
    }

    /// Installs the picker dismissal hook.
    pub fn with_picker_closer(mut self, closer: impl PickerCloser + 'static) -> Self {
        self.picker_closer = Some(Box::new(closer));
        self
    }

    /// The palette registry.
    pub fn themes(&self) -> &Arc<ThemeRegistry> {
        &self.registry
    }

    /// Key of the current selection.
    pub fn current(&self) -> &str {
        self.current_theme().key
    }

    /// The current selection with its palette.
    pub fn current_theme(&self) -> ResolvedTheme<'_> {
        self.registry.resolve_index(self.current)
    }

    pub fn config(&self) -> &ManagerConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }

    /// Consumes the manager, returning the store and document.
    pub fn into_parts(self) -> (S, D) {
        (self.store, self.document)
    }

    /// Applies a palette without changing the selection.
    ///
    /// The dark marker follows the entry passed in, not the selection.
    pub fn apply_theme(&mut self, theme: Option<ResolvedTheme<'_>>) {
        apply_theme(&mut self.document, theme, &self.config);
    }

    /// Selects, applies and highlights the palette stored under `key`.
    ///
    /// Unknown keys leave everything unchanged and return `false`. The
    /// choice is not persisted; see [`save`](Self::save).
    pub fn select(&mut self, key: &str) -> bool {
        let Some(index) = self.registry.position(key) else {
            tracing::debug!(%key, "unknown theme key, selection unchanged");
            return false;
        };

        self.current = index;
        self.apply_current();
        self.render_picker();
        true
    }

    /// Rebuilds the picker container, if it is mounted.
    pub fn render_picker(&mut self) {
        let container = &self.config.container_id;
        if !self.document.has_element(container) {
            tracing::debug!(%container, "picker container not mounted");
            return;
        }

        match render_picker(&self.picker_entries()) {
            Ok(html) => self.document.set_inner_html(container, &html),
            Err(err) => tracing::warn!(error = %err, "failed to render picker"),
        }
    }

    /// The picker rows for the current selection.
    pub fn picker_entries(&self) -> Vec<PickerEntry> {
        picker_entries(&self.registry, self.current())
    }

    /// Selects the default palette and forgets the saved one.
    pub fn reset(&mut self) {
        let default_key = self.registry.default_key().to_string();
        self.select(&default_key);

        if let Err(err) = self.store.remove(&self.config.storage_key) {
            tracing::warn!(error = %err, "failed to clear saved theme");
        }

        self.notify(self.config.messages.reset.clone());
    }

    /// Persists the current selection and dismisses the picker.
    ///
    /// Returns `false`, with nothing announced, if the store rejects the
    /// write.
    pub fn save(&mut self) -> bool {
        let key = self.current().to_string();
        if let Err(err) = self.store.set(&self.config.storage_key, &key) {
            tracing::warn!(error = %err, %key, "failed to save theme");
            return false;
        }

        self.notify(self.config.messages.saved.clone());

        match &self.picker_closer {
            Some(closer) => closer.close(),
            None => tracing::debug!("no picker closer installed"),
        }
        true
    }

    /// Restores the saved selection and applies the current palette.
    ///
    /// A saved key that is missing or unknown keeps the current selection
    /// rather than falling back to the default.
    pub fn load_saved(&mut self) {
        if let Some(index) = read_saved(&self.registry, &self.store, &self.config.storage_key) {
            self.current = index;
        }
        self.apply_current();
    }

    /// The `:root` rules for the current palette, for inlining before first
    /// paint.
    pub fn stylesheet(&self) -> String {
        root_stylesheet(self.current_theme(), &self.config)
    }

    fn apply_current(&mut self) {
        let theme = self.registry.resolve_index(self.current);
        apply_theme(&mut self.document, Some(theme), &self.config);
    }

    fn notify(&self, text: String) {
        let notification = Notification::new(self.config.messages.success_icon.clone(), text);
        match &self.notifier {
            Some(notifier) => notifier.notify(&notification),
            None => tracing::debug!(message = %notification, "no notifier installed"),
        }
    }
}

/// Index of the saved key, if one is stored and names a palette.
fn read_saved<S: SelectionStore>(
    registry: &ThemeRegistry,
    store: &S,
    storage_key: &str,
) -> Option<usize> {
    let saved = match store.get(storage_key) {
        Ok(saved) => saved?,
        Err(err) => {
            tracing::warn!(error = %err, "failed to read saved theme");
            return None;
        }
    };

    let index = registry.position(&saved);
    if index.is_none() {
        tracing::debug!(%saved, "saved theme key is not in the registry");
    }
    index
}
