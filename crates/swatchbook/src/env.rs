//! Environment abstractions for the theme manager.
//!
//! The manager never touches a browser or the filesystem directly. It talks
//! to four boundaries, each a trait so hosts can plug in the real thing and
//! tests can plug in fakes:
//!
//! - [`SelectionStore`]: durable key-value storage for the saved key
//! - [`Document`]: the root element's attributes and style properties, plus
//!   the picker container
//! - [`Notifier`]: optional user-facing confirmation messages
//! - [`PickerCloser`]: optional dismissal of the picker after saving
//!
//! Closures implement the two optional hooks, so a closure can be passed
//! straight to [`ThemeManager::with_notifier`] or
//! [`ThemeManager::with_picker_closer`]:
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use swatchbook::{builtin_registry, MemoryDocument, MemoryStore, Notification, ThemeManager};
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&seen);
//! let mut manager = ThemeManager::new(builtin_registry(), MemoryStore::new(), MemoryDocument::new())
//!     .with_notifier(move |n: &Notification| sink.borrow_mut().push(n.to_string()))
//!     .with_picker_closer(|| {});
//!
//! assert!(manager.save());
//! assert_eq!(*seen.borrow(), ["Tema yadda saxlandı!"]);
//! ```
//!
//! [`ThemeManager::with_notifier`]: crate::ThemeManager::with_notifier
//! [`ThemeManager::with_picker_closer`]: crate::ThemeManager::with_picker_closer

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::SwatchError;

/// Durable string storage, the equivalent of browser local storage.
pub trait SelectionStore {
    /// Reads an entry. A missing entry is `Ok(None)`.
    fn get(&self, key: &str) -> Result<Option<String>, SwatchError>;

    /// Writes an entry, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), SwatchError>;

    /// Deletes an entry. Deleting a missing entry is not an error.
    fn remove(&mut self, key: &str) -> Result<(), SwatchError>;
}

/// The parts of a document the manager writes to.
pub trait Document {
    /// Sets an attribute on the root element.
    fn set_root_attribute(&mut self, name: &str, value: &str);

    /// Removes an attribute from the root element.
    fn remove_root_attribute(&mut self, name: &str);

    /// Sets a style property (custom property included) on the root element.
    fn set_root_property(&mut self, name: &str, value: &str);

    /// Whether an element with this id is mounted.
    fn has_element(&self, id: &str) -> bool;

    /// Replaces the children of the element with this id.
    ///
    /// Only called after [`has_element`](Self::has_element) returned true.
    fn set_inner_html(&mut self, id: &str, html: &str);
}

/// A confirmation shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Icon class of the success marker, e.g. `fa-check`.
    pub icon: String,
    /// Localized message text.
    pub text: String,
}

impl Notification {
    pub fn new(icon: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            text: text.into(),
        }
    }

    /// The message as markup with the icon embedded before the text.
    pub fn html(&self) -> String {
        format!("<i class=\"fas {}\"></i> {}", self.icon, self.text)
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Displays confirmations.
pub trait Notifier {
    fn notify(&self, notification: &Notification);
}

impl<F: Fn(&Notification)> Notifier for F {
    fn notify(&self, notification: &Notification) {
        self(notification)
    }
}

/// Dismisses the picker UI.
pub trait PickerCloser {
    fn close(&self);
}

impl<F: Fn()> PickerCloser for F {
    fn close(&self) {
        self()
    }
}

// === In-memory implementations ===

/// Store backed by a map.
///
/// Cloning copies the entries, which is how tests simulate a new session
/// reading what the previous one saved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry.
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Direct read without the `Result` wrapper.
    pub fn entry(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl SelectionStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, SwatchError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SwatchError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), SwatchError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Document that records what was written to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryDocument {
    attributes: BTreeMap<String, String>,
    properties: BTreeMap<String, String>,
    elements: HashMap<String, String>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mounts an empty element with the given id.
    pub fn with_element(mut self, id: impl Into<String>) -> Self {
        self.elements.insert(id.into(), String::new());
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    /// All root style properties, sorted by name.
    pub fn properties(&self) -> &BTreeMap<String, String> {
        &self.properties
    }

    /// Current content of a mounted element.
    pub fn inner_html(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(String::as_str)
    }
}

impl Document for MemoryDocument {
    fn set_root_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    fn remove_root_attribute(&mut self, name: &str) {
        self.attributes.remove(name);
    }

    fn set_root_property(&mut self, name: &str, value: &str) {
        self.properties.insert(name.to_string(), value.to_string());
    }

    fn has_element(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    fn set_inner_html(&mut self, id: &str, html: &str) {
        if let Some(content) = self.elements.get_mut(id) {
            *content = html.to_string();
        }
    }
}

// === File-backed store ===

/// Store persisted as a flat JSON object on disk.
///
/// Every operation re-reads the file, so separate processes sharing the
/// path see each other's writes. A missing file reads as empty.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, SwatchError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(SwatchError::io(&self.path, e)),
        };
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&content).map_err(|e| {
            SwatchError::parse("store", format!("{}: {}", self.path.display(), e))
        })
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) -> Result<(), SwatchError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| SwatchError::io(parent, e))?;
            }
        }
        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| SwatchError::parse("store", e.to_string()))?;
        fs::write(&self.path, json).map_err(|e| SwatchError::io(&self.path, e))
    }
}

impl SelectionStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, SwatchError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SwatchError> {
        let mut entries = self.read_all()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_all(&entries)
    }

    fn remove(&mut self, key: &str) -> Result<(), SwatchError> {
        let mut entries = self.read_all()?;
        if entries.remove(key).is_some() {
            self.write_all(&entries)?;
        }
        Ok(())
    }
}
