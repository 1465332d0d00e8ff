//! Palette records and the built-in palettes.
//!
//! A [`Theme`] is a fully populated, immutable set of color attributes plus
//! a display name and an icon identifier. Themes are grouped under stable
//! keys in a [`ThemeRegistry`](crate::ThemeRegistry); the registry that ships
//! with the crate is available from [`builtin_registry`].
//!
//! Themes can also be written in YAML using the camelCase attribute
//! identifiers, which are the same identifiers that name the CSS custom
//! properties:
//!
//! ```rust
//! use swatchbook::Theme;
//!
//! let theme = Theme::from_yaml(r##"
//! name: Sand
//! icon: fa-umbrella-beach
//! appBg: "#fdf6e3"
//! background: "#fdf6e3"
//! surface: "#ffffff"
//! surfaceAlt: "#eee8d5"
//! surfaceMuted: "#f5efdc"
//! primary: "#b58900"
//! primarySoft: "#f3e2b3"
//! secondary: "#cb4b16"
//! success: "#859900"
//! warning: "#cb4b16"
//! danger: "#dc322f"
//! text: "#073642"
//! textMuted: "#657b83"
//! border: "#eee8d5"
//! shadowLg: "0 30px 60px rgba(7, 54, 66, 0.1)"
//! "##).unwrap();
//!
//! assert_eq!(theme.name, "Sand");
//! ```

pub(crate) mod builtin;
mod palette;

pub use builtin::{builtin_registry, DARK_KEY, DEFAULT_KEY};
pub use palette::{Theme, ATTRIBUTES};
