//! The palettes that ship with the crate.

use std::sync::Arc;

use once_cell::sync::Lazy;

use super::palette::Theme;
use crate::registry::ThemeRegistry;

/// Key selected when nothing valid has been persisted.
pub const DEFAULT_KEY: &str = "light";

/// Key whose application marks the document as dark.
pub const DARK_KEY: &str = "dark";

static BUILTIN: Lazy<Arc<ThemeRegistry>> = Lazy::new(|| {
    Arc::new(ThemeRegistry::from_parts_unchecked(
        vec![
            ("light".to_string(), light()),
            ("dark".to_string(), dark()),
            ("blue".to_string(), blue()),
            ("purple".to_string(), purple()),
            ("green".to_string(), green()),
            ("darkgreen".to_string(), darkgreen()),
            ("red".to_string(), red()),
        ],
        DEFAULT_KEY,
        Some(DARK_KEY),
    ))
});

/// Returns the shared built-in registry.
///
/// Keys, in order: `light` (default), `dark` (dark marker), `blue`,
/// `purple`, `green`, `darkgreen`, `red`.
pub fn builtin_registry() -> Arc<ThemeRegistry> {
    Arc::clone(&BUILTIN)
}

macro_rules! palette {
    ($($field:ident: $value:expr),* $(,)?) => {
        Theme {
            $($field: $value.to_string(),)*
        }
    };
}

pub(crate) fn light() -> Theme {
    palette! {
        name: "Light Mode",
        icon: "fa-sun",
        app_bg: "#f6f7fb",
        background: "#f6f7fb",
        surface: "#ffffff",
        surface_alt: "#eef2ff",
        surface_muted: "#f3f6ff",
        primary: "#2563eb",
        primary_soft: "#dbe4ff",
        secondary: "#22d3ee",
        success: "#10b981",
        warning: "#f97316",
        danger: "#ef4444",
        text: "#0f172a",
        text_muted: "#8a93a6",
        border: "#e4e7ec",
        shadow_lg: "0 30px 60px rgba(15, 23, 42, 0.08)",
    }
}

pub(crate) fn dark() -> Theme {
    palette! {
        name: "Dark Mode",
        icon: "fa-moon",
        app_bg: "#050a1f",
        background: "#050a1f",
        surface: "#0b152c",
        surface_alt: "#1e293b",
        surface_muted: "#0f172a",
        primary: "#3b82f6",
        primary_soft: "#1e3a8a",
        secondary: "#8b5cf6",
        success: "#2dd4bf",
        warning: "#db6007",
        danger: "#ef4444",
        text: "#e2e8f0",
        text_muted: "#94a3b8",
        border: "rgba(148, 163, 184, 0.2)",
        shadow_lg: "0 20px 50px rgba(3, 7, 18, 0.55)",
    }
}

pub(crate) fn blue() -> Theme {
    palette! {
        name: "Ocean Blue",
        icon: "fa-water",
        app_bg: "#e0f2fe",
        background: "#e0f2fe",
        surface: "#ffffff",
        surface_alt: "#bae6fd",
        surface_muted: "#f0f9ff",
        primary: "#0284c7",
        primary_soft: "#bae6fd",
        secondary: "#06b6d4",
        success: "#10b981",
        warning: "#f59e0b",
        danger: "#ef4444",
        text: "#0c4a6e",
        text_muted: "#64748b",
        border: "#7dd3fc",
        shadow_lg: "0 30px 60px rgba(2, 132, 199, 0.15)",
    }
}

pub(crate) fn purple() -> Theme {
    palette! {
        name: "Purple Dream",
        icon: "fa-star",
        app_bg: "#faf5ff",
        background: "#faf5ff",
        surface: "#ffffff",
        surface_alt: "#f3e8ff",
        surface_muted: "#faf5ff",
        primary: "#9333ea",
        primary_soft: "#e9d5ff",
        secondary: "#d946ef",
        success: "#10b981",
        warning: "#f59e0b",
        danger: "#ef4444",
        text: "#581c87",
        text_muted: "#94a3b8",
        border: "#e9d5ff",
        shadow_lg: "0 30px 60px rgba(147, 51, 234, 0.15)",
    }
}

pub(crate) fn green() -> Theme {
    palette! {
        name: "Nature Green",
        icon: "fa-leaf",
        app_bg: "#f0fdf4",
        background: "#f0fdf4",
        surface: "#ffffff",
        surface_alt: "#dcfce7",
        surface_muted: "#f7fee7",
        primary: "#16a34a",
        primary_soft: "#bbf7d0",
        secondary: "#84cc16",
        success: "#22c55e",
        warning: "#f59e0b",
        danger: "#ef4444",
        text: "#14532d",
        text_muted: "#6b7280",
        border: "#bbf7d0",
        shadow_lg: "0 30px 60px rgba(22, 163, 74, 0.15)",
    }
}

pub(crate) fn darkgreen() -> Theme {
    palette! {
        name: "Dark Green",
        icon: "fa-tree",
        app_bg: "#0a2817",
        background: "#0a2817",
        surface: "#0f3d23",
        surface_alt: "#15492b",
        surface_muted: "#1a5535",
        primary: "#10b981",
        primary_soft: "#064e3b",
        secondary: "#34d399",
        success: "#6ee7b7",
        warning: "#fbbf24",
        danger: "#f87171",
        text: "#d1fae5",
        text_muted: "#86efac",
        border: "rgba(16, 185, 129, 0.3)",
        shadow_lg: "0 20px 50px rgba(6, 78, 59, 0.5)",
    }
}

pub(crate) fn red() -> Theme {
    palette! {
        name: "Red Passion",
        icon: "fa-fire",
        app_bg: "#fef2f2",
        background: "#fef2f2",
        surface: "#ffffff",
        surface_alt: "#fee2e2",
        surface_muted: "#fef2f2",
        primary: "#dc2626",
        primary_soft: "#fecaca",
        secondary: "#f87171",
        success: "#10b981",
        warning: "#f59e0b",
        danger: "#b91c1c",
        text: "#7f1d1d",
        text_muted: "#94a3b8",
        border: "#fecaca",
        shadow_lg: "0 30px 60px rgba(220, 38, 38, 0.15)",
    }
}
