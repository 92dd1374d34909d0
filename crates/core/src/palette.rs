//! Hall display colors for printed badges.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

/// Badge band color used when a hall has no palette entry, or the visitor
/// has no hall at all.
pub const DEFAULT_BADGE_COLOR: &str = "#E8C160";

/// Matches a `#RRGGBB` hex color.
static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("valid regex"));

/// Lookup table from hall display name to badge band color.
///
/// Injectable rather than hardcoded at the handoff site, so deployments can
/// restyle halls without touching the print path. [`HallPalette::default`]
/// carries the stock event palette.
#[derive(Debug, Clone)]
pub struct HallPalette {
    colors: HashMap<String, String>,
}

impl Default for HallPalette {
    fn default() -> Self {
        Self::from_entries([
            ("Hall A", "#E67E22"),
            ("Hall B", "#9B59B6"),
            ("Hall C", "#1ABC9C"),
            ("Blue Hall", "#3498DB"),
            ("Green Hall", "#2ECC71"),
            ("Red Hall", "#E74C3C"),
            ("Gold Hall", "#F1C40F"),
        ])
    }
}

impl HallPalette {
    /// Build a palette from `(hall name, color)` pairs.
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            colors: entries
                .into_iter()
                .map(|(hall, color)| (hall.to_string(), color.to_string()))
                .collect(),
        }
    }

    /// An empty palette; every lookup falls back to [`DEFAULT_BADGE_COLOR`].
    pub fn empty() -> Self {
        Self {
            colors: HashMap::new(),
        }
    }

    /// Add or replace the color for a hall.
    pub fn insert(&mut self, hall: impl Into<String>, color: impl Into<String>) {
        self.colors.insert(hall.into(), color.into());
    }

    /// Resolve the badge band color for a hall assignment.
    ///
    /// Unknown and unset halls both resolve to [`DEFAULT_BADGE_COLOR`].
    pub fn color_for(&self, hall: Option<&str>) -> &str {
        hall.and_then(|name| self.colors.get(name))
            .map(String::as_str)
            .unwrap_or(DEFAULT_BADGE_COLOR)
    }

    /// Check every entry is a `#RRGGBB` hex color.
    pub fn validate(&self) -> Result<(), CoreError> {
        for (hall, color) in &self.colors {
            if !HEX_COLOR.is_match(color) {
                return Err(CoreError::Validation(format!(
                    "Palette color for '{hall}' is not a #RRGGBB value: '{color}'"
                )));
            }
        }
        Ok(())
    }
}
