//! Per-instance widget options parsed from element attributes.
//!
//! This is a best-effort surface: missing or malformed attributes fall back
//! to the documented defaults silently. Fallbacks are still traced at debug
//! level so a misbehaving page can be diagnosed from the log.

use tracing::debug;

use crate::element::Element;
use crate::types::{DEFAULT_BASE_PATH, SPRITE_FILENAME};

/// Attribute carrying an explicit sprite sheet path.
pub const ATTR_SPRITE: &str = "data-sprite";

/// Attribute carrying the base directory for the fallback sprite path.
pub const ATTR_BASE_PATH: &str = "data-base-path";

/// Attribute enabling the diagnostic overlay (`"true"` only).
pub const ATTR_DEBUG: &str = "data-debug";

#[derive(Debug, Clone, PartialEq)]
pub struct WidgetOptions {
    /// Explicit sprite sheet path; wins over the base-path fallback.
    pub sprite: Option<String>,
    /// Base directory for the fallback path. A trailing `/` is appended on
    /// resolution if missing.
    pub base_path: String,
    /// Whether to render the diagnostic overlay.
    pub debug: bool,
}

impl Default for WidgetOptions {
    fn default() -> Self {
        Self {
            sprite: None,
            base_path: DEFAULT_BASE_PATH.to_string(),
            debug: false,
        }
    }
}

impl WidgetOptions {
    /// Read options from an element's attributes.
    pub fn from_element(element: &Element) -> Self {
        let sprite = element
            .attr(ATTR_SPRITE)
            .filter(|s| !s.is_empty())
            .map(String::from);

        let base_path = element
            .attr(ATTR_BASE_PATH)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_BASE_PATH)
            .to_string();

        let debug = match element.attr(ATTR_DEBUG) {
            None => false,
            Some("true") => true,
            Some("false") => false,
            Some(other) => {
                debug!(value = other, "unrecognized {} value, defaulting to false", ATTR_DEBUG);
                false
            }
        };

        Self {
            sprite,
            base_path,
            debug,
        }
    }

    /// Resolve the sprite sheet path: the explicit path if present, otherwise
    /// the base path joined with the fixed filename.
    pub fn sprite_path(&self) -> String {
        if let Some(sprite) = &self.sprite {
            return sprite.clone();
        }
        if self.base_path.ends_with('/') {
            format!("{}{}", self.base_path, SPRITE_FILENAME)
        } else {
            format!("{}/{}", self.base_path, SPRITE_FILENAME)
        }
    }
}
