//! Theme styles and lookup.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::ThemeId;

/// Font slant for card faces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

/// How a renderer should draw cards for a theme.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeStyle {
    /// Text color of the card value (any CSS color).
    pub card_color: String,
    /// Card background color (any CSS color).
    pub background_color: String,
    /// Font size in pixels.
    pub font_size: u16,
    pub font_style: FontStyle,
    /// CSS font weight (100-900).
    pub font_weight: u16,
}

impl ThemeStyle {
    /// Blue italic values on light blue cards.
    #[must_use]
    pub fn light() -> Self {
        Self {
            card_color: "#2500fa".to_string(),
            background_color: "lightblue".to_string(),
            font_size: 40,
            font_style: FontStyle::Italic,
            font_weight: 600,
        }
    }

    /// White values on black cards.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            card_color: "white".to_string(),
            background_color: "black".to_string(),
            font_size: 48,
            font_style: FontStyle::Normal,
            font_weight: 600,
        }
    }
}

/// Theme lookup with a light fallback.
///
/// Unknown identifiers resolve to the light theme, so a typo in a config
/// never blanks the board.
#[derive(Clone, Debug)]
pub struct ThemeRegistry {
    themes: FxHashMap<ThemeId, ThemeStyle>,
    fallback: ThemeStyle,
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeRegistry {
    /// Create a registry holding the built-in `light` and `dark` themes.
    pub fn new() -> Self {
        let mut themes = FxHashMap::default();
        themes.insert(ThemeId::light(), ThemeStyle::light());
        themes.insert(ThemeId::dark(), ThemeStyle::dark());

        Self {
            themes,
            fallback: ThemeStyle::light(),
        }
    }

    /// Register or replace a theme.
    ///
    /// Replacing `light` also replaces the fallback.
    pub fn register(&mut self, id: ThemeId, style: ThemeStyle) {
        if id == ThemeId::light() {
            self.fallback = style.clone();
        }
        self.themes.insert(id, style);
    }

    /// Get a theme by ID.
    #[must_use]
    pub fn get(&self, id: &ThemeId) -> Option<&ThemeStyle> {
        self.themes.get(id)
    }

    /// Get a theme by ID, falling back to light.
    #[must_use]
    pub fn resolve(&self, id: &ThemeId) -> &ThemeStyle {
        self.themes.get(id).unwrap_or(&self.fallback)
    }

    /// Check if a theme is registered.
    #[must_use]
    pub fn contains(&self, id: &ThemeId) -> bool {
        self.themes.contains_key(id)
    }

    /// Number of registered themes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins() {
        let registry = ThemeRegistry::new();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.resolve(&ThemeId::dark()), &ThemeStyle::dark());
        assert_eq!(registry.resolve(&ThemeId::light()).font_style, FontStyle::Italic);
    }

    #[test]
    fn test_unknown_falls_back_to_light() {
        let registry = ThemeRegistry::new();
        let unknown = ThemeId::new("sepia");

        assert!(registry.get(&unknown).is_none());
        assert_eq!(registry.resolve(&unknown), &ThemeStyle::light());
    }

    #[test]
    fn test_register_custom() {
        let mut registry = ThemeRegistry::new();
        let neon = ThemeStyle {
            card_color: "lime".to_string(),
            background_color: "#111".to_string(),
            font_size: 36,
            font_style: FontStyle::Normal,
            font_weight: 800,
        };

        registry.register(ThemeId::new("neon"), neon.clone());

        assert!(registry.contains(&ThemeId::new("neon")));
        assert_eq!(registry.resolve(&ThemeId::new("neon")), &neon);
    }

    #[test]
    fn test_replacing_light_replaces_fallback() {
        let mut registry = ThemeRegistry::new();
        let mut pale = ThemeStyle::light();
        pale.background_color = "white".to_string();

        registry.register(ThemeId::light(), pale.clone());

        assert_eq!(registry.resolve(&ThemeId::new("missing")), &pale);
    }

    #[test]
    fn test_style_serde() {
        let json = serde_json::to_value(ThemeStyle::light()).unwrap();
        assert_eq!(json["font_style"], "italic");
        assert_eq!(json["font_size"], 40);
    }
}
