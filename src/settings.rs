//! Player preferences
//!
//! Kept in memory only; the host may seed them from a JSON document.

use serde::{Deserialize, Serialize};

/// Cosmetic ball skins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Skin {
    #[default]
    Azure,
    Ember,
    Lime,
    Violet,
}

impl Skin {
    pub const ALL: [Skin; 4] = [Skin::Azure, Skin::Ember, Skin::Lime, Skin::Violet];

    pub fn as_str(&self) -> &'static str {
        match self {
            Skin::Azure => "Azure",
            Skin::Ember => "Ember",
            Skin::Lime => "Lime",
            Skin::Violet => "Violet",
        }
    }

    /// Skin by zero-based slot (number keys in the menu)
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Selected ball skin
    pub skin: Skin,
    /// Suppress all tones
    pub muted: bool,
    /// Draw the fading trail behind the ball
    pub trails: bool,
    /// Show the controls line at the bottom of the HUD
    pub show_controls: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            skin: Skin::Azure,
            muted: false,
            trails: true,
            show_controls: true,
        }
    }
}

impl Settings {
    /// Parse settings, falling back to defaults on bad input
    pub fn from_json_or_default(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(settings) => {
                log::info!("Loaded settings");
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings document ({e}), using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skin_slots() {
        assert_eq!(Skin::from_index(0), Some(Skin::Azure));
        assert_eq!(Skin::from_index(2), Some(Skin::Lime));
        assert_eq!(Skin::from_index(3).map(|s| s.as_str()), Some("Violet"));
        assert_eq!(Skin::from_index(9), None);
    }

    #[test]
    fn test_settings_partial_json() {
        let settings = Settings::from_json_or_default(r#"{ "muted": true, "skin": "Lime" }"#);
        assert!(settings.muted);
        assert_eq!(settings.skin, Skin::Lime);
        assert!(settings.trails);

        assert_eq!(Settings::from_json_or_default("{ muted: yes"), Settings::default());
    }
}
