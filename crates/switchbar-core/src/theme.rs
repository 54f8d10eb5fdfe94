//! Palette presets for the switch bar
//!
//! A [`Theme`] is a named palette. [`crate::StyleConfig::themed`] turns one
//! into a complete style, and themes can be stored as TOML like styles.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use crate::error::CoreResult;

/// Named color palette
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Theme {
    /// Theme display name
    pub name: String,
    /// Color palette
    pub colors: ThemeColors,
}

/// Colors a switch bar draws with
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThemeColors {
    /// Bar background
    #[serde(with = "crate::color::serde_color")]
    pub background: Color,
    /// Regular text, used by hosts for surrounding content
    #[serde(with = "crate::color::serde_color")]
    pub foreground: Color,
    /// Selected label and indicator
    #[serde(with = "crate::color::serde_color")]
    pub accent: Color,
    /// Unselected labels
    #[serde(with = "crate::color::serde_color")]
    pub muted: Color,
}

impl Theme {
    /// Catppuccin mocha
    pub fn dark() -> Self {
        Theme {
            name: "Dark".to_string(),
            colors: ThemeColors {
                background: Color::Rgb(30, 30, 46),
                foreground: Color::Rgb(205, 214, 244),
                accent: Color::Rgb(137, 180, 250),
                muted: Color::Rgb(147, 153, 178),
            },
        }
    }

    /// Catppuccin latte
    pub fn light() -> Self {
        Theme {
            name: "Light".to_string(),
            colors: ThemeColors {
                background: Color::Rgb(239, 241, 245),
                foreground: Color::Rgb(76, 79, 105),
                accent: Color::Rgb(30, 102, 245),
                muted: Color::Rgb(108, 111, 133),
            },
        }
    }

    /// Nord polar night with frost accents
    pub fn nord() -> Self {
        Theme {
            name: "Nord".to_string(),
            colors: ThemeColors {
                background: Color::Rgb(46, 52, 64),
                foreground: Color::Rgb(236, 239, 244),
                accent: Color::Rgb(136, 192, 208),
                muted: Color::Rgb(76, 86, 106),
            },
        }
    }

    /// Looks up a built-in theme by case-insensitive name.
    ///
    /// ```
    /// use switchbar_core::Theme;
    ///
    /// assert_eq!(Theme::by_name("NORD").unwrap().name, "Nord");
    /// assert!(Theme::by_name("solarized").is_none());
    /// ```
    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "dark" => Some(Theme::dark()),
            "light" => Some(Theme::light()),
            "nord" => Some(Theme::nord()),
            _ => None,
        }
    }

    /// Parses a theme from TOML.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CoreError::StyleParse`] if the document is malformed
    /// or a color cannot be parsed.
    pub fn from_toml(toml_str: &str) -> CoreResult<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Serializes the theme to TOML.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CoreError::StyleSerialize`] if serialization fails.
    pub fn to_toml(&self) -> CoreResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::dark()
    }
}
