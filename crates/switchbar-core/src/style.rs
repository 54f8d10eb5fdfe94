//! Style configuration for the switch bar
//!
//! [`StyleConfig`] bundles every presentation parameter of the widget:
//! colors, label font, spacing, padding, indicator geometry and transition
//! timing. All fields have defaults, and a style can be loaded from a TOML
//! file in which every key is optional.
//!
//! Dimensions are terminal cells (columns horizontally, rows vertically).
//!
//! ## Example
//!
//! ```
//! use switchbar_core::StyleConfig;
//!
//! let style = StyleConfig::from_toml(r##"
//!     accent = "#f38ba8"
//!     spacing = 4
//!
//!     [font]
//!     italic = true
//! "##).unwrap();
//!
//! assert_eq!(style.spacing, 4);
//! assert!(style.font.bold && style.font.italic);
//! assert_eq!(style.indicator_height, 1);
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use ratatui::style::{Color, Modifier};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::theme::Theme;
use crate::transition::Easing;

/// Largest accepted spacing, padding or inset, in cells
pub const MAX_GAP: u16 = 64;
/// Largest accepted indicator thickness or offset, in rows
pub const MAX_INDICATOR_ROWS: u16 = 8;
/// Longest accepted transition
pub const MAX_TRANSITION_MS: u64 = 5_000;

/// Text attributes applied uniformly to every label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabFont {
    /// Heavy weight
    pub bold: bool,
    /// Slanted glyphs
    pub italic: bool,
    /// Line under the text
    pub underlined: bool,
    /// Reduced intensity
    pub dim: bool,
}

impl TabFont {
    /// No attributes
    pub const fn regular() -> Self {
        TabFont {
            bold: false,
            italic: false,
            underlined: false,
            dim: false,
        }
    }

    /// Bold only (the default)
    pub const fn bold() -> Self {
        TabFont {
            bold: true,
            ..TabFont::regular()
        }
    }

    /// Adds italics
    pub const fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Adds underline
    pub const fn underlined(mut self) -> Self {
        self.underlined = true;
        self
    }

    /// Terminal modifier set for these attributes
    pub fn modifier(self) -> Modifier {
        let mut modifier = Modifier::empty();
        if self.bold {
            modifier |= Modifier::BOLD;
        }
        if self.italic {
            modifier |= Modifier::ITALIC;
        }
        if self.underlined {
            modifier |= Modifier::UNDERLINED;
        }
        if self.dim {
            modifier |= Modifier::DIM;
        }
        modifier
    }
}

impl Default for TabFont {
    fn default() -> Self {
        TabFont::bold()
    }
}

/// Presentation parameters of a switch bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Selected label text and indicator fill
    #[serde(with = "crate::color::serde_color")]
    pub accent: Color,
    /// Unselected label text
    #[serde(with = "crate::color::serde_color")]
    pub inactive: Color,
    /// Fill behind the whole bar; `None` leaves the host's background
    #[serde(
        with = "crate::color::serde_color_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub background: Option<Color>,
    /// Label attributes
    pub font: TabFont,
    /// Columns between adjacent segment blocks
    pub spacing: u16,
    /// Rows above and below each segment's content
    pub vertical_padding: u16,
    /// Columns left and right of each segment's content
    pub horizontal_padding: u16,
    /// Indicator thickness in rows; 0 hides it
    pub indicator_height: u16,
    /// Rows between the label and the indicator
    pub indicator_offset: u16,
    /// Columns trimmed from each end of the indicator
    pub indicator_inset: u16,
    /// Length of the selection transition in milliseconds; 0 disables it
    pub transition_ms: u64,
    /// Timing curve of the selection transition
    pub easing: Easing,
}

impl Default for StyleConfig {
    fn default() -> Self {
        let palette = Theme::dark().colors;
        StyleConfig {
            accent: palette.accent,
            inactive: palette.muted,
            background: None,
            font: TabFont::default(),
            spacing: 2,
            vertical_padding: 0,
            horizontal_padding: 0,
            indicator_height: 1,
            indicator_offset: 0,
            indicator_inset: 0,
            transition_ms: 200,
            easing: Easing::EaseInOut,
        }
    }
}

impl StyleConfig {
    /// Default geometry with colors and background taken from `theme`
    pub fn themed(theme: &Theme) -> Self {
        StyleConfig {
            accent: theme.colors.accent,
            inactive: theme.colors.muted,
            background: Some(theme.colors.background),
            ..StyleConfig::default()
        }
    }

    /// Transition length as a [`Duration`]
    pub fn transition_duration(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    /// Rows one segment block occupies
    ///
    /// ```
    /// use switchbar_core::StyleConfig;
    ///
    /// let mut style = StyleConfig::default();
    /// assert_eq!(style.block_height(), 2);
    /// style.vertical_padding = 1;
    /// style.indicator_offset = 1;
    /// assert_eq!(style.block_height(), 5);
    /// ```
    pub fn block_height(&self) -> u16 {
        self.vertical_padding
            .saturating_mul(2)
            .saturating_add(1)
            .saturating_add(self.indicator_offset)
            .saturating_add(self.indicator_height)
    }

    /// Checks every dimension against the accepted bounds.
    ///
    /// Rendering never calls this; it exists for configuration loaders
    /// that want to reject absurd values up front.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidStyle`] naming the first offending field.
    pub fn validate(&self) -> CoreResult<()> {
        let gaps = [
            ("spacing", self.spacing),
            ("vertical_padding", self.vertical_padding),
            ("horizontal_padding", self.horizontal_padding),
            ("indicator_inset", self.indicator_inset),
        ];
        for (field, value) in gaps {
            if value > MAX_GAP {
                return Err(CoreError::InvalidStyle(format!(
                    "{field} {value} exceeds {MAX_GAP}"
                )));
            }
        }

        let rows = [
            ("indicator_height", self.indicator_height),
            ("indicator_offset", self.indicator_offset),
        ];
        for (field, value) in rows {
            if value > MAX_INDICATOR_ROWS {
                return Err(CoreError::InvalidStyle(format!(
                    "{field} {value} exceeds {MAX_INDICATOR_ROWS}"
                )));
            }
        }

        if self.transition_ms > MAX_TRANSITION_MS {
            return Err(CoreError::InvalidStyle(format!(
                "transition_ms {} exceeds {MAX_TRANSITION_MS}",
                self.transition_ms
            )));
        }
        Ok(())
    }

    /// Parses and validates a style from TOML.
    ///
    /// Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::StyleParse`] for malformed TOML or colors and
    /// [`CoreError::InvalidStyle`] for out-of-range values.
    pub fn from_toml(toml_str: &str) -> CoreResult<Self> {
        let style: StyleConfig = toml::from_str(toml_str)?;
        style.validate()?;
        Ok(style)
    }

    /// Serializes the style to TOML.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::StyleSerialize`] if serialization fails.
    pub fn to_toml(&self) -> CoreResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reads a style file.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::StyleRead`] if the file cannot be read, or any
    /// error of [`StyleConfig::from_toml`].
    pub fn load(path: &Path) -> CoreResult<Self> {
        let contents = fs::read_to_string(path).map_err(|source| CoreError::StyleRead {
            path: path.to_path_buf(),
            source,
        })?;
        let style = StyleConfig::from_toml(&contents)?;
        tracing::debug!(path = %path.display(), "loaded switch bar style");
        Ok(style)
    }

    /// `<config dir>/switchbar/style.toml`, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("switchbar").join("style.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let style = StyleConfig::default();
        assert_eq!(style.spacing, 2);
        assert_eq!(style.indicator_height, 1);
        assert_eq!(style.transition_duration(), Duration::from_millis(200));
        assert_eq!(style.font, TabFont::bold());
        assert!(style.background.is_none());
        assert!(style.validate().is_ok());
    }

    #[test]
    fn test_themed_uses_palette() {
        let theme = Theme::light();
        let style = StyleConfig::themed(&theme);
        assert_eq!(style.accent, theme.colors.accent);
        assert_eq!(style.inactive, theme.colors.muted);
        assert_eq!(style.background, Some(theme.colors.background));
        assert_eq!(style.spacing, StyleConfig::default().spacing);
    }

    #[test]
    fn test_font_modifier() {
        assert_eq!(TabFont::regular().modifier(), Modifier::empty());
        assert_eq!(
            TabFont::bold().italic().modifier(),
            Modifier::BOLD | Modifier::ITALIC
        );
        assert!(TabFont::regular()
            .underlined()
            .modifier()
            .contains(Modifier::UNDERLINED));
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(StyleConfig::from_toml("").unwrap(), StyleConfig::default());
    }

    #[test]
    fn test_full_toml() {
        let style = StyleConfig::from_toml(
            r##"
            accent = "red"
            inactive = "#777777"
            background = "black"
            spacing = 3
            vertical_padding = 1
            horizontal_padding = 2
            indicator_height = 2
            indicator_offset = 1
            indicator_inset = 1
            transition_ms = 0
            easing = "linear"

            [font]
            bold = false
            underlined = true
        "##,
        )
        .unwrap();
        assert_eq!(style.accent, Color::Red);
        assert_eq!(style.inactive, Color::Rgb(0x77, 0x77, 0x77));
        assert_eq!(style.background, Some(Color::Black));
        assert_eq!(style.horizontal_padding, 2);
        assert_eq!(style.easing, Easing::Linear);
        assert_eq!(style.font.modifier(), Modifier::UNDERLINED);
        assert_eq!(style.block_height(), 1 + 1 + 1 + 1 + 2);
    }

    #[test]
    fn test_toml_rejects_out_of_range() {
        let err = StyleConfig::from_toml("spacing = 500").unwrap_err();
        assert!(matches!(err, CoreError::InvalidStyle(ref msg) if msg.contains("spacing")));

        let err = StyleConfig::from_toml("indicator_height = 9").unwrap_err();
        assert!(err.to_string().contains("indicator_height"));

        let err = StyleConfig::from_toml("transition_ms = 60000").unwrap_err();
        assert!(err.to_string().contains("transition_ms"));
    }

    #[test]
    fn test_toml_rejects_bad_color() {
        let err = StyleConfig::from_toml(r##"accent = "#12""##).unwrap_err();
        assert!(matches!(err, CoreError::StyleParse(_)));
    }

    #[test]
    fn test_themed_style_survives_toml() {
        let original = StyleConfig::themed(&Theme::nord());
        let text = original.to_toml().unwrap();
        assert_eq!(StyleConfig::from_toml(&text).unwrap(), original);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "spacing = 5").unwrap();
        let style = StyleConfig::load(file.path()).unwrap();
        assert_eq!(style.spacing, 5);
    }

    #[test]
    fn test_load_missing_file() {
        let err = StyleConfig::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, CoreError::StyleRead { .. }));
    }

    #[test]
    fn test_default_path_ends_with_style_toml() {
        if let Some(path) = StyleConfig::default_path() {
            assert!(path.ends_with("switchbar/style.toml"));
        }
    }
}
