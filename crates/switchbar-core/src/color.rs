//! Color parsing, formatting and blending
//!
//! Colors are stored as [`ratatui::style::Color`] and written to config
//! files as short strings. [`lerp_color`] drives the selection fade.

use ratatui::style::Color;

use crate::error::{CoreError, CoreResult};

const NAMED: &[(&str, Color)] = &[
    ("reset", Color::Reset),
    ("black", Color::Black),
    ("red", Color::Red),
    ("green", Color::Green),
    ("yellow", Color::Yellow),
    ("blue", Color::Blue),
    ("magenta", Color::Magenta),
    ("cyan", Color::Cyan),
    ("gray", Color::Gray),
    ("darkgray", Color::DarkGray),
    ("lightred", Color::LightRed),
    ("lightgreen", Color::LightGreen),
    ("lightyellow", Color::LightYellow),
    ("lightblue", Color::LightBlue),
    ("lightmagenta", Color::LightMagenta),
    ("lightcyan", Color::LightCyan),
    ("white", Color::White),
];

/// Parses a color from its config-file spelling.
///
/// # Errors
///
/// Returns [`CoreError::InvalidColor`] for anything that is not a known
/// name, a 3/6 digit hex value or an `indexed:N` palette entry.
///
/// # Example
///
/// ```
/// use ratatui::style::Color;
/// use switchbar_core::color::parse_color;
///
/// assert_eq!(parse_color("#89b4fa").unwrap(), Color::Rgb(137, 180, 250));
/// assert_eq!(parse_color("Grey").unwrap(), Color::Gray);
/// assert!(parse_color("chartreuse-ish").is_err());
/// ```
pub fn parse_color(input: &str) -> CoreResult<Color> {
    let normalized = input.trim().to_ascii_lowercase().replace("grey", "gray");
    let invalid = || CoreError::InvalidColor(input.to_string());

    if let Some(hex) = normalized.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(invalid);
    }
    if let Some(index) = normalized.strip_prefix("indexed:") {
        return index
            .parse::<u8>()
            .map(Color::Indexed)
            .map_err(|_| invalid());
    }
    NAMED
        .iter()
        .find(|(name, _)| *name == normalized)
        .map(|(_, color)| *color)
        .ok_or_else(invalid)
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.is_ascii() {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        6 => Some(Color::Rgb(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        // #abc expands to #aabbcc
        3 => {
            let mut rgb = [0u8; 3];
            for (slot, digit) in rgb.iter_mut().zip(hex.chars()) {
                let nibble = u8::try_from(digit.to_digit(16)?).ok()?;
                *slot = nibble * 17;
            }
            Some(Color::Rgb(rgb[0], rgb[1], rgb[2]))
        }
        _ => None,
    }
}

/// Formats a color the way [`parse_color`] reads it back.
pub fn format_color(color: Color) -> String {
    match color {
        Color::Rgb(r, g, b) => format!("#{r:02x}{g:02x}{b:02x}"),
        Color::Indexed(i) => format!("indexed:{i}"),
        other => NAMED
            .iter()
            .find(|(_, named)| *named == other)
            .map(|(name, _)| (*name).to_string())
            .unwrap_or_else(|| "reset".to_string()),
    }
}

/// Blends `from` towards `to` by `t` in `[0, 1]`.
///
/// RGB pairs are interpolated per channel. Any other pair cannot be mixed
/// in a terminal, so the result flips from `from` to `to` at the midpoint.
///
/// ```
/// use ratatui::style::Color;
/// use switchbar_core::color::lerp_color;
///
/// let a = Color::Rgb(0, 0, 0);
/// let b = Color::Rgb(200, 100, 50);
/// assert_eq!(lerp_color(a, b, 0.0), a);
/// assert_eq!(lerp_color(a, b, 1.0), b);
/// assert_eq!(lerp_color(a, b, 0.5), Color::Rgb(100, 50, 25));
/// assert_eq!(lerp_color(Color::Red, Color::Blue, 0.25), Color::Red);
/// ```
pub fn lerp_color(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |a: u8, b: u8| {
                let value = f32::from(a) + (f32::from(b) - f32::from(a)) * t;
                value.round().clamp(0.0, 255.0) as u8
            };
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ if t < 0.5 => from,
        _ => to,
    }
}

/// `#[serde(with = ...)]` adapter for [`Color`] fields.
pub(crate) mod serde_color {
    use ratatui::style::Color;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(color: &Color, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_color(*color))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Color, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_color(&raw).map_err(serde::de::Error::custom)
    }
}

/// `#[serde(with = ...)]` adapter for `Option<Color>` fields.
pub(crate) mod serde_color_opt {
    use ratatui::style::Color;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        color: &Option<Color>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match color {
            Some(color) => serializer.serialize_some(&super::format_color(*color)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Color>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| super::parse_color(&raw))
            .transpose()
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named_colors() {
        assert_eq!(parse_color("blue").unwrap(), Color::Blue);
        assert_eq!(parse_color("  DarkGrey ").unwrap(), Color::DarkGray);
        assert_eq!(parse_color("lightcyan").unwrap(), Color::LightCyan);
    }

    #[test]
    fn test_parse_short_hex() {
        assert_eq!(parse_color("#fff").unwrap(), Color::Rgb(255, 255, 255));
        assert_eq!(parse_color("#8bf").unwrap(), Color::Rgb(0x88, 0xbb, 0xff));
    }

    #[test]
    fn test_parse_indexed() {
        assert_eq!(parse_color("indexed:42").unwrap(), Color::Indexed(42));
        assert!(parse_color("indexed:300").is_err());
    }

    #[test]
    fn test_parse_rejects_bad_hex() {
        assert!(matches!(
            parse_color("#12"),
            Err(CoreError::InvalidColor(s)) if s == "#12"
        ));
        assert!(parse_color("#zzzzzz").is_err());
    }

    #[test]
    fn test_format_then_parse_is_stable() {
        for color in [
            Color::Rgb(1, 2, 3),
            Color::Indexed(7),
            Color::LightMagenta,
            Color::Reset,
        ] {
            assert_eq!(parse_color(&format_color(color)).unwrap(), color);
        }
    }

    #[test]
    fn test_lerp_clamps_progress() {
        let a = Color::Rgb(10, 10, 10);
        let b = Color::Rgb(20, 20, 20);
        assert_eq!(lerp_color(a, b, -1.0), a);
        assert_eq!(lerp_color(a, b, 3.0), b);
    }

    #[test]
    fn test_lerp_mixed_kinds_flips_at_midpoint() {
        let black = Color::Rgb(0, 0, 0);
        assert_eq!(lerp_color(black, Color::Blue, 0.49), black);
        assert_eq!(lerp_color(black, Color::Blue, 0.5), Color::Blue);
    }
}
