//! Semantic color names and their display colors.
//!
//! Events carry an open color name ("blue", "red", ...). The resolver maps a
//! name to a fill color (day background, event chip) and an accent color
//! (borders, text, badges). Unknown names fall back to neutral grays.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

/// Which color of a pair to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Fill,
    Accent,
}

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);

    /// Neutral fill used for unknown color names (light gray).
    pub const DEFAULT_FILL: Color = Color::rgb(0xf3, 0xf4, 0xf6);

    /// Neutral accent used for unknown color names (medium gray).
    pub const DEFAULT_ACCENT: Color = Color::rgb(0x9c, 0xa3, 0xaf);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The color names with a dedicated palette entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorName {
    Blue,
    Red,
    Green,
    Yellow,
    Purple,
}

impl ColorName {
    pub fn fill(self) -> Color {
        match self {
            ColorName::Blue => Color::rgb(0xdb, 0xea, 0xfe),
            ColorName::Red => Color::rgb(0xfe, 0xe2, 0xe2),
            ColorName::Green => Color::rgb(0xdc, 0xfc, 0xe7),
            ColorName::Yellow => Color::rgb(0xfe, 0xf9, 0xc3),
            ColorName::Purple => Color::rgb(0xf3, 0xe8, 0xff),
        }
    }

    pub fn accent(self) -> Color {
        match self {
            ColorName::Blue => Color::rgb(0x3b, 0x82, 0xf6),
            ColorName::Red => Color::rgb(0xef, 0x44, 0x44),
            ColorName::Green => Color::rgb(0x22, 0xc5, 0x5e),
            ColorName::Yellow => Color::rgb(0xea, 0xb3, 0x08),
            ColorName::Purple => Color::rgb(0xa8, 0x55, 0xf7),
        }
    }
}

impl FromStr for ColorName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "blue" => Ok(ColorName::Blue),
            "red" => Ok(ColorName::Red),
            "green" => Ok(ColorName::Green),
            "yellow" => Ok(ColorName::Yellow),
            "purple" => Ok(ColorName::Purple),
            other => Err(format!("Unknown color '{}'", other)),
        }
    }
}

/// Resolve a color name for one channel, falling back to neutral grays.
pub fn resolve(color_name: &str, channel: Channel) -> Color {
    match (color_name.parse::<ColorName>(), channel) {
        (Ok(name), Channel::Fill) => name.fill(),
        (Ok(name), Channel::Accent) => name.accent(),
        (Err(_), Channel::Fill) => Color::DEFAULT_FILL,
        (Err(_), Channel::Accent) => Color::DEFAULT_ACCENT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_color_resolves_both_channels() {
        assert_eq!(resolve("blue", Channel::Fill).to_string(), "#dbeafe");
        assert_eq!(resolve("blue", Channel::Accent).to_string(), "#3b82f6");
        assert_eq!(resolve("purple", Channel::Accent).to_string(), "#a855f7");
    }

    #[test]
    fn test_unknown_color_falls_back_to_neutral() {
        assert_eq!(resolve("teal", Channel::Fill), Color::DEFAULT_FILL);
        assert_eq!(resolve("teal", Channel::Accent), Color::DEFAULT_ACCENT);
        assert_eq!(resolve("", Channel::Fill).to_string(), "#f3f4f6");
        assert_eq!(resolve("", Channel::Accent).to_string(), "#9ca3af");
    }

    #[test]
    fn test_color_names_are_case_sensitive() {
        assert_eq!(resolve("Blue", Channel::Fill), Color::DEFAULT_FILL);
    }

    #[test]
    fn test_color_serializes_as_hex() {
        let json = serde_json::to_string(&Color::WHITE).unwrap();
        assert_eq!(json, "\"#ffffff\"");
    }
}
