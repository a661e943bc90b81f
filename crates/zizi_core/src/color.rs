//! Color type used by theme values

use serde::{Deserialize, Serialize};
use std::fmt;

/// 8-bit RGBA color (sRGB)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const RED: Color = Color::rgb(0xFF, 0x00, 0x00);
    pub const GREEN: Color = Color::rgb(0x00, 0xFF, 0x00);
    pub const BLUE: Color = Color::rgb(0x00, 0x00, 0xFF);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from a `0xRRGGBB` value (upper byte ignored)
    pub const fn from_hex(hex: u32) -> Self {
        Self::rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    /// Color from a `0xAARRGGBB` value
    pub const fn from_argb(argb: u32) -> Self {
        Self::rgba((argb >> 16) as u8, (argb >> 8) as u8, argb as u8, (argb >> 24) as u8)
    }

    /// Parse a bare hex token.
    ///
    /// Exactly 6 digits yield an opaque `RRGGBB` color, exactly 8 digits an
    /// `AARRGGBB` color. Any other length or a non-hex digit yields `None`.
    pub fn parse_hex(token: &str) -> Option<Self> {
        if !token.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        match token.len() {
            6 => u32::from_str_radix(token, 16).ok().map(Self::from_hex),
            8 => u32::from_str_radix(token, 16).ok().map(Self::from_argb),
            _ => None,
        }
    }

    pub fn with_alpha(mut self, alpha: u8) -> Self {
        self.a = alpha;
        self
    }

    fn is_opaque(&self) -> bool {
        self.a == 0xFF
    }

    /// Packed `0xAARRGGBB`
    fn argb(&self) -> u32 {
        (self.a as u32) << 24 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// `RRGGBB` for opaque colors, `AARRGGBB` otherwise
    pub fn to_hex_string(&self) -> String {
        if self.is_opaque() {
            format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("{:08X}", self.argb())
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_digits_are_opaque() {
        let c = Color::parse_hex("336699").unwrap();
        assert_eq!(c, Color::rgb(0x33, 0x66, 0x99));
        assert!(c.is_opaque());
    }

    #[test]
    fn eight_digits_carry_alpha_first() {
        let c = Color::parse_hex("80FF0000").unwrap();
        assert_eq!(c, Color::rgba(0xFF, 0, 0, 0x80));
        assert_eq!(c.to_hex_string(), "80FF0000");
    }

    #[test]
    fn other_lengths_are_rejected() {
        assert_eq!(Color::parse_hex("12345"), None);
        assert_eq!(Color::parse_hex("1234567"), None);
        assert_eq!(Color::parse_hex("GGGGGG"), None);
        assert_eq!(Color::parse_hex("+12345"), None);
    }

    #[test]
    fn serializes_as_channels() {
        let json = serde_json::to_string(&Color::from_hex(0x010203)).unwrap();
        assert_eq!(json, r#"{"r":1,"g":2,"b":3,"a":255}"#);
    }
}
