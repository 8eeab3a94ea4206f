//! Colour types, hex parsing, and RGB/HSL conversion.

use std::fmt;
use std::str::FromStr;

use crate::error::{EmblemError, Result};

/// An opaque RGB colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// A colour in HSL space, quantized for CSS output.
///
/// Hue is in degrees `[0, 360)`; saturation and lightness are integer
/// percentages `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl Rgb {
    /// Create a new colour from RGB components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex colour string.
    ///
    /// Supports formats:
    /// - `#RGB` (3 digits, each doubled)
    /// - `#RRGGBB` (6 digits)
    ///
    /// The leading `#` is optional and digits may be upper or lower case.
    /// Anything else is rejected.
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);

        // Length is in bytes, so non-ASCII input must fall through to the
        // error arm rather than reach the byte slices below.
        match hex.len() {
            3 if hex.is_ascii() => {
                // #RGB -> #RRGGBB
                let r = parse_hex_digit(hex.chars().nth(0).unwrap())?;
                let g = parse_hex_digit(hex.chars().nth(1).unwrap())?;
                let b = parse_hex_digit(hex.chars().nth(2).unwrap())?;
                Ok(Self::new(r << 4 | r, g << 4 | g, b << 4 | b))
            }
            6 if hex.is_ascii() => {
                // #RRGGBB
                let r = parse_hex_byte(&hex[0..2])?;
                let g = parse_hex_byte(&hex[2..4])?;
                let b = parse_hex_byte(&hex[4..6])?;
                Ok(Self::new(r, g, b))
            }
            _ => Err(EmblemError::Colour {
                message: format!("Invalid hex colour: {}", s),
                help: Some("Use #RGB or #RRGGBB format".to_string()),
            }),
        }
    }

    /// Format as a lowercase `#rrggbb` hex string.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Convert to quantized HSL.
    ///
    /// Achromatic colours come out with hue 0 and saturation 0. A hue that
    /// rounds up to 360 wraps back to 0.
    pub fn to_hsl(self) -> Hsl {
        use palette::{IntoColor, Srgb};

        let rgb: Srgb<f32> = Srgb::new(
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        );
        let hsl: palette::Hsl = rgb.into_color();

        Hsl {
            h: (hsl.hue.into_positive_degrees().round() as u16) % 360,
            s: (hsl.saturation * 100.0).round() as u8,
            l: (hsl.lightness * 100.0).round() as u8,
        }
    }
}

impl Hsl {
    /// Create a new HSL colour.
    pub const fn new(h: u16, s: u8, l: u8) -> Self {
        Self { h, s, l }
    }

    /// Convert back to RGB, rounding each channel to the nearest byte.
    pub fn to_rgb(self) -> Rgb {
        use palette::{IntoColor, Srgb};

        let hsl = palette::Hsl::new(
            self.h as f32,
            self.s as f32 / 100.0,
            self.l as f32 / 100.0,
        );
        let rgb: Srgb<f32> = hsl.into_color();

        Rgb {
            r: (rgb.red * 255.0).round() as u8,
            g: (rgb.green * 255.0).round() as u8,
            b: (rgb.blue * 255.0).round() as u8,
        }
    }
}

/// Parse a hex colour string straight to quantized HSL.
pub fn hex_to_hsl(s: &str) -> Result<Hsl> {
    Ok(Rgb::from_hex(s)?.to_hsl())
}

impl FromStr for Rgb {
    type Err = EmblemError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}% {}%", self.h, self.s, self.l)
    }
}

/// Parse a single hex digit.
fn parse_hex_digit(c: char) -> Result<u8> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or_else(|| EmblemError::Colour {
            message: format!("Invalid hex digit: {}", c),
            help: None,
        })
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| EmblemError::Colour {
        message: format!("Invalid hex byte: {}", s),
        help: None,
    })
}
