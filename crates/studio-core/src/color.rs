//! Colour values and translucency helpers.
//!
//! Palettes describe their accent and text colours as `#rrggbb` strings.
//! Cards need translucent variants of those colours (glows, badges), which
//! [`alpha_color`] derives.

use std::fmt;
use std::str::FromStr;

use crate::error::{StudioError, StudioResult};

/// An sRGB colour with straight (non-premultiplied) alpha in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    pub const TRANSPARENT: Rgba = Rgba::new(255, 255, 255, 0.0);

    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque colour
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Parse `#rrggbb` (the leading `#` is optional).
    pub fn from_hex(hex: &str) -> StudioResult<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(StudioError::InvalidHex(hex.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| StudioError::InvalidHex(hex.to_string()))
        };

        Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Same channels with a new alpha, clamped to `[0, 1]` (NaN becomes 0).
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            a: clamp_unit(alpha),
            ..self
        }
    }

    /// Alpha quantized to a byte
    pub fn alpha_u8(&self) -> u8 {
        (clamp_unit(self.a) * 255.0).round() as u8
    }

    /// WCAG relative luminance of the RGB channels (alpha ignored).
    pub fn luminance(&self) -> f32 {
        fn linear(c: u8) -> f32 {
            let c = c as f32 / 255.0;
            if c <= 0.039_28 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        0.2126 * linear(self.r) + 0.7152 * linear(self.g) + 0.0722 * linear(self.b)
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

impl FromStr for Rgba {
    type Err = StudioError;

    /// Accepts `#rrggbb`, `rgb(r, g, b)` and `rgba(r, g, b, a)`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let body = trimmed
            .strip_prefix("rgba(")
            .or_else(|| trimmed.strip_prefix("rgb("))
            .and_then(|rest| rest.strip_suffix(')'));

        let Some(body) = body else {
            return Self::from_hex(trimmed);
        };

        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        let invalid = || StudioError::InvalidHex(s.to_string());
        if parts.len() != 3 && parts.len() != 4 {
            return Err(invalid());
        }

        let r = parts[0].parse::<u8>().map_err(|_| invalid())?;
        let g = parts[1].parse::<u8>().map_err(|_| invalid())?;
        let b = parts[2].parse::<u8>().map_err(|_| invalid())?;
        let a = match parts.get(3) {
            Some(alpha) => alpha.parse::<f32>().map_err(|_| invalid())?,
            None => 1.0,
        };

        Ok(Self::rgb(r, g, b).with_alpha(a))
    }
}

/// Convert a 6-digit hex colour to the same colour at `alpha` opacity.
///
/// ```
/// use studio_core::alpha_color;
///
/// let glow = alpha_color("#0f172a", 0.28).unwrap();
/// assert_eq!(glow.to_string(), "rgba(15, 23, 42, 0.28)");
/// ```
pub fn alpha_color(hex: &str, alpha: f32) -> StudioResult<Rgba> {
    Ok(Rgba::from_hex(hex)?.with_alpha(alpha))
}

fn clamp_unit(v: f32) -> f32 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}
