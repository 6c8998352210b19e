//! Palette table.
//!
//! Four compiled-in colour moods. Every card layout reads the same palette:
//! the backdrop gradient, a sparkle highlight, the accent used for glows and
//! buttons, and the text colours.

use tracing::warn;

use crate::color::{alpha_color, Rgba};

/// A colour stop on a gradient, `offset` in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Rgba,
}

impl ColorStop {
    pub const fn new(offset: f32, color: Rgba) -> Self {
        Self { offset, color }
    }
}

/// Radial white highlight blended over the backdrop.
///
/// Centre and reach are fractions of the card box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sparkle {
    pub cx: f32,
    pub cy: f32,
    pub reach: f32,
    pub color: Rgba,
}

/// A named colour theme
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub id: &'static str,
    pub name: &'static str,
    /// CSS-style gradient angle (0 = towards top, 90 = towards right)
    pub gradient_angle: f32,
    pub gradient: &'static [ColorStop],
    /// `#rrggbb`
    pub accent: &'static str,
    pub subtle_accent: Rgba,
    /// `#rrggbb`
    pub text: &'static str,
    pub secondary_text: Rgba,
    pub sparkle: Sparkle,
}

/// Ink used on top of `text`-coloured surfaces when the text colour is light.
const DARK_INK: Rgba = Rgba::rgb(15, 23, 42);

impl Palette {
    /// Accent colour at the given opacity
    pub fn accent_alpha(&self, alpha: f32) -> Rgba {
        resolve(self.id, self.accent, alpha)
    }

    /// Primary text colour, opaque
    pub fn text_color(&self) -> Rgba {
        resolve(self.id, self.text, 1.0)
    }

    /// Ink for labels drawn on a `text`-coloured fill.
    ///
    /// Light text colours (the dark-mode palettes) get a dark slate ink,
    /// everything else gets white.
    pub fn contrast_ink(&self) -> Rgba {
        if self.text_color().luminance() > 0.5 {
            DARK_INK
        } else {
            Rgba::WHITE
        }
    }
}

fn resolve(palette_id: &str, hex: &str, alpha: f32) -> Rgba {
    alpha_color(hex, alpha).unwrap_or_else(|e| {
        warn!(palette = palette_id, "palette colour unusable: {}", e);
        Rgba::TRANSPARENT
    })
}

const fn white(alpha: f32) -> Rgba {
    Rgba::new(255, 255, 255, alpha)
}

/// All palettes, in picker order. The first entry is the fallback.
pub static PALETTES: [Palette; 4] = [
    Palette {
        id: "aurora",
        name: "Aurora Bloom",
        gradient_angle: 135.0,
        gradient: &[
            ColorStop::new(0.0, Rgba::new(255, 175, 189, 0.85)),
            ColorStop::new(0.45, Rgba::new(100, 216, 255, 0.95)),
            ColorStop::new(1.0, Rgba::new(132, 225, 188, 0.88)),
        ],
        accent: "#0f172a",
        subtle_accent: Rgba::new(15, 23, 42, 0.75),
        text: "#06101d",
        secondary_text: Rgba::new(6, 16, 29, 0.78),
        sparkle: Sparkle { cx: 0.3, cy: 0.2, reach: 0.5, color: white(0.55) },
    },
    Palette {
        id: "nebula",
        name: "Future Nebula",
        gradient_angle: 135.0,
        gradient: &[
            ColorStop::new(0.1, Rgba::new(255, 120, 200, 0.85)),
            ColorStop::new(0.55, Rgba::new(96, 97, 255, 0.92)),
            ColorStop::new(0.95, Rgba::new(56, 189, 248, 0.85)),
        ],
        accent: "#0b1120",
        subtle_accent: Rgba::new(11, 17, 32, 0.78),
        text: "#f8fafc",
        secondary_text: Rgba::new(241, 245, 249, 0.78),
        sparkle: Sparkle { cx: 0.7, cy: 0.3, reach: 0.45, color: white(0.6) },
    },
    Palette {
        id: "sunset",
        name: "Sunset Aura",
        gradient_angle: 130.0,
        gradient: &[
            ColorStop::new(0.05, Rgba::new(255, 170, 51, 0.94)),
            ColorStop::new(0.5, Rgba::new(255, 88, 93, 0.9)),
            ColorStop::new(0.95, Rgba::new(98, 48, 255, 0.88)),
        ],
        accent: "#23142a",
        subtle_accent: Rgba::new(35, 20, 42, 0.8),
        text: "#1b1025",
        secondary_text: Rgba::new(27, 16, 37, 0.72),
        sparkle: Sparkle { cx: 0.2, cy: 0.8, reach: 0.55, color: white(0.5) },
    },
    Palette {
        id: "zen",
        name: "Tranquil Wave",
        gradient_angle: 140.0,
        gradient: &[
            ColorStop::new(0.05, Rgba::new(56, 189, 248, 0.9)),
            ColorStop::new(0.5, Rgba::new(56, 249, 206, 0.9)),
            ColorStop::new(0.95, Rgba::new(99, 102, 241, 0.88)),
        ],
        accent: "#042f2e",
        subtle_accent: Rgba::new(4, 47, 46, 0.75),
        text: "#031312",
        secondary_text: Rgba::new(3, 19, 18, 0.75),
        sparkle: Sparkle { cx: 0.7, cy: 0.75, reach: 0.55, color: white(0.55) },
    },
];

/// Id of the palette selected on first launch
pub const DEFAULT_PALETTE_ID: &str = "aurora";

/// Look up a palette by id, falling back to the first entry on a miss.
pub fn find_palette(id: &str) -> &'static Palette {
    PALETTES.iter().find(|p| p.id == id).unwrap_or_else(|| {
        warn!(requested = id, "unknown palette id, using {}", PALETTES[0].id);
        &PALETTES[0]
    })
}

/// Palette ids in table order
pub fn palette_ids() -> impl Iterator<Item = &'static str> {
    PALETTES.iter().map(|p| p.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_four_unique_ids() {
        let ids: Vec<_> = palette_ids().collect();
        assert_eq!(ids, vec!["aurora", "nebula", "sunset", "zen"]);
    }

    #[test]
    fn lookup_returns_exact_entry() {
        for palette in PALETTES.iter() {
            assert!(std::ptr::eq(find_palette(palette.id), palette));
        }
    }

    #[test]
    fn lookup_miss_falls_back_to_first() {
        assert_eq!(find_palette("").id, "aurora");
        assert_eq!(find_palette("AURORA").id, "aurora");
        assert_eq!(find_palette("midnight").id, "aurora");
    }

    #[test]
    fn all_palette_hexes_parse() {
        for palette in PALETTES.iter() {
            assert!(Rgba::from_hex(palette.accent).is_ok(), "{} accent", palette.id);
            assert!(Rgba::from_hex(palette.text).is_ok(), "{} text", palette.id);
        }
    }

    #[test]
    fn contrast_ink_is_dark_only_for_light_text() {
        assert_eq!(find_palette("nebula").contrast_ink(), DARK_INK);
        for id in ["aurora", "sunset", "zen"] {
            assert_eq!(find_palette(id).contrast_ink(), Rgba::WHITE);
        }
    }

    #[test]
    fn gradient_stops_are_ordered() {
        for palette in PALETTES.iter() {
            assert!(palette
                .gradient
                .windows(2)
                .all(|w| w[0].offset <= w[1].offset));
        }
    }
}
