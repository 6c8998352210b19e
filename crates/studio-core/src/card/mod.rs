//! Card renderer.
//!
//! [`render_card`] is a pure function from a form snapshot, a palette and a
//! layout to a [`Card`]: a small retained tree of rectangles, circles, paths
//! and text blocks in logical pixels. The tree serializes to SVG for the
//! preview and for rasterization.
//!
//! ```text
//! FormState ─┐
//! Palette ───┼─► render_card ─► Card ─► to_svg ─► preview / resvg ─► PNG
//! Layout ────┘
//! ```

mod angled;
mod chrome;
mod compact;
mod spotlight;
mod svg;
pub mod text;

use tracing::trace;

use crate::color::Rgba;
use crate::form::FormState;
use crate::layout::LayoutVariant;
use crate::palette::{ColorStop, Palette};

pub use compact::COMPACT_FOOTER_FALLBACK;

/// Logical card width in pixels
pub const CARD_WIDTH: f32 = 480.0;
/// Logical card height in pixels
pub const CARD_HEIGHT: f32 = 600.0;

/// Axis-aligned box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Frame {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Shrink uniformly on all sides
    pub fn inset(&self, by: f32) -> Self {
        Self::new(
            self.x + by,
            self.y + by,
            (self.width - 2.0 * by).max(0.0),
            (self.height - 2.0 * by).max(0.0),
        )
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }
}

/// Fill description
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    None,
    Solid(Rgba),
    /// CSS-style angle; stops run across the shape's bounding box
    Linear { angle_deg: f32, stops: Vec<ColorStop> },
    /// Centre and radius are fractions of the shape's bounding box
    Radial { cx: f32, cy: f32, r: f32, stops: Vec<ColorStop> },
}

impl Paint {
    /// Radial gradient centred at `(cx, cy)` whose 100% stop reaches the
    /// farthest corner of the box.
    pub fn radial_at(cx: f32, cy: f32, stops: Vec<ColorStop>) -> Self {
        let dx = cx.max(1.0 - cx);
        let dy = cy.max(1.0 - cy);
        Paint::Radial {
            cx,
            cy,
            r: (dx * dx + dy * dy).sqrt(),
            stops,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Rgba,
    pub width: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Blend {
    Normal,
    Screen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

/// A laid-out run of text.
///
/// `content` is the source string; `lines` is what gets drawn after
/// wrapping, casing and truncation.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    pub id: Option<&'static str>,
    pub content: String,
    pub lines: Vec<String>,
    pub x: f32,
    /// Baseline of the first line
    pub y: f32,
    pub size: f32,
    /// Distance between baselines
    pub line_height: f32,
    pub weight: u16,
    pub tracking: f32,
    pub color: Rgba,
    pub anchor: Anchor,
}

/// Visual tree node
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Group {
        id: Option<&'static str>,
        opacity: f32,
        blend: Blend,
        children: Vec<Node>,
    },
    Rect {
        frame: Frame,
        radius: f32,
        fill: Paint,
        stroke: Option<Stroke>,
    },
    Circle {
        cx: f32,
        cy: f32,
        r: f32,
        fill: Paint,
        stroke: Option<Stroke>,
    },
    Path {
        d: String,
        fill: Paint,
    },
    Text(TextBlock),
}

impl Node {
    pub fn group(children: Vec<Node>) -> Self {
        Node::Group {
            id: None,
            opacity: 1.0,
            blend: Blend::Normal,
            children,
        }
    }

    fn visit<'a>(&'a self, out: &mut Vec<&'a TextBlock>) {
        match self {
            Node::Group { children, .. } => children.iter().for_each(|c| c.visit(out)),
            Node::Text(block) => out.push(block),
            _ => {}
        }
    }
}

/// A rendered card surface
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub layout: LayoutVariant,
    pub palette_id: &'static str,
    pub width: f32,
    pub height: f32,
    pub root: Node,
}

impl Card {
    /// All text blocks in paint order
    pub fn texts(&self) -> Vec<&TextBlock> {
        let mut out = Vec::new();
        self.root.visit(&mut out);
        out
    }

    /// Text block with the given id
    pub fn find_text(&self, id: &str) -> Option<&TextBlock> {
        self.texts().into_iter().find(|t| t.id == Some(id))
    }

    /// Serialize to a standalone SVG document
    pub fn to_svg(&self) -> String {
        svg::write_card(self)
    }
}

/// Render one layout of the product card.
///
/// Deterministic: identical inputs always produce an identical [`Card`].
pub fn render_card(form: &FormState, palette: &'static Palette, layout: LayoutVariant) -> Card {
    let features = form.visible_features();
    trace!(layout = %layout, palette = palette.id, features = features.len(), "rendering card");

    let root = match layout {
        LayoutVariant::Spotlight => spotlight::render(form, &features, palette),
        LayoutVariant::Angled => angled::render(form, &features, palette),
        LayoutVariant::Compact => compact::render(form, &features, palette),
    };

    Card {
        layout,
        palette_id: palette.id,
        width: CARD_WIDTH,
        height: CARD_HEIGHT,
        root,
    }
}
