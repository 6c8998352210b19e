//! Shared card building blocks: glass backdrop, panels, pills, buttons.

use crate::color::Rgba;
use crate::palette::{ColorStop, Palette};

use super::text::{measure, place, TextStyle};
use super::{Anchor, Blend, Frame, Node, Paint, Stroke, CARD_HEIGHT, CARD_WIDTH};

// Slate inks used for body copy regardless of palette
pub(crate) const SLATE_900: Rgba = Rgba::rgb(15, 23, 42);
pub(crate) const SLATE_800: Rgba = Rgba::rgb(30, 41, 59);
pub(crate) const SLATE_700: Rgba = Rgba::rgb(51, 65, 85);
pub(crate) const SLATE_600: Rgba = Rgba::rgb(71, 85, 105);

pub(crate) const fn white(alpha: f32) -> Rgba {
    Rgba::new(255, 255, 255, alpha)
}

pub(crate) fn hairline(alpha: f32) -> Option<Stroke> {
    Some(Stroke {
        color: white(alpha),
        width: 1.0,
    })
}

/// Full-card frame
pub(crate) fn card_frame() -> Frame {
    Frame::new(0.0, 0.0, CARD_WIDTH, CARD_HEIGHT)
}

/// Frosted base, palette gradient and optional sparkle overlay
pub(crate) fn backdrop(palette: &Palette, radius: f32, gradient_opacity: f32, sparkle: bool) -> Vec<Node> {
    let frame = card_frame();
    let mut layers = vec![
        Node::Rect {
            frame,
            radius,
            fill: Paint::Solid(white(0.7)),
            stroke: None,
        },
        Node::Group {
            id: Some("gradient"),
            opacity: gradient_opacity,
            blend: Blend::Normal,
            children: vec![Node::Rect {
                frame,
                radius,
                fill: Paint::Linear {
                    angle_deg: palette.gradient_angle,
                    stops: palette.gradient.to_vec(),
                },
                stroke: None,
            }],
        },
    ];

    if sparkle {
        let spot = palette.sparkle;
        layers.push(screen_layer(
            "sparkle",
            1.0,
            frame,
            radius,
            Paint::radial_at(
                spot.cx,
                spot.cy,
                vec![
                    ColorStop::new(0.0, spot.color),
                    ColorStop::new(spot.reach, spot.color.with_alpha(0.0)),
                ],
            ),
        ));
    }

    layers
}

/// Screen-blended highlight layer
pub(crate) fn screen_layer(id: &'static str, opacity: f32, frame: Frame, radius: f32, fill: Paint) -> Node {
    Node::Group {
        id: Some(id),
        opacity,
        blend: Blend::Screen,
        children: vec![Node::Rect {
            frame,
            radius,
            fill,
            stroke: None,
        }],
    }
}

/// Card border drawn last so it sits over every layer
pub(crate) fn outline(radius: f32, alpha: f32) -> Node {
    Node::Rect {
        frame: card_frame().inset(0.5),
        radius,
        fill: Paint::None,
        stroke: hairline(alpha),
    }
}

/// Translucent white panel with a hairline border
pub(crate) fn glass(frame: Frame, radius: f32, alpha: f32) -> Node {
    Node::Rect {
        frame,
        radius,
        fill: Paint::Solid(white(alpha)),
        stroke: hairline(0.4),
    }
}

/// Radial accent glow filling a frame
pub(crate) fn accent_glow(frame: Frame, radius: f32, palette: &Palette, cx: f32, cy: f32, alpha: f32, reach: f32) -> Node {
    let accent = palette.accent_alpha(alpha);
    Node::Rect {
        frame,
        radius,
        fill: Paint::radial_at(
            cx,
            cy,
            vec![
                ColorStop::new(0.0, accent),
                ColorStop::new(reach, accent.with_alpha(0.0)),
            ],
        ),
        stroke: None,
    }
}

/// Pill-shaped control sized to its label, capped at `max_width`.
pub(crate) struct Pill {
    pub id: Option<&'static str>,
    pub label: String,
    pub fill: Rgba,
    pub stroke: Option<Stroke>,
    pub style: TextStyle,
    pub height: f32,
    pub padding: f32,
    pub max_width: f32,
}

impl Pill {
    pub fn width(&self) -> f32 {
        let shown = if self.style.uppercase {
            self.label.to_uppercase()
        } else {
            self.label.clone()
        };
        (measure(&shown, &self.style) + 2.0 * self.padding).min(self.max_width)
    }

    /// Place the pill with its `align` edge (or centre) at `x`.
    pub fn build(self, x: f32, y: f32, align: Anchor) -> (Node, Frame) {
        let width = self.width();
        let left = match align {
            Anchor::Start => x,
            Anchor::Middle => x - width / 2.0,
            Anchor::End => x - width,
        };
        let frame = Frame::new(left, y, width, self.height);
        let style = self.style.centered();
        let top = frame.center_y() - style.size * style.line_height / 2.0;
        let (label, _) = place(
            self.id,
            &self.label,
            frame.center_x(),
            top,
            (width - 2.0 * self.padding).max(style.size),
            1,
            &style,
        );

        let node = Node::group(vec![
            Node::Rect {
                frame,
                radius: self.height / 2.0,
                fill: Paint::Solid(self.fill),
                stroke: self.stroke,
            },
            label,
        ]);
        (node, frame)
    }
}

/// Numbered disc used by feature rows
pub(crate) fn number_badge(cx: f32, cy: f32, r: f32, fill: Paint, stroke: Option<Stroke>, label: &str, ink: Rgba, size: f32) -> Node {
    let style = TextStyle::new(size, 600, ink).leading(1.0).centered();
    let (text, _) = place(None, label, cx, cy - size / 2.0, r * 2.0, 1, &style);
    Node::group(vec![
        Node::Circle {
            cx,
            cy,
            r,
            fill,
            stroke,
        },
        text,
    ])
}

/// Stable id for the nth (1-based) feature text
pub(crate) fn feature_id(n: usize) -> Option<&'static str> {
    const IDS: [&str; 3] = ["feature-1", "feature-2", "feature-3"];
    IDS.get(n.wrapping_sub(1)).copied()
}
