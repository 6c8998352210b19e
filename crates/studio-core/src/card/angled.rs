//! Launch story: title beside a conic motif, highlight tiles, offer footer.

use std::fmt::Write as _;

use crate::color::Rgba;
use crate::form::FormState;
use crate::palette::{ColorStop, Palette};

use super::chrome::{
    backdrop, card_frame, feature_id, glass, outline, screen_layer, white, Pill, SLATE_600,
    SLATE_700, SLATE_800, SLATE_900,
};
use super::text::{place, TextStyle};
use super::{Anchor, Frame, Node, Paint, CARD_HEIGHT, CARD_WIDTH};

const PAD: f32 = 28.0;
const RADIUS: f32 = 36.0;
const MOTIF: f32 = 128.0;
const TILE_GAP: f32 = 14.0;
const TILE_HEIGHT: f32 = 86.0;
const FOOTER_HEIGHT: f32 = 78.0;

/// Wedges used to approximate the conic gradient
const CONIC_STEPS: usize = 36;
/// Fraction of the turn over which the conic accent fades out
const CONIC_REACH: f32 = 0.6;

const EYEBROW: TextStyle = TextStyle::new(12.0, 600, SLATE_700).caps(3.0);
const TITLE: TextStyle = TextStyle::new(30.0, 600, SLATE_900).leading(1.15);
const BODY: TextStyle = TextStyle::new(15.0, 500, SLATE_800).leading(1.5);
const TILE_LABEL: TextStyle = TextStyle::new(10.5, 600, SLATE_600).caps(2.2);
const TILE_TEXT: TextStyle = TextStyle::new(13.0, 500, SLATE_800);
const FOOTER_LABEL: TextStyle = TextStyle::new(10.5, 600, SLATE_600).caps(2.5);
const FOOTER_TEXT: TextStyle = TextStyle::new(15.0, 600, SLATE_900);
const CTA: TextStyle = TextStyle::new(12.0, 600, SLATE_900).caps(2.2);

pub(super) fn render(form: &FormState, features: &[&str], palette: &Palette) -> Node {
    let inner_width = CARD_WIDTH - 2.0 * PAD;
    let mut nodes = backdrop(palette, RADIUS, 0.9, false);
    nodes.push(screen_layer(
        "glow",
        0.9,
        card_frame(),
        RADIUS,
        Paint::radial_at(
            0.5,
            0.5,
            vec![
                ColorStop::new(0.0, white(0.75)),
                ColorStop::new(0.4, white(0.2)),
                ColorStop::new(0.7, white(0.0)),
            ],
        ),
    ));

    let motif = Frame::new(CARD_WIDTH - PAD - MOTIF, PAD, MOTIF, MOTIF);
    nodes.push(conic_motif(motif, palette));

    let heading_width = motif.x - PAD - 16.0;
    let (eyebrow, eyebrow_bottom) = place(
        Some("eyebrow"),
        "Limited Edition",
        PAD,
        PAD + 4.0,
        heading_width,
        1,
        &EYEBROW,
    );
    nodes.push(eyebrow);

    let (title, title_bottom) = place(
        Some("title"),
        &form.product_name,
        PAD,
        eyebrow_bottom + 8.0,
        heading_width,
        3,
        &TITLE,
    );
    nodes.push(title);

    let (description, description_bottom) = place(
        Some("description"),
        &form.description,
        PAD,
        title_bottom.max(motif.bottom()) + 22.0,
        inner_width.min(400.0),
        3,
        &BODY,
    );
    nodes.push(description);

    let grid_top = description_bottom + 20.0;
    let tile_width = (inner_width - TILE_GAP) / 2.0;
    for (i, feature) in features.iter().enumerate() {
        let col = (i % 2) as f32;
        let row = (i / 2) as f32;
        let tile = Frame::new(
            PAD + col * (tile_width + TILE_GAP),
            grid_top + row * (TILE_HEIGHT + TILE_GAP),
            tile_width,
            TILE_HEIGHT,
        );
        nodes.push(highlight_tile(tile, i + 1, feature));
    }

    nodes.push(offer_footer(form, palette, inner_width));
    nodes.push(outline(RADIUS, 0.3));
    Node::group(nodes)
}

/// Glass square with an accent fan sweeping clockwise from 90 degrees
fn conic_motif(frame: Frame, palette: &Palette) -> Node {
    let accent = palette.accent_alpha(0.25);
    let mut children = vec![glass(frame, 16.0, 0.7)];
    children.extend(conic_wedges(frame, accent));
    children.push(glass(frame.inset(20.0), 12.0, 0.95));
    Node::group(children)
}

/// Pie wedges whose alpha fades linearly to zero at [`CONIC_REACH`].
fn conic_wedges(frame: Frame, color: Rgba) -> Vec<Node> {
    let (cx, cy) = (frame.center_x(), frame.center_y());
    let r = frame.width.min(frame.height) / 2.0;
    let step = std::f32::consts::TAU / CONIC_STEPS as f32;

    (0..CONIC_STEPS)
        .filter_map(|i| {
            let t = (i as f32 + 0.5) / CONIC_STEPS as f32;
            if t >= CONIC_REACH {
                return None;
            }
            let alpha = color.a * (1.0 - t / CONIC_REACH);
            // CSS "from 90deg" starts at 3 o'clock, which is angle 0 in SVG space
            let a0 = step * i as f32;
            let a1 = a0 + step;

            let mut d = String::new();
            let _ = write!(
                d,
                "M{:.2} {:.2} L{:.2} {:.2} A{:.2} {:.2} 0 0 1 {:.2} {:.2} Z",
                cx,
                cy,
                cx + r * a0.cos(),
                cy + r * a0.sin(),
                r,
                r,
                cx + r * a1.cos(),
                cy + r * a1.sin(),
            );
            Some(Node::Path {
                d,
                fill: Paint::Solid(color.with_alpha(alpha)),
            })
        })
        .collect()
}

fn highlight_tile(tile: Frame, n: usize, feature: &str) -> Node {
    let inner = tile.inset(16.0);
    let (label, label_bottom) = place(
        None,
        &format!("Highlight {n}"),
        inner.x,
        inner.y,
        inner.width,
        1,
        &TILE_LABEL,
    );
    let (text, _) = place(feature_id(n), feature, inner.x, label_bottom + 6.0, inner.width, 2, &TILE_TEXT);
    Node::group(vec![glass(tile, 18.0, 0.75), label, text])
}

fn offer_footer(form: &FormState, palette: &Palette, inner_width: f32) -> Node {
    let footer = Frame::new(PAD, CARD_HEIGHT - PAD - FOOTER_HEIGHT, inner_width, FOOTER_HEIGHT);

    let (button, button_frame) = Pill {
        id: Some("cta"),
        label: form.cta.clone(),
        fill: palette.text_color(),
        stroke: None,
        style: TextStyle {
            color: palette.contrast_ink(),
            ..CTA
        },
        height: 38.0,
        padding: 20.0,
        max_width: 200.0,
    }
    .build(footer.right() - 18.0, footer.center_y() - 19.0, Anchor::End);

    let text_width = (button_frame.x - footer.x - 18.0 - 12.0).max(FOOTER_TEXT.size);
    let (label, label_bottom) = place(
        None,
        "Exclusive Offer",
        footer.x + 18.0,
        footer.y + 16.0,
        text_width,
        1,
        &FOOTER_LABEL,
    );
    let (tagline, _) = place(
        Some("tagline"),
        &form.tagline,
        footer.x + 18.0,
        label_bottom + 4.0,
        text_width,
        1,
        &FOOTER_TEXT,
    );

    Node::group(vec![glass(footer, 28.0, 0.7), label, tagline, button])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conic_fan_fades_out() {
        let wedges = conic_wedges(Frame::new(0.0, 0.0, 100.0, 100.0), Rgba::new(0, 0, 0, 0.25));
        assert!(!wedges.is_empty());
        assert!(wedges.len() < CONIC_STEPS);

        let alphas: Vec<f32> = wedges
            .iter()
            .map(|w| match w {
                Node::Path { fill: Paint::Solid(c), .. } => c.a,
                _ => panic!("expected solid wedge"),
            })
            .collect();
        assert!(alphas[0] <= 0.25);
        assert!(alphas.windows(2).all(|w| w[0] > w[1]));
    }
}
