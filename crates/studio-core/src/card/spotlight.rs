//! Editorial spotlight: hero title, signature motif, numbered features.

use crate::form::FormState;
use crate::palette::{ColorStop, Palette};

use super::chrome::{
    accent_glow, backdrop, feature_id, glass, hairline, number_badge, outline, white, Pill, SLATE_600,
    SLATE_700, SLATE_800, SLATE_900,
};
use super::text::{place, TextStyle};
use super::{Anchor, Frame, Node, Paint, CARD_HEIGHT, CARD_WIDTH};

const PAD: f32 = 28.0;
const RADIUS: f32 = 24.0;
const MOTIF: f32 = 150.0;

const BADGE: TextStyle = TextStyle::new(11.0, 600, SLATE_600).caps(2.2);
const TITLE: TextStyle = TextStyle::new(38.0, 600, SLATE_900).leading(1.05);
const TAGLINE: TextStyle = TextStyle::new(18.0, 500, SLATE_800);
const BODY: TextStyle = TextStyle::new(14.5, 500, SLATE_800).leading(1.5);
const FEATURE: TextStyle = TextStyle::new(13.0, 500, SLATE_700);
const SIGNATURE: TextStyle = TextStyle::new(9.5, 600, SLATE_700).caps(2.4);
const CTA: TextStyle = TextStyle::new(13.0, 600, SLATE_800).caps(2.3);

pub(super) fn render(form: &FormState, features: &[&str], palette: &Palette) -> Node {
    let inner_width = CARD_WIDTH - 2.0 * PAD;
    let mut nodes = backdrop(palette, RADIUS, 0.9, true);

    let (badge, badge_frame) = Pill {
        id: Some("badge"),
        label: "New Drop".to_string(),
        fill: white(0.6),
        stroke: hairline(0.5),
        style: BADGE,
        height: 30.0,
        padding: 16.0,
        max_width: inner_width,
    }
    .build(PAD, PAD, Anchor::Start);
    nodes.push(badge);

    let (title, title_bottom) = place(
        Some("title"),
        &form.product_name,
        PAD,
        badge_frame.bottom() + 18.0,
        inner_width,
        2,
        &TITLE,
    );
    nodes.push(title);

    let (tagline, tagline_bottom) = place(
        Some("tagline"),
        &form.tagline,
        PAD,
        title_bottom + 10.0,
        inner_width,
        2,
        &TAGLINE,
    );
    nodes.push(tagline);

    let row_top = tagline_bottom + 26.0;
    nodes.push(signature_motif(Frame::new(PAD, row_top, MOTIF, MOTIF), palette));

    let column_x = PAD + MOTIF + 22.0;
    let column_width = CARD_WIDTH - PAD - column_x;
    let (description, mut y) = place(
        Some("description"),
        &form.description,
        column_x,
        row_top,
        column_width,
        5,
        &BODY,
    );
    nodes.push(description);

    y += 14.0;
    for (i, feature) in features.iter().enumerate() {
        let n = i + 1;
        let label_x = column_x + 36.0;
        let (label, label_bottom) = place(
            feature_id(n),
            feature,
            label_x,
            y + 5.0,
            column_width - 36.0,
            2,
            &FEATURE,
        );
        let row_height = (label_bottom - y + 5.0).max(28.0);
        nodes.push(number_badge(
            column_x + 14.0,
            y + 14.0,
            14.0,
            Paint::Solid(white(0.7)),
            hairline(0.5),
            &n.to_string(),
            SLATE_600,
            11.0,
        ));
        nodes.push(label);
        y += row_height + 8.0;
    }

    let (cta, _) = Pill {
        id: Some("cta"),
        label: form.cta.clone(),
        fill: white(0.85),
        stroke: None,
        style: TextStyle {
            color: palette.accent_alpha(1.0),
            ..CTA
        },
        height: 42.0,
        padding: 24.0,
        max_width: inner_width,
    }
    .build(PAD, CARD_HEIGHT - PAD - 42.0, Anchor::Start);
    nodes.push(cta);

    nodes.push(outline(RADIUS, 0.4));
    Node::group(nodes)
}

/// Layered glass square with an accent glow and a "Signature" pill
fn signature_motif(frame: Frame, palette: &Palette) -> Node {
    let (pill, _) = Pill {
        id: None,
        label: "Signature".to_string(),
        fill: white(0.8),
        stroke: None,
        style: SIGNATURE,
        height: 22.0,
        padding: 14.0,
        max_width: frame.width - 16.0,
    }
    .build(frame.center_x(), frame.bottom() - 14.0 - 22.0, Anchor::Middle);

    Node::group(vec![
        glass(frame, 24.0, 0.7),
        accent_glow(frame, 24.0, palette, 0.3, 0.3, 0.28, 0.6),
        glass(frame.inset(22.0), 16.0, 0.9),
        Node::Rect {
            frame: frame.inset(38.0),
            radius: 20.0,
            fill: Paint::Linear {
                angle_deg: 135.0,
                stops: vec![
                    ColorStop::new(0.0, white(1.0)),
                    ColorStop::new(0.5, white(1.0)),
                    ColorStop::new(1.0, white(0.5)),
                ],
            },
            stroke: hairline(0.4),
        },
        pill,
    ])
}
