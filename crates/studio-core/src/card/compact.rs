//! Compact banner: label and title, numbered rows, featured-formula footer.

use crate::form::FormState;
use crate::palette::Palette;

use super::chrome::{
    accent_glow, backdrop, feature_id, glass, number_badge, outline, Pill, SLATE_600, SLATE_700,
    SLATE_800, SLATE_900,
};
use super::text::{place, TextStyle};
use super::{Anchor, Frame, Node, Paint, CARD_HEIGHT, CARD_WIDTH};

/// Footer copy shown when there are no features to feature
pub const COMPACT_FOOTER_FALLBACK: &str = "Uncompromised quality in every drop.";

const PAD: f32 = 24.0;
const RADIUS: f32 = 44.0;
const BADGE: f32 = 64.0;
const ROW_HEIGHT: f32 = 52.0;
const ROW_GAP: f32 = 10.0;
const FOOTER_HEIGHT: f32 = 92.0;

const LABEL: TextStyle = TextStyle::new(12.0, 600, SLATE_700).caps(3.6);
const TITLE: TextStyle = TextStyle::new(30.0, 600, SLATE_900).leading(1.15);
const BODY: TextStyle = TextStyle::new(14.0, 500, SLATE_800).leading(1.5);
const ROW_TEXT: TextStyle = TextStyle::new(14.0, 600, SLATE_700);
const FOOTER_LABEL: TextStyle = TextStyle::new(10.5, 600, SLATE_600).caps(2.5);
const FOOTER_TEXT: TextStyle = TextStyle::new(13.5, 600, SLATE_900).leading(1.25);
const CTA: TextStyle = TextStyle::new(11.0, 600, SLATE_900).caps(2.7);

pub(super) fn render(form: &FormState, features: &[&str], palette: &Palette) -> Node {
    let inner_width = CARD_WIDTH - 2.0 * PAD;
    let mut nodes = backdrop(palette, RADIUS, 0.95, false);

    let badge = Frame::new(CARD_WIDTH - PAD - BADGE, PAD, BADGE, BADGE);
    nodes.push(Node::group(vec![
        glass(badge, 24.0, 0.8),
        accent_glow(badge, 24.0, palette, 0.5, 0.5, 0.2, 0.7),
    ]));

    let heading_width = badge.x - PAD - 16.0;
    let (label, label_bottom) = place(Some("tagline"), &form.tagline, PAD, PAD + 6.0, heading_width, 2, &LABEL);
    nodes.push(label);

    let (title, title_bottom) = place(
        Some("title"),
        &form.product_name,
        PAD,
        label_bottom + 10.0,
        heading_width,
        2,
        &TITLE,
    );
    nodes.push(title);

    let (description, description_bottom) = place(
        Some("description"),
        &form.description,
        PAD,
        title_bottom.max(badge.bottom()) + 18.0,
        inner_width,
        3,
        &BODY,
    );
    nodes.push(description);

    let mut y = description_bottom + 16.0;
    for (i, feature) in features.iter().enumerate() {
        let n = i + 1;
        let row = Frame::new(PAD, y, inner_width, ROW_HEIGHT);
        let text_x = row.x + 64.0;
        let text_top = row.center_y() - ROW_TEXT.size * ROW_TEXT.line_height / 2.0;
        let (text, _) = place(feature_id(n), feature, text_x, text_top, row.right() - 16.0 - text_x, 1, &ROW_TEXT);

        nodes.push(Node::group(vec![
            glass(row, 20.0, 0.7),
            number_badge(
                row.x + 32.0,
                row.center_y(),
                16.0,
                Paint::Solid(palette.accent_alpha(0.9)),
                None,
                &format!("0{n}"),
                palette.text_color(),
                11.0,
            ),
            text,
        ]));
        y += ROW_HEIGHT + ROW_GAP;
    }

    nodes.push(formula_footer(form, features, palette, inner_width));
    nodes.push(outline(RADIUS, 0.35));
    Node::group(nodes)
}

fn formula_footer(form: &FormState, features: &[&str], palette: &Palette, inner_width: f32) -> Node {
    let footer = Frame::new(PAD, CARD_HEIGHT - PAD - FOOTER_HEIGHT, inner_width, FOOTER_HEIGHT);

    let (button, button_frame) = Pill {
        id: Some("cta"),
        label: form.cta.clone(),
        fill: palette.accent_alpha(1.0),
        stroke: None,
        style: TextStyle {
            color: palette.text_color(),
            ..CTA
        },
        height: 36.0,
        padding: 20.0,
        max_width: 190.0,
    }
    .build(footer.right() - 24.0, footer.center_y() - 18.0, Anchor::End);

    let text_width = (button_frame.x - footer.x - 24.0 - 12.0).max(FOOTER_TEXT.size);
    let (label, label_bottom) = place(
        None,
        "Featured Formula",
        footer.x + 24.0,
        footer.y + 18.0,
        text_width,
        1,
        &FOOTER_LABEL,
    );

    let highlight = features.first().copied().unwrap_or(COMPACT_FOOTER_FALLBACK);
    let (text, _) = place(
        Some("footer-feature"),
        highlight,
        footer.x + 24.0,
        label_bottom + 4.0,
        text_width,
        2,
        &FOOTER_TEXT,
    );

    Node::group(vec![glass(footer, 32.0, 0.8), label, text, button])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::render_card;
    use crate::layout::LayoutVariant;
    use crate::palette::find_palette;

    fn compact(form: &FormState) -> crate::card::Card {
        render_card(form, find_palette("aurora"), LayoutVariant::Compact)
    }

    #[test]
    fn footer_shows_first_feature() {
        let form = FormState::default();
        let card = compact(&form);
        assert_eq!(card.find_text("footer-feature").unwrap().content, form.features[0]);
    }

    #[test]
    fn footer_falls_back_without_features() {
        let mut form = FormState::default();
        form.features = vec![String::new(), "   ".into(), "\t".into()];
        let card = compact(&form);

        let footer = card.find_text("footer-feature").unwrap();
        assert_eq!(footer.content, COMPACT_FOOTER_FALLBACK);
        assert!(!footer.lines.is_empty());
        assert!(card.find_text("feature-1").is_none());
    }

    #[test]
    fn badges_are_zero_padded() {
        let card = compact(&FormState::default());
        let labels: Vec<_> = card
            .texts()
            .into_iter()
            .filter(|t| t.id.is_none())
            .flat_map(|t| t.lines.clone())
            .collect();
        for expected in ["01", "02", "03"] {
            assert!(labels.iter().any(|l| l == expected), "missing badge {expected}");
        }
    }
}
