//! SVG serialization of a [`Card`].
//!
//! Output is byte-for-byte deterministic: gradient ids are numbered in
//! traversal order and all coordinates are printed with fixed precision.

use std::fmt::Write as _;

use crate::color::Rgba;
use crate::palette::ColorStop;

use super::{Anchor, Blend, Card, Node, Paint, Stroke, TextBlock};

/// Font stack for card text
pub const FONT_FAMILY: &str = "Geist, Inter, 'Helvetica Neue', Arial, sans-serif";

struct SvgWriter {
    defs: String,
    body: String,
    next_id: usize,
}

pub(super) fn write_card(card: &Card) -> String {
    let mut writer = SvgWriter {
        defs: String::new(),
        body: String::new(),
        next_id: 0,
    };
    writer.node(&card.root, 1);

    let mut out = String::with_capacity(writer.defs.len() + writer.body.len() + 256);
    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" data-layout="{layout}" data-palette="{palette}">"#,
        w = num(card.width),
        h = num(card.height),
        layout = card.layout.id(),
        palette = card.palette_id,
    );
    out.push('\n');
    if !writer.defs.is_empty() {
        out.push_str("  <defs>\n");
        out.push_str(&writer.defs);
        out.push_str("  </defs>\n");
    }
    out.push_str(&writer.body);
    out.push_str("</svg>\n");
    out
}

impl SvgWriter {
    fn node(&mut self, node: &Node, depth: usize) {
        match node {
            Node::Group {
                id,
                opacity,
                blend,
                children,
            } => {
                self.indent(depth);
                self.body.push_str("<g");
                if let Some(id) = id {
                    let _ = write!(self.body, r#" data-role="{id}""#);
                }
                if *opacity < 1.0 {
                    let _ = write!(self.body, r#" opacity="{}""#, num(*opacity));
                }
                if *blend == Blend::Screen {
                    self.body.push_str(r#" style="mix-blend-mode:screen""#);
                }
                self.body.push_str(">\n");
                for child in children {
                    self.node(child, depth + 1);
                }
                self.indent(depth);
                self.body.push_str("</g>\n");
            }
            Node::Rect {
                frame,
                radius,
                fill,
                stroke,
            } => {
                let fill = self.paint(fill);
                self.indent(depth);
                let _ = write!(
                    self.body,
                    r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}"{}{}/>"#,
                    num(frame.x),
                    num(frame.y),
                    num(frame.width),
                    num(frame.height),
                    num(radius.min(frame.width / 2.0).min(frame.height / 2.0)),
                    fill,
                    stroke_attrs(stroke),
                );
                self.body.push('\n');
            }
            Node::Circle {
                cx,
                cy,
                r,
                fill,
                stroke,
            } => {
                let fill = self.paint(fill);
                self.indent(depth);
                let _ = write!(
                    self.body,
                    r#"<circle cx="{}" cy="{}" r="{}"{}{}/>"#,
                    num(*cx),
                    num(*cy),
                    num(*r),
                    fill,
                    stroke_attrs(stroke),
                );
                self.body.push('\n');
            }
            Node::Path { d, fill } => {
                let fill = self.paint(fill);
                self.indent(depth);
                let _ = write!(self.body, r#"<path d="{d}"{fill}/>"#);
                self.body.push('\n');
            }
            Node::Text(block) => self.text(block, depth),
        }
    }

    fn text(&mut self, block: &TextBlock, depth: usize) {
        if block.lines.is_empty() {
            return;
        }

        let anchor = match block.anchor {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        };

        self.indent(depth);
        let _ = write!(
            self.body,
            r#"<text x="{}" y="{}" font-family="{}" font-size="{}" font-weight="{}" text-anchor="{}"{}"#,
            num(block.x),
            num(block.y),
            FONT_FAMILY,
            num(block.size),
            block.weight,
            anchor,
            color_attrs("fill", &block.color),
        );
        if block.tracking > 0.0 {
            let _ = write!(self.body, r#" letter-spacing="{}""#, num(block.tracking));
        }
        if let Some(id) = block.id {
            let _ = write!(self.body, r#" data-role="{id}""#);
        }
        self.body.push('>');

        for (i, line) in block.lines.iter().enumerate() {
            let dy = if i == 0 { 0.0 } else { block.line_height };
            let _ = write!(
                self.body,
                r#"<tspan x="{}" dy="{}">{}</tspan>"#,
                num(block.x),
                num(dy),
                escape(line),
            );
        }
        self.body.push_str("</text>\n");
    }

    /// Returns the fill attribute(s), registering gradients in `<defs>`.
    fn paint(&mut self, paint: &Paint) -> String {
        match paint {
            Paint::None => r#" fill="none""#.to_string(),
            Paint::Solid(color) => color_attrs("fill", color),
            Paint::Linear { angle_deg, stops } => {
                let id = self.gradient_id();
                let (x1, y1, x2, y2) = css_angle_to_vector(*angle_deg);
                let _ = writeln!(
                    self.defs,
                    r#"    <linearGradient id="{id}" x1="{}" y1="{}" x2="{}" y2="{}">"#,
                    num(x1),
                    num(y1),
                    num(x2),
                    num(y2),
                );
                self.stops(stops);
                self.defs.push_str("    </linearGradient>\n");
                format!(r#" fill="url(#{id})""#)
            }
            Paint::Radial { cx, cy, r, stops } => {
                let id = self.gradient_id();
                let _ = writeln!(
                    self.defs,
                    r#"    <radialGradient id="{id}" cx="{}" cy="{}" r="{}">"#,
                    num(*cx),
                    num(*cy),
                    num(*r),
                );
                self.stops(stops);
                self.defs.push_str("    </radialGradient>\n");
                format!(r#" fill="url(#{id})""#)
            }
        }
    }

    fn stops(&mut self, stops: &[ColorStop]) {
        for stop in stops {
            let _ = writeln!(
                self.defs,
                r#"      <stop offset="{}" stop-color="rgb({},{},{})" stop-opacity="{}"/>"#,
                num(stop.offset),
                stop.color.r,
                stop.color.g,
                stop.color.b,
                num(stop.color.a),
            );
        }
    }

    fn gradient_id(&mut self) -> String {
        let id = format!("paint{}", self.next_id);
        self.next_id += 1;
        id
    }

    fn indent(&mut self, depth: usize) {
        for _ in 0..depth {
            self.body.push_str("  ");
        }
    }
}

fn color_attrs(attr: &str, color: &Rgba) -> String {
    let mut out = format!(r#" {attr}="rgb({},{},{})""#, color.r, color.g, color.b);
    if color.a < 1.0 {
        let _ = write!(out, r#" {attr}-opacity="{}""#, num(color.a));
    }
    out
}

fn stroke_attrs(stroke: &Option<Stroke>) -> String {
    match stroke {
        Some(stroke) => format!(r#"{} stroke-width="{}""#, color_attrs("stroke", &stroke.color), num(stroke.width)),
        None => String::new(),
    }
}

/// Map a CSS gradient angle onto bounding-box gradient endpoints.
///
/// CSS measures clockwise from "to top"; the vector runs through the box
/// centre.
fn css_angle_to_vector(angle_deg: f32) -> (f32, f32, f32, f32) {
    let rad = angle_deg.to_radians();
    let (dx, dy) = (rad.sin() / 2.0, -rad.cos() / 2.0);
    (0.5 - dx, 0.5 - dy, 0.5 + dx, 0.5 + dy)
}

/// Fixed-precision number without trailing zeros
fn num(v: f32) -> String {
    let s = format!("{:.2}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c if c.is_control() => {}
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::render_card;
    use crate::form::FormState;
    use crate::layout::LayoutVariant;
    use crate::palette::find_palette;

    #[test]
    fn num_trims_zeros() {
        assert_eq!(num(480.0), "480");
        assert_eq!(num(0.25), "0.25");
        assert_eq!(num(0.5), "0.5");
        assert_eq!(num(-0.001), "0");
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(escape("Salt & <Pepper>"), "Salt &amp; &lt;Pepper&gt;");
        assert_eq!(escape("tab\there"), "tabhere");
    }

    #[test]
    fn angle_135_runs_top_left_to_bottom_right() {
        let (x1, y1, x2, y2) = css_angle_to_vector(135.0);
        assert!(x1 < x2 && y1 < y2);
        assert!((x1 - 0.1464).abs() < 1e-3);
    }

    #[test]
    fn svg_contains_escaped_copy() {
        let mut form = FormState::default();
        form.set_product_name("Salt & Light");
        let svg = render_card(&form, find_palette("aurora"), LayoutVariant::Spotlight).to_svg();

        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"data-layout="spotlight""#));
        assert!(svg.contains("Salt &amp; Light"));
        assert!(svg.contains("mix-blend-mode:screen"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn gradient_ids_are_sequential() {
        let svg = render_card(&FormState::default(), find_palette("nebula"), LayoutVariant::Angled).to_svg();
        assert!(svg.contains(r#"id="paint0""#));
        assert!(svg.contains(r#"id="paint1""#));
    }
}
