//! Text measurement and wrapping.
//!
//! SVG has no line breaking, so cards lay text out up front. Widths come from
//! a per-character advance table rather than real font metrics: the result is
//! approximate but identical on every machine, which keeps rendering pure.

use crate::color::Rgba;

use super::{Anchor, Node, TextBlock};

const ELLIPSIS: char = '\u{2026}';

/// Typographic settings for one text block
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    /// Multiplier of `size` between baselines
    pub line_height: f32,
    pub weight: u16,
    /// Extra space after every character, in pixels
    pub tracking: f32,
    pub uppercase: bool,
    pub color: Rgba,
    pub anchor: Anchor,
}

impl TextStyle {
    pub const fn new(size: f32, weight: u16, color: Rgba) -> Self {
        Self {
            size,
            line_height: 1.3,
            weight,
            tracking: 0.0,
            uppercase: false,
            color,
            anchor: Anchor::Start,
        }
    }

    /// Uppercase label with letter spacing
    pub const fn caps(mut self, tracking: f32) -> Self {
        self.uppercase = true;
        self.tracking = tracking;
        self
    }

    pub const fn leading(mut self, line_height: f32) -> Self {
        self.line_height = line_height;
        self
    }

    pub const fn centered(mut self) -> Self {
        self.anchor = Anchor::Middle;
        self
    }
}

/// Advance of one character as a fraction of the font size
fn advance(c: char) -> f32 {
    match c {
        ' ' => 0.28,
        'i' | 'j' | 'l' | '!' | '.' | ',' | '\'' | '|' | ':' | ';' => 0.26,
        'f' | 't' | 'r' | 'I' => 0.36,
        'm' | 'w' | 'M' | 'W' => 0.82,
        c if c.is_uppercase() || c.is_ascii_digit() => 0.64,
        _ => 0.52,
    }
}

/// Estimated rendered width of `text` in pixels
pub fn measure(text: &str, style: &TextStyle) -> f32 {
    let weight_factor = if style.weight >= 600 { 1.05 } else { 1.0 };
    text.chars()
        .map(|c| advance(c) * style.size * weight_factor + style.tracking)
        .sum()
}

/// Greedy word wrap into at most `max_lines` lines (0 = unlimited).
///
/// Words wider than the line are broken between characters. When lines are
/// dropped, the last kept line ends with an ellipsis.
pub fn wrap(text: &str, max_width: f32, style: &TextStyle, max_lines: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        if measure(&candidate, style) <= max_width {
            current = candidate;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }

        if measure(word, style) <= max_width {
            current = word.to_string();
            continue;
        }

        for ch in word.chars() {
            current.push(ch);
            if current.chars().count() > 1 && measure(&current, style) > max_width {
                current.pop();
                lines.push(std::mem::take(&mut current));
                current.push(ch);
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    if max_lines > 0 && lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            ellipsize(last, max_width, style);
        }
    }

    lines
}

fn ellipsize(line: &mut String, max_width: f32, style: &TextStyle) {
    let mut candidate = format!("{line}{ELLIPSIS}");
    while measure(&candidate, style) > max_width && line.pop().is_some() {
        candidate = format!("{}{ELLIPSIS}", line.trim_end());
    }
    *line = candidate;
}

/// Lay out `content` with its top edge at `top`.
///
/// Returns the text node and the y coordinate below its last line. Empty
/// content still yields a node (so it can be found by id) but takes no space.
pub(crate) fn place(
    id: Option<&'static str>,
    content: &str,
    x: f32,
    top: f32,
    max_width: f32,
    max_lines: usize,
    style: &TextStyle,
) -> (Node, f32) {
    let shown = if style.uppercase {
        content.to_uppercase()
    } else {
        content.to_string()
    };
    let lines = wrap(&shown, max_width, style, max_lines);
    let line_height = style.size * style.line_height;
    let bottom = top + line_height * lines.len() as f32;

    let block = TextBlock {
        id,
        content: content.to_string(),
        lines,
        x,
        y: top + style.size * 0.82 + (line_height - style.size) / 2.0,
        size: style.size,
        line_height,
        weight: style.weight,
        tracking: style.tracking,
        color: style.color,
        anchor: style.anchor,
    };

    (Node::Text(block), bottom)
}
