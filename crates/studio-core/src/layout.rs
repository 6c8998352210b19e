//! Card layout variants

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StudioError;

/// One of the three fixed card arrangements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutVariant {
    /// Hero title, signature motif, numbered features, CTA button
    Spotlight,
    /// Title with conic motif, highlight tiles, offer footer
    Angled,
    /// Label + title, numbered rows, featured-formula footer
    Compact,
}

impl LayoutVariant {
    /// Gallery order
    pub const ALL: [LayoutVariant; 3] = [
        LayoutVariant::Spotlight,
        LayoutVariant::Angled,
        LayoutVariant::Compact,
    ];

    /// Identifier used in filenames and on the command line
    pub fn id(&self) -> &'static str {
        match self {
            LayoutVariant::Spotlight => "spotlight",
            LayoutVariant::Angled => "angled",
            LayoutVariant::Compact => "compact",
        }
    }

    /// Human-readable panel title
    pub fn title(&self) -> &'static str {
        match self {
            LayoutVariant::Spotlight => "Editorial Spotlight",
            LayoutVariant::Angled => "Launch Story",
            LayoutVariant::Compact => "Compact Banner",
        }
    }

    /// Slot in fixed-size per-layout tables
    pub(crate) fn index(&self) -> usize {
        match self {
            LayoutVariant::Spotlight => 0,
            LayoutVariant::Angled => 1,
            LayoutVariant::Compact => 2,
        }
    }
}

impl fmt::Display for LayoutVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for LayoutVariant {
    type Err = StudioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LayoutVariant::ALL
            .into_iter()
            .find(|layout| layout.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| StudioError::UnknownLayout(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_parse_back() {
        for layout in LayoutVariant::ALL {
            assert_eq!(layout.id().parse::<LayoutVariant>().unwrap(), layout);
        }
        assert_eq!("Angled".parse::<LayoutVariant>().unwrap(), LayoutVariant::Angled);
    }

    #[test]
    fn unknown_layout_is_error() {
        assert!(matches!(
            "poster".parse::<LayoutVariant>(),
            Err(StudioError::UnknownLayout(_))
        ));
    }

    #[test]
    fn indices_are_distinct() {
        let idx: Vec<_> = LayoutVariant::ALL.iter().map(|l| l.index()).collect();
        assert_eq!(idx, vec![0, 1, 2]);
    }

    #[test]
    fn titles_match_gallery() {
        assert_eq!(LayoutVariant::Spotlight.title(), "Editorial Spotlight");
        assert_eq!(LayoutVariant::Compact.to_string(), "compact");
    }
}
