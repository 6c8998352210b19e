//! Editable product copy.
//!
//! [`FormState`] is the single record the editor writes and every card reads.
//! No validation happens here: any string, including empty, is accepted.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::StudioResult;
use crate::palette::{find_palette, Palette, DEFAULT_PALETTE_ID};

/// Maximum number of features a card shows
pub const MAX_VISIBLE_FEATURES: usize = 3;

/// Number of feature inputs the editor offers
pub const FEATURE_INPUTS: usize = 3;

const DEFAULT_FEATURES: [&str; FEATURE_INPUTS] = [
    "Premium ingredients for everyday luxury",
    "Sleek design that deserves the spotlight",
    "Sustainably crafted with conscious care",
];

/// Current values of all editor fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormState {
    pub product_name: String,
    pub tagline: String,
    pub description: String,
    pub cta: String,
    pub features: Vec<String>,
    pub selected_palette_id: String,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            product_name: "Luminex Glow Serum".to_string(),
            tagline: "Radiant skin in 24 hours.".to_string(),
            description: "Powered by bio-active botanicals and adaptive hydration to give you your best glow yet."
                .to_string(),
            cta: "Shop the collection".to_string(),
            features: DEFAULT_FEATURES.iter().map(|s| s.to_string()).collect(),
            selected_palette_id: DEFAULT_PALETTE_ID.to_string(),
        }
    }
}

impl FormState {
    pub fn set_product_name(&mut self, value: impl Into<String>) {
        self.product_name = value.into();
    }

    pub fn set_tagline(&mut self, value: impl Into<String>) {
        self.tagline = value.into();
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.description = value.into();
    }

    pub fn set_cta(&mut self, value: impl Into<String>) {
        self.cta = value.into();
    }

    pub fn set_palette(&mut self, id: impl Into<String>) {
        self.selected_palette_id = id.into();
    }

    /// Replace one feature entry, leaving the others in place.
    ///
    /// Writing past the end pads the list with empty strings.
    pub fn set_feature(&mut self, index: usize, value: impl Into<String>) {
        if index >= self.features.len() {
            self.features.resize(index + 1, String::new());
        }
        self.features[index] = value.into();
    }

    /// Feature text for an editor slot (empty if unset)
    pub fn feature(&self, index: usize) -> &str {
        self.features.get(index).map(String::as_str).unwrap_or("")
    }

    /// Features as cards display them
    pub fn visible_features(&self) -> Vec<&str> {
        visible_features(&self.features)
    }

    /// The selected palette, or the first palette if the id is unknown
    pub fn palette(&self) -> &'static Palette {
        find_palette(&self.selected_palette_id)
    }

    /// Decode a JSON product brief. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> StudioResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON product brief from disk
    pub fn load(path: impl AsRef<Path>) -> StudioResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> StudioResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Non-blank entries in original order, capped at [`MAX_VISIBLE_FEATURES`].
///
/// Entries are kept verbatim; trimming is only used to detect blanks.
pub fn visible_features<S: AsRef<str>>(features: &[S]) -> Vec<&str> {
    features
        .iter()
        .map(|f| AsRef::<str>::as_ref(f))
        .filter(|f| !f.trim().is_empty())
        .take(MAX_VISIBLE_FEATURES)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_first_launch() {
        let form = FormState::default();
        assert_eq!(form.product_name, "Luminex Glow Serum");
        assert_eq!(form.features.len(), FEATURE_INPUTS);
        assert_eq!(form.palette().id, "aurora");
    }

    #[test]
    fn set_feature_replaces_single_entry() {
        let mut form = FormState::default();
        form.set_feature(1, "Refillable glass bottle");

        assert_eq!(form.features[0], DEFAULT_FEATURES[0]);
        assert_eq!(form.features[1], "Refillable glass bottle");
        assert_eq!(form.features[2], DEFAULT_FEATURES[2]);
    }

    #[test]
    fn set_feature_past_end_pads() {
        let mut form = FormState {
            features: vec![],
            ..FormState::default()
        };
        form.set_feature(2, "Third");
        assert_eq!(form.features, vec!["", "", "Third"]);
        assert_eq!(form.visible_features(), vec!["Third"]);
    }

    #[test]
    fn visible_features_filters_and_truncates() {
        let input = ["Glow", "  ", "Hydrate", "", "Extra"];
        assert_eq!(visible_features(&input), vec!["Glow", "Hydrate", "Extra"]);

        let input = ["a", "b", "c", "d"];
        assert_eq!(visible_features(&input), vec!["a", "b", "c"]);
    }

    #[test]
    fn visible_features_keeps_surrounding_whitespace() {
        let input = [" padded "];
        assert_eq!(visible_features(&input), vec![" padded "]);
    }

    #[test]
    fn empty_strings_accepted() {
        let mut form = FormState::default();
        form.set_product_name("");
        form.set_cta("");
        assert_eq!(form.product_name, "");
        assert_eq!(form.cta, "");
    }

    #[test]
    fn unknown_palette_resolves_to_first() {
        let mut form = FormState::default();
        form.set_palette("no-such-palette");
        assert_eq!(form.palette().id, "aurora");
        assert_eq!(form.selected_palette_id, "no-such-palette");
    }

    #[test]
    fn brief_uses_camel_case_and_defaults() {
        let form = FormState::from_json(r#"{"productName":"Orbit Lamp","selectedPaletteId":"zen"}"#).unwrap();
        assert_eq!(form.product_name, "Orbit Lamp");
        assert_eq!(form.palette().id, "zen");
        assert_eq!(form.cta, "Shop the collection");
    }

    #[test]
    fn brief_json_roundtrip() {
        let mut form = FormState::default();
        form.set_tagline("Light that follows you");
        let json = form.to_json().unwrap();
        assert!(json.contains("\"productName\""));
        assert_eq!(FormState::from_json(&json).unwrap(), form);
    }
}
