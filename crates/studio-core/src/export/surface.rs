//! Per-layout handles to the currently displayed card surface.

use std::sync::Arc;

use tracing::debug;

use crate::card::Card;
use crate::layout::LayoutVariant;

/// Opaque reference to a mounted card surface.
///
/// Cloning is cheap; the SVG is shared.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceHandle {
    pub layout: LayoutVariant,
    /// Bumped every time the layout's surface is replaced
    pub generation: u64,
    pub svg: Arc<str>,
    pub width: f32,
    pub height: f32,
}

/// Fixed three-slot map from layout to its current surface
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SurfaceRegistry {
    slots: [Option<SurfaceHandle>; 3],
    generation: u64,
}

impl SurfaceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install (or replace) the surface for `card.layout`
    pub fn mount(&mut self, card: &Card) -> &SurfaceHandle {
        self.mount_svg(card.layout, card.to_svg(), card.width, card.height)
    }

    /// Install a pre-serialized surface
    pub fn mount_svg(&mut self, layout: LayoutVariant, svg: impl Into<Arc<str>>, width: f32, height: f32) -> &SurfaceHandle {
        self.generation += 1;
        debug!(layout = %layout, generation = self.generation, "surface mounted");
        self.slots[layout.index()].insert(SurfaceHandle {
            layout,
            generation: self.generation,
            svg: svg.into(),
            width,
            height,
        })
    }

    /// Drop the surface for `layout`; returns whether one was mounted
    pub fn unmount(&mut self, layout: LayoutVariant) -> bool {
        let removed = self.slots[layout.index()].take().is_some();
        if removed {
            debug!(layout = %layout, "surface unmounted");
        }
        removed
    }

    pub fn get(&self, layout: LayoutVariant) -> Option<SurfaceHandle> {
        self.slots[layout.index()].clone()
    }

    pub fn is_mounted(&self, layout: LayoutVariant) -> bool {
        self.slots[layout.index()].is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::render_card;
    use crate::form::FormState;
    use crate::palette::find_palette;

    #[test]
    fn starts_empty() {
        let registry = SurfaceRegistry::new();
        for layout in LayoutVariant::ALL {
            assert!(registry.get(layout).is_none());
        }
    }

    #[test]
    fn mount_replaces_and_bumps_generation() {
        let mut registry = SurfaceRegistry::new();
        let mut form = FormState::default();
        let palette = find_palette("aurora");

        let first = registry.mount(&render_card(&form, palette, LayoutVariant::Angled)).clone();
        form.set_product_name("Second Edition");
        let second = registry.mount(&render_card(&form, palette, LayoutVariant::Angled)).clone();

        assert!(second.generation > first.generation);
        assert_ne!(first.svg, second.svg);
        assert_eq!(registry.get(LayoutVariant::Angled), Some(second));
        assert!(!registry.is_mounted(LayoutVariant::Spotlight));
    }

    #[test]
    fn unmount_clears_slot() {
        let mut registry = SurfaceRegistry::new();
        registry.mount_svg(LayoutVariant::Compact, "<svg/>", 10.0, 10.0);
        assert!(registry.unmount(LayoutVariant::Compact));
        assert!(!registry.unmount(LayoutVariant::Compact));
        assert!(registry.get(LayoutVariant::Compact).is_none());
    }
}
