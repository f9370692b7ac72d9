//! Colors - Gallery Tone Palette
//!
//! Fixed tone colors for widget color variants. Chrome colors (backgrounds,
//! borders, text) come from the gpui-component theme so they track light/dark
//! mode; the tones below are brand constants shared by both modes.

use gpui::{Rgba, rgb, rgba};

/// Gallery tone palette - All colors are accessed via associated functions
pub struct GalleryColors;

impl GalleryColors {
    // Tones
    /// Primary accent - Indigo
    pub fn primary() -> Rgba { rgb(0x4f46e5) }
    /// Secondary accent - Pink
    pub fn secondary() -> Rgba { rgb(0xdb2777) }
    /// Success - Green
    pub fn success() -> Rgba { rgb(0x22c55e) }
    /// Warning - Amber
    pub fn warning() -> Rgba { rgb(0xf59e0b) }
    /// Error/Danger - Red
    pub fn danger() -> Rgba { rgb(0xef4444) }
    /// Info - Blue
    pub fn info() -> Rgba { rgb(0x3b82f6) }

    // Text on tones
    /// Light text (on tone backgrounds)
    pub fn text_on_tone() -> Rgba { rgb(0xffffff) }

    // Fixed demo colors
    /// Gold star fill for ratings
    pub fn rating_star() -> Rgba { rgb(0xfaaf00) }
    /// Transparent
    pub fn transparent() -> Rgba { rgba(0x00000000) }
}

/// Widget tone, mirrored across the showcased control set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tone {
    #[default]
    Primary,
    Secondary,
    Success,
    Warning,
    Danger,
    Info,
}

impl Tone {
    /// Resolve the tone to its fill color
    pub fn color(self) -> Rgba {
        match self {
            Tone::Primary => GalleryColors::primary(),
            Tone::Secondary => GalleryColors::secondary(),
            Tone::Success => GalleryColors::success(),
            Tone::Warning => GalleryColors::warning(),
            Tone::Danger => GalleryColors::danger(),
            Tone::Info => GalleryColors::info(),
        }
    }

    /// Human-readable tone label, used by the showcase pages
    pub fn label(self) -> &'static str {
        match self {
            Tone::Primary => "Primary",
            Tone::Secondary => "Secondary",
            Tone::Success => "Success",
            Tone::Warning => "Warning",
            Tone::Danger => "Danger",
            Tone::Info => "Info",
        }
    }

    /// All tones, in display order
    pub fn all() -> &'static [Tone] {
        &[
            Tone::Primary,
            Tone::Secondary,
            Tone::Success,
            Tone::Warning,
            Tone::Danger,
            Tone::Info,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_tone_has_a_distinct_color() {
        let mut seen = Vec::new();
        for tone in Tone::all() {
            let c = tone.color();
            let key = (c.r.to_bits(), c.g.to_bits(), c.b.to_bits());
            assert!(!seen.contains(&key), "duplicate color for {:?}", tone);
            seen.push(key);
        }
    }
}
