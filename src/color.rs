//! Intensity tiers: the glyph and terminal color used for a bar.

/// ANSI escape that restores the default terminal color.
pub const RESET: &str = "\x1b[0m";

/// Bright ANSI foreground colors used for intensity bars.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnsiColor {
    Grey,
    Blue,
    Cyan,
    Green,
    Yellow,
    Red,
}

impl AnsiColor {
    /// Escape sequence that switches the foreground to this color.
    pub fn escape(self) -> &'static str {
        match self {
            AnsiColor::Grey   => "\x1b[90m",
            AnsiColor::Blue   => "\x1b[94m",
            AnsiColor::Cyan   => "\x1b[96m",
            AnsiColor::Green  => "\x1b[92m",
            AnsiColor::Yellow => "\x1b[93m",
            AnsiColor::Red    => "\x1b[91m",
        }
    }
}

/// One row of the intensity lookup table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntensityTier {
    /// Exclusive upper bound; `None` for the last tier.
    pub below: Option<f64>,
    pub glyph: char,
    pub color: AnsiColor,
}

/// Ascending tiers. A value belongs to the first tier whose bound it is
/// strictly below; the last tier catches everything else, values above 1.0
/// included.
pub static TIERS: [IntensityTier; 6] = [
    IntensityTier { below: Some(0.2),  glyph: ' ', color: AnsiColor::Grey },
    IntensityTier { below: Some(0.4),  glyph: '.', color: AnsiColor::Blue },
    IntensityTier { below: Some(0.6),  glyph: ':', color: AnsiColor::Cyan },
    IntensityTier { below: Some(0.75), glyph: '+', color: AnsiColor::Green },
    IntensityTier { below: Some(0.9),  glyph: 'X', color: AnsiColor::Yellow },
    IntensityTier { below: None,       glyph: '@', color: AnsiColor::Red },
];

/// Look up the tier for an intensity.
///
/// NaN compares false against every bound and lands in the last tier.
pub fn tier_for(intensity: f64) -> &'static IntensityTier {
    TIERS
        .iter()
        .find(|tier| tier.below.is_some_and(|bound| intensity < bound))
        .unwrap_or(&TIERS[TIERS.len() - 1])
}

/// Bar glyph for an intensity.
#[inline]
pub fn glyph_for(intensity: f64) -> char {
    tier_for(intensity).glyph
}

/// Bar color for an intensity.
#[inline]
pub fn color_for(intensity: f64) -> AnsiColor {
    tier_for(intensity).color
}
