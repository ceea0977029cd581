//! Text rendering of frames as nested intensity bars.

use std::str::FromStr;

use crate::color::{tier_for, RESET};
use crate::{Frame, Region};

/// Characters per 1.0 of intensity.
pub const BAR_SCALE: f64 = 10.0;

/// Upper bound on a single bar, so absurd intensities cannot exhaust memory.
/// Ordinary out-of-range values (1.5 -> 15 glyphs) are well below it.
pub const MAX_BAR_WIDTH: usize = 4096;

/// Which regions of a frame get a line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LayoutMode {
    /// Whole region tree, indented two spaces per level
    #[default]
    List,
    /// Top-level regions only
    Flat,
}

impl FromStr for LayoutMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "list" => Ok(LayoutMode::List),
            "flat" => Ok(LayoutMode::Flat),
            other => Err(format!("unknown layout mode: {}", other)),
        }
    }
}

/// Options for rendering frames.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Wrap bars in ANSI color escapes
    pub enable_color: bool,
    /// Region layout
    pub layout: LayoutMode,
}

impl RenderOptions {
    /// Plain list layout with color switched on or off.
    pub fn new(enable_color: bool) -> Self {
        Self {
            enable_color,
            layout: LayoutMode::List,
        }
    }
}

/// Number of glyphs in the bar for an intensity: `floor(intensity * 10)`.
///
/// Negative and NaN intensities give an empty bar.
pub fn bar_width(intensity: f64) -> usize {
    let width = (intensity * BAR_SCALE).floor();
    if width.is_nan() || width <= 0.0 {
        0
    } else {
        (width as usize).min(MAX_BAR_WIDTH)
    }
}

fn render_region(out: &mut String, region: &Region, depth: usize, options: &RenderOptions) {
    let tier = tier_for(region.intensity);

    out.push_str(&"  ".repeat(depth));
    out.push('[');
    out.push_str(&region.name);
    out.push_str("] ");
    if options.enable_color {
        out.push_str(tier.color.escape());
    }
    out.extend(std::iter::repeat(tier.glyph).take(bar_width(region.intensity)));
    if options.enable_color {
        out.push_str(RESET);
    }
    out.push('\n');

    if options.layout == LayoutMode::List {
        for child in &region.children {
            render_region(out, child, depth + 1, options);
        }
    }
}

/// Render one frame: a timestamp header, then one line per region in
/// depth-first pre-order.
///
/// ## Example
///
/// ```rust
/// use quanta_cerebra::{render_frame, Frame, Region, RenderOptions};
///
/// let frame = Frame::new(
///     40,
///     vec![Region::with_children("cortex", 0.5, vec![Region::new("v1", 0.95)])],
/// );
/// let text = render_frame(&frame, &RenderOptions::default());
/// assert_eq!(text, "[Time: 40 ms]\n[cortex] :::::\n  [v1] @@@@@@@@@\n");
/// ```
pub fn render_frame(frame: &Frame, options: &RenderOptions) -> String {
    let mut out = format!("[Time: {} ms]\n", frame.timestamp);
    for region in &frame.regions {
        render_region(&mut out, region, 0, options);
    }
    out
}

/// Render every frame, one string per frame.
pub fn render(frames: &[Frame], options: &RenderOptions) -> Vec<String> {
    frames.iter().map(|f| render_frame(f, options)).collect()
}
