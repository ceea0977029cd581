//! Core data structures for brain activity frames.

/// A named node in an intensity-valued region tree.
///
/// Intensity is nominally in `0.0..=1.0` but is never clamped; out-of-range
/// values survive parsing and show up in rendering as longer bars.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Region {
    /// Region name (e.g. "amygdala")
    pub name: String,
    /// Activity level
    pub intensity: f64,
    /// Nested subregions, in source order
    pub children: Vec<Region>,
}

impl Region {
    /// Create a leaf region with no children.
    pub fn new(name: impl Into<String>, intensity: f64) -> Self {
        Self {
            name: name.into(),
            intensity,
            children: Vec::new(),
        }
    }

    /// Create a region with the given children.
    pub fn with_children(name: impl Into<String>, intensity: f64, children: Vec<Region>) -> Self {
        Self {
            name: name.into(),
            intensity,
            children,
        }
    }

    /// Check if this region has no subregions.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Depth of the subtree rooted here (a leaf has depth 1).
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(Region::depth).max().unwrap_or(0)
    }

    /// Number of regions in the subtree, this one included.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Region::count).sum::<usize>()
    }
}

/// One labeled instant of the time series.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    /// Timestamp in milliseconds
    pub timestamp: i64,
    /// Top-level regions, in source order
    pub regions: Vec<Region>,
}

impl Frame {
    /// Create a new frame.
    pub fn new(timestamp: i64, regions: Vec<Region>) -> Self {
        Self { timestamp, regions }
    }

    /// Find the first top-level region with the given name.
    pub fn find_region(&self, name: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.name == name)
    }

    /// Total number of regions at every depth.
    pub fn region_count(&self) -> usize {
        self.regions.iter().map(Region::count).sum()
    }
}
