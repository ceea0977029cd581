//! Synthetic in-between frames.
//!
//! Regions are matched across a frame pair by name and their intensities are
//! blended linearly. Original frames pass through untouched.

use crate::{Frame, Region};

/// How deep region matching goes when building in-between frames.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InterpolationMode {
    /// Blend only top-level regions. Synthetic frames carry no subregions.
    #[default]
    TopLevel,
    /// Also match and blend subregions by name at every depth.
    Recursive,
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Blend the regions of `from` with their first same-named peer in `to`.
///
/// Regions with no peer are dropped.
fn blend_regions(from: &[Region], to: &[Region], t: f64, mode: InterpolationMode) -> Vec<Region> {
    from.iter()
        .filter_map(|region| {
            let peer = to.iter().find(|r| r.name == region.name)?;
            let children = match mode {
                InterpolationMode::TopLevel => Vec::new(),
                InterpolationMode::Recursive => {
                    blend_regions(&region.children, &peer.children, t, mode)
                }
            };
            Some(Region {
                name: region.name.clone(),
                intensity: lerp(region.intensity, peer.intensity, t),
                children,
            })
        })
        .collect()
}

/// Build the frame at ratio `t` between `from` and `to`.
pub fn blend_frames(from: &Frame, to: &Frame, t: f64, mode: InterpolationMode) -> Frame {
    let timestamp = lerp(from.timestamp as f64, to.timestamp as f64, t) as i64;
    Frame {
        timestamp,
        regions: blend_regions(&from.regions, &to.regions, t, mode),
    }
}

/// Insert `factor - 1` blended frames between every adjacent pair.
///
/// Only top-level regions are blended; see [`interpolate_with`] for the
/// recursive variant. An empty input or a `factor` of 0 or 1 returns the
/// input as is. Otherwise `n` frames become `(n - 1) * factor + 1`.
///
/// ## Example
///
/// ```rust
/// use quanta_cerebra::{interpolate, Frame, Region};
///
/// let frames = vec![
///     Frame::new(0, vec![Region::new("r", 0.0)]),
///     Frame::new(100, vec![Region::new("r", 1.0)]),
/// ];
/// let out = interpolate(frames, 2);
/// assert_eq!(out.len(), 3);
/// assert_eq!(out[1].timestamp, 50);
/// assert_eq!(out[1].regions[0].intensity, 0.5);
/// ```
pub fn interpolate(frames: Vec<Frame>, factor: usize) -> Vec<Frame> {
    interpolate_with(frames, factor, InterpolationMode::TopLevel)
}

/// [`interpolate`] with an explicit [`InterpolationMode`].
pub fn interpolate_with(frames: Vec<Frame>, factor: usize, mode: InterpolationMode) -> Vec<Frame> {
    if frames.is_empty() || factor <= 1 {
        return frames;
    }

    let mut out = Vec::with_capacity((frames.len() - 1) * factor + 1);
    let mut iter = frames.into_iter().peekable();

    while let Some(current) = iter.next() {
        let Some(next) = iter.peek() else {
            out.push(current);
            break;
        };
        let between: Vec<Frame> = (1..factor)
            .map(|j| blend_frames(&current, next, j as f64 / factor as f64, mode))
            .collect();
        out.push(current);
        out.extend(between);
    }

    log::debug!("interpolated to {} frames (factor {}, {:?})", out.len(), factor, mode);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair() -> Vec<Frame> {
        vec![
            Frame::new(0, vec![Region::new("r", 0.0)]),
            Frame::new(100, vec![Region::new("r", 1.0)]),
        ]
    }

    #[test]
    fn test_identity_cases() {
        assert!(interpolate(Vec::new(), 4).is_empty());
        assert_eq!(interpolate(pair(), 1), pair());
        assert_eq!(interpolate(pair(), 0), pair());

        let single = vec![Frame::new(7, vec![Region::new("a", 0.3)])];
        assert_eq!(interpolate(single.clone(), 5), single);
    }

    #[test]
    fn test_midpoint() {
        let out = interpolate(pair(), 2);
        let stamps: Vec<i64> = out.iter().map(|f| f.timestamp).collect();
        assert_eq!(stamps, vec![0, 50, 100]);
        assert_eq!(out[1].regions, vec![Region::new("r", 0.5)]);
        assert_eq!(out[0], pair()[0]);
        assert_eq!(out[2], pair()[1]);
    }

    #[test]
    fn test_output_length() {
        let frames: Vec<Frame> = (0..5)
            .map(|i| Frame::new(i * 40, vec![Region::new("r", 0.1 * i as f64)]))
            .collect();
        assert_eq!(interpolate(frames.clone(), 4).len(), 4 * 4 + 1);
        assert_eq!(interpolate(frames, 3).len(), 4 * 3 + 1);
    }

    #[test]
    fn test_timestamp_truncates() {
        let frames = vec![Frame::new(0, vec![]), Frame::new(10, vec![])];
        let stamps: Vec<i64> = interpolate(frames, 3).iter().map(|f| f.timestamp).collect();
        // 10/3 = 3.33, 20/3 = 6.67
        assert_eq!(stamps, vec![0, 3, 6, 10]);
    }

    #[test]
    fn test_match_by_name_and_drop_unmatched() {
        let frames = vec![
            Frame::new(
                0,
                vec![
                    Region::new("a", 0.0),
                    Region::new("gone", 0.5),
                    Region::new("b", 1.0),
                ],
            ),
            Frame::new(100, vec![Region::new("b", 0.0), Region::new("a", 0.8)]),
        ];

        let out = interpolate(frames, 4);
        let quarter = &out[1];
        assert_eq!(quarter.timestamp, 25);
        let names: Vec<&str> = quarter.regions.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert!((quarter.regions[0].intensity - 0.2).abs() < 1e-9);
        assert!((quarter.regions[1].intensity - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_top_level_drops_subregions() {
        let tree = |v: f64| {
            Frame::new(
                0,
                vec![Region::with_children("cortex", v, vec![Region::new("v1", v)])],
            )
        };
        let out = interpolate(vec![tree(0.0), tree(1.0)], 2);
        assert!(out[1].regions[0].children.is_empty());
        // Originals keep their trees
        assert_eq!(out[0].regions[0].children.len(), 1);
        assert_eq!(out[2].regions[0].children.len(), 1);
    }

    #[test]
    fn test_recursive_blends_subregions() {
        let from = Frame::new(
            0,
            vec![Region::with_children(
                "cortex",
                0.0,
                vec![Region::new("v1", 0.2), Region::new("only_here", 0.9)],
            )],
        );
        let to = Frame::new(
            200,
            vec![Region::with_children("cortex", 1.0, vec![Region::new("v1", 0.6)])],
        );

        let out = interpolate_with(vec![from, to], 2, InterpolationMode::Recursive);
        let mid = &out[1].regions[0];
        assert_eq!(out[1].timestamp, 100);
        assert_eq!(mid.children.len(), 1);
        assert_eq!(mid.children[0].name, "v1");
        assert!((mid.children[0].intensity - 0.4).abs() < 1e-9);
    }
}
