//! Brain activity text parsing.
//!
//! The input is JSON-shaped but is read with structural scanning rather than
//! a JSON library. Parsing never fails: a missing field falls back to its
//! default and truncated input ends the parse, keeping everything read so far.

use crate::scan::{array_body, field, objects, string_value, Fields};
use crate::{Frame, Region};

/// Frame keys for the timestamp, in the order they are recognized.
pub const TIMESTAMP_KEYS: [&str; 2] = ["timestamp_ms", "timestamp"];
/// Frame keys for the top-level region array.
pub const ACTIVITY_KEYS: [&str; 2] = ["brain_activity", "activity"];

const NAME_KEY: &str = "region";
const INTENSITY_KEY: &str = "intensity";
const CHILDREN_KEY: &str = "subregions";

/// First depth-0 field whose key is one of `keys`.
fn first_field<'a>(object: &'a str, keys: &[&str]) -> Option<&'a str> {
    Fields::new(object)
        .find(|(k, _)| keys.contains(k))
        .map(|(_, v)| v)
}

/// Leading integer of `text`, the way `"120"`, `"-5"` or `"100.5"` read.
fn leading_integer(text: &str) -> Option<i64> {
    let text = text.trim();
    let digits_start = usize::from(text.starts_with(['-', '+']));
    let digits_len = text[digits_start..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return None;
    }
    text[..digits_start + digits_len].parse().ok()
}

/// Parse one region object (outer braces included) into a [`Region`].
///
/// Only the object's own fields are consulted; fields of nested subregions
/// never leak into the parent.
///
/// ## Example
///
/// ```rust
/// use quanta_cerebra::parse_region;
///
/// let region = parse_region(r#"{ "region": "cortex", "intensity": 0.7,
///     "subregions": [ { "region": "v1", "intensity": 0.2 } ] }"#);
/// assert_eq!(region.name, "cortex");
/// assert_eq!(region.intensity, 0.7);
/// assert_eq!(region.children.len(), 1);
/// assert_eq!(region.children[0].name, "v1");
/// ```
pub fn parse_region(object: &str) -> Region {
    let name = field(object, NAME_KEY)
        .and_then(string_value)
        .unwrap_or_default()
        .to_string();

    let intensity = match field(object, INTENSITY_KEY) {
        Some(text) => text.parse::<f64>().unwrap_or_else(|_| {
            log::debug!("region '{}': bad intensity {:?}, using 0", name, text);
            0.0
        }),
        None => 0.0,
    };

    let children = field(object, CHILDREN_KEY)
        .and_then(array_body)
        .map(parse_regions)
        .unwrap_or_default();

    Region {
        name,
        intensity,
        children,
    }
}

/// Parse every region object inside an array body, in order.
pub fn parse_regions(body: &str) -> Vec<Region> {
    objects(body).map(parse_region).collect()
}

/// Parse one frame object (outer braces included) into a [`Frame`].
pub fn parse_frame(object: &str) -> Frame {
    let timestamp = match first_field(object, &TIMESTAMP_KEYS) {
        Some(text) => leading_integer(text).unwrap_or_else(|| {
            log::debug!("bad timestamp {:?}, using 0", text);
            0
        }),
        None => 0,
    };

    let regions = first_field(object, &ACTIVITY_KEYS)
        .and_then(array_body)
        .map(parse_regions)
        .unwrap_or_default();

    Frame { timestamp, regions }
}

/// Parse a brain activity document into its frames, in source order.
///
/// Each top-level `{...}` is one frame. Parsing stops quietly at the first
/// frame whose brace is never closed.
///
/// ## Example
///
/// ```rust
/// use quanta_cerebra::parse_frames;
///
/// let frames = parse_frames(r#"[
///     { "timestamp_ms": 0,   "brain_activity": [ { "region": "amygdala", "intensity": 0.6 } ] },
///     { "timestamp_ms": 250, "brain_activity": [ { "region": "amygdala", "intensity": 0.8 } ] }
/// ]"#);
/// assert_eq!(frames.len(), 2);
/// assert_eq!(frames[1].timestamp, 250);
/// assert_eq!(frames[1].regions[0].intensity, 0.8);
/// ```
pub fn parse_frames(source: &str) -> Vec<Frame> {
    let frames: Vec<Frame> = objects(source).map(parse_frame).collect();
    log::debug!("parsed {} frames", frames.len());
    frames
}
