//! # quanta-cerebra
//!
//! Brain activity snapshot visualizer.
//!
//! This crate turns a time series of region-activity snapshots into
//! terminal bar charts:
//! - Parsing the JSON-like snapshot text into [`Frame`]s of nested
//!   [`Region`]s, without a JSON library and without ever failing
//! - Interpolating in-between frames by matching regions by name
//! - Rendering each frame as indented intensity bars, optionally colored
//! - Pacing playback of the rendered frames
//!
//! ## Features
//!
//! - `serde` - Enable serialization/deserialization for data structures
//! - `toml` - Read `.toml` configuration files
//! - `cli` (default) - The `quanta-cerebra` command line player
//!
//! ## Example
//!
//! ```rust
//! use quanta_cerebra::{interpolate, parse_frames, render, RenderOptions};
//!
//! let source = r#"[
//!     { "timestamp_ms": 0,   "brain_activity": [ { "region": "amygdala", "intensity": 0.2 } ] },
//!     { "timestamp_ms": 100, "brain_activity": [ { "region": "amygdala", "intensity": 0.6 } ] }
//! ]"#;
//!
//! let frames = interpolate(parse_frames(source), 2);
//! let text = render(&frames, &RenderOptions::default());
//!
//! assert_eq!(text.len(), 3);
//! assert_eq!(text[1], "[Time: 50 ms]\n[amygdala] ::::\n");
//! ```

mod animation;
pub mod color;
mod config;
mod data;
mod interpolate;
mod parser;
pub mod render;
pub mod scan;

pub use animation::{LoopMode, PlaybackController, PlaybackState};
pub use config::{AppConfig, ConfigError};
pub use data::{Frame, Region};
pub use interpolate::{blend_frames, interpolate, interpolate_with, InterpolationMode};
pub use parser::{parse_frame, parse_frames, parse_region, parse_regions};
pub use render::{render, render_frame, LayoutMode, RenderOptions};
pub use scan::find_match;
