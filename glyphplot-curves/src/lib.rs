//! Outline data model and segmenter for `glyphplot`.
//!
//! A glyph outline arrives as an ordered point list with per-point role
//! tags (the flattened representation produced by `glyphplot-fonts`).
//! This crate reconstructs typed curve segments from that stream and
//! assigns each segment its slice of the normalized `t` domain. It is
//! independent of any font backend; all inputs are plain points and tags.

pub mod error;
pub mod segmenter;
pub mod types;

pub use error::OutlineError;
pub use segmenter::segment_outline;
pub use types::{PointTag, Scalar, Segment, SegmentKind};
