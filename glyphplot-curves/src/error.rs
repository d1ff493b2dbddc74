//! Outline traversal errors.

use std::fmt;

/// Errors raised while walking a flattened outline.
///
/// All of these mean the provider contract was violated; the glyph being
/// processed cannot be segmented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutlineError {
    /// A tag's role bits decode to neither start, line, nor cubic.
    UnknownPointType { index: usize, tag: u8 },
    /// A cubic tag did not begin a full run of three cubic points, or the
    /// run would read past the end of the point list.
    TruncatedCubicRun { index: usize },
    /// The first point of the outline is not tagged as a sub-loop start,
    /// so the first segment has no incoming point.
    MissingLeadingStart,
}

impl fmt::Display for OutlineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownPointType { index, tag } => {
                write!(f, "unrecognized point type {tag:#04x} at point {index}")
            }
            Self::TruncatedCubicRun { index } => {
                write!(f, "truncated cubic run at point {index}")
            }
            Self::MissingLeadingStart => {
                write!(f, "outline does not begin with a sub-loop start point")
            }
        }
    }
}

impl std::error::Error for OutlineError {}
