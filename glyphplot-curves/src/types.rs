//! Core types shared across the `glyphplot` pipeline.

pub use kurbo::{CubicBez, Line, Point};

/// Convenience alias. All coordinates are `f64`, matching `kurbo`.
pub type Scalar = f64;

/// Tolerance for floating-point comparisons.
pub const EPSILON: Scalar = 1e-9;

/// Mask selecting the role bits of a raw point tag. The high bits carry
/// rasterizer flags (close-subpath markers and the like) and are ignored.
pub const TAG_ROLE_MASK: u8 = 0x7;

// ---------------------------------------------------------------------------
// PointTag
// ---------------------------------------------------------------------------

/// Role of one point in a flattened outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointTag {
    /// First point of a sub-loop. Closes the previously open sub-loop,
    /// if any, back to that sub-loop's own start.
    Start,
    /// On-curve point reached by a straight segment from the prior point.
    Line,
    /// One of a run of exactly three consecutive points forming a cubic
    /// Bezier together with the point preceding the run.
    Cubic,
}

impl PointTag {
    /// Decode a raw tag byte, masking to the role bits.
    ///
    /// Returns `None` for role values with no meaning in this pipeline
    /// (notably `2`, a quadratic marker some rasterizers use; providers
    /// are expected to elevate quadratics before handing outlines over).
    #[must_use]
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw & TAG_ROLE_MASK {
            0 => Some(Self::Start),
            1 => Some(Self::Line),
            3 => Some(Self::Cubic),
            _ => None,
        }
    }

    /// The raw role value for this tag.
    #[must_use]
    pub const fn raw(self) -> u8 {
        match self {
            Self::Start => 0,
            Self::Line => 1,
            Self::Cubic => 3,
        }
    }
}

// ---------------------------------------------------------------------------
// Segment
// ---------------------------------------------------------------------------

/// One piece of a piecewise glyph curve.
///
/// Owns the half-open slice `[t_start, t_end)` of the normalized parameter
/// domain. Slices are assigned in traversal order by the segmenter and are
/// consecutive and non-overlapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub t_start: Scalar,
    pub t_end: Scalar,
    pub kind: SegmentKind,
}

/// The two segment shapes a flattened outline can contain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentKind {
    /// Straight segment. The points are stored in interpolation-argument
    /// order: the rendered expression is `phi(p0, p1, u)` with
    /// `phi(p, q, u) = u*p + (1-u)*q`, so the curve runs `p1 -> p0` as
    /// `u` goes 0 to 1.
    Line(Line),
    /// Cubic Bezier; `p0`/`p3` are endpoints, `p1`/`p2` control points.
    /// Runs `p0 -> p3` as `u` goes 0 to 1.
    Cubic(CubicBez),
}

impl Segment {
    /// The point where this segment's drawing starts as `t` enters the
    /// slice (for lines that is `p1`; see [`SegmentKind::Line`]).
    #[must_use]
    pub const fn draw_start(&self) -> Point {
        match self.kind {
            SegmentKind::Line(line) => line.p1,
            SegmentKind::Cubic(cubic) => cubic.p0,
        }
    }

    /// The point where this segment's drawing ends as `t` leaves the slice.
    #[must_use]
    pub const fn draw_end(&self) -> Point {
        match self.kind {
            SegmentKind::Line(line) => line.p0,
            SegmentKind::Cubic(cubic) => cubic.p3,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
