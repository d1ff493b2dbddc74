//! Outline traversal: point/tag stream to typed curve segments.
//!
//! The walk appends a duplicate of the first point so the final step closes
//! the last open sub-loop, then visits the stream with a variable-stride
//! cursor: line and start steps consume one point, a cubic step consumes
//! three. Every step advances a step counter whether or not it emits, and
//! an emitted segment owns the slice `[(step-1)/M, step/M)` of the `t`
//! domain, where `M` is the appended point count. Cubic segments therefore
//! own a narrower slice than their point span, and the covered domain ends
//! short of 1. That assignment is load-bearing for downstream consumers of
//! the emitted intervals; do not redistribute it by segment count.

use kurbo::{CubicBez, Line, Point};

use crate::error::OutlineError;
use crate::types::{PointTag, Scalar, Segment, SegmentKind, TAG_ROLE_MASK};

/// Outcome of one cursor step.
struct Step {
    /// Points consumed by this step (1, or 3 for a cubic run).
    consumed: usize,
    /// Segment emitted by this step, if any. Coordinates are still in the
    /// provider frame; the y-flip happens at collection time.
    segment: Option<SegmentKind>,
}

/// Walk a flattened outline and emit its segments in traversal order.
///
/// `points` and `tags` are parallel; `tags` holds raw role bytes (only the
/// low [`TAG_ROLE_MASK`] bits are read). Every emitted coordinate is
/// converted to the baseline-up frame via `y' = ascent - y`.
///
/// An empty point list yields an empty segment list (a glyph with no ink).
///
/// # Errors
///
/// Returns [`OutlineError`] when the tag stream violates the provider
/// contract; see the variants for the specific malformations.
#[expect(
    clippy::cast_precision_loss,
    reason = "point counts are far below 2^52"
)]
pub fn segment_outline(
    points: &[Point],
    tags: &[u8],
    ascent: Scalar,
) -> Result<Vec<Segment>, OutlineError> {
    if points.is_empty() {
        return Ok(Vec::new());
    }

    // Close the walk through a duplicate of the first point; its tag is
    // read modulo the original tag count, so the duplicate re-reads the
    // leading start tag and triggers the final sub-loop close.
    let mut walk = Vec::with_capacity(points.len() + 1);
    walk.extend_from_slice(points);
    walk.push(points[0]);

    let total = walk.len() as Scalar;
    let mut segments = Vec::new();
    let mut loop_start: Option<Point> = None;

    let mut i = 0;
    let mut step_index: usize = 0;
    while i < walk.len() {
        let outcome = step(&walk, tags, i, &mut loop_start)?;
        if let Some(kind) = outcome.segment {
            let t_start = (step_index as Scalar - 1.0) / total;
            let t_end = step_index as Scalar / total;
            segments.push(Segment {
                t_start,
                t_end,
                kind: flip_kind(kind, ascent),
            });
        }
        i += outcome.consumed;
        step_index += 1;
    }

    Ok(segments)
}

/// Execute the traversal step at index `i`.
///
/// Returning points-consumed per step keeps the point-count vs.
/// segment-count asymmetry explicit instead of burying it in cursor
/// arithmetic.
fn step(
    walk: &[Point],
    tags: &[u8],
    i: usize,
    loop_start: &mut Option<Point>,
) -> Result<Step, OutlineError> {
    let raw = tags[i % tags.len()];
    let Some(tag) = PointTag::from_raw(raw) else {
        return Err(OutlineError::UnknownPointType { index: i, tag: raw });
    };

    match tag {
        PointTag::Start => {
            // Close the open sub-loop back to its own start. The previous
            // point is the first phi argument, so the closing stroke runs
            // loop start -> previous point as t advances.
            let segment = loop_start.map(|start| {
                SegmentKind::Line(Line::new(walk[i - 1], start))
            });
            *loop_start = Some(walk[i]);
            Ok(Step {
                consumed: 1,
                segment,
            })
        }
        PointTag::Line => {
            if i == 0 {
                return Err(OutlineError::MissingLeadingStart);
            }
            Ok(Step {
                consumed: 1,
                segment: Some(SegmentKind::Line(Line::new(walk[i], walk[i - 1]))),
            })
        }
        PointTag::Cubic => {
            if i == 0 {
                return Err(OutlineError::MissingLeadingStart);
            }
            // A cubic tag must open a run of three; the run may not spill
            // past the appended closing point, and the appended point
            // itself (whose tag wraps to the leading start) can never be
            // part of one.
            if i + 2 >= walk.len() || !cubic_tag_at(tags, i + 1) || !cubic_tag_at(tags, i + 2) {
                return Err(OutlineError::TruncatedCubicRun { index: i });
            }
            Ok(Step {
                consumed: 3,
                segment: Some(SegmentKind::Cubic(CubicBez::new(
                    walk[i - 1],
                    walk[i],
                    walk[i + 1],
                    walk[i + 2],
                ))),
            })
        }
    }
}

fn cubic_tag_at(tags: &[u8], i: usize) -> bool {
    tags[i % tags.len()] & TAG_ROLE_MASK == PointTag::Cubic.raw()
}

fn flip_point(p: Point, ascent: Scalar) -> Point {
    Point::new(p.x, ascent - p.y)
}

fn flip_kind(kind: SegmentKind, ascent: Scalar) -> SegmentKind {
    match kind {
        SegmentKind::Line(line) => SegmentKind::Line(Line::new(
            flip_point(line.p0, ascent),
            flip_point(line.p1, ascent),
        )),
        SegmentKind::Cubic(cubic) => SegmentKind::Cubic(CubicBez::new(
            flip_point(cubic.p0, ascent),
            flip_point(cubic.p1, ascent),
            flip_point(cubic.p2, ascent),
            flip_point(cubic.p3, ascent),
        )),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
