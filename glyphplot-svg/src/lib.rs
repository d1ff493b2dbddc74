//! SVG previews of segmented glyph outlines.
//!
//! Renders a segment list into an SVG [`Document`] so a conversion can be
//! eyeballed before the formulas go anywhere. Key points:
//! - Segments are baseline-up; SVG has Y pointing down. All Y coordinates
//!   are negated at render time so no global transform is needed.
//! - Path data is built as a raw `d` string to preserve `f64` precision.
//! - Line segments run `p1 -> p0` (the interpolation-argument order the
//!   serializer uses), cubics run `p0 -> p3`; the `d` string follows the
//!   drawing direction, starting a new sub-path wherever the outline is
//!   discontinuous.

use svg::Document;

use glyphplot_curves::types::Point;
use glyphplot_curves::{Scalar, Segment, SegmentKind};

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Options controlling preview output.
#[derive(Debug, Clone)]
pub struct PreviewOptions {
    /// Extra margin around the bounding box. Default: 0.05 (em units).
    pub margin: Scalar,
    /// Number of decimal places for coordinates. Default: 4.
    pub precision: usize,
    /// Stroke width for the outline. Default: 0.005.
    pub stroke_width: Scalar,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            margin: 0.05,
            precision: 4,
            stroke_width: 0.005,
        }
    }
}

/// Render a segment list to an SVG [`Document`].
#[must_use]
pub fn render(segments: &[Segment], opts: &PreviewOptions) -> Document {
    let d = path_to_d(segments, opts.precision);
    let bb = segments_bbox(segments);

    let mut doc = document_with_viewbox(&bb, opts);
    if !d.is_empty() {
        let path = svg::node::element::Path::new()
            .set("d", d)
            .set("fill", "none")
            .set("stroke", "black")
            .set("stroke-width", fmt_scalar(opts.stroke_width, opts.precision));
        doc = doc.add(path);
    }
    doc
}

/// Render a segment list to an SVG string.
#[must_use]
pub fn render_to_string(segments: &[Segment], opts: &PreviewOptions) -> String {
    render(segments, opts).to_string()
}

// ---------------------------------------------------------------------------
// Path -> SVG "d" attribute
// ---------------------------------------------------------------------------

/// Convert the segment list to an SVG path data string.
///
/// Y coordinates are negated to convert from baseline-up to SVG Y-down.
fn path_to_d(segments: &[Segment], precision: usize) -> String {
    let mut d = String::with_capacity(segments.len() * 40);
    let mut cursor: Option<Point> = None;

    for segment in segments {
        let start = segment.draw_start();
        if cursor != Some(start) {
            d.push('M');
            write_point(&mut d, start, precision);
        }
        match segment.kind {
            SegmentKind::Line(_) => {
                d.push('L');
                write_point(&mut d, segment.draw_end(), precision);
            }
            SegmentKind::Cubic(cubic) => {
                d.push('C');
                write_point(&mut d, cubic.p1, precision);
                d.push(' ');
                write_point(&mut d, cubic.p2, precision);
                d.push(' ');
                write_point(&mut d, cubic.p3, precision);
            }
        }
        cursor = Some(segment.draw_end());
    }

    d
}

/// Write "x,y" with the given precision, Y negated.
///
/// Normalizes negative zero to positive zero for cleaner output.
fn write_point(d: &mut String, p: Point, precision: usize) {
    use std::fmt::Write;
    let x = if p.x == 0.0 { 0.0 } else { p.x };
    let y = if p.y == 0.0 { 0.0 } else { -p.y };
    let _ = write!(d, "{x:.precision$},{y:.precision$}");
}

// ---------------------------------------------------------------------------
// Bounding box and document assembly
// ---------------------------------------------------------------------------

struct BoundingBox {
    min_x: Scalar,
    min_y: Scalar,
    max_x: Scalar,
    max_y: Scalar,
}

impl BoundingBox {
    const EMPTY: Self = Self {
        min_x: Scalar::INFINITY,
        min_y: Scalar::INFINITY,
        max_x: Scalar::NEG_INFINITY,
        max_y: Scalar::NEG_INFINITY,
    };

    fn add(&mut self, p: Point) {
        self.min_x = self.min_x.min(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_x = self.max_x.max(p.x);
        self.max_y = self.max_y.max(p.y);
    }

    fn is_valid(&self) -> bool {
        self.min_x <= self.max_x && self.min_y <= self.max_y
    }
}

/// Control-point hull bounds of the whole segment list.
fn segments_bbox(segments: &[Segment]) -> BoundingBox {
    let mut bb = BoundingBox::EMPTY;
    for segment in segments {
        match segment.kind {
            SegmentKind::Line(line) => {
                bb.add(line.p0);
                bb.add(line.p1);
            }
            SegmentKind::Cubic(cubic) => {
                bb.add(cubic.p0);
                bb.add(cubic.p1);
                bb.add(cubic.p2);
                bb.add(cubic.p3);
            }
        }
    }
    bb
}

/// Build the document shell with a viewBox derived from the bounding box.
///
/// The Y range is negated: baseline-up `max_y` becomes SVG `min_y`.
fn document_with_viewbox(bb: &BoundingBox, opts: &PreviewOptions) -> Document {
    let m = opts.margin;

    let (vb_x, vb_y, vb_w, vb_h) = if bb.is_valid() {
        (
            bb.min_x - m,
            -bb.max_y - m,
            2.0f64.mul_add(m, bb.max_x - bb.min_x),
            2.0f64.mul_add(m, bb.max_y - bb.min_y),
        )
    } else {
        (0.0, 0.0, 1.0, 1.0)
    };

    Document::new()
        .set("xmlns", "http://www.w3.org/2000/svg")
        .set(
            "viewBox",
            format!(
                "{} {} {} {}",
                fmt_scalar(vb_x, opts.precision),
                fmt_scalar(vb_y, opts.precision),
                fmt_scalar(vb_w, opts.precision),
                fmt_scalar(vb_h, opts.precision),
            ),
        )
}

/// Format a scalar to the given precision, stripping trailing zeros.
fn fmt_scalar(v: Scalar, precision: usize) -> String {
    let s = format!("{v:.precision$}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_owned()
    } else {
        s
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[expect(clippy::expect_used, reason = "tests may panic")]
mod tests {
    use super::*;
    use glyphplot_curves::segment_outline;
    use glyphplot_curves::types::{CubicBez, Line};

    fn rectangle_segments() -> Vec<Segment> {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 2.0),
            Point::new(0.0, 2.0),
        ];
        segment_outline(&points, &[0, 1, 1, 1], 2.0).expect("rectangle")
    }

    #[test]
    fn empty_outline_renders_empty_document() {
        let s = render_to_string(&[], &PreviewOptions::default());
        assert!(s.contains("<svg"), "missing svg root: {s}");
        assert!(!s.contains("<path"), "unexpected path: {s}");
    }

    #[test]
    fn rectangle_renders_one_edge_per_segment() {
        let segments = rectangle_segments();
        let d = path_to_d(&segments, 2);
        // The first three edges chain head to tail; the loop-closing
        // stroke runs backwards (loop start -> previous point), so it
        // opens a second sub-path.
        assert_eq!(d.matches('M').count(), 2, "d: {d}");
        assert_eq!(d.matches('L').count(), 4, "d: {d}");
        assert!(d.starts_with("M0.00,-2.00L4.00,-2.00"), "d: {d}");
    }

    #[test]
    fn y_is_negated() {
        let seg = Segment {
            t_start: 0.0,
            t_end: 0.5,
            kind: SegmentKind::Line(Line::new((5.0, 10.0), (0.0, 0.0))),
        };
        let d = path_to_d(&[seg], 1);
        assert!(d.contains("5.0,-10.0"), "Y should be negated: {d}");
    }

    #[test]
    fn cubic_renders_c_command() {
        let seg = Segment {
            t_start: 0.0,
            t_end: 0.5,
            kind: SegmentKind::Cubic(CubicBez::new(
                (0.0, 0.0),
                (1.0, 2.0),
                (3.0, 2.0),
                (4.0, 0.0),
            )),
        };
        let d = path_to_d(&[seg], 1);
        assert!(d.starts_with("M0.0,0.0C"), "d: {d}");
        assert!(d.ends_with("4.0,0.0"), "d: {d}");
    }

    #[test]
    fn viewbox_spans_outline_with_margin() {
        let segments = rectangle_segments();
        let s = render_to_string(&segments, &PreviewOptions::default());
        assert!(s.contains("viewBox=\"-0.05 -2.05 4.1 2.1\""), "svg: {s}");
    }

    #[test]
    fn fmt_scalar_strips_trailing_zeros() {
        assert_eq!(fmt_scalar(1.0, 4), "1");
        assert_eq!(fmt_scalar(1.5, 4), "1.5");
        assert_eq!(fmt_scalar(-0.25, 4), "-0.25");
    }
}
