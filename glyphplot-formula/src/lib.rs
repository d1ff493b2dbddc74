//! Piecewise-formula serializer.
//!
//! Turns a glyph's segment list into three LaTeX-style definitions: the
//! piecewise coordinate functions `S_{<name>cx}` / `S_{<name>cy}` and the
//! translate-and-scale wrapper `L_{<name>}`. Case conditions are the
//! literal `[t_start, t_end)` bounds produced by the segmenter, rendered
//! as open inequalities in emission order; every number goes through
//! [`format_literal`] so the output never carries exponent notation.
//!
//! One notational quirk is deliberate: line cases parenthesize the
//! `\frac` numerator, cubic cases do not. Downstream consumers diff
//! against existing output, so both forms are kept as-is.

pub mod charset;
pub mod literal;

pub use literal::format_literal;

use glyphplot_curves::types::Point;
use glyphplot_curves::{Scalar, Segment, SegmentKind};

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Helper definitions the piecewise output refers to: linear interpolation
/// `\phi` and cubic Bezier interpolation `B_c`. Emitting these once at the
/// top of a batch makes the output file self-contained.
pub const PRELUDE: [&str; 2] = [
    r"\phi\left(a_{1},b_{1},t_{1}\right)=t_{1}a_{1}+\left(1-t_{1}\right)b_{1}",
    r"B_{c}\left(p_{0},p_{1},p_{2},p_{3},t_{1}\right)=\left(1-t_{1}\right)^{3}p_{0}+3\left(1-t_{1}\right)^{2}t_{1}p_{1}+3\left(1-t_{1}\right)t_{1}^{2}p_{2}+t_{1}^{3}p_{3}",
];

/// The three definition lines for one glyph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphFormulas {
    /// Piecewise x-coordinate function `S_{<name>cx}`.
    pub x: String,
    /// Piecewise y-coordinate function `S_{<name>cy}`.
    pub y: String,
    /// Translate-and-scale wrapper `L_{<name>}`.
    pub wrapper: String,
}

impl GlyphFormulas {
    /// The lines in output order.
    #[must_use]
    pub fn lines(&self) -> [&str; 3] {
        [&self.x, &self.y, &self.wrapper]
    }
}

/// Serialize one glyph's segment list under the given display name.
///
/// An empty segment list (a glyph with no ink) produces empty piecewise
/// bodies; the wrapper is emitted regardless.
#[must_use]
pub fn render_glyph(name: &str, segments: &[Segment]) -> GlyphFormulas {
    GlyphFormulas {
        x: piecewise(name, segments, Axis::X),
        y: piecewise(name, segments, Axis::Y),
        wrapper: wrapper(name),
    }
}

// ---------------------------------------------------------------------------
// Per-axis rendering
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
enum Axis {
    X,
    Y,
}

impl Axis {
    const fn of(self, p: Point) -> Scalar {
        match self {
            Self::X => p.x,
            Self::Y => p.y,
        }
    }

    const fn suffix(self) -> char {
        match self {
            Self::X => 'x',
            Self::Y => 'y',
        }
    }
}

fn piecewise(name: &str, segments: &[Segment], axis: Axis) -> String {
    let cases = segments
        .iter()
        .map(|segment| case(segment, axis))
        .collect::<Vec<_>>()
        .join(",");
    format!(
        "S_{{{name}c{}}}\\left(t_1\\right)=\\left\\{{{cases}\\right\\}}",
        axis.suffix()
    )
}

fn case(segment: &Segment, axis: Axis) -> String {
    let a = format_literal(segment.t_start);
    let b = format_literal(segment.t_end);
    let width = format_literal(segment.t_end - segment.t_start);

    match segment.kind {
        SegmentKind::Line(line) => {
            let p0 = format_literal(axis.of(line.p0));
            let p1 = format_literal(axis.of(line.p1));
            format!(
                "{a}<t_1<{b}:\\phi\\left({p0},{p1},\\frac{{\\left(t_1-{a}\\right)}}{{{width}}}\\right)"
            )
        }
        SegmentKind::Cubic(cubic) => {
            let p0 = format_literal(axis.of(cubic.p0));
            let p1 = format_literal(axis.of(cubic.p1));
            let p2 = format_literal(axis.of(cubic.p2));
            let p3 = format_literal(axis.of(cubic.p3));
            format!(
                "{a}<t_1<{b}:B_{{c}}\\left({p0},{p1},{p2},{p3},\\frac{{t_1-{a}}}{{{width}}}\\right)"
            )
        }
    }
}

fn wrapper(name: &str) -> String {
    format!(
        "L_{{{name}}}\\left(x_1,y_1,s_1,t_1\\right)=\\left(s_1S_{{{name}cx}}\\left(t_1\\right)+x_1,s_1S_{{{name}cy}}\\left(t_1\\right)+y_1\\right)"
    )
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

    fn line_segment(t_start: Scalar, t_end: Scalar, p0: (f64, f64), p1: (f64, f64)) -> Segment {
        Segment {
            t_start,
            t_end,
            kind: SegmentKind::Line(Line::new(p0, p1)),
        }
    }

    #[test]
    fn empty_glyph_renders_empty_bodies() {
        let formulas = render_glyph("Space", &[]);
        assert_eq!(formulas.x, r"S_{Spacecx}\left(t_1\right)=\left\{\right\}");
        assert_eq!(formulas.y, r"S_{Spacecy}\left(t_1\right)=\left\{\right\}");
    }

    #[test]
    fn line_case_exact_form() {
        let seg = line_segment(0.0, 0.25, (4.0, 1.0), (0.0, 2.0));
        let formulas = render_glyph("A", &[seg]);
        assert_eq!(
            formulas.x,
            r"S_{Acx}\left(t_1\right)=\left\{0<t_1<0.25:\phi\left(4,0,\frac{\left(t_1-0\right)}{0.25}\right)\right\}"
        );
        assert_eq!(
            formulas.y,
            r"S_{Acy}\left(t_1\right)=\left\{0<t_1<0.25:\phi\left(1,2,\frac{\left(t_1-0\right)}{0.25}\right)\right\}"
        );
    }

    #[test]
    fn cubic_case_exact_form() {
        let seg = Segment {
            t_start: 0.25,
            t_end: 0.5,
            kind: SegmentKind::Cubic(CubicBez::new(
                (0.0, 0.0),
                (1.0, 2.0),
                (3.0, 2.0),
                (4.0, 0.0),
            )),
        };
        let formulas = render_glyph("b", &[seg]);
        assert_eq!(
            formulas.x,
            r"S_{bcx}\left(t_1\right)=\left\{0.25<t_1<0.5:B_{c}\left(0,1,3,4,\frac{t_1-0.25}{0.25}\right)\right\}"
        );
        // Cubic numerators are bare; line numerators are parenthesized.
        assert!(!formulas.x.contains(r"\frac{\left("));
    }

    #[test]
    fn wrapper_exact_form() {
        let formulas = render_glyph("Excl", &[]);
        assert_eq!(
            formulas.wrapper,
            r"L_{Excl}\left(x_1,y_1,s_1,t_1\right)=\left(s_1S_{Exclcx}\left(t_1\right)+x_1,s_1S_{Exclcy}\left(t_1\right)+y_1\right)"
        );
    }

    #[test]
    fn rectangle_glyph_end_to_end() {
        // The '1' rectangle from the segmenter's contract: four line cases
        // over 0.2-wide slices, M = 5.
        let points = [
            glyphplot_curves::types::Point::new(0.0, 0.0),
            glyphplot_curves::types::Point::new(4.0, 0.0),
            glyphplot_curves::types::Point::new(4.0, 2.0),
            glyphplot_curves::types::Point::new(0.0, 2.0),
        ];
        let tags = [0u8, 1, 1, 1];
        let segments = segment_outline(&points, &tags, 2.0).expect("rectangle");
        let formulas = render_glyph("1", &segments);

        assert_eq!(formulas.x.matches(r"\phi").count(), 4);
        assert_eq!(formulas.y.matches(r"\phi").count(), 4);
        assert!(formulas.x.starts_with(
            r"S_{1cx}\left(t_1\right)=\left\{0<t_1<0.2:\phi\left(4,0,"
        ));
        assert!(formulas.x.contains("0.2<t_1<0.4:"));
        assert!(formulas.x.contains("0.4<t_1<0.6:"));
        assert!(formulas.x.contains("0.6<t_1<0.8:"));
        assert!(formulas.x.ends_with(r"\right)\right\}"));
        // First edge after the y-flip runs (0,2) -> (4,2).
        assert!(formulas.y.contains(r"0<t_1<0.2:\phi\left(2,2,"));
    }

    #[test]
    fn rendering_is_idempotent() {
        let seg = line_segment(0.2, 0.4, (1.0, 2.0), (3.0, 4.0));
        assert_eq!(render_glyph("q", &[seg]), render_glyph("q", &[seg]));
    }

    #[test]
    fn prelude_defines_both_helpers() {
        assert!(PRELUDE[0].starts_with(r"\phi\left(a_{1},b_{1},t_{1}\right)="));
        assert!(PRELUDE[1].starts_with(r"B_{c}\left(p_{0},p_{1},p_{2},p_{3},t_{1}\right)="));
    }
}
