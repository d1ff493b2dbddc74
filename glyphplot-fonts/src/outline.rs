//! Flattened glyph outlines.
//!
//! A glyph is handed downstream as an ordered point list with a parallel
//! tag list, the representation the segmenter consumes: tag `0` starts a
//! sub-loop, `1` is a straight step, `3` marks each point of a cubic run.
//! Coordinates are pre-scaled to the requested em size and expressed in
//! the provider frame, where Y grows downward from the top of the ascent
//! line, so the segmenter's `ascent - y` flip lands the output baseline-up.
//! Sub-loops are closed by the consumer, not here: a trailing straight
//! step that merely revisits the sub-loop start is dropped.

/// Sub-loop start tag.
pub const TAG_START: u8 = 0;
/// Straight-segment tag.
pub const TAG_LINE: u8 = 1;
/// Cubic-run tag.
pub const TAG_CUBIC: u8 = 3;

/// An ordered point list plus parallel role tags for one glyph.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlattenedOutline {
    /// Outline points, in traversal order, provider frame.
    pub points: Vec<(f64, f64)>,
    /// One role tag per point.
    pub tags: Vec<u8>,
}

impl FlattenedOutline {
    /// Whether the glyph has any ink.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Adapter collecting `ttf_parser` outline commands into a
/// [`FlattenedOutline`].
///
/// Quadratic curves (TrueType outlines) are elevated to cubics so the
/// downstream stream only ever contains straight and cubic steps.
pub(crate) struct Flattener {
    out: FlattenedOutline,
    /// Design-units-to-em-size scale.
    scale: f64,
    /// Cell ascent at the requested size; the frame conversion constant.
    ascent: f64,
    /// Start of the current sub-loop, provider frame.
    contour_start: Option<(f64, f64)>,
}

impl Flattener {
    pub(crate) const fn new(scale: f64, ascent: f64) -> Self {
        Self {
            out: FlattenedOutline {
                points: Vec::new(),
                tags: Vec::new(),
            },
            scale,
            ascent,
            contour_start: None,
        }
    }

    pub(crate) fn finish(self) -> FlattenedOutline {
        self.out
    }

    /// Scale from design units and convert to the provider frame.
    fn map(&self, x: f32, y: f32) -> (f64, f64) {
        (
            f64::from(x) * self.scale,
            self.ascent - f64::from(y) * self.scale,
        )
    }

    fn push(&mut self, p: (f64, f64), tag: u8) {
        self.out.points.push(p);
        self.out.tags.push(tag);
    }

    fn last_point(&self) -> (f64, f64) {
        self.out.points.last().copied().unwrap_or((0.0, 0.0))
    }
}

impl ttf_parser::OutlineBuilder for Flattener {
    fn move_to(&mut self, x: f32, y: f32) {
        let p = self.map(x, y);
        self.contour_start = Some(p);
        self.push(p, TAG_START);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let p = self.map(x, y);
        self.push(p, TAG_LINE);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        // Degree elevation: the cubic with control points 1/3 and 2/3 of
        // the way to the quadratic's control point traces the same curve.
        let q = self.map(x1, y1);
        let p = self.map(x, y);
        let from = self.last_point();
        let c1 = (
            from.0 + 2.0 / 3.0 * (q.0 - from.0),
            from.1 + 2.0 / 3.0 * (q.1 - from.1),
        );
        let c2 = (
            p.0 + 2.0 / 3.0 * (q.0 - p.0),
            p.1 + 2.0 / 3.0 * (q.1 - p.1),
        );
        self.push(c1, TAG_CUBIC);
        self.push(c2, TAG_CUBIC);
        self.push(p, TAG_CUBIC);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let c1 = self.map(x1, y1);
        let c2 = self.map(x2, y2);
        let p = self.map(x, y);
        self.push(c1, TAG_CUBIC);
        self.push(c2, TAG_CUBIC);
        self.push(p, TAG_CUBIC);
    }

    fn close(&mut self) {
        // Some backends emit an explicit closing line back to the sub-loop
        // start; the segmenter adds that stroke itself, so the duplicate
        // point would produce a zero-length edge. Drop it.
        let Some(start) = self.contour_start else {
            return;
        };
        if self.out.tags.last() == Some(&TAG_LINE) && self.last_point() == start {
            self.out.points.pop();
            self.out.tags.pop();
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
