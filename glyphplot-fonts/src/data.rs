//! Font data wrapper around `ttf-parser`.

use std::sync::Arc;

use crate::error::FontError;
use crate::outline::{FlattenedOutline, Flattener};

/// Parsed font data.
///
/// Owns the raw font bytes plus the two global metrics every glyph needs.
/// Per-glyph queries re-parse a `ttf_parser::Face` on demand; face
/// construction is only header validation over the borrowed bytes, so
/// there is no point caching it across calls.
#[derive(Clone)]
pub struct FontData {
    bytes: Arc<[u8]>,
    /// Font units per em (design coordinate space).
    units_per_em: u16,
    /// Global ascender in design units (positive).
    ascender: i16,
}

impl FontData {
    /// Parse font data from an owned byte buffer.
    ///
    /// # Errors
    ///
    /// Returns [`FontError::Parse`] if the data is not a valid
    /// OpenType/TrueType font.
    pub fn from_bytes(bytes: Arc<[u8]>) -> Result<Self, FontError> {
        let face =
            ttf_parser::Face::parse(&bytes, 0).map_err(|e| FontError::Parse(e.to_string()))?;
        Ok(Self {
            units_per_em: face.units_per_em(),
            ascender: face.ascender(),
            bytes,
        })
    }

    /// Parse font data from a static byte slice.
    ///
    /// # Errors
    ///
    /// Returns [`FontError::Parse`] if the data is not a valid
    /// OpenType/TrueType font.
    pub fn from_static(bytes: &'static [u8]) -> Result<Self, FontError> {
        Self::from_bytes(Arc::from(bytes))
    }

    /// Create a temporary `Face` reference for queries.
    fn face(&self) -> ttf_parser::Face<'_> {
        #[expect(clippy::expect_used, reason = "bytes were validated at construction")]
        ttf_parser::Face::parse(&self.bytes, 0).expect("font bytes validated at construction")
    }

    /// Font units per em (design coordinate space).
    #[must_use]
    pub const fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    /// Scale factor from design units to the given em size.
    #[must_use]
    pub fn scale(&self, em_size: f64) -> f64 {
        em_size / f64::from(self.units_per_em)
    }

    /// Cell ascent at the given em size: the ascender/em-height ratio
    /// scaled to the size. This is the baseline offset the segmenter
    /// flips against.
    #[must_use]
    pub fn cell_ascent(&self, em_size: f64) -> f64 {
        f64::from(self.ascender) / f64::from(self.units_per_em) * em_size
    }

    /// Whether a character has a glyph in this font.
    #[must_use]
    pub fn has_glyph(&self, ch: char) -> bool {
        self.face().glyph_index(ch).is_some()
    }

    /// Map a character to its glyph ID. Returns `None` if not in the cmap.
    #[must_use]
    pub fn glyph_id(&self, ch: char) -> Option<u16> {
        self.face().glyph_index(ch).map(|g| g.0)
    }

    /// Flatten a glyph's outline to points and role tags, pre-scaled to
    /// the given em size and expressed in the provider frame.
    ///
    /// Returns `None` if the glyph has no outline (e.g. a space).
    #[must_use]
    pub fn flatten_glyph(&self, glyph_id: u16, em_size: f64) -> Option<FlattenedOutline> {
        let face = self.face();
        let mut flattener = Flattener::new(self.scale(em_size), self.cell_ascent(em_size));
        face.outline_glyph(ttf_parser::GlyphId(glyph_id), &mut flattener)?;
        Some(flattener.finish())
    }
}

impl std::fmt::Debug for FontData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontData")
            .field("units_per_em", &self.units_per_em)
            .field("ascender", &self.ascender)
            .field("bytes_len", &self.bytes.len())
            .finish()
    }
}

#[cfg(test)]
#[expect(clippy::expect_used, reason = "tests may panic")]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_are_rejected() {
        let err = FontData::from_static(b"not a font").expect_err("garbage must not parse");
        assert!(matches!(err, FontError::Parse(_)));
        assert!(err.to_string().contains("parse"), "got: {err}");
    }
}
