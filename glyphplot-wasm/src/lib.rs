use std::sync::Arc;

use wasm_bindgen::prelude::*;

use glyphplot_curves::segment_outline;
use glyphplot_curves::types::Point;
use glyphplot_fonts::FontData;
use glyphplot_formula::charset::display_name;
use glyphplot_formula::{render_glyph, PRELUDE};

#[wasm_bindgen]
pub struct ConvertOutput {
    formulas: String,
    diagnostics: String,
    has_error: bool,
}

#[wasm_bindgen]
impl ConvertOutput {
    #[wasm_bindgen(getter)]
    pub fn formulas(&self) -> String {
        self.formulas.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn diagnostics(&self) -> String {
        self.diagnostics.clone()
    }

    #[wasm_bindgen(getter, js_name = hasError)]
    pub fn has_error(&self) -> bool {
        self.has_error
    }
}

/// Convert the requested characters of a font to piecewise formulas.
///
/// `font_bytes` is a complete OpenType/TrueType file; `chars` lists the
/// characters to convert; `size` is the em size outlines are scaled to.
#[wasm_bindgen]
pub fn convert_glyphs(font_bytes: &[u8], chars: &str, size: f64) -> ConvertOutput {
    convert(font_bytes, chars, size)
}

fn convert(font_bytes: &[u8], chars: &str, size: f64) -> ConvertOutput {
    let font = match FontData::from_bytes(Arc::from(font_bytes)) {
        Ok(font) => font,
        Err(e) => {
            return ConvertOutput {
                formulas: String::new(),
                diagnostics: format!("fatal {e}"),
                has_error: true,
            };
        }
    };

    let ascent = font.cell_ascent(size);
    let mut formulas = String::new();
    let mut diagnostics = Vec::new();
    let mut has_error = false;

    for line in PRELUDE {
        formulas.push_str(line);
        formulas.push('\n');
    }

    for ch in chars.chars() {
        let Some(name) = display_name(ch) else {
            diagnostics.push(format!("warning no display name for '{ch}', skipped"));
            continue;
        };
        let segments = match flatten_and_segment(&font, ch, size, ascent) {
            Ok(segments) => segments,
            Err(message) => {
                diagnostics.push(message);
                has_error = true;
                continue;
            }
        };
        for line in render_glyph(&name, &segments).lines() {
            formulas.push_str(line);
            formulas.push('\n');
        }
    }

    ConvertOutput {
        formulas,
        diagnostics: diagnostics.join("\n"),
        has_error,
    }
}

fn flatten_and_segment(
    font: &FontData,
    ch: char,
    size: f64,
    ascent: f64,
) -> Result<Vec<glyphplot_curves::Segment>, String> {
    let Some(gid) = font.glyph_id(ch) else {
        // No glyph is not an error: the formulas are simply empty.
        return Ok(Vec::new());
    };
    let Some(outline) = font.flatten_glyph(gid, size) else {
        return Ok(Vec::new());
    };
    let points: Vec<Point> = outline
        .points
        .iter()
        .map(|&(x, y)| Point::new(x, y))
        .collect();
    segment_outline(&points, &outline.tags, ascent).map_err(|e| format!("error glyph '{ch}': {e}"))
}
