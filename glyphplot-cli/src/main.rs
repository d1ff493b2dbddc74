//! `glyphplot` CLI: convert font glyphs into piecewise parametric formulas.

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use glyphplot_curves::types::Point;
use glyphplot_curves::{segment_outline, Segment};
use glyphplot_fonts::{FontCatalog, FontData, FontError, FontProvider, FontStyle};
use glyphplot_formula::charset::character_table;
use glyphplot_formula::{render_glyph, PRELUDE};
use glyphplot_svg::PreviewOptions;

/// Directories scanned when no `--font-dir` is given.
#[cfg(target_os = "linux")]
const DEFAULT_FONT_DIRS: &[&str] = &["/usr/share/fonts", "/usr/local/share/fonts"];
#[cfg(target_os = "macos")]
const DEFAULT_FONT_DIRS: &[&str] = &["/System/Library/Fonts", "/Library/Fonts"];
#[cfg(target_os = "windows")]
const DEFAULT_FONT_DIRS: &[&str] = &["C:\\Windows\\Fonts"];
#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
const DEFAULT_FONT_DIRS: &[&str] = &[];

/// Recursion limit for font directory scanning (symlinked font trees can
/// cycle).
const MAX_SCAN_DEPTH: usize = 8;

#[derive(Parser)]
#[command(
    version,
    about = "glyphplot \u{2014} font glyphs as piecewise parametric formulas"
)]
struct Cli {
    /// Font family to convert (matched against font file names)
    family: String,

    /// Font style
    #[arg(long, default_value = "regular", value_parser = FontStyle::parse)]
    style: FontStyle,

    /// Em size the outlines are scaled to
    #[arg(long, default_value_t = 1.0)]
    size: f64,

    /// Directories to search for font files (.otf, .ttf)
    #[arg(long = "font-dir", value_name = "DIR")]
    font_dirs: Vec<PathBuf>,

    /// Output file for the formula text
    #[arg(short, long, default_value = "out.txt")]
    output: PathBuf,

    /// Directory to write per-glyph SVG previews into
    #[arg(long, value_name = "DIR")]
    preview_dir: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let catalog = build_catalog(&cli.font_dirs);
    let font = match lookup_font(&catalog, &cli.family, cli.style) {
        Ok(font) => font,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    if let Some(ref dir) = cli.preview_dir {
        if let Err(e) = fs::create_dir_all(dir) {
            eprintln!("Warning: cannot create preview directory {}: {e}", dir.display());
        }
    }

    let text = match convert_all(font, cli.size, cli.preview_dir.as_deref()) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    match fs::write(&cli.output, text) {
        Ok(()) => {
            eprintln!("Wrote {}", cli.output.display());
        }
        Err(e) => {
            eprintln!("Error writing {}: {e}", cli.output.display());
            process::exit(1);
        }
    }
}

/// Build a [`FontCatalog`] from the given directories, falling back to the
/// platform defaults when none are specified.
fn build_catalog(font_dirs: &[PathBuf]) -> FontCatalog {
    let mut catalog = FontCatalog::new();

    let default_dirs: Vec<PathBuf> = DEFAULT_FONT_DIRS.iter().map(PathBuf::from).collect();
    let dirs = if font_dirs.is_empty() {
        &default_dirs
    } else {
        font_dirs
    };

    for dir in dirs {
        scan_font_dir(&mut catalog, dir, 0);
    }
    catalog
}

/// Recursively scan one directory for `.otf`/`.ttf` files.
///
/// Unreadable entries and unparsable fonts are warnings, not errors; the
/// scan keeps going.
fn scan_font_dir(catalog: &mut FontCatalog, dir: &Path, depth: usize) {
    if depth > MAX_SCAN_DEPTH {
        return;
    }
    let entries = match fs::read_dir(dir) {
        Ok(e) => e,
        Err(e) => {
            eprintln!("Warning: cannot read font directory {}: {e}", dir.display());
            return;
        }
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            scan_font_dir(catalog, &path, depth + 1);
            continue;
        }
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        if ext != "otf" && ext != "ttf" {
            continue;
        }
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_owned();
        if name.is_empty() {
            continue;
        }
        match fs::read(&path) {
            Ok(bytes) => {
                if let Err(e) = catalog.load_font(&name, bytes) {
                    eprintln!("Warning: failed to load font {}: {e}", path.display());
                }
            }
            Err(e) => {
                eprintln!("Warning: cannot read font file {}: {e}", path.display());
            }
        }
    }
}

fn lookup_font<'a>(
    catalog: &'a FontCatalog,
    family: &str,
    style: FontStyle,
) -> Result<&'a FontData, FontError> {
    if catalog.is_empty() {
        return Err(FontError::EmptyCatalog);
    }
    catalog
        .resolve(family, style)
        .ok_or_else(|| FontError::NotFound(format!("{family} ({style})")))
}

/// Convert every character in the table; returns the full output text.
///
/// A malformed outline aborts the batch: the outline provider broke its
/// contract and every remaining glyph of the same font would be suspect.
fn convert_all(
    font: &FontData,
    size: f64,
    preview_dir: Option<&Path>,
) -> Result<String, Box<dyn std::error::Error>> {
    let ascent = font.cell_ascent(size);
    let mut text = String::new();
    for line in PRELUDE {
        text.push_str(line);
        text.push('\n');
    }

    for (ch, name) in character_table() {
        let segments = convert_glyph(font, ch, size, ascent)
            .map_err(|e| format!("glyph '{ch}': {e}"))?;
        let formulas = render_glyph(&name, &segments);
        for line in formulas.lines() {
            text.push_str(line);
            text.push('\n');
        }

        if let Some(dir) = preview_dir {
            write_preview(dir, &name, &segments);
        }
    }

    Ok(text)
}

/// Flatten and segment one glyph.
///
/// A character with no glyph or no outline yields an empty segment list
/// (empty piecewise bodies downstream), per the provider contract.
fn convert_glyph(
    font: &FontData,
    ch: char,
    size: f64,
    ascent: f64,
) -> Result<Vec<Segment>, glyphplot_curves::OutlineError> {
    let Some(gid) = font.glyph_id(ch) else {
        eprintln!("Warning: no glyph for '{ch}', emitting empty formulas");
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
    segment_outline(&points, &outline.tags, ascent)
}

fn write_preview(dir: &Path, name: &str, segments: &[Segment]) {
    let svg_str = glyphplot_svg::render_to_string(segments, &PreviewOptions::default());
    let path = dir.join(format!("{name}.svg"));
    match fs::write(&path, svg_str) {
        Ok(()) => {
            eprintln!("Wrote {}", path.display());
        }
        Err(e) => {
            eprintln!("Error writing {}: {e}", path.display());
        }
    }
}
