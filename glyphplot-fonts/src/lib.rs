//! Font loading, metrics, and flattened glyph outlines for `glyphplot`.
//!
//! This crate wraps `ttf-parser` to provide OpenType font support. It is
//! deliberately independent of `glyphplot-curves`: outline points are
//! plain `f64` pairs and tags are raw bytes, so bridging to the curve
//! types happens in the consuming crates (`glyphplot-cli`,
//! `glyphplot-wasm`).

pub mod catalog;
pub mod data;
pub mod error;
pub mod outline;
pub mod provider;
pub mod style;

pub use catalog::FontCatalog;
pub use data::FontData;
pub use error::FontError;
pub use outline::FlattenedOutline;
pub use provider::FontProvider;
pub use style::FontStyle;
