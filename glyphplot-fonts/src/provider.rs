//! Font provider trait.

use crate::data::FontData;
use crate::style::FontStyle;

/// Trait for resolving font names to loaded font data.
///
/// Implementations may look up fonts from the filesystem or any other
/// source. Names are matched lowercase; implementations should normalize
/// on insertion.
pub trait FontProvider {
    /// Look up a font by exact name. Returns `None` if not available.
    fn font(&self, name: &str) -> Option<&FontData>;

    /// Resolve a family/style pair.
    ///
    /// Tries the style-qualified names (`"family-bold"`, `"family bold"`)
    /// before falling back to the bare family, so a regular request on a
    /// family with only one file still resolves.
    fn resolve(&self, family: &str, style: FontStyle) -> Option<&FontData> {
        let suffix = style.suffix();
        self.font(&format!("{family}-{suffix}"))
            .or_else(|| self.font(&format!("{family} {suffix}")))
            .or_else(|| self.font(family))
    }
}
