//! Map-backed font catalog.

use std::collections::HashMap;
use std::sync::Arc;

use crate::data::FontData;
use crate::error::FontError;
use crate::provider::FontProvider;

/// Font provider filled from loaded font files.
///
/// Name lookup is case-insensitive: keys are normalized to lowercase.
/// Loading the same name twice replaces the earlier entry.
#[derive(Debug, Default)]
pub struct FontCatalog {
    fonts: HashMap<String, FontData>,
}

impl FontCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a font from bytes, registered under the given name.
    ///
    /// # Errors
    ///
    /// Returns [`FontError::Parse`] if the bytes are not a valid font.
    pub fn load_font(&mut self, name: &str, bytes: Vec<u8>) -> Result<(), FontError> {
        let font = FontData::from_bytes(Arc::from(bytes.into_boxed_slice()))?;
        self.fonts.insert(name.to_lowercase(), font);
        Ok(())
    }

    /// Number of fonts registered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    /// Whether the catalog holds no fonts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }
}

impl FontProvider for FontCatalog {
    fn font(&self, name: &str) -> Option<&FontData> {
        self.fonts.get(&name.to_lowercase())
    }
}
