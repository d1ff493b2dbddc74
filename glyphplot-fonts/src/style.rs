//! Font style selector.

use std::fmt;

/// The four style axes a family is looked up under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontStyle {
    #[default]
    Regular,
    Bold,
    Italic,
    BoldItalic,
}

impl FontStyle {
    /// The file-name suffix conventionally used for this style.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::BoldItalic => "bolditalic",
        }
    }

    /// Parse a user-facing style name.
    ///
    /// # Errors
    ///
    /// Returns a message naming the accepted values.
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "regular" => Ok(Self::Regular),
            "bold" => Ok(Self::Bold),
            "italic" => Ok(Self::Italic),
            "bold-italic" | "bolditalic" => Ok(Self::BoldItalic),
            _ => Err(format!(
                "unknown style \"{s}\": expected \"regular\", \"bold\", \"italic\" or \"bold-italic\""
            )),
        }
    }
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}
