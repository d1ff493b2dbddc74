//! Font loading and lookup errors.

use std::fmt;

/// Errors that can occur when loading or resolving fonts.
#[derive(Debug)]
pub enum FontError {
    /// The font data could not be parsed.
    Parse(String),
    /// No font matched the requested family/style.
    NotFound(String),
    /// No font directory yielded any usable fonts.
    EmptyCatalog,
}

impl fmt::Display for FontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "font parse error: {msg}"),
            Self::NotFound(name) => write!(f, "font not found: {name}"),
            Self::EmptyCatalog => write!(f, "no fonts found in the search directories"),
        }
    }
}

impl std::error::Error for FontError {}
