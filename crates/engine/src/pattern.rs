use crate::error::{EngineError, Result};
use regex::Regex;
use std::ffi::OsStr;

/// Compiled file name matcher.
///
/// Only the base name of an entry is tested, never the full path.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    /// Compile `source` into a matcher.
    ///
    /// # Errors
    /// Returns [`EngineError::Pattern`] if `source` is not a valid regular expression.
    pub fn compile(source: &str) -> Result<Self> {
        let regex = Regex::new(source).map_err(|e| EngineError::Pattern {
            pattern: source.to_owned(),
            source: e,
        })?;
        Ok(Self { regex })
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Unanchored search within the (lossily decoded) name.
    pub fn matches(&self, name: &OsStr) -> bool {
        self.regex.is_match(&name.to_string_lossy())
    }
}
