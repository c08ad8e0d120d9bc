//! Stroke-order lookup and the JSON-lines stroke table.
//!
//! The layout engine only needs a stroke *count* per character; the ordered
//! stroke identifiers (SVG path strings in the bundled data format) are
//! carried through for renderers that draw progressive stroke steps. A
//! character the lookup does not know is treated as a single stroke, so the
//! stroke-decomposition strategy degrades to placing one whole-character
//! step instead of failing.

extern crate alloc;

use alloc::boxed::Box;

/// Ordered stroke identifiers for characters.
pub trait StrokeLookup {
    /// Ordered stroke identifiers for `character`, if known.
    fn strokes(&self, character: char) -> Option<&[Box<str>]>;

    /// Stroke count used for cell placement.
    ///
    /// Unknown characters and empty entries count as one stroke: the whole
    /// character is placed as a single unit.
    fn stroke_count(&self, character: char) -> usize {
        match self.strokes(character) {
            Some(strokes) if !strokes.is_empty() => strokes.len(),
            _ => 1,
        }
    }
}

impl<T: StrokeLookup + ?Sized> StrokeLookup for &T {
    fn strokes(&self, character: char) -> Option<&[Box<str>]> {
        (**self).strokes(character)
    }
}

/// Lookup that knows no characters; every character is a single stroke.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoStrokes;

impl StrokeLookup for NoStrokes {
    fn strokes(&self, _character: char) -> Option<&[Box<str>]> {
        None
    }
}

#[cfg(feature = "std")]
pub use data::{StrokeData, StrokeDataError, StrokeDataLimits};

#[cfg(feature = "std")]
mod data {
    use std::collections::BTreeMap;
    use std::fmt;
    use std::io::{self, BufRead};
    use std::path::Path;

    use serde::Deserialize;

    use super::StrokeLookup;

    /// Limits for stroke-table ingestion.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct StrokeDataLimits {
        /// Maximum number of distinct characters accepted.
        pub max_entries: usize,
        /// Maximum strokes accepted for any single character.
        pub max_strokes_per_char: usize,
        /// Maximum UTF-8 byte length for one table line.
        pub max_line_bytes: usize,
    }

    impl Default for StrokeDataLimits {
        fn default() -> Self {
            Self {
                max_entries: 32768,
                max_strokes_per_char: 128,
                max_line_bytes: 256 * 1024,
            }
        }
    }

    /// Error raised while loading a stroke table.
    #[derive(Debug)]
    pub enum StrokeDataError {
        /// Underlying I/O failure.
        Io(io::Error),
        /// Table holds more characters than `max_entries` allows.
        TooManyEntries {
            /// Entries seen when the limit tripped.
            actual: usize,
            /// Configured `max_entries`.
            limit: usize,
        },
    }

    impl fmt::Display for StrokeDataError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Self::Io(err) => write!(f, "stroke table read failed: {}", err),
                Self::TooManyEntries { actual, limit } => write!(
                    f,
                    "stroke table exceeds max_entries (actual={} limit={})",
                    actual, limit
                ),
            }
        }
    }

    impl std::error::Error for StrokeDataError {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            match self {
                Self::Io(err) => Some(err),
                Self::TooManyEntries { .. } => None,
            }
        }
    }

    impl From<io::Error> for StrokeDataError {
        fn from(err: io::Error) -> Self {
            Self::Io(err)
        }
    }

    /// One table line: `{"character": "永", "strokes": ["M ...", ...]}`.
    #[derive(Deserialize)]
    struct StrokeEntry {
        character: String,
        strokes: Vec<String>,
    }

    /// Stroke table parsed from JSON-lines data.
    ///
    /// Malformed lines are skipped rather than failing the whole load; the
    /// table is expected to be community-maintained and partially dirty.
    /// Duplicate characters keep the last entry seen.
    #[derive(Clone, Debug, Default, PartialEq, Eq)]
    pub struct StrokeData {
        entries: BTreeMap<char, Box<[Box<str>]>>,
    }

    impl StrokeData {
        /// Parse a JSON-lines table with default limits.
        pub fn parse_str(text: &str) -> Result<Self, StrokeDataError> {
            Self::parse_str_with_limits(text, StrokeDataLimits::default())
        }

        /// Parse a JSON-lines table with explicit limits.
        pub fn parse_str_with_limits(
            text: &str,
            limits: StrokeDataLimits,
        ) -> Result<Self, StrokeDataError> {
            let mut data = Self::default();
            for line in text.lines() {
                data.ingest_line(line, limits)?;
            }
            Ok(data)
        }

        /// Read a JSON-lines table from a buffered reader.
        pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, StrokeDataError> {
            Self::from_reader_with_limits(reader, StrokeDataLimits::default())
        }

        /// Read a JSON-lines table from a buffered reader with explicit limits.
        pub fn from_reader_with_limits<R: BufRead>(
            reader: R,
            limits: StrokeDataLimits,
        ) -> Result<Self, StrokeDataError> {
            let mut data = Self::default();
            for line in reader.lines() {
                data.ingest_line(&line?, limits)?;
            }
            Ok(data)
        }

        /// Load a JSON-lines table from `path`.
        pub fn load(path: impl AsRef<Path>) -> Result<Self, StrokeDataError> {
            let text = std::fs::read_to_string(path)?;
            Self::parse_str(&text)
        }

        /// Load a JSON-lines table from `path` with explicit limits.
        pub fn load_with_limits(
            path: impl AsRef<Path>,
            limits: StrokeDataLimits,
        ) -> Result<Self, StrokeDataError> {
            let text = std::fs::read_to_string(path)?;
            Self::parse_str_with_limits(&text, limits)
        }

        /// Load a JSON-lines table from `path` without blocking.
        #[cfg(feature = "async")]
        pub async fn load_async(path: impl AsRef<Path>) -> Result<Self, StrokeDataError> {
            let text = tokio::fs::read_to_string(path.as_ref()).await?;
            Self::parse_str(&text)
        }

        /// Number of characters in the table.
        pub fn len(&self) -> usize {
            self.entries.len()
        }

        /// True when the table holds no characters.
        pub fn is_empty(&self) -> bool {
            self.entries.is_empty()
        }

        /// True when the table has an entry for `character`.
        pub fn contains(&self, character: char) -> bool {
            self.entries.contains_key(&character)
        }

        fn ingest_line(
            &mut self,
            line: &str,
            limits: StrokeDataLimits,
        ) -> Result<(), StrokeDataError> {
            let line = line.trim();
            if line.is_empty() {
                return Ok(());
            }
            if line.len() > limits.max_line_bytes {
                log::warn!(
                    "skipping stroke table line: {} bytes exceeds max_line_bytes ({})",
                    line.len(),
                    limits.max_line_bytes
                );
                return Ok(());
            }
            let entry: StrokeEntry = match serde_json::from_str(line) {
                Ok(entry) => entry,
                Err(err) => {
                    log::debug!("skipping malformed stroke table line: {}", err);
                    return Ok(());
                }
            };
            let mut chars = entry.character.chars();
            let (Some(character), None) = (chars.next(), chars.next()) else {
                log::debug!(
                    "skipping stroke table line: character field {:?} is not a single character",
                    entry.character
                );
                return Ok(());
            };
            if entry.strokes.len() > limits.max_strokes_per_char {
                log::warn!(
                    "skipping stroke table entry for {:?}: {} strokes exceeds max_strokes_per_char ({})",
                    character,
                    entry.strokes.len(),
                    limits.max_strokes_per_char
                );
                return Ok(());
            }
            if self.entries.len() >= limits.max_entries && !self.entries.contains_key(&character) {
                return Err(StrokeDataError::TooManyEntries {
                    actual: self.entries.len() + 1,
                    limit: limits.max_entries,
                });
            }
            let strokes: Box<[Box<str>]> = entry
                .strokes
                .into_iter()
                .map(String::into_boxed_str)
                .collect();
            self.entries.insert(character, strokes);
            Ok(())
        }
    }

    impl StrokeLookup for StrokeData {
        fn strokes(&self, character: char) -> Option<&[Box<str>]> {
            self.entries.get(&character).map(|strokes| &**strokes)
        }
    }

}
