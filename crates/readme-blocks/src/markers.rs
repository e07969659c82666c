//! The literal marker pair that delimits an editable region.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

/// Opening marker recognised in existing documents. Bit-exact.
pub const START_MARKER: &str = "<!-- update_start -->";

/// Closing marker recognised in existing documents. Bit-exact.
pub const END_MARKER: &str = "<!-- update_end -->";

static DEFAULT_REGION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    region_regex(START_MARKER, END_MARKER).expect("Invalid default region regex")
});

/// Builds the region pattern: start marker, the shortest run of any
/// characters (newlines included), end marker.
fn region_regex(start: &str, end: &str) -> std::result::Result<Regex, regex::Error> {
    Regex::new(&format!(
        "(?s){}.*?{}",
        regex::escape(start),
        regex::escape(end)
    ))
}

/// A start/end marker pair, matched literally.
#[derive(Debug, Clone)]
pub struct Markers {
    start: String,
    end: String,
    region: Regex,
}

impl Markers {
    /// Creates a custom marker pair.
    ///
    /// # Errors
    /// Returns [`Error::InvalidMarkers`] when either marker is empty or
    /// both are the same string.
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Result<Self> {
        let start = start.into();
        let end = end.into();

        if start.is_empty() || end.is_empty() {
            return Err(Error::InvalidMarkers {
                reason: "markers must not be empty".into(),
            });
        }
        if start == end {
            return Err(Error::InvalidMarkers {
                reason: format!("start and end markers are identical: {start:?}"),
            });
        }

        let region = region_regex(&start, &end)?;
        Ok(Self { start, end, region })
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn end(&self) -> &str {
        &self.end
    }

    pub(crate) fn region(&self) -> &Regex {
        &self.region
    }
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            start: START_MARKER.to_string(),
            end: END_MARKER.to_string(),
            region: DEFAULT_REGION_REGEX.clone(),
        }
    }
}

impl PartialEq for Markers {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }
}

impl Eq for Markers {}
