//! Sources of replacement content.

use readme_fs::{NormalizedPath, io};

use crate::error::Result;

/// Content used when no other source is configured.
pub const PLACEHOLDER_CONTENT: &str = "This is dynamically generated content";

/// Produces the text placed inside the marker region.
pub trait ContentGenerator {
    fn generate(&self) -> Result<String>;
}

impl<F> ContentGenerator for F
where
    F: Fn() -> Result<String>,
{
    fn generate(&self) -> Result<String> {
        self()
    }
}

/// A fixed string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticContent(String);

impl StaticContent {
    pub fn new(content: impl Into<String>) -> Self {
        Self(content.into())
    }
}

impl Default for StaticContent {
    fn default() -> Self {
        Self::new(PLACEHOLDER_CONTENT)
    }
}

impl ContentGenerator for StaticContent {
    fn generate(&self) -> Result<String> {
        Ok(self.0.clone())
    }
}

/// The text of another file, minus one trailing line ending.
///
/// Files conventionally end with a newline; keeping it would leave a
/// blank line before the end marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileContent(NormalizedPath);

impl FileContent {
    pub fn new(path: impl Into<NormalizedPath>) -> Self {
        Self(path.into())
    }
}

impl ContentGenerator for FileContent {
    fn generate(&self) -> Result<String> {
        let mut text = io::read_text(&self.0)?;
        if text.ends_with('\n') {
            text.pop();
            if text.ends_with('\r') {
                text.pop();
            }
        }
        Ok(text)
    }
}
