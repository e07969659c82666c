//! Locating marker regions in a document.

use std::ops::Range;

use crate::markers::Markers;

/// A located marker region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    /// Byte span of the region, both markers included.
    pub span: Range<usize>,
    /// Interior text with one leading and one trailing line ending removed.
    pub content: String,
    /// The 1-based line number of the start marker.
    pub start_line: usize,
    /// The 1-based line number of the end marker.
    pub end_line: usize,
}

impl Region {
    fn from_match(document: &str, markers: &Markers, span: Range<usize>) -> Self {
        let interior = &document[span.start + markers.start().len()..span.end - markers.end().len()];

        // Trailing break is stripped in the style of the leading one; after
        // a lone `\n` only `\n` goes.
        let (interior, trailing_crlf) = match interior.strip_prefix("\r\n") {
            Some(rest) => (rest, true),
            None => match interior.strip_prefix('\n') {
                Some(rest) => (rest, false),
                None => (interior, true),
            },
        };
        let interior = trailing_crlf
            .then(|| interior.strip_suffix("\r\n"))
            .flatten()
            .or_else(|| interior.strip_suffix('\n'))
            .unwrap_or(interior);

        let start_line = document[..span.start].matches('\n').count() + 1;
        let end_line = start_line + document[span.clone()].matches('\n').count();

        Self {
            content: interior.to_string(),
            span,
            start_line,
            end_line,
        }
    }
}

/// Finds the first region: the first start marker up to the nearest end
/// marker that follows it.
///
/// Returns `None` when the start marker is missing or unterminated.
///
/// # Example
/// ```
/// use readme_blocks::{Markers, find_region};
///
/// let doc = "intro\n<!-- update_start -->\nbody\n<!-- update_end -->\n";
/// let region = find_region(doc, &Markers::default()).unwrap();
/// assert_eq!(region.content, "body");
/// assert_eq!(region.start_line, 2);
/// assert_eq!(region.end_line, 4);
/// ```
pub fn find_region(document: &str, markers: &Markers) -> Option<Region> {
    markers
        .region()
        .find(document)
        .map(|m| Region::from_match(document, markers, m.range()))
}

/// All non-overlapping regions in order of appearance.
pub fn parse_regions(document: &str, markers: &Markers) -> Vec<Region> {
    markers
        .region()
        .find_iter(document)
        .map(|m| Region::from_match(document, markers, m.range()))
        .collect()
}

pub fn has_region(document: &str, markers: &Markers) -> bool {
    markers.region().is_match(document)
}

/// Interior text of the first region.
///
/// This is the inverse of [`crate::update_with`]: extracting after an
/// update yields exactly the inserted content.
pub fn extract(document: &str, markers: &Markers) -> Option<String> {
    find_region(document, markers).map(|region| region.content)
}
