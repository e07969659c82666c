//! Region substitution.
//!
//! Substitution is single-shot: only the first region of a document is
//! rewritten. Content is inserted literally, so `$` and `\` carry no
//! replacement-syntax meaning.

use regex::NoExpand;

use crate::error::Result;
use crate::generator::ContentGenerator;
use crate::markers::Markers;
use crate::parser::find_region;

/// What an [`apply`] call did to the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The region was rewritten with different content.
    Updated,
    /// The region already held exactly the generated content.
    Unchanged,
    /// No complete marker region was found; the document is untouched.
    MissingRegion,
}

/// A transformed document together with the outcome that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Update {
    pub document: String,
    pub outcome: UpdateOutcome,
}

impl Update {
    pub fn is_changed(&self) -> bool {
        self.outcome == UpdateOutcome::Updated
    }
}

/// The replacement text for a region: start marker, newline, content,
/// newline, end marker.
pub fn format_block(markers: &Markers, content: &str) -> String {
    format!("{}\n{}\n{}", markers.start(), content, markers.end())
}

/// Replaces the first `<!-- update_start -->`…`<!-- update_end -->`
/// region of `document` with `content`.
///
/// The document is returned unchanged when no complete region exists.
///
/// # Example
/// ```
/// use readme_blocks::update;
///
/// let doc = "<!-- update_start -->\nold\nline\n<!-- update_end -->";
/// assert_eq!(
///     update(doc, "fresh"),
///     "<!-- update_start -->\nfresh\n<!-- update_end -->"
/// );
/// assert_eq!(update("no markers", "fresh"), "no markers");
/// ```
pub fn update(document: &str, content: &str) -> String {
    update_with(document, &Markers::default(), content)
}

/// [`update`] for an arbitrary marker pair.
pub fn update_with(document: &str, markers: &Markers, content: &str) -> String {
    let block = format_block(markers, content);
    markers
        .region()
        .replacen(document, 1, NoExpand(&block))
        .into_owned()
}

/// Generates content and substitutes it into the first region.
///
/// # Errors
/// Only generator failures are errors. A missing region yields
/// [`UpdateOutcome::MissingRegion`] with the original document.
pub fn apply(
    document: &str,
    markers: &Markers,
    generator: &dyn ContentGenerator,
) -> Result<Update> {
    let Some(first) = find_region(document, markers) else {
        tracing::info!(
            start = markers.start(),
            end = markers.end(),
            "no complete marker region found, leaving document unchanged"
        );
        return Ok(Update {
            document: document.to_string(),
            outcome: UpdateOutcome::MissingRegion,
        });
    };

    tracing::debug!(
        start_line = first.start_line,
        end_line = first.end_line,
        "located marker region"
    );
    let count = markers.region().find_iter(document).count();
    if count > 1 {
        tracing::debug!(
            count,
            "multiple marker regions found, only the first is updated"
        );
    }

    let content = generator.generate()?;
    let updated = update_with(document, markers, &content);
    let outcome = if updated == document {
        UpdateOutcome::Unchanged
    } else {
        UpdateOutcome::Updated
    };

    Ok(Update {
        document: updated,
        outcome,
    })
}
