//! Update command implementation
//!
//! Reads the target document, substitutes the first marker region and
//! writes the result back.

use colored::Colorize;
use similar::TextDiff;

use readme_blocks::{UpdateOutcome, apply};
use readme_fs::io;

use crate::config::Settings;
use crate::error::Result;

/// Run the update command.
///
/// The file is only rewritten when its content actually changes. With
/// `dry_run` the change is printed as a unified diff instead.
pub fn run_update(settings: &Settings, dry_run: bool) -> Result<UpdateOutcome> {
    let document = io::read_text(&settings.target)?;
    tracing::debug!(source = %settings.source, "generating content");
    let result = apply(
        &document,
        &settings.markers,
        settings.source.generator().as_ref(),
    )?;

    if dry_run {
        print_dry_run(&settings.target.to_string(), &document, &result.document, result.outcome);
        return Ok(result.outcome);
    }

    match result.outcome {
        UpdateOutcome::Updated => {
            io::write_text(&settings.target, &result.document)?;
            tracing::info!(path = %settings.target, "updated marker region");
        }
        UpdateOutcome::Unchanged => {
            tracing::info!(path = %settings.target, "marker region already up to date");
        }
        UpdateOutcome::MissingRegion => {}
    }

    Ok(result.outcome)
}

fn print_dry_run(path: &str, old: &str, new: &str, outcome: UpdateOutcome) {
    match outcome {
        UpdateOutcome::MissingRegion => {
            println!(
                "{} No marker region in {}; nothing to update.",
                "SKIP".yellow().bold(),
                path.yellow()
            );
        }
        UpdateOutcome::Unchanged => {
            println!("{} {} is up to date.", "OK".green().bold(), path.yellow());
        }
        UpdateOutcome::Updated => {
            print!("{}", render_diff(path, old, new));
        }
    }
}

/// Unified diff between the current and the updated document.
pub(crate) fn render_diff(path: &str, old: &str, new: &str) -> String {
    let unified = TextDiff::from_lines(old, new)
        .unified_diff()
        .context_radius(3)
        .header(path, path)
        .to_string();

    let mut out = String::with_capacity(unified.len());
    for line in unified.lines() {
        let styled = if line.starts_with("---") || line.starts_with("+++") {
            line.bold()
        } else if line.starts_with("@@") {
            line.cyan()
        } else if line.starts_with('+') {
            line.green()
        } else if line.starts_with('-') {
            line.red()
        } else {
            line.normal()
        };
        out.push_str(&format!("{styled}\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ContentSource;
    use readme_blocks::Markers;
    use readme_fs::NormalizedPath;
    use std::fs;
    use tempfile::TempDir;

    fn settings(dir: &TempDir, source: ContentSource) -> Settings {
        Settings {
            target: NormalizedPath::new(dir.path().join("README.md")),
            markers: Markers::default(),
            source,
        }
    }

    #[test]
    fn test_update_writes_file() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("README.md"),
            "# T\n<!-- update_start -->\nold\n<!-- update_end -->\n",
        )
        .unwrap();

        let outcome = run_update(&settings(&temp, ContentSource::Placeholder), false).unwrap();

        assert_eq!(outcome, UpdateOutcome::Updated);
        assert_eq!(
            fs::read_to_string(temp.path().join("README.md")).unwrap(),
            "# T\n<!-- update_start -->\nThis is dynamically generated content\n<!-- update_end -->\n"
        );
    }

    #[test]
    fn test_dry_run_leaves_file_alone() {
        let temp = TempDir::new().unwrap();
        let original = "<!-- update_start -->\nold\n<!-- update_end -->";
        fs::write(temp.path().join("README.md"), original).unwrap();

        let outcome =
            run_update(&settings(&temp, ContentSource::Text("new".into())), true).unwrap();

        assert_eq!(outcome, UpdateOutcome::Updated);
        assert_eq!(
            fs::read_to_string(temp.path().join("README.md")).unwrap(),
            original
        );
    }

    #[test]
    fn test_missing_region_is_not_an_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("README.md"), "no markers").unwrap();

        let outcome = run_update(&settings(&temp, ContentSource::Placeholder), false).unwrap();

        assert_eq!(outcome, UpdateOutcome::MissingRegion);
        assert_eq!(
            fs::read_to_string(temp.path().join("README.md")).unwrap(),
            "no markers"
        );
    }

    #[test]
    fn test_missing_document_is_an_error() {
        let temp = TempDir::new().unwrap();
        assert!(run_update(&settings(&temp, ContentSource::Placeholder), false).is_err());
    }

    #[test]
    fn test_render_diff_marks_changed_lines() {
        colored::control::set_override(false);
        let diff = render_diff("README.md", "a\nold\nb\n", "a\nnew\nb\n");

        assert!(diff.starts_with("--- README.md\n+++ README.md\n@@"));
        assert!(diff.contains("-old\n"));
        assert!(diff.contains("+new\n"));
        assert!(diff.contains(" a\n"));
    }
}
