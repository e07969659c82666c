//! Check command implementation
//!
//! Reports whether the marker region already holds the content that
//! `update` would write, without touching the file.

use colored::Colorize;
use serde_json::json;

use readme_blocks::{UpdateOutcome, apply};
use readme_fs::io;

use crate::config::Settings;
use crate::error::Result;

/// Run the check command.
///
/// Returns `true` when the document is up to date. A document without a
/// marker region is reported as not up to date.
pub fn run_check(settings: &Settings, json: bool) -> Result<bool> {
    let document = io::read_text(&settings.target)?;
    let result = apply(
        &document,
        &settings.markers,
        settings.source.generator().as_ref(),
    )?;
    let up_to_date = result.outcome == UpdateOutcome::Unchanged;

    if json {
        let status = match result.outcome {
            UpdateOutcome::Unchanged => "up_to_date",
            UpdateOutcome::Updated => "stale",
            UpdateOutcome::MissingRegion => "missing_region",
        };
        let output = json!({
            "file": settings.target.as_str(),
            "status": status,
            "up_to_date": up_to_date,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(up_to_date);
    }

    let path = settings.target.as_str();
    match result.outcome {
        UpdateOutcome::Unchanged => {
            println!("{} {} is up to date.", "OK".green().bold(), path.yellow());
        }
        UpdateOutcome::Updated => {
            println!(
                "{} {} is out of date. Run {} to regenerate it.",
                "STALE".red().bold(),
                path.yellow(),
                "readme-update".cyan()
            );
        }
        UpdateOutcome::MissingRegion => {
            println!(
                "{} {} has no {} ... {} region.",
                "MISSING".red().bold(),
                path.yellow(),
                settings.markers.start(),
                settings.markers.end()
            );
        }
    }

    Ok(up_to_date)
}
