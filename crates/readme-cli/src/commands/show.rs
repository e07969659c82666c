//! Show command implementation

use readme_blocks::find_region;
use readme_fs::io;

use crate::config::Settings;
use crate::error::{CliError, Result};

/// Return the interior of the first marker region.
pub fn region_content(settings: &Settings) -> Result<String> {
    let document = io::read_text(&settings.target)?;
    let region = find_region(&document, &settings.markers).ok_or_else(|| {
        CliError::user(format!(
            "no marker region found in {}",
            settings.target
        ))
    })?;
    tracing::debug!(
        start_line = region.start_line,
        end_line = region.end_line,
        "showing marker region"
    );
    Ok(region.content)
}

/// Run the show command: print the region interior to stdout.
pub fn run_show(settings: &Settings) -> Result<()> {
    println!("{}", region_content(settings)?);
    Ok(())
}
