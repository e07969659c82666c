//! End-to-end read → substitute → write cycle through the library crates,
//! the way an embedding program would drive them.

use pretty_assertions::assert_eq;
use readme_blocks::{
    ContentGenerator, FileContent, Markers, Result, UpdateOutcome, apply, extract,
};
use readme_fs::{NormalizedPath, io};
use std::cell::Cell;
use std::fs;
use tempfile::tempdir;

fn update_file(path: &NormalizedPath, generator: &dyn ContentGenerator) -> Result<UpdateOutcome> {
    let document = io::read_text(path)?;
    let result = apply(&document, &Markers::default(), generator)?;
    if result.is_changed() {
        io::write_text(path, &result.document)?;
    }
    Ok(result.outcome)
}

#[test]
fn readme_cycle_with_counter_generator() {
    let dir = tempdir().unwrap();
    let path = NormalizedPath::new(dir.path().join("README.md"));
    io::write_text(
        &path,
        "# Stats\n\n<!-- update_start -->\n<!-- update_end -->\n\nfooter\n",
    )
    .unwrap();

    let runs = Cell::new(0);
    let generator = || -> Result<String> {
        runs.set(runs.get() + 1);
        Ok(format!("runs: {}", runs.get()))
    };

    assert_eq!(update_file(&path, &generator).unwrap(), UpdateOutcome::Updated);
    assert_eq!(update_file(&path, &generator).unwrap(), UpdateOutcome::Updated);

    let content = io::read_text(&path).unwrap();
    assert_eq!(
        content,
        "# Stats\n\n<!-- update_start -->\nruns: 2\n<!-- update_end -->\n\nfooter\n"
    );
    assert_eq!(
        extract(&content, &Markers::default()).as_deref(),
        Some("runs: 2")
    );
}

#[test]
fn unchanged_document_is_not_rewritten() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("README.md");
    fs::write(&file_path, "<!-- update_start -->\nsame\n<!-- update_end -->").unwrap();
    fs::write(dir.path().join("gen.md"), "same\n").unwrap();

    let before = fs::metadata(&file_path).unwrap().modified().unwrap();
    let outcome = update_file(
        &NormalizedPath::new(&file_path),
        &FileContent::new(dir.path().join("gen.md")),
    )
    .unwrap();
    let after = fs::metadata(&file_path).unwrap().modified().unwrap();

    assert_eq!(outcome, UpdateOutcome::Unchanged);
    assert_eq!(before, after);
}

#[test]
fn read_failure_surfaces_as_fs_error() {
    let dir = tempdir().unwrap();
    let path = NormalizedPath::new(dir.path().join("README.md"));

    let err = update_file(&path, &|| -> Result<String> { Ok(String::new()) }).unwrap_err();

    assert!(matches!(err, readme_blocks::Error::Fs(ref e) if e.is_not_found()));
}
