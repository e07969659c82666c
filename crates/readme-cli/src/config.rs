//! Resolution of command-line flags and the optional config file into
//! the settings a command runs with.

use std::fmt;
use std::path::Path;

use serde::Deserialize;

use readme_blocks::{
    ContentGenerator, END_MARKER, FileContent, Markers, START_MARKER, StaticContent,
};
use readme_fs::{ConfigStore, NormalizedPath};

use crate::cli::Cli;
use crate::error::{CliError, Result};

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "readme-update.toml";

/// Document updated when neither flag nor config names one.
pub const DEFAULT_TARGET: &str = "README.md";

/// On-disk configuration. Every key is optional.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub file: Option<String>,
    #[serde(default)]
    pub markers: MarkerConfig,
    #[serde(default)]
    pub content: ContentConfig,
}

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct MarkerConfig {
    pub start: Option<String>,
    pub end: Option<String>,
}

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ContentConfig {
    pub text: Option<String>,
    pub file: Option<String>,
}

/// Where the replacement content comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    Text(String),
    File(NormalizedPath),
    Placeholder,
}

impl ContentSource {
    pub fn generator(&self) -> Box<dyn ContentGenerator> {
        match self {
            Self::Text(text) => Box::new(StaticContent::new(text.clone())),
            Self::File(path) => Box::new(FileContent::new(path.clone())),
            Self::Placeholder => Box::new(StaticContent::default()),
        }
    }
}

impl fmt::Display for ContentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(_) => write!(f, "literal text"),
            Self::File(path) => write!(f, "file {path}"),
            Self::Placeholder => write!(f, "placeholder"),
        }
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub target: NormalizedPath,
    pub markers: Markers,
    pub source: ContentSource,
}

impl Settings {
    /// Merge flags over the config file over built-in defaults.
    ///
    /// Paths given on the command line are relative to `cwd`; paths in a
    /// config file are relative to the directory holding that file.
    pub fn resolve(cwd: &Path, cli: &Cli) -> Result<Self> {
        let cwd_path = NormalizedPath::new(cwd);
        let (config, config_dir) = load_config(&cwd_path, cli)?;

        let target = match (&cli.file, &config.file) {
            (Some(file), _) => cwd_path.join(&file.to_string_lossy()),
            (None, Some(file)) => config_dir.join(file),
            (None, None) => cwd_path.join(DEFAULT_TARGET),
        };

        let start = cli
            .start_marker
            .clone()
            .or(config.markers.start)
            .unwrap_or_else(|| START_MARKER.to_string());
        let end = cli
            .end_marker
            .clone()
            .or(config.markers.end)
            .unwrap_or_else(|| END_MARKER.to_string());
        let markers = Markers::new(start, end)?;

        if config.content.text.is_some() && config.content.file.is_some() {
            return Err(CliError::user(
                "config sets both content.text and content.file; choose one",
            ));
        }
        let source = if let Some(text) = &cli.content {
            ContentSource::Text(text.clone())
        } else if let Some(file) = &cli.content_file {
            ContentSource::File(cwd_path.join(&file.to_string_lossy()))
        } else if let Some(text) = config.content.text {
            ContentSource::Text(text)
        } else if let Some(file) = config.content.file {
            ContentSource::File(config_dir.join(&file))
        } else {
            ContentSource::Placeholder
        };

        tracing::debug!(target_file = %target, source = %source, "resolved settings");
        Ok(Self {
            target,
            markers,
            source,
        })
    }
}

/// Returns the parsed config (or defaults) and the directory its
/// relative paths are resolved against.
fn load_config(cwd: &NormalizedPath, cli: &Cli) -> Result<(FileConfig, NormalizedPath)> {
    let path = match &cli.config {
        Some(explicit) => cwd.join(&explicit.to_string_lossy()),
        None => {
            let implicit = cwd.join(DEFAULT_CONFIG_FILE);
            if !implicit.is_file() {
                return Ok((FileConfig::default(), cwd.clone()));
            }
            implicit
        }
    };

    let config: FileConfig = ConfigStore::new().load(&path)?;
    tracing::debug!(path = %path, "loaded config");

    let dir = path
        .to_native()
        .parent()
        .map(NormalizedPath::new)
        .unwrap_or_else(|| cwd.clone());
    Ok((config, dir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("readme-update").chain(args.iter().copied()))
    }

    #[test]
    fn test_defaults_without_config() {
        let temp = TempDir::new().unwrap();
        let settings = Settings::resolve(temp.path(), &cli(&[])).unwrap();

        assert_eq!(
            settings.target,
            NormalizedPath::new(temp.path()).join("README.md")
        );
        assert_eq!(settings.markers, Markers::default());
        assert_eq!(settings.source, ContentSource::Placeholder);
    }

    #[test]
    fn test_implicit_config_is_loaded() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(DEFAULT_CONFIG_FILE),
            "file = \"docs/index.md\"\n\n[content]\nfile = \"gen/table.md\"\n",
        )
        .unwrap();

        let settings = Settings::resolve(temp.path(), &cli(&[])).unwrap();
        let root = NormalizedPath::new(temp.path());

        assert_eq!(settings.target, root.join("docs/index.md"));
        assert_eq!(
            settings.source,
            ContentSource::File(root.join("gen/table.md"))
        );
    }

    #[test]
    fn test_explicit_config_paths_relative_to_config_dir() {
        let temp = TempDir::new().unwrap();
        let conf_dir = temp.path().join("conf");
        fs::create_dir(&conf_dir).unwrap();
        fs::write(conf_dir.join("settings.yaml"), "file: ../README.md\n").unwrap();

        let settings =
            Settings::resolve(temp.path(), &cli(&["--config", "conf/settings.yaml"])).unwrap();

        assert_eq!(
            settings.target,
            NormalizedPath::new(&conf_dir).join("../README.md")
        );
    }

    #[test]
    fn test_flags_override_config() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(DEFAULT_CONFIG_FILE),
            "file = \"other.md\"\n\n[markers]\nstart = \"<!-- a -->\"\nend = \"<!-- b -->\"\n\n[content]\ntext = \"from config\"\n",
        )
        .unwrap();

        let settings = Settings::resolve(
            temp.path(),
            &cli(&[
                "--file",
                "README.md",
                "--start-marker",
                "<!-- x -->",
                "--content",
                "from flag",
            ]),
        )
        .unwrap();

        assert_eq!(
            settings.target,
            NormalizedPath::new(temp.path()).join("README.md")
        );
        assert_eq!(settings.markers.start(), "<!-- x -->");
        assert_eq!(settings.markers.end(), "<!-- b -->");
        assert_eq!(settings.source, ContentSource::Text("from flag".into()));
    }

    #[test]
    fn test_config_with_both_content_sources_rejected() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(DEFAULT_CONFIG_FILE),
            "[content]\ntext = \"a\"\nfile = \"b.md\"\n",
        )
        .unwrap();

        let err = Settings::resolve(temp.path(), &cli(&[])).unwrap_err();
        assert!(matches!(err, CliError::User { .. }));
    }

    #[test]
    fn test_missing_explicit_config_is_error() {
        let temp = TempDir::new().unwrap();
        let err = Settings::resolve(temp.path(), &cli(&["--config", "nope.toml"])).unwrap_err();
        assert!(matches!(err, CliError::Fs(ref e) if e.is_not_found()));
    }

    #[test]
    fn test_identical_markers_rejected() {
        let temp = TempDir::new().unwrap();
        let err = Settings::resolve(
            temp.path(),
            &cli(&["--start-marker", "<!-- same -->", "--end-marker", "<!-- same -->"]),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CliError::Blocks(readme_blocks::Error::InvalidMarkers { .. })
        ));
    }

    #[test]
    fn test_content_source_display() {
        assert_eq!(ContentSource::Placeholder.to_string(), "placeholder");
        assert_eq!(
            ContentSource::File(NormalizedPath::new("gen.md")).to_string(),
            "file gen.md"
        );
    }
}
