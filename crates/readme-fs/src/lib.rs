//! Filesystem layer for readme-update
//!
//! Reads documents as whole strings, overwrites them atomically and
//! loads the optional configuration file.

pub mod config;
pub mod error;
pub mod io;
pub mod path;

pub use config::ConfigStore;
pub use error::{Error, Result};
pub use path::NormalizedPath;
