//! Marker region updates for readme-update.
//!
//! A document carries an editable region delimited by two literal
//! marker comments:
//!
//! ```text
//! <!-- update_start -->
//! generated content
//! <!-- update_end -->
//! ```
//!
//! [`update`] replaces the first such region with freshly generated
//! content and leaves every other byte of the document untouched. A
//! document without a complete region is returned unchanged.
//!
//! # Example
//! ```
//! use readme_blocks::update;
//!
//! let readme = "# Project\n<!-- update_start -->\nstale\n<!-- update_end -->\n";
//! let updated = update(readme, "fresh");
//! assert_eq!(
//!     updated,
//!     "# Project\n<!-- update_start -->\nfresh\n<!-- update_end -->\n"
//! );
//! ```

pub mod error;
pub mod generator;
pub mod markers;
pub mod parser;
pub mod writer;

pub use error::{Error, Result};
pub use generator::{ContentGenerator, FileContent, PLACEHOLDER_CONTENT, StaticContent};
pub use markers::{END_MARKER, Markers, START_MARKER};
pub use parser::{Region, extract, find_region, has_region, parse_regions};
pub use writer::{Update, UpdateOutcome, apply, format_block, update, update_with};
