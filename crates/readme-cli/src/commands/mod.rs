//! Command implementations for readme-cli

pub mod check;
pub mod show;
pub mod update;

pub use check::run_check;
pub use show::run_show;
pub use update::run_update;
