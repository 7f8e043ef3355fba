//! release-scout: report the latest patch release of every minor version line
//! for a list of GitHub-hosted dependencies.
//!
//! # Modules
//!
//! - [`config`]: Shared constants (base URL, timeouts, stagger delay)
//! - [`deps`]: Dependency list input (repo identifiers, minimum versions)
//! - [`report`]: Per-dependency fetch orchestration and output formatting
//! - [`version`]: Version parsing, ordering, and selection

pub mod config;
pub mod deps;
pub mod report;
pub mod version;
