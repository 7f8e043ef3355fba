//! Version layer: parsing, ordering, and selection of release versions
//!
//! The selection logic in [`select`] is a pure, synchronous transformation;
//! everything that touches the network sits behind the [`registry::Registry`]
//! trait so selection stays testable without network access.
//!
//! # Modules
//!
//! - [`error`]: Error types for registry operations
//! - [`registries`]: Concrete registry implementations (GitHub Releases)
//! - [`registry`]: Registry trait for fetching release tags from remote sources
//! - [`select`]: Latest-patch-per-minor-line selection over a version floor
//! - [`semver`]: Tag normalization and lenient semver parsing

pub mod error;
pub mod registries;
pub mod registry;
pub mod select;
pub mod semver;
