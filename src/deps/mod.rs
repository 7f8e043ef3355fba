//! Dependency list input
//!
//! # Modules
//!
//! - [`reader`]: CSV dependency list reading with per-row error recovery
//! - [`types`]: Repository identifiers and dependency entries

pub mod reader;
pub mod types;
