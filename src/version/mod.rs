//! Semantic version value type
//!
//! This module provides a small, immutable version value parsed from
//! `MAJOR.MINOR.PATCH[-PRERELEASE][+METADATA]` strings.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────────┐     ┌─────────────┐
//! │  raw text   │────▶│ SemanticVersion │────▶│  canonical  │
//! │             │parse│    (fields)     │Disp │    text     │
//! └─────────────┘     └─────────────────┘     └─────────────┘
//!                              │
//!                              ▼
//!                       ┌─────────────┐
//!                       │   compare   │
//!                       └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`semantic`]: The `SemanticVersion` type, its parser and ordering rule
//! - [`error`]: Error type for rejected version strings
//! - [`collection`]: Bounds-checked element access for slices

pub mod collection;
pub mod error;
pub mod semantic;

pub use collection::SafeGet;
pub use error::VersionError;
pub use semantic::SemanticVersion;
