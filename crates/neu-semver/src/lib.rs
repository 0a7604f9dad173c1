//! Strict SemVer 2.0.0 library
//!
//! This crate provides semantic version parsing, precedence comparison,
//! sorting and derivation of new versions (increments and field overrides).

mod bump;
mod comparator;
mod error;
mod operator;
mod semver;
mod version;
mod version_parser;

pub use comparator::Comparator;
pub use error::{Field, Result, SemverError};
pub use operator::Operator;
pub use semver::Semver;
pub use version::Version;
pub use version_parser::VersionParser;
