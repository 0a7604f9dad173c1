//! Semver facade providing high-level version operations

use std::cmp::Ordering;

use crate::error::{Result, SemverError};
use crate::{Comparator, Version, VersionParser};

/// Main facade for semantic versioning operations
pub struct Semver;

impl Semver {
    /// Parse a version string
    pub fn parse(version: &str) -> Result<Version> {
        VersionParser::new().parse(version)
    }

    /// Check if a version string is valid; never fails
    pub fn is_valid(version: &str) -> bool {
        VersionParser::new().is_valid(version)
    }

    /// Sort versions in ascending order
    pub fn sort<S: AsRef<str>>(versions: &[S]) -> Result<Vec<String>> {
        Self::usort(versions, true)
    }

    /// Sort versions in descending order (reverse sort)
    pub fn rsort<S: AsRef<str>>(versions: &[S]) -> Result<Vec<String>> {
        Self::usort(versions, false)
    }

    /// Return the version with the highest precedence.
    ///
    /// Among equal versions the one listed first wins.
    pub fn find_highest<S: AsRef<str>>(versions: &[S]) -> Result<String> {
        if versions.is_empty() {
            log::debug!("Cannot find highest version of an empty list");
            return Err(SemverError::EmptyInput);
        }

        Self::rsort(versions)?
            .into_iter()
            .next()
            .ok_or(SemverError::EmptyInput)
    }

    /// Stable sort, so versions of equal precedence keep their input order
    fn usort<S: AsRef<str>>(versions: &[S], ascending: bool) -> Result<Vec<String>> {
        let parser = VersionParser::new();

        // Parse everything before sorting so the first invalid entry aborts
        let mut parsed = versions
            .iter()
            .map(|v| parser.parse(v.as_ref()))
            .collect::<Result<Vec<Version>>>()
            .inspect_err(|e| log::debug!("Aborting sort of {} versions: {}", versions.len(), e))?;

        parsed.sort_by(|a, b| {
            let cmp: Ordering = Comparator::compare(a, b);
            if ascending {
                cmp
            } else {
                cmp.reverse()
            }
        });

        log::debug!(
            "Sorted {} versions in {} order",
            parsed.len(),
            if ascending { "ascending" } else { "descending" }
        );

        // Return display text, not a reconstruction
        Ok(parsed.into_iter().map(|v| v.to_string()).collect())
    }
}
