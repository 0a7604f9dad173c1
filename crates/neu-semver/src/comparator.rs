//! Version precedence comparison

use std::cmp::Ordering;

use crate::error::{Result, SemverError};
use crate::operator::Operator;
use crate::version::Version;

/// Comparator implementing SemVer 2.0.0 precedence
pub struct Comparator;

impl Comparator {
    /// Compare two versions by precedence.
    ///
    /// Major, minor and patch are compared numerically, then the prerelease
    /// identifiers. Build metadata is ignored.
    pub fn compare(version1: &Version, version2: &Version) -> Ordering {
        version1
            .major()
            .cmp(&version2.major())
            .then_with(|| version1.minor().cmp(&version2.minor()))
            .then_with(|| version1.patch().cmp(&version2.patch()))
            .then_with(|| compare_prerelease(version1.prerelease(), version2.prerelease()))
    }

    /// Compare two possibly absent versions, failing if either is missing
    pub fn compare_nullable(version1: Option<&Version>, version2: Option<&Version>) -> Result<Ordering> {
        match (version1, version2) {
            (Some(v1), Some(v2)) => Ok(Self::compare(v1, v2)),
            _ => Err(SemverError::InvalidComparison),
        }
    }

    /// Check if version1 > version2
    pub fn greater_than(version1: &str, version2: &str) -> Result<bool> {
        Self::compare_with(version1, ">", version2)
    }

    /// Check if version1 >= version2
    pub fn greater_than_or_equal_to(version1: &str, version2: &str) -> Result<bool> {
        Self::compare_with(version1, ">=", version2)
    }

    /// Check if version1 < version2
    pub fn less_than(version1: &str, version2: &str) -> Result<bool> {
        Self::compare_with(version1, "<", version2)
    }

    /// Check if version1 <= version2
    pub fn less_than_or_equal_to(version1: &str, version2: &str) -> Result<bool> {
        Self::compare_with(version1, "<=", version2)
    }

    /// Check if version1 == version2
    pub fn equal_to(version1: &str, version2: &str) -> Result<bool> {
        Self::compare_with(version1, "==", version2)
    }

    /// Check if version1 != version2
    pub fn not_equal_to(version1: &str, version2: &str) -> Result<bool> {
        Self::compare_with(version1, "!=", version2)
    }

    /// Compare version1 to version2 using the given operator
    pub fn compare_with(version1: &str, operator: &str, version2: &str) -> Result<bool> {
        let operator: Operator = operator.parse()?;
        let v1 = Version::parse(version1)?;
        let v2 = Version::parse(version2)?;
        Ok(operator.matches(Self::compare(&v1, &v2)))
    }
}

/// A release outranks any prerelease of the same core version
fn compare_prerelease(pre1: Option<&str>, pre2: Option<&str>) -> Ordering {
    match (pre1, pre2) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(pre1), Some(pre2)) => {
            let mut ids1 = pre1.split('.');
            let mut ids2 = pre2.split('.');
            loop {
                match (ids1.next(), ids2.next()) {
                    (Some(a), Some(b)) => match compare_identifier(a, b) {
                        Ordering::Equal => continue,
                        ordering => return ordering,
                    },
                    (None, None) => return Ordering::Equal,
                    (None, Some(_)) => return Ordering::Less,
                    (Some(_), None) => return Ordering::Greater,
                }
            }
        }
    }
}

fn compare_identifier(id1: &str, id2: &str) -> Ordering {
    match (is_numeric(id1), is_numeric(id2)) {
        (true, true) => compare_numeric(id1, id2),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => id1.cmp(id2),
    }
}

/// Compare digit strings by value without a width limit
fn compare_numeric(id1: &str, id2: &str) -> Ordering {
    let id1 = id1.trim_start_matches('0');
    let id2 = id2.trim_start_matches('0');
    id1.len().cmp(&id2.len()).then_with(|| id1.cmp(id2))
}

fn is_numeric(id: &str) -> bool {
    !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    fn cmp(a: &str, b: &str) -> Ordering {
        Comparator::compare(&v(a), &v(b))
    }

    #[test]
    fn test_compare_core() {
        assert_eq!(cmp("1.0.0", "2.0.0"), Ordering::Less);
        assert_eq!(cmp("2.0.0", "2.1.0"), Ordering::Less);
        assert_eq!(cmp("2.1.0", "2.1.1"), Ordering::Less);
        assert_eq!(cmp("2.1.1", "2.1.1"), Ordering::Equal);
        assert_eq!(cmp("10.0.0", "9.99.99"), Ordering::Greater);
        assert_eq!(cmp("1.10.0", "1.9.0"), Ordering::Greater);
        assert_eq!(cmp("1.0.10", "1.0.9"), Ordering::Greater);
    }

    #[test]
    fn test_compare_release_beats_prerelease() {
        assert_eq!(cmp("1.0.0", "1.0.0-alpha"), Ordering::Greater);
        assert_eq!(cmp("1.0.0-alpha", "1.0.0"), Ordering::Less);
        assert_eq!(cmp("1.0.0", "1.0.0-0"), Ordering::Greater);
        // Core fields still win over prerelease
        assert_eq!(cmp("1.0.1-alpha", "1.0.0"), Ordering::Greater);
    }

    #[test]
    fn test_compare_numeric_identifiers() {
        assert_eq!(cmp("1.0.0-2", "1.0.0-10"), Ordering::Less);
        assert_eq!(cmp("1.0.0-beta.2", "1.0.0-beta.11"), Ordering::Less);
        assert_eq!(cmp("1.0.0-0", "1.0.0-1"), Ordering::Less);
        assert_eq!(cmp("1.0.0-7", "1.0.0-7"), Ordering::Equal);
        assert_eq!(
            cmp("1.0.0-99999999999999999999999", "1.0.0-99999999999999999999998"),
            Ordering::Greater
        );
        assert_eq!(cmp("1.0.0-18446744073709551616", "1.0.0-18446744073709551615"), Ordering::Greater);
    }

    #[test]
    fn test_compare_numeric_below_alphanumeric() {
        assert_eq!(cmp("1.0.0-1", "1.0.0-alpha"), Ordering::Less);
        assert_eq!(cmp("1.0.0-alpha", "1.0.0-1"), Ordering::Greater);
        assert_eq!(cmp("1.0.0-999", "1.0.0-0a"), Ordering::Less);
        assert_eq!(cmp("1.0.0-1.alpha", "1.0.0-alpha.1"), Ordering::Less);
    }

    #[test]
    fn test_compare_alphanumeric_identifiers() {
        assert_eq!(cmp("1.0.0-alpha", "1.0.0-beta"), Ordering::Less);
        assert_eq!(cmp("1.0.0-beta", "1.0.0-rc"), Ordering::Less);
        // ASCII order puts uppercase before lowercase and '-' before digits
        assert_eq!(cmp("1.0.0-RC", "1.0.0-rc"), Ordering::Less);
        assert_eq!(cmp("1.0.0--", "1.0.0-0a"), Ordering::Less);
        assert_eq!(cmp("1.0.0-alpha10", "1.0.0-alpha9"), Ordering::Less);
    }

    #[test]
    fn test_compare_identifier_count() {
        assert_eq!(cmp("1.0.0-alpha", "1.0.0-alpha.1"), Ordering::Less);
        assert_eq!(cmp("1.0.0-alpha.1", "1.0.0-alpha"), Ordering::Greater);
        assert_eq!(cmp("1.0.0-alpha.1", "1.0.0-alpha.1.0"), Ordering::Less);
        assert_eq!(cmp("1.0.0-alpha.beta", "1.0.0-alpha.1"), Ordering::Greater);
    }

    #[test]
    fn test_compare_ignores_build() {
        assert_eq!(cmp("1.0.0+x", "1.0.0+y"), Ordering::Equal);
        assert_eq!(cmp("1.0.0-rc.1+a", "1.0.0-rc.1"), Ordering::Equal);
        assert_eq!(cmp("1.0.0+999", "1.0.1+0"), Ordering::Less);
    }

    #[test]
    fn test_compare_nullable() {
        let a = v("1.0.0");
        let b = v("2.0.0");
        assert_eq!(Comparator::compare_nullable(Some(&a), Some(&b)).unwrap(), Ordering::Less);
        assert_eq!(Comparator::compare_nullable(Some(&a), None).unwrap_err(), SemverError::InvalidComparison);
        assert_eq!(Comparator::compare_nullable(None, Some(&b)).unwrap_err(), SemverError::InvalidComparison);
        assert_eq!(Comparator::compare_nullable(None, None).unwrap_err(), SemverError::InvalidComparison);
    }

    #[test]
    fn test_greater_than() {
        assert!(Comparator::greater_than("1.25.0", "1.24.0").unwrap());
        assert!(!Comparator::greater_than("1.25.0", "1.25.0").unwrap());
        assert!(!Comparator::greater_than("1.25.0", "1.26.0").unwrap());
        assert!(Comparator::greater_than("1.25.0", "1.25.0-rc.1").unwrap());
    }

    #[test]
    fn test_greater_than_or_equal_to() {
        assert!(Comparator::greater_than_or_equal_to("1.25.0", "1.24.0").unwrap());
        assert!(Comparator::greater_than_or_equal_to("1.25.0", "1.25.0").unwrap());
        assert!(!Comparator::greater_than_or_equal_to("1.25.0", "1.26.0").unwrap());
    }

    #[test]
    fn test_less_than() {
        assert!(!Comparator::less_than("1.25.0", "1.24.0").unwrap());
        assert!(!Comparator::less_than("1.25.0", "1.25.0").unwrap());
        assert!(Comparator::less_than("1.25.0", "1.26.0").unwrap());
        assert!(Comparator::less_than("1.0.0-alpha", "1.0.0-alpha.1").unwrap());
    }

    #[test]
    fn test_less_than_or_equal_to() {
        assert!(!Comparator::less_than_or_equal_to("1.25.0", "1.24.0").unwrap());
        assert!(Comparator::less_than_or_equal_to("1.25.0", "1.25.0").unwrap());
        assert!(Comparator::less_than_or_equal_to("1.25.0", "1.26.0").unwrap());
    }

    #[test]
    fn test_equal_to() {
        assert!(!Comparator::equal_to("1.25.0", "1.24.0").unwrap());
        assert!(Comparator::equal_to("1.25.0", "1.25.0").unwrap());
        assert!(Comparator::equal_to("1.25.0+build.1", "1.25.0+build.2").unwrap());
        assert!(!Comparator::equal_to("1.25.0-rc", "1.25.0").unwrap());
    }

    #[test]
    fn test_not_equal_to() {
        assert!(Comparator::not_equal_to("1.25.0", "1.24.0").unwrap());
        assert!(!Comparator::not_equal_to("1.25.0", "1.25.0").unwrap());
        assert!(Comparator::not_equal_to("1.25.0", "1.26.0").unwrap());
    }

    #[test]
    fn test_compare_with() {
        assert!(Comparator::compare_with("1.25.0", "=", "1.25.0").unwrap());
        assert!(Comparator::compare_with("1.25.0", "<>", "1.24.0").unwrap());
        assert!(!Comparator::compare_with("1.25.0", "<>", "1.25.0+meta").unwrap());

        assert_eq!(
            Comparator::compare_with("1.0.0", "~", "1.0.0").unwrap_err(),
            SemverError::InvalidOperator("~".to_string())
        );
        assert_eq!(
            Comparator::compare_with("1.0", ">", "1.0.0").unwrap_err(),
            SemverError::MalformedVersion("1.0".to_string())
        );
        assert_eq!(
            Comparator::compare_with("1.0.0", ">", " ").unwrap_err(),
            SemverError::EmptyVersion
        );
    }

    #[test]
    fn test_compare_numeric_helper() {
        assert_eq!(compare_numeric("10", "9"), Ordering::Greater);
        assert_eq!(compare_numeric("0", "0"), Ordering::Equal);
        assert_eq!(compare_numeric("123", "124"), Ordering::Less);
        assert!(is_numeric("0123"));
        assert!(!is_numeric(""));
        assert!(!is_numeric("12a"));
    }
}
