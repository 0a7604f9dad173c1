//! Parsed semantic version value

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::comparator::Comparator;
use crate::error::SemverError;
use crate::version_parser::VersionParser;

/// An immutable SemVer 2.0.0 version.
///
/// Equality, hashing and ordering consider `major`, `minor`, `patch` and the
/// prerelease identifiers. Build metadata only shows up in [`Version::build`]
/// and in the display text, which is always the trimmed input.
#[derive(Debug, Clone)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    prerelease: Option<String>,
    build: Option<String>,
    original: String,
}

impl Version {
    /// Create a release version. Its display text is `major.minor.patch`.
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            prerelease: None,
            build: None,
            original: format!("{}.{}.{}", major, minor, patch),
        }
    }

    /// Callers must have validated every part against the grammar.
    pub(crate) fn from_parts(
        major: u64,
        minor: u64,
        patch: u64,
        prerelease: Option<String>,
        build: Option<String>,
        original: String,
    ) -> Self {
        Version {
            major,
            minor,
            patch,
            prerelease,
            build,
            original,
        }
    }

    /// Parse a version string, see [`VersionParser::parse`].
    pub fn parse(version: &str) -> Result<Self, SemverError> {
        VersionParser::new().parse(version)
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// The raw prerelease segment without the leading `-`
    pub fn prerelease(&self) -> Option<&str> {
        self.prerelease.as_deref()
    }

    /// The raw build segment without the leading `+`
    pub fn build(&self) -> Option<&str> {
        self.build.as_deref()
    }

    /// The trimmed text this version was parsed from
    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn is_prerelease(&self) -> bool {
        self.prerelease.is_some()
    }

    pub fn has_build(&self) -> bool {
        self.build.is_some()
    }

    /// Dot-separated prerelease identifiers, empty for a release
    pub fn pre_identifiers(&self) -> impl Iterator<Item = &str> {
        self.prerelease.as_deref().into_iter().flat_map(|p| p.split('.'))
    }

    /// Dot-separated build identifiers, empty without build metadata
    pub fn build_identifiers(&self) -> impl Iterator<Item = &str> {
        self.build.as_deref().into_iter().flat_map(|b| b.split('.'))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

impl FromStr for Version {
    type Err = SemverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

impl TryFrom<&str> for Version {
    type Error = SemverError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Version::parse(value)
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.major == other.major
            && self.minor == other.minor
            && self.patch == other.patch
            && self.prerelease == other.prerelease
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.major.hash(state);
        self.minor.hash(state);
        self.patch.hash(state);
        self.prerelease.hash(state);
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        Comparator::compare(self, other)
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use std::fmt;

    use serde::de::{self, Deserialize, Deserializer, Visitor};
    use serde::ser::{Serialize, Serializer};

    use super::Version;

    impl Serialize for Version {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.collect_str(self)
        }
    }

    impl<'de> Deserialize<'de> for Version {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            struct VersionVisitor;

            impl<'de> Visitor<'de> for VersionVisitor {
                type Value = Version;

                fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                    formatter.write_str("a SemVer 2.0.0 version string")
                }

                fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
                where
                    E: de::Error,
                {
                    Version::parse(v).map_err(de::Error::custom)
                }
            }

            deserializer.deserialize_str(VersionVisitor)
        }
    }
}
